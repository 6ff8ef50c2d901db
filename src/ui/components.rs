//! Reusable UI components

use crate::location_display::{ActionButton, DetailsPanel};
use crate::theme;
use eframe::egui;

/// Format a coordinate pair with hemisphere letters, e.g. "40.78509° N, 73.96821° W"
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let ns = if latitude < 0.0 { 'S' } else { 'N' };
    let ew = if longitude < 0.0 { 'W' } else { 'E' };
    format!("{:.5}° {}, {:.5}° {}", latitude.abs(), ns, longitude.abs(), ew)
}

/// Name over address
pub fn details_panel(ui: &mut egui::Ui, details: &DetailsPanel) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(&details.title)
                .size(theme::FONT_HEADING)
                .strong()
                .color(details.title_color),
        )
        .selectable(false),
    );
    ui.add(
        egui::Label::new(
            egui::RichText::new(&details.subtitle)
                .size(theme::FONT_BODY)
                .color(details.subtitle_color),
        )
        .selectable(false),
    );
}

/// Full-width custom-painted action button with icon and label
pub fn action_button(ui: &mut egui::Ui, action: &ActionButton) -> egui::Response {
    let width = if action.full_width {
        ui.available_width()
    } else {
        ui.available_width().min(220.0)
    };
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(width, theme::BUTTON_HEIGHT_LARGE),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, action.background, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, action.corner_radius, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}  {}", action.icon, action.label),
            egui::FontId::proportional(theme::FONT_BODY + 1.0),
            action.foreground,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Tab header button; returns true when clicked
pub fn tab_button(ui: &mut egui::Ui, icon: &str, label: &str, selected: bool) -> bool {
    let text = egui::RichText::new(format!("{}  {}", icon, label)).size(theme::FONT_LABEL);
    let text = if selected { text.strong() } else { text };
    let fill = if selected {
        theme::Palette::PLAYDATES.accent
    } else {
        egui::Color32::TRANSPARENT
    };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .corner_radius(theme::RADIUS_LARGE)
            .min_size(egui::vec2(0.0, theme::TAB_HEIGHT)),
    )
    .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_use_hemispheres() {
        assert_eq!(
            format_coordinates(40.785091, -73.968211),
            "40.78509° N, 73.96821° W"
        );
        assert_eq!(format_coordinates(-33.8568, 151.2153), "33.85680° S, 151.21530° E");
    }
}
