//! Map area widget
//!
//! Draws a graticule for the current viewport and the markers on top of it.
//! Drag pans and the scroll wheel zooms around the pointer; the widget never
//! mutates the viewport itself, it returns the viewport the gesture asks for.

use crate::location::MapViewport;
use crate::location_display::MapArea;
use crate::theme;
use eframe::egui;

const SCROLL_ZOOM_SPEED: f64 = 0.002;

pub fn map_area(ui: &mut egui::Ui, area: &MapArea) -> Option<MapViewport> {
    let size = egui::vec2(ui.available_width(), theme::MAP_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let vp = area.viewport;

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, theme::RADIUS_LARGE, theme::BG_MAP);
    paint_graticule(&painter, rect, &vp);

    for marker in &area.markers {
        let (fx, fy) = vp.project(marker.latitude, marker.longitude);
        let pos = rect.min + egui::vec2(fx as f32 * rect.width(), fy as f32 * rect.height());
        if !rect.expand(theme::MARKER_RADIUS).contains(pos) {
            continue;
        }
        painter.circle_filled(
            pos + egui::vec2(0.0, 2.0),
            theme::MARKER_RADIUS,
            egui::Color32::from_black_alpha(40),
        );
        painter.circle(
            pos,
            theme::MARKER_RADIUS,
            marker.tint,
            egui::Stroke::new(2.5, egui::Color32::WHITE),
        );
        painter.text(
            pos - egui::vec2(0.0, theme::MARKER_RADIUS + 10.0),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::MAP_PIN,
            egui::FontId::proportional(18.0),
            marker.tint,
        );
    }

    painter.rect_stroke(
        rect,
        theme::RADIUS_LARGE,
        egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        egui::StrokeKind::Inside,
    );

    if response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            let d_lon = -(delta.x / rect.width()) as f64 * vp.span_longitude;
            let d_lat = (delta.y / rect.height()) as f64 * vp.span_latitude;
            return Some(vp.panned(d_lat, d_lon));
        }
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if let Some(hover_pos) = ui.input(|i| i.pointer.hover_pos()) {
        if scroll != 0.0 && rect.contains(hover_pos) {
            let rel = hover_pos - rect.min;
            let (focus_lat, focus_lon) =
                vp.unproject((rel.x / rect.width()) as f64, (rel.y / rect.height()) as f64);
            let factor = (-(scroll as f64) * SCROLL_ZOOM_SPEED).exp();
            return Some(vp.zoomed(factor, focus_lat, focus_lon));
        }
    }

    None
}

/// Grid step in degrees: a power of ten giving a handful of lines per view.
pub fn grid_step(span: f64) -> f64 {
    10f64.powf((span / 4.0).log10().floor())
}

/// Grid line positions across `[low, low + span]` as fractions of the span.
/// Empty when the range is not finite; at most a few more lines than
/// `span / step`, even where adding `step` no longer changes the value.
pub fn grid_lines(low: f64, span: f64) -> Vec<f64> {
    if !low.is_finite() || !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let step = grid_step(span);
    let first = (low / step).ceil();
    let max_lines = (span / step).ceil() as usize + 2;
    (0..max_lines)
        .map(|i| ((first + i as f64) * step - low) / span)
        .take_while(|f| *f <= 1.0)
        .filter(|f| *f >= 0.0)
        .collect()
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, vp: &MapViewport) {
    let stroke = egui::Stroke::new(1.0, theme::MAP_GRID);

    let west = vp.center_longitude - vp.span_longitude / 2.0;
    for f in grid_lines(west, vp.span_longitude) {
        painter.vline(rect.min.x + f as f32 * rect.width(), rect.y_range(), stroke);
    }

    // Latitude grows upwards, screen y downwards
    let south = vp.center_latitude - vp.span_latitude / 2.0;
    for f in grid_lines(south, vp.span_latitude) {
        painter.hline(rect.x_range(), rect.max.y - f as f32 * rect.height(), stroke);
    }
}
