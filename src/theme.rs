//! Centralized theme for Playdates Kit
//! The palette is the single source of named colors; widgets and the icon
//! composition both resolve colors through it.

use egui::Color32;

// =============================================================================
// PALETTE - Named colors
// =============================================================================

/// Key into the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Primary,
    Secondary,
    Accent,
    Highlight,
    DarkPurple,
    LightText,
}

impl ThemeColor {
    /// Palette key name, also used as the SVG class of shapes painted with it.
    pub fn key(self) -> &'static str {
        match self {
            ThemeColor::Primary => "primary",
            ThemeColor::Secondary => "secondary",
            ThemeColor::Accent => "accent",
            ThemeColor::Highlight => "highlight",
            ThemeColor::DarkPurple => "darkPurple",
            ThemeColor::LightText => "lightText",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub accent: Color32,
    pub highlight: Color32,
    pub dark_purple: Color32,
    pub light_text: Color32,
}

impl Palette {
    pub const PLAYDATES: Palette = Palette {
        primary: Color32::from_rgb(0x91, 0xdd, 0xcf),     // mint green
        secondary: Color32::from_rgb(0xf7, 0xf9, 0xf2),   // off-white
        accent: Color32::from_rgb(0xe8, 0xc5, 0xe5),      // soft lavender
        highlight: Color32::from_rgb(0xf1, 0x9e, 0xd2),   // pink
        dark_purple: Color32::from_rgb(0x5d, 0x4e, 0x6d), // body text
        light_text: Color32::from_rgb(0xa3, 0x9b, 0xae),  // muted captions
    };

    pub fn get(&self, color: ThemeColor) -> Color32 {
        match color {
            ThemeColor::Primary => self.primary,
            ThemeColor::Secondary => self.secondary,
            ThemeColor::Accent => self.accent,
            ThemeColor::Highlight => self.highlight,
            ThemeColor::DarkPurple => self.dark_purple,
            ThemeColor::LightText => self.light_text,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::PLAYDATES
    }
}

// =============================================================================
// COLORS - Chrome (derived from the palette)
// =============================================================================
pub const BG_BASE: Color32 = Palette::PLAYDATES.secondary;
pub const BG_ELEVATED: Color32 = Color32::WHITE;
pub const BG_MAP: Color32 = Color32::from_rgb(0xe9, 0xf1, 0xec);
pub const MAP_GRID: Color32 = Color32::from_rgb(0xd3, 0xe2, 0xdb);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe2, 0xe0, 0xe6);
pub const TEXT_PRIMARY: Color32 = Palette::PLAYDATES.dark_purple;
pub const TEXT_SECONDARY: Color32 = Palette::PLAYDATES.light_text;
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x2f, 0x9e, 0x7a);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xd9, 0x4f, 0x70);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// SIZES
// =============================================================================
pub const MAP_HEIGHT: f32 = 320.0;
pub const MARKER_RADIUS: f32 = 9.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 44.0;
pub const ICON_PREVIEW_SIZE: f32 = 384.0;
pub const TAB_HEIGHT: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_ACTION: f32 = 10.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let palette = Palette::PLAYDATES;
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_ELEVATED,
        faint_bg_color: BG_BASE,
        hyperlink_color: palette.dark_purple,
        override_text_color: Some(TEXT_PRIMARY),
        selection: egui::style::Selection {
            bg_fill: palette.accent,
            stroke: egui::Stroke::new(1.0, palette.dark_purple),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_BASE,
                bg_stroke: egui::Stroke::new(1.0, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(1.0, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: lighten(palette.primary, 0.6),
                weak_bg_fill: lighten(palette.primary, 0.6),
                bg_stroke: egui::Stroke::new(1.0, palette.primary),
                fg_stroke: egui::Stroke::new(1.5, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: lighten(palette.primary, 0.4),
                weak_bg_fill: lighten(palette.primary, 0.4),
                bg_stroke: egui::Stroke::new(1.0, palette.primary),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_BASE,
                bg_stroke: egui::Stroke::new(1.0, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(1.0, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(12))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BG_ELEVATED)
        .corner_radius(RADIUS_DEFAULT)
}

/// Primary-colored button for the main action of a panel
pub fn button_primary(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::WHITE))
        .fill(Palette::PLAYDATES.primary)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_resolves_every_named_color() {
        let palette = Palette::PLAYDATES;
        let expected = [
            (ThemeColor::Primary, "primary", Color32::from_rgb(0x91, 0xdd, 0xcf)),
            (ThemeColor::Secondary, "secondary", Color32::from_rgb(0xf7, 0xf9, 0xf2)),
            (ThemeColor::Accent, "accent", Color32::from_rgb(0xe8, 0xc5, 0xe5)),
            (ThemeColor::Highlight, "highlight", Color32::from_rgb(0xf1, 0x9e, 0xd2)),
            (ThemeColor::DarkPurple, "darkPurple", Color32::from_rgb(0x5d, 0x4e, 0x6d)),
            (ThemeColor::LightText, "lightText", Color32::from_rgb(0xa3, 0x9b, 0xae)),
        ];
        for (color, key, rgb) in expected {
            assert_eq!(color.key(), key);
            assert_eq!(palette.get(color), rgb);
        }
        assert_eq!(palette.get(ThemeColor::DarkPurple), TEXT_PRIMARY);
    }

    #[test]
    fn lighten_moves_toward_white() {
        let c = lighten(Color32::from_rgb(0, 100, 200), 0.5);
        assert_eq!(c, Color32::from_rgb(127, 177, 227));
        assert_eq!(lighten(Color32::WHITE, 0.3), Color32::WHITE);
    }
}
