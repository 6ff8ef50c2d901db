//! App module - contains the main application state and logic

mod icon_tab;
mod location_tab;

pub use location_tab::LocationDraft;

use crate::location::Location;
use crate::location_display::LocationDisplay;
use crate::navigation::{MapsProvider, SystemMapsLauncher};
use crate::settings::{Settings, Tab};
use crate::theme::{self, Palette};
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

/// Outcome of the last export run, shown under the export button
pub enum ExportStatus {
    Done { count: usize, dir: PathBuf },
    Failed(String),
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) palette: Palette,
    pub(crate) tab: Tab,
    // Icon tab
    pub(crate) icon_texture: Option<egui::TextureHandle>,
    pub(crate) icon_error: Option<String>,
    pub(crate) export_dir: PathBuf,
    pub(crate) include_extended_sizes: bool,
    pub(crate) export_status: Option<ExportStatus>,
    // Location tab
    pub(crate) display: LocationDisplay<SystemMapsLauncher>,
    pub(crate) maps_provider: MapsProvider,
    pub(crate) draft: LocationDraft,
    pub(crate) draft_error: Option<String>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Phosphor icons as a fallback of the default proportional font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let export_dir = settings.export_dir_or_default(&data_dir);
        let location = settings.location.clone();

        Self {
            palette: Palette::PLAYDATES,
            tab: settings.last_tab,
            icon_texture: None,
            icon_error: None,
            export_dir,
            include_extended_sizes: settings.include_extended_sizes,
            export_status: None,
            display: LocationDisplay::new(
                location.clone(),
                SystemMapsLauncher::new(settings.maps_provider),
            ),
            maps_provider: settings.maps_provider,
            draft: LocationDraft::from_location(&location),
            draft_error: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Rebuild the location display; the viewport starts over on the new location.
    pub(crate) fn set_location(&mut self, location: Location) {
        info!(
            name = %location.name,
            latitude = location.latitude,
            longitude = location.longitude,
            "Location changed"
        );
        self.draft = LocationDraft::from_location(&location);
        self.display = LocationDisplay::new(location, SystemMapsLauncher::new(self.maps_provider));
        self.save_settings();
    }

    pub(crate) fn set_maps_provider(&mut self, provider: MapsProvider) {
        if provider == self.maps_provider {
            return;
        }
        self.maps_provider = provider;
        let location = self.display.location().clone();
        let viewport = *self.display.viewport();
        self.display = LocationDisplay::new(location, SystemMapsLauncher::new(provider));
        // Same location, so the user's pan/zoom carries over.
        self.display.on_viewport_changed(viewport);
        self.save_settings();
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            maps_provider: self.maps_provider,
            export_dir: Some(self.export_dir.to_string_lossy().to_string()),
            include_extended_sizes: self.include_extended_sizes,
            last_tab: self.tab,
            location: self.display.location().clone(),
        };
        settings.save(&self.data_dir);
    }
}
