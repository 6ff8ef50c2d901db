//! Location display: a map centered on one place, its details, and an
//! "Open in Maps" action.
//!
//! The component owns the viewport and the navigation launcher. Rendering is
//! a pure function of that state and produces a [`LocationView`] that the
//! egui layer paints. The viewport changes only through
//! [`LocationDisplay::on_viewport_changed`]; opening directions always uses
//! the location given at construction.

use crate::constants::OPEN_IN_MAPS_LABEL;
use crate::location::{Location, MapViewport};
use crate::navigation::{NavigationLauncher, NavigationRequest};
use crate::theme::{self, Palette, ThemeColor};
use egui::Color32;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub tint: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapArea {
    pub viewport: MapViewport,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanel {
    pub title: String,
    pub subtitle: String,
    pub title_color: Color32,
    pub subtitle_color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub label: &'static str,
    pub icon: &'static str,
    pub background: Color32,
    pub foreground: Color32,
    pub corner_radius: f32,
    pub full_width: bool,
}

/// Top-to-bottom content of the display.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationView {
    pub map: MapArea,
    pub details: DetailsPanel,
    pub action: ActionButton,
}

pub struct LocationDisplay<L: NavigationLauncher> {
    location: Location,
    viewport: MapViewport,
    launcher: L,
}

impl<L: NavigationLauncher> LocationDisplay<L> {
    pub fn new(location: Location, launcher: L) -> Self {
        let viewport = MapViewport::centered_on(&location);
        debug!(name = %location.name, ?viewport, "Location display created");
        Self { location, viewport, launcher }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    #[cfg(test)]
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// The user panned or zoomed the map.
    pub fn on_viewport_changed(&mut self, viewport: MapViewport) {
        self.viewport = viewport;
    }

    pub fn render(&self, palette: &Palette) -> LocationView {
        LocationView {
            map: MapArea {
                viewport: self.viewport,
                markers: vec![Marker {
                    latitude: self.location.latitude,
                    longitude: self.location.longitude,
                    tint: palette.get(ThemeColor::Primary),
                }],
            },
            details: DetailsPanel {
                title: self.location.name.clone(),
                subtitle: self.location.address.clone(),
                title_color: palette.get(ThemeColor::DarkPurple),
                subtitle_color: palette.get(ThemeColor::LightText),
            },
            action: ActionButton {
                label: OPEN_IN_MAPS_LABEL,
                icon: egui_phosphor::regular::MAP_TRIFOLD,
                background: palette.get(ThemeColor::Primary),
                foreground: Color32::WHITE,
                corner_radius: theme::RADIUS_ACTION,
                full_width: true,
            },
        }
    }

    /// Hands a driving-directions request to the launcher. Launcher
    /// failures never come back here.
    pub fn open_in_maps(&self) {
        let request = NavigationRequest::driving_to(&self.location);
        self.launcher.launch(&request);
    }
}
