//! Location tab: map, details, "Open in Maps", and the location editor

use super::App;
use crate::location::Location;
use crate::navigation::MapsProvider;
use crate::theme;
use crate::ui::components::{action_button, details_panel, format_coordinates};
use crate::ui::map_view::map_area;
use eframe::egui;
use tracing::debug;

/// Editable text form of a location
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDraft {
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
}

impl LocationDraft {
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            address: location.address.clone(),
            latitude: location.latitude.to_string(),
            longitude: location.longitude.to_string(),
        }
    }

    /// Only checks that the coordinates are numbers; range checks belong to
    /// whoever supplies the location.
    pub fn parse(&self) -> Result<Location, String> {
        let latitude: f64 = self
            .latitude
            .trim()
            .parse()
            .map_err(|_| format!("Latitude \"{}\" is not a number", self.latitude.trim()))?;
        let longitude: f64 = self
            .longitude
            .trim()
            .parse()
            .map_err(|_| format!("Longitude \"{}\" is not a number", self.longitude.trim()))?;
        Ok(Location::new(self.name.trim(), self.address.trim(), latitude, longitude))
    }
}

impl App {
    pub(crate) fn location_tab(&mut self, ui: &mut egui::Ui) {
        let view = self.display.render(&self.palette);

        if let Some(viewport) = map_area(ui, &view.map) {
            debug!(?viewport, "Viewport changed by user");
            self.display.on_viewport_changed(viewport);
            ui.ctx().request_repaint();
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            ui.vertical(|ui| details_panel(ui, &view.details));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                let loc = self.display.location();
                ui.label(
                    egui::RichText::new(format_coordinates(loc.latitude, loc.longitude))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_SECONDARY),
                );
            });
        });
        ui.add_space(theme::SPACING_MD);

        if action_button(ui, &view.action).clicked() {
            self.display.open_in_maps();
        }

        ui.add_space(theme::SPACING_XL);
        let header = format!("{}  Location & provider", egui_phosphor::regular::GEAR);
        egui::CollapsingHeader::new(header)
            .default_open(false)
            .show(ui, |ui| self.location_settings(ui));
    }

    fn location_settings(&mut self, ui: &mut egui::Ui) {
        theme::section_frame().show(ui, |ui| {
            egui::Grid::new("location_form")
                .num_columns(2)
                .spacing([theme::SPACING_LG, theme::SPACING_SM])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut self.draft.name);
                    ui.end_row();
                    ui.label("Address");
                    ui.text_edit_singleline(&mut self.draft.address);
                    ui.end_row();
                    ui.label("Latitude");
                    ui.text_edit_singleline(&mut self.draft.latitude);
                    ui.end_row();
                    ui.label("Longitude");
                    ui.text_edit_singleline(&mut self.draft.longitude);
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                if ui.add(theme::button_primary("Show location")).clicked() {
                    match self.draft.parse() {
                        Ok(location) => {
                            self.draft_error = None;
                            self.set_location(location);
                        }
                        Err(e) => self.draft_error = Some(e),
                    }
                }
                if ui.add(theme::button("Revert")).clicked() {
                    self.draft = LocationDraft::from_location(self.display.location());
                    self.draft_error = None;
                }
            });
            if let Some(err) = &self.draft_error {
                ui.colored_label(theme::STATUS_ERROR, err);
            }

            ui.add_space(theme::SPACING_MD);
            let mut provider = self.maps_provider;
            egui::ComboBox::from_label("Directions open in")
                .selected_text(provider.display_name())
                .show_ui(ui, |ui| {
                    for p in MapsProvider::ALL {
                        ui.selectable_value(&mut provider, p, p.display_name());
                    }
                });
            self.set_maps_provider(provider);
        });
    }
}
