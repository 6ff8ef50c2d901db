//! Icon tab: preview of the app icon and the export action

use super::{App, ExportStatus};
use crate::constants::ICON_SIZE;
use crate::export;
use crate::icon::IconComposition;
use crate::raster;
use crate::theme;
use eframe::egui;
use tracing::{error, info, warn};

/// Preview raster size; the preview is downscaled by egui from here.
const PREVIEW_RASTER: u32 = 512;

impl App {
    /// Rasterize the composition once and keep the texture.
    fn preview_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        if self.icon_texture.is_none() && self.icon_error.is_none() {
            let scene = IconComposition::scene(&self.palette);
            match raster::rasterize(&scene, PREVIEW_RASTER) {
                Ok((rgba, w, h)) => {
                    let image =
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba);
                    self.icon_texture =
                        Some(ctx.load_texture("app-icon", image, egui::TextureOptions::LINEAR));
                }
                Err(e) => {
                    warn!(error = %e, "Failed to rasterize icon preview");
                    self.icon_error = Some(e.to_string());
                }
            }
        }
        self.icon_texture.clone()
    }

    fn run_export(&mut self) {
        match export::export_icons(&self.palette, &self.export_dir, self.include_extended_sizes) {
            Ok(written) => {
                info!(
                    count = written.len(),
                    dir = %self.export_dir.display(),
                    "Icon export finished"
                );
                self.export_status = Some(ExportStatus::Done {
                    count: written.len(),
                    dir: self.export_dir.clone(),
                });
            }
            Err(e) => {
                error!(error = %e, "Icon export failed");
                self.export_status = Some(ExportStatus::Failed(e.to_string()));
            }
        }
    }

    pub(crate) fn icon_tab(&mut self, ui: &mut egui::Ui) {
        let texture = self.preview_texture(ui.ctx());

        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            match (&texture, &self.icon_error) {
                (Some(tex), _) => {
                    let side = theme::ICON_PREVIEW_SIZE;
                    ui.add(egui::Image::new(tex).fit_to_exact_size(egui::vec2(side, side)));
                }
                (None, Some(err)) => {
                    ui.colored_label(theme::STATUS_ERROR, format!("Preview unavailable: {}", err));
                }
                (None, None) => {
                    ui.spinner();
                }
            }
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(format!("{0}×{0} canvas", ICON_SIZE as u32))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_SECONDARY),
            );
        });

        ui.add_space(theme::SPACING_XL);

        theme::card_frame().show(ui, |ui| {
            ui.label(egui::RichText::new("Export").size(theme::FONT_TITLE).strong());
            ui.add_space(theme::SPACING_SM);

            ui.horizontal(|ui| {
                ui.label(egui_phosphor::regular::FOLDER);
                ui.label(self.export_dir.display().to_string());
                if ui.add(theme::button("Choose…")).clicked() {
                    std::fs::create_dir_all(&self.export_dir).ok();
                    if let Some(path) = rfd::FileDialog::new()
                        .set_directory(&self.export_dir)
                        .pick_folder()
                    {
                        self.export_dir = path;
                        self.save_settings();
                    }
                }
                if ui
                    .add(egui::Button::new(egui_phosphor::regular::FOLDER_OPEN).frame(false))
                    .on_hover_text("Open export folder")
                    .clicked()
                {
                    if let Err(e) = open::that(&self.export_dir) {
                        warn!(
                            error = %e,
                            dir = %self.export_dir.display(),
                            "Failed to open export folder"
                        );
                    }
                }
            });

            if ui
                .checkbox(&mut self.include_extended_sizes, "Include extended iOS sizes")
                .changed()
            {
                self.save_settings();
            }
            let sizes = export::export_sizes(self.include_extended_sizes).len();

            ui.add_space(theme::SPACING_MD);
            if ui
                .add(theme::button_primary(format!(
                    "{}  Export {} icons",
                    egui_phosphor::regular::EXPORT,
                    sizes
                )))
                .clicked()
            {
                self.run_export();
            }

            match &self.export_status {
                Some(ExportStatus::Done { count, dir }) => {
                    ui.colored_label(
                        theme::STATUS_SUCCESS,
                        format!(
                            "{} Wrote {} icons to {}",
                            egui_phosphor::regular::CHECK,
                            count,
                            dir.display()
                        ),
                    );
                }
                Some(ExportStatus::Failed(msg)) => {
                    ui.colored_label(theme::STATUS_ERROR, msg);
                }
                None => {}
            }
        });
    }
}
