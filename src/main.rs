#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! Playdates Kit - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod export;
mod icon;
mod location;
mod location_display;
mod navigation;
mod raster;
mod scene;
mod settings;
mod theme;
mod ui;

use anyhow::Context as _;
use app::App;
use constants::*;
use eframe::egui;
use settings::{Settings, Tab};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const USAGE: &str = "\
Playdates Kit

USAGE:
    playdates-kit                      Open the icon and location window
    playdates-kit --export [DIR]       Write the app icon PNGs to DIR
                                       (default: the configured export folder)

OPTIONS:
    --core-sizes-only                  Export only 1024, 180, 120, 167, 152, 76
    -h, --help                         Print this help
";

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &Path, to_stderr: bool) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "playdates-kit.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,playdates_kit=debug"));

    // Headless runs also report to the terminal
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(stderr_layer)
        .init();

    guard
}

struct Cli {
    export: bool,
    export_dir: Option<PathBuf>,
    core_sizes_only: bool,
}

fn parse_cli() -> anyhow::Result<Option<Cli>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", USAGE);
        return Ok(None);
    }
    let export = args.contains("--export");
    let core_sizes_only = args.contains("--core-sizes-only");
    let export_dir = args
        .opt_free_from_str::<PathBuf>()
        .context("invalid export directory")?;
    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {:?}\n\n{}", rest, USAGE);
    }
    Ok(Some(Cli { export, export_dir, core_sizes_only }))
}

fn main() -> anyhow::Result<()> {
    let Some(cli) = parse_cli()? else {
        return Ok(());
    };

    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_TITLE);
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir, cli.export);

    info!(version = APP_VERSION, "Playdates Kit starting");

    let settings = Settings::load(&data_dir);

    if cli.export {
        return run_export(&cli, &settings, &data_dir);
    }

    run_gui(settings, data_dir).map_err(|e| anyhow::anyhow!("failed to run the window: {e}"))
}

fn run_export(cli: &Cli, settings: &Settings, data_dir: &Path) -> anyhow::Result<()> {
    let out_dir = cli
        .export_dir
        .clone()
        .unwrap_or_else(|| settings.export_dir_or_default(data_dir));
    let include_extended = settings.export_extended_sizes(cli.core_sizes_only);

    let written = export::export_icons(&theme::Palette::PLAYDATES, &out_dir, include_extended)
        .with_context(|| format!("icon export to {} failed", out_dir.display()))?;
    info!(count = written.len(), dir = %out_dir.display(), "App icons generated");
    Ok(())
}

fn run_gui(settings: Settings, data_dir: PathBuf) -> eframe::Result<()> {
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(560.0, 780.0)))
        .with_min_inner_size([420.0, 560.0])
        .with_title(APP_TITLE);

    // Window/taskbar icon is the app icon itself
    let scene = icon::IconComposition::scene(&theme::Palette::PLAYDATES);
    match raster::rasterize(&scene, WINDOW_ICON_SIZE) {
        Ok((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        Err(e) => warn!(error = %e, "Failed to render window icon"),
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        egui::TopBottomPanel::top("tabs")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(16, 8))
                    .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(APP_NAME)
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(self.palette.dark_purple),
                    );
                    ui.add_space(theme::SPACING_LG);

                    let tabs = [
                        (Tab::Icon, egui_phosphor::regular::IMAGE_SQUARE, "App icon"),
                        (Tab::Location, egui_phosphor::regular::MAP_TRIFOLD, "Location"),
                    ];
                    for (tab, icon, label) in tabs {
                        if crate::ui::components::tab_button(ui, icon, label, self.tab == tab)
                            && self.tab != tab
                        {
                            self.tab = tab;
                            self.save_settings();
                        }
                    }
                });
            });

        // Central panel (MUST be added LAST after all side/top/bottom panels)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| match self.tab {
                Tab::Icon => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| self.icon_tab(ui));
                }
                // No scroll area: the wheel zooms the map
                Tab::Location => self.location_tab(ui),
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
