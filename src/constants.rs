//! Application constants and configuration

pub const APP_NAME: &str = "Playdates";
pub const APP_TITLE: &str = "Playdates Kit";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Edge length of the icon canvas in logical units.
pub const ICON_SIZE: f32 = 1024.0;
/// Corner radius of the icon canvas (~21.5% of the edge).
pub const ICON_CORNER_RADIUS: f32 = 220.0;
/// Window/taskbar icon raster size.
pub const WINDOW_ICON_SIZE: u32 = 256;

/// Sizes the app-icon asset set always contains.
pub const CORE_ICON_SIZES: &[u32] = &[1024, 180, 120, 167, 152, 76];
/// Additional iOS sizes (settings, spotlight, notifications).
pub const EXTENDED_ICON_SIZES: &[u32] = &[40, 60, 58, 87, 80, 20, 29];
pub const ICON_FILE_PREFIX: &str = "playdates-icon";
pub const ICON_SET_DIR: &str = "AppIcon.appiconset";

/// Initial map span in degrees, both axes.
pub const DEFAULT_MAP_SPAN: f64 = 0.01;
pub const MIN_MAP_SPAN: f64 = 0.0005;
pub const MAX_MAP_SPAN: f64 = 90.0;
/// Web-mercator style latitude limit for the map center.
pub const MAX_CENTER_LATITUDE: f64 = 85.0;

pub const OPEN_IN_MAPS_LABEL: &str = "Open in Maps";
