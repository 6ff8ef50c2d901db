//! App icon export: the static composition rendered once per asset size

use crate::constants::{CORE_ICON_SIZES, EXTENDED_ICON_SIZES, ICON_FILE_PREFIX};
use crate::icon::IconComposition;
use crate::raster::{self, RasterError};
use crate::theme::Palette;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to render {size}px icon: {source}")]
    Render { size: u32, source: RasterError },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A file produced by an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub size: u32,
    pub path: PathBuf,
}

pub fn icon_file_name(size: u32) -> String {
    format!("{}-{}.png", ICON_FILE_PREFIX, size)
}

pub fn export_sizes(include_extended: bool) -> Vec<u32> {
    let mut sizes = CORE_ICON_SIZES.to_vec();
    if include_extended {
        sizes.extend_from_slice(EXTENDED_ICON_SIZES);
    }
    sizes
}

/// Render the icon at every size into `out_dir`, creating it if needed.
/// Stops at the first failure; files already written are left in place.
pub fn export_icons(
    palette: &Palette,
    out_dir: &Path,
    include_extended: bool,
) -> Result<Vec<ExportedIcon>, ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let scene = IconComposition::scene(palette);
    let sizes = export_sizes(include_extended);
    debug!(count = sizes.len(), dir = %out_dir.display(), "Exporting icons");

    let mut written = Vec::with_capacity(sizes.len());
    for size in sizes {
        let (rgba, w, h) =
            raster::rasterize(&scene, size).map_err(|source| ExportError::Render { size, source })?;
        let path = out_dir.join(icon_file_name(size));
        image::save_buffer(&path, &rgba, w, h, image::ExtendedColorType::Rgba8)
            .map_err(|source| ExportError::Write { path: path.clone(), source })?;
        info!(size, path = %path.display(), "Icon written");
        written.push(ExportedIcon { size, path });
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_asset_convention() {
        assert_eq!(icon_file_name(1024), "playdates-icon-1024.png");
        assert_eq!(icon_file_name(76), "playdates-icon-76.png");
    }

    #[test]
    fn core_sizes_come_first() {
        assert_eq!(export_sizes(false), vec![1024, 180, 120, 167, 152, 76]);
        let all = export_sizes(true);
        assert_eq!(all.len(), 13);
        assert_eq!(&all[..6], CORE_ICON_SIZES);
    }

    #[test]
    fn writes_every_core_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("AppIcon.appiconset");
        let written = export_icons(&Palette::PLAYDATES, &out, false).expect("export");

        assert_eq!(written.len(), CORE_ICON_SIZES.len());
        for icon in &written {
            assert!(icon.path.exists(), "{} missing", icon.path.display());
            let img = image::open(&icon.path).expect("decode png");
            assert_eq!((img.width(), img.height()), (icon.size, icon.size));
        }
    }

    #[test]
    fn writes_extended_sizes_when_asked() {
        let dir = tempfile::tempdir().expect("tempdir");
        let written = export_icons(&Palette::PLAYDATES, dir.path(), true).expect("export");

        assert_eq!(written.len(), 13);
        for size in CORE_ICON_SIZES.iter().chain(EXTENDED_ICON_SIZES) {
            let path = dir.path().join(icon_file_name(*size));
            let img = image::open(&path).expect("decode png");
            assert_eq!((img.width(), img.height()), (*size, *size));
        }
        assert!(dir.path().join("playdates-icon-29.png").exists());
    }

    #[test]
    fn reports_unwritable_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a dir").expect("write");
        let err = export_icons(&Palette::PLAYDATES, &blocker.join("icons"), false).unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}
