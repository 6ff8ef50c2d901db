//! Scene rasterization through SVG and resvg

use crate::scene::{Node, Paint, Scene};
use resvg::usvg::fontdb;
use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};
use tracing::debug;

const ROUNDED_FONTS: &str =
    "'SF Pro Rounded', 'Arial Rounded MT Bold', 'Nunito', 'Varela Round', sans-serif";
const DEFAULT_FONTS: &str = "'Helvetica Neue', 'Arial', sans-serif";
const MAX_RASTER_SIZE: u32 = 8192;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("invalid SVG document: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("cannot allocate a {0}x{0} pixmap")]
    Allocation(u32),
}

/// Serialize a scene as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let (w, h) = (scene.size.width, scene.size.height);
    let mut defs = String::new();
    let mut body = String::new();

    let _ = write!(
        defs,
        r#"<clipPath id="canvas"><rect width="{w}" height="{h}" rx="{r}" ry="{r}"/></clipPath>"#,
        r = scene.corner_radius
    );

    for (idx, node) in scene.nodes.iter().enumerate() {
        match node {
            Node::LinearGradient { from, to, start, end } => {
                let id = format!("gradient{idx}");
                let _ = write!(
                    defs,
                    r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0" stop-color="{}" stop-opacity="{}"/><stop offset="1" stop-color="{}" stop-opacity="{}"/></linearGradient>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    hex(start),
                    start.opacity,
                    hex(end),
                    end.opacity,
                );
                let _ = write!(body, r#"<rect width="{w}" height="{h}" fill="url(#{id})"/>"#);
            }
            Node::Circle { center, radius, fill } => {
                let _ = write!(
                    body,
                    r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                    center.x,
                    center.y,
                    radius,
                    fill_attrs(fill)
                );
            }
            Node::Capsule { center, size, fill } => {
                let _ = write!(
                    body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" {}/>"#,
                    center.x - size.width / 2.0,
                    center.y - size.height / 2.0,
                    size.width,
                    size.height,
                    fill_attrs(fill),
                    r = size.height / 2.0,
                );
            }
            Node::Text { anchor, content, font_size, bold, rounded, fill } => {
                let weight = if *bold { "bold" } else { "normal" };
                let family = if *rounded { ROUNDED_FONTS } else { DEFAULT_FONTS };
                let _ = write!(
                    body,
                    r#"<text x="{}" y="{}" text-anchor="middle" font-family="{family}" font-size="{font_size}" font-weight="{weight}" {}>{}</text>"#,
                    anchor.x,
                    anchor.y,
                    fill_attrs(fill),
                    escape(content)
                );
            }
        }
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><defs>{defs}</defs><g clip-path="url(#canvas)">{body}</g></svg>"#
    )
}

/// Rasterize a scene to a square image, scaling the scene's width to `size`.
/// Returns straight-alpha RGBA bytes.
pub fn rasterize(scene: &Scene, size: u32) -> Result<(Vec<u8>, u32, u32), RasterError> {
    if size == 0 || size > MAX_RASTER_SIZE {
        return Err(RasterError::Allocation(size));
    }
    let mut options = resvg::usvg::Options::default();
    options.fontdb = system_fonts();
    let tree = resvg::usvg::Tree::from_str(&to_svg(scene), &options)?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(size, size).ok_or(RasterError::Allocation(size))?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok((premul_to_straight(&pixmap), size, size))
}

fn system_fonts() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            debug!(faces = db.len(), "System fonts loaded");
            Arc::new(db)
        })
        .clone()
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

fn hex(paint: &Paint) -> String {
    let c = paint.color;
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn fill_attrs(paint: &Paint) -> String {
    let class = paint.role.key();
    if paint.opacity < 1.0 {
        format!(r#"class="{class}" fill="{}" fill-opacity="{}""#, hex(paint), paint.opacity)
    } else {
        format!(r#"class="{class}" fill="{}""#, hex(paint))
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconComposition;
    use crate::theme::Palette;

    #[test]
    fn svg_carries_canvas_and_opacities() {
        let svg = to_svg(&IconComposition::scene(&Palette::PLAYDATES));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 1024 1024""#));
        assert!(svg.contains(r#"rx="220""#));
        assert!(svg.contains(r##"stop-color="#91ddcf" stop-opacity="0.8""##));
        assert_eq!(svg.matches(r#"fill-opacity="0.3""#).count(), 3);
        assert!(svg.contains(">Playdates</text>"));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r##"class="darkPurple" fill="#5d4e6d""##));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape(r#"Tom & "Jerry" <3"#), "Tom &amp; &quot;Jerry&quot; &lt;3");
    }

    #[test]
    fn rasterizes_to_requested_size_with_rounded_corners() {
        let scene = IconComposition::scene(&Palette::PLAYDATES);
        let (rgba, w, h) = rasterize(&scene, 64).expect("rasterize");
        assert_eq!((w, h), (64, 64));
        assert_eq!(rgba.len(), 64 * 64 * 4);

        let alpha = |x: usize, y: usize| rgba[(y * 64 + x) * 4 + 3];
        assert_eq!(alpha(0, 0), 0, "corner is clipped");
        assert_eq!(alpha(32, 32), 255, "center is opaque");
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let scene = IconComposition::scene(&Palette::PLAYDATES);
        assert!(matches!(rasterize(&scene, 0), Err(RasterError::Allocation(0))));
    }
}
