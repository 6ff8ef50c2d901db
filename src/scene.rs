//! Backend-independent scene graph
//!
//! A `Scene` is plain data: what to draw, in logical units, with colors
//! already resolved from the palette. `raster` turns it into pixels and
//! the egui preview paints the rasterized result.

use crate::theme::ThemeColor;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A palette color with an opacity. The role is kept next to the resolved
/// color so callers can reason about which named color a node uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub role: ThemeColor,
    pub color: Color32,
    pub opacity: f32,
}

impl Paint {
    pub fn opaque(role: ThemeColor, color: Color32) -> Self {
        Self { role, color, opacity: 1.0 }
    }

    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Fills the whole canvas with a linear gradient between two points
    /// given in unit coordinates (0..1 on both axes).
    LinearGradient {
        from: Point,
        to: Point,
        start: Paint,
        end: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Paint,
    },
    /// Rounded rectangle whose corner radius is half its height.
    Capsule {
        center: Point,
        size: Size,
        fill: Paint,
    },
    /// Horizontally centered on `anchor.x`; `anchor.y` is the baseline.
    Text {
        anchor: Point,
        content: String,
        font_size: f32,
        bold: bool,
        rounded: bool,
        fill: Paint,
    },
}

#[cfg(test)]
impl Node {
    pub fn paints(&self) -> Vec<Paint> {
        match self {
            Node::LinearGradient { start, end, .. } => vec![*start, *end],
            Node::Circle { fill, .. } | Node::Capsule { fill, .. } | Node::Text { fill, .. } => {
                vec![*fill]
            }
        }
    }
}

/// Square-or-rectangular canvas clipped to a rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Size,
    pub corner_radius: f32,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: f32, height: f32, corner_radius: f32) -> Self {
        Self {
            size: Size { width, height },
            corner_radius,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

#[cfg(test)]
impl Scene {
    /// Every paint used by any node, in draw order.
    pub fn paints(&self) -> Vec<Paint> {
        self.nodes.iter().flat_map(Node::paints).collect()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_follow_draw_order() {
        let mint = Paint::opaque(ThemeColor::Primary, Color32::from_rgb(1, 2, 3));
        let pink = Paint::opaque(ThemeColor::Highlight, Color32::from_rgb(4, 5, 6));
        let mut scene = Scene::new(10.0, 10.0, 2.0);
        scene.push(Node::LinearGradient {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            start: mint,
            end: mint.with_opacity(0.5),
        });
        scene.push(Node::Circle { center: Point::new(5.0, 5.0), radius: 1.0, fill: pink });

        let paints = scene.paints();
        assert_eq!(paints.len(), 3);
        assert_eq!(paints[1].opacity, 0.5);
        assert_eq!(paints[2].role, ThemeColor::Highlight);
        assert_eq!(scene.texts().count(), 0);
    }
}
