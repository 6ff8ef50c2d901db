//! App icon composition: three faces on a mint gradient with the product name.
//!
//! Everything here is a fixed constant, so the composition is a static asset:
//! build the scene once, rasterize it once per size.

use crate::constants::{APP_NAME, ICON_CORNER_RADIUS, ICON_SIZE};
use crate::scene::{Node, Paint, Point, Scene, Size};
use crate::theme::{Palette, ThemeColor};

const CENTER_X: f32 = ICON_SIZE / 2.0;
const FIGURE_Y: f32 = 440.0;

const ADULT_DIAMETER: f32 = 300.0;
const CHILD_DIAMETER: f32 = 220.0;
const CHILD_SPACING: f32 = 210.0;
const CHILD_DROP: f32 = 10.0;

const GRADIENT_END_OPACITY: f32 = 0.8;
const DECORATION_OPACITY: f32 = 0.3;

const LABEL_FONT_SIZE: f32 = 120.0;
const LABEL_BOTTOM_PADDING: f32 = 130.0;

/// (center, diameter, color) of the corner decorations.
const DECORATIONS: [(Point, f32, ThemeColor); 3] = [
    (Point::new(190.0, 190.0), 80.0, ThemeColor::Accent),
    (Point::new(850.0, 200.0), 60.0, ThemeColor::Highlight),
    (Point::new(860.0, 860.0), 50.0, ThemeColor::Secondary),
];

pub struct IconComposition;

impl IconComposition {
    pub fn scene(palette: &Palette) -> Scene {
        let paint = |role: ThemeColor| Paint::opaque(role, palette.get(role));
        let mut scene = Scene::new(ICON_SIZE, ICON_SIZE, ICON_CORNER_RADIUS);

        scene.push(Node::LinearGradient {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            start: paint(ThemeColor::Primary),
            end: paint(ThemeColor::Primary).with_opacity(GRADIENT_END_OPACITY),
        });

        // Children first so the adult overlaps them.
        let children = [
            (-CHILD_SPACING, ThemeColor::Secondary),
            (CHILD_SPACING, ThemeColor::Accent),
        ];
        for (dx, role) in children {
            let center = Point::new(CENTER_X + dx, FIGURE_Y + CHILD_DROP);
            push_figure(
                &mut scene,
                center,
                CHILD_DIAMETER,
                paint(role),
                paint(ThemeColor::DarkPurple),
            );
        }
        push_figure(
            &mut scene,
            Point::new(CENTER_X, FIGURE_Y),
            ADULT_DIAMETER,
            paint(ThemeColor::Highlight),
            paint(ThemeColor::DarkPurple),
        );

        scene.push(Node::Text {
            anchor: Point::new(CENTER_X, ICON_SIZE - LABEL_BOTTOM_PADDING),
            content: APP_NAME.to_string(),
            font_size: LABEL_FONT_SIZE,
            bold: true,
            rounded: true,
            fill: paint(ThemeColor::DarkPurple),
        });

        for (center, diameter, role) in DECORATIONS {
            scene.push(Node::Circle {
                center,
                radius: diameter / 2.0,
                fill: paint(role).with_opacity(DECORATION_OPACITY),
            });
        }

        scene
    }
}

/// Head circle plus a face scaled to the head diameter.
fn push_figure(scene: &mut Scene, center: Point, diameter: f32, head: Paint, face: Paint) {
    scene.push(Node::Circle { center, radius: diameter / 2.0, fill: head });

    let eye_radius = diameter * 0.05;
    let eye_dx = diameter * 0.17;
    let eye_dy = -diameter * 0.08;
    for dx in [-eye_dx, eye_dx] {
        scene.push(Node::Circle {
            center: center.offset(dx, eye_dy),
            radius: eye_radius,
            fill: face,
        });
    }

    scene.push(Node::Capsule {
        center: center.offset(0.0, diameter * 0.17),
        size: Size { width: diameter * 0.3, height: diameter * 0.07 },
        fill: face,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn custom_palette() -> Palette {
        Palette {
            primary: Color32::from_rgb(10, 20, 30),
            secondary: Color32::from_rgb(40, 50, 60),
            accent: Color32::from_rgb(70, 80, 90),
            highlight: Color32::from_rgb(100, 110, 120),
            dark_purple: Color32::from_rgb(130, 140, 150),
            light_text: Color32::from_rgb(160, 170, 180),
        }
    }

    #[test]
    fn uses_exactly_the_five_icon_colors() {
        for palette in [Palette::PLAYDATES, custom_palette()] {
            let scene = IconComposition::scene(&palette);
            let allowed = [
                ThemeColor::Primary,
                ThemeColor::Secondary,
                ThemeColor::Accent,
                ThemeColor::Highlight,
                ThemeColor::DarkPurple,
            ];
            for paint in scene.paints() {
                assert!(allowed.contains(&paint.role), "unexpected role {:?}", paint.role);
                assert_eq!(paint.color, palette.get(paint.role));
            }
            for role in allowed {
                assert!(scene.paints().iter().any(|p| p.role == role), "missing {:?}", role);
            }
        }
    }

    #[test]
    fn opacities_match_the_design() {
        let scene = IconComposition::scene(&Palette::PLAYDATES);
        match &scene.nodes[0] {
            Node::LinearGradient { start, end, .. } => {
                assert_eq!(start.opacity, 1.0);
                assert_eq!(end.opacity, 0.8);
                assert_eq!(end.role, ThemeColor::Primary);
            }
            other => panic!("expected gradient first, got {:?}", other),
        }

        let translucent: Vec<_> = scene
            .paints()
            .into_iter()
            .filter(|p| p.opacity < 1.0 && p.role != ThemeColor::Primary)
            .collect();
        assert_eq!(translucent.len(), 3);
        assert!(translucent.iter().all(|p| p.opacity == 0.3));
    }

    #[test]
    fn canvas_geometry_is_fixed() {
        let scene = IconComposition::scene(&custom_palette());
        assert_eq!(scene.size, Size { width: 1024.0, height: 1024.0 });
        assert_eq!(scene.corner_radius, 220.0);
    }

    #[test]
    fn children_sit_ten_units_below_the_adult() {
        let scene = IconComposition::scene(&Palette::PLAYDATES);
        let heads: Vec<(Point, f32)> = scene
            .nodes
            .iter()
            .filter_map(|n| match n {
                Node::Circle { center, radius, fill }
                    if *radius >= 100.0 && fill.opacity == 1.0 =>
                {
                    Some((*center, *radius))
                }
                _ => None,
            })
            .collect();
        assert_eq!(heads.len(), 3);
        let adult = heads.iter().find(|(_, r)| *r == 150.0).expect("adult head");
        assert_eq!(adult.0.x, 512.0);
        for (center, radius) in heads.iter().filter(|(_, r)| *r == 110.0) {
            assert_eq!(center.y, adult.0.y + 10.0);
            assert!(*radius < adult.1);
        }
    }

    #[test]
    fn label_is_bold_rounded_product_name() {
        let scene = IconComposition::scene(&Palette::PLAYDATES);
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["Playdates"]);
        let label = scene.nodes.iter().find(|n| matches!(n, Node::Text { .. }));
        match label {
            Some(Node::Text { anchor, bold, rounded, .. }) => {
                assert!(*bold);
                assert!(*rounded);
                assert_eq!(anchor.x, 512.0);
                assert!(anchor.y > 800.0);
            }
            _ => panic!("label missing"),
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let palette = Palette::PLAYDATES;
        assert_eq!(IconComposition::scene(&palette), IconComposition::scene(&palette));
    }
}
