//! Location records and the map viewport derived from them

use crate::constants::{DEFAULT_MAP_SPAN, MAX_CENTER_LATITUDE, MAX_MAP_SPAN, MIN_MAP_SPAN};
use serde::{Deserialize, Serialize};

/// A named place. Supplied by the caller; no validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("Central Park", "New York, NY", 40.785091, -73.968285)
    }
}

/// Visible map region in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub span_latitude: f64,
    pub span_longitude: f64,
}

impl MapViewport {
    /// Region centered on `location` with the default 0.01° span. The span
    /// is angular, so its ground size shrinks toward the poles.
    pub fn centered_on(location: &Location) -> Self {
        Self {
            center_latitude: location.latitude,
            center_longitude: location.longitude,
            span_latitude: DEFAULT_MAP_SPAN,
            span_longitude: DEFAULT_MAP_SPAN,
        }
    }

    /// Viewport moved by a gesture, in degrees. Latitude is clamped and
    /// longitude wraps around the antimeridian.
    pub fn panned(self, d_latitude: f64, d_longitude: f64) -> Self {
        Self {
            center_latitude: (self.center_latitude + d_latitude)
                .clamp(-MAX_CENTER_LATITUDE, MAX_CENTER_LATITUDE),
            center_longitude: wrap_longitude(self.center_longitude + d_longitude),
            ..self
        }
    }

    /// Viewport scaled around a focus point. `factor > 1` zooms out.
    /// The focus stays at the same relative screen position.
    pub fn zoomed(self, factor: f64, focus_latitude: f64, focus_longitude: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        let span_latitude = (self.span_latitude * factor).clamp(MIN_MAP_SPAN, MAX_MAP_SPAN);
        let span_longitude = (self.span_longitude * factor).clamp(MIN_MAP_SPAN, MAX_MAP_SPAN);
        let k_lat = span_latitude / self.span_latitude;
        let k_lon = span_longitude / self.span_longitude;
        Self {
            center_latitude: (focus_latitude + (self.center_latitude - focus_latitude) * k_lat)
                .clamp(-MAX_CENTER_LATITUDE, MAX_CENTER_LATITUDE),
            center_longitude: wrap_longitude(
                focus_longitude + (self.center_longitude - focus_longitude) * k_lon,
            ),
            span_latitude,
            span_longitude,
        }
    }

    /// Position of a coordinate inside the viewport as fractions of its
    /// width and height, origin top-left. Values outside 0..1 are off-screen.
    pub fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let dx = wrap_longitude(longitude - self.center_longitude);
        let x = 0.5 + dx / self.span_longitude;
        let y = 0.5 - (latitude - self.center_latitude) / self.span_latitude;
        (x, y)
    }

    /// Inverse of [`project`](Self::project).
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let latitude = self.center_latitude + (0.5 - y) * self.span_latitude;
        let longitude = wrap_longitude(self.center_longitude + (x - 0.5) * self.span_longitude);
        (latitude, longitude)
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn viewport_starts_on_the_location() {
        let loc = Location::new("Harbour", "Sydney", -33.8568, 151.2153);
        let vp = MapViewport::centered_on(&loc);
        assert_eq!(vp.center_latitude, -33.8568);
        assert_eq!(vp.center_longitude, 151.2153);
        assert_eq!((vp.span_latitude, vp.span_longitude), (0.01, 0.01));
    }

    #[test]
    fn pan_clamps_latitude_and_wraps_longitude() {
        let vp = MapViewport::centered_on(&Location::new("", "", 84.0, 179.5));
        let moved = vp.panned(5.0, 1.0);
        assert_eq!(moved.center_latitude, 85.0);
        assert!((moved.center_longitude - -179.5).abs() < EPS);
        assert_eq!(moved.span_latitude, vp.span_latitude);
    }

    #[test]
    fn zoom_keeps_focus_fixed() {
        let vp = MapViewport::centered_on(&Location::default());
        let focus = vp.unproject(0.25, 0.75);
        let zoomed = vp.zoomed(2.0, focus.0, focus.1);
        assert!((zoomed.span_latitude - 0.02).abs() < EPS);
        let (x, y) = zoomed.project(focus.0, focus.1);
        assert!((x - 0.25).abs() < 1e-6);
        assert!((y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn zoom_span_is_clamped() {
        let vp = MapViewport::centered_on(&Location::default());
        let tight = vp.zoomed(0.0001, vp.center_latitude, vp.center_longitude);
        assert_eq!(tight.span_latitude, MIN_MAP_SPAN);
        assert_eq!(vp.zoomed(-1.0, 0.0, 0.0), vp);

        let wide = vp.zoomed(1e6, vp.center_latitude, vp.center_longitude);
        assert_eq!(wide.span_latitude, MAX_MAP_SPAN);
        assert_eq!(wide.span_longitude, MAX_MAP_SPAN);
    }

    #[test]
    fn zooming_out_keeps_center_latitude_in_range() {
        let north = MapViewport::centered_on(&Location::new("N", "", 80.0, 0.0));
        let out = north.zoomed(1e6, 0.0, 0.0);
        assert_eq!(out.center_latitude, MAX_CENTER_LATITUDE);

        let south = MapViewport::centered_on(&Location::new("S", "", -80.0, 0.0));
        assert_eq!(south.zoomed(1e6, 0.0, 0.0).center_latitude, -MAX_CENTER_LATITUDE);
    }

    #[test]
    fn center_projects_to_middle() {
        let loc = Location::default();
        let vp = MapViewport::centered_on(&loc);
        let (x, y) = vp.project(loc.latitude, loc.longitude);
        assert!((x - 0.5).abs() < EPS && (y - 0.5).abs() < EPS);
    }
}
