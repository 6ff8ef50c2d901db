//! Hand-off of a destination to an external navigation application

use crate::location::Location;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Transit,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }
}

/// Destination passed to the external navigation app.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub preferred_mode: TravelMode,
}

impl NavigationRequest {
    pub fn driving_to(location: &Location) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            label: location.name.clone(),
            preferred_mode: TravelMode::Driving,
        }
    }
}

/// Capability that opens an external navigation app. Fire-and-forget:
/// implementations deal with their own failures.
pub trait NavigationLauncher {
    fn launch(&self, request: &NavigationRequest);
}

impl<F: Fn(&NavigationRequest)> NavigationLauncher for F {
    fn launch(&self, request: &NavigationRequest) {
        self(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapsProvider {
    #[default]
    Apple,
    Google,
    OpenStreetMap,
}

impl MapsProvider {
    pub const ALL: [MapsProvider; 3] = [
        MapsProvider::Apple,
        MapsProvider::Google,
        MapsProvider::OpenStreetMap,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            MapsProvider::Apple => "Apple Maps",
            MapsProvider::Google => "Google Maps",
            MapsProvider::OpenStreetMap => "OpenStreetMap",
        }
    }

    pub fn directions_url(self, request: &NavigationRequest) -> Result<Url, url::ParseError> {
        let coords = format!("{},{}", request.latitude, request.longitude);
        match self {
            MapsProvider::Apple => {
                let dirflg = match request.preferred_mode {
                    TravelMode::Driving => "d",
                    TravelMode::Walking => "w",
                    TravelMode::Transit => "r",
                };
                Url::parse_with_params(
                    "https://maps.apple.com/",
                    &[
                        ("daddr", coords.as_str()),
                        ("q", request.label.as_str()),
                        ("dirflg", dirflg),
                    ],
                )
            }
            MapsProvider::Google => Url::parse_with_params(
                "https://www.google.com/maps/dir/",
                &[
                    ("api", "1"),
                    ("destination", coords.as_str()),
                    ("travelmode", request.preferred_mode.as_str()),
                ],
            ),
            MapsProvider::OpenStreetMap => {
                let engine = match request.preferred_mode {
                    TravelMode::Driving => "fossgis_osrm_car",
                    TravelMode::Walking | TravelMode::Transit => "fossgis_osrm_foot",
                };
                Url::parse_with_params(
                    "https://www.openstreetmap.org/directions",
                    &[("engine", engine), ("route", format!(";{}", coords).as_str())],
                )
            }
        }
    }
}

/// Opens the provider's directions page with the OS URL handler.
pub struct SystemMapsLauncher {
    provider: MapsProvider,
}

impl SystemMapsLauncher {
    pub fn new(provider: MapsProvider) -> Self {
        Self { provider }
    }
}

impl NavigationLauncher for SystemMapsLauncher {
    fn launch(&self, request: &NavigationRequest) {
        let url = match self.provider.directions_url(request) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, provider = ?self.provider, "Failed to build directions URL");
                return;
            }
        };
        info!(
            provider = ?self.provider,
            latitude = request.latitude,
            longitude = request.longitude,
            mode = request.preferred_mode.as_str(),
            "Opening directions"
        );
        if let Err(e) = open::that_detached(url.as_str()) {
            warn!(error = %e, url = %url, "Failed to open maps application");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NavigationRequest {
        NavigationRequest::driving_to(&Location::new(
            "Café & Bar",
            "Paris",
            48.8566,
            2.3522,
        ))
    }

    #[test]
    fn request_copies_location_and_prefers_driving() {
        let req = request();
        assert_eq!(req.latitude, 48.8566);
        assert_eq!(req.longitude, 2.3522);
        assert_eq!(req.label, "Café & Bar");
        assert_eq!(req.preferred_mode, TravelMode::Driving);
    }

    #[test]
    fn apple_url_encodes_label() {
        let url = MapsProvider::Apple.directions_url(&request()).expect("url");
        assert_eq!(url.host_str(), Some("maps.apple.com"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("daddr".into(), "48.8566,2.3522".into())));
        assert!(pairs.contains(&("q".into(), "Café & Bar".into())));
        assert!(pairs.contains(&("dirflg".into(), "d".into())));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn google_url_uses_travel_mode() {
        let url = MapsProvider::Google.directions_url(&request()).expect("url");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("travelmode".into(), "driving".into())));
        assert!(pairs.contains(&("destination".into(), "48.8566,2.3522".into())));
    }

    #[test]
    fn osm_url_routes_to_destination() {
        let url = MapsProvider::OpenStreetMap.directions_url(&request()).expect("url");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("route".into(), ";48.8566,2.3522".into())));
        assert!(pairs.contains(&("engine".into(), "fossgis_osrm_car".into())));
    }

    #[test]
    fn closures_are_launchers() {
        let hits = std::cell::Cell::new(0);
        let launcher = |_: &NavigationRequest| hits.set(hits.get() + 1);
        launcher.launch(&request());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn provider_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MapsProvider::OpenStreetMap).unwrap(),
            "\"openstreetmap\""
        );
        assert_eq!(MapsProvider::default(), MapsProvider::Apple);
    }
}
