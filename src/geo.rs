// Marker placement for request locations.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Initial map centre and zoom before markers are fitted.
pub const DEFAULT_CENTER: LatLng = LatLng::new(28.6139, 77.2090);
pub const DEFAULT_ZOOM: u8 = 5;

/// Padding applied on each side when fitting the viewport to markers.
pub const FIT_PADDING: f64 = 0.1;

/// Named sites accepted in place of coordinates.
pub const NAMED_SITES: &[(&str, LatLng)] = &[
    ("Headquarters", LatLng::new(28.6139, 77.2090)),
    ("Northern Base", LatLng::new(34.1526, 77.5770)),
    ("Eastern Depot", LatLng::new(22.5726, 88.3639)),
    ("Western Camp", LatLng::new(19.0760, 72.8777)),
    ("Jogiwala", LatLng::new(30.2965, 78.0645)),
    ("Vivekanad Gram", LatLng::new(30.2980, 78.0700)),
    ("Dehradun", LatLng::new(30.3165, 78.0322)),
    ("Uttrakhand", LatLng::new(30.0668, 79.0193)),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    Coordinates(LatLng),
    NamedSite(LatLng),
}

impl Resolved {
    pub fn position(self) -> LatLng {
        match self {
            Resolved::Coordinates(p) | Resolved::NamedSite(p) => p,
        }
    }
}

/// Parses `"lat,lng"`: exactly two numeric parts within coordinate range.
pub fn parse_coordinates(location: &str) -> Option<LatLng> {
    let mut parts = location.split(',');
    let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lng), None) => (lat.trim(), lng.trim()),
        _ => return None,
    };
    let lat: f64 = lat.parse().ok()?;
    let lng: f64 = lng.parse().ok()?;
    if !lat.is_finite() || !lng.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(LatLng::new(lat, lng))
}

/// Case-insensitive exact match against `NAMED_SITES`.
pub fn lookup_site(location: &str) -> Option<LatLng> {
    let wanted = location.trim().to_uppercase();
    NAMED_SITES
        .iter()
        .find(|(name, _)| name.to_uppercase() == wanted)
        .map(|(_, pos)| *pos)
}

pub fn resolve_location(location: &str) -> Option<Resolved> {
    parse_coordinates(location)
        .map(Resolved::Coordinates)
        .or_else(|| lookup_site(location).map(Resolved::NamedSite))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point; `None` for no points.
    pub fn around<I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = LatLng>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    south_west: p,
                    north_east: p,
                },
                Some(b) => Bounds {
                    south_west: LatLng::new(b.south_west.lat.min(p.lat), b.south_west.lng.min(p.lng)),
                    north_east: LatLng::new(b.north_east.lat.max(p.lat), b.north_east.lng.max(p.lng)),
                },
            })
        })
    }

    /// Extends each side by `ratio` of the box's span on that axis.
    pub fn pad(self, ratio: f64) -> Bounds {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng).abs() * ratio;
        Bounds {
            south_west: LatLng::new(
                self.south_west.lat - lat_buffer,
                self.south_west.lng - lng_buffer,
            ),
            north_east: LatLng::new(
                self.north_east.lat + lat_buffer,
                self.north_east.lng + lng_buffer,
            ),
        }
    }

    pub fn contains(&self, p: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&p.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_win() {
        assert_eq!(
            resolve_location("28.61,77.20"),
            Some(Resolved::Coordinates(LatLng::new(28.61, 77.20)))
        );
        assert_eq!(
            parse_coordinates(" 30.3 , 78.03 "),
            Some(LatLng::new(30.3, 78.03))
        );
    }

    #[test]
    fn test_named_site_lookup_ignores_case() {
        assert_eq!(
            resolve_location("Headquarters"),
            Some(Resolved::NamedSite(LatLng::new(28.6139, 77.2090)))
        );
        assert_eq!(
            resolve_location("eastern depot").map(Resolved::position),
            Some(LatLng::new(22.5726, 88.3639))
        );
    }

    #[test]
    fn test_unresolvable() {
        assert_eq!(resolve_location("Nonexistent Place"), None);
        assert_eq!(resolve_location(""), None);
        assert_eq!(resolve_location("1,2,3"), None);
        assert_eq!(resolve_location("north,south"), None);
        assert_eq!(resolve_location("28.6,"), None);
        assert_eq!(resolve_location("95.0,77.0"), None);
        assert_eq!(resolve_location("NaN,1"), None);
    }

    #[test]
    fn test_bounds_and_padding() {
        let bounds = Bounds::around([
            LatLng::new(20.0, 70.0),
            LatLng::new(30.0, 80.0),
            LatLng::new(25.0, 75.0),
        ])
        .unwrap();
        assert_eq!(bounds.south_west, LatLng::new(20.0, 70.0));
        assert_eq!(bounds.north_east, LatLng::new(30.0, 80.0));

        let padded = bounds.pad(FIT_PADDING);
        assert!((padded.south_west.lat - 19.0).abs() < 1e-9);
        assert!((padded.north_east.lng - 81.0).abs() < 1e-9);
        assert!(padded.contains(LatLng::new(30.5, 80.5)));
    }

    #[test]
    fn test_no_points_no_bounds() {
        assert_eq!(Bounds::around(Vec::<LatLng>::new()), None);
    }
}
