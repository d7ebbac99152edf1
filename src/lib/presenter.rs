use crate::catalog::TheaterCatalog;
use crate::geo::{Coordinate, Region};
use crate::services::MapSurface;

/// Shown when no real location is available. The campus the app was written
/// at.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate::new(37.517829, 126.886270);

/// Span used whenever the screen recenters, in meters per axis.
pub const REGION_SPAN_METERS: f64 = 400.0;

/// A map marker at a coordinate, optionally labeled.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub coordinate: Coordinate,
    pub title: Option<String>,
}

/// Owns the set of pins on the map.
///
/// The set is replaced wholesale on every recompute. It is always one of:
/// every theater, the theaters of a single chain, or the lone fallback pin.
pub struct MapPresenter {
    annotations: Vec<Pin>,
}

impl MapPresenter {
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    /// One untitled pin per theater. Does not move the viewport.
    pub fn show_all(&mut self, catalog: &TheaterCatalog, map: &mut impl MapSurface) {
        map.clear_pins();
        self.annotations = catalog
            .records()
            .iter()
            .map(|record| Pin {
                coordinate: record.coordinate,
                title: None,
            })
            .collect();
        map.add_pins(&self.annotations);
        log::info!("Showing all {} theaters.", self.annotations.len());
    }

    /// Pins for one chain only, titled with the chain, centered on the first
    /// match.
    ///
    /// No matches means there is no first coordinate to center on; the
    /// viewport stays where it was.
    pub fn filter_by_chain(
        &mut self,
        chain: &str,
        catalog: &TheaterCatalog,
        map: &mut impl MapSurface,
    ) {
        map.clear_pins();
        self.annotations = catalog
            .matching(chain)
            .map(|record| Pin {
                coordinate: record.coordinate,
                title: Some(chain.to_string()),
            })
            .collect();
        map.add_pins(&self.annotations);
        if let Some(first) = self.annotations.first() {
            map.set_region(&Region::around(first.coordinate, REGION_SPAN_METERS));
        }
        log::info!("Filter {:?} matched {} theaters.", chain, self.annotations.len());
    }

    /// Move the viewport. The pins stay.
    pub fn recenter_on(&self, coordinate: Coordinate, map: &mut impl MapSurface) {
        map.set_region(&Region::around(coordinate, REGION_SPAN_METERS));
    }

    /// A single untitled pin at the fallback coordinate, centered there.
    pub fn show_fallback(&mut self, map: &mut impl MapSurface) {
        map.clear_pins();
        self.annotations = vec![Pin {
            coordinate: FALLBACK_COORDINATE,
            title: None,
        }];
        map.add_pins(&self.annotations);
        map.set_region(&Region::around(FALLBACK_COORDINATE, REGION_SPAN_METERS));
        log::info!("Falling back to {}.", FALLBACK_COORDINATE);
    }

    pub fn pin_count(&self) -> usize {
        self.annotations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TheaterRecord;

    const GANGNAM: &[TheaterRecord] = &[
        TheaterRecord {
            name: "CGV Gangnam",
            chain: "CGV",
            coordinate: Coordinate::new(37.50, 127.03),
        },
        TheaterRecord {
            name: "Megabox Coex",
            chain: "Megabox",
            coordinate: Coordinate::new(37.51, 127.02),
        },
        TheaterRecord {
            name: "CGV Apgujeong",
            chain: "CGV",
            coordinate: Coordinate::new(37.49, 127.05),
        },
    ];

    #[derive(Default)]
    struct RecordingMap {
        pins: Vec<Pin>,
        region: Option<Region>,
    }

    impl MapSurface for RecordingMap {
        fn add_pins(&mut self, pins: &[Pin]) {
            self.pins.extend_from_slice(pins);
        }

        fn clear_pins(&mut self) {
            self.pins.clear();
        }

        fn set_region(&mut self, region: &Region) {
            self.region = Some(*region);
        }
    }

    #[test]
    fn show_all_pins_everything_and_leaves_the_viewport_alone() {
        let catalog = TheaterCatalog::with_records(GANGNAM);
        let mut presenter = MapPresenter::new();
        let mut map = RecordingMap::default();

        presenter.show_all(&catalog, &mut map);

        assert_eq!(map.pins.len(), 3);
        assert!(map.pins.iter().all(|pin| pin.title.is_none()));
        assert!(map.region.is_none());
    }

    #[test]
    fn filter_keeps_only_the_requested_chain_and_centers_on_the_first_match() {
        let catalog = TheaterCatalog::with_records(GANGNAM);
        let mut presenter = MapPresenter::new();
        let mut map = RecordingMap::default();

        presenter.filter_by_chain("CGV", &catalog, &mut map);

        assert_eq!(map.pins.len(), 2);
        assert!(map
            .pins
            .iter()
            .all(|pin| pin.title.as_deref() == Some("CGV")));
        let region = map.region.expect("filter should recenter");
        assert_eq!(region.center, Coordinate::new(37.50, 127.03));
        assert_eq!(region.latitudinal_meters, REGION_SPAN_METERS);
        assert_eq!(region.longitudinal_meters, REGION_SPAN_METERS);
    }

    #[test]
    fn filter_without_matches_leaves_the_previous_viewport() {
        let catalog = TheaterCatalog::with_records(GANGNAM);
        let mut presenter = MapPresenter::new();
        let mut map = RecordingMap::default();

        presenter.filter_by_chain("Megabox", &catalog, &mut map);
        let before = map.region;

        presenter.filter_by_chain("IMAX", &catalog, &mut map);

        assert_eq!(map.pins.len(), 0);
        assert_eq!(map.region, before);
    }

    #[test]
    fn fallback_replaces_whatever_was_on_the_map() {
        let catalog = TheaterCatalog::with_records(GANGNAM);
        let mut presenter = MapPresenter::new();
        let mut map = RecordingMap::default();

        presenter.show_all(&catalog, &mut map);
        presenter.show_fallback(&mut map);

        assert_eq!(map.pins.len(), 1);
        assert_eq!(map.pins[0].coordinate, FALLBACK_COORDINATE);
        assert!(map.pins[0].title.is_none());
        let region = map.region.expect("fallback should recenter");
        assert_eq!(region.center, FALLBACK_COORDINATE);
    }

    #[test]
    fn recenter_moves_the_viewport_without_touching_pins() {
        let catalog = TheaterCatalog::with_records(GANGNAM);
        let mut presenter = MapPresenter::new();
        let mut map = RecordingMap::default();

        presenter.show_all(&catalog, &mut map);
        let here = Coordinate::new(37.512, 126.995);
        presenter.recenter_on(here, &mut map);

        assert_eq!(map.pins.len(), 3);
        assert_eq!(map.region.expect("recenter should set a region").center, here);
    }
}
