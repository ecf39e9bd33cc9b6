//! Catalog build properties over synthetic listings

use fuzz_harness::prelude::*;
use satellite_catalog::{CatalogError, SatelliteCatalog};

fn listing(tles: &[SyntheticTle]) -> Vec<String> {
    tles.iter().flat_map(|tle| tle.lines()).collect()
}

proptest! {
    #![proptest_config(FuzzConfig::from_env().to_proptest_config())]

    #[test]
    fn every_unique_name_is_retrievable(mut tles in prop::collection::vec(synthetic_tle(), 1..16)) {
        for (i, tle) in tles.iter_mut().enumerate() {
            tle.name = format!("SAT-{i}");
        }

        let catalog = SatelliteCatalog::build(&listing(&tles)).unwrap();
        prop_assert_eq!(catalog.len(), tles.len());
        for tle in &tles {
            let record = catalog.get(&tle.name).unwrap();
            prop_assert_eq!(&record.info.catalog_number, &tle.catalog_number);
        }
    }

    #[test]
    fn repeated_name_keeps_last(mut tles in prop::collection::vec(synthetic_tle(), 2..8)) {
        for tle in tles.iter_mut() {
            tle.name = "DUPLICATE".to_string();
        }

        let catalog = SatelliteCatalog::build(&listing(&tles)).unwrap();
        prop_assert_eq!(catalog.len(), 1);

        let last = tles.last().unwrap();
        let record = catalog.get("DUPLICATE").unwrap();
        prop_assert_eq!(record.info.element_set_number.trim(), last.element_set_number.to_string());
        prop_assert_eq!(record.elements.rev_number_at_epoch, last.rev_number);
    }

    #[test]
    fn ragged_listing_is_malformed_input(
        tles in prop::collection::vec(synthetic_tle(), 1..8),
        drop in 1usize..3,
    ) {
        let mut lines = listing(&tles);
        lines.truncate(lines.len() - drop);

        let result = SatelliteCatalog::build(&lines);
        let is_malformed = matches!(result, Err(CatalogError::MalformedInput { .. }));
        prop_assert!(is_malformed);
    }
}
