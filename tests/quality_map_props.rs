use clipfetch::extractor::Format;
use clipfetch::quality::{QualityMap, QualitySelection, Resolution};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn formats_strategy() -> impl Strategy<Value = Vec<Format>> {
    prop::collection::vec(prop::option::of(0u32..4400), 0..40).prop_map(|heights| {
        heights
            .into_iter()
            .enumerate()
            .map(|(i, h)| Format::with_height(format!("f{}", i), h))
            .collect()
    })
}

proptest! {
    #[test]
    fn one_entry_per_distinct_height(formats in formats_strategy()) {
        let map = QualityMap::from_formats(&formats, 144);

        let expected: BTreeSet<u32> = formats
            .iter()
            .filter_map(|f| f.height)
            .filter(|h| *h >= 144)
            .collect();
        let actual: BTreeSet<u32> = map.resolutions().iter().map(|r| r.height()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn first_format_wins(formats in formats_strategy()) {
        let map = QualityMap::from_formats(&formats, 144);

        for (resolution, format_id) in map.iter() {
            let first = formats
                .iter()
                .find(|f| f.height == Some(resolution.height()))
                .map(|f| f.format_id.as_str());
            prop_assert_eq!(Some(format_id), first);
        }
    }

    #[test]
    fn default_selection_is_highest(formats in formats_strategy()) {
        let map = QualityMap::from_formats(&formats, 144);
        let highest = map.resolutions().last().copied();

        let mut selection = QualitySelection::default();
        selection.replace(map);
        prop_assert_eq!(selection.selected(), highest);
        prop_assert_eq!(
            selection.selected_label(),
            highest.map(|r: Resolution| format!("{}p", r.height()))
        );
    }
}
