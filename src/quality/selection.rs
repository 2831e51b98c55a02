//! Quality dropdown state

use crate::quality::map::{QualityMap, Resolution};

/// The current quality map together with the user's pick from it.
#[derive(Debug, Clone, Default)]
pub struct QualitySelection {
    map: QualityMap,
    selected: Option<Resolution>,
}

impl QualitySelection {
    /// Replace the map after a successful fetch and select its highest entry.
    pub fn replace(&mut self, map: QualityMap) {
        self.selected = map.highest();
        self.map = map;
    }

    pub fn map(&self) -> &QualityMap {
        &self.map
    }

    pub fn selected(&self) -> Option<Resolution> {
        self.selected
    }

    pub fn select(&mut self, resolution: Resolution) {
        self.selected = Some(resolution);
    }

    /// Dropdown labels in ascending order.
    pub fn labels(&self) -> Vec<String> {
        self.map
            .resolutions()
            .into_iter()
            .map(|r| r.to_string())
            .collect()
    }

    pub fn selected_label(&self) -> Option<String> {
        self.selected.map(|r| r.to_string())
    }

    /// Select from a dropdown label; unknown labels clear the selection.
    pub fn select_label(&mut self, label: &str) {
        self.selected = Resolution::parse_label(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::Format;

    fn map_of(heights: &[u32]) -> QualityMap {
        let formats: Vec<Format> = heights
            .iter()
            .map(|h| Format::with_height(format!("f{}", h), Some(*h)))
            .collect();
        QualityMap::from_formats(&formats, 144)
    }

    #[test]
    fn test_replace_selects_highest() {
        let mut selection = QualitySelection::default();
        selection.replace(map_of(&[360, 144, 1080, 720]));
        assert_eq!(selection.selected_label().as_deref(), Some("1080p"));
        assert_eq!(selection.labels(), vec!["144p", "360p", "720p", "1080p"]);
    }

    #[test]
    fn test_select_label() {
        let mut selection = QualitySelection::default();
        selection.replace(map_of(&[360, 1080]));
        selection.select_label("360p");
        assert_eq!(selection.selected(), Some(Resolution(360)));
        selection.select_label("");
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_starts_empty() {
        let selection = QualitySelection::default();
        assert!(selection.labels().is_empty());
        assert!(selection.selected().is_none());
    }
}
