//! Resolution to format identifier mapping

use std::collections::BTreeMap;
use std::fmt;

use crate::extractor::Format;

/// Vertical resolution in pixels, shown to the user as `"{height}p"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(pub u32);

impl Resolution {
    pub fn height(self) -> u32 {
        self.0
    }

    /// Parse a dropdown label such as `"720p"` (a bare `"720"` is accepted too).
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let digits = label.strip_suffix('p').unwrap_or(label);
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.0)
    }
}

/// One entry per available height, each pointing at the first format the
/// engine listed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityMap {
    entries: BTreeMap<Resolution, String>,
}

impl QualityMap {
    /// Keep formats with a height of at least `min_height`; for repeated
    /// heights the earliest format wins.
    pub fn from_formats<'a>(
        formats: impl IntoIterator<Item = &'a Format>,
        min_height: u32,
    ) -> Self {
        let mut entries = BTreeMap::new();
        for format in formats {
            let Some(height) = format.height else { continue };
            if height < min_height {
                continue;
            }
            entries
                .entry(Resolution(height))
                .or_insert_with(|| format.format_id.clone());
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn format_id(&self, resolution: Resolution) -> Option<&str> {
        self.entries.get(&resolution).map(String::as_str)
    }

    /// Resolutions in ascending order.
    pub fn resolutions(&self) -> Vec<Resolution> {
        self.entries.keys().copied().collect()
    }

    /// (resolution, format id) pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Resolution, &str)> {
        self.entries.iter().map(|(r, id)| (*r, id.as_str()))
    }

    pub fn highest(&self) -> Option<Resolution> {
        self.entries.keys().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formats(items: &[(&str, Option<u32>)]) -> Vec<Format> {
        items
            .iter()
            .map(|(id, h)| Format::with_height(*id, *h))
            .collect()
    }

    #[test]
    fn test_filters_and_dedupes_keeping_first() {
        let formats = formats(&[
            ("sb0", Some(90)),
            ("140", None),
            ("160", Some(144)),
            ("134", Some(360)),
            ("243", Some(360)),
            ("137", Some(1080)),
            ("248", Some(1080)),
        ]);
        let map = QualityMap::from_formats(&formats, 144);

        assert_eq!(
            map.resolutions(),
            vec![Resolution(144), Resolution(360), Resolution(1080)]
        );
        assert_eq!(map.format_id(Resolution(360)), Some("134"));
        assert_eq!(map.format_id(Resolution(1080)), Some("137"));
        assert_eq!(map.highest(), Some(Resolution(1080)));
    }

    #[test]
    fn test_empty_when_nothing_qualifies() {
        let map = QualityMap::from_formats(&formats(&[("a", Some(100)), ("b", None)]), 144);
        assert!(map.is_empty());
        assert_eq!(map.highest(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Resolution(720).to_string(), "720p");
        assert_eq!(Resolution::parse_label("1080p"), Some(Resolution(1080)));
        assert_eq!(Resolution::parse_label("480"), Some(Resolution(480)));
        assert_eq!(Resolution::parse_label(""), None);
        assert_eq!(Resolution::parse_label("bestp"), None);
    }
}
