//! Data structures for video information reported by yt-dlp

use serde::{Deserialize, Serialize};

/// Video information structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "webpage_url")]
    pub url: String,
    #[serde(default)]
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
    pub extractor: Option<String>,
}

/// Video format information (one stream descriptor)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<f32>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub format_note: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    pub tbr: Option<f32>, // Total bitrate
}

impl Format {
    pub fn with_height(format_id: impl Into<String>, height: Option<u32>) -> Self {
        Self {
            format_id: format_id.into(),
            height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_ytdlp_dump() {
        let json = r#"{
            "id": "abc",
            "title": "Some Clip",
            "webpage_url": "https://example.com/watch?v=abc",
            "duration": 212.5,
            "formats": [
                {"format_id": "sb0", "ext": "mhtml", "height": 45, "vcodec": "none"},
                {"format_id": "140", "ext": "m4a", "height": null, "acodec": "mp4a.40.2"},
                {"format_id": "137", "ext": "mp4", "width": 1920, "height": 1080, "fps": 30}
            ],
            "thumbnails": []
        }"#;

        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title, "Some Clip");
        assert_eq!(info.url, "https://example.com/watch?v=abc");
        assert_eq!(info.formats.len(), 3);
        assert_eq!(info.formats[1].height, None);
        assert_eq!(info.formats[2].height, Some(1080));
    }

    #[test]
    fn test_missing_formats_defaults_to_empty() {
        let info: VideoInfo = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(info.formats.is_empty());
    }
}
