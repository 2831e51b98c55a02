//! Engine configuration for a single download

use std::path::{Path, PathBuf};

/// Everything the engine needs to fetch, merge and convert one video.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOptions {
    pub url: String,
    /// Engine format selector, e.g. `"137+bestaudio"`.
    pub format: String,
    /// Output path template using the engine's own title/extension fields.
    pub output_template: String,
    pub merge_output_format: String,
    pub ffmpeg_location: PathBuf,
    pub postprocessors: Vec<PostProcessor>,
    pub no_playlist: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostProcessor {
    /// Convert the merged file into the given container.
    VideoConvertor { preferred_format: String },
    /// Embed subtitles when the site provides any.
    EmbedSubtitle,
}

impl DownloadOptions {
    /// Build the options for `format_id` merged with the best audio stream,
    /// written into `folder` and converted to `container`.
    pub fn new(
        url: &str,
        format_id: &str,
        folder: &Path,
        container: &str,
        ffmpeg_location: PathBuf,
    ) -> Self {
        Self {
            url: url.to_string(),
            format: format!("{}+bestaudio", format_id),
            output_template: output_template(folder),
            merge_output_format: container.to_string(),
            ffmpeg_location,
            postprocessors: vec![
                PostProcessor::VideoConvertor {
                    preferred_format: container.to_string(),
                },
                PostProcessor::EmbedSubtitle,
            ],
            no_playlist: true,
        }
    }

    /// Command-line flags for yt-dlp, without progress reporting flags or the URL.
    pub fn to_ytdlp_args(&self) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            self.format.clone(),
            "-o".to_string(),
            self.output_template.clone(),
            "--merge-output-format".to_string(),
            self.merge_output_format.clone(),
            "--ffmpeg-location".to_string(),
            self.ffmpeg_location.to_string_lossy().to_string(),
        ];

        for pp in &self.postprocessors {
            match pp {
                PostProcessor::VideoConvertor { preferred_format } => {
                    args.push("--recode-video".to_string());
                    args.push(preferred_format.clone());
                }
                PostProcessor::EmbedSubtitle => args.push("--embed-subs".to_string()),
            }
        }

        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }

        args
    }
}

fn output_template(folder: &Path) -> String {
    let folder = folder.to_string_lossy();
    let folder = folder.trim_end_matches(['/', '\\']);
    format!("{}/%(title)s.%(ext)s", folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DownloadOptions {
        DownloadOptions::new(
            "https://example.com/watch?v=1",
            "134",
            Path::new("/home/me/Videos"),
            "mp4",
            PathBuf::from("/usr/bin/ffmpeg"),
        )
    }

    #[test]
    fn test_format_selector_adds_best_audio() {
        assert_eq!(sample().format, "134+bestaudio");
    }

    #[test]
    fn test_output_template_is_rooted_at_folder() {
        assert_eq!(sample().output_template, "/home/me/Videos/%(title)s.%(ext)s");
        let trailing = DownloadOptions::new("u", "1", Path::new("/tmp/"), "mp4", PathBuf::new());
        assert_eq!(trailing.output_template, "/tmp/%(title)s.%(ext)s");
    }

    #[test]
    fn test_ytdlp_args() {
        let args = sample().to_ytdlp_args();
        let joined = args.join(" ");
        assert!(joined.starts_with("-f 134+bestaudio -o /home/me/Videos/%(title)s.%(ext)s"));
        assert!(joined.contains("--merge-output-format mp4"));
        assert!(joined.contains("--ffmpeg-location /usr/bin/ffmpeg"));
        assert!(joined.contains("--recode-video mp4"));
        assert!(args.contains(&"--embed-subs".to_string()));
        assert!(args.contains(&"--no-playlist".to_string()));
        assert!(!args.contains(&"https://example.com/watch?v=1".to_string()));
    }
}
