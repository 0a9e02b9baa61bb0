use std::sync::OnceLock;

use regex::Regex;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r"(?:youtube\.com|youtu\.be)").unwrap())
}

/// A video identifier on the platform.
///
/// The resolver treats identifiers as opaque tokens; this type exists so
/// callers holding a full video URL can normalize it up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    /// Extract a video identifier from user input.
    ///
    /// Accepts a bare identifier (returned as-is after trimming) or a
    /// youtube.com / youtu.be URL in its usual shapes: `watch?v=`,
    /// `youtu.be/`, `/live/`, `/shorts/`. Returns `None` when nothing
    /// usable remains.
    pub fn parse(input: &str) -> Option<VideoId> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if !url_pattern().is_match(input) {
            return Some(VideoId(input.to_string()));
        }

        let id = if input.contains("v=") {
            input
                .split("v=")
                .nth(1)
                .unwrap_or(input)
                .split('&')
                .next()
                .unwrap_or(input)
        } else if input.contains("youtu.be/") {
            input
                .split("youtu.be/")
                .nth(1)
                .unwrap_or(input)
                .split('?')
                .next()
                .unwrap_or(input)
        } else if input.contains("/live/") {
            input
                .split("/live/")
                .nth(1)
                .unwrap_or(input)
                .split('?')
                .next()
                .unwrap_or(input)
        } else if input.contains("/shorts/") {
            input
                .split("/shorts/")
                .nth(1)
                .unwrap_or(input)
                .split('?')
                .next()
                .unwrap_or(input)
        } else {
            input
        };

        let id = id.trim().trim_end_matches('/');
        if id.is_empty() {
            None
        } else {
            Some(VideoId(id.to_string()))
        }
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::ops::Deref for VideoId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
