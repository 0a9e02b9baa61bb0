//! The `get_video_info` attempt ladder and its request builder.

use reqwest::Url;

/// Endpoint the resolver queries for stream metadata.
pub const VIDEO_INFO_ENDPOINT: &str = "https://www.youtube.com/get_video_info";

/// One rung of the metadata attempt ladder. Each variant maps to an `el`
/// parameter value the endpoint treats as a different access context, and
/// some videos only return streams under one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptType {
    Embedded,
    DetailPage,
    Vevo,
    Blank,
}

impl AttemptType {
    /// All attempts, in the order the resolver tries them.
    pub const ALL: [AttemptType; 4] = [
        AttemptType::Embedded,
        AttemptType::DetailPage,
        AttemptType::Vevo,
        AttemptType::Blank,
    ];

    /// The `el` parameter value sent for this attempt. [`AttemptType::Blank`]
    /// sends an empty value rather than omitting the parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptType::Embedded => "embedded",
            AttemptType::DetailPage => "detailpage",
            AttemptType::Vevo => "vevo",
            AttemptType::Blank => "",
        }
    }
}

impl std::fmt::Display for AttemptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the metadata request URL for one attempt.
///
/// Parameters are accumulated as `&key=value` pairs and the leading `&` is
/// then swapped for `?`, which is how the endpoint has always been queried.
/// Returns `None` if the configured endpoint does not parse as a URL.
pub fn build_info_url(endpoint: &str, video_id: &str, attempt: AttemptType) -> Option<Url> {
    let mut query = String::new();

    for (key, value) in [
        ("video_id", video_id),
        ("ps", "default"),
        ("eurl", ""),
        ("gl", "US"),
        ("hl", "en"),
        ("el", attempt.as_str()),
    ] {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }

    let query = query.replacen('&', "?", 1);
    Url::parse(&format!("{endpoint}{query}")).ok()
}
