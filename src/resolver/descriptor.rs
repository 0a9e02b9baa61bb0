//! Strongly-typed view of one candidate stream segment.

use reqwest::Url;
use thiserror::Error;

use crate::{quality::VideoQuality, wire};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("stream segment has no type field")]
    MissingMime,

    #[error("stream segment has no itag field")]
    MissingItag,

    #[error("itag is not an integer: {0}")]
    BadItag(String),

    #[error("stream segment has no url field")]
    MissingUrl,
}

/// One candidate media stream, decoded and validated up front so the
/// selection loop never has to re-probe a loose key/value map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub itag: i32,
    pub mime_type: String,
    pub url: String,
    /// Detached signature, when the platform serves one separately from
    /// the URL. Reattached by [`StreamDescriptor::playback_url`].
    pub sig: Option<String>,
}

impl StreamDescriptor {
    /// Parses one comma-delimited segment of a stream map.
    ///
    /// `type`, `itag` and `url` are required and must be non-empty; a
    /// segment missing any of them never becomes a candidate.
    pub fn parse(segment: &str) -> Result<StreamDescriptor, DescriptorError> {
        let mut fields = wire::decode_query(segment);

        let mime_type = fields
            .remove("type")
            .filter(|v| !v.is_empty())
            .ok_or(DescriptorError::MissingMime)?;

        let raw_itag = fields
            .remove("itag")
            .filter(|v| !v.is_empty())
            .ok_or(DescriptorError::MissingItag)?;
        let itag = raw_itag
            .parse::<i32>()
            .map_err(|_| DescriptorError::BadItag(raw_itag))?;

        let url = fields
            .remove("url")
            .filter(|v| !v.is_empty())
            .ok_or(DescriptorError::MissingUrl)?;

        let sig = fields.remove("sig").filter(|v| !v.is_empty());

        Ok(StreamDescriptor {
            itag,
            mime_type,
            url,
            sig,
        })
    }

    pub fn quality(&self) -> VideoQuality {
        VideoQuality::from_itag(self.itag)
    }

    /// Final playable URL for this stream.
    ///
    /// When the URL does not already carry a `signature` parameter and a
    /// detached `sig` is present, the signature is appended by direct
    /// concatenation, `<url>signature=<sig>`, exactly as the platform
    /// expects. Returns `None` if the result does not parse as a URL.
    pub fn playback_url(&self) -> Option<Url> {
        if let Some(sig) = &self.sig {
            if !wire::decode_query(&self.url).contains_key("signature") {
                return Url::parse(&format!("{}signature={}", self.url, sig)).ok();
            }
        }
        Url::parse(&self.url).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_segment() {
        let descriptor =
            StreamDescriptor::parse("itag=22&type=video%2Fmp4&url=http%3A%2F%2Fx%2Fy%3F&sig=ABC")
                .expect("segment should parse");
        assert_eq!(descriptor.itag, 22);
        assert_eq!(descriptor.mime_type, "video/mp4");
        assert_eq!(descriptor.url, "http://x/y?");
        assert_eq!(descriptor.sig.as_deref(), Some("ABC"));
        assert_eq!(descriptor.quality(), VideoQuality::Hd720);
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(
            StreamDescriptor::parse("itag=22&url=http%3A%2F%2Fx"),
            Err(DescriptorError::MissingMime)
        );
        assert_eq!(
            StreamDescriptor::parse("type=video%2Fmp4&url=http%3A%2F%2Fx"),
            Err(DescriptorError::MissingItag)
        );
        assert_eq!(
            StreamDescriptor::parse("itag=22&type=video%2Fmp4"),
            Err(DescriptorError::MissingUrl)
        );
    }

    #[test]
    fn test_non_integer_itag() {
        assert_eq!(
            StreamDescriptor::parse("itag=abc&type=video%2Fmp4&url=http%3A%2F%2Fx"),
            Err(DescriptorError::BadItag("abc".to_string()))
        );
    }

    #[test]
    fn test_signature_reattachment() {
        let descriptor =
            StreamDescriptor::parse("itag=22&type=video%2Fmp4&url=http%3A%2F%2Fx%2Fy%3F&sig=ABC")
                .expect("segment should parse");
        assert_eq!(
            descriptor.playback_url().expect("url should parse").as_str(),
            "http://x/y?signature=ABC"
        );
    }

    #[test]
    fn test_embedded_signature_left_alone() {
        let descriptor = StreamDescriptor::parse(
            "itag=22&type=video%2Fmp4&url=http%3A%2F%2Fx%2Fy%3Ffoo%3D1%26signature%3DREAL&sig=STALE",
        )
        .expect("segment should parse");
        assert_eq!(
            descriptor.playback_url().expect("url should parse").as_str(),
            "http://x/y?foo=1&signature=REAL"
        );
    }

    #[test]
    fn test_no_sig_and_no_signature_is_passed_through() {
        let descriptor =
            StreamDescriptor::parse("itag=18&type=video%2Fmp4&url=http%3A%2F%2Fx%2Fmedia")
                .expect("segment should parse");
        assert_eq!(
            descriptor.playback_url().expect("url should parse").as_str(),
            "http://x/media"
        );
    }

    #[test]
    fn test_unparseable_url_yields_none() {
        let descriptor = StreamDescriptor::parse("itag=22&type=video%2Fmp4&url=not%20a%20url")
            .expect("segment should parse");
        assert!(descriptor.playback_url().is_none());
    }
}
