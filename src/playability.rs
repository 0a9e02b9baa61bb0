//! Playability gate for candidate stream MIME types.
//!
//! Whether a container actually plays is ultimately decided by the host's
//! media framework, so the check is a trait the host can implement. The
//! bundled [`MimePlayability`] stands in with a conservative whitelist of
//! the containers the platform serves for the format codes in the quality
//! table.

/// Decides whether a stream's MIME type is playable by the consumer.
pub trait PlayabilityOracle: Send + Sync {
    fn is_playable(&self, mime_type: &str) -> bool;
}

/// Default oracle: container whitelist over the MIME type's essence,
/// ignoring any `;codecs=...` parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct MimePlayability;

impl PlayabilityOracle for MimePlayability {
    fn is_playable(&self, mime_type: &str) -> bool {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or(mime_type)
            .trim()
            .to_ascii_lowercase();

        matches!(
            essence.as_str(),
            "video/mp4"
                | "video/webm"
                | "video/3gpp"
                | "video/x-flv"
                | "audio/mp4"
                | "audio/webm"
                | "audio/mpeg"
        )
    }
}
