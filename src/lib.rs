//! Tubelink resolves video identifiers into direct, playable stream URLs
//! by querying the platform's legacy `get_video_info` endpoint across a
//! ladder of access contexts and picking the best candidate stream for a
//! requested quality tier.

pub mod common;
pub mod config;
pub mod playability;
pub mod quality;
pub mod resolver;
pub mod transport;
pub mod wire;

// Re-export the types a host needs for everyday use
pub use common::VideoId;
pub use config::ResolverConfig;
pub use playability::{MimePlayability, PlayabilityOracle};
pub use quality::VideoQuality;
pub use resolver::{AttemptType, StreamDescriptor, StreamResolver};
pub use transport::{HttpTransport, Transport, TransportError};
