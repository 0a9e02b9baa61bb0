//! Multi-attempt stream resolution against the metadata endpoint.
//!
//! [`StreamResolver`] drives the whole pipeline: probe an optional direct
//! resource, then walk the attempt ladder, fetch and decode each metadata
//! response, and fold the candidate streams into a best pick. Network and
//! playability sit behind trait objects so the loop itself is plain
//! sequential code.

pub mod attempt;
pub mod descriptor;

pub use attempt::{AttemptType, VIDEO_INFO_ENDPOINT, build_info_url};
pub use descriptor::{DescriptorError, StreamDescriptor};

use std::{collections::HashMap, sync::Arc};

use reqwest::Url;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::{
    config::ResolverConfig,
    playability::{MimePlayability, PlayabilityOracle},
    quality::VideoQuality,
    transport::{HttpTransport, Transport, TransportError},
    wire,
};

/// Resolves video identifiers into direct stream URLs.
///
/// Holds no per-call state; a single resolver can be cloned and shared
/// freely, and every resolution owns its own candidate accumulator.
#[derive(Clone)]
pub struct StreamResolver {
    transport: Arc<dyn Transport>,
    oracle: Arc<dyn PlayabilityOracle>,
    config: ResolverConfig,
}

impl StreamResolver {
    /// Resolver with the real HTTP transport and the bundled MIME whitelist.
    pub fn new(config: ResolverConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_parts(
            Arc::new(transport),
            Arc::new(MimePlayability),
            config,
        ))
    }

    /// Resolver over caller-supplied transport and playability capabilities.
    pub fn with_parts(
        transport: Arc<dyn Transport>,
        oracle: Arc<dyn PlayabilityOracle>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            transport,
            oracle,
            config,
        }
    }

    /// Resolves `video_id` to a playable stream URL at `quality`.
    ///
    /// Returns `None` when no attempt produced a playable stream, whether
    /// because the video has none or because every request failed; the
    /// distinction is deliberately not surfaced.
    pub async fn resolve(&self, video_id: &str, quality: VideoQuality) -> Option<Url> {
        self.resolve_cancellable(video_id, quality, None, &CancellationToken::new())
            .await
    }

    /// Like [`StreamResolver::resolve`], but first probes `resource` as a
    /// ready-made stream URL. A probe answering HTTP 200 short-circuits
    /// metadata resolution entirely and the resource is returned verbatim.
    pub async fn resolve_with_resource(
        &self,
        video_id: &str,
        quality: VideoQuality,
        resource: Option<&str>,
    ) -> Option<Url> {
        self.resolve_cancellable(video_id, quality, resource, &CancellationToken::new())
            .await
    }

    /// Full-control entry point. The token is checked between attempts, so
    /// cancellation takes effect at the next attempt boundary rather than
    /// mid-request.
    pub async fn resolve_cancellable(
        &self,
        video_id: &str,
        quality: VideoQuality,
        resource: Option<&str>,
        cancel: &CancellationToken,
    ) -> Option<Url> {
        if let Some(resource) = resource {
            if let Some(url) = self.probe_resource(resource).await {
                return Some(url);
            }
        }

        let video_id = video_id.trim();
        if video_id.is_empty() {
            debug!("Resolver: blank video id, nothing to resolve");
            return None;
        }

        let mut best: Option<(VideoQuality, Url)> = None;

        for attempt in AttemptType::ALL {
            if cancel.is_cancelled() {
                debug!("Resolver: cancelled before attempt '{}'", attempt);
                break;
            }

            let Some(url) = build_info_url(&self.config.endpoint, video_id, attempt) else {
                warn!(
                    "Resolver: endpoint '{}' did not form a request url, skipping attempt",
                    self.config.endpoint
                );
                continue;
            };

            let body = match self.with_timeout(self.transport.fetch(&url)).await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Resolver: attempt '{}' fetch failed: {}", attempt, e);
                    continue;
                }
            };

            let response = wire::decode_query(&body);
            let segments = collect_segments(&response);
            debug!(
                "Resolver: attempt '{}' yielded {} candidate streams",
                attempt,
                segments.len()
            );

            if self.scan_batch(&segments, quality, &mut best) {
                debug!("Resolver: exact match for {} found", quality.label());
                break;
            }
            if best.is_some() {
                // The ladder is a priority order: the first attempt that
                // yields any usable stream ends it, even if a later attempt
                // might carry the exact requested tier.
                debug!("Resolver: attempt '{}' accepted a stream, stopping", attempt);
                break;
            }
        }

        if best.is_none() {
            warn!("Resolver: no playable stream found for '{}'", video_id);
        }
        best.map(|(_, url)| url)
    }

    /// Runs a resolution on a spawned task. `on_complete` receives the
    /// outcome exactly once, however many attempts ran.
    pub fn resolve_background<F>(
        &self,
        video_id: &str,
        quality: VideoQuality,
        on_complete: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(Option<Url>) + Send + 'static,
    {
        let resolver = self.clone();
        let video_id = video_id.to_string();
        tokio::spawn(async move {
            let result = resolver.resolve(&video_id, quality).await;
            on_complete(result);
        })
    }

    async fn probe_resource(&self, resource: &str) -> Option<Url> {
        let resource = resource.trim();
        if resource.is_empty() {
            return None;
        }
        let url = Url::parse(resource).ok()?;
        match self.with_timeout(self.transport.probe(&url)).await {
            Ok(()) => Some(url),
            Err(e) => {
                debug!("Resolver: direct resource probe failed ({}), falling back", e);
                None
            }
        }
    }

    /// Folds one attempt's candidate segments into `best`. Returns `true`
    /// when a candidate exactly matching `desired` was accepted; an exact
    /// hit always replaces the running best, any other candidate must rank
    /// strictly higher than it.
    fn scan_batch(
        &self,
        segments: &[String],
        desired: VideoQuality,
        best: &mut Option<(VideoQuality, Url)>,
    ) -> bool {
        for segment in segments {
            let descriptor = match StreamDescriptor::parse(segment) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    trace!("Resolver: skipping malformed segment: {}", e);
                    continue;
                }
            };

            if !self.oracle.is_playable(&descriptor.mime_type) {
                trace!("Resolver: skipping unplayable type '{}'", descriptor.mime_type);
                continue;
            }

            let tier = descriptor.quality();
            if tier == VideoQuality::Unknown {
                trace!("Resolver: skipping unranked itag {}", descriptor.itag);
                continue;
            }

            let exact = tier == desired;
            let improves = best.as_ref().map_or(true, |(current, _)| tier > *current);
            if !exact && !improves {
                continue;
            }

            match descriptor.playback_url() {
                Some(url) => {
                    *best = Some((tier, url));
                    if exact {
                        return true;
                    }
                }
                None => trace!("Resolver: stream url for itag {} did not parse", descriptor.itag),
            }
        }
        false
    }

    async fn with_timeout<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, TransportError>>,
    ) -> Result<T, TransportError> {
        match tokio::time::timeout(self.config.timeout(), fut).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout),
        }
    }
}

/// Pulls the comma-joined stream lists out of a decoded response, stream
/// map first, then adaptive formats.
fn collect_segments(response: &HashMap<String, String>) -> Vec<String> {
    let mut segments = Vec::new();
    for key in ["url_encoded_fmt_stream_map", "adaptive_fmts"] {
        if let Some(value) = response.get(key) {
            if !value.is_empty() {
                segments.extend(value.split(',').map(str::to_string));
            }
        }
    }
    segments
}
