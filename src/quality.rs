use serde::{Deserialize, Serialize};

/// Coarse video quality tier, named after the platform's own quality labels.
///
/// Tiers form a strict total order from `Unknown` (lowest, never playable)
/// up to `Highres`. The derived `Ord` follows declaration order, so
/// comparing two tiers compares desirability directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    /// Format code absent from the lookup table. Always ranked lowest and
    /// excluded from stream selection.
    Unknown = 0,
    /// 144p.
    Tiny = 1,
    /// 240p.
    Small = 2,
    /// 360p.
    Medium = 3,
    /// 480p.
    Large = 4,
    Hd720 = 5,
    Hd1080 = 6,
    /// Anything above 1080p (1440p, 2160p, the old 3072p uploads).
    Highres = 7,
}

impl VideoQuality {
    /// Map a platform format code (itag) to its quality tier.
    ///
    /// The mapping is a maintained table, not a formula: the platform has
    /// assigned codes ad hoc over the years and new ones appear over time.
    /// Codes not in the table, including every audio-only itag, fail soft
    /// to [`VideoQuality::Unknown`] so that unrecognized streams are skipped
    /// rather than crashing resolution.
    pub fn from_itag(itag: i32) -> Self {
        match itag {
            // progressive + DASH video, grouped by tier; 82-85 and 100-102
            // are the stereoscopic variants of their tier
            17 | 160 | 278 => Self::Tiny,
            5 | 6 | 36 | 133 | 242 => Self::Small,
            18 | 34 | 43 | 82 | 100 | 134 | 243 => Self::Medium,
            35 | 44 | 59 | 78 | 83 | 101 | 135 | 244 => Self::Large,
            22 | 45 | 84 | 102 | 136 | 247 | 298 | 302 => Self::Hd720,
            37 | 46 | 85 | 137 | 248 | 299 | 303 => Self::Hd1080,
            38 | 138 | 264 | 266 | 271 | 272 | 308 | 313 | 315 => Self::Highres,
            _ => Self::Unknown,
        }
    }

    /// Position of this tier in the ranked sequence, `Unknown` first.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The platform's label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Hd720 => "hd720",
            Self::Hd1080 => "hd1080",
            Self::Highres => "highres",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_progressive_itags() {
        assert_eq!(VideoQuality::from_itag(22), VideoQuality::Hd720);
        assert_eq!(VideoQuality::from_itag(18), VideoQuality::Medium);
        assert_eq!(VideoQuality::from_itag(36), VideoQuality::Small);
        assert_eq!(VideoQuality::from_itag(37), VideoQuality::Hd1080);
        assert_eq!(VideoQuality::from_itag(38), VideoQuality::Highres);
    }

    #[test]
    fn test_unknown_itags_fail_soft() {
        assert_eq!(VideoQuality::from_itag(999999), VideoQuality::Unknown);
        assert_eq!(VideoQuality::from_itag(0), VideoQuality::Unknown);
        assert_eq!(VideoQuality::from_itag(-5), VideoQuality::Unknown);
        // audio-only formats carry no video tier
        assert_eq!(VideoQuality::from_itag(140), VideoQuality::Unknown);
        assert_eq!(VideoQuality::from_itag(251), VideoQuality::Unknown);
    }

    #[test]
    fn test_tier_order_is_total_with_unknown_lowest() {
        let ranked = [
            VideoQuality::Unknown,
            VideoQuality::Tiny,
            VideoQuality::Small,
            VideoQuality::Medium,
            VideoQuality::Large,
            VideoQuality::Hd720,
            VideoQuality::Hd1080,
            VideoQuality::Highres,
        ];
        for pair in ranked.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(VideoQuality::Unknown.rank(), 0);
        assert_eq!(VideoQuality::Hd720.rank(), 5);
        assert_eq!(VideoQuality::Highres.rank(), 7);
    }

    #[test]
    fn test_labels_match_platform_vocabulary() {
        assert_eq!(VideoQuality::Tiny.label(), "tiny");
        assert_eq!(VideoQuality::Hd720.label(), "hd720");
        assert_eq!(VideoQuality::Highres.label(), "highres");
    }
}
