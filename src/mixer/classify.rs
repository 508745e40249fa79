//! Control classification
//!
//! Decides which mixer elements belong to the main output level path and
//! which can act as a mute switch, from nothing but the element's name and
//! capability flags.

/// Control names recognized as part of the main output level path.
///
/// Matching is exact and case-sensitive; the order here carries no runtime
/// meaning, the session applies controls in the hardware's own enumeration
/// order.
pub const MAIN_VOLUME_CONTROL_NAMES: &[&str] = &["Master", "Digital", "PCM"];

/// How a mixer element participates in the main output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The element is one of the main volume controls
    pub is_main_volume: bool,
    /// The element exposes an on/off playback switch usable for mute
    pub is_mute_capable: bool,
}

/// Classify a mixer element by name and capability flags.
///
/// An element is a main volume control iff its name exactly matches one of
/// [`MAIN_VOLUME_CONTROL_NAMES`] and it supports playback volume. Mute
/// capability is independent of the name: any element with a playback
/// switch qualifies. Absence of a match is a valid outcome, not an error.
#[must_use]
pub fn classify(
    name: &str,
    has_playback_volume: bool,
    has_playback_switch: bool,
) -> Classification {
    Classification {
        is_main_volume: has_playback_volume
            && MAIN_VOLUME_CONTROL_NAMES.contains(&name),
        is_mute_capable: has_playback_switch,
    }
}
