//! # mixvol
//!
//! Master volume and mute abstraction over multi-control hardware mixers.
//!
//! A physical audio device often spreads its output level across several
//! independently-ranged hardware controls chained together (a digital "PCM"
//! stage feeding an analog "Master" stage, for example). This crate hides
//! that: it discovers which mixer elements form the main output path, and
//! distributes a single requested attenuation across them so the combined
//! effect matches the request as closely as hardware granularity allows. It
//! also exposes a single on/off mute toggle backed by the first hardware
//! playback switch found on the device.
//!
//! ## Example
//!
//! ```rust
//! use mixvol::{Attenuation, MixerSession};
//! use mixvol::testing::{FakeControl, FakeMixer};
//!
//! # fn example() -> Result<(), mixvol::MixerError> {
//! // A device with a coarse PCM stage followed by a Master stage.
//! let fake = FakeMixer::new()
//!     .with_control(FakeControl::new("PCM").with_volume(-1500, 0, 50))
//!     .with_control(FakeControl::new("Master").with_volume(-4600, 0, 100).with_switch());
//!
//! let mut session = MixerSession::new(fake)?;
//! session.set_volume(Attenuation::from_db(-20.0));
//! session.set_mute(false);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! On Linux with the `alsa-backend` feature enabled, open a real device
//! instead:
//!
//! ```text
//! let mut session = MixerSession::<AlsaMixer>::open("hw:0")?;
//! session.set_volume(Attenuation::from_db(-20.0));
//! ```
//!
//! # Architecture
//!
//! - [`MixerBackend`] — the seam to the hardware mixer connection; one
//!   implementation per mixer API, plus a scripted fake for tests.
//! - [`MixerSession`] — discovers the main-volume controls and the mute
//!   switch once at construction, then applies volume and mute requests
//!   against them.
//! - [`Attenuation`] — the device-independent level unit (millibels, ≤ 0
//!   by convention, 0 = full volume).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types
pub mod error;
/// Mixer session, classifier and backends
pub mod mixer;
/// Testing utilities
pub mod testing;

// Re-exports
#[cfg(all(feature = "alsa-backend", target_os = "linux"))]
pub use mixer::{AlsaControlId, AlsaMixer};
pub use error::{MixerError, Result};
pub use mixer::{Attenuation, Classification, MixerBackend, MixerSession, classify};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
