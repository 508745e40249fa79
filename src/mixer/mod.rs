//! Hardware mixer abstraction
//!
//! [`MixerSession`] turns a device's chain of hardware volume controls into
//! one logical master volume and one logical mute switch. The session talks
//! to the hardware through the [`MixerBackend`] trait, so the same session
//! logic drives real ALSA mixers and the scripted fake used in tests.

pub mod backend;
pub mod classify;
pub mod level;
pub mod session;

#[cfg(all(feature = "alsa-backend", target_os = "linux"))]
pub mod alsa;


#[cfg(all(feature = "alsa-backend", target_os = "linux"))]
pub use alsa::{AlsaControlId, AlsaMixer};
pub use backend::MixerBackend;
pub use classify::{Classification, classify};
pub use level::Attenuation;
pub use session::MixerSession;
