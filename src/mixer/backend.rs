//! Hardware mixer backend abstraction
//!
//! Mixer-API-agnostic trait for an opened hardware mixer connection, with
//! implementations for ALSA and a scripted fake for tests.

use crate::error::Result;
use crate::mixer::level::Attenuation;

/// An opened hardware mixer connection
///
/// Implementations own the connection for their lifetime; dropping the
/// backend closes it. Element handles ([`MixerBackend::ControlId`]) are
/// opaque and only meaningful against the backend that produced them.
///
/// Mutating operations take `&mut self`: a hardware mixer connection does
/// not tolerate concurrent writes, so callers serialize through the
/// exclusive borrow.
pub trait MixerBackend {
    /// Opaque handle to one mixer element
    type ControlId: Clone;

    /// Enumerate every mixer element, in the hardware's native order
    ///
    /// # Errors
    ///
    /// Returns an error if the element list cannot be read.
    fn controls(&self) -> Result<Vec<Self::ControlId>>;

    /// Get an element's name
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be queried.
    fn control_name(&self, id: &Self::ControlId) -> Result<String>;

    /// Whether the element supports playback volume adjustment
    fn has_playback_volume(&self, id: &Self::ControlId) -> bool;

    /// Whether the element exposes an on/off playback switch
    fn has_playback_switch(&self, id: &Self::ControlId) -> bool;

    /// Request a playback level on all channels of an element
    ///
    /// The element snaps the request to its own granularity, choosing the
    /// closest representable level that is not quieter than requested.
    /// Read the level actually applied back with
    /// [`MixerBackend::playback_db`].
    ///
    /// # Errors
    ///
    /// Returns an error if the element rejects the write.
    fn set_playback_db(&mut self, id: &Self::ControlId, level: Attenuation) -> Result<()>;

    /// Read the applied playback level (front-left channel, taken as
    /// representative of all channels)
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be read.
    fn playback_db(&self, id: &Self::ControlId) -> Result<Attenuation>;

    /// Set the playback switch state on all channels of an element
    ///
    /// `on` follows the hardware convention: switched on means audio
    /// passes through.
    ///
    /// # Errors
    ///
    /// Returns an error if the element rejects the write.
    fn set_playback_switch(&mut self, id: &Self::ControlId, on: bool) -> Result<()>;
}
