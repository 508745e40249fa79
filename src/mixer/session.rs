//! Mixer session
//!
//! Owns an opened mixer connection and the controls discovered on it, and
//! applies master-volume and mute requests against them.

use tracing::{debug, trace};

use crate::error::Result;
use crate::mixer::backend::MixerBackend;
use crate::mixer::classify::classify;
use crate::mixer::level::Attenuation;

/// A device's main volume controls and mute switch, behind one handle
///
/// Built once per opened device. Discovery happens entirely at
/// construction: the ordered list of main volume controls and the selected
/// mute switch never change afterwards. Dropping the session releases the
/// underlying connection.
pub struct MixerSession<B: MixerBackend> {
    backend: B,
    /// Main volume controls in the hardware's enumeration order
    /// (normally 'Master' and 'PCM').
    volume_controls: Vec<B::ControlId>,
    /// First playback switch found during enumeration, if any.
    playback_switch: Option<B::ControlId>,
}

impl<B: MixerBackend> MixerSession<B> {
    /// Discover the main volume controls and mute switch on an opened
    /// backend and build a session around them.
    ///
    /// Enumerates every element exactly once, in the hardware's native
    /// order. Elements whose name marks them as part of the main output
    /// path are collected in that order; the first element with a playback
    /// switch becomes the mute control, and later switches are ignored —
    /// one mute is sufficient.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration or an element query fails. On
    /// failure the backend is dropped, closing the connection; no partial
    /// session escapes.
    pub fn new(backend: B) -> Result<Self> {
        let mut volume_controls = Vec::new();
        let mut playback_switch = None;

        for id in backend.controls()? {
            let name = backend.control_name(&id)?;
            let class = classify(
                &name,
                backend.has_playback_volume(&id),
                backend.has_playback_switch(&id),
            );

            if class.is_main_volume {
                debug!(control = %name, "add main volume control");
                volume_controls.push(id.clone());
            }

            if class.is_mute_capable && playback_switch.is_none() {
                debug!(control = %name, "using playback switch as mute");
                playback_switch = Some(id);
            }
        }

        Ok(Self {
            backend,
            volume_controls,
            playback_switch,
        })
    }

    /// The discovered main volume controls, in application order
    #[must_use]
    pub fn volume_controls(&self) -> &[B::ControlId] {
        &self.volume_controls
    }

    /// Whether the device offers a hardware mute switch
    #[must_use]
    pub fn has_mute_control(&self) -> bool {
        self.playback_switch.is_some()
    }

    /// Distribute a requested attenuation across the volume controls.
    ///
    /// Walks the controls in order, asking each to take as much of the
    /// remaining budget as it can represent (each element snaps to the
    /// closest level not quieter than requested), then reads back what was
    /// applied and carries the difference to the next control. Once the
    /// budget is satisfied the remaining controls land at 0 dB. With no
    /// volume controls this is a no-op.
    ///
    /// Best-effort: an element rejecting a write leaves the session valid
    /// and the loop moves on.
    pub fn set_volume(&mut self, level: Attenuation) {
        let mut remaining = level;

        for id in &self.volume_controls {
            if let Err(err) = self.backend.set_playback_db(id, remaining) {
                trace!(%err, "volume write rejected");
            }
            match self.backend.playback_db(id) {
                Ok(applied) => remaining -= applied,
                Err(err) => trace!(%err, "volume readback failed"),
            }
        }
    }

    /// Set the mute state.
    ///
    /// Drives the selected playback switch on all channels; switched on
    /// means audio passes through, so muting turns the switch off. A
    /// silent no-op on devices without a mute-capable control.
    pub fn set_mute(&mut self, muted: bool) {
        let Some(id) = &self.playback_switch else {
            return;
        };
        debug!(muted, "set mute switch");
        if let Err(err) = self.backend.set_playback_switch(id, !muted) {
            trace!(%err, "mute write rejected");
        }
    }
}
