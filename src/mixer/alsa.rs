//! ALSA mixer backend
//!
//! [`MixerBackend`] implementation over the `alsa` crate's simple mixer
//! interface. Elements are addressed by owned name/index pairs so no borrow
//! of the mixer handle is held between calls.

use alsa::Round;
use alsa::mixer::{MilliBel, Mixer, Selem, SelemChannelId, SelemId};
use tracing::debug;

use crate::error::{MixerError, Result};
use crate::mixer::backend::MixerBackend;
use crate::mixer::level::Attenuation;
use crate::mixer::session::MixerSession;

/// Address of one simple mixer element, stable across lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlsaControlId {
    name: String,
    index: u32,
}

impl AlsaControlId {
    fn selem_id(&self) -> SelemId {
        SelemId::new(&self.name, self.index)
    }
}

/// An opened ALSA mixer connection for one sound device
pub struct AlsaMixer {
    mixer: Mixer,
}

impl AlsaMixer {
    /// Open the ALSA mixer for a device (e.g. `"hw:0"`).
    ///
    /// Performs the full open/attach/register/load sequence; the
    /// connection closes when the returned value drops.
    ///
    /// # Errors
    ///
    /// Returns [`MixerError::OpenFailed`] if any step of the sequence
    /// fails. Nothing stays open on failure.
    pub fn open(device: &str) -> Result<Self> {
        debug!(device, "opening alsa mixer");
        let mixer = Mixer::new(device, false).map_err(|err| MixerError::OpenFailed {
            device: device.to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { mixer })
    }

    fn selem(&self, id: &AlsaControlId) -> Result<Selem<'_>> {
        self.mixer
            .find_selem(&id.selem_id())
            .ok_or_else(|| MixerError::ControlAccess {
                message: format!("control {} disappeared", id.name),
                source: None,
            })
    }
}

impl MixerBackend for AlsaMixer {
    type ControlId = AlsaControlId;

    fn controls(&self) -> Result<Vec<AlsaControlId>> {
        let mut controls = Vec::new();
        for elem in self.mixer.iter() {
            let Some(selem) = Selem::new(elem) else {
                continue;
            };
            let selem_id = selem.get_id();
            let name = selem_id
                .get_name()
                .map_err(|err| MixerError::EnumerationFailed {
                    message: format!("element name query failed: {err}"),
                    source: Some(Box::new(err)),
                })?;
            controls.push(AlsaControlId {
                name: name.to_string(),
                index: selem_id.get_index(),
            });
        }
        Ok(controls)
    }

    fn control_name(&self, id: &AlsaControlId) -> Result<String> {
        Ok(id.name.clone())
    }

    fn has_playback_volume(&self, id: &AlsaControlId) -> bool {
        self.selem(id)
            .is_ok_and(|selem| selem.has_playback_volume())
    }

    fn has_playback_switch(&self, id: &AlsaControlId) -> bool {
        self.selem(id)
            .is_ok_and(|selem| selem.has_playback_switch())
    }

    fn set_playback_db(&mut self, id: &AlsaControlId, level: Attenuation) -> Result<()> {
        // Round::Ceil picks the representable level closest to but not
        // quieter than the request.
        self.selem(id)?
            .set_playback_db_all(MilliBel(level.millibels()), Round::Ceil)
            .map_err(|err| MixerError::ControlAccess {
                message: format!("playback dB write failed for {}: {err}", id.name),
                source: Some(Box::new(err)),
            })
    }

    fn playback_db(&self, id: &AlsaControlId) -> Result<Attenuation> {
        let applied = self
            .selem(id)?
            .get_playback_vol_db(SelemChannelId::FrontLeft)
            .map_err(|err| MixerError::ControlAccess {
                message: format!("playback dB read failed for {}: {err}", id.name),
                source: Some(Box::new(err)),
            })?;
        Ok(Attenuation::from_millibels(applied.0))
    }

    fn set_playback_switch(&mut self, id: &AlsaControlId, on: bool) -> Result<()> {
        self.selem(id)?
            .set_playback_switch_all(i32::from(on))
            .map_err(|err| MixerError::ControlAccess {
                message: format!("playback switch write failed for {}: {err}", id.name),
                source: Some(Box::new(err)),
            })
    }
}

impl MixerSession<AlsaMixer> {
    /// Open the ALSA mixer for a device and build a session over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the mixer cannot be opened or its elements
    /// cannot be enumerated.
    pub fn open(device: &str) -> Result<Self> {
        Self::new(AlsaMixer::open(device)?)
    }
}
