//! Testing utilities
//!
//! A scripted in-memory [`MixerBackend`] for exercising session logic
//! without hardware. Controls are declared up front with a name, an
//! optional quantized volume range and an optional playback switch; a
//! [`FakeHandle`] taken before the backend is handed to a session lets
//! tests observe applied levels, switch states and connection teardown
//! afterwards.

#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex};

use crate::error::{MixerError, Result};
use crate::mixer::{Attenuation, MixerBackend};

/// Quantized playback volume range, all values in millibels
#[derive(Debug, Clone, Copy)]
struct VolumeRange {
    min: i64,
    max: i64,
    step: i64,
}

impl VolumeRange {
    /// Closest representable level that is not quieter than requested,
    /// clamped to the range. Requests below the floor land on the floor.
    fn snap_ceil(self, requested: i64) -> i64 {
        if requested <= self.min {
            return self.min;
        }
        if requested >= self.max {
            return self.max;
        }
        // Round-up division; requested > min and step > 0 here.
        let steps = (requested - self.min + self.step - 1) / self.step;
        (self.min + steps * self.step).min(self.max)
    }
}

/// One scripted mixer element
#[derive(Debug, Clone)]
pub struct FakeControl {
    name: String,
    volume: Option<VolumeRange>,
    has_switch: bool,
    fail_name: bool,
    fail_volume_write: bool,
    fail_readback: bool,
    // Live state
    level: i64,
    switch_on: bool,
}

impl FakeControl {
    /// Create a control with the given name and no capabilities
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            volume: None,
            has_switch: false,
            fail_name: false,
            fail_volume_write: false,
            fail_readback: false,
            level: 0,
            switch_on: true,
        }
    }

    /// Give the control a playback volume range (millibels, quantized
    /// to `step`)
    ///
    /// # Panics
    ///
    /// Panics if the step is not positive or the range is reversed.
    #[must_use]
    pub fn with_volume(mut self, min_mb: i64, max_mb: i64, step_mb: i64) -> Self {
        assert!(step_mb > 0, "volume step must be positive");
        assert!(min_mb <= max_mb, "volume range must be ordered");
        self.volume = Some(VolumeRange {
            min: min_mb,
            max: max_mb,
            step: step_mb,
        });
        self
    }

    /// Give the control an on/off playback switch (initially on)
    #[must_use]
    pub fn with_switch(mut self) -> Self {
        self.has_switch = true;
        self
    }

    /// Make name queries against this control fail, to exercise
    /// construction failure paths
    #[must_use]
    pub fn with_broken_name(mut self) -> Self {
        self.fail_name = true;
        self
    }

    /// Make volume writes against this control fail while leaving its
    /// level untouched, to exercise tolerated per-stage failures
    #[must_use]
    pub fn with_broken_volume_write(mut self) -> Self {
        self.fail_volume_write = true;
        self
    }

    /// Make level readbacks against this control fail, to exercise the
    /// budget handling when the applied level cannot be observed
    #[must_use]
    pub fn with_broken_readback(mut self) -> Self {
        self.fail_readback = true;
        self
    }
}

#[derive(Debug, Default)]
struct FakeState {
    controls: Vec<FakeControl>,
    fail_enumeration: bool,
    closed: bool,
}

impl FakeState {
    fn control(&self, id: usize) -> Result<&FakeControl> {
        self.controls.get(id).ok_or_else(|| MixerError::ControlAccess {
            message: format!("no control with id {id}"),
            source: None,
        })
    }
}

/// Scripted mixer backend
///
/// Elements are addressed by their index in declaration order, which is
/// also the enumeration order reported to the session.
#[derive(Debug, Default)]
pub struct FakeMixer {
    state: Arc<Mutex<FakeState>>,
}

impl FakeMixer {
    /// Create an empty fake mixer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control; declaration order is enumeration order
    #[must_use]
    pub fn with_control(self, control: FakeControl) -> Self {
        self.state.lock().unwrap().controls.push(control);
        self
    }

    /// Make enumeration fail, to exercise construction failure paths
    #[must_use]
    pub fn with_broken_enumeration(self) -> Self {
        self.state.lock().unwrap().fail_enumeration = true;
        self
    }

    /// Take an observer handle that outlives the backend
    #[must_use]
    pub fn handle(&self) -> FakeHandle {
        FakeHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl Drop for FakeMixer {
    fn drop(&mut self) {
        self.state.lock().unwrap().closed = true;
    }
}

impl MixerBackend for FakeMixer {
    type ControlId = usize;

    fn controls(&self) -> Result<Vec<usize>> {
        let state = self.state.lock().unwrap();
        if state.fail_enumeration {
            return Err(MixerError::EnumerationFailed {
                message: "scripted enumeration failure".to_string(),
                source: None,
            });
        }
        Ok((0..state.controls.len()).collect())
    }

    fn control_name(&self, id: &usize) -> Result<String> {
        let state = self.state.lock().unwrap();
        let control = state.control(*id)?;
        if control.fail_name {
            return Err(MixerError::ControlAccess {
                message: format!("scripted name failure for control {id}"),
                source: None,
            });
        }
        Ok(control.name.clone())
    }

    fn has_playback_volume(&self, id: &usize) -> bool {
        let state = self.state.lock().unwrap();
        state.control(*id).is_ok_and(|c| c.volume.is_some())
    }

    fn has_playback_switch(&self, id: &usize) -> bool {
        let state = self.state.lock().unwrap();
        state.control(*id).is_ok_and(|c| c.has_switch)
    }

    fn set_playback_db(&mut self, id: &usize, level: Attenuation) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.control(*id)?;
        let control = &mut state.controls[*id];
        let range = control.volume.ok_or_else(|| MixerError::ControlAccess {
            message: format!("control {id} has no playback volume"),
            source: None,
        })?;
        if control.fail_volume_write {
            return Err(MixerError::ControlAccess {
                message: format!("scripted volume write failure for control {id}"),
                source: None,
            });
        }
        control.level = range.snap_ceil(level.millibels());
        Ok(())
    }

    fn playback_db(&self, id: &usize) -> Result<Attenuation> {
        let state = self.state.lock().unwrap();
        let control = state.control(*id)?;
        if control.volume.is_none() {
            return Err(MixerError::ControlAccess {
                message: format!("control {id} has no playback volume"),
                source: None,
            });
        }
        if control.fail_readback {
            return Err(MixerError::ControlAccess {
                message: format!("scripted readback failure for control {id}"),
                source: None,
            });
        }
        Ok(Attenuation::from_millibels(control.level))
    }

    fn set_playback_switch(&mut self, id: &usize, on: bool) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.control(*id)?;
        let control = &mut state.controls[*id];
        if !control.has_switch {
            return Err(MixerError::ControlAccess {
                message: format!("control {id} has no playback switch"),
                source: None,
            });
        }
        control.switch_on = on;
        Ok(())
    }
}

/// Observer over a [`FakeMixer`]'s state
///
/// Stays usable after the backend (and any session built on it) has been
/// dropped.
#[derive(Debug, Clone)]
pub struct FakeHandle {
    state: Arc<Mutex<FakeState>>,
}

impl FakeHandle {
    /// Whether the backend has been dropped (connection closed)
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }

    /// Applied level of the named control, in millibels
    ///
    /// # Panics
    ///
    /// Panics if no control has that name.
    #[must_use]
    pub fn level(&self, name: &str) -> i64 {
        self.with_control(name, |c| c.level)
    }

    /// Switch state of the named control; `true` means audio passes
    ///
    /// # Panics
    ///
    /// Panics if no control has that name.
    #[must_use]
    pub fn switch_on(&self, name: &str) -> bool {
        self.with_control(name, |c| c.switch_on)
    }

    fn with_control<T>(&self, name: &str, f: impl FnOnce(&FakeControl) -> T) -> T {
        let state = self.state.lock().unwrap();
        let control = state
            .controls
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no fake control named {name}"));
        f(control)
    }
}
