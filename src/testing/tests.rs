use crate::error::MixerError;
use crate::mixer::{Attenuation, MixerBackend};
use crate::testing::{FakeControl, FakeMixer};

#[test]
fn test_enumeration_reports_declaration_order() {
    let fake = FakeMixer::new()
        .with_control(FakeControl::new("PCM"))
        .with_control(FakeControl::new("Master"));

    assert_eq!(fake.controls().unwrap(), vec![0, 1]);
    assert_eq!(fake.control_name(&0).unwrap(), "PCM");
    assert_eq!(fake.control_name(&1).unwrap(), "Master");
}

#[test]
fn test_capability_flags() {
    let fake = FakeMixer::new()
        .with_control(FakeControl::new("Master").with_volume(-4600, 0, 100))
        .with_control(FakeControl::new("Headphone").with_switch());

    assert!(fake.has_playback_volume(&0));
    assert!(!fake.has_playback_switch(&0));
    assert!(!fake.has_playback_volume(&1));
    assert!(fake.has_playback_switch(&1));
}

#[test]
fn test_volume_snaps_upward_to_the_grid() {
    let mut fake =
        FakeMixer::new().with_control(FakeControl::new("Master").with_volume(-500, 0, 33));
    let handle = fake.handle();

    // Representable levels are -500 + 33k; -71 is the closest one that is
    // not quieter than -100 (the next one down is -104).
    fake.set_playback_db(&0, Attenuation::from_millibels(-100))
        .unwrap();
    assert_eq!(handle.level("Master"), -71);
    assert_eq!(fake.playback_db(&0).unwrap().millibels(), -71);
}

#[test]
fn test_volume_clamps_to_range_ends() {
    let mut fake =
        FakeMixer::new().with_control(FakeControl::new("Master").with_volume(-1500, 0, 50));

    fake.set_playback_db(&0, Attenuation::from_millibels(-9000))
        .unwrap();
    assert_eq!(fake.playback_db(&0).unwrap().millibels(), -1500);

    fake.set_playback_db(&0, Attenuation::FULL).unwrap();
    assert_eq!(fake.playback_db(&0).unwrap(), Attenuation::FULL);
}

#[test]
fn test_volume_write_without_capability_fails() {
    let mut fake = FakeMixer::new().with_control(FakeControl::new("Headphone").with_switch());

    let result = fake.set_playback_db(&0, Attenuation::FULL);
    assert!(matches!(result, Err(MixerError::ControlAccess { .. })));
}

#[test]
fn test_switch_state_tracks_writes() {
    let mut fake = FakeMixer::new().with_control(FakeControl::new("Master").with_switch());
    let handle = fake.handle();

    assert!(handle.switch_on("Master"));
    fake.set_playback_switch(&0, false).unwrap();
    assert!(!handle.switch_on("Master"));
    fake.set_playback_switch(&0, true).unwrap();
    assert!(handle.switch_on("Master"));
}

#[test]
fn test_drop_marks_connection_closed() {
    let fake = FakeMixer::new().with_control(FakeControl::new("Master"));
    let handle = fake.handle();

    assert!(!handle.is_closed());
    drop(fake);
    assert!(handle.is_closed());
}

#[test]
fn test_scripted_failures() {
    let fake = FakeMixer::new().with_broken_enumeration();
    assert!(matches!(
        fake.controls(),
        Err(MixerError::EnumerationFailed { .. })
    ));

    let fake = FakeMixer::new().with_control(FakeControl::new("Master").with_broken_name());
    assert!(matches!(
        fake.control_name(&0),
        Err(MixerError::ControlAccess { .. })
    ));

    let mut fake = FakeMixer::new().with_control(
        FakeControl::new("Master")
            .with_volume(-4600, 0, 100)
            .with_broken_volume_write(),
    );
    let handle = fake.handle();
    assert!(matches!(
        fake.set_playback_db(&0, Attenuation::from_millibels(-500)),
        Err(MixerError::ControlAccess { .. })
    ));
    // A rejected write leaves the level untouched.
    assert_eq!(handle.level("Master"), 0);

    let fake = FakeMixer::new().with_control(
        FakeControl::new("Master")
            .with_volume(-4600, 0, 100)
            .with_broken_readback(),
    );
    assert!(matches!(
        fake.playback_db(&0),
        Err(MixerError::ControlAccess { .. })
    ));
}
