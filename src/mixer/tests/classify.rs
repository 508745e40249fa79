use crate::mixer::classify::{MAIN_VOLUME_CONTROL_NAMES, classify};

#[test]
fn test_recognized_names_with_volume_are_main() {
    for name in MAIN_VOLUME_CONTROL_NAMES {
        let class = classify(name, true, false);
        assert!(class.is_main_volume, "{name} should be a main control");
        assert!(!class.is_mute_capable);
    }
}

#[test]
fn test_recognized_name_without_volume_is_not_main() {
    let class = classify("Master", false, true);
    assert!(!class.is_main_volume);
    assert!(class.is_mute_capable);
}

#[test]
fn test_unrecognized_name_is_not_main() {
    let class = classify("Headphone", true, false);
    assert!(!class.is_main_volume);
    assert!(!class.is_mute_capable);
}

#[test]
fn test_matching_is_case_sensitive() {
    assert!(!classify("master", true, false).is_main_volume);
    assert!(!classify("MASTER", true, false).is_main_volume);
    assert!(!classify("pcm", true, false).is_main_volume);
}

#[test]
fn test_matching_is_exact() {
    assert!(!classify("Master Playback", true, false).is_main_volume);
    assert!(!classify(" PCM", true, false).is_main_volume);
    assert!(!classify("", true, true).is_main_volume);
}

#[test]
fn test_mute_capability_ignores_name() {
    assert!(classify("Headphone", false, true).is_mute_capable);
    assert!(classify("Master", true, true).is_mute_capable);
    assert!(!classify("Master", true, false).is_mute_capable);
}
