use lingobot::domain::VoiceCatalog;

#[test]
fn given_catalog_when_listing_then_has_six_voices_ending_with_bella() {
    let voices = VoiceCatalog::voices();

    assert_eq!(voices.len(), 6);
    assert_eq!(VoiceCatalog::len(), 6);
    assert_eq!(voices[0].name, "Josh");
    assert_eq!(voices[5].name, "Bella");
    assert_eq!(voices[5].id, "EXAVITQu4vr4xnSDxMaL");
}

#[test]
fn given_index_in_range_when_resolving_then_returns_that_voice() {
    assert_eq!(VoiceCatalog::resolve(0).name, "Josh");
    assert_eq!(VoiceCatalog::resolve(2).id, "onwK4e9ZLuTAKqWW03F9");
}

#[test]
fn given_index_equal_to_catalog_length_when_resolving_then_clamps_to_last_voice() {
    let voice = VoiceCatalog::resolve(VoiceCatalog::len() as i32);

    assert_eq!(voice.name, "Bella");
}

#[test]
fn given_index_far_out_of_range_when_resolving_then_clamps_to_last_voice() {
    assert_eq!(VoiceCatalog::resolve(999).name, "Bella");
}

#[test]
fn given_negative_index_when_resolving_then_clamps_to_last_voice() {
    assert_eq!(VoiceCatalog::resolve(-1).name, "Bella");
}
