//! Integration tests for the typewriter bio reveal

use nightsky_foundation::Timestamp;
use nightsky_portfolio::{PLACEHOLDER_BIO, Profile, Typewriter, parse_profile};

fn t(ms: u64) -> Timestamp {
    Timestamp::from_millis(ms)
}

#[test]
fn one_character_every_fifty_ms() {
    let writer = Typewriter::new("Hello", t(1_000));
    assert_eq!(writer.visible(t(1_000)), "");
    assert_eq!(writer.visible(t(1_049)), "");
    assert_eq!(writer.visible(t(1_050)), "H");
    assert_eq!(writer.visible(t(1_199)), "Hel");
    assert_eq!(writer.completes_at(), t(1_250));
    assert!(writer.is_complete(t(1_250)));
    assert_eq!(writer.visible(t(9_999)), "Hello");
}

#[test]
fn multibyte_text_is_cut_on_char_boundaries() {
    let writer = Typewriter::new("héllo wörld", t(0));
    assert_eq!(writer.visible(t(100)), "hé");
    assert_eq!(writer.shown_chars(t(100_000)), 11);
}

#[test]
fn missing_bio_uses_placeholder() {
    let profile = parse_profile(r#"[{"name": "Ada", "bio": "  "}]"#).unwrap();
    let writer = Typewriter::for_bio(profile.as_ref(), t(0));
    assert_eq!(writer.text(), PLACEHOLDER_BIO);

    let writer = Typewriter::for_bio(None, t(0));
    assert_eq!(writer.text(), PLACEHOLDER_BIO);

    let profile = Profile {
        bio: Some("Builds things.".to_string()),
        ..Profile::default()
    };
    assert_eq!(Typewriter::for_bio(Some(&profile), t(0)).text(), "Builds things.");
}
