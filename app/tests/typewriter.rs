use app::errors::Error;
use app::state::typewriter::{Typewriter, HOLD_DURATION, TYPE_INTERVAL};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const PHRASES: &[&str] = &["ab", "xyz"];

fn type_out(typewriter: &mut Typewriter) {
    while !typewriter.is_complete() {
        typewriter.advance();
    }
}

#[test]
fn types_one_character_per_step() {
    setup();

    let mut typewriter = Typewriter::new(PHRASES).unwrap();
    assert_eq!("", typewriter.text());
    assert_eq!(TYPE_INTERVAL, typewriter.next_delay());
    typewriter.advance();
    assert_eq!("a", typewriter.text());
    typewriter.advance();
    assert_eq!("ab", typewriter.text());
    assert!(typewriter.is_complete());
    assert_eq!(HOLD_DURATION, typewriter.next_delay());
}

#[test]
fn clears_then_moves_to_the_next_phrase() {
    setup();

    let mut typewriter = Typewriter::new(PHRASES).unwrap();
    type_out(&mut typewriter);
    typewriter.advance();
    assert_eq!(1, typewriter.phrase_index());
    assert_eq!("", typewriter.text());
    assert_eq!(TYPE_INTERVAL, typewriter.next_delay());
    typewriter.advance();
    assert_eq!("x", typewriter.text());
}

#[test]
fn wraps_around_after_the_last_phrase() {
    setup();

    let mut typewriter = Typewriter::new(PHRASES).unwrap();
    for expected in [1, 0, 1] {
        type_out(&mut typewriter);
        typewriter.advance();
        assert_eq!(expected, typewriter.phrase_index());
        assert_eq!("", typewriter.text());
    }
}

#[test]
fn counts_characters_not_bytes() {
    setup();

    let mut typewriter = Typewriter::new(&["été"]).unwrap();
    typewriter.advance();
    assert_eq!("é", typewriter.text());
    typewriter.advance();
    typewriter.advance();
    assert_eq!("été", typewriter.text());
    assert!(typewriter.is_complete());
}

#[test]
fn needs_at_least_one_phrase() {
    setup();

    assert_eq!(Err(Error::NoPhrases), Typewriter::new(&[]));
}

#[test]
fn site_phrases_cycle() {
    setup();

    let phrases = app::content::TYPEWRITER_PHRASES;
    let mut typewriter = Typewriter::new(phrases).unwrap();
    for i in 0..phrases.len() {
        assert_eq!(phrases[i], typewriter.phrase());
        type_out(&mut typewriter);
        assert_eq!(phrases[i], typewriter.text());
        typewriter.advance();
    }
    assert_eq!(0, typewriter.phrase_index());
}
