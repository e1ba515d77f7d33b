//! # ChatRS Matcher Integration Tests
//!
//! File: cli/tests/matcher_tests.rs
//! Author: Christi Mahu
//!
//! Routing properties of the library's matcher, exercised through the public
//! `chatrs::matcher` API with the built-in tables.
//!
use chatrs::matcher::{builtin, normalize, MatchKind, Matcher};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_prompt_replies_come_from_their_group() {
    let matcher = Matcher::builtin();
    let mut rng = StdRng::seed_from_u64(7);

    for (idx, entry) in matcher.table().entries().iter().enumerate() {
        for trigger in entry.prompts.triggers() {
            for _ in 0..5 {
                let reply = matcher.respond_with(trigger, &mut rng);
                // An earlier group may share a trigger; the first one wins.
                let (first, owner) = matcher.table().find(trigger).unwrap();
                assert!(first <= idx);
                assert_eq!(reply.kind, MatchKind::Prompt { group: first });
                assert!(owner.replies.contains(&reply.text), "{:?}", reply);
            }
        }
    }
}

#[test]
fn test_gratitude_always_wins_over_default() {
    let matcher = Matcher::builtin();
    let mut rng = StdRng::seed_from_u64(1);
    for input in ["thank you", "Thanks!!", "THANK YOU SO MUCH", "thankful", "ok thanks bye"] {
        let reply = matcher.respond_with(input, &mut rng);
        assert_eq!(
            reply.kind,
            MatchKind::Fallback {
                category: builtin::GRATITUDE.into()
            },
            "input {:?}",
            input
        );
        assert_eq!(reply.text, "You're welcome!");
    }
}

#[test]
fn test_gratitude_checked_before_virus() {
    let reply = Matcher::builtin().respond("thanks for the coronavirus tips");
    assert_eq!(reply.text, "You're welcome!");
}

#[test]
fn test_virus_keywords_route_to_virus() {
    let matcher = Matcher::builtin();
    let virus = builtin::fallbacks()
        .into_iter()
        .find(|f| f.name() == builtin::VIRUS)
        .unwrap();
    for input in ["Covid-19?", "is the VIRUS gone", "corona times"] {
        let reply = matcher.respond(input);
        assert_eq!(
            reply.kind,
            MatchKind::Fallback {
                category: builtin::VIRUS.into()
            }
        );
        assert!(virus.replies().contains(&reply.text));
    }
}

#[test]
fn test_unmatched_input_uses_default_group() {
    let matcher = Matcher::builtin();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let reply = matcher.respond_with("purple elephants dancing", &mut rng);
        assert_eq!(reply.kind, MatchKind::Default);
        assert!(matcher.default_replies().contains(&reply.text));
    }
}

#[test]
fn test_reply_is_never_empty() {
    let matcher = Matcher::builtin();
    for input in ["", "   ", "!!!", "123", "hi", "thank you", "qwerty"] {
        assert!(!matcher.reply(input).is_empty(), "input {:?}", input);
    }
}

#[test]
fn test_surface_variants_reach_the_same_group() {
    let matcher = Matcher::builtin();
    let cases = [
        ("What's up?", "what is up"),
        ("whats up", "what is up"),
        ("I feel happy", "happy"),
        ("r u human", "are you human"),
        ("Please help me!", "help me"),
        ("How   old are YOU???", "how old are you"),
    ];
    for (input, canonical) in cases {
        assert_eq!(normalize(input), canonical);
        assert_eq!(
            matcher.respond(input).kind,
            matcher.respond(canonical).kind,
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_normalize_is_idempotent() {
    for input in [
        "What's a r u doing, please?",
        "I feel a bit sad 2day",
        "please",
        "a",
        "whats whats whats",
        "  Hello,   WORLD!  ",
        "café au lait",
    ] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input {:?}", input);
    }
}
