use gale_catalog::derive_slug;

#[test]
fn plain_words_with_number() {
    assert_eq!(derive_slug("Risk of Rain 2"), "risk-of-rain-2");
}

#[test]
fn two_word_names() {
    assert_eq!(derive_slug("Hollow Knight"), "hollow-knight");
    assert_eq!(derive_slug("Content Warning"), "content-warning");
    assert_eq!(derive_slug("Lethal Company"), "lethal-company");
}

#[test]
fn acronym_before_capitalized_word() {
    assert_eq!(derive_slug("GDWeave"), "gd-weave");
    assert_eq!(derive_slug("NASAMission"), "nasa-mission");
}

#[test]
fn acronym_at_end_of_input() {
    assert_eq!(derive_slug("NASA"), "nasa");
    assert_eq!(derive_slug("ULTRAKILL"), "ultrakill");
}

#[test]
fn acronym_before_space() {
    assert_eq!(
        derive_slug("TCG Card Shop Simulator"),
        "tcg-card-shop-simulator"
    );
}

#[test]
fn acronym_followed_by_digit_splits_letters() {
    // A digit is a word character, so "VR" only ends at the boundary after it.
    assert_eq!(derive_slug("H3VR"), "h-3-vr");
    assert_eq!(derive_slug("HTML5"), "h-t-m-l-5");
}

#[test]
fn camel_case_words() {
    assert_eq!(derive_slug("ReturnOfModding"), "return-of-modding");
    assert_eq!(derive_slug("iPhone"), "i-phone");
}

#[test]
fn word_keeps_trailing_digits() {
    assert_eq!(derive_slug("Game2"), "game2");
    assert_eq!(derive_slug("Game2 Sequel"), "game2-sequel");
}

#[test]
fn lone_capital_is_its_own_word() {
    assert_eq!(derive_slug("V Rising"), "v-rising");
}

#[test]
fn separators_collapse() {
    assert_eq!(derive_slug("Some__Game - Deluxe"), "some-game-deluxe");
    assert_eq!(derive_slug("  padded  name  "), "padded-name");
}

#[test]
fn punctuation_is_carried_through() {
    assert_eq!(derive_slug("Baldur's Gate 3"), "baldur'-s-gate-3");
}

#[test]
fn empty_and_separator_only_input() {
    assert_eq!(derive_slug(""), "");
    assert_eq!(derive_slug(" -_ "), "");
}

#[test]
fn output_is_lowercase_alnum_and_single_hyphens() {
    let names = [
        "Risk of Rain 2",
        "GDWeave",
        "Dyson Sphere Program",
        "BONEWORKS",
        "Sons Of The Forest",
        "Lethal_Company-2 DLC",
        "A Hat in Time",
        "Plasma 12",
        "XCOM2WotC",
    ];
    for name in names {
        let slug = derive_slug(name);
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{name} -> {slug}"
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{name} -> {slug}");
        assert!(!slug.contains("--"), "{name} -> {slug}");
    }
}

#[test]
fn idempotent_on_slug_form() {
    for slug in ["risk-of-rain-2", "gd-weave", "content-warning", "h-3-vr", "game2"] {
        assert_eq!(derive_slug(slug), slug);
        assert_eq!(derive_slug(&derive_slug(slug)), derive_slug(slug));
    }
}
