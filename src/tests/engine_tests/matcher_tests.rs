// src/tests/engine_tests/matcher_tests.rs

use crate::engine::matcher::{match_developments, matches};
use crate::tests::utils::{area, development, development_in_zone};

#[test]
fn javea_matches_its_spellings_but_not_altea() {
    let javea = area("javea-xabia", "Jávea");
    let pueblo = development("Azure Heights", "Jávea Pueblo", &[]);
    let port = development("Port Living", "JAVEA_PORT", &[]);
    let altea = development("Altea Hills", "Altea", &[]);

    assert!(matches(&javea, &pueblo));
    assert!(matches(&javea, &port));
    assert!(!matches(&javea, &altea));
}

#[test]
fn case_alone_never_blocks_a_match() {
    assert!(matches(&area("calpe", "Calpe"), &development("Calpe Bay", "calpe", &[])));
}

#[test]
fn containment_works_in_both_directions() {
    // Field contains area name
    assert!(matches(&area("javea", "Jávea"), &development("X", "Costa de Jávea", &[])));
    // Area name contains field
    assert!(matches(&area("javea", "Costa de Jávea"), &development("X", "Jávea", &[])));
}

#[test]
fn separator_styles_are_equivalent() {
    let orihuela = area("orihuela-costa", "Orihuela Costa");
    for town in ["orihuela_costa", "Orihuela-Costa", "ORIHUELA  COSTA"] {
        assert!(matches(&orihuela, &development("X", town, &[])), "town {town:?}");
    }
}

#[test]
fn zone_is_consulted_when_town_says_nothing() {
    let denia = area("denia", "Denia");
    // Raw town field empty, zone carries the signal via token containment
    let dev = development_in_zone("Marina Homes", "", "Dénia Port, Denia", &[]);
    assert!(matches(&denia, &dev));
}

#[test]
fn zone_rescues_a_wrong_feed_town() {
    let javea = area("javea", "Jávea");
    let dev = development_in_zone("Valley Homes", "Alicante", "Valle del Sol, Jávea", &[]);
    assert!(matches(&javea, &dev));
}

#[test]
fn empty_location_matches_nothing() {
    let javea = area("javea", "Jávea");
    assert!(!matches(&javea, &development("Ghost", "", &[])));
    assert!(!matches(&javea, &development_in_zone("Ghost", "", "  ", &[])));
}

#[test]
fn nameless_area_matches_nothing() {
    // A name that folds to the empty string must not match every record
    assert!(!matches(&area("mystery", ""), &development("X", "Altea", &[])));
    assert!(!matches(&area("mystery", " _- "), &development("X", "Altea", &[])));
}

#[test]
fn one_development_may_satisfy_several_areas() {
    // Zone literally named after the neighbouring town: both areas count
    // it. Accepted ambiguity, not an error.
    let benitachell = area("benitachell", "Benitachell");
    let javea = area("javea", "Jávea");
    let dev = development_in_zone("Cliff Residences", "Benitachell", "Jávea border", &[]);

    assert!(matches(&benitachell, &dev));
    assert!(matches(&javea, &dev));
}

#[test]
fn records_keep_catalog_order() {
    let areas = vec![area("javea", "Jávea"), area("altea", "Altea")];
    let devs = vec![
        development("B Residences", "Altea", &[]),
        development("A Residences", "Jávea", &[]),
        development("C Residences", "Altea Hills", &[]),
    ];
    let records = match_developments(&areas, &devs);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].area.slug, "javea");
    assert_eq!(records[0].matched.len(), 1);
    // Matched list is catalog order, not match strength
    let altea_names: Vec<&str> = records[1].matched.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(altea_names, vec!["B Residences", "C Residences"]);
}
