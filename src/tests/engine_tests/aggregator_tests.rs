// src/tests/engine_tests/aggregator_tests.rs

use std::collections::HashSet;

use crate::engine::aggregator::{aggregate, partition};
use crate::tests::utils::{area, area_with_image, development};

const IMG_A: &str = "https://cdn.example.com/a.jpg";
const IMG_B: &str = "https://cdn.example.com/b.jpg";
const IMG_C: &str = "https://cdn.example.com/c.jpg";
const IMG_D: &str = "https://cdn.example.com/d.jpg";

#[test]
fn full_pass_counts_and_allocates() {
    let areas = vec![
        area("javea-xabia", "Jávea"),
        area("altea", "Altea"),
        area_with_image("pinoso", "Pinoso", IMG_D),
    ];
    let devs = vec![
        development("Pueblo Homes", "Jávea Pueblo", &[IMG_A, IMG_B]),
        development("Port Homes", "JAVEA_PORT", &[IMG_A, IMG_C]),
        development("Altea Homes", "Altea", &[IMG_A, IMG_B, IMG_C]),
    ];

    let cards = aggregate(&areas, &devs);
    assert_eq!(cards.len(), 3);

    // Both Jávea spellings count toward the area; Altea counts its own
    assert_eq!(cards[0].property_count, 2);
    assert_eq!(cards[1].property_count, 1);
    assert_eq!(cards[0].image.as_deref(), Some(IMG_A));
    // Altea's imgA candidate is taken, so it moves down its pool
    assert_eq!(cards[1].image.as_deref(), Some(IMG_B));

    // Zero matches is a degraded card, not an error
    assert_eq!(cards[2].property_count, 0);
    assert_eq!(cards[2].image.as_deref(), Some(IMG_D));

    // No development photo appears twice across the pass
    let dev_sourced: Vec<&str> = cards
        .iter()
        .filter_map(|c| c.image.as_deref())
        .filter(|img| *img != IMG_D)
        .collect();
    let unique: HashSet<&str> = dev_sourced.iter().copied().collect();
    assert_eq!(dev_sourced.len(), unique.len());
}

#[test]
fn every_card_lands_in_exactly_one_bucket() {
    let areas = vec![
        area("torrevieja", "Torrevieja"),
        area("javea-xabia", "Jávea"),
        area("madrid-centro", "Madrid Centro"),
    ];
    let cards = aggregate(&areas, &[]);
    let total = cards.len();
    let buckets = partition(cards);

    assert_eq!(buckets.south.len(), 1);
    assert_eq!(buckets.north.len(), 1);
    assert_eq!(buckets.other.len(), 1);
    assert_eq!(buckets.south.len() + buckets.north.len() + buckets.other.len(), total);
    assert_eq!(buckets.south[0].area.slug, "torrevieja");
    assert_eq!(buckets.north[0].area.slug, "javea-xabia");
    assert_eq!(buckets.other[0].area.slug, "madrid-centro");
}

#[test]
fn south_list_wins_when_both_regions_claim_a_name() {
    // Name contains both a north town and a south town; south is checked
    // first and the first match wins.
    let areas = vec![area("guardamar-altea", "Guardamar y Altea")];
    let buckets = partition(aggregate(&areas, &[]));

    assert_eq!(buckets.south.len(), 1);
    assert!(buckets.north.is_empty());
    assert!(buckets.other.is_empty());
}

#[test]
fn slug_alone_can_place_an_area() {
    // Display name says nothing regional; the slug does
    let areas = vec![area("javea-port-guide", "The Port Guide")];
    let buckets = partition(aggregate(&areas, &[]));
    assert_eq!(buckets.north.len(), 1);
}

#[test]
fn buckets_order_by_count_descending_with_stable_ties() {
    let areas = vec![
        area("rojales", "Rojales"),
        area("torrevieja", "Torrevieja"),
        area("algorfa", "Algorfa"),
        area("quesada", "Ciudad Quesada"),
    ];
    let devs = vec![
        development("T1", "Torrevieja", &[]),
        development("T2", "Torrevieja", &[]),
        development("R1", "Rojales", &[]),
        development("Q1", "Ciudad Quesada", &[]),
    ];
    let buckets = partition(aggregate(&areas, &devs));

    let order: Vec<&str> = buckets.south.iter().map(|c| c.area.slug.as_str()).collect();
    // Torrevieja (2) first; Rojales/Quesada tie at 1 and keep catalog
    // order; Algorfa (0) last
    assert_eq!(order, vec!["torrevieja", "rojales", "quesada", "algorfa"]);
}

#[test]
fn passes_are_isolated_from_each_other() {
    // Two consecutive builds over the same catalogs must allocate
    // identically: no used-image state leaks between passes.
    let areas = vec![area("javea", "Jávea")];
    let devs = vec![development("Pueblo Homes", "Jávea", &[IMG_A])];

    let first = aggregate(&areas, &devs);
    let second = aggregate(&areas, &devs);
    assert_eq!(first[0].image.as_deref(), Some(IMG_A));
    assert_eq!(first, second);
}
