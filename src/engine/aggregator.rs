// src/engine/aggregator.rs

use log::debug;

use crate::domain::{Area, AreaCard, Development};
use crate::engine::allocator::ImageAllocator;
use crate::engine::matcher::match_developments;
use crate::engine::normalize::normalize;
use crate::engine::regions::{NORTH_TOWNS, SOUTH_TOWNS};

/// One full aggregation pass: match every (area, development) pair, count
/// matches, and allocate images in catalog order. The area order given
/// here is the allocation order — it decides which area wins a contested
/// photo.
pub fn aggregate(areas: &[Area], developments: &[Development]) -> Vec<AreaCard> {
    let records = match_developments(areas, developments);
    let mut allocator = ImageAllocator::new(); // fresh per pass

    records
        .into_iter()
        .map(|record| {
            let image = allocator.assign(&record);
            let card = AreaCard {
                property_count: record.matched.len(),
                area: record.area.clone(),
                image,
            };
            debug!(
                "aggregate: {} -> {} developments, image {:?}",
                card.area.slug, card.property_count, card.image
            );
            card
        })
        .collect()
}

/// The three sections of the listing page.
#[derive(Debug, Default)]
pub struct RegionBuckets {
    pub south: Vec<AreaCard>,
    pub north: Vec<AreaCard>,
    pub other: Vec<AreaCard>,
}

/// Partitions cards into the south/north/other sections and orders each
/// section by matched-development count, busiest first.
///
/// The partition is disjoint: lists are checked south first, and the first
/// list naming the area wins. The per-section sort is stable with no
/// secondary key, so equal counts keep the order the aggregation pass
/// produced.
pub fn partition(cards: Vec<AreaCard>) -> RegionBuckets {
    let mut buckets = RegionBuckets::default();
    for card in cards {
        if in_town_list(&card, SOUTH_TOWNS) {
            buckets.south.push(card);
        } else if in_town_list(&card, NORTH_TOWNS) {
            buckets.north.push(card);
        } else {
            buckets.other.push(card);
        }
    }
    for bucket in [&mut buckets.south, &mut buckets.north, &mut buckets.other] {
        bucket.sort_by(|a, b| b.property_count.cmp(&a.property_count));
    }
    buckets
}

fn in_town_list(card: &AreaCard, towns: &[&str]) -> bool {
    let name = normalize(&card.area.name);
    towns
        .iter()
        .any(|town| name.contains(town) || card.area.slug.contains(&town.replace(' ', "-")))
}
