// src/domain/area.rs

/// A curated area guide entry, flattened and ready for matching.
/// Constructed once per build by the content loader; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub slug: String,
    pub name: String,
    pub price_range: PriceRange,
    pub property_types: Vec<String>,
    /// Static image from the guide itself, shown when no development photo
    /// can be claimed for this area.
    pub card_image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    /// Range shown on a card when the guide carries no usable pricing.
    pub const PLACEHOLDER: PriceRange = PriceRange {
        min: 200_000,
        max: 1_000_000,
    };
}
