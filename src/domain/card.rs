// src/domain/card.rs

use crate::domain::area::Area;

/// One card on the areas listing page: the guide entry plus everything the
/// aggregation pass derived for it.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaCard {
    pub area: Area,
    /// How many developments matched this area. Developments whose
    /// location satisfies several areas are counted by each of them.
    pub property_count: usize,
    /// The photo chosen for this card. Development-sourced images are
    /// unique across one aggregation pass; the area's own fallback image
    /// is not subject to that rule.
    pub image: Option<String>,
}
