// src/feed/models.rs

use serde::Deserialize;

// unit
//  ├── ref
//  ├── development
//  ├── town / zone
//  ├── price / bedrooms / type
//  ├── mainImage / images
//  └── deliveryDate

/// One property unit as it appears in the feed export. Every field is
/// optional: the feed is external and routinely incomplete.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedUnit {
    #[serde(rename = "ref")]
    pub reference: Option<String>,

    /// Name of the project this unit belongs to ("GOMERA STAR").
    pub development: Option<String>,

    pub town: Option<String>,
    pub zone: Option<String>,

    pub price: Option<i64>,
    pub bedrooms: Option<i64>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,

    #[serde(rename = "mainImage")]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(rename = "deliveryDate")]
    pub delivery_date: Option<String>,
}
