// src/domain/development.rs

use chrono::{Duration, NaiveDate};

use crate::engine::normalize::slugify;
use crate::engine::regions::{region_for_town, town_from_zone, Region};
use crate::feed::models::FeedUnit;

/// A new-build project assembled from its feed units, flattened and
/// normalized. This is the anti-corruption layer between the raw feed and
/// the listing engine: everything downstream trusts these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Development {
    pub slug: String,
    pub name: String,

    // Location. `town` is already corrected through the zone mapping, but
    // the matcher still consults both fields: the feed's notion of town is
    // wrong often enough that the zone text carries real signal.
    pub town: String,
    pub zone: Option<String>,
    pub region: Region,

    // Units summary
    pub total_units: usize,
    pub unit_refs: Vec<String>,

    pub price_from: i64,
    pub price_to: i64,
    pub min_bedrooms: i64,
    pub max_bedrooms: i64,
    pub property_types: Vec<String>,

    pub delivery_date: Option<NaiveDate>,
    pub delivery_quarter: Option<String>,
    pub status: DeliveryStatus,

    // Media. Images are the first-seen-order union of the units' photo
    // pools, capped at 10 per development like the site shows.
    pub main_image: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    KeyReady,
    UnderConstruction,
    OffPlan,
}

// Placeholder figures for developments whose units carry no pricing or
// bedroom data yet (common for newly listed off-plan projects).
const PLACEHOLDER_PRICE_FROM: i64 = 199_000;
const PLACEHOLDER_PRICE_TO: i64 = 499_000;
const PLACEHOLDER_MIN_BEDROOMS: i64 = 2;
const PLACEHOLDER_MAX_BEDROOMS: i64 = 3;

impl Development {
    /// Builds one development from the feed units grouped under `name`.
    /// `today` anchors the delivery-status classification.
    pub fn from_units(name: &str, units: &[FeedUnit], today: NaiveDate) -> Development {
        let zone = units.iter().find_map(|u| u.zone.clone()).filter(|z| !z.trim().is_empty());

        // Town priority: zone mapping (authoritative), then the feed's
        // town, then the raw zone text.
        let feed_town = units
            .iter()
            .find_map(|u| u.town.clone())
            .filter(|t| !t.trim().is_empty());
        let town = zone
            .as_deref()
            .and_then(town_from_zone)
            .map(str::to_string)
            .or(feed_town)
            .or_else(|| zone.clone())
            .unwrap_or_else(|| "Costa Blanca".to_string());

        let prices: Vec<i64> = units.iter().filter_map(|u| u.price).filter(|p| *p > 0).collect();
        let (price_from, price_to) = match (prices.iter().min(), prices.iter().max()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => (PLACEHOLDER_PRICE_FROM, PLACEHOLDER_PRICE_TO),
        };

        let bedrooms: Vec<i64> = units
            .iter()
            .filter_map(|u| u.bedrooms)
            .filter(|b| *b > 0)
            .collect();
        let (min_bedrooms, max_bedrooms) = match (bedrooms.iter().min(), bedrooms.iter().max()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => (PLACEHOLDER_MIN_BEDROOMS, PLACEHOLDER_MAX_BEDROOMS),
        };

        let mut property_types: Vec<String> = Vec::new();
        for t in units.iter().filter_map(|u| u.property_type.as_deref()) {
            if !t.is_empty() && !property_types.iter().any(|seen| seen == t) {
                property_types.push(t.to_string());
            }
        }
        if property_types.is_empty() {
            property_types.push("Apartment".to_string());
        }

        // Image pool: every unit's main image first, then its gallery,
        // deduplicated in first-seen order.
        let mut images: Vec<String> = Vec::new();
        for unit in units {
            for img in unit.main_image.iter().chain(unit.images.iter()) {
                if !img.is_empty() && !images.iter().any(|seen| seen == img) {
                    images.push(img.clone());
                }
            }
        }
        images.truncate(10);
        let main_image = images.first().cloned();

        let delivery_date = units
            .iter()
            .filter_map(|u| u.delivery_date.as_deref())
            .find_map(parse_delivery_date);

        let unit_refs: Vec<String> = units.iter().filter_map(|u| u.reference.clone()).collect();

        Development {
            slug: slugify(name),
            name: name.to_string(),
            region: region_for_town(&town),
            town,
            zone,
            total_units: units.len(),
            unit_refs,
            price_from,
            price_to,
            min_bedrooms,
            max_bedrooms,
            property_types,
            delivery_quarter: delivery_date.map(quarter_label),
            status: status_as_of(delivery_date, today),
            delivery_date,
            main_image,
            images,
        }
    }
}

/// Feed delivery dates come as "01-06-2026" or "2026-06-01", with either
/// `-` or `/` separators. Anything else is treated as unknown.
pub fn parse_delivery_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim().replace('/', "-");
    NaiveDate::parse_from_str(&cleaned, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d"))
        .ok()
}

/// "Q2 2026"-style label for a delivery date.
pub fn quarter_label(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("Q{} {}", (date.month0() / 3) + 1, date.year())
}

/// Classifies a delivery date against a reference day: handover within 30
/// days (or already past) is key-ready, more than 18 months out is
/// off-plan, and anything between is under construction. No date at all
/// reads as under construction.
pub fn status_as_of(delivery: Option<NaiveDate>, today: NaiveDate) -> DeliveryStatus {
    let Some(date) = delivery else {
        return DeliveryStatus::UnderConstruction;
    };
    if date <= today + Duration::days(30) {
        return DeliveryStatus::KeyReady;
    }
    if date > today + Duration::days(18 * 30) {
        return DeliveryStatus::OffPlan;
    }
    DeliveryStatus::UnderConstruction
}
