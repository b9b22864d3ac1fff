// src/content/areas.rs

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::content::content_error::ContentError;
use crate::domain::{Area, PriceRange};
use crate::engine::normalize::name_from_slug;
use crate::locale::Locale;

// Guide records are hand-authored and have drifted over the years: newer
// files carry explicit `name`/`priceRange`/`propertyTypes`, older ones
// only a metaTitle and prose under `propertyMarket`. Every field is
// optional here and resolved through a fallback chain below.

#[derive(Debug, Deserialize)]
pub struct RawArea {
    pub slug: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "metaTitle")]
    pub meta_title: Option<String>,
    #[serde(rename = "priceRange")]
    pub price_range: Option<RawPriceRange>,
    #[serde(rename = "propertyTypes")]
    pub property_types: Option<Vec<String>>,
    #[serde(rename = "propertyMarket")]
    pub property_market: Option<RawPropertyMarket>,
    #[serde(rename = "cardImage")]
    pub card_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawPriceRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Deserialize)]
pub struct RawPropertyMarket {
    /// Display string like "€200,000 - €500,000".
    #[serde(rename = "priceRange")]
    pub price_range: Option<String>,
    /// Prose overview; written in English regardless of display locale.
    pub overview: Option<String>,
}

/// Loads every `*.json` guide in `dir`, sorted by filename so the catalog
/// order (and therefore image allocation) does not depend on the
/// filesystem. A missing directory is an empty catalog; an unreadable or
/// malformed file becomes a placeholder card instead of failing the build.
pub fn load_areas(dir: &Path, locale: &Locale) -> Result<Vec<Area>, ContentError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("content: no area guides at {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(ContentError::DirRead(e.to_string())),
    };

    let mut files: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ContentError::EntryRead(e.to_string()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".json") {
            files.push(name);
        }
    }
    files.sort();

    let areas = files
        .iter()
        .map(|file| {
            let slug_from_file = file.trim_end_matches(".json");
            match read_area_file(&dir.join(file)) {
                Ok(raw) => area_from_raw(raw, slug_from_file, locale),
                Err(reason) => {
                    warn!("content: {file}: {reason}; using placeholder card");
                    placeholder_area(slug_from_file, locale)
                }
            }
        })
        .collect::<Vec<_>>();

    info!("content: {} area guides loaded from {}", areas.len(), dir.display());
    Ok(areas)
}

fn read_area_file(path: &Path) -> Result<RawArea, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Flattens a raw guide record into an `Area`, resolving each field
/// through its fallback chain.
pub fn area_from_raw(raw: RawArea, slug_from_file: &str, locale: &Locale) -> Area {
    let slug = raw
        .slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| slug_from_file.to_string());

    let name = extract_area_name(raw.name.as_deref(), raw.meta_title.as_deref(), &slug);

    let market = raw.property_market.as_ref();
    let price_range = raw
        .price_range
        .map(|r| PriceRange { min: r.min, max: r.max })
        .or_else(|| {
            market
                .and_then(|m| m.price_range.as_deref())
                .and_then(parse_price_range)
        })
        .unwrap_or(PriceRange::PLACEHOLDER);

    let property_types = raw
        .property_types
        .filter(|t| !t.is_empty())
        .or_else(|| {
            market
                .and_then(|m| m.overview.as_deref())
                .and_then(|o| types_from_overview(o, locale))
        })
        .unwrap_or_else(|| {
            locale
                .default_property_types
                .iter()
                .map(|t| t.to_string())
                .collect()
        });

    Area {
        slug,
        name,
        price_range,
        property_types,
        card_image: raw.card_image.filter(|img| !img.is_empty()),
    }
}

/// Minimal stand-in for a guide file that could not be read or parsed.
pub fn placeholder_area(slug: &str, locale: &Locale) -> Area {
    Area {
        slug: slug.to_string(),
        name: name_from_slug(slug),
        price_range: PriceRange::PLACEHOLDER,
        property_types: vec![locale.generic_property_type.to_string()],
        card_image: None,
    }
}

/// Area display name: explicit `name`, else mined out of the metaTitle
/// ("Living in Jávea: ..." or the text before the first ':'/'|'), else
/// derived from the slug.
fn extract_area_name(name: Option<&str>, meta_title: Option<&str>, slug: &str) -> String {
    if let Some(name) = name {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    if let Some(title) = meta_title {
        if let Some(parsed) = name_from_meta_title(title) {
            return parsed;
        }
    }
    name_from_slug(slug)
}

fn name_from_meta_title(title: &str) -> Option<String> {
    const MARKER: &str = "living in ";
    let tail = match find_ignore_ascii_case(title, MARKER) {
        Some(idx) => &title[idx + MARKER.len()..],
        None => title,
    };
    let head = tail
        .split(|c| c == ':' || c == '|')
        .next()
        .unwrap_or("")
        .trim();
    if head.is_empty() {
        None
    } else {
        Some(head.to_string())
    }
}

// Byte-offset search for an ASCII needle, ignoring ASCII case.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| {
        haystack.is_char_boundary(i)
            && haystack.is_char_boundary(i + needle.len())
            && haystack[i..i + needle.len()].eq_ignore_ascii_case(needle)
    })
}

/// Pulls the first two numbers out of a display string like
/// "€200,000 - €500,000". Zero or missing values fall back to the
/// placeholder bounds.
fn parse_price_range(s: &str) -> Option<PriceRange> {
    let mut groups: Vec<i64> = Vec::new();
    let mut current = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if c == ',' && !current.is_empty() {
            // thousands separator inside a number
        } else if !current.is_empty() {
            groups.push(current.parse().unwrap_or(0));
            current.clear();
        }
    }
    if !current.is_empty() {
        groups.push(current.parse().unwrap_or(0));
    }
    if groups.len() < 2 {
        return None;
    }
    let min = if groups[0] > 0 { groups[0] } else { PriceRange::PLACEHOLDER.min };
    let max = if groups[1] > 0 { groups[1] } else { PriceRange::PLACEHOLDER.max };
    Some(PriceRange { min, max })
}

/// Derives card property-type labels from overview prose. The prose is
/// English; the labels come from the display locale.
fn types_from_overview(overview: &str, locale: &Locale) -> Option<Vec<String>> {
    let overview = overview.to_lowercase();
    let mut types = Vec::new();
    if overview.contains("villa") {
        types.push(locale.villa.to_string());
    }
    if overview.contains("apartment") {
        types.push(locale.apartment.to_string());
    }
    if overview.contains("townhouse") {
        types.push(locale.townhouse.to_string());
    }
    if overview.contains("penthouse") {
        types.push(locale.penthouse.to_string());
    }
    if types.is_empty() {
        None
    } else {
        Some(types)
    }
}
