// src/feed/loader.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::domain::Development;
use crate::feed::feed_error::FeedError;
use crate::feed::models::FeedUnit;

/// Reads the raw unit feed from a JSON export file.
pub fn read_feed(path: &Path) -> Result<Vec<FeedUnit>, FeedError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FeedError::NotFound
        } else {
            FeedError::Io(e.to_string())
        }
    })?;
    serde_json::from_str(&raw).map_err(|e| FeedError::Parse(e.to_string()))
}

/// Loads the development catalog for one build. The feed is an external
/// collaborator: if it is absent or unusable the build carries on with an
/// empty catalog rather than failing.
pub fn load_developments(path: &Path, today: NaiveDate) -> Vec<Development> {
    match read_feed(path) {
        Ok(units) => {
            info!("feed: {} units from {}", units.len(), path.display());
            group_developments(&units, today)
        }
        Err(FeedError::NotFound) => {
            info!("feed: nothing at {}, building without developments", path.display());
            Vec::new()
        }
        Err(err) => {
            warn!("feed: {err}; building without developments");
            Vec::new()
        }
    }
}

/// Groups feed units into developments. Grouping is by development name
/// (case-insensitive), falling back to town and then unit ref for
/// incomplete records; groups keep first-seen feed order, and the final
/// catalog is ordered by unit count descending (stable, so equal-sized
/// developments keep feed order). That ordering is the allocation
/// contract: busier developments get first claim on shared photos.
pub fn group_developments(units: &[FeedUnit], today: NaiveDate) -> Vec<Development> {
    let mut order: Vec<(String, String)> = Vec::new(); // (key, display name)
    let mut groups: HashMap<String, Vec<FeedUnit>> = HashMap::new();

    for unit in units {
        let Some(name) = group_name(unit) else {
            debug!("feed: unit with no development/town/ref skipped");
            continue;
        };
        let key = name.to_uppercase();
        if !groups.contains_key(&key) {
            order.push((key.clone(), name));
        }
        groups.entry(key).or_default().push(unit.clone());
    }

    let mut developments: Vec<Development> = order
        .iter()
        .map(|(key, name)| Development::from_units(name, &groups[key], today))
        .collect();
    developments.sort_by(|a, b| b.total_units.cmp(&a.total_units));

    info!("feed: {} developments built", developments.len());
    developments
}

fn group_name(unit: &FeedUnit) -> Option<String> {
    [&unit.development, &unit.town, &unit.reference]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
