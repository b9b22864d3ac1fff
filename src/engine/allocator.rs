// src/engine/allocator.rs

use std::collections::{HashMap, HashSet};

use url::Url;

use crate::engine::matcher::MatchRecord;

/// Claims at most one illustrative photo per area, never handing the same
/// development photo to two areas within one allocation pass.
///
/// The allocator is the only mutable state in the engine. One instance is
/// one pass: construct it fresh per page build and never share it between
/// concurrent builds, or images claimed for one page would count as used
/// on an unrelated one.
///
/// Allocation is order-dependent by contract: earlier records get first
/// claim on shared images, so the same catalogs in a different order can
/// hand a contested photo to a different area. For a fixed order the
/// result is fully deterministic.
#[derive(Debug, Default)]
pub struct ImageAllocator {
    used: HashSet<String>,
}

impl ImageAllocator {
    pub fn new() -> ImageAllocator {
        ImageAllocator::default()
    }

    /// Picks the image for one area: the first unclaimed candidate across
    /// its matched developments (each development's main image first, then
    /// its gallery), falling back to the area's own card image when every
    /// candidate is claimed or malformed.
    ///
    /// The fallback is exempt from the uniqueness rule — two areas may
    /// show the same guide image — but it is still recorded as used, so a
    /// development photo identical to an earlier card's fallback is
    /// skipped later in the pass.
    pub fn assign(&mut self, record: &MatchRecord) -> Option<String> {
        for dev in &record.matched {
            let candidates = dev
                .main_image
                .iter()
                .chain(dev.images.iter())
                .filter(|img| is_web_image(img));
            for img in candidates {
                if self.used.insert(img.clone()) {
                    return Some(img.clone());
                }
            }
        }

        let fallback = record.area.card_image.clone();
        if let Some(img) = &fallback {
            self.used.insert(img.clone());
        }
        fallback
    }

    /// Full-pass form of `assign`: area slug -> chosen image, in record
    /// order.
    pub fn allocate(&mut self, records: &[MatchRecord]) -> HashMap<String, Option<String>> {
        records
            .iter()
            .map(|record| (record.area.slug.clone(), self.assign(record)))
            .collect()
    }
}

// Feed image lists mix real CDN URLs with relative placeholder paths; only
// absolute http(s) URLs are usable on a card.
fn is_web_image(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
