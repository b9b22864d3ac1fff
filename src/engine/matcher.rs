// src/engine/matcher.rs

use crate::domain::{Area, Development};
use crate::engine::normalize::{normalize, tokenize};

/// One area together with every development whose location satisfied it.
/// `matched` keeps catalog iteration order, not match strength.
#[derive(Debug)]
pub struct MatchRecord<'a> {
    pub area: &'a Area,
    pub matched: Vec<&'a Development>,
}

/// Decides whether a development belongs to an area. The town is checked
/// first; the zone is only consulted when the town matched nothing.
///
/// Deliberately permissive: external feeds spell the same place every way
/// imaginable ("Orihuela Costa", "orihuela_costa", "Orihuela-Costa"), so
/// the check is bidirectional substring containment at whole-string and
/// single-token granularity, on both the raw lowercase and the
/// diacritic-folded forms. A development whose zone is literally named
/// after a neighbouring town will match both areas; that ambiguity is a
/// property of the domain, not something this predicate resolves.
pub fn matches(area: &Area, development: &Development) -> bool {
    field_matches(&development.town, &area.name)
        || development
            .zone
            .as_deref()
            .is_some_and(|zone| field_matches(zone, &area.name))
}

fn field_matches(field: &str, area_name: &str) -> bool {
    // The feed uses underscores as spaces often enough to fold them here
    // before the raw comparison.
    let field_lower = field.trim().to_lowercase().replace('_', " ");
    if field_lower.is_empty() {
        return false;
    }
    let area_norm = normalize(area_name);
    if area_norm.is_empty() {
        // A nameless area matches nothing; containment against "" would
        // match everything.
        return false;
    }
    let area_lower = area_name.trim().to_lowercase();
    let field_norm = normalize(field);

    if field_lower.contains(&area_lower) || area_lower.contains(&field_lower) {
        return true;
    }
    if field_norm.contains(&area_norm) || area_norm.contains(&field_norm) {
        return true;
    }

    // Token granularity tolerates prefixes/suffixes: "Jávea Pueblo" has a
    // token matching "Jávea". Checked on the raw lowercase tokens too, in
    // case diacritic folding ever disagrees with the content author.
    tokenize(&field_lower).iter().any(|token| {
        if token.contains(&area_lower) || area_lower.contains(token.as_str()) {
            return true;
        }
        let token_norm = normalize(token);
        token_norm.contains(&area_norm) || area_norm.contains(&token_norm)
    })
}

/// Runs the matcher over the full catalogs, producing one record per area
/// in catalog order.
pub fn match_developments<'a>(
    areas: &'a [Area],
    developments: &'a [Development],
) -> Vec<MatchRecord<'a>> {
    areas
        .iter()
        .map(|area| MatchRecord {
            area,
            matched: developments
                .iter()
                .filter(|dev| matches(area, dev))
                .collect(),
        })
        .collect()
}
