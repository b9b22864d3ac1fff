// src/locale/mod.rs
//
// The matching and allocation engine is locale-agnostic; the only thing
// that varies per display locale is the handful of placeholder labels the
// content loader injects when a guide record carries no property types of
// its own. Each localized listing page runs the same engine with one of
// these adapters.

/// Label set for one display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    /// Default shown when a guide has no property types and no overview
    /// text to derive them from.
    pub default_property_types: [&'static str; 2],
    /// Single label for placeholder records substituted for unreadable
    /// guide files.
    pub generic_property_type: &'static str,
    // Labels for types derived from overview keywords.
    pub villa: &'static str,
    pub apartment: &'static str,
    pub townhouse: &'static str,
    pub penthouse: &'static str,
}

pub const EN: Locale = Locale {
    code: "en",
    default_property_types: ["Apartments", "Villas"],
    generic_property_type: "Properties",
    villa: "Villas",
    apartment: "Apartments",
    townhouse: "Townhouses",
    penthouse: "Penthouses",
};

pub const NL: Locale = Locale {
    code: "nl",
    default_property_types: ["Appartementen", "Villa's"],
    generic_property_type: "Eigendommen",
    villa: "Villa's",
    apartment: "Appartementen",
    townhouse: "Rijtjeshuizen",
    penthouse: "Penthouses",
};

pub const NO: Locale = Locale {
    code: "no",
    default_property_types: ["Appartementer", "Villa's"],
    generic_property_type: "Eiendommer",
    villa: "Villa's",
    apartment: "Appartementer",
    townhouse: "Rekkehus",
    penthouse: "Penthouse",
};

pub const LOCALES: &[Locale] = &[EN, NL, NO];

/// Adapter for a locale code; unknown codes fall back to English.
pub fn locale(code: &str) -> &'static Locale {
    LOCALES
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(code))
        .unwrap_or(&EN)
}
