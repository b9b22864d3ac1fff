// src/engine/regions.rs
//
// Static geographic reference data: which towns belong to which coastal
// region, and the authoritative zone -> town corrections for feed records
// whose `town` field is wrong or missing. All entries are stored in
// normalized form (lowercase, no diacritics, single-space separators).

use std::fmt;

use crate::engine::normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    CostaBlancaNorth,
    CostaBlancaSouth,
    CostaCalida,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::CostaBlancaNorth => write!(f, "Costa Blanca North"),
            Region::CostaBlancaSouth => write!(f, "Costa Blanca South"),
            Region::CostaCalida => write!(f, "Costa Calida"),
        }
    }
}

/// Towns used to pull area cards into the "north" listing section.
pub const NORTH_TOWNS: &[&str] = &[
    "javea",
    "xabia",
    "denia",
    "moraira",
    "calpe",
    "altea",
    "benissa",
    "benitachell",
    "cumbre del sol",
    "teulada",
    "benidorm",
    "finestrat",
    "alfaz",
    "albir",
    "la nucia",
    "polop",
    "villajoyosa",
    "el campello",
];

/// Towns used to pull area cards into the "south" listing section.
pub const SOUTH_TOWNS: &[&str] = &[
    "torrevieja",
    "orihuela costa",
    "orihuela",
    "guardamar",
    "pilar de la horadada",
    "ciudad quesada",
    "quesada",
    "rojales",
    "san miguel de salinas",
    "los montesinos",
    "algorfa",
    "benijofar",
    "villamartin",
    "la zenia",
    "punta prima",
    "playa flamenca",
    "cabo roig",
    "campoamor",
];

// Murcia / Mar Menor towns. Checked before the north list: several golf
// resorts down there contain town names that would otherwise read as south.
const COSTA_CALIDA_TOWNS: &[&str] = &[
    "murcia",
    "mazarron",
    "cartagena",
    "los alcazares",
    "alcazares",
    "san javier",
    "san pedro del pinatar",
    "torre pacheco",
    "la manga",
    "mar menor",
    "santiago de la ribera",
    "aguilas",
    "fuente alamo",
    "sucina",
    "roldan",
    "lo pagan",
    "los narejos",
    "los urrutias",
    "la union",
    "puerto de mazarron",
    "bolnuevo",
    "isla plana",
    "serena golf",
    "lo serena",
    "santa rosalia",
    "roda golf",
    "hacienda riquelme",
    "la torre golf",
];

// The feed often carries the wrong town for well-known zones; this mapping
// wins over whatever the feed says. Keys are normalized zone names.
const ZONE_TO_TOWN: &[(&str, &str)] = &[
    // Torrevieja
    ("playa de el cura", "Torrevieja"),
    ("playa del cura", "Torrevieja"),
    ("playa el cura", "Torrevieja"),
    ("la mata", "Torrevieja"),
    ("aguas nuevas", "Torrevieja"),
    ("los balcones", "Torrevieja"),
    ("la siesta", "Torrevieja"),
    ("el chaparral", "Torrevieja"),
    ("el limonar", "Torrevieja"),
    ("acequion", "Torrevieja"),
    ("playa los naufragos", "Torrevieja"),
    ("playa los locos", "Torrevieja"),
    // Orihuela Costa
    ("la zenia", "Orihuela Costa"),
    ("playa flamenca", "Orihuela Costa"),
    ("cabo roig", "Orihuela Costa"),
    ("campoamor", "Orihuela Costa"),
    ("villamartin", "Orihuela Costa"),
    ("las filipinas", "Orihuela Costa"),
    ("dehesa de campoamor", "Orihuela Costa"),
    ("la florida", "Orihuela Costa"),
    ("los dolses", "Orihuela Costa"),
    ("las ramblas", "Orihuela Costa"),
    ("dream hills", "Orihuela Costa"),
    ("la regia", "Orihuela Costa"),
    ("aguamarina", "Orihuela Costa"),
    ("punta prima", "Orihuela Costa"),
    ("los altos", "Orihuela Costa"),
    // Pilar de la Horadada
    ("mil palmeras", "Pilar de la Horadada"),
    ("torre de la horadada", "Pilar de la Horadada"),
    ("el mojon", "Pilar de la Horadada"),
    // Guardamar
    ("el raso", "Guardamar del Segura"),
    ("los gavilanes", "Guardamar del Segura"),
    // Rojales / Quesada
    ("dona pepa", "Rojales"),
    ("ciudad quesada", "Ciudad Quesada"),
    ("quesada", "Ciudad Quesada"),
    // Golf resorts (inland south)
    ("vistabella golf", "Vistabella Golf"),
    ("vistabella", "Vistabella Golf"),
    ("lo romero golf", "Lo Romero Golf"),
    ("lo romero", "Lo Romero Golf"),
    ("la finca golf", "La Finca Golf"),
    ("la finca", "La Finca Golf"),
    ("las colinas golf", "Las Colinas Golf"),
    ("las colinas", "Las Colinas Golf"),
    // Costa Calida / Mar Menor
    ("los narejos", "Los Alcazares"),
    ("serena golf", "Los Alcazares"),
    ("lo serena", "Los Alcazares"),
    ("mar menor", "San Javier"),
    ("mar menor golf", "San Javier"),
    ("los antolinos", "San Pedro del Pinatar"),
    ("mar de plata", "Puerto de Mazarron"),
    ("country club", "Mazarron"),
    // Costa Blanca North
    ("cumbre del sol", "Benitachell"),
    ("golden valley", "Benitachell"),
    ("valle del sol", "Javea"),
    ("sierra de altea", "Altea"),
    ("muchavista", "El Campello"),
    ("la tellerola", "Villajoyosa"),
];

/// The authoritative town for a feed zone, when we know better than the
/// feed. Zones we have no opinion on return `None`.
pub fn town_from_zone(zone: &str) -> Option<&'static str> {
    let key = normalize(zone);
    if key.is_empty() {
        return None;
    }
    ZONE_TO_TOWN
        .iter()
        .find(|(z, _)| *z == key)
        .map(|(_, town)| *town)
}

/// Classifies a town into its coastal region. Costa Calida is checked
/// first (its resort names are the most specific), then Costa Blanca
/// North; everything else defaults to Costa Blanca South.
pub fn region_for_town(town: &str) -> Region {
    let town = normalize(town);
    if COSTA_CALIDA_TOWNS.iter().any(|t| town.contains(t)) {
        return Region::CostaCalida;
    }
    if NORTH_TOWNS.iter().any(|t| town.contains(t)) {
        return Region::CostaBlancaNorth;
    }
    Region::CostaBlancaSouth
}
