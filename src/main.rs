use std::path::PathBuf;

use chrono::Utc;

use crate::domain::{AreaCard, DeliveryStatus};

mod content;
mod domain;
mod engine;
mod feed;
mod locale;


fn main() {
    env_logger::init();

    // Usage: area_listings [areas-dir] [feed-file] [locale]
    let mut args = std::env::args().skip(1);
    let areas_dir = PathBuf::from(args.next().unwrap_or_else(|| "content/areas".to_string()));
    let feed_path = PathBuf::from(args.next().unwrap_or_else(|| "content/feed.json".to_string()));
    let locale = locale::locale(&args.next().unwrap_or_else(|| "en".to_string()));

    // 1️⃣ Load the curated area guides
    let areas = match content::load_areas(&areas_dir, locale) {
        Ok(areas) => areas,
        Err(e) => {
            eprintln!("❌ Area guides failed to load: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the development feed (absent feed -> empty catalog)
    let developments = feed::load_developments(&feed_path, Utc::now().date_naive());
    let key_ready = developments
        .iter()
        .filter(|d| d.status == DeliveryStatus::KeyReady)
        .count();
    println!(
        "Building areas listing [{}]: {} guides, {} developments ({key_ready} key-ready)",
        locale.code,
        areas.len(),
        developments.len()
    );

    // 3️⃣ Reconcile and build the page sections
    let cards = engine::aggregator::aggregate(&areas, &developments);
    let buckets = engine::aggregator::partition(cards);

    print_section("Costa Blanca South", &buckets.south);
    print_section("Costa Blanca North", &buckets.north);
    print_section("Other Areas", &buckets.other);

    if buckets.south.is_empty() && buckets.north.is_empty() && buckets.other.is_empty() {
        println!("No area guides found.");
    }
}

fn print_section(title: &str, cards: &[AreaCard]) {
    if cards.is_empty() {
        return;
    }
    println!("\n{title} ({})", cards.len());
    for card in cards {
        println!(
            "  {:<28} {:>3} developments   €{} - €{}   {}",
            card.area.name,
            card.property_count,
            card.area.price_range.min,
            card.area.price_range.max,
            card.image.as_deref().unwrap_or("(no image)")
        );
    }
}
