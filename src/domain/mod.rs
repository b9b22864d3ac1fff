pub mod area;
pub mod card;
pub mod development;

pub use area::{Area, PriceRange};
pub use card::AreaCard;
pub use development::{Development, DeliveryStatus};
