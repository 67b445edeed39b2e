pub mod model;

pub use model::{price_stay, tiered_subtotal, FeeLine, PriceBreakdown, RateTier};
