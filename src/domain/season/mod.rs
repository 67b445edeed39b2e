pub mod model;
pub mod repository;

pub use model::{best_season, Season};
pub use repository::SeasonRepository;
