//! First-start catalog seed
//!
//! Inserts the property's units and the per-category rate plans when the
//! units table is empty. Never touches a populated database.

use tracing::info;

use crate::domain::rate_plan::{RatePlan, RatePlanScope};
use crate::domain::unit::{Unit, UnitType};
use crate::domain::{DomainResult, RepositoryProvider};

const HOUSE_RULES: [&str; 3] = ["No pets allowed", "No smoking", "Quiet hours 10 PM - 7 AM"];

struct UnitSeed {
    slug: &'static str,
    name: &'static str,
    unit_type: UnitType,
    capacity: i32,
    beds: i32,
    baths: f64,
    active: bool,
    amenities: &'static [&'static str],
    photos: &'static [&'static str],
}

const COTTAGE_FULL: &[&str] = &[
    "wifi", "cable-tv", "ac-heat", "parking", "full-kitchen", "ro-water", "laundry-nearby", "patio",
];
const COTTAGE_STUDIO: &[&str] = &[
    "wifi", "cable-tv", "ac-heat", "parking", "kitchenette", "ro-water", "laundry-nearby", "patio",
];
const TRAILER_AMENITIES: &[&str] = &[
    "wifi", "cable-tv", "ac-heat", "parking", "kitchenette", "ro-water", "laundry-nearby",
];

const TRAILER_PHOTOS: &[&str] = &["/assets/trailer/exterior.jpg", "/assets/trailer/interior.jpg"];

const UNITS: &[UnitSeed] = &[
    UnitSeed {
        slug: "cottage-9606",
        name: "Cottage 9606",
        unit_type: UnitType::Cottage2Br,
        capacity: 4,
        beds: 2,
        baths: 2.0,
        active: true,
        amenities: COTTAGE_FULL,
        photos: &["/assets/cottage/living_area.webp", "/assets/cottage/exterior.webp"],
    },
    UnitSeed {
        slug: "cottage-9608",
        name: "Cottage 9608 (Studio)",
        unit_type: UnitType::Cottage1Br,
        capacity: 2,
        beds: 0,
        baths: 1.0,
        active: true,
        amenities: COTTAGE_STUDIO,
        photos: &["/assets/cottage/kitchen.jpeg", "/assets/cottage/exterior_2.jpeg"],
    },
    UnitSeed {
        slug: "cottage-9612",
        name: "Cottage 9612",
        unit_type: UnitType::Cottage1Br,
        capacity: 2,
        beds: 1,
        baths: 1.0,
        active: true,
        amenities: COTTAGE_FULL,
        photos: &["/assets/cottage/master_bedroom.webp", "/assets/cottage/exterior_3.jpg"],
    },
    UnitSeed {
        slug: "cottage-9614",
        name: "Cottage 9614 (Coming Soon)",
        unit_type: UnitType::Cottage1Br,
        capacity: 2,
        beds: 1,
        baths: 1.0,
        active: false,
        amenities: COTTAGE_FULL,
        photos: &["/assets/cottage/exterior_4.jpg"],
    },
    UnitSeed {
        slug: "cottage-9618",
        name: "Cottage 9618",
        unit_type: UnitType::Cottage2Br,
        capacity: 4,
        beds: 2,
        baths: 1.0,
        active: true,
        amenities: COTTAGE_FULL,
        photos: &["/assets/cottage/living_area.webp", "/assets/cottage/exterior.webp"],
    },
];

/// 5th-wheel trailer pad numbers on the lot
const TRAILER_NUMBERS: &[u32] = &[3, 5, 7, 8, 9, 10, 12, 14, 18, 20, 21, 22, 23, 24, 25, 26, 27];

/// (category, nightly, weekly, monthly, four_month) in cents
const CATEGORY_RATES: &[(UnitType, i64, i64, i64, i64)] = &[
    (UnitType::Cottage1Br, 6500, 39000, 150000, 560000),
    (UnitType::Cottage2Br, 8500, 51000, 195000, 728000),
    (UnitType::Trailer, 4500, 27000, 100000, 360000),
];

fn build_unit(seed: &UnitSeed) -> Unit {
    let mut unit = Unit::new(seed.slug, seed.name, seed.unit_type, seed.capacity);
    unit.beds = Some(seed.beds);
    unit.baths = Some(seed.baths);
    unit.active = seed.active;
    unit.amenities = seed.amenities.iter().map(|s| s.to_string()).collect();
    unit.photos = seed.photos.iter().map(|s| s.to_string()).collect();
    unit.features = if seed.active {
        HOUSE_RULES
            .iter()
            .map(|s| s.to_string())
            .chain(std::iter::once(format!(
                "Maximum occupancy: {} guests",
                seed.capacity
            )))
            .collect()
    } else {
        vec![
            "Unit currently under renovation".to_string(),
            "Availability coming soon".to_string(),
        ]
    };
    unit
}

fn catalog() -> Vec<Unit> {
    let trailers = TRAILER_NUMBERS.iter().map(|n| {
        let slug = format!("trailer-{:02}", n);
        let name = format!("5th Wheel Trailer #{}", n);
        let mut unit = Unit::new(slug, name, UnitType::Trailer, 2);
        unit.beds = Some(1);
        unit.baths = Some(1.0);
        unit.amenities = TRAILER_AMENITIES.iter().map(|s| s.to_string()).collect();
        unit.photos = TRAILER_PHOTOS.iter().map(|s| s.to_string()).collect();
        unit.features = HOUSE_RULES
            .iter()
            .map(|s| s.to_string())
            .chain(std::iter::once("Maximum occupancy: 2 guests".to_string()))
            .collect();
        unit
    });

    UNITS.iter().map(build_unit).chain(trailers).collect()
}

/// Seed units and category rate plans into an empty database.
///
/// Returns the number of units inserted (0 when already populated).
pub async fn seed_catalog(repos: &dyn RepositoryProvider) -> DomainResult<usize> {
    if repos.units().count().await? > 0 {
        info!("Catalog already present, skipping seed");
        return Ok(0);
    }

    let units = catalog();
    let inserted = units.len();
    for unit in units {
        repos.units().save(unit).await?;
    }

    for &(category, nightly, weekly, monthly, four_month) in CATEGORY_RATES {
        let plan = RatePlan::new(RatePlanScope::Category(category), nightly).with_tiers(
            Some(weekly),
            Some(monthly),
            Some(four_month),
        );
        repos.rate_plans().save(plan).await?;
    }

    info!(units = inserted, rate_plans = CATEGORY_RATES.len(), "Catalog seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn seeds_once() {
        let repos = SeaOrmRepositoryProvider::new(test_database().await);

        let first = seed_catalog(&repos).await.unwrap();
        assert_eq!(first, UNITS.len() + TRAILER_NUMBERS.len());
        assert_eq!(seed_catalog(&repos).await.unwrap(), 0);

        let cottage = repos.units().find_by_slug("cottage-9606").await.unwrap().unwrap();
        assert_eq!(cottage.unit_type, UnitType::Cottage2Br);
        assert_eq!(cottage.capacity, 4);
        assert!(cottage.features.iter().any(|f| f == "Maximum occupancy: 4 guests"));

        let closed = repos.units().find_by_slug("cottage-9614").await.unwrap().unwrap();
        assert!(!closed.active);

        let trailer_plan = repos
            .rate_plans()
            .find_for_category(UnitType::Trailer)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(trailer_plan.nightly, Some(4500));
        assert_eq!(trailer_plan.four_month, Some(360000));
        assert!(repos
            .rate_plans()
            .find_for_category(UnitType::RvSite)
            .await
            .unwrap()
            .is_none());
    }
}
