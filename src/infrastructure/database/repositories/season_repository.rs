//! SeaORM implementations of SeasonRepository and FeeRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::fee::{Fee, FeeRepository};
use crate::domain::season::{Season, SeasonRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{fee, season};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn season_to_domain(m: season::Model) -> Season {
    Season {
        id: m.id,
        name: m.name,
        start_date: m.start_date,
        end_date: m.end_date,
        discount_pct: m.discount_pct,
    }
}

fn fee_to_domain(m: fee::Model) -> Fee {
    Fee {
        id: m.id,
        name: m.name,
        amount: m.amount,
        per_stay: m.per_stay,
    }
}

// ── SeaOrmSeasonRepository ──────────────────────────────────────

pub struct SeaOrmSeasonRepository {
    db: DatabaseConnection,
}

impl SeaOrmSeasonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeasonRepository for SeaOrmSeasonRepository {
    async fn save(&self, s: Season) -> DomainResult<()> {
        let model = season::ActiveModel {
            id: Set(s.id),
            name: Set(s.name),
            start_date: Set(s.start_date),
            end_date: Set(s.end_date),
            discount_pct: Set(s.discount_pct),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Season>> {
        let models = season::Entity::find()
            .order_by_asc(season::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(season_to_domain).collect())
    }

    async fn find_touching(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Vec<Season>> {
        let models = season::Entity::find()
            .filter(season::Column::StartDate.lte(check_out))
            .filter(season::Column::EndDate.gte(check_in))
            .order_by_desc(season::Column::DiscountPct)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(season_to_domain).collect())
    }
}

// ── SeaOrmFeeRepository ─────────────────────────────────────────

pub struct SeaOrmFeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmFeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeeRepository for SeaOrmFeeRepository {
    async fn save(&self, f: Fee) -> DomainResult<()> {
        let model = fee::ActiveModel {
            id: Set(f.id),
            name: Set(f.name),
            amount: Set(f.amount),
            per_stay: Set(f.per_stay),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Fee>> {
        let models = fee::Entity::find()
            .order_by_asc(fee::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(fee_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[tokio::test]
    async fn touching_seasons_filter_by_dates() {
        let repo = SeaOrmSeasonRepository::new(test_database().await);
        repo.save(Season::new("Winter", d(1, 1), d(2, 28), 10)).await.unwrap();
        repo.save(Season::new("Spring", d(3, 1), d(5, 31), 5)).await.unwrap();
        repo.save(Season::new("Summer", d(6, 1), d(8, 31), 20)).await.unwrap();

        let hits = repo.find_touching(d(2, 25), d(3, 3)).await.unwrap();
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Winter", "Spring"]);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.first().unwrap().name, "Winter");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn fees_are_ordered_by_name() {
        let repo = SeaOrmFeeRepository::new(test_database().await);
        repo.save(Fee::new("Utilities", 300, false)).await.unwrap();
        repo.save(Fee::new("Cleaning", 5000, true)).await.unwrap();

        let fees = repo.find_all().await.unwrap();
        assert_eq!(fees[0].name, "Cleaning");
        assert!(fees[0].per_stay);
        assert_eq!(fees[1].amount, 300);
    }
}
