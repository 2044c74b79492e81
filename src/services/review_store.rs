use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;
use crate::models::StoredPlaceRecord;
use crate::services::store::{contains_pattern, open_read_only, ping, PoolConfig, StoreError};

const STORE_NAME: &str = "reviews";

#[derive(Debug, FromRow)]
struct PlaceRow {
    name: Option<String>,
    area: Option<String>,
    category: Option<String>,
    address2: Option<String>,
    reviewnum: Option<String>,
    rating: Option<String>,
}

impl From<PlaceRow> for StoredPlaceRecord {
    fn from(row: PlaceRow) -> Self {
        Self {
            name: row.name.unwrap_or_default(),
            area: row.area,
            category: row.category,
            address: row.address2,
            review_count: row.reviewnum,
            rating: row.rating,
        }
    }
}

/// Read-only access to the map listing database
///
/// Rows live in `mapinformation`, one per (name, address) pair, as written by
/// the map scraper.
pub struct ReviewStore {
    pool: SqlitePool,
}

impl ReviewStore {
    pub fn new(database_url: &str, config: PoolConfig) -> Result<Self, StoreError> {
        tracing::info!("Opening review store at {}", database_url);
        Ok(Self {
            pool: open_read_only(database_url, config)?,
        })
    }

    /// First listing whose name and address contain the given fragments
    pub async fn find_by_name_and_address(
        &self,
        name_fragment: &str,
        address_fragment: &str,
    ) -> Result<Option<StoredPlaceRecord>, StoreError> {
        let query = r#"
            SELECT name, area, category, address2, reviewnum, rating
            FROM mapinformation
            WHERE name LIKE ? AND address2 LIKE ?
            LIMIT 1
        "#;

        let row: Option<PlaceRow> = sqlx::query_as(query)
            .bind(contains_pattern(name_fragment))
            .bind(contains_pattern(address_fragment))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// All listings at an address that share a name fragment, for fuzzy tie-breaking
    pub async fn find_candidates_at_address(
        &self,
        address_fragment: &str,
        name_fragment: &str,
    ) -> Result<Vec<StoredPlaceRecord>, StoreError> {
        let query = r#"
            SELECT name, area, category, address2, reviewnum, rating
            FROM mapinformation
            WHERE address2 LIKE ? AND name LIKE ?
        "#;

        let rows: Vec<PlaceRow> = sqlx::query_as(query)
            .bind(contains_pattern(address_fragment))
            .bind(contains_pattern(name_fragment))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<(), StoreError> {
        ping(&self.pool, STORE_NAME).await
    }
}
