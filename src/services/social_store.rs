use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;
use crate::models::{MentionRecord, StoredPostRecord};
use crate::services::store::{contains_pattern, open_read_only, ping, PoolConfig, StoreError};

const STORE_NAME: &str = "social";

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    instagram_post_url: String,
    caption_text: Option<String>,
    hashtags_representation: Option<String>,
}

impl From<PostRow> for StoredPostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            post_url: row.instagram_post_url,
            caption: row.caption_text,
            hashtags: row.hashtags_representation,
        }
    }
}

#[derive(Debug, FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    address: Option<String>,
    sns_mentions: Option<i64>,
    rating_avg: Option<f64>,
    review_count: Option<i64>,
    tags: Option<String>,
    description: Option<String>,
    source: Option<String>,
}

impl From<RestaurantRow> for MentionRecord {
    fn from(row: RestaurantRow) -> Self {
        let tags = row
            .tags
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: row.id,
            name: row.name,
            address: row.address.unwrap_or_default(),
            sns_mentions: row.sns_mentions.unwrap_or(0),
            rating: row.rating_avg.unwrap_or(0.0),
            review_count: row.review_count.unwrap_or(0),
            tags,
            description: row.description.unwrap_or_default(),
            source: row.source.unwrap_or_else(|| "instagram".to_string()),
        }
    }
}

const RESTAURANT_COLUMNS: &str =
    "id, name, address, sns_mentions, rating_avg, review_count, tags, description, source";

/// Read-only access to the social media database
///
/// Holds scraped posts (`instagram_posts`) and curated restaurants with
/// aggregated mention counts (`restaurants`).
pub struct SocialStore {
    pool: SqlitePool,
}

impl SocialStore {
    pub fn new(database_url: &str, config: PoolConfig) -> Result<Self, StoreError> {
        tracing::info!("Opening social store at {}", database_url);
        Ok(Self {
            pool: open_read_only(database_url, config)?,
        })
    }

    /// Posts whose caption contains the keyword
    pub async fn find_posts_by_caption(&self, keyword: &str) -> Result<Vec<StoredPostRecord>, StoreError> {
        let query = r#"
            SELECT id, instagram_post_url, caption_text, hashtags_representation
            FROM instagram_posts
            WHERE caption_text LIKE ?
        "#;

        let rows: Vec<PostRow> = sqlx::query_as(query)
            .bind(contains_pattern(keyword))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Posts tagged with `#keyword` (prefix match on the tag)
    pub async fn find_posts_by_hashtag(&self, keyword: &str) -> Result<Vec<StoredPostRecord>, StoreError> {
        let query = r#"
            SELECT id, instagram_post_url, caption_text, hashtags_representation
            FROM instagram_posts
            WHERE hashtags_representation LIKE ?
        "#;

        let rows: Vec<PostRow> = sqlx::query_as(query)
            .bind(contains_pattern(&format!("#{}", keyword)))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Curated restaurants, most mentioned first
    ///
    /// A non-empty `keyword` filters on name, address or tags.
    pub async fn list_restaurants(
        &self,
        keyword: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<MentionRecord>, StoreError> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());

        let rows: Vec<RestaurantRow> = match keyword {
            Some(keyword) => {
                let query = format!(
                    "SELECT {} FROM restaurants \
                     WHERE name LIKE ? OR address LIKE ? OR tags LIKE ? \
                     ORDER BY sns_mentions DESC LIMIT ? OFFSET ?",
                    RESTAURANT_COLUMNS
                );
                let pattern = contains_pattern(keyword);
                sqlx::query_as(&query)
                    .bind(pattern.as_str())
                    .bind(pattern.as_str())
                    .bind(pattern.as_str())
                    .bind(limit as i64)
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {} FROM restaurants ORDER BY sns_mentions DESC LIMIT ? OFFSET ?",
                    RESTAURANT_COLUMNS
                );
                sqlx::query_as(&query)
                    .bind(limit as i64)
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Every curated restaurant, most mentioned first
    pub async fn all_restaurants(&self) -> Result<Vec<MentionRecord>, StoreError> {
        let query = format!("SELECT {} FROM restaurants ORDER BY sns_mentions DESC", RESTAURANT_COLUMNS);

        let rows: Vec<RestaurantRow> = sqlx::query_as(&query).fetch_all(&self.pool).await?;

        tracing::debug!("Loaded {} social restaurants", rows.len());

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<(), StoreError> {
        ping(&self.pool, STORE_NAME).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_row_defaults() {
        let record: MentionRecord = RestaurantRow {
            id: 7,
            name: "치킨마을".to_string(),
            address: None,
            sns_mentions: None,
            rating_avg: Some(4.7),
            review_count: None,
            tags: Some("치킨, 술집,,모임".to_string()),
            description: None,
            source: None,
        }
        .into();

        assert_eq!(record.tags, vec!["치킨", "술집", "모임"]);
        assert_eq!(record.sns_mentions, 0);
        assert_eq!(record.address, "");
        assert_eq!(record.source, "instagram");
    }
}
