// Service exports
pub mod lookup;
pub mod review_store;
pub mod social_store;
pub mod store;

pub use lookup::{CountLookup, mention_keywords, parse_review_count};
pub use review_store::ReviewStore;
pub use social_store::SocialStore;
pub use store::{PoolConfig, StoreError};
