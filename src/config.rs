use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Locations of the two scraper-owned SQLite databases
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_review_db_url")]
    pub review_db_url: String,
    #[serde(default = "default_social_db_url")]
    pub social_db_url: String,
    pub max_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            review_db_url: default_review_db_url(),
            social_db_url: default_social_db_url(),
            max_connections: None,
            acquire_timeout_secs: None,
        }
    }
}

fn default_review_db_url() -> String { "sqlite://restarant.db".to_string() }
fn default_social_db_url() -> String { "sqlite://finally.db".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_preference")]
    pub default_preference: String,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            default_preference: default_preference(),
        }
    }
}

fn default_max_results() -> usize { 45 }
fn default_preference() -> String { "balanced".to_string() }

/// Hand-tuned matching vocabulary and thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    /// Ordered (from, to) substitutions for known branch-name variants
    #[serde(default = "default_aliases")]
    pub aliases: Vec<(String, String)>,
    #[serde(default = "default_branch_suffixes")]
    pub branch_suffixes: Vec<String>,
    #[serde(default = "default_region_words")]
    pub region_words: Vec<String>,
    #[serde(default = "default_district_suffixes")]
    pub district_suffixes: Vec<String>,
    #[serde(default = "default_neighborhood_suffixes")]
    pub neighborhood_suffixes: Vec<String>,
    #[serde(default = "default_city_suffixes")]
    pub city_suffixes: Vec<String>,
    /// Short-form city names, some of which end in a district suffix (대구)
    #[serde(default = "default_city_names")]
    pub city_names: Vec<String>,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default = "default_name_threshold")]
    pub name_threshold: f64,
    #[serde(default = "default_name_based_threshold")]
    pub name_based_threshold: f64,
    #[serde(default = "default_address_overlap_threshold")]
    pub address_overlap_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            aliases: default_aliases(),
            branch_suffixes: default_branch_suffixes(),
            region_words: default_region_words(),
            district_suffixes: default_district_suffixes(),
            neighborhood_suffixes: default_neighborhood_suffixes(),
            city_suffixes: default_city_suffixes(),
            city_names: default_city_names(),
            match_threshold: default_match_threshold(),
            name_threshold: default_name_threshold(),
            name_based_threshold: default_name_based_threshold(),
            address_overlap_threshold: default_address_overlap_threshold(),
        }
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_stop_words() -> Vec<String> {
    strings(&["맛집", "음식점", "레스토랑", "카페", "치킨", "피자", "중국집", "한식당", "분식집", "술집"])
}

fn default_aliases() -> Vec<(String, String)> {
    vec![
        ("영대점".to_string(), "영남대점".to_string()),
        ("경산영대".to_string(), "경산영남대".to_string()),
        ("영남대학교".to_string(), "영남대".to_string()),
    ]
}

fn default_branch_suffixes() -> Vec<String> {
    strings(&["영대점", "영남대점", "경산점", "본점", "신대점"])
}

fn default_region_words() -> Vec<String> { strings(&["경산"]) }
fn default_district_suffixes() -> Vec<String> { strings(&["구", "군"]) }
fn default_neighborhood_suffixes() -> Vec<String> { strings(&["동", "읍", "면"]) }
fn default_city_suffixes() -> Vec<String> { strings(&["시", "도"]) }
fn default_city_names() -> Vec<String> {
    strings(&["서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종"])
}
fn default_match_threshold() -> f64 { 0.6 }
fn default_name_threshold() -> f64 { 0.5 }
fn default_name_based_threshold() -> f64 { 0.8 }
fn default_address_overlap_threshold() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PLACE_RANK)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PLACE_RANK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PLACE_RANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            storage: StorageSettings::default(),
            ranking: RankingSettings::default(),
            matching: MatchingSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Apply the short store URL variables the scraper jobs also read
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("REVIEW_DB_URL") {
        builder = builder.set_override("storage.review_db_url", url)?;
    }
    if let Ok(url) = env::var("SOCIAL_DB_URL") {
        builder = builder.set_override("storage.social_db_url", url)?;
    }

    builder.build()
}
