use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use crate::config::MatchingSettings;

/// Trailing floor designation on a road address, e.g. ` 2층` or ` B1층`
static FLOOR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+[A-Za-z0-9가-힣]+층$").unwrap());

/// Road names such as `청운로` or `대학로59길`
static ROAD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[가-힣]+(?:로|길)\d*[가-힣]*").unwrap());

/// Building numbers such as `280` or `12-6`
static BUILDING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:-\d+)?").unwrap());

/// Normalizes a place name for comparison.
///
/// Strips diacritics (Hangul syllables are recomposed), removes anything that is not
/// alphanumeric or whitespace, collapses whitespace and lowercases.
pub fn normalize_name(name: &str) -> String {
    let stripped: String = name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

/// Removes a trailing floor token from a road address.
pub fn clean_address(address: &str) -> String {
    FLOOR_SUFFIX.replace(address, "").trim().to_string()
}

/// Extracts road names followed by building numbers from an address.
pub fn address_keywords(address: &str) -> Vec<String> {
    if address.is_empty() {
        return Vec::new();
    }

    ROAD_NAME
        .find_iter(address)
        .chain(BUILDING_NUMBER.find_iter(address))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Branch-name rewriting rules used by the store lookups
#[derive(Debug, Clone)]
pub struct NameRules {
    aliases: Vec<(String, String)>,
    branch_suffix: Option<Regex>,
    region_word: Option<Regex>,
}

impl NameRules {
    pub fn new(settings: &MatchingSettings) -> Result<Self, regex::Error> {
        let branch_suffix = alternation(&settings.branch_suffixes)
            .map(|alt| Regex::new(&format!(r"\s*(?:{})\s*$", alt)))
            .transpose()?;
        let region_word = alternation(&settings.region_words)
            .map(|alt| Regex::new(&format!(r"\s*(?:{})\s*", alt)))
            .transpose()?;

        Ok(Self {
            aliases: settings.aliases.clone(),
            branch_suffix,
            region_word,
        })
    }

    /// Applies every alias substitution in order, e.g. `영대점` -> `영남대점`.
    pub fn apply_aliases(&self, name: &str) -> String {
        self.aliases
            .iter()
            .fold(name.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }

    /// Strips branch suffixes and region words, leaving the brand name.
    pub fn core_name(&self, name: &str) -> String {
        let mut core = name.to_string();
        if let Some(re) = &self.branch_suffix {
            core = re.replace(&core, "").into_owned();
        }
        if let Some(re) = &self.region_word {
            core = re.replace_all(&core, "").into_owned();
        }
        core.trim().to_string()
    }
}

fn alternation(words: &[String]) -> Option<String> {
    let escaped: Vec<String> = words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| regex::escape(w))
        .collect();

    if escaped.is_empty() {
        None
    } else {
        Some(escaped.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> NameRules {
        NameRules::new(&MatchingSettings::default()).unwrap()
    }

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize_name("  Café   DE-Paris! "), "cafe deparis");
        assert_eq!(normalize_name("맛있는집 (본점)"), "맛있는집 본점");
    }

    #[test]
    fn test_normalize_keeps_hangul_syllables() {
        let normalized = normalize_name("교촌치킨");
        assert_eq!(normalized, "교촌치킨");
        assert_eq!(normalized.chars().count(), 4);
    }

    #[test]
    fn test_clean_address_drops_floor() {
        assert_eq!(clean_address("경북 경산시 대학로 280 2층"), "경북 경산시 대학로 280");
        assert_eq!(clean_address("경북 경산시 대학로 280"), "경북 경산시 대학로 280");
    }

    #[test]
    fn test_address_keywords() {
        let keywords = address_keywords("경북 경산시 대학로59길 12-6");
        assert_eq!(keywords, vec!["대학로59길", "59", "12-6"]);
        assert!(address_keywords("").is_empty());
    }

    #[test]
    fn test_aliases_and_core_name() {
        let rules = rules();
        assert_eq!(rules.apply_aliases("버거킹 영대점"), "버거킹 영남대점");
        assert_eq!(rules.core_name("버거킹 영대점"), "버거킹");
        assert_eq!(rules.core_name("경산 돈까스 본점"), "돈까스");
        assert_eq!(rules.core_name("피자스쿨"), "피자스쿨");
    }
}
