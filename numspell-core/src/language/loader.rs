//! Embedded language configurations
//!
//! Embedded configs are parsed once on first access and shared read-only.

use super::config::LanguageConfig;
use crate::error::{Result, SpellError};
use std::collections::HashMap;
use std::sync::OnceLock;

static LANGUAGE_CONFIGS: OnceLock<Result<HashMap<String, LanguageConfig>>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_CONFIGS: [(&str, &str); 1] = [embed_language_config!(
    "en",
    "../../configs/languages/english.toml"
)];

fn load_embedded_configs() -> Result<HashMap<String, LanguageConfig>> {
    let mut configs = HashMap::new();

    for (code, toml_content) in EMBEDDED_CONFIGS {
        let config = LanguageConfig::from_toml_str(toml_content).map_err(|e| {
            SpellError::Configuration(format!("Failed to parse {code} config: {e}"))
        })?;

        // Validate that the config code matches
        if config.metadata.code != code {
            return Err(SpellError::Configuration(format!(
                "Config code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn embedded_configs() -> Result<&'static HashMap<String, LanguageConfig>> {
    LANGUAGE_CONFIGS
        .get_or_init(load_embedded_configs)
        .as_ref()
        .map_err(Clone::clone)
}

/// Map language names to their codes ("english" → "en")
fn canonical_code(code: &str) -> String {
    let code = code.trim().to_ascii_lowercase();
    match code.as_str() {
        "english" => "en".to_string(),
        _ => code,
    }
}

/// Look up an embedded configuration by code or name
pub fn get_language_config(code: &str) -> Result<&'static LanguageConfig> {
    embedded_configs()?
        .get(&canonical_code(code))
        .ok_or_else(|| SpellError::UnsupportedLanguage(code.to_string()))
}

/// Codes of all embedded languages, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED_CONFIGS.iter().map(|(code, _)| *code).collect();
    codes.sort_unstable();
    codes
}

/// Raw TOML of an embedded configuration, useful as a template
pub fn embedded_source(code: &str) -> Option<&'static str> {
    let code = canonical_code(code);
    EMBEDDED_CONFIGS
        .iter()
        .find(|(embedded, _)| *embedded == code)
        .map(|(_, content)| *content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_language_config_unsupported() {
        match get_language_config("nonexistent") {
            Err(SpellError::UnsupportedLanguage(code)) => {
                assert_eq!(code, "nonexistent");
            }
            _ => panic!("Expected UnsupportedLanguage error"),
        }
    }

    #[test]
    fn test_get_language_config_english() {
        let config = get_language_config("en").expect("English config should exist");
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.metadata.name, "English");
    }

    #[test]
    fn test_language_name_alias() {
        let by_name = get_language_config("English").unwrap();
        let by_code = get_language_config("en").unwrap();
        assert!(std::ptr::eq(by_name, by_code));
    }

    #[test]
    fn test_embedded_english_matches_builtin_tables() {
        let lexicon = get_language_config("en").unwrap().lexicon().unwrap();
        assert_eq!(lexicon, crate::language::tables::Lexicon::english());
    }

    #[test]
    fn test_list_available_languages() {
        assert_eq!(list_available_languages(), vec!["en"]);
    }

    #[test]
    fn test_embedded_source() {
        let source = embedded_source("english").unwrap();
        assert!(source.contains("[metadata]"));
        assert!(embedded_source("xx").is_none());
    }

    #[test]
    fn test_get_language_config_multiple_times() {
        let config1 = get_language_config("en").unwrap();
        let config2 = get_language_config("en").unwrap();
        assert!(std::ptr::eq(config1, config2)); // Same reference
    }
}
