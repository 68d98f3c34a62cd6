//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Folio configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub catalog: CatalogConfig,
}

/// Settings that shape synthesized records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix of generated ids
    pub id_prefix: String,
    /// Added to each record's ordinal so generated ids skip the range used by curated records
    pub id_offset: usize,
    /// Maximum description length in characters, before the ellipsis
    pub description_max_len: usize,
    /// Largest batch a single call may request
    pub max_batch: usize,
    pub github_owner: String,
    pub live_domain: String,
    pub demo_domain: String,
    /// Fixed seed for reproducible output
    #[serde(default, with = "seed_repr", skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub probabilities: Probabilities,
}

/// TOML integers are signed, so seeds above `i64::MAX` are stored as strings
mod seed_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(seed: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match *seed {
            Some(seed) => match i64::try_from(seed) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.serialize_str(&seed.to_string()),
            },
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Number(seed)) => Ok(Some(seed)),
            Some(Repr::Text(text)) => text
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid seed: {}", text))),
            None => Ok(None),
        }
    }
}

/// Independent presence probabilities, each in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probabilities {
    pub featured: f64,
    pub github: f64,
    pub live: f64,
    pub demo: f64,
    /// Only consulted for categories other than AI/ML
    pub ai_powered: f64,
    pub impact_users: f64,
    pub impact_performance: f64,
    pub impact_savings: f64,
    pub impact_reliability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog size after padding with generated records
    pub total: usize,
    pub per_page: usize,
    /// JSON or JSONL file of hand-authored records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            id_prefix: "project-".to_string(),
            id_offset: 100,
            description_max_len: 150,
            max_batch: 10_000,
            github_owner: "folio-labs".to_string(),
            live_domain: "vercel.app".to_string(),
            demo_domain: "demo.folio.dev".to_string(),
            seed: None,
            probabilities: Probabilities::default(),
        }
    }
}

impl Default for Probabilities {
    fn default() -> Self {
        Self {
            featured: 0.1,
            github: 0.8,
            live: 0.5,
            demo: 0.3,
            ai_powered: 0.3,
            impact_users: 0.7,
            impact_performance: 0.5,
            impact_savings: 0.4,
            impact_reliability: 0.4,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            total: 200,
            per_page: 12,
            curated_path: None,
        }
    }
}

impl Probabilities {
    pub const NAMES: [&'static str; 9] = [
        "featured",
        "github",
        "live",
        "demo",
        "ai_powered",
        "impact_users",
        "impact_performance",
        "impact_savings",
        "impact_reliability",
    ];

    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "featured" => Some(self.featured),
            "github" => Some(self.github),
            "live" => Some(self.live),
            "demo" => Some(self.demo),
            "ai_powered" => Some(self.ai_powered),
            "impact_users" => Some(self.impact_users),
            "impact_performance" => Some(self.impact_performance),
            "impact_savings" => Some(self.impact_savings),
            "impact_reliability" => Some(self.impact_reliability),
            _ => None,
        }
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "featured" => Some(&mut self.featured),
            "github" => Some(&mut self.github),
            "live" => Some(&mut self.live),
            "demo" => Some(&mut self.demo),
            "ai_powered" => Some(&mut self.ai_powered),
            "impact_users" => Some(&mut self.impact_users),
            "impact_performance" => Some(&mut self.impact_performance),
            "impact_savings" => Some(&mut self.impact_savings),
            "impact_reliability" => Some(&mut self.impact_reliability),
            _ => None,
        }
    }
}

impl GeneratorConfig {
    /// Validate generator settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.description_max_len == 0 {
            return Err(Error::ConfigError(
                "generator.description_max_len must be greater than 0".to_string(),
            ));
        }
        if self.max_batch == 0 {
            return Err(Error::ConfigError(
                "generator.max_batch must be greater than 0".to_string(),
            ));
        }
        if self.id_offset.checked_add(self.max_batch).is_none() {
            return Err(Error::ConfigError(format!(
                "generator.id_offset {} plus generator.max_batch {} overflows the id range",
                self.id_offset, self.max_batch
            )));
        }
        for name in Probabilities::NAMES {
            let value = self.probabilities.get(name).unwrap_or_default();
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::ConfigError(format!(
                    "generator.probabilities.{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("FOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("folio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.generator.validate()?;
        if self.catalog.per_page == 0 {
            return Err(anyhow!("catalog.per_page must be greater than 0"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        if let Some(name) = key.strip_prefix("generator.probabilities.") {
            return self
                .generator
                .probabilities
                .get(name)
                .map(|p| p.to_string())
                .ok_or_else(|| unknown_key(key));
        }

        match key {
            "generator.id_prefix" => Ok(self.generator.id_prefix.clone()),
            "generator.id_offset" => Ok(self.generator.id_offset.to_string()),
            "generator.description_max_len" => Ok(self.generator.description_max_len.to_string()),
            "generator.max_batch" => Ok(self.generator.max_batch.to_string()),
            "generator.github_owner" => Ok(self.generator.github_owner.clone()),
            "generator.live_domain" => Ok(self.generator.live_domain.clone()),
            "generator.demo_domain" => Ok(self.generator.demo_domain.clone()),
            "generator.seed" => Ok(self
                .generator
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(not set - random each run)".to_string())),

            "catalog.total" => Ok(self.catalog.total.to_string()),
            "catalog.per_page" => Ok(self.catalog.per_page.to_string()),
            "catalog.curated_path" => Ok(self
                .catalog
                .curated_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())),

            _ => Err(unknown_key(key)),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if let Some(name) = key.strip_prefix("generator.probabilities.") {
            let slot = self
                .generator
                .probabilities
                .get_mut(name)
                .ok_or_else(|| unknown_key(key))?;
            let p: f64 = value
                .parse()
                .with_context(|| format!("Invalid probability value: {}", value))?;
            if !(0.0..=1.0).contains(&p) {
                return Err(anyhow!("Probability must be between 0.0 and 1.0"));
            }
            *slot = p;
            return Ok(());
        }

        match key {
            "generator.id_prefix" => {
                self.generator.id_prefix = value.to_string();
            }
            "generator.id_offset" => {
                self.generator.id_offset = value
                    .parse()
                    .with_context(|| format!("Invalid id_offset value: {}", value))?;
            }
            "generator.description_max_len" => {
                let len: usize = value
                    .parse()
                    .with_context(|| format!("Invalid description_max_len value: {}", value))?;
                if len == 0 {
                    return Err(anyhow!("Description length must be greater than 0"));
                }
                self.generator.description_max_len = len;
            }
            "generator.max_batch" => {
                let max: usize = value
                    .parse()
                    .with_context(|| format!("Invalid max_batch value: {}", value))?;
                if max == 0 {
                    return Err(anyhow!("Max batch must be greater than 0"));
                }
                self.generator.max_batch = max;
            }
            "generator.github_owner" => {
                self.generator.github_owner = value.to_string();
            }
            "generator.live_domain" => {
                self.generator.live_domain = value.to_string();
            }
            "generator.demo_domain" => {
                self.generator.demo_domain = value.to_string();
            }
            "generator.seed" => {
                self.generator.seed = if is_unset(value) {
                    None
                } else {
                    Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid seed value: {}", value))?,
                    )
                };
            }

            "catalog.total" => {
                self.catalog.total = value
                    .parse()
                    .with_context(|| format!("Invalid total value: {}", value))?;
            }
            "catalog.per_page" => {
                let per_page: usize = value
                    .parse()
                    .with_context(|| format!("Invalid per_page value: {}", value))?;
                if per_page == 0 {
                    return Err(anyhow!("Per-page count must be greater than 0"));
                }
                self.catalog.per_page = per_page;
            }
            "catalog.curated_path" => {
                self.catalog.curated_path = if is_unset(value) {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }

            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let mut keys: Vec<String> = [
            "generator.id_prefix",
            "generator.id_offset",
            "generator.description_max_len",
            "generator.max_batch",
            "generator.github_owner",
            "generator.live_domain",
            "generator.demo_domain",
            "generator.seed",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect();
        keys.extend(
            Probabilities::NAMES
                .iter()
                .map(|name| format!("generator.probabilities.{}", name)),
        );
        keys.extend(
            ["catalog.total", "catalog.per_page", "catalog.curated_path"]
                .iter()
                .map(|k| k.to_string()),
        );

        keys.into_iter()
            .map(|key| {
                let value = self.get(&key)?;
                Ok((key, value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

fn is_unset(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow!(
        "Unknown configuration key: {}. Use `folio config list` to see available keys.",
        key
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.generator.id_prefix, "project-");
        assert_eq!(config.generator.id_offset, 100);
        assert_eq!(config.generator.description_max_len, 150);
        assert_eq!(config.generator.max_batch, 10_000);
        assert!(config.generator.seed.is_none());
        assert_eq!(config.generator.probabilities.featured, 0.1);
        assert_eq!(config.generator.probabilities.github, 0.8);

        assert_eq!(config.catalog.total, 200);
        assert_eq!(config.catalog.per_page, 12);
        assert!(config.catalog.curated_path.is_none());

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_get_and_set_round_trip() {
        let mut config = Config::default();
        config.set("generator.id_prefix", "demo-").unwrap();
        config.set("generator.seed", "42").unwrap();
        config.set("generator.probabilities.featured", "0.25").unwrap();
        config.set("catalog.per_page", "24").unwrap();
        config.set("catalog.curated_path", "projects.json").unwrap();

        assert_eq!(config.get("generator.id_prefix").unwrap(), "demo-");
        assert_eq!(config.get("generator.seed").unwrap(), "42");
        assert_eq!(config.get("generator.probabilities.featured").unwrap(), "0.25");
        assert_eq!(config.get("catalog.per_page").unwrap(), "24");
        assert_eq!(config.get("catalog.curated_path").unwrap(), "projects.json");

        config.set("generator.seed", "none").unwrap();
        assert!(config.generator.seed.is_none());
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("generator.probabilities.github", "1.5").is_err());
        assert!(config.set("generator.probabilities.github", "abc").is_err());
        assert!(config.set("generator.probabilities.unknown", "0.5").is_err());
        assert!(config.set("generator.description_max_len", "0").is_err());
        assert!(config.set("generator.max_batch", "-3").is_err());
        assert!(config.set("generator.seed", "-1").is_err());
        assert!(config.set("catalog.per_page", "0").is_err());
        assert!(config.set("nope", "1").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_list_covers_every_key() {
        let config = Config::default();
        let items = config.list().unwrap();
        assert_eq!(items.len(), 8 + Probabilities::NAMES.len() + 3);
        assert!(
            items
                .iter()
                .any(|(k, v)| k == "generator.probabilities.demo" && v == "0.3")
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_probability() {
        let mut config = GeneratorConfig::default();
        config.probabilities.live = -0.1;
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "E300");
        assert!(err.to_string().contains("generator.probabilities.live"));
    }

    #[test]
    fn test_validate_rejects_id_offset_overflow() {
        let mut config = Config::default();
        config
            .set("generator.id_offset", &usize::MAX.to_string())
            .unwrap();

        let err = config.generator.validate().unwrap_err();
        assert_eq!(err.code(), "E300");
        assert!(err.to_string().contains("generator.id_offset"));
        assert!(config.validate().is_err());

        config.generator.id_offset = usize::MAX - config.generator.max_batch;
        assert!(config.generator.validate().is_ok());
    }

    #[test]
    fn test_full_range_seed_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("generator.seed", &u64::MAX.to_string()).unwrap();
        assert_eq!(config.generator.seed, Some(u64::MAX));
        assert_eq!(config.get("generator.seed").unwrap(), u64::MAX.to_string());

        config.save_to(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("seed = \"18446744073709551615\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);

        config.set("generator.seed", "7").unwrap();
        config.save_to(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("seed = 7"));
        assert_eq!(Config::load_from(&path).unwrap().generator.seed, Some(7));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("generator.seed", "7").unwrap();
        config.set("catalog.total", "500").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[generator]\nid_prefix = \"x-\"\n\n[generator.probabilities]\ndemo = 1.0\n",
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.generator.id_prefix, "x-");
        assert_eq!(loaded.generator.probabilities.demo, 1.0);
        assert_eq!(loaded.generator.probabilities.github, 0.8);
        assert_eq!(loaded.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[generator.probabilities]\nfeatured = 3.0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
