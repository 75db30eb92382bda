//! Configuration resolution: defaults, then an optional TOML file named
//! by `PAZAAK_CONFIG`, then `PAZAAK_*` environment variables, with
//! per-field source tracking for the `cfg` command.

use serde::{Deserialize, Serialize};
use std::fs;

use pazaak_engine::Rules;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub goal: i32,
    pub stand_threshold: i32,
    pub winning_sets: u32,
    pub hand_size: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            goal: rules.goal,
            stand_threshold: rules.stand_threshold,
            winning_sets: rules.winning_sets,
            hand_size: rules.hand_size,
            seed: None,
        }
    }
}

impl Config {
    pub fn to_rules(&self) -> Rules {
        Rules {
            goal: self.goal,
            stand_threshold: self.stand_threshold,
            winning_sets: self.winning_sets,
            hand_size: self.hand_size,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfigSources {
    pub goal: ValueSource,
    pub stand_threshold: ValueSource,
    pub winning_sets: ValueSource,
    pub hand_size: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            goal: ValueSource::Default,
            stand_threshold: ValueSource::Default,
            winning_sets: ValueSource::Default,
            hand_size: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PAZAAK_CONFIG") {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, toml::from_str(&s)?);
    }

    if let Ok(seed) = std::env::var("PAZAAK_SEED") {
        if !seed.is_empty() {
            cfg.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
            );
            sources.seed = ValueSource::Env;
        }
    }
    if let Ok(goal) = std::env::var("PAZAAK_GOAL") {
        if !goal.is_empty() {
            cfg.goal = goal
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid goal".into()))?;
            sources.goal = ValueSource::Env;
        }
    }
    if let Ok(threshold) = std::env::var("PAZAAK_STAND_THRESHOLD") {
        if !threshold.is_empty() {
            cfg.stand_threshold = threshold
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid stand_threshold".into()))?;
            sources.stand_threshold = ValueSource::Env;
        }
    }
    if let Ok(sets) = std::env::var("PAZAAK_WINNING_SETS") {
        if !sets.is_empty() {
            cfg.winning_sets = sets
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid winning_sets".into()))?;
            sources.winning_sets = ValueSource::Env;
        }
    }
    if let Ok(size) = std::env::var("PAZAAK_HAND_SIZE") {
        if !size.is_empty() {
            cfg.hand_size = size
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid hand_size".into()))?;
            sources.hand_size = ValueSource::Env;
        }
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    goal: Option<i32>,
    #[serde(default)]
    stand_threshold: Option<i32>,
    #[serde(default)]
    winning_sets: Option<u32>,
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

fn apply_file(cfg: &mut Config, sources: &mut ConfigSources, file: FileConfig) {
    if let Some(v) = file.goal {
        cfg.goal = v;
        sources.goal = ValueSource::File;
    }
    if let Some(v) = file.stand_threshold {
        cfg.stand_threshold = v;
        sources.stand_threshold = ValueSource::File;
    }
    if let Some(v) = file.winning_sets {
        cfg.winning_sets = v;
        sources.winning_sets = ValueSource::File;
    }
    if let Some(v) = file.hand_size {
        cfg.hand_size = v;
        sources.hand_size = ValueSource::File;
    }
    if let Some(v) = file.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.to_rules()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_rules() {
        let cfg = Config::default();
        assert_eq!(cfg.to_rules(), Rules::default());
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut cfg = Config::default();
        let mut sources = ConfigSources::default();
        let file: FileConfig = toml::from_str("goal = 24\nwinning_sets = 5\n").unwrap();
        apply_file(&mut cfg, &mut sources, file);
        assert_eq!(cfg.goal, 24);
        assert_eq!(cfg.winning_sets, 5);
        assert_eq!(cfg.stand_threshold, 16);
        assert!(matches!(sources.goal, ValueSource::File));
        assert!(matches!(sources.stand_threshold, ValueSource::Default));
    }

    #[test]
    fn partial_file_is_accepted() {
        let file: FileConfig = toml::from_str("seed = 42\n").unwrap();
        let mut cfg = Config::default();
        let mut sources = ConfigSources::default();
        apply_file(&mut cfg, &mut sources, file);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let cfg = Config {
            hand_size: 30,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(toml::from_str::<FileConfig>("goal = [nope").is_err());
    }
}
