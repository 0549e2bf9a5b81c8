use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Where the merge reads its three sources and writes its result.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_german")]
    pub german: PathBuf,
    #[serde(default = "PathsConfig::default_french")]
    pub french: PathBuf,
    #[serde(default = "PathsConfig::default_items")]
    pub items: PathBuf,
    #[serde(default = "PathsConfig::default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            german: Self::default_german(),
            french: Self::default_french(),
            items: Self::default_items(),
            output: Self::default_output(),
        }
    }
}

impl PathsConfig {
    fn default_german() -> PathBuf {
        PathBuf::from("de.i18n.json")
    }

    fn default_french() -> PathBuf {
        PathBuf::from("fr.i18n.json")
    }

    fn default_items() -> PathBuf {
        PathBuf::from("items.json")
    }

    fn default_output() -> PathBuf {
        PathBuf::from("frontend/src/assets/de-fr.i18n.json")
    }
}

impl Config {
    /// Load `~/i18nmerge/config.json`, falling back to built-in defaults when
    /// the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("i18nmerge"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::create_config_at(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point the paths at your de/fr translation exports and item catalog");
        println!("   2. Run 'i18nmerge' to write the combined file");
        println!();
        println!("🔧 Positional arguments still override every configured path:");
        println!("   i18nmerge <GERMAN> <FRENCH> <ITEMS> <OUTPUT>");
        println!();
        Ok(())
    }

    pub fn create_config_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "paths": {
    "german": "de.i18n.json",
    "french": "fr.i18n.json",
    "items": "items.json",
    "output": "frontend/src/assets/de-fr.i18n.json"
  }
}
"#;

        std::fs::write(config_path, config_template)?;
        Ok(())
    }
}
