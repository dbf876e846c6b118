use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::models::Variant;

const DEFAULT_CONTENT_ROOT: &str = "src/lib/content";
const DEFAULT_PUBLIC_ROOT: &str = "public";
const PLANNING_FILE_NAME: &str = "design.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the localized content tree (`{root}/{locale}/media/*.mdx`)
    pub content_root: PathBuf,
    /// Explicit planning table path; defaults to `design.md` in the content root
    pub planning_file: Option<PathBuf>,
    /// Static asset root that receives per-article image directories
    pub public_root: PathBuf,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            planning_file: None,
            public_root: PathBuf::from(DEFAULT_PUBLIC_ROOT),
            variant: Variant::Enhanced,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from a key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(root) = lookup("ARTICLE_CONTENT_ROOT") {
            config.content_root = PathBuf::from(root);
        }
        if let Some(file) = lookup("ARTICLE_PLANNING_FILE") {
            config.planning_file = Some(PathBuf::from(file));
        }
        if let Some(root) = lookup("ARTICLE_PUBLIC_ROOT") {
            config.public_root = PathBuf::from(root);
        }
        if let Some(variant) = lookup("ARTICLE_VARIANT") {
            config.variant = variant
                .parse()
                .context("ARTICLE_VARIANT must be 'basic' or 'enhanced'")?;
        }

        Ok(config)
    }

    pub fn planning_file(&self) -> PathBuf {
        self.planning_file
            .clone()
            .unwrap_or_else(|| self.content_root.join(PLANNING_FILE_NAME))
    }

    fn try_load_dotenv() {
        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/article-writer/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("article-writer").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.planning_file(),
            PathBuf::from("src/lib/content/design.md")
        );
    }

    #[test]
    fn test_planning_file_follows_content_root() {
        let config = Config::from_lookup(lookup(&[("ARTICLE_CONTENT_ROOT", "/srv/site")])).unwrap();
        assert_eq!(config.planning_file(), PathBuf::from("/srv/site/design.md"));
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            ("ARTICLE_PLANNING_FILE", "plan.tsv"),
            ("ARTICLE_PUBLIC_ROOT", "static"),
            ("ARTICLE_VARIANT", "basic"),
        ]))
        .unwrap();

        assert_eq!(config.planning_file(), PathBuf::from("plan.tsv"));
        assert_eq!(config.public_root, PathBuf::from("static"));
        assert_eq!(config.variant, Variant::Basic);
    }

    #[test]
    fn test_invalid_variant_is_error() {
        let err = Config::from_lookup(lookup(&[("ARTICLE_VARIANT", "deluxe")])).unwrap_err();
        assert!(err.to_string().contains("ARTICLE_VARIANT"));
    }
}
