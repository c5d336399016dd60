//! Configuration handling for the footer

use anyhow::Result;
use chrono::Datelike;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A labelled link shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// User configuration for the footer. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FooterConfig {
    /// Brand shown as the footer heading
    pub brand_name: Option<String>,
    /// Year in the copyright line
    pub copyright_year: Option<i32>,
    /// Footer navigation links
    pub nav_links: Option<Vec<FooterLink>>,
    /// Social media links
    pub social_links: Option<Vec<FooterLink>>,
    /// Rows of page content above the footer
    pub page_lines: Option<u16>,
}

impl FooterConfig {
    const DEFAULT_BRAND: &'static str = "TaskFlow";
    const DEFAULT_PAGE_LINES: u16 = 60;
    /// The whole page is re-rendered every frame, so keep it bounded
    pub const MAX_PAGE_LINES: u16 = 1000;

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "taskflow", "taskflow-footer")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file path; the terminal itself is taken by the UI
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("taskflow-footer.log"))
    }

    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: FooterConfig = serde_json::from_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn brand_name(&self) -> &str {
        self.brand_name.as_deref().unwrap_or(Self::DEFAULT_BRAND)
    }

    /// Configured year, or the current one
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Copyright line, e.g. "© TaskFlow 2026"
    pub fn copyright_line(&self) -> String {
        format!("© {} {}", self.brand_name(), self.copyright_year())
    }

    pub fn nav_links(&self) -> Vec<FooterLink> {
        self.nav_links.clone().unwrap_or_else(|| {
            vec![
                FooterLink::new("Home", "/"),
                FooterLink::new("About", "/about"),
                FooterLink::new("Privacy", "/privacy"),
            ]
        })
    }

    pub fn social_links(&self) -> Vec<FooterLink> {
        self.social_links.clone().unwrap_or_else(|| {
            vec![
                FooterLink::new("GitHub", "https://github.com/taskflow"),
                FooterLink::new("Twitter", "https://twitter.com/taskflow"),
                FooterLink::new("LinkedIn", "https://linkedin.com/company/taskflow"),
                FooterLink::new("Discord", "https://discord.gg/taskflow"),
            ]
        })
    }

    pub fn page_lines(&self) -> u16 {
        self.page_lines
            .unwrap_or(Self::DEFAULT_PAGE_LINES)
            .min(Self::MAX_PAGE_LINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FooterConfig::default();
        assert!(config.brand_name.is_none());
        assert!(config.copyright_year.is_none());
        assert!(config.nav_links.is_none());
        assert!(config.social_links.is_none());
        assert!(config.page_lines.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = FooterConfig::default();
        assert_eq!(config.brand_name(), "TaskFlow");
        assert_eq!(config.page_lines(), 60);
        assert_eq!(config.copyright_year(), chrono::Local::now().year());

        let nav: Vec<_> = config.nav_links().into_iter().map(|l| l.href).collect();
        assert_eq!(nav, vec!["/", "/about", "/privacy"]);
        assert_eq!(config.social_links().len(), 4);
    }

    #[test]
    fn test_copyright_line() {
        let config = FooterConfig {
            copyright_year: Some(2026),
            ..Default::default()
        };
        assert_eq!(config.copyright_line(), "© TaskFlow 2026");
    }

    #[test]
    fn test_serialization() {
        let config = FooterConfig {
            brand_name: Some("Acme".to_string()),
            copyright_year: Some(2030),
            nav_links: Some(vec![FooterLink::new("Blog", "/blog")]),
            social_links: Some(vec![]),
            page_lines: Some(10),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FooterConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.brand_name(), "Acme");
        assert_eq!(parsed.copyright_year(), 2030);
        assert_eq!(parsed.nav_links(), vec![FooterLink::new("Blog", "/blog")]);
        assert!(parsed.social_links().is_empty());
        assert_eq!(parsed.page_lines(), 10);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FooterConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.brand_name.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"brand_name": "Acme", "unknown_field": "value"}"#;
        let parsed: FooterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.brand_name(), "Acme");
    }

    #[test]
    fn test_page_lines_is_clamped() {
        let config = FooterConfig {
            page_lines: Some(u16::MAX),
            ..Default::default()
        };
        assert_eq!(config.page_lines(), FooterConfig::MAX_PAGE_LINES);
    }

    #[test]
    fn test_log_path_is_a_log_file() {
        if let Some(path) = FooterConfig::log_path() {
            assert!(path.ends_with("taskflow-footer.log"));
        }
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("taskflow-footer-{}-{name}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let config = FooterConfig::load_from(&scratch_path("missing.json")).unwrap();
        assert!(config.brand_name.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = scratch_path("config.json");
        fs::write(&path, r#"{"brand_name": "Acme", "page_lines": 12}"#).unwrap();

        let config = FooterConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.brand_name(), "Acme");
        assert_eq!(config.page_lines(), 12);
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let path = scratch_path("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FooterConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_returns_ok() {
        // Depends on whether a config file exists on this machine
        let result = FooterConfig::load();
        assert!(result.is_ok());
    }
}
