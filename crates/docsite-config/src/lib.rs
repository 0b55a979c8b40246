//! Configuration management for the documentation site.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override displayed version.
    pub version: Option<String>,
    /// Override canonical base URL.
    pub base_url: Option<String>,
    /// Override export output directory.
    pub out_dir: Option<PathBuf>,
    /// Override header shadow threshold.
    pub shadow_threshold: Option<f64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and mount target.
    pub site: SiteConfig,
    /// Header behavior.
    pub header: HeaderConfig,
    /// Export configuration (paths are relative strings from TOML).
    #[serde(default)]
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project name shown in the hero and the document title.
    pub title: String,
    /// Version shown next to the title.
    pub version: String,
    /// `id` of the element the application mounts into.
    pub mount_id: String,
    /// Public URL of the site, used for canonical links.
    pub base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Hyperapp".to_owned(),
            version: "2.0.4".to_owned(),
            mount_id: "app-container".to_owned(),
            base_url: None,
        }
    }
}

/// Header configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset in pixels past which the sticky header gets a shadow.
    pub shadow_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            shadow_threshold: 16.0,
        }
    }
}

/// Raw export configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    out_dir: Option<String>,
    not_found_file: Option<String>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ExportConfig {
    /// Directory the static snapshot is written to.
    pub out_dir: PathBuf,
    /// File name of the not-found page inside `out_dir`.
    pub not_found_file: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, then the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
        if let Some(version) = &settings.version {
            self.site.version.clone_from(version);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = Some(base_url.clone());
        }
        if let Some(out_dir) = &settings.out_dir {
            self.export_resolved.out_dir.clone_from(out_dir);
        }
        if let Some(threshold) = settings.shadow_threshold {
            self.header.shadow_threshold = threshold;
        }
    }

    /// Canonical URL for a site path, if `site.base_url` is set.
    pub fn canonical_url(&self, path: &str) -> Option<String> {
        let base = self.site.base_url.as_deref()?;
        Some(format!("{}{path}", base.trim_end_matches('/')))
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            header: HeaderConfig::default(),
            export: ExportConfigRaw::default(),
            export_resolved: ExportConfig {
                out_dir: base.join("dist"),
                not_found_file: "404.html".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_header()?;
        self.validate_export()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.version, "site.version")?;
        require_non_empty(&self.site.mount_id, "site.mount_id")?;

        if self.site.mount_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "site.mount_id cannot contain whitespace".to_owned(),
            ));
        }

        if let Some(ref base_url) = self.site.base_url {
            require_http_url(base_url, "site.base_url")?;
        }

        Ok(())
    }

    /// Validate header configuration.
    fn validate_header(&self) -> Result<(), ConfigError> {
        let threshold = self.header.shadow_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Validation(
                "header.shadow_threshold must be a non-negative number".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate export configuration.
    fn validate_export(&self) -> Result<(), ConfigError> {
        let file = &self.export_resolved.not_found_file;
        require_non_empty(file, "export.not_found_file")?;
        if file.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "export.not_found_file must be a file name, not a path".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(ref url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.export_resolved = ExportConfig {
            out_dir: config_dir.join(self.export.out_dir.as_deref().unwrap_or("dist")),
            not_found_file: self
                .export
                .not_found_file
                .clone()
                .unwrap_or_else(|| "404.html".to_owned()),
        };
    }
}
