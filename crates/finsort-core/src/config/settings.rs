//! Sort preferences loaded from a TOML file.
//!
//! ```toml
//! [sort]
//! mode = "finder"
//! reverse = false
//! dirs_first = true
//! locale = "en_US.UTF-8"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collate::parse_posix_locale;
use crate::error::{CoreError, CoreResult};
use crate::nav::sort::{SortDirection, SortOptions};

/// Top-level configuration.
///
/// All fields have defaults so sorting works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sort: SortConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Validates the `[sort]` table into options for
    /// [`sort_entries`](crate::nav::sort::sort_entries).
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownSortMode`] if `mode` names no strategy.
    /// - [`CoreError::InvalidLocale`] if `locale` cannot be parsed.
    pub fn sort_options(&self) -> CoreResult<SortOptions> {
        let sort = &self.sort;
        let locale = sort
            .locale
            .as_deref()
            .map(parse_posix_locale)
            .transpose()?;

        Ok(SortOptions {
            mode: sort.mode.parse()?,
            direction: SortDirection::from_reverse(sort.reverse),
            dirs_first: sort.dirs_first,
            locale,
        })
    }
}

/// The `[sort]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default = "default_true")]
    pub dirs_first: bool,
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            reverse: false,
            dirs_first: true,
            locale: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_mode() -> String {
    "finder".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::sort::SortMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_sort() {
        let config = Config::default();

        assert_eq!(config.sort.mode, "finder");
        assert!(!config.sort.reverse);
        assert!(config.sort.dirs_first);
        assert!(config.sort.locale.is_none());
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[sort]
mode = "name"
reverse = true
dirs_first = false
locale = "sv_SE.UTF-8"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.sort.mode, "name");
        assert!(config.sort.reverse);
        assert!(!config.sort.dirs_first);
        assert_eq!(config.sort.locale.as_deref(), Some("sv_SE.UTF-8"));

        let options = config.sort_options().unwrap();
        assert_eq!(options.mode, SortMode::Name);
        assert_eq!(options.direction, SortDirection::Descending);
        assert!(!options.dirs_first);
        assert_eq!(options.locale.unwrap().to_string(), "sv-SE");
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[sort]
reverse = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert!(config.sort.reverse);
        assert_eq!(config.sort.mode, "finder");
        assert!(config.sort.dirs_first);
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let options = Config::load(&path).unwrap().sort_options().unwrap();

        assert_eq!(options, SortOptions::default());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let mut config = Config::default();
        config.sort.mode = "version".to_string();

        let err = config.sort_options().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSortMode(_)));
    }

    #[test]
    fn invalid_locale_is_rejected() {
        let mut config = Config::default();
        config.sort.locale = Some("not a locale!".to_string());

        let err = config.sort_options().unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocale(_)));
    }

    #[test]
    fn config_is_clone_and_debug() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(cloned.sort.mode, config.sort.mode);
        let debug = format!("{:?}", config);
        assert!(debug.contains("Config"));
    }
}
