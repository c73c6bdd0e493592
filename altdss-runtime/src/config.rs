// Engine configuration, deserialized from an altdss.toml file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DssError, DssResult};

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "ALTDSS_CONFIG";
/// Environment variable overriding the engine library path.
pub const LIBRARY_ENV: &str = "ALTDSS_LIBRARY";

/// How to find the engine library and how to prepare new contexts.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Explicit path to the engine library. Takes precedence over `library_name`.
    pub library: Option<PathBuf>,
    /// Bare library name, expanded with the platform prefix and suffix
    /// (`dss_capi` -> `libdss_capi.so`).
    pub library_name: String,
    /// Forward engine messages to `tracing`.
    pub forward_messages: bool,
    /// Let the engine open its own dialogs and editors.
    pub allow_forms: bool,
    pub extended_errors: Option<bool>,
    pub legacy_models: Option<bool>,
    pub compat_flags: Option<u32>,
}

fn default_library_name() -> String {
    "dss_capi".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            library: None,
            library_name: default_library_name(),
            forward_messages: true,
            allow_forms: false,
            extended_errors: None,
            legacy_models: None,
            compat_flags: None,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> DssResult<Self> {
        toml::from_str(source).map_err(|e| DssError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> DssResult<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| DssError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Defaults, overlaid with `ALTDSS_CONFIG` and then `ALTDSS_LIBRARY`.
    pub fn from_env() -> DssResult<Self> {
        let mut config = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => EngineConfig::default(),
        };
        if let Some(library) = env::var_os(LIBRARY_ENV) {
            config.library = Some(PathBuf::from(library));
        }
        Ok(config)
    }

    /// The path or file name handed to the dynamic loader.
    pub fn library_path(&self) -> PathBuf {
        match &self.library {
            Some(path) => path.clone(),
            None => PathBuf::from(libloading::library_filename(&self.library_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.library_name, "dss_capi");
        assert!(config.forward_messages);
        assert!(!config.allow_forms);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = EngineConfig::from_toml_str(
            r#"
            library = "/opt/dss/libdss_capi.so"
            forward_messages = false
            extended_errors = true
            compat_flags = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.library_path(), PathBuf::from("/opt/dss/libdss_capi.so"));
        assert!(!config.forward_messages);
        assert_eq!(config.extended_errors, Some(true));
        assert_eq!(config.legacy_models, None);
        assert_eq!(config.compat_flags, Some(3));
    }

    #[test]
    fn library_name_gets_platform_affixes() {
        let config = EngineConfig {
            library_name: "dss_capi".into(),
            ..EngineConfig::default()
        };
        let file = config.library_path();
        let file = file.to_string_lossy();
        assert!(file.contains("dss_capi"));
        assert!(file.ends_with(std::env::consts::DLL_SUFFIX));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EngineConfig::from_toml_str("libary = \"typo\"").unwrap_err();
        assert!(matches!(err, DssError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/altdss.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/altdss.toml"));
    }
}
