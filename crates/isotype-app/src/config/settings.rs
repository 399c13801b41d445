//! Settings loader for .isotype/config.toml

use super::types::Settings;
use isotype_core::prelude::*;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const ISOTYPE_DIR: &str = ".isotype";

/// Load settings from `<project_path>/.isotype/config.toml`
///
/// Returns defaults if the file doesn't exist or fails to parse.
pub fn load_settings(project_path: &Path) -> Settings {
    load_settings_from(&project_path.join(ISOTYPE_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit file path, falling back to defaults
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read settings from a file the user named explicitly
///
/// Unlike [`load_settings_from`], a missing or malformed file is an error.
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }
    let content = std::fs::read_to_string(config_path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.resize.debounce_ms, 180);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".isotype");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[resize]
debounce_ms = 90

[ui]
px_per_column = 8
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.resize.debounce_ms, 90);
        assert_eq!(settings.ui.px_per_column, 8);
        assert_eq!(settings.chart.transition_ms, 600);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".isotype");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "not valid [[[ toml").unwrap();

        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_from_explicit_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("chart.toml");
        std::fs::write(&path, "[narrative]\noffset = 0.5\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.narrative.offset, 0.5);
        assert_eq!(settings.narrative.steps.len(), 7);
    }

    #[test]
    fn test_load_settings_from_directory_path_falls_back() {
        let temp = tempdir().unwrap();
        assert_eq!(load_settings_from(temp.path()), Settings::default());
    }

    #[test]
    fn test_read_settings_is_strict() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(matches!(
            read_settings(&missing),
            Err(Error::ConfigNotFound { .. })
        ));

        let broken = temp.path().join("broken.toml");
        std::fs::write(&broken, "[chart\nunit_size = ").unwrap();
        assert!(matches!(read_settings(&broken), Err(Error::ConfigParse(_))));
        assert_eq!(load_settings_from(&broken), Settings::default());
    }
}
