use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{Cube, CubeError, PerFace, Rgb, ScrambleParams};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// Built-in default preferences.
pub static DEFAULT_PREFS: LazyLock<Preferences> = LazyLock::new(|| {
    serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences")
});

/// User-configurable defaults for constructing, scrambling, and drawing a
/// cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Number of cells along each edge of a new cube.
    pub size: u32,
    /// Number of turns in a scramble.
    pub scramble_length: u32,
    /// Color of each face.
    pub color_scheme: PerFace<Rgb>,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

impl Preferences {
    /// Loads preferences from the YAML file at `path`, layered over the
    /// defaults so that the file may omit any field. If loading fails, the
    /// default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = path {
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Parses a complete set of preferences from a YAML string.
    pub fn from_yaml(s: &str) -> eyre::Result<Self> {
        Ok(serde_norway::from_str(s)?)
    }
    /// Serializes the preferences to a YAML string.
    pub fn to_yaml(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Constructs a solved cube of the configured size.
    pub fn new_cube(&self) -> Result<Cube, CubeError> {
        Cube::new(self.size)
    }
    /// Returns scramble parameters with the configured length and a random
    /// seed.
    pub fn new_scramble(&self) -> ScrambleParams {
        ScrambleParams::new(self.scramble_length)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Face;

    #[test]
    fn test_default_prefs() {
        let prefs = Preferences::default();
        assert_eq!(crate::DEFAULT_SIZE, prefs.size);
        assert_eq!(crate::FULL_SCRAMBLE_LENGTH, prefs.scramble_length);
        assert_eq!(Rgb::new(0xff, 0xff, 0xff), prefs.color_scheme[Face::U]);
    }

    #[test]
    fn test_prefs_yaml_roundtrip() -> eyre::Result<()> {
        let prefs = Preferences::default();
        assert_eq!(prefs, Preferences::from_yaml(&prefs.to_yaml()?)?);
        Ok(())
    }

    #[test]
    fn test_prefs_missing_face() {
        let yaml = "size: 2\nscramble_length: 5\ncolor_scheme:\n  r: '#000000'\n";
        let err = Preferences::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("missing value for face"), "{err}");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("cubepuzzle_prefs_that_do_not_exist.yaml");
        assert_eq!(Preferences::default(), Preferences::load(Some(&path)));
        assert_eq!(Preferences::default(), Preferences::load(None));
    }
}
