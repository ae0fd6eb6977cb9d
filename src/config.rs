//! Boot configuration: which element to mount into, how verbose to log, and which
//! stylesheets to register before the first render.

use crate::stylesheets::Stylesheet;
use crate::types::{BootError, Layer, DEFAULT_MOUNT_POINT};
use log::Level;
use serde::{Deserialize, Serialize};

/// Bootstrap's compiled CSS, the base framework layer.
pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/css/bootstrap.min.css";
/// Styles for the range slider widget.
pub const RANGE_SLIDER_CSS: &str =
    "https://cdn.jsdelivr.net/npm/react-bootstrap-range-slider@3.0.8/dist/react-bootstrap-range-slider.css";
/// Key of the application's own stylesheet in the embedded asset table.
pub const LOCAL_CSS: &str = "index.css";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Id of the element the application is mounted into.
    pub mount_point: String,
    /// Maximum level emitted by the logger.
    pub log_level: Level,
    /// Stylesheets in registration order.
    pub stylesheets: Vec<Stylesheet>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            mount_point: DEFAULT_MOUNT_POINT.to_string(),
            log_level: Level::Info,
            stylesheets: default_stylesheets(),
        }
    }
}

/// The framework, widget and local stylesheets, in cascade order.
pub fn default_stylesheets() -> Vec<Stylesheet> {
    vec![
        Stylesheet::href("bootstrap", Layer::Framework, BOOTSTRAP_CSS),
        Stylesheet::href("range-slider", Layer::Widget, RANGE_SLIDER_CSS),
        Stylesheet::embedded("index", Layer::Local, LOCAL_CSS),
    ]
}

impl BootConfig {
    /// Parses a configuration from JSON. Missing fields take their default values.
    pub fn from_json(content: &str) -> Result<Self, BootError> {
        serde_json::from_str(content).map_err(|e| BootError::Config(e.to_string()))
    }

    /// Checks that the mount point id could match an element of the document.
    ///
    /// Element ids must be non-empty and contain no ASCII whitespace.
    pub fn validate(&self) -> Result<(), BootError> {
        if self.mount_point.is_empty()
            || self.mount_point.chars().any(|c| c.is_ascii_whitespace())
        {
            return Err(BootError::InvalidMountPoint(self.mount_point.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheets::StylesheetSource;

    #[test]
    fn test_default_config() {
        let config = BootConfig::default();

        assert_eq!(config.mount_point, "root");
        assert_eq!(config.log_level, Level::Info);
        let layers: Vec<Layer> = config.stylesheets.iter().map(|s| s.layer).collect();
        assert_eq!(layers, vec![Layer::Framework, Layer::Widget, Layer::Local]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BootConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();

        assert_eq!(config.log_level, Level::Debug);
        assert_eq!(config.mount_point, DEFAULT_MOUNT_POINT);
        assert_eq!(config.stylesheets, default_stylesheets());
    }

    #[test]
    fn test_full_json() {
        let config = BootConfig::from_json(
            r#"{
                "mount_point": "app",
                "log_level": "warn",
                "stylesheets": [
                    { "name": "bootstrap", "layer": "framework", "href": "bootstrap.css" },
                    { "name": "index", "layer": "local", "embedded": "index.css" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.mount_point, "app");
        assert_eq!(config.log_level, Level::Warn);
        assert_eq!(config.stylesheets.len(), 2);
        assert_eq!(
            config.stylesheets[1].source,
            StylesheetSource::Embedded("index.css".to_string())
        );
    }

    #[test]
    fn test_invalid_json() {
        let result = BootConfig::from_json(r#"{ "log_level": "loud" }"#);
        assert!(matches!(result, Err(BootError::Config(_))));

        let result = BootConfig::from_json("not json");
        assert!(matches!(result, Err(BootError::Config(_))));
    }

    #[test]
    fn test_validate_mount_point() {
        let mut config = BootConfig {
            mount_point: String::new(),
            ..BootConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(BootError::InvalidMountPoint(String::new()))
        );

        config.mount_point = "app root".to_string();
        assert!(config.validate().is_err());
    }
}
