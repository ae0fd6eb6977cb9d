// Stylesheets compiled into the binary, keyed by the name used in boot.json
const EMBEDDED_STYLESHEETS: [(&str, &str); 1] =
    [("index.css", include_str!("../styles/index.css"))];

/// Boot configuration shipped with the binary.
pub const BOOT_CONFIG: &str = include_str!("../boot.json");

/// Returns the CSS of an embedded stylesheet.
pub fn embedded_stylesheet(key: &str) -> Option<&'static str> {
    EMBEDDED_STYLESHEETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, css)| *css)
}
