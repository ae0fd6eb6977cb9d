//! Stylesheet descriptions and the validated cascade plan the bootstrap registers them from.

use crate::types::{BootError, Layer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where the rules of a stylesheet come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetSource {
    /// An external stylesheet referenced by URL.
    Href(String),
    /// A stylesheet compiled into the binary, looked up by key.
    Embedded(String),
}

impl StylesheetSource {
    fn is_empty(&self) -> bool {
        match self {
            StylesheetSource::Href(href) => href.trim().is_empty(),
            StylesheetSource::Embedded(key) => key.trim().is_empty(),
        }
    }
}

/// A single global stylesheet registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Unique name, also written to the `data-stylesheet` attribute of the injected element.
    pub name: String,
    /// The cascade layer the sheet belongs to.
    pub layer: Layer,
    #[serde(flatten)]
    pub source: StylesheetSource,
}

impl Stylesheet {
    pub fn href(name: &str, layer: Layer, href: &str) -> Self {
        Self {
            name: name.to_string(),
            layer,
            source: StylesheetSource::Href(href.to_string()),
        }
    }

    pub fn embedded(name: &str, layer: Layer, key: &str) -> Self {
        Self {
            name: name.to_string(),
            layer,
            source: StylesheetSource::Embedded(key.to_string()),
        }
    }
}

/// An ordered list of stylesheets whose layers never decrease.
///
/// Registration happens in list order, so the base framework lands first, widget styles
/// second and local overrides last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadePlan {
    sheets: Vec<Stylesheet>,
}

impl CascadePlan {
    /// Validates `sheets` and builds a plan from them.
    ///
    /// # Returns
    ///
    /// * `Err(BootError::InvalidStylesheet)` if a sheet has an empty name or source.
    /// * `Err(BootError::DuplicateStylesheet)` if two sheets share a name.
    /// * `Err(BootError::CascadeOrder)` if a sheet follows one of a higher layer.
    pub fn new(sheets: Vec<Stylesheet>) -> Result<Self, BootError> {
        let mut names = HashSet::new();
        let mut previous: Option<Layer> = None;

        for sheet in &sheets {
            if sheet.name.trim().is_empty() {
                return Err(BootError::InvalidStylesheet(
                    "stylesheet name is empty".to_string(),
                ));
            }
            if sheet.source.is_empty() {
                return Err(BootError::InvalidStylesheet(format!(
                    "stylesheet {} has an empty source",
                    sheet.name
                )));
            }
            if !names.insert(sheet.name.as_str()) {
                return Err(BootError::DuplicateStylesheet(sheet.name.clone()));
            }
            if let Some(previous) = previous {
                if sheet.layer < previous {
                    return Err(BootError::CascadeOrder {
                        name: sheet.name.clone(),
                        layer: sheet.layer,
                        previous,
                    });
                }
            }
            previous = Some(sheet.layer);
        }

        Ok(Self { sheets })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stylesheet> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
