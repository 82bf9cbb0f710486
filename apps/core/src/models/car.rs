use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Spec key reserved as a mode flag: it drives which fuel fields are shown
/// and is never rendered as a spec row of its own.
pub const IS_ELECTRIC_KEY: &str = "isElectric";

/// A single spec value. The backend stores free-form strings for every
/// technical attribute except `isElectric`, which is a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Flag(bool),
    Text(String),
}

impl SpecValue {
    /// Empty strings count as absent — they are excluded from display.
    pub fn is_empty(&self) -> bool {
        match self {
            SpecValue::Text(s) => s.is_empty(),
            SpecValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpecValue::Text(s) => Some(s),
            SpecValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SpecValue::Flag(b) => Some(*b),
            SpecValue::Text(_) => None,
        }
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::Text(s.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(s: String) -> Self {
        SpecValue::Text(s)
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        SpecValue::Flag(b)
    }
}

/// Mapping of spec key → value for one car version.
pub type SpecMap = BTreeMap<String, SpecValue>;

/// A named variant of a car model-year (trim level) carrying its own specs.
/// Names are display labels, not keys — duplicates are allowed and every
/// lookup is by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarVersion {
    pub name: String,
    #[serde(default)]
    pub specs: SpecMap,
}

/// An official gallery photo attached to a car by an administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarPhoto {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A catalogued car as the backend returns it.
///
/// Cars created before the versioning feature carry their specs only in the
/// legacy root `specs` field; `catalog::normalize` upcasts those at read
/// time so `versions` is never empty past the service boundary. The root
/// `version` and `specs` fields stay untouched — version-unaware readers
/// still rely on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(default)]
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Legacy display label for the primary version.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_image_url: String,
    #[serde(default)]
    pub photos: Vec<CarPhoto>,
    /// Legacy flat spec mapping, mirrored from `versions[0]` on save.
    #[serde(default)]
    pub specs: SpecMap,
    #[serde(default)]
    pub versions: Vec<CarVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chileautos_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_url: Option<String>,
}

impl Car {
    pub fn is_electric(&self) -> bool {
        self.specs
            .get(IS_ELECTRIC_KEY)
            .and_then(SpecValue::as_flag)
            .unwrap_or(false)
    }
}
