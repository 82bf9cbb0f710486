//! Version-aware car catalog model.
//!
//! Cars predating the versioning feature carry their specs only in the
//! legacy root fields; everything downstream of `normalize` may assume
//! `versions` is never empty. The migration happens once, at the
//! data-access boundary — no scattered root-spec fallbacks.

pub mod data;
pub mod specs;

use crate::errors::{Error, Result};
use crate::models::car::{Car, CarPhoto, CarVersion, SpecMap};

/// Name given to the synthetic version derived from legacy fields when the
/// car has no display label of its own.
pub const DEFAULT_VERSION_NAME: &str = "Principal";

static EMPTY_SPECS: SpecMap = SpecMap::new();

/// Read-time upcast: guarantees `car.versions.len() >= 1`.
///
/// A car with no `versions` gets exactly one synthetic entry built from the
/// legacy `version` label and root `specs`. The root fields themselves are
/// left untouched — version-unaware readers still consume them.
pub fn normalize(mut car: Car) -> Car {
    if car.versions.is_empty() {
        let name = if car.version.is_empty() {
            DEFAULT_VERSION_NAME.to_string()
        } else {
            car.version.clone()
        };
        car.versions.push(CarVersion {
            name,
            specs: car.specs.clone(),
        });
    }
    car
}

/// Specs of the version at `index`. An out-of-range index yields an empty
/// map instead of panicking: the active index in a view can go stale when
/// a version is removed mid-edit.
pub fn active_specs(car: &Car, index: usize) -> &SpecMap {
    specs_at(&car.versions, index)
}

fn specs_at(versions: &[CarVersion], index: usize) -> &SpecMap {
    versions.get(index).map(|v| &v.specs).unwrap_or(&EMPTY_SPECS)
}

/// Editing state for creating or updating a car listing.
///
/// The draft is version-first: `versions` never goes below one entry, and
/// the legacy root fields are derived on submission rather than edited
/// directly. `year` stays raw form input until `prepare_for_submission`.
#[derive(Debug, Clone)]
pub struct CarDraft {
    /// `Some` when editing an existing listing.
    pub id: Option<String>,
    pub make: String,
    pub model: String,
    pub year: String,
    pub description: String,
    pub main_image_url: String,
    pub photos: Vec<CarPhoto>,
    pub versions: Vec<CarVersion>,
    pub chileautos_url: Option<String>,
    pub marketplace_url: Option<String>,
}

impl Default for CarDraft {
    fn default() -> Self {
        CarDraft {
            id: None,
            make: String::new(),
            model: String::new(),
            year: String::new(),
            description: String::new(),
            main_image_url: String::new(),
            photos: Vec::new(),
            versions: vec![CarVersion {
                name: String::new(),
                specs: specs::empty_spec_form(),
            }],
            chileautos_url: None,
            marketplace_url: None,
        }
    }
}

impl CarDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an edit from an existing car, upcasting legacy records first.
    pub fn from_car(car: &Car) -> Self {
        let car = normalize(car.clone());
        CarDraft {
            id: Some(car.id.clone()),
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year.to_string(),
            description: car.description.clone(),
            main_image_url: car.main_image_url.clone(),
            photos: car.photos.clone(),
            versions: car.versions.clone(),
            chileautos_url: car.chileautos_url.clone(),
            marketplace_url: car.marketplace_url.clone(),
        }
    }

    /// Specs of the version currently selected in the editor. Same stale
    /// index policy as [`active_specs`].
    pub fn active_specs(&self, index: usize) -> &SpecMap {
        specs_at(&self.versions, index)
    }

    /// Appends a new version cloned from the one at `active_index`, named
    /// by sequence number ("Versión 2", "Versión 3", ...).
    pub fn add_version(&mut self, active_index: usize) {
        let specs = specs_at(&self.versions, active_index).clone();
        let name = format!("Versión {}", self.versions.len() + 1);
        self.versions.push(CarVersion { name, specs });
    }

    /// Removes the version at `index`. Rejected (returns `false`) when it
    /// would leave zero versions or the index is out of range.
    pub fn remove_version(&mut self, index: usize) -> bool {
        if self.versions.len() <= 1 || index >= self.versions.len() {
            return false;
        }
        self.versions.remove(index);
        true
    }

    /// Renames the version at `index`. Duplicate names are permitted —
    /// names are display labels, lookups stay index-based. Out-of-range
    /// indices are ignored.
    pub fn rename_version(&mut self, index: usize, name: impl Into<String>) {
        if let Some(version) = self.versions.get_mut(index) {
            version.name = name.into();
        }
    }

    /// Produces the submission payload: coerces `year` to an integer and
    /// mirrors `versions[0]` into the legacy root fields so version-unaware
    /// readers keep working. Versions past index 0 are only visible to
    /// version-aware readers.
    pub fn prepare_for_submission(&self) -> Result<Car> {
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::Validation(format!("invalid year: {:?}", self.year)))?;

        let mut versions = self.versions.clone();
        if versions.is_empty() {
            // Constructors and mutation ops uphold the invariant; guard
            // anyway so a hand-built draft cannot submit zero versions.
            versions.push(CarVersion {
                name: DEFAULT_VERSION_NAME.to_string(),
                specs: SpecMap::new(),
            });
        }
        let primary = &versions[0];

        Ok(Car {
            id: self.id.clone().unwrap_or_default(),
            make: self.make.clone(),
            model: self.model.clone(),
            year,
            version: primary.name.clone(),
            description: self.description.clone(),
            main_image_url: self.main_image_url.clone(),
            photos: self.photos.clone(),
            specs: primary.specs.clone(),
            versions,
            chileautos_url: self.chileautos_url.clone(),
            marketplace_url: self.marketplace_url.clone(),
        })
    }
}
