//! # Entry Surface
//!
//! Raw text comes in from a UI (command line flags, dialog fields, ...) and has to become an
//! [`AnimalRecord`] before it can reach a store. This module owns that step:
//!
//! - every field is trimmed
//! - Tag ID and age must parse as integers, weight as a decimal
//! - species and name must be non-empty
//! - gender and health status must belong to their closed vocabularies, and are stored
//!   with their canonical spelling
//!
//! Anything that fails here fails before a store is touched.

use crate::error::{Result, WatsError};
use crate::model::{AnimalRecord, Gender, HealthStatus};

/// Raw text for a new record, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct AnimalForm {
    pub id: String,
    pub species: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub health_status: String,
}

impl AnimalForm {
    pub fn into_record(self) -> Result<AnimalRecord> {
        let id = parse_integer("Tag ID", &self.id)?;
        let species = required_text("Species", &self.species)?;
        let name = required_text("Name", &self.name)?;
        let age = parse_integer("Age", &self.age)?;
        let gender = self.gender.trim().parse::<Gender>()?;
        let weight = parse_decimal("Weight", &self.weight)?;
        let health = self.health_status.trim().parse::<HealthStatus>()?;

        AnimalRecord::new(
            id,
            species,
            name,
            age,
            gender.as_str(),
            weight,
            health.as_str(),
        )
    }
}

/// Raw text for the fields to change on an existing record. `None` keeps the current value.
///
/// The Tag ID is not part of a patch: it is the key of the record being replaced.
#[derive(Debug, Clone, Default)]
pub struct AnimalPatch {
    pub species: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub weight: Option<String>,
    pub health_status: Option<String>,
}

impl AnimalPatch {
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.weight.is_none()
            && self.health_status.is_none()
    }

    /// Returns a copy of `current` with the patched fields validated and applied.
    pub fn apply(&self, current: &AnimalRecord) -> Result<AnimalRecord> {
        let mut record = current.clone();

        if let Some(species) = &self.species {
            record.set_species(required_text("Species", species)?);
        }
        if let Some(name) = &self.name {
            record.set_name(required_text("Name", name)?);
        }
        if let Some(age) = &self.age {
            record.set_age(parse_integer("Age", age)?)?;
        }
        if let Some(gender) = &self.gender {
            record.set_gender(gender.trim().parse::<Gender>()?.as_str());
        }
        if let Some(weight) = &self.weight {
            record.set_weight(parse_decimal("Weight", weight)?)?;
        }
        if let Some(health) = &self.health_status {
            record.set_health_status(health.trim().parse::<HealthStatus>()?.as_str());
        }

        Ok(record)
    }
}

fn required_text(field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(WatsError::validation(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

fn parse_integer(field: &str, raw: &str) -> Result<i32> {
    let value = raw.trim();
    value.parse::<i32>().map_err(|_| {
        WatsError::validation(format!("{} must be a whole number (got '{}')", field, value))
    })
}

fn parse_decimal(field: &str, raw: &str) -> Result<f64> {
    let value = raw.trim();
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(WatsError::validation(format!(
            "{} must be a decimal number (got '{}')",
            field, value
        ))),
    }
}
