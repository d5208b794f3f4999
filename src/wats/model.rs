//! # Animal Records
//!
//! [`AnimalRecord`] is one row of the tracked population. It is a plain data holder: no
//! I/O, no knowledge of where it is stored.
//!
//! The only rule enforced here is numeric: age and weight can never be negative. The
//! record keeps every text field exactly as given. Trimming, parsing and vocabulary checks
//! happen earlier, at the entry surface (see [`crate::form`]), which is also where
//! [`Gender`] and [`HealthStatus`] are used.

use crate::error::{Result, WatsError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalRecord {
    id: i32,
    species: String,
    name: String,
    age: i32,
    gender: String,
    weight: f64,
    health_status: String,
}

impl AnimalRecord {
    /// Builds a record, rejecting a negative age or weight.
    pub fn new(
        id: i32,
        species: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        weight: f64,
        health_status: impl Into<String>,
    ) -> Result<Self> {
        check_age(age)?;
        check_weight(weight)?;
        Ok(Self {
            id,
            species: species.into(),
            name: name.into(),
            age,
            gender: gender.into(),
            weight,
            health_status: health_status.into(),
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn health_status(&self) -> &str {
        &self.health_status
    }

    pub fn set_species(&mut self, species: impl Into<String>) {
        self.species = species.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i32) -> Result<()> {
        check_age(age)?;
        self.age = age;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = gender.into();
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        check_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    pub fn set_health_status(&mut self, health_status: impl Into<String>) {
        self.health_status = health_status.into();
    }
}

fn check_age(age: i32) -> Result<()> {
    if age < 0 {
        return Err(WatsError::validation(format!(
            "Age cannot be negative (got {})",
            age
        )));
    }
    Ok(())
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_nan() || weight < 0.0 {
        return Err(WatsError::validation(format!(
            "Weight cannot be negative (got {})",
            weight
        )));
    }
    Ok(())
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Species: {} | Name: {} | Age: {} | Gender: {} | Weight: {:.2} | Health: {}",
            self.id,
            self.species,
            self.name,
            self.age,
            self.gender,
            self.weight,
            self.health_status
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Healthy,
    Injured,
    Sick,
    Recovering,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Healthy,
        HealthStatus::Injured,
        HealthStatus::Sick,
        HealthStatus::Recovering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Injured => "Injured",
            HealthStatus::Sick => "Sick",
            HealthStatus::Recovering => "Recovering",
        }
    }
}

fn parse_choice<T: Copy>(value: &str, all: &[T], label: fn(&T) -> &'static str) -> Option<T> {
    all.iter()
        .find(|choice| label(choice).eq_ignore_ascii_case(value))
        .copied()
}

fn choices<T>(all: &[T], label: fn(&T) -> &'static str) -> String {
    all.iter().map(label).collect::<Vec<_>>().join(", ")
}

impl FromStr for Gender {
    type Err = WatsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(s, &Gender::ALL, Gender::as_str).ok_or_else(|| {
            WatsError::validation(format!(
                "Unknown gender '{}' (expected one of: {})",
                s,
                choices(&Gender::ALL, Gender::as_str)
            ))
        })
    }
}

impl FromStr for HealthStatus {
    type Err = WatsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(s, &HealthStatus::ALL, HealthStatus::as_str).ok_or_else(|| {
            WatsError::validation(format!(
                "Unknown health status '{}' (expected one of: {})",
                s,
                choices(&HealthStatus::ALL, HealthStatus::as_str)
            ))
        })
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
