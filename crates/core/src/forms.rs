//! Form payloads for dogs, toys and feedings.
//!
//! Forms arrive as url-encoded strings. Every field defaults to empty so a
//! missing field surfaces as a validation error on that field rather than a
//! body rejection. Each form converts into a typed value only after
//! validation succeeds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::meal::Meal;

/// Date format accepted by the feeding form.
pub const FEEDING_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_age(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|age| *age >= 0)
}

fn validate_age(raw: &str) -> Result<(), ValidationError> {
    match parse_age(raw) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("age")
            .with_message("Enter a whole number of years (0 or more).".into())),
    }
}

// ---------------------------------------------------------------------------
// Dogs
// ---------------------------------------------------------------------------

/// Create form for a dog. The owner is never part of the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DogForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub breed: String,
    #[validate(length(min = 1, max = 250))]
    pub description: String,
    #[validate(custom(function = "validate_age"))]
    pub age: String,
}

/// Edit form for a dog. The name cannot be changed after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DogUpdateForm {
    #[validate(length(min = 1, max = 100))]
    pub breed: String,
    #[validate(length(min = 1, max = 250))]
    pub description: String,
    #[validate(custom(function = "validate_age"))]
    pub age: String,
}

/// Validated dog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogFields {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

/// Validated editable dog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogUpdateFields {
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl DogForm {
    pub fn validated(self) -> Result<DogFields, ValidationErrors> {
        self.validate()?;
        Ok(DogFields {
            age: parse_age(&self.age).unwrap_or_default(),
            name: self.name,
            breed: self.breed,
            description: self.description,
        })
    }
}

impl DogUpdateForm {
    pub fn validated(self) -> Result<DogUpdateFields, ValidationErrors> {
        self.validate()?;
        Ok(DogUpdateFields {
            age: parse_age(&self.age).unwrap_or_default(),
            breed: self.breed,
            description: self.description,
        })
    }
}

// ---------------------------------------------------------------------------
// Toys
// ---------------------------------------------------------------------------

/// Create and edit form for a toy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ToyForm {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub color: String,
}

/// Validated toy fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToyFields {
    pub name: String,
    pub color: String,
}

impl ToyForm {
    pub fn validated(self) -> Result<ToyFields, ValidationErrors> {
        self.validate()?;
        Ok(ToyFields {
            name: self.name,
            color: self.color,
        })
    }
}

// ---------------------------------------------------------------------------
// Feedings
// ---------------------------------------------------------------------------

/// Feeding form. The dog comes from the route, never from the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedingForm {
    pub date: String,
    pub meal: String,
}

/// A parsed feeding entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedingEntry {
    pub date: NaiveDate,
    pub meal: Meal,
}

impl FeedingForm {
    pub fn parse(&self) -> Result<FeedingEntry, CoreError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), FEEDING_DATE_FORMAT)
            .map_err(|e| CoreError::Validation(format!("Invalid feeding date: {e}")))?;
        let meal = Meal::from_code(self.meal.trim())?;
        Ok(FeedingEntry { date, meal })
    }
}
