//! Meal kinds recorded by feedings, and the "fed for today" rule.
//!
//! Meals are stored as a single-character code (`B`, `L`, `D`) in the
//! `feedings.meal` column.

use serde::Serialize;

use crate::error::CoreError;

/// The kind of meal a feeding records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    /// All meal kinds in display order.
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// The meal preselected on a blank feeding form.
    pub const DEFAULT: Meal = Meal::Breakfast;

    /// Single-character storage code.
    pub fn code(self) -> &'static str {
        match self {
            Meal::Breakfast => "B",
            Meal::Lunch => "L",
            Meal::Dinner => "D",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }

    /// Parse a storage code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        Meal::ALL
            .into_iter()
            .find(|meal| meal.code() == code)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid meal '{code}'. Must be one of: B, L, D"
                ))
            })
    }
}

/// A `(value, label)` pair for rendering the meal select box.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MealChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// The select-box choices for the feeding form, in display order.
pub fn meal_choices() -> Vec<MealChoice> {
    Meal::ALL
        .into_iter()
        .map(|meal| MealChoice {
            value: meal.code(),
            label: meal.label(),
        })
        .collect()
}

/// A dog counts as fed for today once it has as many feedings dated today as
/// there are meal kinds.
pub fn is_fed_for_today(feedings_today: i64) -> bool {
    feedings_today >= Meal::ALL.len() as i64
}
