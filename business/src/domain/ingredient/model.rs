use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::IngredientError;

pub const DEFAULT_UNIT: &str = "piece";
const NAME_MAX_LEN: usize = 100;

/// A reusable, named material from the shared catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(
        name: String,
        category: String,
        unit: Option<String>,
    ) -> Result<Self, IngredientError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(IngredientError::NameEmpty);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(IngredientError::NameTooLong);
        }

        let unit = unit
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category: category.trim().to_string(),
            unit,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        category: String,
        unit: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            unit,
            created_at,
            updated_at,
        }
    }
}
