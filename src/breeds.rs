// src/breeds.rs
use std::collections::HashMap;
use tracing::debug;

use crate::table::RegistrationTable;

/// Case-insensitive lookup from user input to the breed name as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedCatalog {
    by_lower: HashMap<String, String>,
}

impl BreedCatalog {
    /// Build from breed names. When two names lowercase to the same key the
    /// later one replaces the earlier. Blank names are never selectable.
    pub fn from_breeds<I, S>(breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_lower = HashMap::new();
        for breed in breeds {
            let breed: String = breed.into();
            if breed.trim().is_empty() {
                continue;
            }
            if let Some(prev) = by_lower.insert(breed.to_lowercase(), breed.clone()) {
                if prev != breed {
                    debug!(%prev, kept = %breed, "breed names collide case-insensitively");
                }
            }
        }
        Self { by_lower }
    }

    pub fn from_table(table: &RegistrationTable) -> Self {
        Self::from_breeds(table.distinct_breeds())
    }

    /// Canonical name for `input`, ignoring case and surrounding whitespace.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        self.by_lower
            .get(&input.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lower.is_empty()
    }
}
