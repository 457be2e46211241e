// src/shared/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => clear nullable columns, keep non-nullable ones
// - Value(v): replace with v
//
// Serde behavior (pair with #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    /// Converts the carried value, keeping Unset/Null as they are.
    pub fn try_map<U, E, F>(self, f: F) -> Result<PatchField<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            PatchField::Unset => Ok(PatchField::Unset),
            PatchField::Null => Ok(PatchField::Null),
            PatchField::Value(v) => f(v).map(PatchField::Value),
        }
    }
}
