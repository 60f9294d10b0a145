use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//
// Every content column is NOT NULL, so services run each field
// through `require_text` / `require_present` before it reaches a
// repository.
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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} cannot be null or empty")]
pub struct InvalidField {
    pub field: &'static str,
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }

    /// Rejects an explicit null for a NOT NULL column.
    pub fn require_present(self, field: &'static str) -> Result<Self, InvalidField> {
        match self {
            PatchField::Null => Err(InvalidField { field }),
            other => Ok(other),
        }
    }
}

impl PatchField<String> {
    /// Rejects null and blank strings, trims accepted values.
    pub fn require_text(self, field: &'static str) -> Result<Self, InvalidField> {
        match self {
            PatchField::Unset => Ok(PatchField::Unset),
            PatchField::Null => Err(InvalidField { field }),
            PatchField::Value(v) => {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    Err(InvalidField { field })
                } else {
                    Ok(PatchField::Value(trimmed.to_string()))
                }
            }
        }
    }
}
