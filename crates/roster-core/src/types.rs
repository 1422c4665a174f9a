//! Shared types used across the fc-roster workspace.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for free company identifiers with validation.
///
/// Lodestone free company ids are decimal integers rendered as strings
/// (e.g. `9228157111459014466`). They appear verbatim in directory URLs,
/// so anything that is not a plain digit string is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeCompanyId(String);

impl FreeCompanyId {
    /// Create a new `FreeCompanyId` from a string.
    ///
    /// # Errors
    /// Returns error if the id is empty, longer than 32 characters, or
    /// contains anything other than ASCII digits.
    pub fn new(id: impl Into<String>) -> Result<Self, RosterError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), RosterError> {
        if id.is_empty() || id.len() > 32 {
            return Err(RosterError::Validation(format!(
                "invalid free company id: must be 1-32 characters, got {} characters",
                id.len()
            )));
        }

        if id.chars().all(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err(RosterError::Validation(format!(
                "invalid free company id: must be ASCII digits, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for FreeCompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_company_id_valid() {
        let id = "9228157111459014466";
        let fc_id = FreeCompanyId::new(id).expect("valid free company id");
        assert_eq!(fc_id.as_str(), id);
        assert_eq!(fc_id.to_string(), id);
    }

    #[test]
    fn test_free_company_id_invalid() {
        let too_long = "1".repeat(33);
        let invalid_ids = vec![
            "",
            "not-a-number",
            "12345abc",
            " 12345",
            too_long.as_str(),
        ];

        for id in invalid_ids {
            assert!(FreeCompanyId::new(id).is_err(), "Should fail for: '{id}'");
        }
    }

    #[test]
    fn test_free_company_id_serialization() {
        let fc_id = FreeCompanyId::new("123456789").expect("valid free company id");
        let json = serde_json::to_string(&fc_id).expect("serialize id");
        assert_eq!(json, "\"123456789\"");

        let deserialized: FreeCompanyId = serde_json::from_str(&json).expect("deserialize id");
        assert_eq!(deserialized, fc_id);
    }
}
