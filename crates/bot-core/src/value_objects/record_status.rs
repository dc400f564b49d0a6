//! Record status - the current value set by the bot or an administrator

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Status of a [`DomainRecord`](crate::entities::DomainRecord).
///
/// Administrators may set any non-empty value; no transition order is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordStatus(String);

impl RecordStatus {
    /// Status of every record created by a bot
    pub const NEW: &'static str = "new";

    /// Create a status from admin input, trimming surrounding whitespace
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::ValidationError(
                "Status must not be empty".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Wrap a value read back from the store as-is.
    ///
    /// Rows may have been written by other tools, so nothing is checked here.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// The status assigned at creation
    pub fn new_submission() -> Self {
        Self(Self::NEW.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_new(&self) -> bool {
        self.0 == Self::NEW
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecordStatus> for String {
    fn from(status: RecordStatus) -> Self {
        status.0
    }
}
