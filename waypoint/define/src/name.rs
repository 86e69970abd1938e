use std::fmt;

use thiserror::Error;

/// A validated operation name.
/// Rules:
/// 1. Must start with an ASCII letter.
/// 2. Remaining characters must be ASCII alphanumeric or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationNameError {
    #[error("operation name cannot be empty")]
    Empty,
    #[error("operation name must start with an ASCII letter")]
    InvalidStartCharacter,
    #[error("operation name contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

impl OperationName {
    /// Creates a new OperationName from anything that turns into a String.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, OperationNameError> {
        let s = name.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    fn validate(s: &str) -> Result<(), OperationNameError> {
        let mut chars = s.chars();

        match chars.next() {
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(OperationNameError::InvalidStartCharacter);
            }
            None => return Err(OperationNameError::Empty),
            _ => {}
        }

        for c in chars {
            if !c.is_ascii_alphanumeric() && c != '_' {
                return Err(OperationNameError::InvalidCharacter(c));
            }
        }

        Ok(())
    }

    /// Returns a string slice reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for OperationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<OperationName> for String {
    fn from(name: OperationName) -> Self {
        name.0
    }
}

impl TryFrom<String> for OperationName {
    type Error = OperationNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for OperationName {
    type Error = OperationNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
