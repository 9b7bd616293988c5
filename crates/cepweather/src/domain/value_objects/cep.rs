//! Cep - Brazilian postal code
//!
//! `Cep::parse` is the one validation contract for both services:
//! exactly 8 ASCII digits, no separators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a CEP
pub const CEP_LENGTH: usize = 8;

/// Why a string was rejected as a CEP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CepError {
    #[error("expected 8 digits, got {len} bytes")]
    InvalidLength { len: usize },

    #[error("non-digit character at position {position}")]
    NonDigit { position: usize },
}

/// A validated postal code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    /// Validate `input` and wrap it.
    ///
    /// Length is checked in bytes, so multi-byte digits from other scripts
    /// never pass.
    pub fn parse(input: &str) -> Result<Self, CepError> {
        if input.len() != CEP_LENGTH {
            return Err(CepError::InvalidLength { len: input.len() });
        }

        if let Some(position) = input.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(CepError::NonDigit { position });
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cep {
    type Error = CepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.0
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_eight_digits() {
        let cep = Cep::parse("01001000").unwrap();
        assert_eq!(cep.as_str(), "01001000");
        assert_eq!(cep.to_string(), "01001000");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(Cep::parse(""), Err(CepError::InvalidLength { len: 0 }));
        assert_eq!(Cep::parse("0100100"), Err(CepError::InvalidLength { len: 7 }));
        assert_eq!(Cep::parse("010010000"), Err(CepError::InvalidLength { len: 9 }));
    }

    #[test]
    fn test_rejects_separators_and_letters() {
        assert_eq!(Cep::parse("01001-00"), Err(CepError::NonDigit { position: 5 }));
        assert_eq!(Cep::parse("abcdefgh"), Err(CepError::NonDigit { position: 0 }));
        assert_eq!(Cep::parse(" 1001000"), Err(CepError::NonDigit { position: 0 }));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits: 8 chars, 16 bytes
        assert!(matches!(
            Cep::parse("٠١٠٠١٠٠٠"),
            Err(CepError::InvalidLength { len: 16 })
        ));
    }

    #[test]
    fn test_serde_validates() {
        let cep: Cep = serde_json::from_str("\"22041001\"").unwrap();
        assert_eq!(cep.as_str(), "22041001");
        assert_eq!(serde_json::to_string(&cep).unwrap(), "\"22041001\"");

        assert!(serde_json::from_str::<Cep>("\"2204100\"").is_err());
    }
}
