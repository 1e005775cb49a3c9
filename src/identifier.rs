use crate::checksum::{verify_identifier, VerifyResult};
use crate::province::Province;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const CEDULA_LENGTH: usize = 10;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum CedulaFormatError {
    #[error("La cédula debe tener {len} dígitos (se encontraron {found})", len = CEDULA_LENGTH)]
    WrongLength { found: usize },

    #[error("La cédula solo puede contener dígitos numéricos")]
    NonDigit,

    #[error("El código de provincia {code:02} no es válido (01-24 o 30)")]
    BadProvince { code: u8 },
}

/// Why a candidate identifier was rejected, or `None` when it is well formed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, strum::IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationReason {
    None,
    WrongLength,
    NonDigit,
    BadProvince,
}

impl From<&CedulaFormatError> for ValidationReason {
    fn from(err: &CedulaFormatError) -> Self {
        match err {
            CedulaFormatError::WrongLength { .. } => ValidationReason::WrongLength,
            CedulaFormatError::NonDigit => ValidationReason::NonDigit,
            CedulaFormatError::BadProvince { .. } => ValidationReason::BadProvince,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: ValidationReason,
}

/// Checks length, digits and province code, in that order.
pub fn validate_format(identifier: &str) -> ValidationResult {
    match check_format(identifier) {
        Ok(_) => ValidationResult {
            valid: true,
            reason: ValidationReason::None,
        },
        Err(err) => ValidationResult {
            valid: false,
            reason: ValidationReason::from(&err),
        },
    }
}

fn check_format(identifier: &str) -> Result<Province, CedulaFormatError> {
    let found = identifier.chars().count();
    if found != CEDULA_LENGTH {
        return Err(CedulaFormatError::WrongLength { found });
    }
    if !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CedulaFormatError::NonDigit);
    }

    // Only ASCII digits from here on, so byte indexing is safe.
    let bytes = identifier.as_bytes();
    let code = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    Province::from_code(code).ok_or(CedulaFormatError::BadProvince { code })
}

/// A well-formed Ecuadorian identifier. The check digit itself is not
/// guaranteed to be correct, see [Cedula::verify].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cedula {
    value: String,
    province: Province,
}

impl Cedula {
    pub fn parse(identifier: &str) -> Result<Self, CedulaFormatError> {
        let province = check_format(identifier)?;
        Ok(Cedula {
            value: identifier.to_owned(),
            province,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn province(&self) -> Province {
        self.province
    }

    pub fn first_nine(&self) -> &str {
        &self.value[..CEDULA_LENGTH - 1]
    }

    /// The tenth digit as written.
    pub fn check_digit(&self) -> u32 {
        u32::from(self.value.as_bytes()[CEDULA_LENGTH - 1] - b'0')
    }

    pub fn verify(&self) -> VerifyResult {
        verify_identifier(&self.value)
    }
}

impl FromStr for Cedula {
    type Err = CedulaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cedula::parse(s)
    }
}

impl fmt::Display for Cedula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for Cedula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
