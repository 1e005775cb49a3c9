// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod identifier;
mod observability;
mod province;
mod secondary_validation;
mod stats;
mod verifier;

// This is the public API of the cedula core library
pub use checksum::{
    compute_check_digit, explain_check_digit, verify_identifier, ChecksumResult, ChecksumStep,
    VerifyResult, COEFFICIENTS,
};
pub use identifier::{
    validate_format, Cedula, CedulaFormatError, ValidationReason, ValidationResult, CEDULA_LENGTH,
};
pub use observability::labels::Labels;
pub use province::{lookup_province, Province, UNKNOWN_PROVINCE};
pub use secondary_validation::{EcuadorianCedulaChecksum, Validator};
pub use verifier::{
    config::VerifierConfig, error::VerifyError, CedulaVerifier, Verification,
};
