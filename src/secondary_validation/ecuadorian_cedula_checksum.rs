use crate::checksum::verify_identifier;
use crate::identifier::{validate_format, CEDULA_LENGTH};
use crate::secondary_validation::Validator;

/// Accepts a cédula written either as ten digits or with separators, such as
/// `171317612-9` or `17 1317612 9`.
pub struct EcuadorianCedulaChecksum;

const SEPARATORS: &[char] = &['-', ' ', '.'];

impl Validator for EcuadorianCedulaChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let mut digits = String::with_capacity(CEDULA_LENGTH);
        for c in regex_match.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if !SEPARATORS.contains(&c) {
                return false;
            }
        }

        validate_format(&digits).valid && verify_identifier(&digits).matches
    }
}
