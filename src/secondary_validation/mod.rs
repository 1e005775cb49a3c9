mod ecuadorian_cedula_checksum;

pub use crate::secondary_validation::ecuadorian_cedula_checksum::EcuadorianCedulaChecksum;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}
