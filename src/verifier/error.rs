use crate::identifier::CedulaFormatError;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum VerifyError {
    #[error("Por favor ingresa una cédula para calcular")]
    Empty,

    #[error("La cédula ingresada no tiene un formato válido: {0}")]
    InvalidFormat(#[from] CedulaFormatError),
}
