use crate::checksum::{explain_check_digit, ChecksumResult, VerifyResult};
use crate::identifier::{Cedula, ValidationReason};
use crate::province::Province;
use crate::stats::GLOBAL_STATS;
use serde::Serialize;

pub mod config;
pub mod error;
pub mod metrics;

use self::config::VerifierConfig;
use self::error::VerifyError;
use self::metrics::VerifierMetrics;

/// Outcome of a successful format check: the check digit may still be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub cedula: Cedula,
    pub province: Province,
    pub checksum: ChecksumResult,
    pub result: VerifyResult,
}

impl Verification {
    pub fn is_correct(&self) -> bool {
        self.result.matches
    }

    /// The first nine digits followed by the computed check digit, e.g. `171317612-9`.
    pub fn corrected(&self) -> String {
        format!(
            "{}-{}",
            self.cedula.first_nine(),
            self.checksum.check_digit
        )
    }

    pub fn province_name(&self) -> &'static str {
        self.province.name()
    }

    pub fn explanation(&self) -> Vec<String> {
        self.checksum.explanation()
    }
}

pub struct CedulaVerifier {
    config: VerifierConfig,
    metrics: VerifierMetrics,
}

impl CedulaVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        GLOBAL_STATS.verifier_creations.increment(1);
        let metrics = VerifierMetrics::new(&config.labels);
        CedulaVerifier { config, metrics }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn verify(&self, input: &str) -> Result<Verification, VerifyError> {
        self.metrics.verifications.increment(1);

        let candidate = if self.config.trim_whitespace {
            input.trim()
        } else {
            input
        };
        if candidate.is_empty() {
            self.metrics.empty_input.increment(1);
            return Err(VerifyError::Empty);
        }

        let cedula = match Cedula::parse(candidate) {
            Ok(cedula) => cedula,
            Err(err) => {
                self.metrics
                    .record_invalid_format(ValidationReason::from(&err));
                return Err(err.into());
            }
        };

        let checksum = explain_check_digit(cedula.first_nine());
        let result = VerifyResult::compare(checksum.check_digit, cedula.check_digit());
        self.metrics.record_check_digit(result.matches);

        Ok(Verification {
            province: cedula.province(),
            cedula,
            checksum,
            result,
        })
    }
}

impl Default for CedulaVerifier {
    fn default() -> Self {
        CedulaVerifier::new(VerifierConfig::default())
    }
}
