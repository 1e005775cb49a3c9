use crate::identifier::ValidationReason;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const REASON: &str = "reason";
const STATUS: &str = "status";
pub(crate) const EMPTY_REASON: &str = "empty";

pub struct VerifierMetrics {
    pub verifications: Counter,
    pub empty_input: Counter,
    pub wrong_length: Counter,
    pub non_digit: Counter,
    pub bad_province: Counter,
    pub correct: Counter,
    pub incorrect: Counter,
}

impl VerifierMetrics {
    pub fn new(labels: &Labels) -> Self {
        let invalid_format = |reason: &'static str| {
            counter!(
                "cedula.invalid_format",
                labels.clone_with_labels(&[(REASON, reason)])
            )
        };
        let check_digit = |status: &'static str| {
            counter!(
                "cedula.check_digit",
                labels.clone_with_labels(&[(STATUS, status)])
            )
        };

        VerifierMetrics {
            verifications: counter!("cedula.verifications", labels.clone()),
            empty_input: invalid_format(EMPTY_REASON),
            wrong_length: invalid_format(ValidationReason::WrongLength.into()),
            non_digit: invalid_format(ValidationReason::NonDigit.into()),
            bad_province: invalid_format(ValidationReason::BadProvince.into()),
            correct: check_digit("correct"),
            incorrect: check_digit("incorrect"),
        }
    }

    pub fn record_invalid_format(&self, reason: ValidationReason) {
        match reason {
            ValidationReason::WrongLength => self.wrong_length.increment(1),
            ValidationReason::NonDigit => self.non_digit.increment(1),
            ValidationReason::BadProvince => self.bad_province.increment(1),
            ValidationReason::None => {}
        }
    }

    pub fn record_check_digit(&self, matches: bool) {
        if matches {
            self.correct.increment(1);
        } else {
            self.incorrect.increment(1);
        }
    }
}

impl Default for VerifierMetrics {
    fn default() -> Self {
        VerifierMetrics::new(&Labels::empty())
    }
}
