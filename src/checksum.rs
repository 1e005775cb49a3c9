use serde::Serialize;
use std::fmt;

/// Coefficient per position: 2 on odd positions, 1 on even ones (1-indexed).
pub const COEFFICIENTS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumStep {
    /// 1-indexed position in the identifier.
    pub position: usize,
    pub digit: u32,
    pub coefficient: u32,
    /// `digit * coefficient` before the fold-back.
    pub raw_product: u32,
    pub product: u32,
}

impl ChecksumStep {
    fn new(position: usize, digit: u32) -> Self {
        let coefficient = COEFFICIENTS[position - 1];
        let raw_product = digit * coefficient;
        ChecksumStep {
            position,
            digit,
            coefficient,
            raw_product,
            product: fold_back(raw_product),
        }
    }

    pub fn is_folded(&self) -> bool {
        self.raw_product > 9
    }
}

impl fmt::Display for ChecksumStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paso {}: Dígito {} × Coeficiente {} = {}",
            self.position, self.digit, self.coefficient, self.raw_product
        )?;
        if self.is_folded() {
            write!(
                f,
                " → {} > 9, restamos 9 = {}",
                self.raw_product, self.product
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecksumResult {
    pub steps: [ChecksumStep; 9],
    pub sum_total: u32,
    pub residue: u32,
    pub check_digit: u32,
}

impl ChecksumResult {
    /// Human readable walkthrough of the computation, one line per step.
    pub fn explanation(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.steps.iter().map(ToString::to_string).collect();
        lines.push(format!("Suma total: {}", self.sum_total));
        lines.push(format!(
            "Residuo: {} % 10 = {}",
            self.sum_total, self.residue
        ));
        if self.residue == 0 {
            lines.push("Dígito Verificador: 0 (porque el residuo es 0)".to_string());
        } else {
            lines.push(format!(
                "Dígito Verificador: 10 - {} = {}",
                self.residue, self.check_digit
            ));
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerifyResult {
    pub computed_digit: u32,
    pub actual_digit: u32,
    pub matches: bool,
}

impl VerifyResult {
    pub(crate) fn compare(computed_digit: u32, actual_digit: u32) -> Self {
        VerifyResult {
            computed_digit,
            actual_digit,
            matches: computed_digit == actual_digit,
        }
    }
}

/// Products above 9 lose 9. Single digit times 1 or 2 never exceeds 18.
#[inline]
fn fold_back(product: u32) -> u32 {
    if product > 9 {
        product - 9
    } else {
        product
    }
}

fn explain_chars(chars: impl Iterator<Item = char>) -> ChecksumResult {
    // The caller guarantees nine digits. Anything else is not checked here.
    let mut digits = [0u32; 9];
    for (slot, c) in digits.iter_mut().zip(chars) {
        *slot = c.to_digit(10).unwrap_or(0);
    }

    let steps: [ChecksumStep; 9] = std::array::from_fn(|i| ChecksumStep::new(i + 1, digits[i]));
    let sum_total = steps.iter().map(|step| step.product).sum::<u32>();
    let residue = sum_total % 10;
    let check_digit = if residue == 0 { 0 } else { 10 - residue };

    ChecksumResult {
        steps,
        sum_total,
        residue,
        check_digit,
    }
}

/// Full trace of the check digit computation over the first nine digits.
pub fn explain_check_digit(first_nine_digits: &str) -> ChecksumResult {
    explain_chars(first_nine_digits.chars())
}

/// Expected tenth digit for `first_nine_digits`, which must be nine ASCII
/// digits (see [crate::validate_format]).
pub fn compute_check_digit(first_nine_digits: &str) -> u32 {
    explain_check_digit(first_nine_digits).check_digit
}

/// Compares the computed check digit of an already validated identifier with
/// its tenth digit.
pub fn verify_identifier(identifier: &str) -> VerifyResult {
    let mut chars = identifier.chars();
    let computed = explain_chars(chars.by_ref().take(9)).check_digit;
    let actual = chars.next().and_then(|c| c.to_digit(10)).unwrap_or(0);
    VerifyResult::compare(computed, actual)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn worked_example() {
        let result = explain_check_digit("171317612");
        let products: Vec<u32> = result.steps.iter().map(|s| s.product).collect();
        assert_eq!(products, vec![2, 7, 2, 3, 2, 7, 3, 1, 4]);
        assert_eq!(result.sum_total, 31);
        assert_eq!(result.residue, 1);
        assert_eq!(result.check_digit, 9);
        assert_eq!(compute_check_digit("171317612"), 9);
    }

    #[test]
    fn steps_record_positions_and_coefficients() {
        let result = explain_check_digit("171317612");
        for (idx, step) in result.steps.iter().enumerate() {
            assert_eq!(step.position, idx + 1);
            assert_eq!(step.coefficient, if idx % 2 == 0 { 2 } else { 1 });
        }
        let seventh = result.steps[6];
        assert_eq!(seventh.digit, 6);
        assert_eq!(seventh.raw_product, 12);
        assert_eq!(seventh.product, 3);
        assert!(seventh.is_folded());
        assert!(!result.steps[0].is_folded());
    }

    #[test]
    fn zero_residue_gives_zero() {
        // 2+0+0+0+0+0+0+0+8 = 10
        let result = explain_check_digit("100000004");
        assert_eq!(result.sum_total, 10);
        assert_eq!(result.residue, 0);
        assert_eq!(result.check_digit, 0);
        assert_eq!(compute_check_digit("000000000"), 0);
    }

    #[test]
    fn fold_back_subtracts_nine() {
        // every odd position doubles 9 into 18 -> 9
        let result = explain_check_digit("909090909");
        assert!(result.steps.iter().step_by(2).all(|s| s.product == 9));
        assert_eq!(result.sum_total, 45);
        assert_eq!(result.check_digit, 5);
    }

    #[test]
    fn check_digit_is_always_a_digit() {
        for n in (0..1_000_000_000u32).step_by(7_919_993) {
            let input = format!("{n:09}");
            let first = compute_check_digit(&input);
            assert!(first <= 9, "input {input}");
            assert_eq!(first, compute_check_digit(&input));
        }
    }

    #[test]
    fn test_verify_identifier() {
        assert_eq!(
            verify_identifier("1713176129"),
            VerifyResult {
                computed_digit: 9,
                actual_digit: 9,
                matches: true
            }
        );
        assert_eq!(
            verify_identifier("1713176123"),
            VerifyResult {
                computed_digit: 9,
                actual_digit: 3,
                matches: false
            }
        );
    }

    #[test]
    fn test_valid_cedulas() {
        let valid_ids = vec!["1710034065", "0102030400", "0926687856", "1713176129"];
        for id in valid_ids {
            assert!(verify_identifier(id).matches, "input {id}");
        }
    }

    #[test]
    fn out_of_contract_input_does_not_panic() {
        assert_eq!(compute_check_digit(""), 0);
        let _ = verify_identifier("ñ");
        let _ = compute_check_digit("17131761ñABC");
    }

    #[test]
    fn explanation_lines() {
        let lines = explain_check_digit("171317612").explanation();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Paso 1: Dígito 1 × Coeficiente 2 = 2");
        assert_eq!(
            lines[6],
            "Paso 7: Dígito 6 × Coeficiente 2 = 12 → 12 > 9, restamos 9 = 3"
        );
        assert_eq!(lines[9], "Suma total: 31");
        assert_eq!(lines[10], "Residuo: 31 % 10 = 1");
        assert_eq!(lines[11], "Dígito Verificador: 10 - 1 = 9");

        let lines = explain_check_digit("000000000").explanation();
        assert_eq!(lines[11], "Dígito Verificador: 0 (porque el residuo es 0)");
    }
}
