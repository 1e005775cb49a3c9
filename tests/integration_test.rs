use cedula_ec::{
    compute_check_digit, lookup_province, validate_format, verify_identifier, Cedula,
    CedulaVerifier, EcuadorianCedulaChecksum, Province, ValidationReason, Validator,
    VerifierConfig, VerifyError,
};

#[test]
fn test_format_taxonomy() {
    assert_eq!(validate_format("12345").reason, ValidationReason::WrongLength);
    assert_eq!(
        validate_format("12345A7890").reason,
        ValidationReason::NonDigit
    );
    assert_eq!(
        validate_format("2512345678").reason,
        ValidationReason::BadProvince
    );
    assert!(validate_format("1713176129").valid);
}

#[test]
fn test_check_digit_flow() {
    let input = "1713176129";
    assert!(validate_format(input).valid);
    assert_eq!(compute_check_digit(&input[..9]), 9);

    let result = verify_identifier(input);
    assert_eq!(result.computed_digit, 9);
    assert_eq!(result.actual_digit, 9);
    assert!(result.matches);
    assert_eq!(lookup_province(&input[..2]), "Pichincha");
}

#[test]
fn test_every_province_with_its_own_check_digit() {
    for code in (1..=24).chain(std::iter::once(30)) {
        let first_nine = format!("{code:02}4567891");
        let id = format!("{first_nine}{}", compute_check_digit(&first_nine));
        assert!(validate_format(&id).valid, "input {id}");
        assert!(verify_identifier(&id).matches, "input {id}");
        assert!(EcuadorianCedulaChecksum.is_valid_match(&id), "input {id}");

        let cedula = Cedula::parse(&id).unwrap();
        assert_eq!(cedula.province().code(), code);
    }
}

#[test]
fn test_single_digit_typos_are_detected() {
    let valid = "1713176129";
    for pos in 0..10 {
        for replacement in '0'..='9' {
            let mut typo: Vec<char> = valid.chars().collect();
            if typo[pos] == replacement {
                continue;
            }
            typo[pos] = replacement;
            let typo: String = typo.into_iter().collect();
            if validate_format(&typo).valid {
                assert!(!verify_identifier(&typo).matches, "input {typo}");
            }
        }
    }
}

#[test]
fn test_verifier_end_to_end() {
    let verifier = CedulaVerifier::new(VerifierConfig::new());

    let verification = verifier.verify(" 0926687856 ").unwrap();
    assert!(verification.is_correct());
    assert_eq!(verification.province, Province::Guayas);
    assert_eq!(verification.corrected(), "092668785-6");

    let verification = verifier.verify("1713176123").unwrap();
    assert!(!verification.is_correct());
    assert_eq!(verification.result.computed_digit, 9);
    assert_eq!(verification.result.actual_digit, 3);

    assert_eq!(verifier.verify(""), Err(VerifyError::Empty));
    assert!(matches!(
        verifier.verify("3112345678"),
        Err(VerifyError::InvalidFormat(_))
    ));
}

#[test]
fn test_verification_serializes() {
    let verification = CedulaVerifier::default().verify("1713176129").unwrap();
    let json = serde_json::to_value(&verification).unwrap();
    assert_eq!(json["cedula"], "1713176129");
    assert_eq!(json["province"], "Pichincha");
    assert_eq!(json["result"]["matches"], true);
    assert_eq!(json["checksum"]["sum_total"], 31);
    assert_eq!(json["checksum"]["steps"][6]["product"], 3);
}
