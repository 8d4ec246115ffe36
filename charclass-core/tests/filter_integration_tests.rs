// charclass-core/tests/filter_integration_tests.rs
use charclass_core::{alpha, alphadash, alphanumeric, digits, numeric, is_alpha, is_alphadash, is_alphanumeric, is_digits, CharClassError};

const SAMPLE: &str = "AbČdë 12345 .-_!*{}";

const CORPUS: &[&str] = &[
    SAMPLE,
    "",
    "   ",
    "naïve café, déjà vu!",
    "Ünïcödé ١٢٣ ⅷ",
    "e\u{301}tude",
    "tab\tnew\nline",
    "user_name-01.example",
    "10^4 + -3.25 = ?",
    "日本語のテキスト123",
];

#[test]
fn replacements_on_the_reference_sample() -> Result<(), CharClassError> {
    assert_eq!(alpha(SAMPLE, "")?, "AbČdë");
    assert_eq!(alphanumeric(SAMPLE, "")?, "AbČdë12345");
    assert_eq!(alphadash(SAMPLE, "")?, "AbČdë12345.-_");
    assert_eq!(digits(SAMPLE, "")?, "12345");
    assert_eq!(numeric(SAMPLE, "")?, "12345.-*");
    Ok(())
}

#[test]
fn replacement_text_is_inserted_per_run() -> Result<(), CharClassError> {
    assert_eq!(alpha("ab12cd34", "#")?, "ab#cd#");
    assert_eq!(digits("a1b22c", " ")?, " 1 22 ");
    Ok(())
}

#[test]
fn filtered_output_only_contains_class_members() -> Result<(), CharClassError> {
    for subject in CORPUS {
        let a = alpha(subject, "")?;
        assert!(a.is_empty() || is_alpha(&a, false)?, "alpha({subject:?}) = {a:?}");

        let an = alphanumeric(subject, "")?;
        assert!(an.is_empty() || is_alphanumeric(&an, false)?, "alphanumeric({subject:?}) = {an:?}");

        let ad = alphadash(subject, "")?;
        assert!(ad.is_empty() || is_alphadash(&ad, false)?, "alphadash({subject:?}) = {ad:?}");

        let d = digits(subject, "")?;
        assert!(d.chars().all(|c| c.is_ascii_digit()), "digits({subject:?}) = {d:?}");
        assert!(d.is_empty() || is_digits(&d, false)?);
    }
    Ok(())
}

#[test]
fn class_filters_are_idempotent() -> Result<(), CharClassError> {
    for subject in CORPUS {
        let once = alpha(subject, "")?;
        assert_eq!(alpha(&once, "")?, once);

        let once = alphanumeric(subject, "")?;
        assert_eq!(alphanumeric(&once, "")?, once);

        let once = alphadash(subject, "")?;
        assert_eq!(alphadash(&once, "")?, once);

        let once = digits(subject, "")?;
        assert_eq!(digits(&once, "")?, once);

        let once = numeric(subject, "")?;
        assert_eq!(numeric(&once, "")?, once);
    }
    Ok(())
}

#[test]
fn unicode_letters_marks_and_numbers_survive() -> Result<(), CharClassError> {
    // Combining acute accent is a mark and stays with its base letter.
    assert_eq!(alpha("e\u{301}tude!", "")?, "e\u{301}tude");
    // Arabic-Indic digits and Roman numerals are numbers, not ASCII digits.
    assert_eq!(alphanumeric("١٢٣ ⅷ", "")?, "١٢٣ⅷ");
    assert_eq!(digits("١٢٣ 45", "")?, "45");
    Ok(())
}
