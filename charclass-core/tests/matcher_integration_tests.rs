// charclass-core/tests/matcher_integration_tests.rs
use charclass_core::{alpha, is_alpha, is_alphadash, is_alphanumeric, is_digits, is_numeric, CharClassError};

const ALLOW: bool = true;
const DISALLOW: bool = false;

type Matcher = fn(&str, bool) -> Result<bool, CharClassError>;

fn check(cases: &[(&str, Matcher, &str, bool, bool)]) {
    for (label, matcher, subject, allow_whitespace, expected) in cases {
        let result = matcher(subject, *allow_whitespace).unwrap();
        assert_eq!(result, *expected, "{label}: {subject:?}");
    }
}

#[test_log::test]
fn alpha_matches() {
    check(&[
        ("match alpha", is_alpha, "AbČdë", DISALLOW, true),
        ("match alpha allow whitespace", is_alpha, "AbČd ë", ALLOW, true),
        ("match alpha disallow whitespace", is_alpha, "AbČd ë", DISALLOW, false),
        ("match non alpha", is_alpha, "AbČdë2.", DISALLOW, false),
    ]);
}

#[test_log::test]
fn alphadash_matches() {
    check(&[
        ("match alphadash", is_alphadash, "AbČdë2_-", DISALLOW, true),
        ("match alphadash allow whitespace", is_alphadash, "AbČd ë2_-", ALLOW, true),
        ("match alphadash disallow whitespace", is_alphadash, "AbČd ë2_-", DISALLOW, false),
        ("match non alphadash", is_alphadash, "AbČdë2_-!", DISALLOW, false),
    ]);
}

#[test]
fn alphanumeric_matches() {
    check(&[
        ("match alphanumeric", is_alphanumeric, "AbČdë2", DISALLOW, true),
        ("match alphanumeric allow whitespace", is_alphanumeric, "AbČdë 2", ALLOW, true),
        ("match alphanumeric disallow whitespace", is_alphanumeric, "AbČdë 2", DISALLOW, false),
        ("match non alphanumeric", is_alphanumeric, "AbČdë2-", DISALLOW, false),
    ]);
}

#[test]
fn digits_matches() {
    check(&[
        ("match digits", is_digits, "12345", DISALLOW, true),
        ("match digits allow whitespace", is_digits, "1234 5", ALLOW, true),
        ("match digits disallow whitespace", is_digits, "1234 5", DISALLOW, false),
        ("match non digits", is_digits, "12345A", DISALLOW, false),
    ]);
}

#[test]
fn numeric_matches() {
    check(&[
        ("match numeric", is_numeric, "-11.3456", DISALLOW, true),
        ("match non numeric", is_numeric, "10^4", DISALLOW, false),
        ("match numeric allow whitespace", is_numeric, "-1 .5", ALLOW, true),
        ("match numeric disallow whitespace", is_numeric, "-1 .5", DISALLOW, false),
    ]);
}

#[test]
fn empty_subjects_never_match() {
    let matchers: [Matcher; 5] = [is_alpha, is_alphadash, is_alphanumeric, is_digits, is_numeric];
    for matcher in matchers {
        assert!(!matcher("", ALLOW).unwrap());
        assert!(!matcher("", DISALLOW).unwrap());
    }
}

#[test]
fn whitespace_alone_matches_only_when_allowed() {
    assert!(is_alpha(" \t", ALLOW).unwrap());
    assert!(!is_alpha(" \t", DISALLOW).unwrap());
}

#[test]
fn filtered_alpha_always_matches() {
    for subject in ["Hello, World!", "¿Qué tal?", "x1y2z3", "ß—Ω"] {
        let filtered = alpha(subject, "").unwrap();
        assert!(!filtered.is_empty());
        assert!(is_alpha(&filtered, DISALLOW).unwrap(), "{filtered:?}");
    }
}

#[test]
fn matchers_are_safe_across_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let subject = format!("thread{i}");
                    (is_alphanumeric(&subject, DISALLOW).unwrap(), is_alpha(&subject, DISALLOW).unwrap())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (true, false));
        }
    });
}
