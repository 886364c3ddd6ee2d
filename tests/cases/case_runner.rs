use super::case_loader::{CaseFailure, CaseResult, TestCase, load_cases};
/// Case runner
///
/// Checks every expectation in the case file against `parse_url` and
/// `decode_query`, collecting all mismatches before reporting.
use urlsplit::{decode_query, parse_url};

fn check(
    failures: &mut Vec<CaseFailure>,
    test_num: usize,
    input: &str,
    field: &'static str,
    expected: Option<&String>,
    actual: &str,
) -> bool {
    match expected {
        Some(expected) if expected != actual => {
            failures.push(CaseFailure {
                test_num,
                input: input.to_string(),
                field,
                expected: expected.clone(),
                actual: actual.to_string(),
            });
            false
        }
        _ => true,
    }
}

pub fn run_cases(tests: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            scheme,
            host,
            port,
            path,
            raw_query,
            fragment,
            query,
            href,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let url = parse_url(&input);
        let failures = &mut result.failures;
        let checks = [
            check(failures, test_num, &input, "scheme", scheme.as_ref(), url.scheme()),
            check(failures, test_num, &input, "host", host.as_ref(), url.host()),
            check(failures, test_num, &input, "port", port.as_ref(), url.port()),
            check(failures, test_num, &input, "path", path.as_ref(), url.path()),
            check(failures, test_num, &input, "raw_query", raw_query.as_ref(), url.raw_query()),
            check(failures, test_num, &input, "fragment", fragment.as_ref(), url.fragment()),
            check(failures, test_num, &input, "href", href.as_ref(), &url.to_string()),
        ];
        let mut test_passed = checks.iter().all(|&ok| ok);

        if let Some(expected) = query {
            let actual = decode_query(url.raw_query());
            if actual != expected {
                failures.push(CaseFailure {
                    test_num,
                    input: input.clone(),
                    field: "query",
                    expected: format!("{expected:?}"),
                    actual: format!("{actual:?}"),
                });
                test_passed = false;
            }
        }

        if test_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_url_cases() {
    let result = run_cases(load_cases());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?}: {} expected {:?}, got {:?}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert!(result.passed > 0, "no cases were loaded");
    assert_eq!(result.failed, 0, "{}", result.summary());
}
