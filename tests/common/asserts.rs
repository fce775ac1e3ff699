use filescout_cors::{
    CorsDecision, Headers, PreflightRejection, SimpleRejection, constants::header,
};

use super::headers::{header_value, vary_values};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected accepted simple decision, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> SimpleRejection {
    match decision {
        CorsDecision::SimpleRejected(rejection) => rejection,
        other => panic!("expected rejected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightAccepted { headers } => headers,
        other => panic!("expected accepted preflight decision, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> PreflightRejection {
    match decision {
        CorsDecision::PreflightRejected(rejection) => rejection,
        other => panic!("expected rejected preflight decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "header {name} mismatch"
    );
}

pub fn assert_no_allow_headers(headers: &Headers) {
    let offending: Vec<_> = headers
        .keys()
        .filter(|name| {
            name.to_ascii_lowercase()
                .starts_with("access-control-allow-")
        })
        .collect();
    assert!(
        offending.is_empty(),
        "unexpected allow headers: {offending:?}"
    );
}

pub fn assert_vary_contains(headers: &Headers, value: &str) {
    assert!(
        vary_values(headers)
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(value)),
        "Vary should contain {value}"
    );
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        header_value(headers, header::VARY).is_none(),
        "Vary should be absent"
    );
}
