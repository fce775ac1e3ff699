mod common;

use common::asserts::{
    assert_header_eq, assert_no_allow_headers, assert_simple, assert_simple_rejected,
    assert_vary_contains, assert_vary_is_empty,
};
use common::builders::{
    EVIL_ORIGIN, LOCAL_ORIGIN, NETLIFY_ORIGIN, PRODUCTION_ORIGIN, cors, filescout_cors,
    simple_request,
};
use common::headers::has_header;
use filescout_cors::constants::{header, method};
use filescout_cors::{AllowedOrigins, CorsDecision, SimpleRejectionReason};

mod check {
    use super::*;

    #[test]
    fn should_echo_each_configured_origin_with_credentials() {
        let cors = filescout_cors();

        for origin in [LOCAL_ORIGIN, NETLIFY_ORIGIN, PRODUCTION_ORIGIN] {
            let headers = assert_simple(simple_request().origin(origin).check(&cors));

            assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            assert_vary_contains(&headers, header::ORIGIN);
        }
    }

    #[test]
    fn should_return_not_applicable_when_simple_request_without_origin_then_skip() {
        let cors = filescout_cors();

        let decision = simple_request().check(&cors);

        assert!(matches!(decision, CorsDecision::NotApplicable));
    }

    #[test]
    fn should_reject_unknown_origin_without_allow_headers() {
        let cors = filescout_cors();

        let rejection = assert_simple_rejected(simple_request().origin(EVIL_ORIGIN).check(&cors));

        assert_eq!(rejection.reason, SimpleRejectionReason::OriginNotAllowed);
        assert_no_allow_headers(&rejection.headers);
        assert_vary_contains(&rejection.headers, header::ORIGIN);
    }

    #[test]
    fn should_reject_origin_that_only_differs_in_case() {
        let cors = filescout_cors();

        let rejection = assert_simple_rejected(
            simple_request()
                .origin("HTTP://LOCALHOST:3001")
                .check(&cors),
        );

        assert_no_allow_headers(&rejection.headers);
    }

    #[test]
    fn should_echo_listed_origin_for_methods_outside_preflight_list() {
        let cors = filescout_cors();

        for request_method in [method::HEAD, method::PATCH] {
            let headers = assert_simple(
                simple_request()
                    .method(request_method)
                    .path("/api/files")
                    .origin(LOCAL_ORIGIN)
                    .check(&cors),
            );

            assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, LOCAL_ORIGIN);
            assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    #[test]
    fn should_allow_any_origin_with_wildcard_when_credentials_disabled() {
        let cors = cors().origins(AllowedOrigins::any()).build();

        let headers = assert_simple(simple_request().origin("https://example.com").check(&cors));

        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
        assert_vary_is_empty(&headers);
    }

    #[test]
    fn should_emit_expose_headers_when_configured() {
        let cors = cors()
            .origins(AllowedOrigins::list([LOCAL_ORIGIN]))
            .exposed_headers(["Content-Disposition", "X-Word-Count"])
            .build();

        let headers = assert_simple(simple_request().origin(LOCAL_ORIGIN).check(&cors));

        assert_header_eq(
            &headers,
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            "Content-Disposition, X-Word-Count",
        );
    }

    #[test]
    fn should_omit_preflight_only_headers() {
        let cors = filescout_cors();

        let headers = assert_simple(
            simple_request()
                .method(method::POST)
                .origin(LOCAL_ORIGIN)
                .check(&cors),
        );

        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_METHODS));
        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS));
        assert!(!has_header(&headers, header::ACCESS_CONTROL_MAX_AGE));
    }

    #[test]
    fn should_skip_paths_outside_pattern() {
        let cors = cors()
            .path_pattern("/api/**")
            .origins(AllowedOrigins::list([LOCAL_ORIGIN]))
            .build();

        let inside = simple_request()
            .path("/api/files")
            .origin(LOCAL_ORIGIN)
            .check(&cors);
        let outside = simple_request()
            .path("/health")
            .origin(LOCAL_ORIGIN)
            .check(&cors);

        assert!(matches!(inside, CorsDecision::SimpleAccepted { .. }));
        assert!(matches!(outside, CorsDecision::NotApplicable));
    }
}
