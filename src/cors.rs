use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::path_pattern::PathPattern;
use crate::policy::{CorsPolicy, ValidationError};
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
use tracing::{debug, trace, warn};

/// Core CORS policy engine that evaluates requests against a validated [`CorsPolicy`].
#[derive(Debug)]
pub struct Cors {
    policy: CorsPolicy,
    path_pattern: PathPattern,
}

impl Cors {
    pub fn new(policy: CorsPolicy) -> Result<Self, ValidationError> {
        let path_pattern = policy.validate()?;

        if policy.allow_credentials && policy.allowed_headers.is_any() {
            warn!(
                "wildcard allowed headers combined with credentials; preflights will echo the requested header list instead of '*'"
            );
        }

        Ok(Self {
            policy,
            path_pattern,
        })
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn path_pattern(&self) -> &PathPattern {
        &self.path_pattern
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.path_pattern.matches(request.path) {
            trace!(path = request.path, "path outside CORS pattern");
            return CorsDecision::NotApplicable;
        }

        let Some(origin) = request.origin.filter(|origin| !origin.is_empty()) else {
            return CorsDecision::NotApplicable;
        };

        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            self.process_preflight(request, origin)
        } else {
            self.process_simple(request, origin)
        }
    }

    fn process_preflight(&self, request: &RequestContext<'_>, origin: &str) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = builder.build_vary_header();

        let decision = self.policy.allowed_origins.resolve(origin);
        if decision == OriginDecision::Disallow {
            return Self::reject_preflight(
                request,
                origin,
                headers,
                PreflightRejectionReason::OriginNotAllowed,
            );
        }

        let requested_method = request
            .access_control_request_method
            .map(str::trim)
            .filter(|value| !value.is_empty());
        if let Some(requested_method) = requested_method
            && !self.policy.allowed_methods.allows_method(requested_method)
        {
            return Self::reject_preflight(
                request,
                origin,
                headers,
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            );
        }

        if let Some(requested_headers) = request.access_control_request_headers
            && !self.policy.allowed_headers.allows_headers(requested_headers)
        {
            return Self::reject_preflight(
                request,
                origin,
                headers,
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: requested_headers.trim().to_string(),
                },
            );
        }

        headers.extend(builder.build_origin_header(origin, &decision));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers(request.access_control_request_headers));
        headers.extend(builder.build_max_age_header());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
        }
    }

    fn process_simple(&self, request: &RequestContext<'_>, origin: &str) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = builder.build_vary_header();

        let decision = self.policy.allowed_origins.resolve(origin);
        if decision == OriginDecision::Disallow {
            return Self::reject_simple(
                request,
                origin,
                headers,
                SimpleRejectionReason::OriginNotAllowed,
            );
        }

        headers.extend(builder.build_origin_header(origin, &decision));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn reject_preflight(
        request: &RequestContext<'_>,
        origin: &str,
        headers: HeaderCollection,
        reason: PreflightRejectionReason,
    ) -> CorsDecision {
        debug!(origin, path = request.path, ?reason, "CORS preflight rejected");
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }

    fn reject_simple(
        request: &RequestContext<'_>,
        origin: &str,
        headers: HeaderCollection,
        reason: SimpleRejectionReason,
    ) -> CorsDecision {
        debug!(
            origin,
            method = request.method,
            path = request.path,
            ?reason,
            "cross-origin request left without CORS headers"
        );
        CorsDecision::SimpleRejected(SimpleRejection {
            headers: headers.into_headers(),
            reason,
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
