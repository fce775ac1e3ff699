use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{WILDCARD, header};
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::policy::CorsPolicy;
use crate::util::split_header_list;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_vary_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.policy.allowed_origins.vary_on_origin() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    /// Only call with an allowing decision.
    pub(crate) fn build_origin_header(
        &self,
        request_origin: &str,
        decision: &OriginDecision,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        match decision {
            OriginDecision::Any if !self.policy.allow_credentials => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
            }
            OriginDecision::Any | OriginDecision::Mirror => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, request_origin);
            }
            OriginDecision::Disallow => {}
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.policy.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    /// With any method allowed under credentials only the requested method can be
    /// echoed, so a preflight that names none gets no `Access-Control-Allow-Methods`.
    /// Browsers always send `Access-Control-Request-Method` on a real preflight.
    pub(crate) fn build_methods_header(&self, requested_method: Option<&str>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        match &self.policy.allowed_methods {
            AllowedMethods::Any if !self.policy.allow_credentials => {
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, WILDCARD);
            }
            AllowedMethods::Any => {
                // Browsers read `*` literally on credentialed requests.
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
                if let Some(method) = requested_method.map(str::trim).filter(|m| !m.is_empty()) {
                    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, method);
                }
            }
            list => {
                if let Some(value) = list.header_value() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
                }
            }
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, requested_headers: Option<&str>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        match &self.policy.allowed_headers {
            AllowedHeaders::List(values) if values.is_empty() => {}
            AllowedHeaders::List(values) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, values.join(", "));
            }
            AllowedHeaders::Any if !self.policy.allow_credentials => {
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, WILDCARD);
            }
            AllowedHeaders::Any => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                let echoed = requested_headers
                    .map(|line| split_header_list(line).collect::<Vec<_>>())
                    .unwrap_or_default();
                if !echoed.is_empty() {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, echoed.join(", "));
                }
            }
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.policy.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(seconds) = self.policy.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
