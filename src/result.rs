use crate::headers::Headers;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Answer the preflight directly with these headers.
    PreflightAccepted { headers: Headers },
    /// Answer the preflight with a rejection; no allow headers are present.
    PreflightRejected(PreflightRejection),
    /// Let the request through and add these headers to its response.
    SimpleAccepted { headers: Headers },
    /// Let the request through without allow headers; the browser blocks the response.
    SimpleRejected(SimpleRejection),
    /// Same-origin request or a path outside the policy.
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRejection {
    pub headers: Headers,
    pub reason: SimpleRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
}

impl CorsDecision {
    /// Headers to apply to the outgoing response, whatever the outcome.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PreflightAccepted { headers } | Self::SimpleAccepted { headers } => Some(headers),
            Self::PreflightRejected(rejection) => Some(&rejection.headers),
            Self::SimpleRejected(rejection) => Some(&rejection.headers),
            Self::NotApplicable => None,
        }
    }
}
