use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, MATCH_ALL_PATHS};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;
use crate::path_pattern::{PathPattern, PatternError};
use crate::util::{is_http_token, is_serialized_origin};
use thiserror::Error;

/// One CORS rule set, applied to every request whose path matches `path_pattern`.
///
/// This is plain data. [`crate::Cors::new`] validates it once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    pub path_pattern: String,
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub allow_credentials: bool,
    /// `Access-Control-Max-Age` in seconds.
    pub max_age: Option<u64>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            path_pattern: MATCH_ALL_PATHS.to_string(),
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            allow_credentials: false,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
        }
    }
}

/// Configuration problems detected while building the engine. All are fatal.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid CORS path pattern")]
    InvalidPathPattern(#[from] PatternError),
    #[error("no allowed origins configured; use \"*\" to allow every origin")]
    NoAllowedOrigins,
    #[error("allowed origin {0:?} is not of the form scheme://host[:port]")]
    InvalidOrigin(String),
    #[error(
        "credentials cannot be allowed together with a wildcard origin; list the allowed origins explicitly"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("no allowed methods configured")]
    NoAllowedMethods,
    #[error("allowed method {0:?} is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("credentials cannot be allowed together with wildcard exposed headers")]
    CredentialsForbidWildcardExposedHeaders,
}

impl CorsPolicy {
    /// Checks every invariant and returns the compiled path matcher.
    pub fn validate(&self) -> Result<PathPattern, ValidationError> {
        let path_pattern = PathPattern::parse(&self.path_pattern)?;

        match &self.allowed_origins {
            AllowedOrigins::Any if self.allow_credentials => {
                return Err(ValidationError::CredentialsRequireSpecificOrigin);
            }
            AllowedOrigins::Any => {}
            AllowedOrigins::List(origins) if origins.is_empty() => {
                return Err(ValidationError::NoAllowedOrigins);
            }
            AllowedOrigins::List(origins) => {
                if let Some(origin) = origins.iter().find(|origin| !is_serialized_origin(origin)) {
                    return Err(ValidationError::InvalidOrigin(origin.clone()));
                }
            }
        }

        if let AllowedMethods::List(methods) = &self.allowed_methods {
            if methods.is_empty() {
                return Err(ValidationError::NoAllowedMethods);
            }
            if let Some(method) = methods.iter().find(|method| !is_http_token(method)) {
                return Err(ValidationError::InvalidMethod(method.clone()));
            }
        }

        let allowed_header_names = match &self.allowed_headers {
            AllowedHeaders::List(names) => names.as_slice(),
            AllowedHeaders::Any => &[],
        };
        if let Some(name) = allowed_header_names
            .iter()
            .chain(self.exposed_headers.names())
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        if self.allow_credentials && self.exposed_headers.is_any() {
            return Err(ValidationError::CredentialsForbidWildcardExposedHeaders);
        }

        Ok(path_pattern)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
