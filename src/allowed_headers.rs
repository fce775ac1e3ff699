use crate::constants::WILDCARD;
use crate::util::{dedup_trimmed, split_header_list};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every requested header is allowed.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::Any
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = dedup_trimmed(values, str::to_ascii_lowercase);
        if values.iter().any(|value| value == WILDCARD) {
            return Self::Any;
        }
        Self::List(values)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks every entry of an `Access-Control-Request-Headers` line.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_header_list(request_headers).all(|header| {
                allowed
                    .iter()
                    .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
            }),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
