use crate::constants::{MAX_ORIGIN_LENGTH, WILDCARD};
use crate::util::dedup_trimmed;

/// Origins allowed to read responses cross-origin.
///
/// Matching is exact and case-sensitive. The only wildcard is the literal `*`,
/// which turns the whole set into [`AllowedOrigins::Any`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

/// Outcome of comparing a request `Origin` against [`AllowedOrigins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Respond with `Access-Control-Allow-Origin: *`.
    Any,
    /// Echo the request origin back.
    Mirror,
    Disallow,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = dedup_trimmed(values, str::to_string);
        if values.iter().any(|value| value == WILDCARD) {
            return Self::Any;
        }
        Self::List(values)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn resolve(&self, request_origin: &str) -> OriginDecision {
        if request_origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Self::Any => OriginDecision::Any,
            Self::List(values) if values.iter().any(|value| value == request_origin) => {
                OriginDecision::Mirror
            }
            Self::List(_) => OriginDecision::Disallow,
        }
    }

    /// Responses vary by `Origin` whenever the answer depends on it.
    pub fn vary_on_origin(&self) -> bool {
        !self.is_any()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
