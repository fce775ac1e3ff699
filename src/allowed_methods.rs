use crate::constants::{WILDCARD, method};
use crate::util::dedup_trimmed;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any method. Emitted as `*`, or as the requested method when credentials are on.
    Any,
    /// Explicit methods, emitted in configured order.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    ///
    /// Methods are upper-cased, so `"get"` and `"GET"` collapse into one entry.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = dedup_trimmed(values, str::to_ascii_uppercase)
            .into_iter()
            .map(|value| value.to_ascii_uppercase())
            .collect();
        if values.iter().any(|value| value == WILDCARD) {
            return Self::Any;
        }
        Self::List(values)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        match self {
            Self::Any => !requested.is_empty(),
            Self::List(values) => values
                .iter()
                .any(|value| value.eq_ignore_ascii_case(requested)),
        }
    }

    /// Header value for the configured list; `None` for [`Self::Any`] or an empty list.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::HEAD, method::POST])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
