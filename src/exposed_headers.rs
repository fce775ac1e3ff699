use crate::constants::WILDCARD;
use crate::util::dedup_trimmed;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExposedHeaders {
    List(Vec<String>),
    Any,
}

impl Default for ExposedHeaders {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, trimming whitespace and
    /// removing case-insensitive duplicates.
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

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
            Self::Any => Some(WILDCARD.to_string()),
        }
    }

    /// Explicitly configured names; empty for [`Self::Any`].
    pub fn names(&self) -> &[String] {
        match self {
            Self::List(values) => values,
            Self::Any => &[],
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
