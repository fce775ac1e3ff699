use crate::constants::MATCH_ALL_PATHS;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

/// Ant-style request path matcher.
///
/// Segments are separated by `/`. Within a segment `?` matches one character,
/// `*` matches any run of characters and `{name}` matches a non-empty run. A
/// segment consisting of `**` matches zero or more whole segments.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    matcher: Matcher,
}

#[derive(Clone)]
enum Matcher {
    All,
    Regex(Regex),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("path pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),
    #[error("path pattern {0:?} uses '**' inside a segment; it must be a whole segment")]
    MisplacedDoubleWildcard(String),
    #[error("path pattern {0:?} has an unbalanced '{{' or '}}'")]
    UnbalancedBrace(String),
    #[error("path pattern {0:?} declares an empty '{{}}' variable")]
    EmptyVariable(String),
    #[error("failed to compile path pattern {pattern:?}")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        let Some(body) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        };

        if pattern == MATCH_ALL_PATHS {
            return Ok(Self::match_all());
        }

        let mut expr = String::with_capacity(pattern.len() * 2 + 2);
        expr.push('^');
        for segment in body.split('/') {
            if segment == "**" {
                expr.push_str("(?:/.*)?");
                continue;
            }
            expr.push('/');
            translate_segment(segment, pattern, &mut expr)?;
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|err| PatternError::Build {
            pattern: pattern.to_string(),
            source: Box::new(err),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            matcher: Matcher::Regex(regex),
        })
    }

    pub fn match_all() -> Self {
        Self {
            source: MATCH_ALL_PATHS.to_string(),
            matcher: Matcher::All,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Matches the path component of a request URI. An empty path counts as `/`.
    pub fn matches(&self, path: &str) -> bool {
        let path = if path.is_empty() { "/" } else { path };
        match &self.matcher {
            Matcher::All => true,
            Matcher::Regex(regex) => regex.is_match(path),
        }
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

fn translate_segment(segment: &str, pattern: &str, out: &mut String) -> Result<(), PatternError> {
    let mut chars = segment.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => {
                if chars.peek() == Some(&'*') {
                    return Err(PatternError::MisplacedDoubleWildcard(pattern.to_string()));
                }
                out.push_str("[^/]*");
            }
            '?' => out.push_str("[^/]"),
            '{' => {
                let mut name_len = 0;
                let mut closed = false;
                for inner in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(PatternError::UnbalancedBrace(pattern.to_string())),
                        _ => name_len += 1,
                    }
                }
                if !closed {
                    return Err(PatternError::UnbalancedBrace(pattern.to_string()));
                }
                if name_len == 0 {
                    return Err(PatternError::EmptyVariable(pattern.to_string()));
                }
                out.push_str("[^/]+");
            }
            '}' => return Err(PatternError::UnbalancedBrace(pattern.to_string())),
            _ => {
                if is_regex_meta(ch) {
                    out.push('\\');
                }
                out.push(ch);
            }
        }
    }
    Ok(())
}

fn is_regex_meta(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
    )
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
