//! URL slug type used for category handles.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL-safe identifier such as `running-shoes`.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - Only lowercase ASCII letters, digits and `-`
/// - No leading or trailing `-`
///
/// ## Examples
///
/// ```
/// use bazaar_core::Slug;
///
/// assert!(Slug::parse("running-shoes").is_ok());
/// assert!(Slug::parse("hats2").is_ok());
///
/// assert!(Slug::parse("").is_err());
/// assert!(Slug::parse("Running Shoes").is_err());
/// assert!(Slug::parse("-hats").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains characters
    /// other than lowercase ASCII letters, digits and hyphens, or starts or
    /// ends with a hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidChar(c));
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_char() {
        assert_eq!(Slug::parse("red_hats"), Err(SlugError::InvalidChar('_')));
        assert_eq!(Slug::parse("Hats"), Err(SlugError::InvalidChar('H')));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(Slug::MAX_LENGTH + 1);
        assert!(matches!(Slug::parse(&long), Err(SlugError::TooLong { .. })));
    }

    #[test]
    fn test_parse_edge_hyphen() {
        assert_eq!(Slug::parse("hats-"), Err(SlugError::EdgeHyphen));
    }

    #[test]
    fn test_deserialize_validates() {
        let slug: Slug = serde_json::from_str("\"shoes\"").unwrap();
        assert_eq!(slug.as_str(), "shoes");

        assert!(serde_json::from_str::<Slug>("\"Not A Slug\"").is_err());
    }
}
