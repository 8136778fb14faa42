//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Identifier of a single Ampio monitoring station.
///
/// The API accepts the identifier as a path segment, so both numeric ids
/// (`16`) and textual ids (`"16"`) are valid and compare equal once
/// converted.
///
/// # Examples
///
/// ```
/// use ampio_smog::domain::StationId;
///
/// let from_int = StationId::from(16u32);
/// let from_str = StationId::parse("16").unwrap();
/// assert_eq!(from_int, from_str);
/// assert_eq!(from_int.as_str(), "16");
///
/// // Path separators would change the request path
/// assert!(StationId::parse("16/../42").is_err());
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    ///
    /// The input must be non-empty and free of whitespace, `/`, `?` and `#`.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(InvalidStationId {
                reason: "must be a single URL path segment",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as it appears in request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StationId {
                fn from(id: $t) -> Self {
                    StationId(id.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u16, u32, u64, i32, i64);

impl TryFrom<&str> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        StationId::parse(s)
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationId::parse(&s)
    }
}

impl std::str::FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StationId::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
