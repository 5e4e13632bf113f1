//! Four-part driver version numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A four-part driver package version (`major.minor.build.revision`).
///
/// The native tool prints up to four dot-separated components; missing
/// trailing components are zero, so `"9.9"` parses as `9.9.0.0`. Ordering is
/// component-wise from `major` down to `revision`, which is what supersession
/// analysis relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct DriverVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl DriverVersion {
    /// Create a version from its four components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Error returned when a version token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// The token was empty or whitespace.
    #[error("empty version token")]
    Empty,

    /// More than four dot-separated components.
    #[error("too many version components in {0:?}")]
    TooManyComponents(String),

    /// A component was not a non-negative integer.
    #[error("invalid version component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },
}

impl FromStr for DriverVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut components = [0u32; 4];
        let mut count = 0;
        for token in s.split('.') {
            if count == components.len() {
                return Err(VersionParseError::TooManyComponents(s.to_string()));
            }
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::InvalidComponent {
                    input: s.to_string(),
                    component: token.to_string(),
                });
            }
            components[count] =
                token
                    .parse()
                    .map_err(|_| VersionParseError::InvalidComponent {
                        input: s.to_string(),
                        component: token.to_string(),
                    })?;
            count += 1;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_components() {
        let version: DriverVersion = "9.9.114.0".parse().unwrap();
        assert_eq!(version, DriverVersion::new(9, 9, 114, 0));
        assert_eq!(version.to_string(), "9.9.114.0");
    }

    #[test]
    fn test_missing_trailing_components_default_to_zero() {
        assert_eq!(
            "10.0".parse::<DriverVersion>().unwrap(),
            DriverVersion::new(10, 0, 0, 0)
        );
        assert_eq!(
            "6".parse::<DriverVersion>().unwrap(),
            DriverVersion::new(6, 0, 0, 0)
        );
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert_eq!(
            "".parse::<DriverVersion>().unwrap_err(),
            VersionParseError::Empty
        );
        assert!("1.2.3.4.5".parse::<DriverVersion>().is_err());
        assert!("1..3".parse::<DriverVersion>().is_err());
        assert!("1.2.x".parse::<DriverVersion>().is_err());
        assert!("-1.2.3.4".parse::<DriverVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_component_wise() {
        let older: DriverVersion = "9.9.114.0".parse().unwrap();
        let newer: DriverVersion = "9.10.0.0".parse().unwrap();
        assert!(older < newer);
        assert!(DriverVersion::new(10, 0, 0, 0) > DriverVersion::new(9, 99, 99, 99));
    }
}
