//! Decode-time compatibility policy.

use std::fmt;
use std::str::FromStr;

use ckbsdk_common::error::Error;

/// Whether trailing fields unknown to the local schema are tolerated.
///
/// Every decode entry point takes this as a plain `compatible: bool`; this type is the
/// named form of that flag for callers that take it as configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compatibility {
    /// The number of fields must equal the schema's.
    #[default]
    Strict,
    /// Extra trailing fields written by a newer schema version are accepted and ignored.
    Compatible,
}

impl Compatibility {
    pub fn is_compatible(self) -> bool {
        self == Compatibility::Compatible
    }
}

impl From<bool> for Compatibility {
    fn from(compatible: bool) -> Self {
        if compatible {
            Compatibility::Compatible
        } else {
            Compatibility::Strict
        }
    }
}

impl From<Compatibility> for bool {
    fn from(c: Compatibility) -> Self {
        c.is_compatible()
    }
}

impl FromStr for Compatibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Compatibility::Strict),
            "compatible" => Ok(Compatibility::Compatible),
            _ => Err(Error::invalid_arg(
                "compatibility",
                format!("expected 'strict' or 'compatible', got '{s}'"),
            )),
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compatibility::Strict => f.write_str("strict"),
            Compatibility::Compatible => f.write_str("compatible"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for c in [Compatibility::Strict, Compatibility::Compatible] {
            assert_eq!(c.to_string().parse::<Compatibility>().unwrap(), c);
        }
        assert_eq!(
            "Compatible".parse::<Compatibility>().unwrap(),
            Compatibility::Compatible
        );
        assert!("lenient".parse::<Compatibility>().is_err());
        assert!(bool::from(Compatibility::from(true)));
        assert_eq!(Compatibility::default(), Compatibility::Strict);
    }
}
