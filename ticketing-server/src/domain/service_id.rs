//! Service identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid service id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service id: {reason}")]
pub struct InvalidServiceId {
    reason: &'static str,
}

/// Identifier of a scheduled train run (e.g. "5160").
///
/// Service ids are opaque timetable numbers. The only validation is that
/// they are non-empty and carry no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use ticketing_server::domain::ServiceId;
///
/// let id = ServiceId::new("5160").unwrap();
/// assert_eq!(id.as_str(), "5160");
///
/// assert!(ServiceId::new("").is_err());
/// assert!(ServiceId::new(" 5160").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a service id from a string.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidServiceId> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidServiceId {
                reason: "service id cannot be empty",
            });
        }
        if s.trim() != s {
            return Err(InvalidServiceId {
                reason: "service id cannot have leading or trailing whitespace",
            });
        }
        Ok(ServiceId(s))
    }

    /// Returns the service id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets registries keyed by `ServiceId` be queried with a plain `&str`.
impl Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({})", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string without surrounding whitespace is accepted
        #[test]
        fn trimmed_nonempty_always_valid(s in "[A-Za-z0-9]([A-Za-z0-9 -]*[A-Za-z0-9])?") {
            let id = ServiceId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Leading whitespace is always rejected
        #[test]
        fn leading_whitespace_rejected(s in "[ \t]+[0-9]{1,6}") {
            prop_assert!(ServiceId::new(s).is_err());
        }
    }
}
