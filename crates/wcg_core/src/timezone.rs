//! Timezone resolution and listing.
//!
//! Identifiers are IANA names validated against the bundled chrono-tz
//! database. An unknown identifier is rejected at selection time so the
//! caller can keep its previous configuration; nothing here defaults
//! silently.

use std::str::FromStr;

use chrono_tz::Tz;
use thiserror::Error;

/// Error raised for an identifier missing from the timezone database.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    #[error("unknown timezone: {0}")]
    Unknown(String),
}

/// Resolve an IANA identifier, failing fast on unknown names.
pub fn resolve(name: &str) -> Result<Tz, TimezoneError> {
    Tz::from_str(name).map_err(|_| TimezoneError::Unknown(name.to_string()))
}

/// Every identifier known to the bundled database, for the UI picker.
pub fn all_names() -> Vec<String> {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_identifier() {
        assert_eq!(resolve("Asia/Tokyo"), Ok(chrono_tz::Asia::Tokyo));
        assert_eq!(resolve("UTC"), Ok(chrono_tz::UTC));
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = resolve("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err, TimezoneError::Unknown("Mars/Olympus_Mons".into()));
        assert!(err.to_string().contains("unknown timezone"));
    }

    #[test]
    fn listing_contains_common_zones() {
        let names = all_names();
        assert!(names.iter().any(|n| n == "Asia/Tokyo"));
        assert!(names.iter().any(|n| n == "Europe/London"));
    }
}
