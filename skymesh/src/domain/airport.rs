//! Airport code and metadata types.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::DomainError;
use super::code::alpha3_code;

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA airport code: {reason}")]
pub struct InvalidIataCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA airport codes are always 3 uppercase ASCII letters. This type
/// guarantees that any `IataCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use skymesh::domain::IataCode;
///
/// let syd = IataCode::parse("SYD").unwrap();
/// assert_eq!(syd.as_str(), "SYD");
///
/// // Lowercase is rejected
/// assert!(IataCode::parse("syd").is_err());
///
/// // Wrong length is rejected
/// assert!(IataCode::parse("SY").is_err());
/// assert!(IataCode::parse("YSSY").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IataCode([u8; 3]);

alpha3_code!(IataCode, InvalidIataCode);

/// Largest UTC offset accepted for an airport, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Static metadata for one airport.
///
/// The UTC offset is fixed for the lifetime of the dataset; daylight saving
/// is not modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, the lookup key.
    pub code: IataCode,
    /// Display name (e.g. "Sydney Kingsford Smith International Airport").
    pub name: String,
    pub city: String,
    pub country: String,
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
    /// Offset from UTC in whole minutes, east positive.
    pub utc_offset_minutes: i32,
}

impl Airport {
    /// Creates airport metadata, validating coordinates and offset.
    ///
    /// `utc_offset_hours` may be fractional (India is +5.5, Nepal +5.75).
    pub fn new(
        code: IataCode,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, DomainError> {
        if !utc_offset_hours.is_finite() {
            return Err(DomainError::InvalidUtcOffset(utc_offset_hours));
        }

        let airport = Airport {
            code,
            name: name.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
            utc_offset_minutes: (utc_offset_hours * 60.0).round() as i32,
        };
        airport.validate()?;
        Ok(airport)
    }

    /// Check the coordinate and offset ranges.
    ///
    /// Deserialized airports bypass [`Airport::new`], so loaders call this
    /// before accepting a record.
    pub fn validate(&self) -> Result<(), DomainError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if !lat_ok || !lon_ok {
            return Err(DomainError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }

        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(DomainError::InvalidUtcOffset(
                f64::from(self.utc_offset_minutes) / 60.0,
            ));
        }

        Ok(())
    }

    /// Returns the airport's fixed UTC offset.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the stored offset is outside ±18 hours. Fields are
    /// public, so a record may have been edited after [`Airport::new`].
    pub fn timezone(&self) -> Result<FixedOffset, DomainError> {
        let invalid = || DomainError::InvalidUtcOffset(f64::from(self.utc_offset_minutes) / 60.0);

        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(invalid());
        }

        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(invalid)
    }
}
