//! JSON snapshot of a pre-parsed dataset.
//!
//! The snapshot is the hand-off format from whatever loader parsed the raw
//! airport/airline/route files. It is a plain JSON object with three arrays.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{AirlineCode, Airport, RouteTemplate};

use super::{Dataset, DatasetBuilder, DatasetError};

/// On-disk shape of a dataset.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DatasetSnapshot {
    #[serde(default)]
    airports: Vec<Airport>,
    #[serde(default)]
    airlines: Vec<AirlineRecord>,
    #[serde(default)]
    routes: Vec<RouteTemplate>,
}

/// One airline name entry.
#[derive(Debug, Serialize, Deserialize)]
struct AirlineRecord {
    code: AirlineCode,
    name: String,
}

impl Dataset {
    /// Parse a dataset from a JSON snapshot.
    ///
    /// Airport records are validated; templates referencing unknown
    /// airports are dropped as in [`DatasetBuilder::build`].
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let snapshot: DatasetSnapshot = serde_json::from_str(json)?;

        let mut builder = DatasetBuilder::new();

        for airport in snapshot.airports {
            airport
                .validate()
                .map_err(|source| DatasetError::InvalidAirport {
                    code: airport.code,
                    source,
                })?;
            builder = builder.airport(airport);
        }

        for record in snapshot.airlines {
            builder = builder.airline(record.code, record.name);
        }

        for template in snapshot.routes {
            builder = builder.route(template);
        }

        Ok(builder.build())
    }

    /// Serialize the dataset as a JSON snapshot.
    ///
    /// Records are sorted by code so the output is stable.
    pub fn to_json(&self) -> Result<String, DatasetError> {
        let mut airports: Vec<Airport> = self.airports.values().cloned().collect();
        airports.sort_by_key(|a| a.code);

        let mut airlines: Vec<AirlineRecord> = self
            .airlines
            .iter()
            .map(|(code, name)| AirlineRecord {
                code: *code,
                name: name.clone(),
            })
            .collect();
        airlines.sort_by_key(|a| a.code);

        let mut origins: Vec<_> = self.routes.keys().copied().collect();
        origins.sort();
        let routes = origins
            .iter()
            .flat_map(|origin| self.routes_from(origin).iter().cloned())
            .collect();

        let snapshot = DatasetSnapshot {
            airports,
            airlines,
            routes,
        };

        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Load a dataset snapshot from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Save the dataset as a snapshot file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let io_err = |source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IataCode;
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"{
        "airports": [
            {"code": "SYD", "name": "Sydney Kingsford Smith International Airport", "city": "Sydney",
             "country": "Australia", "latitude": -33.9461, "longitude": 151.177, "utc_offset_minutes": 600},
            {"code": "MEL", "name": "Melbourne International Airport", "city": "Melbourne",
             "country": "Australia", "latitude": -37.6733, "longitude": 144.843, "utc_offset_minutes": 600}
        ],
        "airlines": [
            {"code": "QF", "name": "Qantas"}
        ],
        "routes": [
            {"origin": "SYD", "destination": "MEL", "airline": "QF", "equipment": ["738", "332"]},
            {"origin": "SYD", "destination": "AKL", "airline": "QF", "equipment": ["789"]}
        ]
    }"#;

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    #[test]
    fn parses_snapshot() {
        let dataset = Dataset::from_json(SNAPSHOT).unwrap();

        assert_eq!(dataset.airport_count(), 2);
        assert_eq!(dataset.airline_count(), 1);
        // SYD->AKL dropped: AKL is not in the airport table
        assert_eq!(dataset.route_count(), 1);
        assert_eq!(
            dataset.airport(&iata("MEL")).unwrap().city,
            "Melbourne"
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dataset = Dataset::from_json("{}").unwrap();
        assert_eq!(dataset.airport_count(), 0);
        assert_eq!(dataset.route_count(), 0);
    }

    #[test]
    fn rejects_invalid_airport() {
        let json = r#"{"airports": [{"code": "SYD", "name": "S", "city": "S", "country": "A",
            "latitude": -133.0, "longitude": 151.0, "utc_offset_minutes": 600}]}"#;

        let result = Dataset::from_json(json);
        assert!(matches!(result, Err(DatasetError::InvalidAirport { .. })));
    }

    #[test]
    fn rejects_invalid_code() {
        let json = r#"{"airlines": [{"code": "q", "name": "Broken"}]}"#;
        assert!(matches!(Dataset::from_json(json), Err(DatasetError::Json(_))));
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dataset.json");

        let dataset = Dataset::from_json(SNAPSHOT).unwrap();
        dataset.save(&path).unwrap();
        assert!(path.exists());

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded.airport_count(), 2);
        assert_eq!(loaded.route_count(), 1);
        assert_eq!(
            loaded.routes_from(&iata("SYD"))[0].equipment,
            vec!["738", "332"]
        );
        assert_eq!(
            loaded.airline_name(&AirlineCode::parse("QF").unwrap()),
            Some("Qantas")
        );
    }

    #[test]
    fn load_missing_file() {
        let result = Dataset::load("/nonexistent/path/dataset.json");
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
