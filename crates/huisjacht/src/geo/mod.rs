mod distance;
mod parser;

pub use distance::{standard_points, Coordinate, PointOfInterest, KM_PER_DEGREE};

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// The geography resolved for one four-digit postal prefix.
#[derive(Debug, Clone)]
pub struct Location {
    pub district: String,
    pub province: String,
    pub municipality: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("failed to read postal code table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid postal code data: {0}")]
    Csv(#[from] csv::Error),
    #[error("postal code prefix {prefix} missing from reference table")]
    UnknownPrefix { prefix: String },
}

// Coordinates in the reference export that are known-wrong and overridden
// after the load.
const COORDINATE_PATCHES: &[(&str, f64, f64)] = &[
    ("3531", 52.091177, 5.098962), // Lombok
    ("3532", 52.095363, 5.089510), // Majellapark
];

// Prefixes whose place name is too coarse; split into the sub-labels the
// report's district list uses.
const DISTRICT_PATCHES: &[(&str, &str)] = &[
    ("3554", "Zuilen2"),
    ("3553", "Zuilen3"),
    ("3544", "Leidsche Rijn2"),
    ("3563", "Overvecht-Noord2"),
];

/// Postal prefix to [`Location`] lookup, loaded once at startup.
#[derive(Debug, Default)]
pub struct PostalCodeTable {
    lookup: HashMap<String, Location>,
}

impl PostalCodeTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GeoError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GeoError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = parser::decode_reference_bytes(&bytes);

        let mut lookup = HashMap::new();
        for row in parser::parse_rows(&text)? {
            lookup.insert(
                row.postal_code,
                Location {
                    district: row.place_name,
                    province: row.state,
                    municipality: row.county,
                    coordinate: Coordinate::new(row.latitude, row.longitude),
                },
            );
        }

        let mut table = Self { lookup };
        table.apply_patches();
        debug!(prefixes = table.len(), "postal code table loaded");
        Ok(table)
    }

    fn apply_patches(&mut self) {
        for &(prefix, lat, lon) in COORDINATE_PATCHES {
            match self.lookup.get_mut(prefix) {
                Some(location) => location.coordinate = Coordinate::new(lat, lon),
                None => warn!(prefix, "coordinate patch targets a prefix absent from the table"),
            }
        }

        for &(prefix, district) in DISTRICT_PATCHES {
            match self.lookup.get_mut(prefix) {
                Some(location) => location.district = district.to_string(),
                None => warn!(prefix, "district patch targets a prefix absent from the table"),
            }
        }
    }

    /// Resolve a four-digit prefix. Absence is a data-integrity problem in
    /// the reference table and is surfaced, never masked.
    pub fn get(&self, prefix: &str) -> Result<&Location, GeoError> {
        self.lookup.get(prefix).ok_or_else(|| GeoError::UnknownPrefix {
            prefix: prefix.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
