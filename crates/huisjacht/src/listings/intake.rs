use super::collection::ListingCollection;
use super::domain::RawListing;
use super::enrich::enrich;
use super::rules::AcceptancePolicy;
use crate::geo::{GeoError, PointOfInterest, PostalCodeTable};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Geo(GeoError),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read listings file: {}", err),
            IntakeError::Json(err) => write!(f, "invalid listings JSON: {}", err),
            IntakeError::Geo(err) => write!(f, "could not resolve listing location: {}", err),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Json(err) => Some(err),
            IntakeError::Geo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<GeoError> for IntakeError {
    fn from(err: GeoError) -> Self {
        Self::Geo(err)
    }
}

pub struct ListingIntake;

impl ListingIntake {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        table: &PostalCodeTable,
        policy: &AcceptancePolicy,
        pois: &[PointOfInterest],
    ) -> Result<ListingCollection, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, table, policy, pois)
    }

    /// Parse a JSON array of scraped listings, drop the ones the policy
    /// rejects, resolve the rest against the postal table and enrich them.
    /// A malformed record or an unknown postal prefix fails the whole run.
    pub fn from_reader<R: Read>(
        reader: R,
        table: &PostalCodeTable,
        policy: &AcceptancePolicy,
        pois: &[PointOfInterest],
    ) -> Result<ListingCollection, IntakeError> {
        let raw_listings: Vec<RawListing> = serde_json::from_reader(reader)?;
        let scraped = raw_listings.len();

        let mut collection = ListingCollection::new();
        let mut rejected = 0usize;
        for raw in raw_listings {
            if let Some(reason) = policy.evaluate(&raw) {
                debug!(address = %raw.address, reason = reason.label(), "listing skipped");
                rejected += 1;
                continue;
            }

            let location = table.get(raw.postal_prefix())?.clone();
            collection.add(enrich(raw, location, pois));
        }

        info!(
            scraped,
            rejected,
            accepted = collection.len(),
            "listing intake complete"
        );
        Ok(collection)
    }
}
