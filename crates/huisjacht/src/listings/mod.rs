mod collection;
mod domain;
mod enrich;
mod intake;
mod rules;

pub use collection::{ListingCollection, ListingExtremes};
pub use domain::{EnrichedListing, FieldValue, PoiDistance, RawListing};
pub use enrich::enrich;
pub use intake::{IntakeError, ListingIntake};
pub use rules::{AcceptancePolicy, RejectReason};
