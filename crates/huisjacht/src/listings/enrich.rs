use super::domain::{EnrichedListing, PoiDistance, RawListing};
use crate::geo::{Location, PointOfInterest};
use tracing::debug;

/// Derive the computed fields for one accepted listing. Pure: no I/O, and
/// the numeric fields were already validated at deserialization time.
pub fn enrich(raw: RawListing, location: Location, pois: &[PointOfInterest]) -> EnrichedListing {
    let price = f64::from(raw.price);
    let area = f64::from(raw.area);

    let price_per_m2 = price / area;
    let magic = -3.0 * area + price / 1000.0;

    let poi_distances: Vec<PoiDistance> = pois
        .iter()
        .map(|poi| PoiDistance {
            name: poi.name,
            km: poi.coordinate.distance_km(&location.coordinate),
        })
        .collect();

    let poi_summary = poi_distances
        .iter()
        .map(|distance| format!("{}:{:.2}km", distance.name, distance.km))
        .collect::<Vec<_>>()
        .join(", ");

    debug!(
        address = %raw.address,
        district = %location.district,
        price_per_m2,
        magic,
        "listing enriched"
    );

    EnrichedListing {
        raw,
        location,
        price_per_m2,
        poi_distances,
        poi_summary,
        magic,
    }
}
