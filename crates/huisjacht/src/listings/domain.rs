use crate::geo::Location;
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;

/// One scraped property record, exactly as it arrived. The scrape encodes
/// its numeric fields as strings; they are parsed once here so a malformed
/// record fails the whole intake instead of surfacing later as a bad sort.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub url: String,
    pub property_type: String,
    pub year_built: String,
    #[serde(deserialize_with = "numeric_string")]
    pub price: u32,
    #[serde(deserialize_with = "numeric_string")]
    pub area: u32,
    #[serde(deserialize_with = "numeric_string")]
    pub rooms: u32,
    #[serde(deserialize_with = "numeric_string")]
    pub bedrooms: u32,
}

impl RawListing {
    /// First four characters of the postal code ("NNNN XX" format), the key
    /// into the postal reference table.
    pub fn postal_prefix(&self) -> &str {
        self.postal_code.get(..4).unwrap_or(&self.postal_code)
    }

    pub(crate) fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "address" => Some(FieldValue::text(&self.address)),
            "postal_code" => Some(FieldValue::text(&self.postal_code)),
            "city" => Some(FieldValue::text(&self.city)),
            "url" => Some(FieldValue::text(&self.url)),
            "property_type" => Some(FieldValue::text(&self.property_type)),
            "year_built" => Some(FieldValue::text(&self.year_built)),
            "price" => Some(FieldValue::Number(f64::from(self.price))),
            "area" => Some(FieldValue::Number(f64::from(self.area))),
            "rooms" => Some(FieldValue::Number(f64::from(self.rooms))),
            "bedrooms" => Some(FieldValue::Number(f64::from(self.bedrooms))),
            _ => None,
        }
    }
}

fn numeric_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Text(String),
        Integer(u64),
    }

    match Encoded::deserialize(deserializer)? {
        Encoded::Text(value) => value.trim().parse().map_err(serde::de::Error::custom),
        Encoded::Integer(value) => u32::try_from(value).map_err(serde::de::Error::custom),
    }
}

/// A resolved field value. Numbers order before text, and numbers compare by
/// total order so a sort never sees an incomparable pair.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl AsRef<str>) -> Self {
        Self::Text(value.as_ref().to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

#[derive(Debug, Clone)]
pub struct PoiDistance {
    pub name: &'static str,
    pub km: f64,
}

/// A raw listing plus its resolved location and derived metrics. Built once
/// per accepted record and never mutated.
#[derive(Debug, Clone)]
pub struct EnrichedListing {
    pub(crate) raw: RawListing,
    pub(crate) location: Location,
    pub(crate) price_per_m2: f64,
    pub(crate) poi_distances: Vec<PoiDistance>,
    pub(crate) poi_summary: String,
    pub(crate) magic: f64,
}

impl EnrichedListing {
    pub fn raw(&self) -> &RawListing {
        &self.raw
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn district(&self) -> &str {
        &self.location.district
    }

    pub fn price_per_m2(&self) -> f64 {
        self.price_per_m2
    }

    pub fn poi_distances(&self) -> &[PoiDistance] {
        &self.poi_distances
    }

    pub fn poi_summary(&self) -> &str {
        &self.poi_summary
    }

    /// Composite ranking heuristic favoring larger, cheaper homes; lower is
    /// better.
    pub fn magic(&self) -> f64 {
        self.magic
    }

    /// Resolve a field by name across one flat namespace. Raw fields are
    /// consulted before derived ones, so a raw field shadows a derived field
    /// of the same name.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        if let Some(value) = self.raw.field(name) {
            return Some(value);
        }
        self.derived_field(name)
    }

    fn derived_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "price_per_m2" => Some(FieldValue::Number(self.price_per_m2)),
            "magic" => Some(FieldValue::Number(self.magic)),
            "district" => Some(FieldValue::text(&self.location.district)),
            "distance_to_poi" => Some(FieldValue::text(&self.poi_summary)),
            _ => {
                let index: usize = name.strip_prefix("distance")?.parse().ok()?;
                self.poi_distances
                    .get(index)
                    .map(|distance| FieldValue::Number(distance.km))
            }
        }
    }
}
