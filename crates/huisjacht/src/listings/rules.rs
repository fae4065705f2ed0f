use super::domain::RawListing;

/// Hard acceptance rules applied before a listing is enriched. Rejections
/// are routine exclusions, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptancePolicy {
    pub min_price: u32,
    pub max_price: u32,
    pub required_type: &'static str,
    pub min_area: u32,
}

impl AcceptancePolicy {
    pub fn standard() -> Self {
        Self {
            min_price: 10_000,
            max_price: 600_000,
            required_type: "house",
            min_area: 110,
        }
    }

    /// `None` means the listing is accepted. Rules are checked in a fixed
    /// order and the first violation wins.
    pub fn evaluate(&self, listing: &RawListing) -> Option<RejectReason> {
        if listing.price < self.min_price {
            // Prices this low are scrape artifacts, not real asks.
            return Some(RejectReason::PriceBelowFloor);
        }
        if listing.price > self.max_price {
            return Some(RejectReason::PriceAboveCeiling);
        }
        if listing.property_type != self.required_type {
            return Some(RejectReason::WrongPropertyType);
        }
        if listing.area < self.min_area {
            return Some(RejectReason::AreaTooSmall);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    PriceBelowFloor,
    PriceAboveCeiling,
    WrongPropertyType,
    AreaTooSmall,
}

impl RejectReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceBelowFloor => "price below plausibility floor",
            Self::PriceAboveCeiling => "price above budget ceiling",
            Self::WrongPropertyType => "not a house",
            Self::AreaTooSmall => "living area too small",
        }
    }
}
