use super::domain::{EnrichedListing, FieldValue};

/// The set of enriched listings under consideration. Insertion order is
/// kept; content-equal listings added twice are both retained.
#[derive(Debug, Default)]
pub struct ListingCollection {
    items: Vec<EnrichedListing>,
}

/// The headline listings across a collection, used for the winners section.
#[derive(Debug)]
pub struct ListingExtremes<'a> {
    pub cheapest: &'a EnrichedListing,
    pub priciest: &'a EnrichedListing,
    pub best_price_per_m2: &'a EnrichedListing,
}

impl ListingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: EnrichedListing) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedListing> {
        self.items.iter()
    }

    /// Exact-match filter over resolved field values; every criterion must
    /// hold. Items whose field does not resolve never match.
    pub fn filter(&self, criteria: &[(&str, FieldValue)]) -> ListingCollection {
        let items = self
            .items
            .iter()
            .filter(|item| {
                criteria
                    .iter()
                    .all(|(name, expected)| item.field(name).as_ref() == Some(expected))
            })
            .cloned()
            .collect();
        ListingCollection { items }
    }

    pub fn filter_eq(&self, field: &str, value: impl Into<FieldValue>) -> ListingCollection {
        self.filter(&[(field, value.into())])
    }

    /// Stable ascending sort by the resolved field value. Items missing the
    /// field sort first; ties keep insertion order.
    pub fn sort_by(&self, field: &str) -> Vec<&EnrichedListing> {
        let mut keyed: Vec<(Option<FieldValue>, &EnrichedListing)> = self
            .items
            .iter()
            .map(|item| (item.field(field), item))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    /// Cheapest, priciest, and best-value listings, or `None` when empty.
    pub fn extremes(&self) -> Option<ListingExtremes<'_>> {
        let first = self.items.first()?;
        let mut extremes = ListingExtremes {
            cheapest: first,
            priciest: first,
            best_price_per_m2: first,
        };

        for item in &self.items[1..] {
            if item.raw().price < extremes.cheapest.raw().price {
                extremes.cheapest = item;
            }
            if item.raw().price > extremes.priciest.raw().price {
                extremes.priciest = item;
            }
            if item.price_per_m2() < extremes.best_price_per_m2.price_per_m2() {
                extremes.best_price_per_m2 = item;
            }
        }

        Some(extremes)
    }
}
