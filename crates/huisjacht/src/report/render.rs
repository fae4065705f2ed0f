use super::style::{PriceBand, PriceThresholds, BOLD, DIM, RESET};
use super::ReportOptions;
use crate::listings::{EnrichedListing, ListingCollection};
use chrono::Local;
use std::io::{self, Write};

const RULE_WIDTH: usize = 160;

pub struct ReportRenderer {
    use_color: bool,
    thresholds: PriceThresholds,
}

impl ReportRenderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            thresholds: PriceThresholds::standard(),
        }
    }

    /// One listing as a single summary line, wrapped in its price band's
    /// style.
    pub fn listing_line(&self, item: &EnrichedListing) -> String {
        let raw = item.raw();
        let line = format!(
            "{}, {}, {}, price({}), area({}), price per m2({:.0}), year({}), type({}), rooms({}), bedrooms({})",
            raw.address,
            item.district(),
            raw.postal_code,
            raw.price,
            raw.area,
            item.price_per_m2(),
            raw.year_built,
            raw.property_type,
            raw.rooms,
            raw.bedrooms,
        );
        PriceBand::classify(raw.price, &self.thresholds).paint(&line, self.use_color)
    }

    /// The full per-district report: for every configured district, the
    /// district's listings ranked ascending by the configured field, top-N
    /// rendered with the listing URL dimmed on the following line.
    pub fn render<W: Write>(
        &self,
        collection: &ListingCollection,
        options: &ReportOptions,
        out: &mut W,
    ) -> io::Result<()> {
        if self.use_color {
            writeln!(out, "{RESET}")?;
        }
        writeln!(out, "{}", "#".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "{}",
            self.dim(&format!(
                "report generated {}",
                Local::now().format("%Y-%m-%d %H:%M")
            ))
        )?;

        for district in &options.districts {
            let ranked_district = collection.filter_eq("district", district.as_str());
            let ranked = ranked_district.sort_by(&options.rank_field);

            writeln!(out, "{}", self.bold(&format!("District [{district}]")))?;
            for (index, item) in ranked.iter().take(options.top_n).enumerate() {
                writeln!(out, "{:2} {}", index, self.listing_line(item))?;
                writeln!(out, "   {}", self.dim(&item.raw().url))?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /// Winners section: the headline listings across the whole collection.
    pub fn render_extremes<W: Write>(
        &self,
        collection: &ListingCollection,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(extremes) = collection.extremes() else {
            writeln!(out, "No listings survived the acceptance rules.")?;
            return Ok(());
        };

        writeln!(out, "{}", self.bold("And the winners are:"))?;
        writeln!(
            out,
            "Min price [{}]: {}",
            extremes.cheapest.raw().price,
            self.listing_line(extremes.cheapest)
        )?;
        writeln!(
            out,
            "Max price [{}]: {}",
            extremes.priciest.raw().price,
            self.listing_line(extremes.priciest)
        )?;
        writeln!(
            out,
            "Best price per m2 [{:.0}]: {}",
            extremes.best_price_per_m2.price_per_m2(),
            self.listing_line(extremes.best_price_per_m2)
        )?;

        Ok(())
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
