mod render;
mod style;

pub use render::ReportRenderer;
pub use style::{PriceBand, PriceThresholds};

/// Which districts get a section, how many rows each shows, and which field
/// ranks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub districts: Vec<String>,
    pub top_n: usize,
    pub rank_field: String,
}

impl ReportOptions {
    pub fn standard() -> Self {
        Self {
            districts: ["Zuilen", "Zuilen2", "Zuilen3", "Ondiep", "Hogeweide"]
                .iter()
                .map(|district| district.to_string())
                .collect(),
            top_n: 20,
            rank_field: "magic".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_options_cover_the_watched_districts() {
        let options = ReportOptions::standard();
        assert_eq!(
            options.districts,
            vec!["Zuilen", "Zuilen2", "Zuilen3", "Ondiep", "Hogeweide"]
        );
        assert_eq!(options.top_n, 20);
        assert_eq!(options.rank_field, "magic");
    }
}
