use serde::Deserialize;

/// One row of the postal code reference export.
///
/// ```text
/// Postal Code,Place Name,State,County,Latitude,Longitude
/// 9400,Assen,Provincie Drenthe,Gemeente Assen,52.9967,6.5625
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct PostalCodeRow {
    #[serde(rename = "Postal Code")]
    pub(crate) postal_code: String,
    #[serde(rename = "Place Name")]
    pub(crate) place_name: String,
    #[serde(rename = "State")]
    pub(crate) state: String,
    #[serde(rename = "County")]
    pub(crate) county: String,
    #[serde(rename = "Latitude")]
    pub(crate) latitude: f64,
    #[serde(rename = "Longitude")]
    pub(crate) longitude: f64,
}

/// The reference export ships in the legacy Mac Roman encoding, so the raw
/// bytes are decoded up front rather than handed to the CSV reader directly.
pub(crate) fn decode_reference_bytes(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::MACINTOSH.decode(bytes);
    text.into_owned()
}

pub(crate) fn parse_rows(input: &str) -> Result<Vec<PostalCodeRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for row in reader.deserialize::<PostalCodeRow>() {
        rows.push(row?);
    }

    Ok(rows)
}
