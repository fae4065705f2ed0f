use huisjacht::geo::{standard_points, PostalCodeTable};
use huisjacht::listings::{AcceptancePolicy, ListingIntake};
use huisjacht::report::{ReportOptions, ReportRenderer};
use std::io::Cursor;

const POSTAL_CODES: &str = "Postal Code,Place Name,State,County,Latitude,Longitude\n\
3531,Lombok,Provincie Utrecht,Gemeente Utrecht,52.0800,5.1000\n\
3554,Zuilen,Provincie Utrecht,Gemeente Utrecht,52.1100,5.0800\n";

const LISTINGS: &str = r#"[
    {
        "city": "Utrecht",
        "year_built": "1931",
        "area": "120",
        "url": "http://example.test/lombok-house",
        "price": "250000",
        "bedrooms": "3",
        "postal_code": "3531 AB",
        "rooms": "4",
        "address": "Kanaalstraat 1",
        "property_type": "house"
    },
    {
        "city": "Utrecht",
        "year_built": "1955",
        "area": "140",
        "url": "http://example.test/zuilen-house",
        "price": "390000",
        "bedrooms": "4",
        "postal_code": "3554 CD",
        "rooms": "5",
        "address": "Amsterdamsestraatweg 900",
        "property_type": "house"
    },
    {
        "city": "Utrecht",
        "year_built": "1990",
        "area": "120",
        "url": "http://example.test/glitch",
        "price": "5000",
        "bedrooms": "3",
        "postal_code": "3531 AB",
        "rooms": "4",
        "address": "Foutstraat 1",
        "property_type": "house"
    },
    {
        "city": "Utrecht",
        "year_built": "1992",
        "area": "80",
        "url": "http://example.test/apartment",
        "price": "300000",
        "bedrooms": "2",
        "postal_code": "3531 MA",
        "rooms": "3",
        "address": "Arthur van Schendelstraat 35",
        "property_type": "apartment"
    }
]"#;

#[test]
fn scraped_json_flows_into_a_district_report() {
    let table = PostalCodeTable::from_reader(Cursor::new(POSTAL_CODES)).expect("table loads");
    let collection = ListingIntake::from_reader(
        Cursor::new(LISTINGS),
        &table,
        &AcceptancePolicy::standard(),
        standard_points(),
    )
    .expect("intake succeeds");

    // The glitched price and the apartment are excluded up front.
    assert_eq!(collection.len(), 2);

    let lombok = collection.filter_eq("district", "Lombok");
    assert_eq!(lombok.len(), 1);
    let house = lombok.iter().next().expect("lombok house present");
    assert_eq!(house.district(), "Lombok");
    assert!((house.price_per_m2() - 2083.33).abs() < 0.01);
    // The patched coordinates, not the reference row, drive the distances.
    assert_eq!(house.location().coordinate.lat, 52.091177);
    assert_eq!(house.location().coordinate.lon, 5.098962);

    let options = ReportOptions {
        districts: vec!["Lombok".to_string(), "Zuilen2".to_string()],
        top_n: 20,
        rank_field: "magic".to_string(),
    };
    let renderer = ReportRenderer::new(true);
    let mut out = Vec::new();
    renderer
        .render(&collection, &options, &mut out)
        .expect("report renders");
    let text = String::from_utf8(out).expect("report is utf-8");

    // 3554 is relabeled Zuilen2 by the district patch table.
    assert!(text.contains("District [Lombok]"));
    assert!(text.contains("District [Zuilen2]"));
    assert!(text.contains("Amsterdamsestraatweg 900, Zuilen2"));

    // 250000 is in the cheap band, 390000 in the expensive band.
    assert!(text.contains("\x1b[32mKanaalstraat 1, Lombok"));
    assert!(text.contains("\x1b[2m\x1b[31mAmsterdamsestraatweg 900"));

    // Rejected records leave no trace in the report.
    assert!(!text.contains("Foutstraat"));
    assert!(!text.contains("Arthur van Schendelstraat"));

    // URLs follow their listing, dimmed.
    assert!(text.contains("   \x1b[2mhttp://example.test/lombok-house\x1b[0m"));
}

#[test]
fn report_without_color_contains_no_escape_codes() {
    let table = PostalCodeTable::from_reader(Cursor::new(POSTAL_CODES)).expect("table loads");
    let collection = ListingIntake::from_reader(
        Cursor::new(LISTINGS),
        &table,
        &AcceptancePolicy::standard(),
        standard_points(),
    )
    .expect("intake succeeds");

    let options = ReportOptions {
        districts: vec!["Lombok".to_string()],
        top_n: 20,
        rank_field: "magic".to_string(),
    };
    let renderer = ReportRenderer::new(false);
    let mut out = Vec::new();
    renderer
        .render(&collection, &options, &mut out)
        .expect("report renders");
    let text = String::from_utf8(out).expect("report is utf-8");
    assert!(!text.contains('\x1b'));
    assert!(text.contains("Kanaalstraat 1, Lombok"));
}

#[test]
fn empty_district_sections_still_render_their_header() {
    let table = PostalCodeTable::from_reader(Cursor::new(POSTAL_CODES)).expect("table loads");
    let collection = ListingIntake::from_reader(
        Cursor::new("[]"),
        &table,
        &AcceptancePolicy::standard(),
        standard_points(),
    )
    .expect("intake succeeds");
    assert!(collection.is_empty());

    let renderer = ReportRenderer::new(false);
    let mut out = Vec::new();
    renderer
        .render(&collection, &ReportOptions::standard(), &mut out)
        .expect("report renders");
    let text = String::from_utf8(out).expect("report is utf-8");
    for district in ["Zuilen", "Zuilen2", "Zuilen3", "Ondiep", "Hogeweide"] {
        assert!(text.contains(&format!("District [{district}]")));
    }
}
