//! FILENAME: tests/test_pivot.rs
//! Integration tests for the filter -> pivot -> matrix pipeline.

mod common;

use catalog::{PriceSnapshot, PriceTier, ProductRecord, TierDescriptor, VisibilityConfig};
use common::{honda_city_pair, CatalogFixture};
use pivot_engine::{
    calculate_catalog_view, calculate_matrix, calculate_pivot, calculate_print_sheet,
    filter_records, resolve_cell, row_key, CellState, PivotDefinition, RowGrouping, ViewMode,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn homepage_definition() -> PivotDefinition {
    PivotDefinition::homepage(&CatalogFixture::visibility())
}

fn retail_only() -> PivotDefinition {
    PivotDefinition::new(vec![TierDescriptor::new(PriceTier::Retail, 0)], RowGrouping::WithCategory)
}

// ============================================================================
// PIVOT PROPERTIES
// ============================================================================

#[test]
fn test_pivot_is_idempotent() {
    let records = CatalogFixture::records();
    let definition = homepage_definition();

    for query in CatalogFixture::queries() {
        let first = calculate_pivot(filter_records(&records, query), &definition);
        let second = calculate_pivot(filter_records(&records, query), &definition);
        assert_eq!(first, second, "query {:?}", query);

        for mode in [ViewMode::TierMajor, ViewMode::BrandMajor] {
            assert_eq!(
                calculate_catalog_view(&records, query, &definition, mode),
                calculate_catalog_view(&records, query, &definition, mode)
            );
        }
    }
}

#[test]
fn test_brand_completeness_and_no_ghost_brands() {
    let records = CatalogFixture::records();
    let definition = homepage_definition();

    for query in CatalogFixture::queries() {
        let filtered = filter_records(&records, query);
        let result = calculate_pivot(filtered.iter().copied(), &definition);

        for record in &filtered {
            assert!(result.brands.contains(&record.brand_name), "query {:?}", query);
        }
        for brand in &result.brands {
            assert!(
                filtered.iter().any(|r| &r.brand_name == brand),
                "ghost brand {} for query {:?}",
                brand,
                query
            );
        }

        let mut sorted = result.brands.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, result.brands);
    }
}

#[test]
fn test_cell_conservation() {
    let records = CatalogFixture::records();
    let definition = homepage_definition();

    for query in CatalogFixture::queries() {
        let filtered = filter_records(&records, query);
        let result = calculate_pivot(filtered.iter().copied(), &definition);

        for record in &filtered {
            let identity = row_key(record, definition.grouping).unwrap();
            let row = result.row(&identity).unwrap();
            assert_eq!(row.cells_by_brand.get(&record.brand_name), Some(&record.price));
        }
    }
}

#[test]
fn test_cell_conservation_last_write_wins() {
    let mut records = honda_city_pair();
    records.push(
        ProductRecord::new("Honda", "City", "Standard", "Front", "KYB")
            .with_category("Shock Absorber")
            .with_price(PriceSnapshot::new().with(PriceTier::Retail, 125.0)),
    );

    let result = calculate_pivot(&records, &retail_only());
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].cells_by_brand.get("KYB"), Some(&records[2].price));
}

#[test]
fn test_axis_consistency() {
    let records = CatalogFixture::records();
    let definition = PivotDefinition::homepage(&VisibilityConfig::canonical(true));

    for query in CatalogFixture::queries() {
        let tier_major = calculate_catalog_view(&records, query, &definition, ViewMode::TierMajor);
        let brand_major = calculate_catalog_view(&records, query, &definition, ViewMode::BrandMajor);

        assert_eq!(tier_major.rows.len(), brand_major.rows.len());
        assert_eq!(tier_major.column_count(), tier_major.brands.len() * tier_major.tiers.len());
        assert_eq!(tier_major.column_count(), brand_major.column_count());

        for row in 0..tier_major.rows.len() {
            for brand in &tier_major.brands {
                for tier in PriceTier::ALL {
                    let a = tier_major.cell(row, brand, tier).unwrap();
                    let b = brand_major.cell(row, brand, tier).unwrap();
                    assert_eq!(a, b, "row {} brand {} tier {}", row, brand, tier);
                }
            }
        }
    }
}

#[test]
fn test_filter_monotonicity() {
    let records = CatalogFixture::records();
    let definition = homepage_definition();
    let all = calculate_pivot(&records, &definition);

    for query in CatalogFixture::queries() {
        let narrowed = calculate_pivot(filter_records(&records, query), &definition);

        for brand in &narrowed.brands {
            assert!(all.brands.contains(brand));
        }
        for row in &narrowed.rows {
            let full_row = all.row(&row.identity).unwrap();
            for brand in row.cells_by_brand.keys() {
                assert!(full_row.has_record(brand));
            }
        }
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_honda_city_scenario() {
    let records = honda_city_pair();
    let definition = retail_only();

    let result = calculate_pivot(&records, &definition);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.brands, vec!["KYB", "Monroe"]);
    let row = &result.rows[0];
    assert_eq!(row.cells_by_brand.len(), 2);
    assert_eq!(row.price("KYB").and_then(|p| p.get(PriceTier::Retail)), Some(120.0));
    assert_eq!(row.price("Monroe").and_then(|p| p.get(PriceTier::Retail)), Some(0.0));

    let filtered = calculate_pivot(filter_records(&records, "monroe"), &definition);
    assert_eq!(filtered.rows.len(), 1);
    assert_eq!(filtered.brands, vec!["Monroe"]);
    assert_eq!(resolve_cell(&filtered.rows[0], "Monroe", PriceTier::Retail), CellState::NotSet);

    let view = calculate_matrix(&filtered, &definition, ViewMode::TierMajor);
    assert_eq!(view.cell(0, "Monroe", PriceTier::Retail).unwrap().formatted_value, "N/A");
    assert!(view.cell(0, "KYB", PriceTier::Retail).is_none());
}

#[test]
fn test_homepage_matrix() {
    let records = CatalogFixture::records();
    let view = calculate_catalog_view(&records, "", &homepage_definition(), ViewMode::TierMajor);

    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.rows[0].identity.position, "Carset (4 pcs)");
    assert_eq!(view.rows[0].identity.category.as_deref(), Some("Coil Spring"));
    assert_eq!(view.brands, vec!["Bilstein", "KYB", "Monroe", "Proflex", "Tokico"]);
    let labels: Vec<&str> = view.header_groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Retail", "Distributor"]);
    assert!(view.header_groups.iter().all(|g| g.span == 5));

    let vios = view.rows.iter().position(|r| r.identity.model == "Vios").unwrap();
    assert_eq!(view.cell(vios, "Bilstein", PriceTier::Retail).unwrap().state, CellState::Absent);

    let jazz = view.rows.iter().position(|r| r.identity.model == "Jazz").unwrap();
    assert_eq!(view.cell(jazz, "Tokico", PriceTier::Distributor).unwrap().state, CellState::NotSet);
    let retail = view.cell(jazz, "Tokico", PriceTier::Retail).unwrap();
    assert_eq!(retail.state, CellState::Price(110.0));
    assert!(retail.is_emphasized);
}

#[test]
fn test_search_drops_brands() {
    let records = CatalogFixture::records();
    let view = calculate_catalog_view(&records, "saga", &homepage_definition(), ViewMode::BrandMajor);

    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.brands, vec!["KYB", "Monroe", "Tokico"]);
    assert_eq!(view.header_labels.len(), 6);

    let none = calculate_catalog_view(&records, "zzz", &homepage_definition(), ViewMode::BrandMajor);
    assert!(none.is_empty());
    assert!(none.brands.is_empty());
    assert_eq!(none.column_count(), 0);
}

#[test]
fn test_print_sheet() {
    let records = CatalogFixture::records();
    let sheet = calculate_print_sheet(&records, "");

    assert_eq!(sheet.mode, ViewMode::BrandMajor);
    assert_eq!(sheet.row_header_label, "Model / Specification");
    assert_eq!(sheet.rows.len(), 7);
    assert!(sheet.rows.iter().all(|r| r.identity.category.is_none()));
    assert_eq!(&sheet.header_labels[..2], &["Cost".to_string(), "RRP".to_string()]);
    assert!(sheet.header_groups.iter().all(|g| g.span == 2));

    let city_front = sheet
        .rows
        .iter()
        .position(|r| r.identity.model == "City" && r.identity.position == "Front (2 pcs)")
        .unwrap();
    let monroe_city = sheet.cell(city_front, "Monroe", PriceTier::Retail).unwrap();
    assert_eq!(monroe_city.state, CellState::NotSet);
    assert_eq!(monroe_city.formatted_value, "-");
    assert!(!monroe_city.is_emphasized);
    assert_eq!(sheet.cell(city_front, "Monroe", PriceTier::Distributor).unwrap().formatted_value, "75");
    assert_eq!(sheet.cell(city_front, "Proflex", PriceTier::Distributor).unwrap().state, CellState::Absent);
}

#[test]
fn test_print_sheet_ignores_category() {
    let records = vec![
        ProductRecord::new("Honda", "City", "Standard", "Front", "KYB").with_category("Shock Absorber"),
        ProductRecord::new("Honda", "City", "Standard", "Front", "Proflex").with_category("Coil Spring"),
    ];

    let homepage = calculate_catalog_view(&records, "", &homepage_definition(), ViewMode::TierMajor);
    assert_eq!(homepage.rows.len(), 2);

    let sheet = calculate_print_sheet(&records, "");
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.brands, vec!["KYB", "Proflex"]);
}

#[test]
fn test_print_sheet_search_skips_part_numbers() {
    let records = CatalogFixture::records();

    let homepage = calculate_catalog_view(&records, "pf-city", &homepage_definition(), ViewMode::TierMajor);
    assert_eq!(homepage.rows.len(), 1);
    assert_eq!(homepage.brands, vec!["Proflex"]);

    let sheet = calculate_print_sheet(&records, "pf-city");
    assert!(sheet.is_empty());
    assert!(sheet.brands.is_empty());

    let by_brand = calculate_print_sheet(&records, "proflex");
    assert_eq!(by_brand.rows.len(), 1);
}

#[test]
fn test_malformed_records_are_counted() {
    let mut records = CatalogFixture::records();
    records.push(ProductRecord::new("Honda", "City", "", "Front (2 pcs)", "KYB").with_category("Shock Absorber"));

    let view = calculate_catalog_view(&records, "", &homepage_definition(), ViewMode::TierMajor);
    assert_eq!(view.skipped_count, 1);
    assert_eq!(view.rows.len(), 7);
}

#[test]
fn test_no_visible_tiers() {
    let records = CatalogFixture::records();
    let definition = PivotDefinition::homepage(&VisibilityConfig::canonical(false));

    let view = calculate_catalog_view(&records, "", &definition, ViewMode::TierMajor);
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.column_count(), 0);
    assert!(view.header_groups.is_empty());
}
