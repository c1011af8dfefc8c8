//! FILENAME: tests/common/mod.rs
//! Fixtures for pivot-engine integration tests.

#![allow(dead_code)]

use catalog::{PriceSnapshot, PriceTier, ProductRecord, VisibilityConfig, VisibilitySetting};

/// A small catalog, pre-sorted by (make, model, position) like the store
/// returns it.
pub struct CatalogFixture;

impl CatalogFixture {
    /// (make, model, variant, position, category, brand, part number, distributor, retail)
    pub fn data() -> Vec<(&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, Option<&'static str>, f64, f64)> {
        vec![
            ("Honda", "City", "Standard", "Carset (4 pcs)", "Coil Spring", "Proflex", Some("PF-CITY"), 200.0, 320.0),
            ("Honda", "City", "Standard", "Front (2 pcs)", "Shock Absorber", "KYB", Some("KYB-339"), 80.0, 120.0),
            ("Honda", "City", "Standard", "Front (2 pcs)", "Shock Absorber", "Monroe", None, 75.0, 0.0),
            ("Honda", "City", "Heavy Duty", "Rear (2 pcs)", "Shock Absorber", "KYB", Some("KYB-341"), 90.0, 140.0),
            ("Honda", "Jazz", "Standard", "Front (2 pcs)", "Shock Absorber", "Tokico", None, 0.0, 110.0),
            ("Proton", "Saga", "Standard", "Front (2 pcs)", "Shock Absorber", "KYB", Some("KYB-501"), 60.0, 95.0),
            ("Proton", "Saga", "Standard", "Front (2 pcs)", "Shock Absorber", "Tokico", None, 55.0, 90.0),
            ("Proton", "Saga", "Standard", "Rear (2 pcs)", "Shock Absorber", "Monroe", None, 58.0, 92.0),
        ]
    }

    pub fn records() -> Vec<ProductRecord> {
        let mut records: Vec<ProductRecord> = Self::data()
            .into_iter()
            .map(|(make, model, variant, position, category, brand, part, distributor, retail)| {
                let mut record = ProductRecord::new(make, model, variant, position, brand)
                    .with_category(category)
                    .with_price(
                        PriceSnapshot::new()
                            .with(PriceTier::Distributor, distributor)
                            .with(PriceTier::Retail, retail),
                    );
                if let Some(part) = part {
                    record = record.with_part_number(part);
                }
                record
            })
            .collect();

        // A listing with no price row at all.
        records.push(
            ProductRecord::new("Toyota", "Vios", "Standard", "Front (2 pcs)", "Bilstein")
                .with_category("Shock Absorber"),
        );
        records
    }

    /// Distributor and retail visible, retail first.
    pub fn visibility() -> VisibilityConfig {
        VisibilityConfig::new(vec![
            VisibilitySetting::new("show_retail", true),
            VisibilitySetting::new("show_agent", false),
            VisibilitySetting::new("show_distributor", true),
            VisibilitySetting::new("show_online", false),
        ])
    }

    pub fn queries() -> Vec<&'static str> {
        vec!["", "honda", "SAGA", "kyb", "monroe", "kyb-3", "pf-", "zzz"]
    }
}

/// Two brands quoting the same Honda City row, one with a zero retail price.
pub fn honda_city_pair() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("Honda", "City", "Standard", "Front", "KYB")
            .with_category("Shock Absorber")
            .with_price(PriceSnapshot::new().with(PriceTier::Retail, 120.0)),
        ProductRecord::new("Honda", "City", "Standard", "Front", "Monroe")
            .with_category("Shock Absorber")
            .with_price(PriceSnapshot::new().with(PriceTier::Retail, 0.0)),
    ]
}
