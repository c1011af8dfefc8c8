//! FILENAME: core/pivot-engine/src/filter.rs
//! Search filter applied to the raw batch before grouping.
//!
//! A record matches when the lower-cased query is a substring of its make,
//! model, brand name or part number (when it has one and part numbers are
//! searched). The empty query matches everything.

use catalog::ProductRecord;

/// Case-insensitive substring predicate over a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    needle: String,
    part_numbers: bool,
}

impl RecordFilter {
    pub fn new(query: &str) -> Self {
        RecordFilter {
            needle: query.to_lowercase(),
            part_numbers: true,
        }
    }

    /// Turns part number matching on or off.
    pub fn with_part_numbers(mut self, part_numbers: bool) -> Self {
        self.part_numbers = part_numbers;
        self
    }

    /// True when every record passes.
    pub fn is_identity(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &ProductRecord) -> bool {
        if self.is_identity() {
            return true;
        }
        let contains = |field: &str| field.to_lowercase().contains(&self.needle);
        contains(&record.make)
            || contains(&record.model)
            || contains(&record.brand_name)
            || (self.part_numbers && record.part_number.as_deref().is_some_and(contains))
    }

    /// Records passing this filter, in input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a ProductRecord>
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Records matching `query`, in input order.
pub fn filter_records<'a, I>(records: I, query: &str) -> Vec<&'a ProductRecord>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    RecordFilter::new(query).apply(records)
}
