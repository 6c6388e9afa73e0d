//! Year-partitioned record sets.

use std::collections::BTreeMap;

use crate::PriceRecord;

/// Synthetic partition key used for daily conversions.
pub const DAILY_PARTITION: i32 = 0;

/// Records from one input file grouped by calendar year.
///
/// Minute conversions key each record by the year of its timestamp. Daily
/// conversions put every record under [`DAILY_PARTITION`] and carry the real
/// year in [`PriceRecord::value`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearPartitions {
    years: BTreeMap<i32, Vec<PriceRecord>>,
}

impl YearPartitions {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            years: BTreeMap::new(),
        }
    }

    /// Creates a daily set holding `records` under [`DAILY_PARTITION`].
    #[must_use]
    pub fn daily(records: Vec<PriceRecord>) -> Self {
        let mut years = BTreeMap::new();
        years.insert(DAILY_PARTITION, records);
        Self { years }
    }

    /// Appends a record to the given year's partition.
    pub fn push(&mut self, year: i32, record: PriceRecord) {
        self.years.entry(year).or_default().push(record);
    }

    /// Returns the records of one partition.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&[PriceRecord]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// Returns the partition keys in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Returns the number of partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns true if there are no partitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Returns the number of records across all partitions.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    /// Sorts every partition by date, newest first.
    ///
    /// The sort is unstable; records with equal dates may appear in any order.
    pub fn sort_descending(&mut self) {
        for records in self.years.values_mut() {
            records.sort_unstable_by(|a, b| b.date.total_cmp(&a.date));
        }
    }

    /// Iterates over `(year, records)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[PriceRecord])> + '_ {
        self.years.iter().map(|(year, records)| (*year, records.as_slice()))
    }
}

impl IntoIterator for YearPartitions {
    type Item = (i32, Vec<PriceRecord>);
    type IntoIter = std::collections::btree_map::IntoIter<i32, Vec<PriceRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.into_iter()
    }
}
