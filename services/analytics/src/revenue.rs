//! Monthly revenue series
//!
//! Buckets records by calendar month and sums revenue and order counts
//! per bucket. The bucket key is the month alone: a January 2023 sale and
//! a January 2024 sale land in the same "Jan" bucket.
//!
//! Output follows the calendar sequence Jan..Dec and only contains months
//! that have at least one record.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use sales_types::analytics::RevenuePoint;
use sales_types::record::SalesRecord;

use crate::error::AnalyticsError;

/// Month abbreviations indexed by zero-based month.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Running totals for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MonthBucket {
    revenue: Decimal,
    orders: u64,
}

impl MonthBucket {
    fn update(&mut self, amount: Decimal) -> Result<(), AnalyticsError> {
        self.revenue = self
            .revenue
            .checked_add(amount)
            .ok_or(AnalyticsError::AmountOverflow)?;
        self.orders += 1;
        Ok(())
    }
}

/// Aggregates records into month buckets.
#[derive(Debug, Default)]
pub struct MonthlyRevenueBuilder {
    /// Keyed by zero-based month (BTreeMap for calendar order).
    buckets: BTreeMap<u32, MonthBucket>,
}

impl MonthlyRevenueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record. Fails if its date is not `YYYY-MM-DD` or the month
    /// total overflows.
    pub fn process_record(&mut self, record: &SalesRecord) -> Result<(), AnalyticsError> {
        let month = record.calendar_date()?.month0();
        self.buckets.entry(month).or_default().update(record.amount)
    }

    /// Buckets in calendar order.
    pub fn build(self) -> Vec<RevenuePoint> {
        self.buckets
            .into_iter()
            .map(|(month, bucket)| RevenuePoint {
                month: MONTH_ABBREVIATIONS[month as usize].to_string(),
                revenue: bucket.revenue,
                orders: bucket.orders,
            })
            .collect()
    }
}

/// Revenue and order count per month present in the data.
pub fn monthly_revenue(records: &[SalesRecord]) -> Result<Vec<RevenuePoint>, AnalyticsError> {
    let mut builder = MonthlyRevenueBuilder::new();
    for record in records {
        builder.process_record(record)?;
    }
    Ok(builder.build())
}
