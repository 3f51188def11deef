//! Summary metrics
//!
//! Totals over the whole record set, plus a half-over-half comparison:
//! records are sorted by date and split at `len / 2`. The first half is
//! "previous", the second half "current" (it takes the extra record when
//! the count is odd).
//!
//! Known limitations kept as-is:
//! - `revenue.current` and `orders.current` are the totals over all
//!   records, while `previous` is the first half only.
//! - The customer dimension is not split; `current == previous` and the
//!   trend is always neutral.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use sales_types::analytics::{CountMetric, RevenueMetric, SalesMetrics, Trend};
use sales_types::record::SalesRecord;

use crate::error::AnalyticsError;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Decimal places of the reported percent change.
pub const CHANGE_DECIMAL_PLACES: u32 = 1;

/// Compute summary metrics for a record set.
///
/// Fails only when a revenue sum leaves the `Decimal` range.
pub fn compute_metrics(records: &[SalesRecord]) -> Result<SalesMetrics, AnalyticsError> {
    if records.is_empty() {
        return Ok(SalesMetrics::empty());
    }

    let total_revenue = total_amount(records.iter())?;
    let total_orders = records.len() as u64;
    let unique_customers = records
        .iter()
        .map(|r| r.customer_name.as_str())
        .collect::<BTreeSet<_>>()
        .len() as u64;

    let sorted = sorted_by_date(records);
    let (previous, current) = split_halves(&sorted);

    let prev_revenue = total_amount(previous.iter().copied())?;
    let curr_revenue = total_amount(current.iter().copied())?;
    let revenue_change = percent_change(curr_revenue, prev_revenue);

    let prev_orders = previous.len() as u64;
    let curr_orders = current.len() as u64;
    let orders_change = percent_change(Decimal::from(curr_orders), Decimal::from(prev_orders));

    Ok(SalesMetrics {
        revenue: RevenueMetric {
            current: total_revenue,
            previous: prev_revenue,
            change: round_change(revenue_change),
            trend: Trend::from_change(revenue_change),
        },
        orders: CountMetric {
            current: total_orders,
            previous: prev_orders,
            change: round_change(orders_change),
            trend: Trend::from_change(orders_change),
        },
        customers: CountMetric {
            current: unique_customers,
            previous: unique_customers,
            change: Decimal::ZERO,
            trend: Trend::Neutral,
        },
    })
}

/// Records ordered by ISO date ascending; ties keep storage order.
pub fn sorted_by_date(records: &[SalesRecord]) -> Vec<&SalesRecord> {
    let mut sorted: Vec<&SalesRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// Split at the floor midpoint: `(previous, current)`.
pub fn split_halves<T>(sorted: &[T]) -> (&[T], &[T]) {
    sorted.split_at(sorted.len() / 2)
}

/// `(current - previous) / previous * 100`, or zero when `previous` is not
/// positive.
///
/// A change too large for `Decimal` saturates at `Decimal::MAX` (or `MIN`),
/// keeping its sign.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let delta = current.saturating_sub(previous);
    delta
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .unwrap_or(if delta.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Round half to even, one decimal place.
pub fn round_change(change: Decimal) -> Decimal {
    change.round_dp(CHANGE_DECIMAL_PLACES)
}

fn total_amount<'a>(
    mut records: impl Iterator<Item = &'a SalesRecord>,
) -> Result<Decimal, AnalyticsError> {
    records.try_fold(Decimal::ZERO, |total, r| {
        total
            .checked_add(r.amount)
            .ok_or(AnalyticsError::AmountOverflow)
    })
}
