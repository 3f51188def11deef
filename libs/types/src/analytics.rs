//! Derived analytics views
//!
//! None of these are persisted; they are recomputed from the record set
//! on every read. Monetary values serialize as plain JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::record::SalesRecord;

/// Qualitative direction of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// `Up` for a strictly positive change, `Down` otherwise.
    ///
    /// A change of exactly zero is `Down`, never `Neutral`.
    pub fn from_change(change: Decimal) -> Self {
        if change > Decimal::ZERO {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Revenue dimension of the summary metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueMetric {
    #[serde(with = "rust_decimal::serde::float")]
    pub current: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub previous: Decimal,
    /// Percent change, one decimal place
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
    pub trend: Trend,
}

/// Count dimension (orders, customers) of the summary metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMetric {
    pub current: u64,
    pub previous: u64,
    /// Percent change, one decimal place
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
    pub trend: Trend,
}

impl RevenueMetric {
    pub fn zero() -> Self {
        Self {
            current: Decimal::ZERO,
            previous: Decimal::ZERO,
            change: Decimal::ZERO,
            trend: Trend::Neutral,
        }
    }
}

impl CountMetric {
    pub fn zero() -> Self {
        Self {
            current: 0,
            previous: 0,
            change: Decimal::ZERO,
            trend: Trend::Neutral,
        }
    }
}

/// Aggregate revenue/orders/customer metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesMetrics {
    pub revenue: RevenueMetric,
    pub orders: CountMetric,
    pub customers: CountMetric,
}

impl SalesMetrics {
    /// Metrics for an empty record set: all zero, all neutral.
    pub fn empty() -> Self {
        Self {
            revenue: RevenueMetric::zero(),
            orders: CountMetric::zero(),
            customers: CountMetric::zero(),
        }
    }
}

/// One month bucket of the revenue series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Three-letter month abbreviation, e.g. "Jan"
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    pub orders: u64,
}

/// One week of the orders series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersPoint {
    pub date: String,
    pub orders: u64,
    pub completed: u64,
}

/// Display shape of a recent order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    pub id: OrderId,
    pub customer: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: String,
    pub date: String,
}

impl From<SalesRecord> for OrderView {
    fn from(record: SalesRecord) -> Self {
        Self {
            id: record.order_id,
            customer: record.customer_name,
            amount: record.amount,
            status: record.status,
            date: record.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trend_boundary() {
        assert_eq!(Trend::from_change(Decimal::new(1, 1)), Trend::Up);
        assert_eq!(Trend::from_change(Decimal::ZERO), Trend::Down);
        assert_eq!(Trend::from_change(Decimal::new(-5, 0)), Trend::Down);
    }

    #[test]
    fn test_empty_metrics_shape() {
        let json = serde_json::to_value(SalesMetrics::empty()).unwrap();
        for dim in ["revenue", "orders", "customers"] {
            assert_eq!(json[dim]["trend"], json!("neutral"));
            assert_eq!(json[dim]["change"], json!(0.0));
        }
        assert_eq!(json["orders"]["current"], json!(0));
    }

    #[test]
    fn test_order_view_from_record() {
        let record = SalesRecord {
            order_id: OrderId::new("ORD-9"),
            customer_name: "Initech".to_string(),
            amount: Decimal::new(4200, 2),
            status: "pending".to_string(),
            date: "2024-05-01".to_string(),
        };
        let view = OrderView::from(record);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "ORD-9",
                "customer": "Initech",
                "amount": 42.0,
                "status": "pending",
                "date": "2024-05-01"
            })
        );
    }
}
