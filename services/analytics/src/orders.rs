//! Weekly orders series
//!
//! Placeholder data: the series is fixed and does not read storage.

use sales_types::analytics::OrdersPoint;

/// `(label, orders, completed)` for each week.
const WEEKLY_ORDERS: [(&str, u64, u64); 4] = [
    ("Week 1", 412, 398),
    ("Week 2", 445, 430),
    ("Week 3", 478, 465),
    ("Week 4", 512, 495),
];

/// The fixed four-week series.
pub fn weekly_orders() -> Vec<OrdersPoint> {
    WEEKLY_ORDERS
        .iter()
        .map(|&(date, orders, completed)| OrdersPoint {
            date: date.to_string(),
            orders,
            completed,
        })
        .collect()
}
