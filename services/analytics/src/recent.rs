//! Recent orders view

use sales_types::analytics::OrderView;
use sales_types::record::SalesRecord;

/// Number of orders in the recent-orders view.
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Map date-descending records to the display shape, keeping at most
/// `RECENT_ORDERS_LIMIT`.
pub fn recent_orders(records: Vec<SalesRecord>) -> Vec<OrderView> {
    records
        .into_iter()
        .take(RECENT_ORDERS_LIMIT)
        .map(OrderView::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sales_types::ids::OrderId;

    fn record(id: &str, date: &str) -> SalesRecord {
        SalesRecord {
            order_id: OrderId::new(id),
            customer_name: format!("Customer {id}"),
            amount: Decimal::new(1999, 2),
            status: "shipped".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_recent_orders_caps_at_limit() {
        let records = (1..=7)
            .map(|i| record(&format!("ORD-{i}"), &format!("2024-01-0{i}")))
            .collect();
        assert_eq!(recent_orders(records).len(), RECENT_ORDERS_LIMIT);
    }

    #[test]
    fn test_recent_orders_maps_fields() {
        let views = recent_orders(vec![record("ORD-1", "2024-02-02")]);
        assert_eq!(views[0].id.as_str(), "ORD-1");
        assert_eq!(views[0].customer, "Customer ORD-1");
        assert_eq!(views[0].amount, Decimal::new(1999, 2));
        assert_eq!(views[0].status, "shipped");
        assert_eq!(views[0].date, "2024-02-02");
    }
}
