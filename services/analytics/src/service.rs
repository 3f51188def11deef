//! Analytics service over a sales store
//!
//! Every call re-fetches from storage; there is no cache and no shared
//! mutable state, so one instance can serve concurrent requests.

use std::sync::Arc;

use persistence::SalesStore;
use sales_types::analytics::{OrderView, OrdersPoint, RevenuePoint, SalesMetrics};
use sales_types::record::SalesRecord;
use tracing::{debug, warn};

use crate::error::AnalyticsError;
use crate::metrics::compute_metrics;
use crate::orders::weekly_orders;
use crate::recent::{recent_orders, RECENT_ORDERS_LIMIT};
use crate::revenue::monthly_revenue;
use crate::DEFAULT_FETCH_LIMIT;

/// Read-only analytics over the current record set.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn SalesStore>,
    fetch_limit: usize,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self {
            store,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }

    /// Override the bounded fetch size.
    pub fn with_fetch_limit(mut self, fetch_limit: usize) -> Self {
        self.fetch_limit = fetch_limit;
        self
    }

    /// Summary metrics over all records.
    pub async fn metrics(&self) -> Result<SalesMetrics, AnalyticsError> {
        let records = self.fetch_records().await?;
        compute_metrics(&records)
    }

    /// Revenue per month bucket, Jan..Dec.
    pub async fn revenue_series(&self) -> Result<Vec<RevenuePoint>, AnalyticsError> {
        let records = self.fetch_records().await?;
        monthly_revenue(&records)
    }

    /// Fixed weekly orders series.
    pub fn orders_series(&self) -> Vec<OrdersPoint> {
        weekly_orders()
    }

    /// The most recent orders, newest first.
    pub async fn recent_orders(&self) -> Result<Vec<OrderView>, AnalyticsError> {
        let records = self.store.fetch_recent(RECENT_ORDERS_LIMIT).await?;
        Ok(recent_orders(records))
    }

    async fn fetch_records(&self) -> Result<Vec<SalesRecord>, AnalyticsError> {
        let records = self.store.fetch_all(self.fetch_limit).await?;

        if records.len() >= self.fetch_limit {
            warn!(
                fetch_limit = self.fetch_limit,
                "Fetch limit reached; analytics computed over a truncated record set"
            );
        }
        debug!(count = records.len(), "Fetched records for analytics");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::MemorySalesStore;
    use rust_decimal::Decimal;
    use sales_types::analytics::Trend;
    use sales_types::ids::OrderId;

    fn record(id: &str, customer: &str, amount: i64, date: &str) -> SalesRecord {
        SalesRecord {
            order_id: OrderId::new(id),
            customer_name: customer.to_string(),
            amount: Decimal::from(amount),
            status: "completed".to_string(),
            date: date.to_string(),
        }
    }

    fn service_with(records: Vec<SalesRecord>) -> (Arc<MemorySalesStore>, AnalyticsService) {
        let store = Arc::new(MemorySalesStore::with_records(records));
        let service = AnalyticsService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_metrics_on_empty_store() {
        let (_, service) = service_with(Vec::new());
        assert_eq!(service.metrics().await.unwrap(), SalesMetrics::empty());
    }

    #[tokio::test]
    async fn test_metrics_from_store() {
        let (_, service) = service_with(vec![
            record("1", "Acme", 100, "2024-01-01"),
            record("2", "Acme", 300, "2024-02-01"),
        ]);
        let metrics = service.metrics().await.unwrap();
        assert_eq!(metrics.revenue.current, Decimal::from(400));
        assert_eq!(metrics.revenue.previous, Decimal::from(100));
        assert_eq!(metrics.revenue.change, Decimal::from(200));
        assert_eq!(metrics.revenue.trend, Trend::Up);
        assert_eq!(metrics.customers.current, 1);
    }

    #[tokio::test]
    async fn test_fetch_limit_bounds_records() {
        let records = (0..10)
            .map(|i| record(&format!("{i}"), "Acme", 1, "2024-01-01"))
            .collect();
        let (_, service) = service_with(records);
        let service = service.with_fetch_limit(4);
        let metrics = service.metrics().await.unwrap();
        assert_eq!(metrics.orders.current, 4);
    }

    #[tokio::test]
    async fn test_recent_orders_seven_records() {
        let records = [
            "2024-01-03",
            "2024-01-07",
            "2024-01-01",
            "2024-01-05",
            "2024-01-02",
            "2024-01-06",
            "2024-01-04",
        ]
        .iter()
        .enumerate()
        .map(|(i, date)| record(&format!("ORD-{i}"), "Acme", 10, date))
        .collect();
        let (_, service) = service_with(records);

        let recent = service.recent_orders().await.unwrap();
        let dates: Vec<&str> = recent.iter().map(|o| o.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2024-01-07", "2024-01-06", "2024-01-05", "2024-01-04", "2024-01-03"]
        );
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let (store, service) = service_with(vec![record("1", "Acme", 1, "2024-01-01")]);
        store.set_fail_on_read(true).await;
        assert!(matches!(
            service.revenue_series().await,
            Err(AnalyticsError::Storage(_))
        ));
        assert!(matches!(
            service.recent_orders().await,
            Err(AnalyticsError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_revenue_series_rejects_malformed_stored_date() {
        let (_, service) = service_with(vec![record("1", "Acme", 1, "January 5th")]);
        assert!(matches!(
            service.revenue_series().await,
            Err(AnalyticsError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_amount_overflow_surfaces() {
        let mut first = record("1", "Acme", 0, "2024-01-01");
        first.amount = Decimal::MAX;
        let second = record("2", "Acme", 1, "2024-01-02");
        let (_, service) = service_with(vec![first, second]);

        assert!(matches!(
            service.metrics().await,
            Err(AnalyticsError::AmountOverflow)
        ));
        assert!(matches!(
            service.revenue_series().await,
            Err(AnalyticsError::AmountOverflow)
        ));
    }

    #[test]
    fn test_orders_series_is_static() {
        let (_, service) = service_with(Vec::new());
        assert_eq!(service.orders_series().len(), 4);
    }
}
