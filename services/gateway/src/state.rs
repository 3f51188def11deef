use analytics::AnalyticsService;

#[derive(Clone)]
pub struct AppState {
    pub analytics: AnalyticsService,
}

impl AppState {
    pub fn new(analytics: AnalyticsService) -> Self {
        Self { analytics }
    }
}
