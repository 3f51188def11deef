pub mod analytics;
pub mod root;
