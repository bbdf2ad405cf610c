pub mod aggregation_service;
pub mod chart_service;
pub mod filter_service;
pub mod join_service;
pub mod normalize_service;
