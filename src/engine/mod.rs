mod dashboard_engine;
mod errors;

pub use dashboard_engine::DashboardEngine;
pub use errors::DashboardError;
