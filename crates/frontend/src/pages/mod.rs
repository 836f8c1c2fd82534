//! Page components.

mod class_reports;
mod dashboard;
mod tasks;

pub use class_reports::ReportsPage;
pub use dashboard::DashboardPage;
pub use tasks::TasksPage;
