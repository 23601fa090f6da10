pub mod queue;
pub mod ui;

pub use ui::dashboard::PurchaseDashboard;
