pub mod admin;
pub mod purchase;
pub mod sales;

pub use admin::AdminDashboard;
pub use purchase::PurchaseDashboard;
pub use sales::SalesDashboard;
