pub mod left;
pub mod nav;
pub mod sidebar;

pub use left::Left;
pub use sidebar::Sidebar;
