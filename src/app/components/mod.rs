//! Shared UI components for the portfolio.

pub mod icon;
pub mod layout;
pub mod navbar;
pub mod sidebar;

pub use icon::Icon;
pub use layout::Layout;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
