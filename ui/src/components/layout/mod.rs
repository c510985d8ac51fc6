pub mod bottom_nav;
pub mod header;
pub mod main_layout;

pub use bottom_nav::BottomNav;
pub use header::Header;
pub use main_layout::MainLayout;
