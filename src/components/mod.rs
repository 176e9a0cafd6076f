pub mod footer;
pub mod header;
pub mod layout;

pub use footer::FooterComponent;
pub use header::{HeaderComponent, NavLink};
pub use layout::LayoutComponent;
