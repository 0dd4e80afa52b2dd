//! Page components. Each one checks for its elements on mount and registers
//! its routes; a page without those elements simply never mounts it.

pub mod lightbox;
pub mod nav_menu;
pub mod password;
pub mod row_link;
pub mod rows;
pub mod theme;

pub use lightbox::Lightbox;
pub use nav_menu::NavMenu;
pub use password::PasswordToggle;
pub use rows::RowManager;
pub use theme::{Theme, ThemeToggle};
