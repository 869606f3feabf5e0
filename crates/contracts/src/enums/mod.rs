pub mod nav_icon;
pub mod user_role;

pub use nav_icon::NavIcon;
pub use user_role::{AccountType, Dashboard, UserRole};
