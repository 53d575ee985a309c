pub mod check;
pub mod generate;
pub mod list;
pub mod menu;
pub mod session_helpers;
