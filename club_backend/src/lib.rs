pub mod schedule;
pub mod actions;
pub mod views;

pub use actions::*;
pub use views::*;
