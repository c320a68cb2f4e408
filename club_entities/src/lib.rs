pub mod schema;
pub mod domain;
pub mod group;
pub mod prelude;
pub mod utilities;
pub mod queries;
pub mod mock;

pub use group::*;
