//! Domain data: validated fields, dishes, orders, lookup keys and their views.

pub mod dish;
pub mod fields;
pub mod lookup;
pub mod order;
pub mod status;

pub use dish::*;
pub use fields::*;
pub use lookup::*;
pub use order::*;
pub use status::*;
