pub mod error;
pub mod factory;
pub mod model;
pub mod value_object;
