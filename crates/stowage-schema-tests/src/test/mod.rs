pub mod constructor;
pub mod embedded;
pub mod registry;
