mod field;
mod object;

pub use field::*;
pub use object::*;
