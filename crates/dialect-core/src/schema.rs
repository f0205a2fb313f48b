mod field;
pub use field::{DataType, Field};
