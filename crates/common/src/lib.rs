pub mod challenge;
pub mod error;
pub mod field;
pub mod lead;
pub mod validation;

pub use challenge::Challenge;
pub use error::{Error, Result};
pub use field::Field;
pub use lead::Lead;
