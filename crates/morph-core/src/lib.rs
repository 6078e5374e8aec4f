mod error;
pub use error::{Error, IntoError};

pub mod shape;
pub use shape::{Field, FieldShape, Member, Shape, TypeInfo, Value};

/// A Result type alias that uses Morph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
