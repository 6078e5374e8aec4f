mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod field_attr;
pub(crate) use field_attr::FieldAttr;

mod shape;
pub(crate) use shape::Shape;
