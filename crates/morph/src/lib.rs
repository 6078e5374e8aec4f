// Lets `#[derive(Shape)]` resolve `morph::...` paths inside this crate too.
extern crate self as morph;

mod config;
pub use config::{MapperConfiguration, Profile};

mod mapper;
pub use mapper::Mapper;

pub mod mapping;
pub use mapping::{AnyMapping, Mapping, MappingKey, OverrideKind};

pub mod option;
pub use option::{MappingOption, MemberRule};

pub use morph_core::{bail, err, Error, Result};
pub use morph_core::{Field, FieldShape, Member, Shape, TypeInfo, Value};
pub use morph_macros::Shape;

#[doc(hidden)]
pub mod codegen_support {
    pub use morph_core::{Field, FieldShape, Member, Shape, Value};
    pub use std::{clone::Clone, result::Result};
}
