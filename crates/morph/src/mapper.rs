use crate::mapping::{AnyMapping, Mapping, MappingKey, Rule};
use crate::MapperConfiguration;
use morph_core::{Error, Field, Result, Shape, Value};

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Maps instances between registered type pairs.
///
/// A mapper is immutable once built and can be shared between threads.
#[derive(Clone)]
pub struct Mapper {
    /// Mappings in registration order
    mappings: Vec<Arc<dyn AnyMapping>>,

    /// Position in `mappings` of the mapping used for each type pair
    index: HashMap<MappingKey, usize>,
}

impl Mapper {
    pub fn new(config: &MapperConfiguration) -> Self {
        let mappings = config.mappings().to_vec();
        let mut index = HashMap::with_capacity(mappings.len());

        for (position, mapping) in mappings.iter().enumerate() {
            let key = mapping.key();

            if index.contains_key(&key) {
                let (source, destination) = mapping.names();
                warn!(source, destination, position, "duplicate mapping ignored");
                continue;
            }

            index.insert(key, position);
        }

        debug!(mappings = mappings.len(), "built mapper");

        Self { mappings, index }
    }

    pub fn mappings(&self) -> &[Arc<dyn AnyMapping>] {
        &self.mappings
    }

    /// Returns `true` if `map::<S, D>` has a mapping to use.
    pub fn contains<S: Shape, D: Shape>(&self) -> bool {
        self.find::<S, D>().is_ok()
    }

    /// Returns the mapping used for `S -> D`.
    pub fn find<S: Shape, D: Shape>(&self) -> Result<&Mapping<S, D>> {
        self.index
            .get(&MappingKey::of::<S, D>())
            .and_then(|&position| self.mappings[position].downcast_ref::<S, D>())
            .ok_or_else(|| Error::mapping_not_found(S::shape().name(), D::shape().name()))
    }

    /// Creates a `D` from `source`.
    ///
    /// Every writable field of `D` is, in declaration order:
    ///
    /// - left at its default if its override is `ignore`,
    /// - computed by its override rule if it has one,
    /// - otherwise copied from the readable source field with the same name,
    ///   or left at its default if there is no such field.
    pub fn map<S: Shape, D: Shape + Default>(&self, source: &S) -> Result<D> {
        let mapping = self.find::<S, D>()?;
        let source_shape = S::shape();
        let destination_shape = D::shape();

        trace!(
            source = source_shape.name(),
            destination = destination_shape.name(),
            "map"
        );

        let mut destination = D::default();

        for field in destination_shape.writable() {
            let value = match mapping.rule(field.name()) {
                Some(Rule::Ignore) => continue,
                Some(Rule::MapFrom(f)) => f(source).map_err(|err| {
                    Error::rule_failed(destination_shape.name(), field.name(), err)
                })?,
                Some(Rule::MapFromMember { index, name }) => {
                    let source_field = source_shape.field_at(*index).ok_or_else(|| {
                        Error::invalid_member(source_shape.name(), *name, "not a field of the shape")
                    })?;

                    match source_field.get(source) {
                        Some(value) => value,
                        None => continue,
                    }
                }
                None => {
                    let Some(source_field) = source_shape
                        .field(field.name())
                        .filter(|source_field| source_field.is_readable())
                    else {
                        continue;
                    };

                    if source_field.ty() != field.ty() {
                        return Err(Error::type_mismatch(
                            destination_shape.name(),
                            field.name(),
                            field.ty().name(),
                            source_field.ty().name(),
                        ));
                    }

                    match source_field.get(source) {
                        Some(value) => value,
                        None => continue,
                    }
                }
            };

            write(field, &mut destination, value, destination_shape.name())?;
        }

        Ok(destination)
    }
}

fn write<D>(field: &Field<D>, destination: &mut D, value: Value, shape: &'static str) -> Result<()> {
    field.set(destination, value).map_err(|value| {
        Error::type_mismatch(shape, field.name(), field.ty().name(), value.ty().name())
    })
}

impl core::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Mapper")
            .field("mappings", &self.mappings)
            .finish()
    }
}
