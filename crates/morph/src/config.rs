use crate::mapping::{AnyMapping, Mapping};
use crate::Mapper;
use morph_core::{Result, Shape};

use std::sync::Arc;
use tracing::debug;

/// Collects mappings and builds a [`Mapper`] from them.
///
/// ```ignore
/// let mut config = MapperConfiguration::new();
///
/// config
///     .create_map::<Person, PersonDto>()
///     .for_member(PersonDto::members().secret_code(), |opt| opt.ignore())?;
///
/// let mapper = config.create_mapper();
/// ```
#[derive(Debug, Default)]
pub struct MapperConfiguration {
    /// Registered mappings, in registration order
    mappings: Vec<Arc<dyn AnyMapping>>,
}

/// A reusable, self-contained mapping definition.
///
/// Profiles let mappings be declared next to the types they convert and
/// registered with [`MapperConfiguration::add_profile`].
pub trait Profile {
    type Source: Shape;
    type Destination: Shape;

    /// Builds the finished mapping.
    fn configure() -> Result<Mapping<Self::Source, Self::Destination>>;
}

impl MapperConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty mapping from `S` to `D` and returns it for further
    /// configuration.
    ///
    /// Registering the same pair twice is allowed; the mapper uses the first
    /// one.
    pub fn create_map<S: Shape, D: Shape>(&mut self) -> &mut Mapping<S, D> {
        let index = self.mappings.len();
        self.add_mapping(Mapping::<S, D>::new());

        // The `Arc` was created by `add_mapping` just above and mappers only
        // clone entries that exist when they are built, so it is unique here.
        Arc::get_mut(&mut self.mappings[index])
            .and_then(|mapping| mapping.downcast_mut::<S, D>())
            .expect("newly registered mapping is not shared")
    }

    /// Registers a finished mapping.
    pub fn add_mapping<S: Shape, D: Shape>(&mut self, mapping: Mapping<S, D>) -> &mut Self {
        debug!(
            source = S::shape().name(),
            destination = D::shape().name(),
            overrides = AnyMapping::override_count(&mapping),
            "registered mapping"
        );

        self.mappings.push(Arc::new(mapping));
        self
    }

    /// Builds the profile's mapping and registers it.
    pub fn add_profile<P: Profile>(&mut self) -> Result<&mut Self> {
        let mapping = P::configure().map_err(|err| {
            err.context(format!(
                "failed to configure profile `{}`",
                std::any::type_name::<P>()
            ))
        })?;

        Ok(self.add_mapping(mapping))
    }

    pub fn mappings(&self) -> &[Arc<dyn AnyMapping>] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Builds a mapper over the mappings registered so far.
    ///
    /// The mapper shares the registered mappings; mappings created afterwards
    /// are only seen by mappers created later.
    pub fn create_mapper(&self) -> Mapper {
        Mapper::new(self)
    }
}
