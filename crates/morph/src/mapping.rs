mod rule;
pub(crate) use rule::Rule;
pub use rule::OverrideKind;

use crate::option::{MappingOption, MemberRule};
use morph_core::{Error, Field, Member, Result, Shape, TypeInfo};

use indexmap::IndexMap;
use std::any::Any;
use std::marker::PhantomData;

/// Identifies a mapping by its ordered (source, destination) type pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source: TypeInfo,
    pub destination: TypeInfo,
}

impl MappingKey {
    pub fn of<S: 'static, D: 'static>() -> Self {
        Self {
            source: TypeInfo::of::<S>(),
            destination: TypeInfo::of::<D>(),
        }
    }
}

impl core::fmt::Display for MappingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Describes how instances of `S` are turned into instances of `D`.
///
/// Destination fields without an override are copied from the source field
/// with the same name, if there is one.
pub struct Mapping<S, D> {
    /// Override rules keyed by destination field name
    overrides: IndexMap<&'static str, Rule<S>>,

    /// Set by `reverse_map`. Recorded only; no inverse mapping is created.
    reversed: bool,

    _p: PhantomData<fn(&S) -> D>,
}

impl<S: Shape, D: Shape> Mapping<S, D> {
    pub fn new() -> Self {
        Self {
            overrides: IndexMap::new(),
            reversed: false,
            _p: PhantomData,
        }
    }

    pub fn key(&self) -> MappingKey {
        MappingKey::of::<S, D>()
    }

    /// Declares an override for the destination field selected by `member`.
    ///
    /// ```ignore
    /// mapping.for_member(PersonDto::members().full_name(), |opt| {
    ///     opt.map_from(|p: &Person| format!("{} {}", p.first_name, p.last_name))
    /// })?;
    /// ```
    pub fn for_member<V, F>(&mut self, member: Member<D, V>, option: F) -> Result<&mut Self>
    where
        V: 'static,
        F: FnOnce(MappingOption<S, V>) -> MemberRule<S, V>,
    {
        let shape = D::shape();

        let Some(field) = shape.resolve(&member) else {
            return Err(Error::invalid_member(
                shape.name(),
                member.name(),
                "not a field of the shape",
            ));
        };

        self.insert::<V>(field, option(MappingOption::new()).rule)
    }

    /// Same as [`for_member`](Self::for_member), selecting the destination
    /// field by name. The name must resolve to a field holding `V`.
    pub fn for_member_named<V, F>(&mut self, name: &str, option: F) -> Result<&mut Self>
    where
        V: 'static,
        F: FnOnce(MappingOption<S, V>) -> MemberRule<S, V>,
    {
        let shape = D::shape();

        let Some(field) = shape.field(name) else {
            return Err(Error::invalid_member(
                shape.name(),
                name,
                "not a field of the shape",
            ));
        };

        if !field.ty().is::<V>() {
            return Err(Error::invalid_member(
                shape.name(),
                name,
                format!(
                    "field holds {}, not {}",
                    field.ty(),
                    std::any::type_name::<V>()
                ),
            ));
        }

        self.insert::<V>(field, option(MappingOption::new()).rule)
    }

    fn insert<V: 'static>(&mut self, field: &'static Field<D>, rule: Rule<S>) -> Result<&mut Self> {
        let shape = D::shape();

        if !field.is_writable() {
            return Err(Error::invalid_member(
                shape.name(),
                field.name(),
                "field is not writable",
            ));
        }

        if self.overrides.contains_key(field.name()) {
            return Err(Error::duplicate_member(shape.name(), field.name()));
        }

        if let Rule::MapFromMember { index, name } = &rule {
            let (index, name) = (*index, *name);
            let source = S::shape();

            match source.field_at(index) {
                Some(source_field) if source_field.name() == name && source_field.ty().is::<V>() => {
                    if !source_field.is_readable() {
                        return Err(Error::invalid_member(
                            source.name(),
                            name,
                            "field is not readable",
                        ));
                    }
                }
                _ => {
                    return Err(Error::invalid_member(
                        source.name(),
                        name,
                        "not a field of the shape",
                    ));
                }
            }
        }

        self.overrides.insert(field.name(), rule);
        Ok(self)
    }

    /// Marks the mapping as intended for both directions.
    ///
    /// This only records the flag; register the inverse mapping with
    /// `create_map::<D, S>()` to map in the other direction.
    pub fn reverse_map(&mut self) -> &mut Self {
        self.reversed = true;
        self
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn has_override(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        matches!(self.overrides.get(name), Some(Rule::Ignore))
    }

    /// Declared overrides, in declaration order.
    pub fn overrides(&self) -> impl Iterator<Item = (&'static str, OverrideKind)> + '_ {
        self.overrides.iter().map(|(name, rule)| (*name, rule.kind()))
    }

    pub(crate) fn rule(&self, name: &str) -> Option<&Rule<S>> {
        self.overrides.get(name)
    }
}

impl<S: Shape, D: Shape> Default for Mapping<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shape, D: Shape> core::fmt::Debug for Mapping<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Mapping")
            .field("source", &S::shape().name())
            .field("destination", &D::shape().name())
            .field("overrides", &self.overrides().collect::<Vec<_>>())
            .field("reversed", &self.reversed)
            .finish()
    }
}

/// A registered mapping with its type pair erased.
///
/// This is the handle under which [`MapperConfiguration`](crate::MapperConfiguration)
/// and [`Mapper`](crate::Mapper) store mappings.
pub trait AnyMapping: Any + Send + Sync + core::fmt::Debug {
    fn key(&self) -> MappingKey;

    /// Source and destination type names, as shown in errors.
    fn names(&self) -> (&'static str, &'static str);

    fn is_reversed(&self) -> bool;

    fn override_count(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<S: Shape, D: Shape> AnyMapping for Mapping<S, D> {
    fn key(&self) -> MappingKey {
        Mapping::key(self)
    }

    fn names(&self) -> (&'static str, &'static str) {
        (S::shape().name(), D::shape().name())
    }

    fn is_reversed(&self) -> bool {
        self.reversed
    }

    fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn AnyMapping {
    /// Returns the typed mapping if this handle was registered for `S -> D`.
    pub fn downcast_ref<S: Shape, D: Shape>(&self) -> Option<&Mapping<S, D>> {
        self.as_any().downcast_ref()
    }

    pub(crate) fn downcast_mut<S: Shape, D: Shape>(&mut self) -> Option<&mut Mapping<S, D>> {
        self.as_any_mut().downcast_mut()
    }
}
