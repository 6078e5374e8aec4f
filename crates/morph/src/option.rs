//! Builder handed to [`Mapping::for_member`](crate::Mapping::for_member).

use crate::mapping::Rule;
use morph_core::{Member, Value};

use std::marker::PhantomData;

/// Declares how one destination field of type `V` is produced from a source
/// `S`. Each method consumes the option and yields exactly one rule.
pub struct MappingOption<S, V> {
    _p: PhantomData<fn(&S) -> V>,
}

/// A finished override rule for a destination field of type `V`.
pub struct MemberRule<S, V> {
    pub(crate) rule: Rule<S>,
    _p: PhantomData<fn() -> V>,
}

impl<S: 'static, V: 'static> MappingOption<S, V> {
    pub(crate) fn new() -> Self {
        Self { _p: PhantomData }
    }

    /// Computes the field from the source instance.
    ///
    /// The closure runs once per field on every `map` call.
    pub fn map_from<F>(self, f: F) -> MemberRule<S, V>
    where
        F: Fn(&S) -> V + Send + Sync + 'static,
    {
        MemberRule::new(Rule::MapFrom(Box::new(move |source: &S| {
            Ok(Value::new(f(source)))
        })))
    }

    /// Computes the field from the source instance with a closure that may
    /// fail. The error is returned from `map` as is.
    pub fn try_map_from<F, E>(self, f: F) -> MemberRule<S, V>
    where
        F: Fn(&S) -> Result<V, E> + Send + Sync + 'static,
        E: Into<anyhow::Error>,
    {
        MemberRule::new(Rule::MapFrom(Box::new(move |source: &S| {
            f(source).map(Value::new).map_err(Into::into)
        })))
    }

    /// Copies the field from a differently named source field.
    pub fn map_from_member(self, member: Member<S, V>) -> MemberRule<S, V> {
        MemberRule::new(Rule::MapFromMember {
            index: member.index(),
            name: member.name(),
        })
    }

    /// Leaves the field at its default value, even when the source has a
    /// field with the same name.
    pub fn ignore(self) -> MemberRule<S, V> {
        MemberRule::new(Rule::Ignore)
    }
}

impl<S, V> MemberRule<S, V> {
    fn new(rule: Rule<S>) -> Self {
        Self {
            rule,
            _p: PhantomData,
        }
    }
}
