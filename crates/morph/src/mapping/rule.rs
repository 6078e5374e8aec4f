use morph_core::Value;

/// A type-erased override rule for one destination field.
pub(crate) enum Rule<S> {
    /// Computed from the whole source instance on every `map` call
    MapFrom(Box<dyn Fn(&S) -> anyhow::Result<Value> + Send + Sync>),

    /// Copied from a differently named source field
    MapFromMember { index: usize, name: &'static str },

    /// Left at the destination's default value
    Ignore,
}

/// What an override does, as reported by [`Mapping::overrides`](super::Mapping::overrides).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKind {
    MapFrom,
    MapFromMember(&'static str),
    Ignore,
}

impl<S> Rule<S> {
    pub(crate) fn kind(&self) -> OverrideKind {
        match self {
            Rule::MapFrom(_) => OverrideKind::MapFrom,
            Rule::MapFromMember { name, .. } => OverrideKind::MapFromMember(*name),
            Rule::Ignore => OverrideKind::Ignore,
        }
    }
}
