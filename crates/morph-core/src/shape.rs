mod field;
pub use field::Field;

mod member;
pub use member::Member;

mod ty;
pub use ty::TypeInfo;

mod value;
pub use value::Value;

use indexmap::IndexMap;

/// A type whose fields can be enumerated, read and written at runtime.
///
/// Usually implemented with `#[derive(Shape)]`. The field table is built
/// once and handed out by reference for the rest of the process.
pub trait Shape: Sized + 'static {
    fn shape() -> &'static FieldShape<Self>;
}

/// The ordered field table of one type.
pub struct FieldShape<T> {
    /// Type name, used in error messages
    name: &'static str,

    /// Fields in declaration order, keyed by name
    fields: IndexMap<&'static str, Field<T>>,
}

impl<T> FieldShape<T> {
    /// Builds a shape from its fields.
    ///
    /// Field indices are reassigned to match the position in `fields`.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a name.
    pub fn new(name: &'static str, fields: Vec<Field<T>>) -> Self {
        let mut table = IndexMap::with_capacity(fields.len());

        for (index, mut field) in fields.into_iter().enumerate() {
            field.index = index;
            let field_name = field.name();
            assert!(
                table.insert(field_name, field).is_none(),
                "duplicate field `{field_name}` in shape `{name}`"
            );
        }

        Self {
            name,
            fields: table,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over all fields in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Field<T>> + '_ {
        self.fields.values()
    }

    /// Fields that can be read from an instance (the source side of a mapping).
    pub fn readable(&self) -> impl Iterator<Item = &Field<T>> + '_ {
        self.iter().filter(|field| field.is_readable())
    }

    /// Fields that can be written on an instance (the destination side of a mapping).
    pub fn writable(&self) -> impl Iterator<Item = &Field<T>> + '_ {
        self.iter().filter(|field| field.is_writable())
    }

    pub fn field(&self, name: &str) -> Option<&Field<T>> {
        self.fields.get(name)
    }

    pub fn field_at(&self, index: usize) -> Option<&Field<T>> {
        self.fields.get_index(index).map(|(_, field)| field)
    }

    /// Resolves a typed member handle to its field, checking that the handle
    /// still names a field of the same type.
    pub fn resolve<V: 'static>(&self, member: &Member<T, V>) -> Option<&Field<T>> {
        self.field_at(member.index())
            .filter(|field| field.name() == member.name() && field.ty().is::<V>())
    }
}

impl<T> core::fmt::Debug for FieldShape<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FieldShape")
            .field("name", &self.name)
            .field("fields", &self.fields.values().collect::<Vec<_>>())
            .finish()
    }
}
