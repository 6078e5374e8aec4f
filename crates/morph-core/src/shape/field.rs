use super::{TypeInfo, Value};

/// Describes one named field of `T`.
///
/// A field is readable when it has a getter and writable when it has a
/// setter. Getters return an owned copy of the field value.
pub struct Field<T> {
    /// Position of the field within its shape
    pub(super) index: usize,

    /// Name used for convention matching
    name: &'static str,

    /// Field value type
    ty: TypeInfo,

    get: Option<fn(&T) -> Value>,

    set: Option<fn(&mut T, Value) -> Result<(), Value>>,
}

impl<T> Field<T> {
    /// Creates a field holding values of type `V`, neither readable nor
    /// writable until accessors are attached.
    pub fn new<V: 'static>(name: &'static str) -> Self {
        Self {
            index: 0,
            name,
            ty: TypeInfo::of::<V>(),
            get: None,
            set: None,
        }
    }

    pub fn with_getter(mut self, get: fn(&T) -> Value) -> Self {
        self.get = Some(get);
        self
    }

    pub fn with_setter(mut self, set: fn(&mut T, Value) -> Result<(), Value>) -> Self {
        self.set = Some(set);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> TypeInfo {
        self.ty
    }

    pub fn is_readable(&self) -> bool {
        self.get.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.set.is_some()
    }

    /// Reads the field, or `None` if the field is not readable.
    pub fn get(&self, this: &T) -> Option<Value> {
        self.get.map(|get| get(this))
    }

    /// Writes the field.
    ///
    /// Hands `value` back if the field is not writable or the value is of
    /// another type; `this` is left untouched in that case.
    pub fn set(&self, this: &mut T, value: Value) -> Result<(), Value> {
        match self.set {
            Some(set) if value.ty() == self.ty => set(this, value),
            _ => Err(value),
        }
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            name: self.name,
            ty: self.ty,
            get: self.get,
            set: self.set,
        }
    }
}

impl<T> core::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}
