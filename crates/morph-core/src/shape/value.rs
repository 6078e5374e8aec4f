use super::TypeInfo;

use std::any::Any;

/// An owned field value of any type.
///
/// Values travel from a source getter (or a member rule) to a destination
/// setter; the setter downcasts back to the concrete field type.
pub struct Value {
    inner: Box<dyn Any>,
    ty: TypeInfo,
}

impl Value {
    pub fn new<V: Any>(value: V) -> Self {
        Self {
            inner: Box::new(value),
            ty: TypeInfo::of::<V>(),
        }
    }

    pub fn ty(&self) -> TypeInfo {
        self.ty
    }

    pub fn is<V: Any>(&self) -> bool {
        self.inner.is::<V>()
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.inner.downcast_ref()
    }

    /// Takes the concrete value out, or returns `self` unchanged when the
    /// stored value is of another type.
    pub fn downcast<V: Any>(self) -> Result<V, Value> {
        let Value { inner, ty } = self;

        match inner.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Value { inner, ty }),
        }
    }
}

impl core::fmt::Debug for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Value").field("ty", &self.ty).finish()
    }
}
