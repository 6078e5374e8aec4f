use std::marker::PhantomData;

/// A typed reference to one field of `T` holding values of type `V`.
///
/// Handles are produced by the `members()` accessor generated with
/// `#[derive(Shape)]` and are used to select the destination field of an
/// override.
pub struct Member<T, V> {
    index: usize,
    name: &'static str,
    _p: PhantomData<fn(&T) -> V>,
}

impl<T, V> Member<T, V> {
    pub const fn new(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name,
            _p: PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T, V> Clone for Member<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Member<T, V> {}

impl<T, V> core::fmt::Debug for Member<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Member")
            .field("index", &self.index)
            .field("name", &self.name)
            .finish()
    }
}
