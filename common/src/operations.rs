//! Abstract operations.

use std::marker::PhantomData;

/// Operation to insert a value.
///
/// Stores assign the identifier themselves: the one carried by the inserted
/// value is ignored, and the stored value is returned back.
#[derive(Clone, Copy, Debug)]
pub struct Insert<T>(pub T);

/// Operation to update a value, replacing the stored one with the same
/// identifier wholesale.
#[derive(Clone, Copy, Debug)]
pub struct Update<T>(pub T);

/// Operation to delete a value.
#[derive(Clone, Copy, Debug)]
pub struct Delete<T>(pub T);

/// Operation to select a value.
///
/// Selected values are detached copies: mutating them doesn't affect the
/// store.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Operation to reset a store to its initial contents.
#[derive(Clone, Copy, Debug)]
pub struct Reset;

/// Selector of `W` by `B`.
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Type of the value to select.
    _what: PhantomData<W>,

    /// Value to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] with the given value.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Consumes this [`By`] and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
