/// The equality used by a collection when searching for an element, e.g. in `contains` or
/// `remove`.
///
/// Collections default to [`ValueEq`], which defers to [`PartialEq`]. A custom equality can be
/// supplied at construction as any `Fn(&T, &T) -> bool` closure, for element types without a
/// (suitable) `PartialEq` implementation.
pub trait Equivalence<T: ?Sized> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Compares elements with their [`PartialEq`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueEq;

impl<T: PartialEq + ?Sized> Equivalence<T> for ValueEq {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
