use std::fmt::{self, Debug, Display, Formatter};

/// Writes `elements` in the bracketed, comma separated form used by every collection's [`Display`]
/// implementation, e.g. `[1, 2, 3]` or `[]`.
pub(crate) fn write_elements<'a, T, I>(f: &mut Formatter<'_>, elements: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{element}")?;
    }
    write!(f, "]")
}

/// Debugs the items of a cloneable iterator as a list without collecting them first.
pub(crate) struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
