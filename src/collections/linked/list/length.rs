use std::num::NonZero;

/// The length of a non-empty list. Being non-zero, it lets [`ListState::Full`](super::ListState)
/// carry its length without a separate "zero but full" state being representable.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        Length::wrap_non_zero(self.0.checked_add(other))
    }

    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        Length::wrap_non_zero(match self.0.get().checked_sub(other) {
            Some(res) => NonZero::new(res),
            None => None,
        })
    }

    /// Returns the length after one more node has been linked.
    ///
    /// # Panics
    /// Panics if the length would overflow, which the node arena's allocation prevents long
    /// before it could happen.
    pub const fn incremented(self) -> Length {
        match self.checked_add(1) {
            Some(len) => len,
            None => panic!("linked list length overflowed"),
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn wrap_non_zero(value: Option<NonZero<usize>>) -> Option<Length> {
        match value {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
