use std::marker::PhantomData;

use crate::{Bitable, WireFlag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: Bitable>(pub u64, PhantomData<T>);

impl<T: Bitable> Default for Bitmask<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Bitable> Bitmask<T> {
    /// Create a new bitmask from a slice of values.
    pub fn new(values: &[T]) -> Self {
        let bits = values.iter().fold(0, |bits, value| bits | value.bit());
        Self(bits, PhantomData)
    }

    /// Create an empty bitmask.
    pub const fn empty() -> Self {
        Self(0, PhantomData)
    }

    /// Check if the bitmask contains a specific value.
    #[inline]
    pub fn contains(&self, bit: T) -> bool {
        (self.0 & bit.bit()) != 0
    }

    /// Insert a value to the bitmask.
    #[inline]
    pub fn insert(&mut self, bit: T) {
        self.0 |= bit.bit();
    }

    /// Check if the bitmask is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the number of bits set in the bitmask.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl<T: WireFlag> Bitmask<T> {
    /// Collect every flag whose bits are set in `bytes`.
    ///
    /// Flags pointing past the end of `bytes` are treated as released.
    pub fn from_wire(bytes: &[u8]) -> Self {
        let mut mask = Self::empty();
        for flag in T::ALL {
            let byte = bytes.get(flag.offset()).copied().unwrap_or(0);
            if byte & flag.mask() != 0 {
                mask.insert(*flag);
            }
        }
        mask
    }
}
