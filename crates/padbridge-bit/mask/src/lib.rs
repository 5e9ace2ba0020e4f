mod bitmask;

// Lets `#[derive(Bit)]` expansions resolve inside this crate's own tests.
extern crate self as padbridge_bit_mask;

pub use bitmask::Bitmask;

/// A fieldless enum whose variants map onto distinct bits of a `u64`.
pub trait Bitable: Copy + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn bit(&self) -> u64;
}

/// A flag that lives at a fixed position of a raw device report.
///
/// `offset` is the byte index inside the report and `mask` selects the
/// flag bits inside that byte.
pub trait WireFlag: Bitable {
    fn offset(&self) -> usize;
    fn mask(&self) -> u8;
}
