mod derive;

use proc_macro::TokenStream;

use crate::derive::handle_derive_bit;

/// Derives `Bitable` for a fieldless enum, plus `WireFlag` when every
/// variant is annotated with `#[wire(offset = N, mask = 0xMM)]`.
#[proc_macro_derive(Bit, attributes(wire))]
pub fn derive_bit(input: TokenStream) -> TokenStream {
    handle_derive_bit(input)
}
