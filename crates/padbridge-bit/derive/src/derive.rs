use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitInt, Variant};

struct WireAttr {
    offset: usize,
    mask: u8,
}

pub fn handle_derive_bit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "Bit can be derived only for enums"));
    };
    if data.variants.len() > 64 {
        return Err(syn::Error::new_spanned(name, "Bit supports at most 64 variants"));
    }

    let mut variants: Vec<&Ident> = Vec::with_capacity(data.variants.len());
    let mut wires: Vec<Option<WireAttr>> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Bit supports only fieldless enum variants",
            ));
        }
        variants.push(&variant.ident);
        wires.push(parse_wire(variant)?);
    }

    // Bits follow declaration order, wire positions are independent of them.
    let bit_arms = variants.iter().enumerate().map(|(i, v)| {
        let idx = i as u32;
        quote! { #name::#v => 1u64 << #idx }
    });

    let bitable = quote! {
        impl ::padbridge_bit_mask::Bitable for #name {
            const ALL: &'static [Self] = &[ #( #name::#variants ),* ];

            #[inline]
            fn bit(&self) -> u64 {
                match self { #( #bit_arms, )* }
            }
        }
    };

    let declared = wires.iter().filter(|w| w.is_some()).count();
    if declared == 0 {
        return Ok(bitable);
    }
    if declared != wires.len() {
        return Err(syn::Error::new_spanned(
            name,
            "either every variant or none must carry #[wire(offset, mask)]",
        ));
    }

    let offset_arms = variants.iter().zip(&wires).map(|(v, w)| {
        let offset = w.as_ref().map_or(0, |w| w.offset);
        quote! { #name::#v => #offset }
    });
    let mask_arms = variants.iter().zip(&wires).map(|(v, w)| {
        let mask = w.as_ref().map_or(0, |w| w.mask);
        quote! { #name::#v => #mask }
    });

    Ok(quote! {
        #bitable

        impl ::padbridge_bit_mask::WireFlag for #name {
            #[inline]
            fn offset(&self) -> usize {
                match self { #( #offset_arms, )* }
            }

            #[inline]
            fn mask(&self) -> u8 {
                match self { #( #mask_arms, )* }
            }
        }
    })
}

fn parse_wire(variant: &Variant) -> syn::Result<Option<WireAttr>> {
    let Some(attr) = variant.attrs.iter().find(|a| a.path().is_ident("wire")) else {
        return Ok(None);
    };

    let mut offset = None;
    let mut mask = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("offset") {
            let lit: LitInt = meta.value()?.parse()?;
            offset = Some(lit.base10_parse::<usize>()?);
            Ok(())
        } else if meta.path.is_ident("mask") {
            let lit: LitInt = meta.value()?.parse()?;
            mask = Some(lit.base10_parse::<u8>()?);
            Ok(())
        } else {
            Err(meta.error("expected `offset` or `mask`"))
        }
    })?;

    match (offset, mask) {
        (Some(_), Some(0)) => Err(syn::Error::new_spanned(attr, "wire mask must not be zero")),
        (Some(offset), Some(mask)) => Ok(Some(WireAttr { offset, mask })),
        _ => Err(syn::Error::new_spanned(
            attr,
            "wire attribute needs both `offset` and `mask`",
        )),
    }
}
