//! Rust source emission for encoded tables.
//!
//! Produces `proc_macro2::TokenStream`s: either a flat `const` array or a `const fn`
//! whose body is the decision tree spelled out as nested `if`s. Formatting the
//! output is left to `rustfmt`.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use super::sources::TableKind;
use super::{CodecError, ConstantTable, DecisionTree};

/// Shape of the emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    /// `pub const NAME: [T; N] = [...];`
    Array,
    /// `pub const fn name(i: i32) -> T { if i <= .. { .. } else { .. } }`
    Tree,
}

/// Emits a lookup function whose body is `tree`.
///
/// With `mask`, the index is reduced with `i & mask` before the first comparison.
#[must_use]
pub fn lookup_fn(
    name: &str,
    value_type: &str,
    tree: &DecisionTree,
    mask: Option<i32>,
) -> TokenStream {
    let name = format_ident!("{}", name);
    let ty = format_ident!("{}", value_type);
    let mask = mask.map(|mask| {
        let mask = Literal::i32_unsuffixed(mask);
        quote! { let i = i & #mask; }
    });
    let body = tree_body(tree);

    quote! {
        #[must_use]
        #[allow(clippy::too_many_lines, reason = "generated decision tree")]
        pub const fn #name(i: i32) -> #ty {
            #mask
            #body
        }
    }
}

fn tree_body(tree: &DecisionTree) -> TokenStream {
    match tree {
        DecisionTree::Leaf { index, hit, miss } => {
            let index = Literal::i32_unsuffixed(*index);
            let hit = Literal::i64_unsuffixed(*hit);
            let miss = Literal::i64_unsuffixed(*miss);
            quote! {
                if i == #index { #hit } else { #miss }
            }
        }
        DecisionTree::Split {
            pivot,
            below,
            above,
        } => {
            let pivot = Literal::i32_unsuffixed(*pivot);
            let below = tree_body(below);
            let above = tree_body(above);
            quote! {
                if i <= #pivot { #below } else { #above }
            }
        }
    }
}

/// Emits `table` as a flat `const` array.
#[must_use]
pub fn const_array(name: &str, value_type: &str, table: &ConstantTable) -> TokenStream {
    let name = format_ident!("{}", name);
    let ty = format_ident!("{}", value_type);
    let len = Literal::usize_unsuffixed(table.values().len());
    let values = table.values().iter().map(|&v| Literal::i64_unsuffixed(v));

    quote! {
        pub const #name: [#ty; #len] = [#(#values),*];
    }
}

/// Emits one of the noise tables in the requested format.
pub fn table_source(kind: TableKind, format: EmitFormat) -> Result<TokenStream, CodecError> {
    let table = kind.table()?;
    let tokens = match format {
        EmitFormat::Array => const_array(kind.array_name(), kind.value_type(), &table),
        EmitFormat::Tree => lookup_fn(
            kind.lookup_name(),
            kind.value_type(),
            &table.decision_tree(),
            kind.index_mask(),
        ),
    };
    Ok(tokens)
}

/// Emits a complete source file holding every table in `kinds`.
pub fn tables_file(
    header: &str,
    kinds: &[TableKind],
    format: EmitFormat,
) -> Result<TokenStream, CodecError> {
    let mut items = TokenStream::new();
    for &kind in kinds {
        items.extend(table_source(kind, format)?);
        tracing::debug!(?kind, ?format, "emitted table");
    }
    Ok(generated_file(header, items))
}

/// Wraps generated items in a file with a module-level doc header.
#[must_use]
pub fn generated_file(header: &str, items: TokenStream) -> TokenStream {
    let docs = header.lines().map(|line| format!(" {line}"));
    quote! {
        #(#![doc = #docs])*

        #items
    }
}
