//! Proc macros for cellui: `style!` and `styles!` compile-time style literals.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `cellui`.

use proc_macro::TokenStream;

mod style_macro;

/// Build a `cellui::style::Style` from declarations checked at compile time.
///
/// # Syntax
///
/// ```ignore
/// let focused = style! {
///     fg: yellow bold;
///     bg: blue;
/// };
/// ```
///
/// Each of `fg` and `bg` takes at most one color (`default`, `black`, `red`,
/// `green`, `yellow`, `blue`, `magenta`, `cyan`, `white`) plus any of the
/// flags `bold`, `underline`, `reverse`. Fields not mentioned stay unset and
/// are inherited through the cascade.
#[proc_macro]
pub fn style(input: TokenStream) -> TokenStream {
    style_macro::style_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Build a `cellui::style::StyleTable` of rules keyed by class path.
///
/// # Syntax
///
/// ```ignore
/// let table = styles! {
///     "list.items" { fg: white; bg: blue; }
///     "border:focus" { fg: bold; }
/// };
/// ```
///
/// Class paths are dotted names, optionally ending in `:focus`. The body of
/// each rule uses the `style!` syntax.
#[proc_macro]
pub fn styles(input: TokenStream) -> TokenStream {
    style_macro::styles_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
