//! style! and styles! macros: parse style declarations at compile time and
//! generate `Style` / `StyleTable` construction code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Error, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// Which side of a cell a declaration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Fg,
    Bg,
}

/// A single declaration: `fg: red bold;`
#[derive(Debug, Clone)]
pub(crate) struct StyleDeclaration {
    pub side: Side,
    pub side_span: Span,
    /// Color and flag names in source order.
    pub words: Vec<Ident>,
}

/// The body of a style! invocation.
#[derive(Debug)]
struct StyleInput {
    declarations: Vec<StyleDeclaration>,
}

/// One `"class" { ... }` entry of a styles! invocation.
struct RuleInput {
    class: LitStr,
    body: StyleInput,
}

/// The body of a styles! invocation.
struct TableInput {
    rules: Vec<RuleInput>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for StyleInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut declarations = Vec::new();
        while !input.is_empty() {
            declarations.push(parse_declaration(input)?);
        }
        Ok(StyleInput { declarations })
    }
}

impl Parse for TableInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut rules = Vec::new();
        while !input.is_empty() {
            let class: LitStr = input.parse()?;
            let content;
            braced!(content in input);
            let body: StyleInput = content.parse()?;
            rules.push(RuleInput { class, body });
        }
        Ok(TableInput { rules })
    }
}

/// Parse `side: word word ...;`
pub(crate) fn parse_declaration(input: ParseStream) -> Result<StyleDeclaration> {
    let name: Ident = input.parse()?;
    let side = match name.to_string().as_str() {
        "fg" => Side::Fg,
        "bg" => Side::Bg,
        other => {
            return Err(Error::new(
                name.span(),
                format!("unknown style property `{other}`, expected `fg` or `bg`"),
            ))
        }
    };
    input.parse::<Token![:]>()?;

    let mut words = Vec::new();
    while !input.peek(Token![;]) {
        words.push(input.parse::<Ident>()?);
    }
    input.parse::<Token![;]>()?;

    if words.is_empty() {
        return Err(Error::new(name.span(), format!("property `{name}` has no value")));
    }

    Ok(StyleDeclaration {
        side,
        side_span: name.span(),
        words,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

const COLORS: [&str; 9] = [
    "default", "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];
const FLAGS: [&str; 3] = ["bold", "underline", "reverse"];

/// The `Attribute` constant for a color or flag name.
fn attribute_const(word: &str) -> TokenStream {
    let konst = Ident::new(&word.to_ascii_uppercase(), Span::call_site());
    quote! { cellui::style::Attribute::#konst }
}

/// Split a declaration into its color and flag expressions.
fn declaration_parts(decl: &StyleDeclaration) -> Result<(Option<TokenStream>, Vec<TokenStream>)> {
    let mut color: Option<(String, TokenStream)> = None;
    let mut flags = Vec::new();
    for word in &decl.words {
        let name = word.to_string().to_ascii_lowercase();
        if COLORS.contains(&name.as_str()) {
            if let Some((first, _)) = &color {
                return Err(Error::new(
                    word.span(),
                    format!("more than one color: `{first}` and `{name}`"),
                ));
            }
            color = Some((name.clone(), attribute_const(&name)));
        } else if FLAGS.contains(&name.as_str()) {
            flags.push(attribute_const(&name));
        } else {
            return Err(Error::new(
                word.span(),
                format!("unknown color or flag `{word}`"),
            ));
        }
    }
    Ok((color.map(|(_, tokens)| tokens), flags))
}

/// Generate the expression building one `Style`.
fn style_expr(input: &StyleInput, span: Span) -> Result<TokenStream> {
    if input.declarations.is_empty() {
        return Err(Error::new(span, "style requires at least one declaration"));
    }

    let mut seen = Vec::new();
    let mut assignments = Vec::new();
    for decl in &input.declarations {
        if seen.contains(&decl.side) {
            return Err(Error::new(decl.side_span, "property given twice"));
        }
        seen.push(decl.side);

        let (color_field, style_field) = match decl.side {
            Side::Fg => (quote! { fg_color }, quote! { fg_style }),
            Side::Bg => (quote! { bg_color }, quote! { bg_style }),
        };
        let (color, flags) = declaration_parts(decl)?;
        if let Some(color) = color {
            assignments.push(quote! { __style.#color_field = #color; });
        }
        if !flags.is_empty() {
            assignments.push(quote! { __style.#style_field = #(#flags)|*; });
        }
    }

    Ok(quote! {
        {
            let mut __style = cellui::style::Style::new();
            #(#assignments)*
            __style
        }
    })
}

/// Check a class path: dotted segments without whitespace, optionally ending
/// in `:focus`. The empty path names the root rule.
fn validate_class(class: &LitStr) -> Result<()> {
    let value = class.value();
    let path = value.strip_suffix(":focus").unwrap_or(&value);
    if path.contains(char::is_whitespace) {
        return Err(Error::new(class.span(), "class path cannot contain whitespace"));
    }
    if path.contains(':') {
        return Err(Error::new(
            class.span(),
            "`:focus` is the only pseudo-state and must come last",
        ));
    }
    if !path.is_empty() && path.split('.').any(str::is_empty) {
        return Err(Error::new(class.span(), "class path has an empty segment"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Entry point: generate code for the style! macro.
pub(crate) fn style_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: StyleInput = syn::parse2(input)?;
    style_expr(&parsed, Span::call_site())
}

/// Entry point: generate code for the styles! macro.
pub(crate) fn styles_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: TableInput = syn::parse2(input)?;

    let mut inserts = Vec::new();
    for rule in &parsed.rules {
        validate_class(&rule.class)?;
        let class = &rule.class;
        let style = style_expr(&rule.body, class.span())?;
        inserts.push(quote! { __table.insert(#class, #style); });
    }

    Ok(quote! {
        {
            let mut __table = cellui::style::StyleTable::new();
            #(#inserts)*
            __table
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================
