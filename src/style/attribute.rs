//! Bit-packed cell attributes: one color plus OR-able text flags.
//!
//! The low bits hold an enumerated [`Color`]; bold, underline, and reverse live
//! in the high bits. Colors are mutually exclusive, flags compose with `|`.
//! The all-zero value means "unset" and is what the cascade fills in.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The nine terminal colors an [`Attribute`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum Color {
    #[default]
    Default = 0,
    Black = 1,
    Red = 2,
    Green = 3,
    Yellow = 4,
    Blue = 5,
    Magenta = 6,
    Cyan = 7,
    White = 8,
}

impl Color {
    const ALL: [Color; 9] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    fn from_bits(bits: u16) -> Color {
        Color::ALL
            .get(bits as usize)
            .copied()
            .unwrap_or(Color::Default)
    }

    /// Lower-case name as accepted by [`Attribute::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// A color and a set of text flags packed into 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attribute(pub u16);

impl Attribute {
    const COLOR_MASK: u16 = 0x01FF;

    pub const UNSET: Attribute = Attribute(0);

    pub const DEFAULT: Attribute = Attribute(Color::Default as u16);
    pub const BLACK: Attribute = Attribute(Color::Black as u16);
    pub const RED: Attribute = Attribute(Color::Red as u16);
    pub const GREEN: Attribute = Attribute(Color::Green as u16);
    pub const YELLOW: Attribute = Attribute(Color::Yellow as u16);
    pub const BLUE: Attribute = Attribute(Color::Blue as u16);
    pub const MAGENTA: Attribute = Attribute(Color::Magenta as u16);
    pub const CYAN: Attribute = Attribute(Color::Cyan as u16);
    pub const WHITE: Attribute = Attribute(Color::White as u16);

    pub const BOLD: Attribute = Attribute(1 << 9);
    pub const UNDERLINE: Attribute = Attribute(1 << 10);
    pub const REVERSE: Attribute = Attribute(1 << 11);

    /// Whether no color and no flag is set.
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// The color part of the attribute.
    pub fn color(self) -> Color {
        Color::from_bits(self.0 & Self::COLOR_MASK)
    }

    /// The attribute with its color cleared and only the flags kept.
    pub fn flags(self) -> Attribute {
        Attribute(self.0 & !Self::COLOR_MASK)
    }

    /// Check whether `self` contains all the flag bits in `flag`.
    pub fn contains(self, flag: Attribute) -> bool {
        let bits = flag.0 & !Self::COLOR_MASK;
        bits != 0 && (self.0 & bits) == bits
    }
}

impl From<Color> for Attribute {
    fn from(color: Color) -> Self {
        Attribute(color as u16)
    }
}

impl BitOr for Attribute {
    type Output = Attribute;
    fn bitor(self, rhs: Self) -> Self::Output {
        Attribute(self.0 | rhs.0)
    }
}

impl BitOrAssign for Attribute {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.color() != Color::Default {
            parts.push(self.color().name());
        }
        if self.contains(Attribute::BOLD) {
            parts.push("bold");
        }
        if self.contains(Attribute::UNDERLINE) {
            parts.push("underline");
        }
        if self.contains(Attribute::REVERSE) {
            parts.push("reverse");
        }
        if parts.is_empty() {
            parts.push("default");
        }
        f.write_str(&parts.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Errors from attribute name parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AttributeParseError {
    #[error("unknown color or flag `{0}`")]
    UnknownName(String),
    #[error("more than one color in `{0}`")]
    MultipleColors(String),
}

/// Parse a single color or flag name.
fn parse_word(word: &str) -> Option<Attribute> {
    let attr = match word.to_ascii_lowercase().as_str() {
        "default" => Attribute::DEFAULT,
        "black" => Attribute::BLACK,
        "red" => Attribute::RED,
        "green" => Attribute::GREEN,
        "yellow" => Attribute::YELLOW,
        "blue" => Attribute::BLUE,
        "magenta" => Attribute::MAGENTA,
        "cyan" => Attribute::CYAN,
        "white" => Attribute::WHITE,
        "bold" => Attribute::BOLD,
        "underline" => Attribute::UNDERLINE,
        "reverse" => Attribute::REVERSE,
        _ => return None,
    };
    Some(attr)
}

/// Parses whitespace-separated names: at most one color plus any flags,
/// e.g. `"red bold underline"`.
impl FromStr for Attribute {
    type Err = AttributeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Attribute::UNSET;
        let mut seen_color = false;
        for word in s.split_whitespace() {
            let attr =
                parse_word(word).ok_or_else(|| AttributeParseError::UnknownName(word.to_owned()))?;
            if attr.flags().is_unset() {
                if seen_color {
                    return Err(AttributeParseError::MultipleColors(s.to_owned()));
                }
                seen_color = true;
            }
            out |= attr;
        }
        Ok(out)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
