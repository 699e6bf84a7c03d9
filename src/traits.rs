//! Closed enumerations for the four observable mushroom traits.
//!
//! Each member carries the single-character code used by the UCI mushroom
//! data set the rules were derived from, plus a canonical English name.
//! Parsing (from a code or a name) is the only place raw strings enter the
//! system; everything past it works on these types.
//!
//! # Examples
//!
//! ```
//! use shroomcheck::traits::{parse_trait, Odor, StalkRoot};
//!
//! assert_eq!(parse_trait::<Odor>("f").unwrap(), Odor::Foul);
//! assert_eq!(parse_trait::<Odor>("Almond").unwrap(), Odor::Almond);
//! assert_eq!(parse_trait::<StalkRoot>("?").unwrap(), StalkRoot::Missing);
//! assert!(parse_trait::<Odor>("x").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ShroomError;

/// The four trait kinds a specimen is described by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Odor,
    GillSize,
    GillColor,
    StalkRoot,
}

impl TraitKind {
    pub const ALL: [TraitKind; 4] = [
        TraitKind::Odor,
        TraitKind::GillSize,
        TraitKind::GillColor,
        TraitKind::StalkRoot,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Odor => "odor",
            Self::GillSize => "gill size",
            Self::GillColor => "gill color",
            Self::StalkRoot => "stalk root",
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of every trait enumeration.
///
/// `ALL` lists members in data set order, which is also the order choices
/// are presented to the user.
pub trait TraitValue: Copy + Eq + fmt::Debug + 'static {
    const KIND: TraitKind;
    const ALL: &'static [Self];

    /// Single-character data set code.
    fn code(self) -> char;

    /// Canonical English name, used in reasons and accepted by the parser.
    fn name(self) -> &'static str;

    /// Look up a member by code or name, ignoring ASCII case and
    /// surrounding whitespace.
    fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        let mut chars = input.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            let c = c.to_ascii_lowercase();
            return Self::ALL.iter().copied().find(|v| v.code() == c);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(input))
    }
}

/// Parse a trait value from its data set code or its name.
///
/// Shaped to be usable directly as a clap `value_parser`.
pub fn parse_trait<T: TraitValue>(input: &str) -> Result<T, ShroomError> {
    T::lookup(input).ok_or_else(|| ShroomError::unknown_trait::<T>(input))
}

/// Human-readable list of accepted codes, e.g. `a (Almond), l (Anise)`.
pub fn expected_values<T: TraitValue>() -> String {
    T::ALL
        .iter()
        .map(|v| format!("{} ({})", v.code(), v.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Odor {
    Almond,
    Anise,
    Creosote,
    Fishy,
    Foul,
    Musty,
    None,
    Pungent,
    Spicy,
}

impl TraitValue for Odor {
    const KIND: TraitKind = TraitKind::Odor;
    const ALL: &'static [Self] = &[
        Self::Almond,
        Self::Anise,
        Self::Creosote,
        Self::Fishy,
        Self::Foul,
        Self::Musty,
        Self::None,
        Self::Pungent,
        Self::Spicy,
    ];

    fn code(self) -> char {
        match self {
            Self::Almond => 'a',
            Self::Anise => 'l',
            Self::Creosote => 'c',
            Self::Fishy => 'y',
            Self::Foul => 'f',
            Self::Musty => 'm',
            Self::None => 'n',
            Self::Pungent => 'p',
            Self::Spicy => 's',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Almond => "Almond",
            Self::Anise => "Anise",
            Self::Creosote => "Creosote",
            Self::Fishy => "Fishy",
            Self::Foul => "Foul",
            Self::Musty => "Musty",
            Self::None => "None",
            Self::Pungent => "Pungent",
            Self::Spicy => "Spicy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GillSize {
    Broad,
    Narrow,
}

impl TraitValue for GillSize {
    const KIND: TraitKind = TraitKind::GillSize;
    const ALL: &'static [Self] = &[Self::Broad, Self::Narrow];

    fn code(self) -> char {
        match self {
            Self::Broad => 'b',
            Self::Narrow => 'n',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Broad => "Broad",
            Self::Narrow => "Narrow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GillColor {
    Black,
    Brown,
    Buff,
    Chocolate,
    Gray,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    White,
    Yellow,
}

impl TraitValue for GillColor {
    const KIND: TraitKind = TraitKind::GillColor;
    const ALL: &'static [Self] = &[
        Self::Black,
        Self::Brown,
        Self::Buff,
        Self::Chocolate,
        Self::Gray,
        Self::Green,
        Self::Orange,
        Self::Pink,
        Self::Purple,
        Self::Red,
        Self::White,
        Self::Yellow,
    ];

    fn code(self) -> char {
        match self {
            Self::Black => 'k',
            Self::Brown => 'n',
            Self::Buff => 'b',
            Self::Chocolate => 'h',
            Self::Gray => 'g',
            Self::Green => 'r',
            Self::Orange => 'o',
            Self::Pink => 'p',
            Self::Purple => 'u',
            Self::Red => 'e',
            Self::White => 'w',
            Self::Yellow => 'y',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Brown => "Brown",
            Self::Buff => "Buff",
            Self::Chocolate => "Chocolate",
            Self::Gray => "Gray",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Purple => "Purple",
            Self::Red => "Red",
            Self::White => "White",
            Self::Yellow => "Yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalkRoot {
    Bulbous,
    Club,
    Cup,
    Equal,
    Rhizomorphs,
    Rooted,
    /// Recorded as `?` in the data set: no clear root is visible.
    Missing,
}

impl TraitValue for StalkRoot {
    const KIND: TraitKind = TraitKind::StalkRoot;
    const ALL: &'static [Self] = &[
        Self::Bulbous,
        Self::Club,
        Self::Cup,
        Self::Equal,
        Self::Rhizomorphs,
        Self::Rooted,
        Self::Missing,
    ];

    fn code(self) -> char {
        match self {
            Self::Bulbous => 'b',
            Self::Club => 'c',
            Self::Cup => 'u',
            Self::Equal => 'e',
            Self::Rhizomorphs => 'z',
            Self::Rooted => 'r',
            Self::Missing => '?',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Bulbous => "Bulbous",
            Self::Club => "Club",
            Self::Cup => "Cup",
            Self::Equal => "Equal",
            Self::Rhizomorphs => "Rhizomorphs",
            Self::Rooted => "Rooted",
            Self::Missing => "Missing",
        }
    }
}

macro_rules! impl_display_and_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $ty {
                type Err = ShroomError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_trait(s)
                }
            }
        )*
    };
}

impl_display_and_from_str!(Odor, GillSize, GillColor, StalkRoot);
