/// Color specs in the turtle style: names like "blue" or hex strings like "#0000ff"
use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{alpha1, multispace0},
    combinator::{all_consuming, map, map_opt, map_res},
    sequence::{delimited, preceded, tuple},
    IResult,
};

use crate::error::Error;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(160, 32, 240)),
    ("pink", Color::rgb(255, 192, 203)),
    ("brown", Color::rgb(165, 42, 42)),
    ("gray", Color::rgb(190, 190, 190)),
    ("grey", Color::rgb(190, 190, 190)),
    ("navy", Color::rgb(0, 0, 128)),
    ("gold", Color::rgb(255, 215, 0)),
];

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Parse a color name or `#rgb` / `#rrggbb` hex string
    pub fn parse(spec: &str) -> Result<Self, Error> {
        match all_consuming(delimited(multispace0, parse_color, multispace0))(spec) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(Error::InvalidColor(spec.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_color(input: &str) -> IResult<&str, Color> {
    alt((parse_hex, map_opt(alpha1, Color::named)))(input)
}

fn parse_hex(input: &str) -> IResult<&str, Color> {
    preceded(tag("#"), alt((parse_hex6, parse_hex3)))(input)
}

fn parse_hex6(input: &str) -> IResult<&str, Color> {
    map(tuple((hex_pair, hex_pair, hex_pair)), |(r, g, b)| {
        Color::rgb(r, g, b)
    })(input)
}

fn parse_hex3(input: &str) -> IResult<&str, Color> {
    // "#abc" is shorthand for "#aabbcc"
    map(tuple((hex_digit, hex_digit, hex_digit)), |(r, g, b)| {
        Color::rgb(r * 17, g * 17, b * 17)
    })(input)
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |hex| {
        u8::from_str_radix(hex, 16)
    })(input)
}

fn hex_digit(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, |c: char| c.is_ascii_hexdigit()), |hex| {
        u8::from_str_radix(hex, 16)
    })(input)
}
