//! Script text color

use std::fmt;

use crate::error::ExclError;

/// Color the game draws a script's text in
///
/// Value 5 is not used by the game and is rejected like any other unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum TextColor {
    #[default]
    White = 0,
    Black = 1,
    Red = 2,
    LightBlue = 3,
    Orange = 4,
    Pink = 6,
    Gray = 7,
}

impl TextColor {
    /// Raw value as stored in the header
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::LightBlue => "LightBlue",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Gray => "Gray",
        }
    }
}

impl TryFrom<u32> for TextColor {
    type Error = ExclError;

    fn try_from(val: u32) -> Result<Self, Self::Error> {
        match val {
            0 => Ok(Self::White),
            1 => Ok(Self::Black),
            2 => Ok(Self::Red),
            3 => Ok(Self::LightBlue),
            4 => Ok(Self::Orange),
            6 => Ok(Self::Pink),
            7 => Ok(Self::Gray),
            _ => Err(ExclError::InvalidTextColor(val)),
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
