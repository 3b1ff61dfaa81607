//! Face labels and weight coercion.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One labeled side of a die.
///
/// Faces compare by value. When sorted, integer faces come before text faces;
/// integers order numerically and text orders lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Face {
    /// A numeric face such as `6`.
    Int(i64),
    /// A text face such as `"H"`.
    Text(String),
}

impl Face {
    /// Returns the integer value if this is a numeric face.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the label if this is a text face.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Parses a face from user input: anything that reads as an integer becomes
/// [`Face::Int`], everything else is kept verbatim as [`Face::Text`].
impl FromStr for Face {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Text(trimmed.to_string()),
        })
    }
}

macro_rules! face_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Face {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

face_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Face {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Face {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<char> for Face {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<&Face> for Face {
    fn from(face: &Face) -> Self {
        face.clone()
    }
}

/// A value that can be coerced into a die weight.
///
/// Numbers convert directly. Strings are trimmed and parsed once as `f64`.
/// On failure the raw input is returned so it can be reported. Range checks
/// (finite, non-negative) happen in [`Die::reweight`](crate::Die::reweight).
pub trait IntoWeight {
    /// Convert into a raw weight, or return the unparseable input.
    fn into_weight(self) -> Result<f64, String>;
}

impl IntoWeight for f64 {
    fn into_weight(self) -> Result<f64, String> {
        Ok(self)
    }
}

impl IntoWeight for f32 {
    fn into_weight(self) -> Result<f64, String> {
        Ok(f64::from(self))
    }
}

macro_rules! weight_from_int {
    ($($t:ty),*) => {
        $(
            impl IntoWeight for $t {
                fn into_weight(self) -> Result<f64, String> {
                    Ok(f64::from(self))
                }
            }
        )*
    };
}

weight_from_int!(i8, i16, i32, u8, u16, u32);

impl IntoWeight for i64 {
    fn into_weight(self) -> Result<f64, String> {
        Ok(self as f64)
    }
}

impl IntoWeight for u64 {
    fn into_weight(self) -> Result<f64, String> {
        Ok(self as f64)
    }
}

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64, String> {
        self.trim().parse::<f64>().map_err(|_| self.to_string())
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64, String> {
        self.as_str().into_weight()
    }
}
