//! Bracketed text formatting and parsing
//!
//! Vectors print as `[x y z]` and matrices as `[[row][row]]`. The same layout
//! parses back via `FromStr`. This layer exists for debugging and tests; the
//! algebraic core never consumes it.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use crate::{IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Error type for parsing the bracketed vector/matrix layout
#[derive(Debug)]
pub enum ParseGeomError {
    /// Input did not start/end with the expected bracket
    MissingBracket(char),
    /// A component failed to parse as a float
    BadFloat(ParseFloatError),
    /// Wrong number of components or rows
    WrongCount { expected: usize, found: usize },
}

impl fmt::Display for ParseGeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGeomError::MissingBracket(c) => {
                write!(f, "expected '{}' in bracketed layout", c)
            }
            ParseGeomError::BadFloat(err) => write!(f, "bad float component: {}", err),
            ParseGeomError::WrongCount { expected, found } => {
                write!(f, "expected {} components, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ParseGeomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseGeomError::BadFloat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseFloatError> for ParseGeomError {
    fn from(err: ParseFloatError) -> Self {
        ParseGeomError::BadFloat(err)
    }
}

/// Parse `[a b c]` into its whitespace-separated float components
fn parse_components(s: &str, expected: usize) -> Result<Vec<f32>, ParseGeomError> {
    let s = s.trim();
    let inner = s
        .strip_prefix('[')
        .ok_or(ParseGeomError::MissingBracket('['))?;
    let inner = inner
        .strip_suffix(']')
        .ok_or(ParseGeomError::MissingBracket(']'))?;
    let parts: Vec<f32> = inner
        .split_whitespace()
        .map(|t| t.parse::<f32>().map_err(ParseGeomError::from))
        .collect::<Result<_, _>>()?;
    if parts.len() != expected {
        return Err(ParseGeomError::WrongCount {
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

/// Parse `[[a b][c d]]` into `rows` rows of `cols` float components each
fn parse_rows(s: &str, rows: usize, cols: usize) -> Result<Vec<Vec<f32>>, ParseGeomError> {
    let s = s.trim();
    let inner = s
        .strip_prefix('[')
        .ok_or(ParseGeomError::MissingBracket('['))?;
    let inner = inner
        .strip_suffix(']')
        .ok_or(ParseGeomError::MissingBracket(']'))?;
    let mut out = Vec::with_capacity(rows);
    for chunk in inner.split(']') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let row = chunk
            .strip_prefix('[')
            .ok_or(ParseGeomError::MissingBracket('['))?;
        let parts: Vec<f32> = row
            .split_whitespace()
            .map(|t| t.parse::<f32>().map_err(ParseGeomError::from))
            .collect::<Result<_, _>>()?;
        if parts.len() != cols {
            return Err(ParseGeomError::WrongCount {
                expected: cols,
                found: parts.len(),
            });
        }
        out.push(parts);
    }
    if out.len() != rows {
        return Err(ParseGeomError::WrongCount {
            expected: rows,
            found: out.len(),
        });
    }
    Ok(out)
}

// Display impls

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.x, self.y)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.x, self.y, self.z, self.w)
    }
}

impl fmt::Display for IVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.x, self.y)
    }
}

impl fmt::Display for IVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)
    }
}

impl fmt::Display for IVec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.x, self.y, self.z, self.w)
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.x, self.y)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}{}]", self.x, self.y, self.z)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}{}{}]", self.x, self.y, self.z, self.w)
    }
}

// FromStr impls

impl FromStr for Vec2 {
    type Err = ParseGeomError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = parse_components(s, 2)?;
        Ok(Self::new(c[0], c[1]))
    }
}

impl FromStr for Vec3 {
    type Err = ParseGeomError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = parse_components(s, 3)?;
        Ok(Self::new(c[0], c[1], c[2]))
    }
}

impl FromStr for Vec4 {
    type Err = ParseGeomError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = parse_components(s, 4)?;
        Ok(Self::new(c[0], c[1], c[2], c[3]))
    }
}

impl FromStr for Mat2 {
    type Err = ParseGeomError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = parse_rows(s, 2, 2)?;
        Ok(Self::new(Vec2::new(r[0][0], r[0][1]), Vec2::new(r[1][0], r[1][1])))
    }
}

impl FromStr for Mat3 {
    type Err = ParseGeomError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = parse_rows(s, 3, 3)?;
        Ok(Self::new(
            Vec3::new(r[0][0], r[0][1], r[0][2]),
            Vec3::new(r[1][0], r[1][1], r[1][2]),
            Vec3::new(r[2][0], r[2][1], r[2][2]),
        ))
    }
}

impl FromStr for Mat4 {
    type Err = ParseGeomError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = parse_rows(s, 4, 4)?;
        Ok(Self::new(
            Vec4::new(r[0][0], r[0][1], r[0][2], r[0][3]),
            Vec4::new(r[1][0], r[1][1], r[1][2], r[1][3]),
            Vec4::new(r[2][0], r[2][1], r[2][2], r[2][3]),
            Vec4::new(r[3][0], r[3][1], r[3][2], r[3][3]),
        ))
    }
}
