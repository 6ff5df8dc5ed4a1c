//! Source positions inside fixture files.

use std::fmt;

/// Represents a position in source code.
///
/// Lines and columns are 1-based; `offset` is the byte offset from the
/// start of the source.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::from_offset("ab\ncd", 4);
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 2);
/// assert_eq!(pos.to_string(), "2:2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number in characters (1-based)
    pub column: u32,
    /// Byte offset from the start of the source file
    pub offset: usize,
}

impl SourcePosition {
    /// Compute the line and column of a byte offset in `source`.
    ///
    /// Offsets past the end, or inside a multi-byte character, are clamped
    /// back to the nearest preceding character boundary.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let line = before.matches('\n').count() as u32 + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = source[line_start..offset].chars().count() as u32 + 1;

        SourcePosition {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
