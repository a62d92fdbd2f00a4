// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for font loading and layout.

use alloc::boxed::Box;
use core::fmt;

/// Error produced when loading a font descriptor or misusing the font API.
///
/// Carries a non-exhaustive [`ErrorKind`] plus, when the failure occurred
/// while loading a descriptor from disk, the identity of the font file so
/// the message points at the offending asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    font: Option<Box<str>>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The identity of the font file being loaded when the error occurred,
    /// if any.
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind, font: None }
    }

    pub(crate) fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.into());
        self
    }

    pub(crate) fn missing_field(field: &'static str) -> Self {
        Self::new(ErrorKind::MissingField(field))
    }

    pub(crate) fn invalid_number(token: &str) -> Self {
        Self::new(ErrorKind::InvalidNumber(token.into()))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(font) = &self.font {
            write!(f, "error loading font file `{font}`: ")?;
        }
        match &self.kind {
            ErrorKind::EmptyFile => write!(f, "file is empty"),
            ErrorKind::InvalidHeader => write!(f, "invalid common header"),
            ErrorKind::MissingField(field) => write!(f, "missing field: {field}"),
            ErrorKind::MissingPage => write!(f, "missing page definition"),
            ErrorKind::InvalidPageId(token) => write!(f, "invalid page id: `{token}`"),
            ErrorKind::PageIdMismatch { expected, found } => write!(
                f,
                "page ids must be indices starting at 0: expected {expected}, found {found}"
            ),
            ErrorKind::InvalidNumber(token) => write!(f, "invalid number: `{token}`"),
            ErrorKind::TruncatedLine => write!(f, "line ended before all required fields"),
            ErrorKind::NoGlyphs => write!(f, "no glyphs found"),
            ErrorKind::ZeroScale => write!(f, "scale factor cannot be zero"),
            ErrorKind::MissingRegion(page) => {
                write!(f, "no texture region for page {page}")
            }
            #[cfg(feature = "std")]
            ErrorKind::Io(message) => write!(f, "{message}"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
///
/// The descriptor-parsing variants abort the whole load; no partial font is
/// ever produced. [`ZeroScale`](Self::ZeroScale) and
/// [`MissingRegion`](Self::MissingRegion) report caller misuse of an already
/// loaded font and are distinct from data errors. Out-of-range character
/// codes and kerning pairs for absent glyphs are never errors; the parser
/// drops them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The descriptor had no common line.
    EmptyFile,
    /// The common line did not have enough fields.
    InvalidHeader,
    /// A required `key=` field was absent (`lineHeight`, `base` or `file`).
    MissingField(&'static str),
    /// Fewer page lines than the declared page count.
    MissingPage,
    /// A page `id=` value that is not a number.
    InvalidPageId(Box<str>),
    /// A page `id=` value that disagrees with the page's position.
    PageIdMismatch {
        /// The page's position in declaration order.
        expected: i32,
        /// The id the descriptor claimed.
        found: i32,
    },
    /// A numeric field failed to parse.
    InvalidNumber(Box<str>),
    /// A `char` or `kerning` line ended before all required fields.
    TruncatedLine,
    /// The font defines no glyph with positive width and height.
    NoGlyphs,
    /// A zero scale factor was passed to a rescale.
    ZeroScale,
    /// A glyph's page index did not resolve to a texture region.
    MissingRegion(usize),
    /// The descriptor file could not be read.
    #[cfg(feature = "std")]
    Io(Box<str>),
}
