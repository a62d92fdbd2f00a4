// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics and text layout for bitmap fonts.
//!
//! A bitmap font pairs one or more page images of pre-rendered glyphs with
//! a text descriptor in the AngleCode BMFont format describing where each
//! glyph sits and how to advance between them. This crate parses the
//! descriptor into a sparse, paged glyph table with kerning ([`Font`]),
//! resolves text spans into glyph and advance sequences ([`GlyphRun`]) and
//! picks word-wrap break points within those sequences.
//!
//! Image decoding, texture upload and quad batching belong to the
//! surrounding renderer; [`Font::map_regions`] derives the normalized
//! texture coordinates the renderer needs once it knows where each page
//! image landed.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod atlas;
mod error;
mod font;
mod glyph;
mod parse;
mod run;

pub use atlas::PageRegion;
pub use error::{Error, ErrorKind};
pub use font::{CAP_CHARS, Font, X_CHARS};
pub use glyph::Glyph;
pub use run::GlyphRun;
