// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paged glyph table and derived font metrics.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::error::{Error, ErrorKind};
use crate::glyph::{Glyph, LOG2_PAGE_SIZE, PAGE_SIZE, PAGES, bmp_code};

/// Characters whose glyph height approximates the typical lowercase
/// height. The first one present in the font wins; the order is part of
/// the metric-derivation contract.
pub const X_CHARS: [char; 13] = [
    'x', 'e', 'a', 'o', 'n', 's', 'r', 'c', 'u', 'm', 'v', 'w', 'z',
];

/// Characters whose glyph height approximates the capital height, in
/// preference order.
pub const CAP_CHARS: [char; 26] = [
    'M', 'N', 'B', 'D', 'C', 'E', 'F', 'K', 'A', 'G', 'H', 'I', 'J', 'L', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub(crate) type GlyphPage = Box<[Option<Glyph>]>;

/// Glyph metrics and layout data for one bitmap font.
///
/// Built by [`Font::parse`] (or [`Font::load`]) from an AngleCode BMFont
/// text descriptor, or assembled manually through [`Font::set_glyph`] when
/// glyph data comes from elsewhere. The table maps 16-bit character codes
/// to [`Glyph`]s through lazily allocated 512-slot pages, so sparse
/// character sets stay cheap while lookup remains O(1).
///
/// The font is written during parsing and by the explicit mutators
/// ([`Font::set_scale`], [`Font::set_fixed_width_glyphs`],
/// [`Font::map_regions`], [`Font::set_line_height`]) and is read-only
/// otherwise. Layout consumers borrow it; any cached layout must be
/// re-derived after a mutation.
pub struct Font {
    pub(crate) pages: Vec<Option<GlyphPage>>,
    pub(crate) image_paths: SmallVec<[String; 1]>,
    pub(crate) line_height: f32,
    pub(crate) cap_height: f32,
    pub(crate) ascent: f32,
    pub(crate) descent: f32,
    pub(crate) down: f32,
    pub(crate) scale_x: f32,
    pub(crate) scale_y: f32,
    pub(crate) space_width: f32,
    pub(crate) x_height: f32,
    pub(crate) flipped: bool,
    pub(crate) markup_enabled: bool,
    pub(crate) break_chars: Vec<char>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            pages: vec![None; PAGES],
            image_paths: SmallVec::new(),
            line_height: 0.0,
            cap_height: 1.0,
            ascent: 0.0,
            descent: 0.0,
            down: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            space_width: 0.0,
            x_height: 1.0,
            flipped: false,
            markup_enabled: false,
            break_chars: Vec::new(),
        }
    }
}

impl Font {
    /// Creates an empty font with no glyphs and default metrics, for
    /// callers that build the glyph table themselves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a glyph at a 16-bit character code, allocating the
    /// containing table page on first use.
    pub fn set_glyph(&mut self, code: u16, glyph: Glyph) {
        let page = self.pages[usize::from(code) >> LOG2_PAGE_SIZE]
            .get_or_insert_with(|| vec![None; PAGE_SIZE].into_boxed_slice());
        page[usize::from(code) & (PAGE_SIZE - 1)] = Some(glyph);
    }

    /// Returns the glyph for a character, or `None` if the font doesn't
    /// define one. Characters outside the 16-bit range are never defined.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyph_by_code(bmp_code(c)?)
    }

    pub(crate) fn glyph_by_code(&self, code: u16) -> Option<&Glyph> {
        self.pages[usize::from(code) >> LOG2_PAGE_SIZE]
            .as_ref()
            .and_then(|page| page[usize::from(code) & (PAGE_SIZE - 1)].as_ref())
    }

    pub(crate) fn glyph_by_code_mut(&mut self, code: u16) -> Option<&mut Glyph> {
        self.pages[usize::from(code) >> LOG2_PAGE_SIZE]
            .as_mut()
            .and_then(|page| page[usize::from(code) & (PAGE_SIZE - 1)].as_mut())
    }

    /// Returns the first glyph with positive width and height, scanning
    /// table pages in ascending code order, or `None` if the font has no
    /// renderable glyph. Used as a fallback when deriving metrics.
    pub fn first_glyph(&self) -> Option<&Glyph> {
        self.glyphs().find(|g| g.width > 0 && g.height > 0)
    }

    /// Checks whether the font defines a glyph for the given character.
    pub fn contains(&self, c: char) -> bool {
        self.glyph(c).is_some()
    }

    pub(crate) fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.pages
            .iter()
            .flatten()
            .flat_map(|page| page.iter().flatten())
    }

    pub(crate) fn glyphs_mut(&mut self) -> impl Iterator<Item = &mut Glyph> {
        self.pages
            .iter_mut()
            .flatten()
            .flat_map(|page| page.iter_mut().flatten())
    }

    /// Distance from one line of text to the next.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Sets the line height (scaled by the vertical scale factor) and
    /// re-derives the down direction from the flip flag.
    pub fn set_line_height(&mut self, height: f32) {
        self.line_height = height * self.scale_y;
        self.down = if self.flipped {
            self.line_height
        } else {
            -self.line_height
        };
    }

    /// Width of the space character.
    pub fn space_width(&self) -> f32 {
        self.space_width
    }

    /// Distance from the top of most lowercase characters to the baseline.
    pub fn x_height(&self) -> f32 {
        self.x_height
    }

    /// Distance from the top of most uppercase characters to the baseline.
    pub fn cap_height(&self) -> f32 {
        self.cap_height
    }

    /// Distance from the cap height to the top of the tallest glyph.
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Distance from the baseline to the bottom of the glyph extending the
    /// lowest. At most zero for a non-flipped font.
    pub fn descent(&self) -> f32 {
        self.descent
    }

    /// Vertical distance between the baselines of consecutive lines;
    /// negative unless the font is flipped.
    pub fn down(&self) -> f32 {
        self.down
    }

    /// Horizontal scale factor.
    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    /// Vertical scale factor.
    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    /// True if glyph y-offsets follow a y-down, top-left-origin convention.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// True if the run builder treats `[[` as an escaped left bracket.
    pub fn markup_enabled(&self) -> bool {
        self.markup_enabled
    }

    /// Enables or disables markup-aware run building.
    pub fn set_markup_enabled(&mut self, enabled: bool) {
        self.markup_enabled = enabled;
    }

    /// Extra characters besides whitespace where text may wrap, such as a
    /// hyphen.
    pub fn break_chars(&self) -> &[char] {
        &self.break_chars
    }

    /// Replaces the extra word-break characters.
    pub fn set_break_chars(&mut self, chars: Vec<char>) {
        self.break_chars = chars;
    }

    /// Returns the image path for the texture page at the given index.
    pub fn image_path(&self, index: usize) -> Option<&str> {
        self.image_paths.get(index).map(String::as_str)
    }

    /// Image paths for all texture pages, in declaration order.
    pub fn image_paths(&self) -> &[String] {
        &self.image_paths
    }

    /// Rescales the font, proportionally updating every line metric.
    ///
    /// Fails with [`ErrorKind::ZeroScale`] if either factor is zero; the
    /// font is left untouched in that case.
    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) -> Result<(), Error> {
        if scale_x == 0.0 || scale_y == 0.0 {
            return Err(Error::new(ErrorKind::ZeroScale));
        }
        let x = scale_x / self.scale_x;
        let y = scale_y / self.scale_y;
        self.line_height *= y;
        self.space_width *= x;
        self.x_height *= y;
        self.cap_height *= y;
        self.ascent *= y;
        self.descent *= y;
        self.down *= y;
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        Ok(())
    }

    /// Adds `amount` to both scale factors.
    ///
    /// Fails with [`ErrorKind::ZeroScale`] if a resulting factor is zero.
    pub fn scale_by(&mut self, amount: f32) -> Result<(), Error> {
        self.set_scale(self.scale_x + amount, self.scale_y + amount)
    }

    /// Makes the glyphs for the given characters fixed width.
    ///
    /// Useful for numbers: centered scores or percentages stop jumping
    /// around as digits change. Each glyph is centered within the largest
    /// x-advance of the set, its advance set to that maximum and its
    /// kerning dropped. Characters without a glyph are ignored.
    pub fn set_fixed_width_glyphs(&mut self, chars: &str) {
        let mut max_advance = 0;
        for c in chars.chars() {
            if let Some(glyph) = self.glyph(c) {
                max_advance = max_advance.max(glyph.xadvance);
            }
        }
        for c in chars.chars() {
            let Some(code) = bmp_code(c) else { continue };
            let Some(glyph) = self.glyph_by_code_mut(code) else {
                continue;
            };
            glyph.xoffset += (max_advance - glyph.xadvance) / 2;
            glyph.xadvance = max_advance;
            glyph.clear_kerning();
        }
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("glyphs", &self.glyphs().count())
            .field("image_paths", &self.image_paths)
            .field("line_height", &self.line_height)
            .field("cap_height", &self.cap_height)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .field("space_width", &self.space_width)
            .field("x_height", &self.x_height)
            .field("scale_x", &self.scale_x)
            .field("scale_y", &self.scale_y)
            .field("flipped", &self.flipped)
            .finish_non_exhaustive()
    }
}
