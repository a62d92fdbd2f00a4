// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph runs: resolving text spans into glyph and advance sequences, and
//! choosing word-wrap break points within them.

use alloc::vec::Vec;

use crate::font::Font;
use crate::glyph::Glyph;

/// An ordered sequence of resolved glyphs plus their advances.
///
/// For a run of `n` glyphs there are exactly `n` advances: `x_advances[i]`
/// is the scaled advance from `glyphs[i]` to the next glyph with kerning
/// included, and the final entry is the bare advance after the last glyph
/// (the space the cursor consumes past the last visible glyph).
///
/// A run borrows the font it was built from, so the font cannot be
/// mutated (rescaled, normalized, reparsed) while a run is alive; rebuild
/// runs after such a mutation. Within a layout pass the buffers are meant
/// to be cleared and refilled rather than reallocated.
#[derive(Clone, Debug, Default)]
pub struct GlyphRun<'a> {
    /// Resolved glyphs in text order.
    pub glyphs: Vec<&'a Glyph>,
    /// Advance amounts, one per glyph; see the type docs for the layout.
    pub x_advances: Vec<f32>,
}

impl GlyphRun<'_> {
    /// Creates an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the run for reuse.
    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.x_advances.clear();
    }
}

impl Font {
    /// Resolves `text` into glyphs and advances, appending to `run`.
    ///
    /// Characters without a glyph contribute nothing: they are neither
    /// rendered nor advanced over. Kerning and the horizontal scale
    /// factor apply to every advance. When markup is enabled, `[[` is an
    /// escaped left bracket and the second bracket produces no glyph.
    /// The text must not contain newlines or markup tags; those are split
    /// off by the caller before runs are built.
    pub fn append_glyphs<'a>(&'a self, run: &mut GlyphRun<'a>, text: &str) {
        let markup_enabled = self.markup_enabled;
        let scale_x = self.scale_x;
        let mut last_glyph: Option<&Glyph> = None;
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            let Some(glyph) = self.glyph(ch) else { continue };
            run.glyphs.push(glyph);

            if let Some(last) = last_glyph {
                run.x_advances
                    .push((last.xadvance + last.kerning(ch)) as f32 * scale_x);
            }
            last_glyph = Some(glyph);

            // "[[" is an escaped left square bracket, skip the second one.
            if markup_enabled && ch == '[' && chars.peek() == Some(&'[') {
                chars.next();
            }
        }
        if let Some(last) = last_glyph {
            run.x_advances.push(last.xadvance as f32 * scale_x);
        }
    }

    /// Computes per-character advances and cumulative pen positions for
    /// `text`, honoring kerning and the horizontal scale factor.
    ///
    /// Both output vectors are cleared first. One trailing
    /// `(0, total_width)` pair is appended, so the last position is the
    /// full width of the text.
    pub fn glyph_advances(&self, text: &str, advances: &mut Vec<f32>, positions: &mut Vec<f32>) {
        advances.clear();
        positions.clear();
        let scale_x = self.scale_x;
        let mut width = 0.0;
        let mut last_glyph: Option<&Glyph> = None;
        for ch in text.chars() {
            let Some(glyph) = self.glyph(ch) else { continue };
            if let Some(last) = last_glyph {
                width += last.kerning(ch) as f32 * scale_x;
            }
            last_glyph = Some(glyph);
            let xadvance = glyph.xadvance as f32 * scale_x;
            advances.push(xadvance);
            positions.push(width);
            width += xadvance;
        }
        advances.push(0.0);
        positions.push(width);
    }

    /// Given the glyphs of a line and the index of the first glyph that no
    /// longer fits, returns the index the line should actually end at.
    ///
    /// Whitespace at `start` breaks immediately after it. Otherwise the
    /// glyphs before `start` are scanned backward: the first whitespace
    /// found breaks just after itself, while the first configured break
    /// character (see [`Font::set_break_chars`]) breaks at itself so it
    /// stays at the end of the line. With no opportunity down to index 1
    /// the original index comes back unchanged and the line overflows
    /// mid-token.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of bounds for `glyphs`.
    pub fn wrap_index(&self, glyphs: &[&Glyph], start: usize) -> usize {
        if is_whitespace_code(glyphs[start].id) {
            return start + 1;
        }
        for i in (1..start).rev() {
            let id = glyphs[i].id;
            if is_whitespace_code(id) {
                return i + 1;
            }
            if self.is_break_char_code(id) {
                return i;
            }
        }
        start
    }

    /// True if `c` is one of the font's extra word-break characters.
    pub fn is_break_char(&self, c: char) -> bool {
        self.break_chars.contains(&c)
    }

    /// True for the characters the wrap algorithm treats as whitespace:
    /// newline, carriage return, tab and space. Other visually blank
    /// characters are not whitespace here.
    pub fn is_whitespace(c: char) -> bool {
        matches!(c, '\n' | '\r' | '\t' | ' ')
    }

    fn is_break_char_code(&self, id: u16) -> bool {
        self.break_chars.iter().any(|&c| u32::from(c) == u32::from(id))
    }
}

fn is_whitespace_code(id: u16) -> bool {
    matches!(id, 0x09 | 0x0A | 0x0D | 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_exactly_four_characters() {
        assert!(Font::is_whitespace('\n'));
        assert!(Font::is_whitespace('\r'));
        assert!(Font::is_whitespace('\t'));
        assert!(Font::is_whitespace(' '));
        // NBSP and vertical tab look blank but are not break points.
        assert!(!Font::is_whitespace('\u{a0}'));
        assert!(!Font::is_whitespace('\u{b}'));
    }

    #[test]
    fn break_chars_default_empty() {
        let mut font = Font::new();
        assert!(!font.is_break_char('-'));
        font.set_break_chars(alloc::vec!['-']);
        assert!(font.is_break_char('-'));
        assert!(!font.is_break_char('+'));
    }
}
