// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared descriptors and font builders for the test suite.

use bitfont::{Font, Glyph};

/// A small but complete descriptor: one page, six characters covering the
/// space, a capital, a descender and the x-height probe, plus kerning.
pub const SAMPLE: &str = "\
info face=\"Test\" size=32 bold=0 italic=0
common lineHeight=40 base=30 scaleW=256 scaleH=256 pages=1 packed=0
page id=0 file=\"sample.png\"
chars count=6
char id=32 x=0 y=0 width=0 height=0 xoffset=0 yoffset=0 xadvance=10 page=0 chnl=0
char id=65 x=10 y=20 width=20 height=25 xoffset=2 yoffset=3 xadvance=22 page=0 chnl=0
char id=77 x=40 y=20 width=24 height=26 xoffset=1 yoffset=2 xadvance=26 page=0 chnl=0
char id=103 x=70 y=20 width=16 height=25 xoffset=1 yoffset=8 xadvance=18 page=0 chnl=0
char id=108 x=90 y=20 width=6 height=28 xoffset=1 yoffset=2 xadvance=8 page=0 chnl=0
char id=120 x=100 y=20 width=14 height=15 xoffset=1 yoffset=13 xadvance=16 page=0 chnl=0
kernings count=2
kerning first=65 second=108 amount=-2
kerning first=108 second=120 amount=1
";

pub fn sample_font() -> Font {
    Font::parse(SAMPLE, "", false).expect("sample descriptor should parse")
}

/// A glyph with a fixed 5x8 rectangle and the given advance, the way the
/// run and wrap tests want them.
pub fn glyph(c: char, xadvance: i32) -> Glyph {
    let mut g = Glyph::default();
    g.id = c as u16;
    g.width = 5;
    g.height = 8;
    g.xadvance = xadvance;
    g
}

/// A font defining a glyph with the given advance for each listed
/// character.
pub fn font_with(chars: &[(char, i32)]) -> Font {
    let mut font = Font::new();
    for &(c, xadvance) in chars {
        font.set_glyph(c as u16, glyph(c, xadvance));
    }
    font
}

/// A font containing every character of "The quick-fox" with advance 10,
/// except the space which gets 5.
pub fn wrap_font() -> Font {
    let mut font = Font::new();
    for c in "The quick-fox".chars() {
        let xadvance = if c == ' ' { 5 } else { 10 };
        font.set_glyph(c as u16, glyph(c, xadvance));
    }
    font.set_break_chars(vec!['-']);
    font
}
