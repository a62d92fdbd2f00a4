// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metric mutation tests: rescaling, line height and fixed-width glyphs.

use crate::util::{SAMPLE, sample_font};
use bitfont::{ErrorKind, Font};

#[test]
fn set_scale_updates_all_line_metrics() {
    let mut font = sample_font();
    font.set_scale(2.0, 3.0).unwrap();
    assert_eq!(font.scale_x(), 2.0);
    assert_eq!(font.scale_y(), 3.0);
    assert_eq!(font.line_height(), 120.0);
    assert_eq!(font.space_width(), 20.0);
    assert_eq!(font.x_height(), 45.0);
    assert_eq!(font.cap_height(), 78.0);
    assert_eq!(font.ascent(), 12.0);
    assert_eq!(font.descent(), -9.0);
    assert_eq!(font.down(), -120.0);
}

#[test]
fn set_scale_is_relative_to_the_current_scale() {
    let mut font = sample_font();
    font.set_scale(2.0, 2.0).unwrap();
    font.set_scale(1.0, 1.0).unwrap();
    assert_eq!(font.line_height(), 40.0);
    assert_eq!(font.space_width(), 10.0);
    assert_eq!(font.descent(), -3.0);
}

#[test]
fn set_scale_rejects_zero() {
    let mut font = sample_font();
    let err = font.set_scale(0.0, 1.0).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::ZeroScale, "{err}");
    let err = font.set_scale(1.0, 0.0).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::ZeroScale, "{err}");
    // The font is untouched after a rejected rescale.
    assert_eq!(font.scale_x(), 1.0);
    assert_eq!(font.line_height(), 40.0);
}

#[test]
fn scale_by_adds_to_both_factors() {
    let mut font = sample_font();
    font.scale_by(1.0).unwrap();
    assert_eq!(font.scale_x(), 2.0);
    assert_eq!(font.scale_y(), 2.0);
    assert_eq!(font.line_height(), 80.0);
    let err = font.scale_by(-2.0).unwrap_err();
    assert_eq!(*err.kind(), ErrorKind::ZeroScale, "{err}");
}

#[test]
fn set_line_height_follows_the_flip_flag() {
    let mut font = sample_font();
    font.set_line_height(50.0);
    assert_eq!(font.line_height(), 50.0);
    assert_eq!(font.down(), -50.0);

    let mut flipped = Font::parse(SAMPLE, "", true).unwrap();
    flipped.set_line_height(50.0);
    assert_eq!(flipped.down(), 50.0);
}

#[test]
fn set_line_height_applies_the_vertical_scale() {
    let mut font = sample_font();
    font.set_scale(1.0, 2.0).unwrap();
    font.set_line_height(50.0);
    assert_eq!(font.line_height(), 100.0);
    assert_eq!(font.down(), -100.0);
}

#[test]
fn fixed_width_glyphs_share_the_widest_advance() {
    let mut font = sample_font();
    // 'A' advances 22, 'l' advances 8; both end up at 22.
    font.set_fixed_width_glyphs("Al");
    let a = font.glyph('A').unwrap();
    assert_eq!(a.xadvance, 22);
    assert_eq!(a.xoffset, 2);
    let l = font.glyph('l').unwrap();
    assert_eq!(l.xadvance, 22);
    // Centered: 1 + (22 - 8) / 2.
    assert_eq!(l.xoffset, 8);
}

#[test]
fn fixed_width_glyphs_drop_kerning() {
    let mut font = sample_font();
    assert_eq!(font.glyph('A').unwrap().kerning('l'), -2);
    font.set_fixed_width_glyphs("A");
    assert_eq!(font.glyph('A').unwrap().kerning('l'), 0);
}

#[test]
fn contains_reports_defined_characters() {
    let font = sample_font();
    assert!(font.contains('A'));
    assert!(font.contains(' '));
    assert!(!font.contains('B'));
    assert!(!font.contains('\u{10000}'));
}
