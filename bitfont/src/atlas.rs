// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping glyph source rectangles onto texture page regions.

use crate::error::{Error, ErrorKind};
use crate::font::Font;

/// Placement of one font page inside a loaded texture.
///
/// `x`, `y`, `width` and `height` describe the page's region in pixels;
/// `texture_width` and `texture_height` are the dimensions of the texture
/// holding it. Pages packed into a shared texture get an offset origin;
/// a page that owns its whole texture is just [`PageRegion::full`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageRegion {
    /// Left edge of the region within the texture, in pixels.
    pub x: f32,
    /// Top edge of the region within the texture, in pixels.
    pub y: f32,
    /// Width of the region.
    pub width: f32,
    /// Height of the region.
    pub height: f32,
    /// Width of the whole texture.
    pub texture_width: f32,
    /// Height of the whole texture.
    pub texture_height: f32,
}

impl PageRegion {
    /// A region covering a whole texture of the given size.
    pub fn full(texture_width: f32, texture_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: texture_width,
            height: texture_height,
            texture_width,
            texture_height,
        }
    }
}

impl Font {
    /// Derives normalized texture coordinates for every glyph from the
    /// region of the page that holds it.
    ///
    /// `regions` is indexed by page. A `None` entry that some glyph's page
    /// index lands on — or an index past the end of the slice — is a hole
    /// and fails with [`ErrorKind::MissingRegion`]: every glyph's page
    /// must resolve to a loaded region. For a non-flipped font the two v
    /// coordinates are swapped so v grows toward the top of the glyph.
    pub fn map_regions(&mut self, regions: &[Option<PageRegion>]) -> Result<(), Error> {
        let flipped = self.flipped;
        for glyph in self.glyphs_mut() {
            let region = regions
                .get(glyph.page)
                .copied()
                .flatten()
                .ok_or_else(|| Error::new(ErrorKind::MissingRegion(glyph.page)))?;
            let inv_tex_width = 1.0 / region.texture_width;
            let inv_tex_height = 1.0 / region.texture_height;
            let u = region.x * inv_tex_width;
            let v = region.y * inv_tex_height;

            let x = glyph.src_x as f32;
            let x2 = (glyph.src_x + glyph.width) as f32;
            let y = glyph.src_y as f32;
            let y2 = (glyph.src_y + glyph.height) as f32;

            glyph.u = u + x * inv_tex_width;
            glyph.u2 = u + x2 * inv_tex_width;
            if flipped {
                glyph.v = v + y * inv_tex_height;
                glyph.v2 = v + y2 * inv_tex_height;
            } else {
                glyph.v2 = v + y * inv_tex_height;
                glyph.v = v + y2 * inv_tex_height;
            }
        }
        Ok(())
    }
}
