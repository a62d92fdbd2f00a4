// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streaming parser for AngleCode BMFont text descriptors.

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::{Error, ErrorKind};
use crate::font::{CAP_CHARS, Font, X_CHARS};
use crate::glyph::Glyph;

const SPACE: u16 = 32;

impl Font {
    /// Parses a BMFont text descriptor.
    ///
    /// `dir` is the directory containing the descriptor; page image paths
    /// are resolved against it, with path separators normalized to `/`
    /// (pass `""` to keep the bare file names). With `flip` set, glyph
    /// y-offsets follow a y-down, top-left-origin convention; otherwise
    /// they are measured from an inverted baseline.
    ///
    /// Any malformed line aborts the whole parse — a font is either fully
    /// loaded or not at all. Character codes outside the 16-bit range and
    /// kerning pairs for glyphs the font doesn't define are dropped
    /// without failing, since BMFont generators commonly emit them.
    pub fn parse(src: &str, dir: &str, flip: bool) -> Result<Self, Error> {
        let mut font = Self {
            flipped: flip,
            ..Self::default()
        };
        let mut lines = src.lines();

        // The info line carries no layout data.
        let _info = lines.next();

        let line = lines.next().ok_or_else(|| Error::new(ErrorKind::EmptyFile))?;
        // At most the 6th field is wanted, i.e. "pages=N".
        let common: Vec<&str> = line.splitn(7, ' ').collect();

        // At least lineHeight and base are required.
        if common.len() < 3 {
            return Err(Error::new(ErrorKind::InvalidHeader));
        }
        let value = common[1]
            .strip_prefix("lineHeight=")
            .ok_or_else(|| Error::missing_field("lineHeight"))?;
        font.line_height = parse_int(value)? as f32;

        let value = common[2]
            .strip_prefix("base=")
            .ok_or_else(|| Error::missing_field("base"))?;
        let base = parse_int(value)? as f32;

        let mut page_count = 1;
        if let Some(value) = common.get(5).and_then(|field| field.strip_prefix("pages=")) {
            // A malformed count means a single page.
            page_count = value.parse::<i32>().map_or(1, |n| n.max(1));
        }

        for p in 0..page_count {
            let line = lines
                .next()
                .ok_or_else(|| Error::new(ErrorKind::MissingPage))?;
            let fields: Vec<&str> = line.splitn(4, ' ').collect();
            let name = fields
                .get(2)
                .and_then(|field| field.strip_prefix("file="))
                .ok_or_else(|| Error::missing_field("file"))?;

            // An explicit id must agree with the page's position.
            if let Some(id) = fields.get(1).and_then(|field| field.strip_prefix("id=")) {
                let found: i32 = id
                    .parse()
                    .map_err(|_| Error::new(ErrorKind::InvalidPageId(id.into())))?;
                if found != p {
                    return Err(Error::new(ErrorKind::PageIdMismatch { expected: p, found }));
                }
            }

            let name = match name.strip_suffix('"') {
                Some(stripped) => stripped.strip_prefix('"').unwrap_or(stripped),
                None => name,
            };
            let path = if dir.is_empty() {
                name.to_string()
            } else {
                format!("{}/{name}", dir.trim_end_matches(['/', '\\']))
            };
            font.image_paths.push(path.replace('\\', "/"));
        }

        font.descent = 0.0;

        // Character block: runs until the kernings header or end of stream.
        let mut kernings_follow = false;
        for line in lines.by_ref() {
            if line.starts_with("kernings ") {
                kernings_follow = true;
                break;
            }
            if !line.starts_with("char ") {
                continue;
            }

            let mut fields = Fields::new(line);
            fields.skip(2); // "char id"
            let ch = fields.int()?;
            let code = match u16::try_from(ch) {
                Ok(code) => code,
                Err(_) if ch > 0xFFFF => {
                    // Generators emit codes outside the 16-bit space; the
                    // line is consumed but nothing is stored.
                    log::debug!("dropping out-of-range char id {ch}");
                    continue;
                }
                Err(_) => return Err(Error::invalid_number(&ch.to_string())),
            };

            let mut glyph = Glyph {
                id: code,
                ..Glyph::default()
            };
            fields.skip(1); // "x"
            glyph.src_x = fields.int()?;
            fields.skip(1); // "y"
            glyph.src_y = fields.int()?;
            fields.skip(1); // "width"
            glyph.width = fields.int()?;
            fields.skip(1); // "height"
            glyph.height = fields.int()?;
            fields.skip(1); // "xoffset"
            glyph.xoffset = fields.int()?;
            fields.skip(1); // "yoffset"
            let yoffset = fields.int()?;
            // A y-down font takes the raw offset; otherwise the offset is
            // measured from an inverted baseline.
            glyph.yoffset = if flip {
                yoffset
            } else {
                -(glyph.height + yoffset)
            };
            fields.skip(1); // "xadvance"
            glyph.xadvance = fields.int()?;

            // The page index may be omitted or malformed; both mean 0.
            fields.skip(1);
            if let Some(value) = fields.next() {
                glyph.page = value.parse().unwrap_or(0);
            }

            if glyph.width > 0 && glyph.height > 0 {
                font.descent = font.descent.min(base + glyph.yoffset as f32);
            }
            font.set_glyph(code, glyph);
        }

        if kernings_follow {
            for line in lines {
                if !line.starts_with("kerning ") {
                    break;
                }
                let mut fields = Fields::new(line);
                fields.skip(2); // "kerning first"
                let first = fields.int()?;
                fields.skip(1); // "second"
                let second = fields.int()?;
                let (first, second) = match (u16::try_from(first), u16::try_from(second)) {
                    (Ok(first), Ok(second)) => (first, second),
                    _ => {
                        log::debug!("dropping kerning pair {first}/{second} outside the 16-bit range");
                        continue;
                    }
                };
                fields.skip(1); // "amount"
                let amount = fields.int()?;
                match font.glyph_by_code_mut(first) {
                    // Amounts store as a signed byte, wrapping like the
                    // format itself.
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "amounts wrap to the byte range by contract"
                    )]
                    Some(glyph) => glyph.set_kerning(second, amount as i8),
                    // Kernings may exist for glyph pairs not contained in
                    // the font.
                    None => log::debug!("dropping kerning for char {first} with no glyph"),
                }
            }
        }

        // A font without an explicit space still needs space metrics.
        if font.glyph_by_code(SPACE).is_none() {
            let xadvance = font
                .glyph('l')
                .or_else(|| font.first_glyph())
                .ok_or_else(|| Error::new(ErrorKind::NoGlyphs))?
                .xadvance;
            let space = Glyph {
                id: SPACE,
                xadvance,
                ..Glyph::default()
            };
            font.set_glyph(SPACE, space);
        }
        font.space_width = font
            .glyph_by_code(SPACE)
            .map_or(1.0, |space| (space.xadvance + space.width) as f32);

        let x_height = X_CHARS
            .iter()
            .find_map(|&c| font.glyph(c))
            .or_else(|| font.first_glyph())
            .ok_or_else(|| Error::new(ErrorKind::NoGlyphs))?
            .height;
        font.x_height = x_height as f32;

        font.cap_height = match CAP_CHARS.iter().find_map(|&c| font.glyph(c)) {
            Some(cap_glyph) => cap_glyph.height as f32,
            // No capital present: the tallest renderable glyph stands in,
            // bounded below by 1.
            None => font
                .glyphs()
                .filter(|g| g.width > 0 && g.height > 0)
                .fold(1.0_f32, |max, g| max.max(g.height as f32)),
        };

        font.ascent = base - font.cap_height;
        font.down = -font.line_height;
        if flip {
            font.ascent = -font.ascent;
            font.down = -font.down;
        }

        Ok(font)
    }

    /// Reads and parses the BMFont descriptor at `path`.
    ///
    /// Page image paths are resolved relative to the descriptor's parent
    /// directory. Errors are tagged with the descriptor path.
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>, flip: bool) -> Result<Self, Error> {
        let path = path.as_ref();
        let identity = path.display().to_string();
        let src = std::fs::read_to_string(path)
            .map_err(|e| Error::new(ErrorKind::Io(e.to_string().into())).with_font(&identity))?;
        let dir = path.parent().and_then(|p| p.to_str()).unwrap_or("");
        Self::parse(&src, dir, flip).map_err(|e| e.with_font(&identity))
    }
}

fn parse_int(token: &str) -> Result<i32, Error> {
    token.parse().map_err(|_| Error::invalid_number(token))
}

/// Tokenizer for `char` and `kerning` lines: fields are delimited by runs
/// of spaces and `=`, so keys and values come out as alternating tokens.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches([' ', '=']);
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }
        let end = rest.find([' ', '=']).unwrap_or(rest.len());
        let (token, rest) = rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.next();
        }
    }

    fn int(&mut self) -> Result<i32, Error> {
        let token = self
            .next()
            .ok_or_else(|| Error::new(ErrorKind::TruncatedLine))?;
        parse_int(token)
    }
}
