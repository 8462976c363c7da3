use super::{anchor_index, jitter, ShapeContext, ShapePoint};
use crate::constants::{TEXT_CELL, TEXT_LINES};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;

pub const TEXT_FONT_WIDTH: usize = 5;
pub const TEXT_FONT_HEIGHT: usize = 7;
const LETTER_GAP: usize = 1;
const LINE_GAP: usize = 2;

// Rows top to bottom, bit 4 is the leftmost column.
fn font() -> FnvHashMap<char, [u8; TEXT_FONT_HEIGHT]> {
    let mut glyphs = FnvHashMap::default();
    glyphs.insert('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]);
    glyphs.insert('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]);
    glyphs.insert('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]);
    glyphs.insert('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]);
    glyphs.insert('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]);
    glyphs
}

/// Lit pixel centres of `lines`, in glyph-pixel units, centred on the origin.
///
/// Each line is centred horizontally; the block of lines is centred
/// vertically. Characters missing from the font render as blanks.
pub fn text_pixels(lines: &[&str]) -> Vec<Vec2> {
    let glyphs = font();
    let block_height = lines.len() * TEXT_FONT_HEIGHT + lines.len().saturating_sub(1) * LINE_GAP;
    let mut pixels = Vec::new();

    for (li, line) in lines.iter().enumerate() {
        let n = line.chars().count();
        let width = n * TEXT_FONT_WIDTH + n.saturating_sub(1) * LETTER_GAP;
        let left = -(width as f32) / 2.0;
        let top = -(block_height as f32) / 2.0 + (li * (TEXT_FONT_HEIGHT + LINE_GAP)) as f32;

        for (ci, ch) in line.chars().enumerate() {
            let Some(rows) = glyphs.get(&ch) else {
                continue;
            };
            let x0 = left + (ci * (TEXT_FONT_WIDTH + LETTER_GAP)) as f32;
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..TEXT_FONT_WIDTH {
                    if bits & (1u8 << (TEXT_FONT_WIDTH - 1 - col)) != 0 {
                        pixels.push(Vec2::new(
                            x0 + col as f32 + 0.5,
                            top + row as f32 + 0.5,
                        ));
                    }
                }
            }
        }
    }
    pixels
}

pub(super) fn text(count: usize, ctx: &ShapeContext, rng: &mut impl Rng) -> Vec<ShapePoint> {
    let pixels = text_pixels(&TEXT_LINES);
    if pixels.is_empty() {
        return vec![ShapePoint::at(ctx.center); count];
    }
    let cell = TEXT_CELL * ctx.scale;
    (0..count)
        .map(|i| {
            let px = pixels[anchor_index(i, pixels.len())];
            ShapePoint::at(ctx.center + px * cell + jitter(rng, cell * 0.3))
        })
        .collect()
}
