//! The baked-in logo bitmap
//!
//! One monochrome mask, stored as string art and decoded to RGBA at
//! startup. White ink on transparent background; the per-sprite tint is
//! applied in the fragment shader.

/// Resource name, also used for texture labels
pub const LOGO_NAME: &str = "dvd_logo";

/// Mask rows. Every row must be the same length; `#` is ink.
const LOGO_ROWS: [&str; 16] = [
    "..##########....###......###....##########..",
    "..###########...###......###...###########..",
    "..###......###..###......###..###......###..",
    "..###......###..###......###..###......###..",
    "..###......###...##......##...###......###..",
    "..###......###...###....###...###......###..",
    "..###......###....##....##....###......###..",
    "..###......###....###..###....###......###..",
    "..###......###.....######.....###......###..",
    "..###......###......####......###......###..",
    "..###########........##.......###########...",
    "..##########.........##.......##########....",
    "............................................",
    "..............################..............",
    "..........########################..........",
    "..............################..............",
];

/// Mask dimensions in pixels (width, height)
pub const fn dimensions() -> (u32, u32) {
    (LOGO_ROWS[0].len() as u32, LOGO_ROWS.len() as u32)
}

/// Decode the mask to tightly packed RGBA8 pixels
pub fn decode_rgba() -> Vec<u8> {
    let (width, height) = dimensions();
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for row in LOGO_ROWS {
        for cell in row.bytes() {
            if cell == b'#' {
                pixels.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
            } else {
                pixels.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
            }
        }
    }
    pixels
}
