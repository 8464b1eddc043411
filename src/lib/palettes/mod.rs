pub(crate) mod pal_act;
pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub mod palette;

use crate::palettes::palette::{Palette, PaletteError};

/// The number of colors stored in an ACT file.
pub const MAX_PALETTE_COLORS: usize = 256;

/// The size of the color table at the start of an ACT file.
pub const ACT_DATA_SIZE: usize = MAX_PALETTE_COLORS * 3;

/// Some writers append this many bytes after the color table. They're never read.
pub const ACT_TRAILER_SIZE: usize = 4;

/// Decodes the raw contents of an ACT file into `#RRGGBB` strings, keeping at most `limit` colors.
pub fn decode(bytes: &[u8], limit: Option<usize>) -> Result<Vec<String>, PaletteError> {
	let mut pal = Palette::from_act_bytes(bytes)?;
	if let Some(limit) = limit {
		pal.truncate(limit);
	}

	Ok(pal.to_hex_strings())
}
