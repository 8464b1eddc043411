use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::palettes::palette::{Color, Palette, PaletteError};
use crate::palettes::ACT_DATA_SIZE;

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/act_file.cpp

impl Palette {
	/// Decodes the 256 colors at the start of `bytes`.
	///
	/// Anything after the first 768 bytes is ignored, which covers the 772-byte variant
	/// some writers produce. Shorter inputs are rejected.
	pub fn from_act_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
		if bytes.len() < ACT_DATA_SIZE {
			return Err(PaletteError::TooSmall { size: bytes.len() });
		}

		let mut pal = Palette::default();
		for chunk in bytes[..ACT_DATA_SIZE].chunks_exact(3) {
			pal.push_color(Color::from([chunk[0], chunk[1], chunk[2]]));
		}

		Ok(pal)
	}

	pub fn from_act_reader<R: Read>(mut reader: R) -> Result<Palette, PaletteError> {
		let mut buf = Vec::with_capacity(ACT_DATA_SIZE);
		reader.read_to_end(&mut buf)?;
		drop(reader);

		Self::from_act_bytes(&buf)
	}

	pub fn from_act_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		Self::from_act_reader(f)
	}
}
