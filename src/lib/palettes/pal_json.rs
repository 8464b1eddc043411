use crate::palettes::palette::{Palette, PaletteError};

impl Palette {
	/// A pretty-printed JSON array of `#RRGGBB` strings.
	pub fn to_json_string(&self) -> Result<String, PaletteError> {
		let colors: Vec<String> = self.to_hex_strings();
		serde_json::to_string_pretty(&colors)
			.map_err(|e| PaletteError::Json(e.to_string()))
	}
}
