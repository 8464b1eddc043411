use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

/// An ordered list of colors. The position of a color is its palette index.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Keeps only the first `limit` colors. Limits past the end leave the palette untouched.
	pub fn truncate(&mut self, limit: usize) {
		self.colors.truncate(limit);
	}

	pub fn to_hex_strings(&self) -> Vec<String> {
		self.colors.iter().map(|c| c.to_string()).collect()
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		Self { colors: v }
	}
}

#[derive(Debug)]
pub enum PaletteError {
	TooSmall { size: usize },
	Json(String),
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::TooSmall { size } => write!(f, "File too small ({size} bytes), not a standard ACT palette"),
			PaletteError::Json(msg) => write!(f, "Couldn't serialize palette: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
