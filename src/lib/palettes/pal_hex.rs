use crate::palettes::palette::Palette;

impl Palette {
	/// One `#RRGGBB` line per color, each terminated by a newline.
	pub fn to_hex_string(&self) -> String {
		let mut s = String::with_capacity(self.len() * 8);
		for c in &self.colors {
			s.push_str(&c.to_string());
			s.push('\n');
		}
		s
	}
}
