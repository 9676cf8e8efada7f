// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// Alpha is kept as a float on the 0-255 scale since line alphas are fractional
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 0xff,
        g: 0xff,
        b: 0xff,
        a: 255.0,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8 as f64;

        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    // CSS color string for the 2d canvas context, which wants alpha in [0, 1]
    pub fn to_css(&self) -> String {
        let alpha = (self.a / 255.0).max(0.0).min(1.0);
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}
