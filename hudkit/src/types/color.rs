/// A colour as configured by the host, resolved to [`Rgba`] at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
}

/// Packed 8-bit colour handed to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 255 }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn to_rgba(&self) -> Rgba {
        match *self {
            Self::Rgba { r, g, b, a } => Rgba::new(r, g, b, a),
            Self::Oklch { l, c, h, a } => oklch_to_rgba(l, c, h, a),
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self::Rgba {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

fn oklch_to_rgba(l: f32, c: f32, h: f32, a: f32) -> Rgba {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    let alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;

    Rgba::new(r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_passthrough() {
        let c = Color::rgba(10, 10, 10, 220);
        assert_eq!(c.to_rgba(), Rgba::new(10, 10, 10, 220));
    }

    #[test]
    fn test_oklch_extremes() {
        let black = Color::oklch(0.0, 0.0, 0.0).to_rgba();
        assert_eq!((black.r, black.g, black.b, black.a), (0, 0, 0, 255));

        let white = Color::oklch(1.0, 0.0, 0.0).to_rgba();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }

    #[test]
    fn test_oklch_alpha_is_clamped() {
        let c = Color::oklcha(0.5, 0.0, 0.0, 2.0).to_rgba();
        assert_eq!(c.a, 255);
    }
}
