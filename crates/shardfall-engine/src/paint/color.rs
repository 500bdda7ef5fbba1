/// Premultiplied RGBA color.
///
/// Channels live in the canvas's own (sRGB-encoded) space, the same space a
/// 2D canvas composites in. The presenter samples the canvas through an sRGB
/// texture so no extra conversion is needed here.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

    /// Creates a premultiplied color from straight 8-bit channels and a
    /// straight alpha in `[0, 1]`, the shape of a CSS `rgba(r, g, b, a)`.
    #[inline]
    pub fn from_rgb_u8_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Opaque 8-bit RGBA of this color, ignoring alpha (used for backgrounds).
    #[inline]
    pub fn to_opaque_rgba8(self) -> [u8; 4] {
        let (r, g, b, _) = self.to_straight();
        [unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), 255]
    }

    /// Source-over composite of `self` onto an opaque 8-bit pixel.
    #[inline]
    pub fn blend_over(self, dst: [u8; 4]) -> [u8; 4] {
        let inv = 1.0 - self.a;
        let ch = |src: f32, d: u8| unit_to_u8(src + (d as f32 / 255.0) * inv);
        [ch(self.r, dst[0]), ch(self.g, dst[1]), ch(self.b, dst[2]), 255]
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Clamp premultiplied rgb so it cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
