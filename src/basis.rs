use image::Rgb;

/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:06x}",
            (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
        )
    }
}

impl Color {
    /// `0xRRGGBB` 形式の値から作る.
    pub(crate) const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16 & 0xff) as u8,
            g: (hex >> 8 & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

#[test]
fn test_from_hex() {
    let color = Color::from_hex(0x8B4513);
    assert_eq!((color.r, color.g, color.b), (0x8b, 0x45, 0x13));
    assert_eq!(format!("{:?}", color), "8b4513");
    assert_eq!(format!("{:?}", Color::from_hex(0x000080)), "000080");
}
