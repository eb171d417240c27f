use {
    super::{radial_point, BACKGROUND},
    crate::{basis::Color, canvas::Canvas},
    std::f32::consts::TAU,
};

const SIZE: u32 = 24;
const CENTER: (i32, i32) = (12, 12);
const BLADE_RADIUS: i32 = 11;
const TEETH: u32 = 16;

const BLADE: Color = Color::from_hex(0xC0C0C0);
const BLADE_RIM: Color = Color::from_hex(0x808080);
const DISC: Color = Color::from_hex(0x808080);
const DISC_RIM: Color = Color::from_hex(0x606060);
const HUB: Color = Color::from_hex(0xFF0000);
const HUB_RIM: Color = Color::from_hex(0xCC0000);
const TOOTH: Color = Color::from_hex(0x000000);

/// 回転鋸刃. 銀色の刃と赤いハブ, 外周に等間隔の歯を持つ.
pub(super) fn draw() -> Canvas {
    let mut canvas = Canvas::new(SIZE, SIZE, BACKGROUND);

    canvas.circle_outlined(CENTER, BLADE_RADIUS, BLADE, BLADE_RIM);
    canvas.circle_outlined(CENTER, BLADE_RADIUS - 3, DISC, DISC_RIM);
    canvas.circle_outlined(CENTER, 2, HUB, HUB_RIM);

    // 歯は刃の少し内側から外側へ向かう短い線分. 外端はキャンバスの縁で切れる.
    for i in 0..TEETH {
        let angle = i as f32 * (TAU / TEETH as f32);
        let from = radial_point(CENTER, angle, (BLADE_RADIUS - 2) as f32);
        let to = radial_point(CENTER, angle, (BLADE_RADIUS + 1) as f32);
        canvas.stroke(from, to, 2, TOOTH);
    }

    canvas
}
