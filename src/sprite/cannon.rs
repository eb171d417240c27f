use {
    super::BACKGROUND,
    crate::{basis::Color, canvas::Canvas},
};

const WIDTH: u32 = 24;
const HEIGHT: u32 = 20;
const MUZZLE: (i32, i32) = (12, 8);

const PLATFORM: Color = Color::from_hex(0x8B4513);
const PLATFORM_RIM: Color = Color::from_hex(0x654321);
const PLATFORM_LIGHT: Color = Color::from_hex(0xA0522D);
const WHEEL: Color = Color::from_hex(0x000000);
const SHELL: Color = Color::from_hex(0x0066CC);
const SHELL_RIM: Color = Color::from_hex(0x004499);
const SHELL_LIGHT: Color = Color::from_hex(0x0088FF);

/// 大砲. 木の台座と車輪の上に, 発射前の青い弾体が載っている.
pub(super) fn draw() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);

    // 台座と明るい木目の帯
    canvas.rect_outlined(2, 14, 21, 5, PLATFORM, PLATFORM_RIM);
    canvas.rect(3, 15, 19, 3, PLATFORM_LIGHT);

    // 車輪は下端で半分切れる
    canvas.circle((6, 18), 2, WHEEL);
    canvas.circle((18, 18), 2, WHEEL);

    canvas.circle_outlined(MUZZLE, 6, SHELL, SHELL_RIM);
    canvas.circle((MUZZLE.0 - 1, MUZZLE.1 - 1), 5, SHELL_LIGHT);
    super::skull(&mut canvas, MUZZLE);

    canvas
}
