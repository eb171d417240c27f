use {
    super::BACKGROUND,
    crate::{basis::Color, canvas::Canvas},
};

const SIZE: u32 = 10;
const CENTER: (i32, i32) = (5, 5);
const RADIUS: i32 = 4;

const SHELL: Color = Color::from_hex(0x0066CC);
const SHELL_RIM: Color = Color::from_hex(0x004499);
const SHELL_LIGHT: Color = Color::from_hex(0x0088FF);

/// 砲弾. 大砲に載っている弾体の縮小版.
pub(super) fn draw() -> Canvas {
    let mut canvas = Canvas::new(SIZE, SIZE, BACKGROUND);

    canvas.circle_outlined(CENTER, RADIUS, SHELL, SHELL_RIM);
    canvas.circle((CENTER.0 - 1, CENTER.1 - 1), RADIUS - 1, SHELL_LIGHT);
    super::skull(&mut canvas, CENTER);

    canvas
}
