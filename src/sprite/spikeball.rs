use {
    super::{radial_point, BACKGROUND},
    crate::{basis::Color, canvas::Canvas},
    std::f32::consts::TAU,
};

const SIZE: u32 = 18;
const CENTER: (i32, i32) = (9, 9);
const BALL_RADIUS: i32 = 6;
const SPIKES: u32 = 8;
const SPIKE_LENGTH: f32 = 4.0;

const BALL: Color = Color::from_hex(0x0066CC);
const BALL_RIM: Color = Color::from_hex(0x004499);
const BALL_LIGHT: Color = Color::from_hex(0x0088FF);
const SPIKE: Color = Color::from_hex(0xFFFFFF);
const TIP: Color = Color::from_hex(0x000000);

/// 棘付き鉄球. 青い球体から白い棘が放射状に伸びる.
pub(super) fn draw() -> Canvas {
    let mut canvas = Canvas::new(SIZE, SIZE, BACKGROUND);

    canvas.circle_outlined(CENTER, BALL_RADIUS, BALL, BALL_RIM);
    canvas.circle((CENTER.0 - 1, CENTER.1 - 1), BALL_RADIUS - 1, BALL_LIGHT);

    for i in 0..SPIKES {
        let angle = i as f32 * (TAU / SPIKES as f32);
        let from = radial_point(CENTER, angle, BALL_RADIUS as f32);
        let to = radial_point(CENTER, angle, BALL_RADIUS as f32 + SPIKE_LENGTH);
        canvas.stroke(from, to, 2, SPIKE);

        // 先端のひと回り小さい黒玉
        let tip = radial_point(CENTER, angle, BALL_RADIUS as f32 + SPIKE_LENGTH - 1.0);
        canvas.circle((tip.0 as i32, tip.1 as i32), 1, TIP);
    }

    canvas
}
