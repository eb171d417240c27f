use {
    super::{cannon, cannonball, saw, spikeball, ALL},
    crate::basis::Color,
};

const WHITE: Color = Color::from_hex(0xFFFFFF);

#[test]
fn canvas_dimensions() {
    let actual = ALL
        .iter()
        .map(|sprite| {
            let canvas = (sprite.draw)();
            (sprite.file_name, canvas.width(), canvas.height())
        })
        .collect::<Vec<_>>();

    assert_eq!(
        actual,
        [
            ("saw.png", 24, 24),
            ("cannon.png", 24, 20),
            ("spikeball.png", 18, 18),
            ("cannonball.png", 10, 10),
        ]
    );
}

#[test]
fn generators_are_deterministic() {
    for sprite in &ALL {
        let first = (sprite.draw)();
        let second = (sprite.draw)();
        assert_eq!(first.data(), second.data(), "{}", sprite.file_name);
    }
}

#[test]
fn saw_has_red_hub_on_grey_disc() {
    let canvas = saw::draw();

    // 中心はハブの赤, その外側は内側の円盤の灰色
    assert_eq!(canvas.pixel(12, 12), Color::from_hex(0xFF0000));
    assert_eq!(canvas.pixel(12, 7), Color::from_hex(0x808080));

    // 歯も刃も届かない四隅は背景のまま
    assert_eq!(canvas.pixel(0, 0), WHITE);
    assert_eq!(canvas.pixel(23, 23), WHITE);
}

#[test]
fn cannon_stacks_platform_wheels_and_shell() {
    let canvas = cannon::draw();

    assert_eq!(canvas.pixel(12, 16), Color::from_hex(0xA0522D));
    assert_eq!(canvas.pixel(6, 18), Color::from_hex(0x000000));

    // 弾体の中心はハイライトの水色, 口の位置はドクロの白
    assert_eq!(canvas.pixel(12, 8), Color::from_hex(0x0088FF));
    assert_eq!(canvas.pixel(12, 10), WHITE);

    assert_eq!(canvas.pixel(0, 0), WHITE);
}

#[test]
fn spikeball_spikes_end_in_dark_tips() {
    let canvas = spikeball::draw();

    assert_eq!(canvas.pixel(9, 9), Color::from_hex(0x0088FF));

    // 斜め 45 度の棘の先端はキャンバス内に収まる
    assert_eq!(canvas.pixel(15, 15), Color::from_hex(0x000000));

    assert_eq!(canvas.pixel(0, 0), WHITE);
}

#[test]
fn cannonball_is_a_smaller_shell_with_skull() {
    let canvas = cannonball::draw();

    assert_eq!(canvas.pixel(5, 5), Color::from_hex(0x0088FF));
    assert_eq!(canvas.pixel(5, 1), Color::from_hex(0x004499));

    // 左目と口
    assert_eq!(canvas.pixel(3, 4), WHITE);
    assert_eq!(canvas.pixel(5, 6), WHITE);

    assert_eq!(canvas.pixel(0, 0), WHITE);
    assert_eq!(canvas.pixel(9, 9), WHITE);
}
