use crate::{basis::Color, canvas::Canvas};

mod cannon;
mod cannonball;
mod saw;
mod spikeball;

#[cfg(test)]
mod tests;

/// 生成する障害物スプライトの一覧. この順でファイルに書き出される.
pub(crate) const ALL: [Sprite; 4] = [
    Sprite {
        file_name: "saw.png",
        draw: saw::draw,
    },
    Sprite {
        file_name: "cannon.png",
        draw: cannon::draw,
    },
    Sprite {
        file_name: "spikeball.png",
        draw: spikeball::draw,
    },
    Sprite {
        file_name: "cannonball.png",
        draw: cannonball::draw,
    },
];

pub(crate) const BACKGROUND: Color = Color::from_hex(0xFFFFFF);

/// `Sprite` は出力ファイル名と, そのスプライトを描く生成関数の対を表す.
pub(crate) struct Sprite {
    pub(crate) file_name: &'static str,
    pub(crate) draw: fn() -> Canvas,
}

/// 中心 `center` から角度 `angle` の方向へ距離 `radius` だけ進んだ点を求める.
fn radial_point(center: (i32, i32), angle: f32, radius: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (
        center.0 as f32 + cos * radius,
        center.1 as f32 + sin * radius,
    )
}

/// 弾体に重ねる白いドクロ. 2x2 の目 2 つと 3x2 の口で表す.
fn skull(canvas: &mut Canvas, (cx, cy): (i32, i32)) {
    const BONE: Color = Color::from_hex(0xFFFFFF);

    canvas.rect(cx - 2, cy - 1, 2, 2, BONE);
    canvas.rect(cx + 1, cy - 1, 2, 2, BONE);
    canvas.rect(cx - 1, cy + 1, 3, 2, BONE);
}
