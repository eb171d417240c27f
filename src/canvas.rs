use {
    crate::basis::Color,
    anyhow::{Context as _, Result},
    image::RgbImage,
    imageproc::{drawing, rect::Rect},
    std::path::Path,
};

/// `Canvas` はスプライト 1 枚分の固定サイズ RGB ラスタを表す. 背景色で塗り潰した
/// 状態で作り, プリミティブ操作で直接書き換えていく. 完成したら [`Canvas::save`] で
/// PNG としてファイルに書き出す.
///
/// どのプリミティブもキャンバス外にはみ出た部分を黙って切り捨てる.
pub(crate) struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.img.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.img.height()
    }

    /// 中心 `center`, 半径 `radius` の塗り潰し円を描く.
    pub(crate) fn circle(&mut self, center: (i32, i32), radius: i32, fill: Color) {
        drawing::draw_filled_ellipse_mut(&mut self.img, center, radius, radius, fill.into());
    }

    /// 塗り潰し円を描いたあと, 同じ半径の円周を `outline` でなぞる.
    pub(crate) fn circle_outlined(
        &mut self,
        center: (i32, i32),
        radius: i32,
        fill: Color,
        outline: Color,
    ) {
        self.circle(center, radius, fill);
        drawing::draw_hollow_ellipse_mut(&mut self.img, center, radius, radius, outline.into());
    }

    /// 左上 `(x, y)` から `width` x `height` の塗り潰し矩形を描く.
    pub(crate) fn rect(&mut self, x: i32, y: i32, width: u32, height: u32, fill: Color) {
        drawing::draw_filled_rect_mut(
            &mut self.img,
            Rect::at(x, y).of_size(width, height),
            fill.into(),
        );
    }

    /// 塗り潰し矩形を描いたあと, 外周 1px を `outline` でなぞる.
    pub(crate) fn rect_outlined(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Color,
        outline: Color,
    ) {
        self.rect(x, y, width, height, fill);
        drawing::draw_hollow_rect_mut(
            &mut self.img,
            Rect::at(x, y).of_size(width, height),
            outline.into(),
        );
    }

    /// `from` から `to` へ幅 `width` の線分を描く.
    ///
    /// 幅は線分の法線方向に 1px の線分を並べて出す. `width = 2` なら軸の両側に
    /// 0.5px ずつずらした 2 本になる.
    pub(crate) fn stroke(&mut self, from: (f32, f32), to: (f32, f32), width: u32, color: Color) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            return;
        }
        let normal = (-dy / length, dx / length);

        for i in 0..width {
            let offset = i as f32 - (width as f32 - 1.0) / 2.0;
            drawing::draw_line_segment_mut(
                &mut self.img,
                (from.0 + normal.0 * offset, from.1 + normal.1 * offset),
                (to.0 + normal.0 * offset, to.1 + normal.1 * offset),
                color.into(),
            );
        }
    }

    /// PNG として `path` に書き出す. 既存のファイルは上書きされる.
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        self.img
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.img.get_pixel(x, y);
        Color {
            r: p[0],
            g: p[1],
            b: p[2],
        }
    }

    #[cfg(test)]
    pub(crate) fn data(&self) -> &[u8] {
        self.img.as_raw()
    }
}

#[cfg(test)]
const BLANK: Color = Color::from_hex(0xFFFFFF);
#[cfg(test)]
const INK: Color = Color::from_hex(0x123456);

#[test]
fn new_canvas_is_background_only() {
    let canvas = Canvas::new(4, 3, BLANK);
    assert_eq!((canvas.width(), canvas.height()), (4, 3));
    assert!(canvas.data().iter().all(|&channel| channel == 0xff));
}

#[test]
fn rect_covers_exactly_its_area() {
    let mut canvas = Canvas::new(6, 6, BLANK);
    canvas.rect(1, 2, 3, 2, INK);

    assert_eq!(canvas.pixel(1, 2), INK);
    assert_eq!(canvas.pixel(3, 3), INK);
    assert_eq!(canvas.pixel(4, 2), BLANK);
    assert_eq!(canvas.pixel(1, 4), BLANK);
}

#[test]
fn circle_clips_at_the_edge() {
    // 中心がキャンバスの縁近くでも, はみ出し分が切り捨てられるだけでパニックしない
    let mut canvas = Canvas::new(5, 5, BLANK);
    canvas.circle((4, 4), 2, INK);
    assert_eq!(canvas.pixel(4, 4), INK);
    assert_eq!(canvas.pixel(0, 0), BLANK);
}

#[test]
fn zero_length_stroke_draws_nothing() {
    let mut canvas = Canvas::new(3, 3, BLANK);
    canvas.stroke((1.0, 1.0), (1.0, 1.0), 2, INK);
    assert!(canvas.data().iter().all(|&channel| channel == 0xff));
}
