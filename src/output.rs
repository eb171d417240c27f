use {
    crate::sprite,
    anyhow::{Context as _, Result},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// 4 つのスプライトを生成して `dir` 以下に書き出し, 書き込んだパスを順に返す.
///
/// `dir` が無ければ作る. 既にあっても構わず, 中の無関係なファイルには触れない.
/// 同名の出力ファイルだけが上書きされる.
pub(crate) fn save_all(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(sprite::ALL.len());
    for sprite in &sprite::ALL {
        let path = dir.join(sprite.file_name);
        (sprite.draw)().save(&path)?;
        println!("Created: {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[test]
fn creates_missing_directory_and_writes_all_sprites() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let dir = root.path().join("source").join("images");

    let written = save_all(&dir)?;

    let names = written
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, ["saw.png", "cannon.png", "spikeball.png", "cannonball.png"]);

    let expected_dimensions = [(24, 24), (24, 20), (18, 18), (10, 10)];
    for (path, expected) in written.iter().zip(expected_dimensions) {
        assert_eq!(image::image_dimensions(path)?, expected, "{}", path.display());
    }

    // 書き出されるのは 4 ファイルだけ
    assert_eq!(fs::read_dir(&dir)?.count(), 4);
    Ok(())
}

#[test]
fn rerun_overwrites_outputs_and_keeps_unrelated_files() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let dir = root.path().to_path_buf();
    fs::write(dir.join("unrelated.txt"), b"keep me")?;

    let first = save_all(&dir)?;
    let before = first
        .iter()
        .map(fs::read)
        .collect::<std::io::Result<Vec<_>>>()?;

    let second = save_all(&dir)?;
    assert_eq!(first, second);
    let after = second
        .iter()
        .map(fs::read)
        .collect::<std::io::Result<Vec<_>>>()?;

    // 決定的な生成なので上書き後もバイト単位で一致する
    assert_eq!(before, after);

    assert_eq!(fs::read(dir.join("unrelated.txt"))?, b"keep me".to_vec());
    Ok(())
}
