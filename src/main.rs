#![allow(dead_code)]

use std::path::Path;

mod basis;
mod canvas;
mod output;
mod sprite;

/// スプライトの出力先. 作業ディレクトリからの相対パス.
const OUTPUT_DIR: &str = "source/images";

fn main() {
    output::save_all(Path::new(OUTPUT_DIR)).expect("failed to generate obstacle images");

    println!();
    println!("All obstacle images created successfully!");
    println!("The images are in: {}/", OUTPUT_DIR);
}
