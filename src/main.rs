//! マンデルブロ集合ドットグリッドビューア
//!
//! 複素平面の固定領域を 100×100 の格子でサンプリングし、
//! 各点を反復深度に応じた色の円として描画する。
//!
//! 操作方法:
//!   - ↑ / ↓ キー: 最大反復深度を増減（色の段階が変わる）
//!   - R キー: 初期深度にリセット
//!   - S キー: 現在の表示を画像として保存
//!   - Q / Escape キー: 終了

use image::{ImageBuffer, Rgb};
use mandeldot::common::{
    constants::{BACKGROUND_COLOR, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, WINDOW_SIZE},
    draw::render_frame,
    view::DotView,
};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::Instant;

/// 現在のバッファを連番 PNG として保存
fn save_image(buffer: &[u32], save_counter: &mut u32) {
    *save_counter += 1;
    let filename = format!("mandeldot_{:03}.png", save_counter);

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(WINDOW_SIZE as u32, WINDOW_SIZE as u32, |x, y| {
            let pixel = buffer[(y as usize) * WINDOW_SIZE + (x as usize)];
            let r = ((pixel >> 16) & 0xFF) as u8;
            let g = ((pixel >> 8) & 0xFF) as u8;
            let b = (pixel & 0xFF) as u8;
            Rgb([r, g, b])
        });

    img.save(&filename).expect("画像の保存に失敗しました");
    println!("画像を保存しました: {}", filename);
}

fn main() {
    println!("マンデルブロ集合ドットグリッドビューア");
    println!();
    println!("操作方法:");
    println!("  - ↑ / ↓ キー: 最大反復深度を増減");
    println!("  - R キー: 初期深度 ({}) にリセット", DEFAULT_MAX_DEPTH);
    println!("  - S キー: 現在の表示を画像として保存");
    println!("  - Q / Escape キー: 終了");
    println!();

    let mut window = Window::new(
        "マンデルブロ・ドットグリッド",
        WINDOW_SIZE,
        WINDOW_SIZE,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .expect("ウィンドウの作成に失敗しました");

    window.set_target_fps(60);

    let mut view = DotView::new(DEFAULT_MAX_DEPTH);
    let mut buffer = vec![0u32; WINDOW_SIZE * WINDOW_SIZE];
    let mut needs_redraw = true;
    let mut save_counter = 0u32;

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            view.reset(DEFAULT_MAX_DEPTH);
            needs_redraw = true;
            println!("リセット (深度 {})", view.max_depth());
        }

        if window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            let depth = (view.max_depth() + 1).min(MAX_DEPTH_LIMIT);
            if depth != view.max_depth() {
                view.reset(depth);
                needs_redraw = true;
            }
        }

        if window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            let depth = view.max_depth().saturating_sub(1);
            if depth != view.max_depth() {
                view.reset(depth);
                needs_redraw = true;
            }
        }

        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            save_image(&buffer, &mut save_counter);
        }

        if needs_redraw {
            let start = Instant::now();

            let samples = view
                .sample(WINDOW_SIZE, WINDOW_SIZE)
                .expect("グリッドの生成に失敗しました");
            let radius = view.dot_radius(WINDOW_SIZE);
            render_frame(
                &mut buffer,
                WINDOW_SIZE,
                WINDOW_SIZE,
                &samples,
                radius,
                BACKGROUND_COLOR,
            );
            needs_redraw = false;

            let title = format!("マンデルブロ・ドットグリッド [深度 {}]", view.max_depth());
            window.set_title(&title);

            println!(
                "再描画: {:.2?} | 深度: {} | {}x{} 点",
                start.elapsed(),
                view.max_depth(),
                view.num_points(),
                view.num_points()
            );
        }

        window
            .update_with_buffer(&buffer, WINDOW_SIZE, WINDOW_SIZE)
            .expect("バッファの更新に失敗しました");
    }

    println!("終了しました");
}
