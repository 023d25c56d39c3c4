//! u32 バッファへの描画処理

use crate::common::sampler::DotSample;

/// バッファ全体を背景色で塗りつぶす
pub fn fill_background(buffer: &mut [u32], color: u32) {
    buffer.fill(color);
}

/// 塗りつぶし円を描画する（バッファ外にはみ出た部分は無視）
pub fn draw_filled_circle(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    center_x: f32,
    center_y: f32,
    radius: usize,
    color: u32,
) {
    let cx = center_x as i64;
    let cy = center_y as i64;
    let r = radius as i64;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let px = cx + dx;
            let py = cy + dy;
            if px >= 0 && (px as usize) < buffer_width && py >= 0 && (py as usize) < buffer_height {
                buffer[py as usize * buffer_width + px as usize] = color;
            }
        }
    }
}

/// 1 フレーム分を描画する（背景の全面塗り + 各サンプル点の円）
pub fn render_frame(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    samples: &[DotSample],
    radius: usize,
    background: u32,
) {
    fill_background(buffer, background);
    for s in samples {
        draw_filled_circle(buffer, buffer_width, buffer_height, s.px, s.py, radius, s.color);
    }
}
