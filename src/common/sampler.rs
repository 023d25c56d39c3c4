//! サンプルグリッドの生成

use num_complex::Complex;
use rayon::prelude::*;
use thiserror::Error;

use crate::common::mandelbrot::escape_iterations;
use crate::common::region::PlaneRegion;

/// サンプリングの引数エラー
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("1辺あたりのサンプル点数は 1 以上が必要です")]
    ZeroSamples,
    #[error("カラーランプの長さが不正です: len={0} (期待値 max_depth + 1 = {1})")]
    RampLengthMismatch(usize, usize),
}

/// グリッド上の 1 サンプル点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSample {
    /// 複素平面上の座標
    pub cx: f64,
    pub cy: f64,
    /// 画面上の座標（ピクセル）
    pub px: f32,
    pub py: f32,
    /// 解決済みの色 (0xRRGGBB)
    pub color: u32,
}

/// 領域を N×N で等間隔サンプリングし、各点の色を解決する
///
/// 座標は下端を含み上端を含まない半開区間で刻む。結果は
/// 行単位で並列計算するが、出力の順序と値は逐次の二重ループと同一。
pub fn sample_grid(
    region: &PlaneRegion,
    samples_per_axis: usize,
    max_depth: u32,
    ramp: &[u32],
    width_px: usize,
    height_px: usize,
) -> Result<Vec<DotSample>, SampleError> {
    if samples_per_axis == 0 {
        return Err(SampleError::ZeroSamples);
    }
    if ramp.len() != max_depth as usize + 1 {
        return Err(SampleError::RampLengthMismatch(
            ramp.len(),
            max_depth as usize + 1,
        ));
    }

    let n = samples_per_axis;
    let x_min = region.x_min;
    let y_min = region.y_min;
    let x_range = region.x_range();
    let y_range = region.y_range();

    let samples: Vec<DotSample> = (0..n)
        .into_par_iter()
        .flat_map(|i| {
            let tx = i as f64 / n as f64;
            let cx = tx * x_range + x_min;
            let px = (i as f32 / n as f32) * width_px as f32;

            (0..n)
                .map(|j| {
                    let ty = j as f64 / n as f64;
                    let cy = ty * y_range + y_min;
                    let py = (j as f32 / n as f32) * height_px as f32;

                    let iter = escape_iterations(Complex::new(cx, cy), max_depth);
                    DotSample {
                        cx,
                        cy,
                        px,
                        py,
                        color: ramp[iter as usize],
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(samples)
}

/// ドットの半径（ピクセル）。幅をサンプル点数で割った整数値
pub fn dot_radius(width_px: usize, samples_per_axis: usize) -> usize {
    width_px / samples_per_axis
}
