//! マンデルブロ集合計算関数

use num_complex::Complex;

use crate::common::constants::DIVERGENCE_THRESHOLD;

/// 発散するまでの反復回数を計算
///
/// z = c から開始し、z = z^2 + c を反復する（z = 0 からの初回適用は
/// 省略済み）。戻り値は [0, max_depth] の範囲で、max_depth は
/// 予算内に発散しなかった（集合内部とみなす）ことを示す。
pub fn escape_iterations(c: Complex<f64>, max_depth: u32) -> u32 {
    let mut z = c;

    for i in 0..max_depth {
        if z.norm_sqr() >= DIVERGENCE_THRESHOLD {
            return i;
        }
        z = z * z + c;
    }
    max_depth
}
