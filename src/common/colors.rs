//! 反復深度に応じたカラーランプ

/// 集合内部（発散しなかった点）の色
pub const INSIDE_COLOR: u32 = 0x000000;

/// r, g, b から 0xRRGGBB 形式の色を作る
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// 深度ごとの色テーブルを構築（長さ max_depth + 1）
///
/// インデックス 0..max_depth はシアン→マゼンタの線形グラデーション、
/// 末尾 (max_depth) は黒。チャンネル値は切り捨てで計算する
/// （丸めではない点に注意。描画結果の互換性のため）。
pub fn build_color_ramp(max_depth: u32) -> Vec<u32> {
    let mut ramp = Vec::with_capacity(max_depth as usize + 1);

    for i in 0..max_depth {
        let t = i as f64 / max_depth as f64;
        let r = (255.0 * t) as u8;
        let g = (255.0 * (1.0 - t)) as u8;
        ramp.push(rgb(r, g, 255));
    }
    ramp.push(INSIDE_COLOR);
    ramp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_depth_plus_one_entries() {
        for depth in [0, 1, 10, 256] {
            assert_eq!(build_color_ramp(depth).len(), depth as usize + 1);
        }
    }

    #[test]
    fn endpoints() {
        let ramp = build_color_ramp(10);
        // 先頭はシアン (r=0, g=255, b=255)、末尾は黒
        assert_eq!(ramp[0], 0x00FFFF);
        assert_eq!(ramp[10], INSIDE_COLOR);
    }

    #[test]
    fn channels_are_monotonic() {
        let ramp = build_color_ramp(100);
        for w in ramp[..100].windows(2) {
            let (r0, g0) = ((w[0] >> 16) & 0xFF, (w[0] >> 8) & 0xFF);
            let (r1, g1) = ((w[1] >> 16) & 0xFF, (w[1] >> 8) & 0xFF);
            assert!(r1 >= r0, "赤は単調非減少");
            assert!(g1 <= g0, "緑は単調非増加");
            assert_eq!(w[0] & 0xFF, 0xFF, "青は常に 255");
        }
    }

    #[test]
    fn channel_values_truncate() {
        // 255 * 3/10 = 76.5 → 76、255 * 7/10 = 178.5 → 178（四捨五入しない）
        let ramp = build_color_ramp(10);
        assert_eq!(ramp[3], rgb(76, 178, 255));
    }

    #[test]
    fn zero_depth_is_single_black_entry() {
        assert_eq!(build_color_ramp(0), vec![INSIDE_COLOR]);
    }

    #[test]
    fn rgb_packing() {
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x123456);
        assert_eq!(rgb(255, 255, 255), 0xFFFFFF);
    }
}
