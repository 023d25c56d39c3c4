//! ドットビューの状態管理

use crate::common::colors::build_color_ramp;
use crate::common::constants::DEFAULT_NUM_POINTS;
use crate::common::region::PlaneRegion;
use crate::common::sampler::{self, DotSample, SampleError};

/// ビューの状態（表示領域・反復深度・カラーランプ）
///
/// カラーランプは深度が変わったときにだけ作り直すキャッシュで、
/// 毎フレーム色を計算し直すのと結果は変わらない。
pub struct DotView {
    region: PlaneRegion,
    max_depth: u32,
    ramp: Vec<u32>,
    num_points: usize,
}

impl DotView {
    /// 既定のサンプル密度（100×100）でビューを作る
    pub fn new(max_depth: u32) -> Self {
        Self::with_num_points(max_depth, DEFAULT_NUM_POINTS)
    }

    /// サンプル密度を指定してビューを作る
    pub fn with_num_points(max_depth: u32, num_points: usize) -> Self {
        Self {
            region: PlaneRegion::default(),
            max_depth,
            ramp: build_color_ramp(max_depth),
            num_points,
        }
    }

    /// 領域を初期値に戻し、深度を設定してランプを再構築する
    ///
    /// 状態は丸ごと置き換える。同じ深度で 2 回呼べば結果は
    /// ビットまで一致する。
    pub fn reset(&mut self, max_depth: u32) {
        self.region = PlaneRegion::default();
        self.max_depth = max_depth;
        self.ramp = build_color_ramp(max_depth);
    }

    /// 現在の状態で 1 フレーム分のグリッドを生成する
    pub fn sample(&self, width_px: usize, height_px: usize) -> Result<Vec<DotSample>, SampleError> {
        sampler::sample_grid(
            &self.region,
            self.num_points,
            self.max_depth,
            &self.ramp,
            width_px,
            height_px,
        )
    }

    /// 描画に使うドット半径
    pub fn dot_radius(&self, width_px: usize) -> usize {
        sampler::dot_radius(width_px, self.num_points)
    }

    pub fn region(&self) -> &PlaneRegion {
        &self.region
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn ramp(&self) -> &[u32] {
        &self.ramp
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }
}
