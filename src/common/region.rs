//! 複素平面上の表示領域

use thiserror::Error;

use crate::common::constants::{X_MAX, X_MIN, Y_MAX, Y_MIN};

/// 領域の構築エラー
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("実部の範囲が不正です: x_min={0}, x_max={1}")]
    InvalidXRange(f64, f64),
    #[error("虚部の範囲が不正です: y_min={0}, y_max={1}")]
    InvalidYRange(f64, f64),
}

/// 複素平面上の矩形領域
///
/// 構築後は不変。範囲を変えるときは丸ごと作り直す
/// （部分更新による不整合を避けるため）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlaneRegion {
    /// 範囲を検証して領域を作る（x_max > x_min かつ y_max > y_min）
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, RegionError> {
        if !(x_max > x_min) {
            return Err(RegionError::InvalidXRange(x_min, x_max));
        }
        if !(y_max > y_min) {
            return Err(RegionError::InvalidYRange(y_min, y_max));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// 実部方向の幅
    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// 虚部方向の幅
    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for PlaneRegion {
    /// 初期表示範囲（x: [-2.5, 1], y: [-1.75, 1.75]）
    fn default() -> Self {
        Self {
            x_min: X_MIN,
            x_max: X_MAX,
            y_min: Y_MIN,
            y_max: Y_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_bounds() {
        let region = PlaneRegion::default();
        assert_eq!(region.x_min, -2.5);
        assert_eq!(region.x_max, 1.0);
        assert_eq!(region.y_min, -1.75);
        assert_eq!(region.y_max, 1.75);
        assert_eq!(region.x_range(), 3.5);
        assert_eq!(region.y_range(), 3.5);
    }

    #[test]
    fn rejects_empty_x_range() {
        assert_eq!(
            PlaneRegion::new(1.0, 1.0, 0.0, 1.0),
            Err(RegionError::InvalidXRange(1.0, 1.0))
        );
        assert!(PlaneRegion::new(2.0, -2.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn rejects_empty_y_range() {
        assert_eq!(
            PlaneRegion::new(0.0, 1.0, 0.5, 0.5),
            Err(RegionError::InvalidYRange(0.5, 0.5))
        );
    }

    #[test]
    fn rejects_nan_bounds() {
        // NaN との比較は false になるので検証で弾かれる
        assert!(PlaneRegion::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(PlaneRegion::new(0.0, 1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn valid_region() {
        let region = PlaneRegion::new(-1.0, 1.0, -0.5, 0.5).unwrap();
        assert_eq!(region.x_range(), 2.0);
        assert_eq!(region.y_range(), 1.0);
    }
}
