//! 共通定数

/// 複素平面の初期表示範囲（実部）
pub const X_MIN: f64 = -2.5;
pub const X_MAX: f64 = 1.0;

/// 複素平面の初期表示範囲（虚部）
pub const Y_MIN: f64 = -1.75;
pub const Y_MAX: f64 = 1.75;

/// 1辺あたりのサンプル点数（グリッドは N×N）
pub const DEFAULT_NUM_POINTS: usize = 100;

/// 発散判定の閾値（|z|^2 と比較する。|z| > 2 で発散が確定）
pub const DIVERGENCE_THRESHOLD: f64 = 4.0;

/// 初期の最大反復深度
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// 深度の上限（キー操作で増やせる範囲）
pub const MAX_DEPTH_LIMIT: u32 = 1000;

/// ウィンドウサイズ（正方形）
pub const WINDOW_SIZE: usize = 800;

/// 背景色 (0xRRGGBB)
pub const BACKGROUND_COLOR: u32 = 0x202020;
