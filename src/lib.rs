//! マンデルブロ集合をドットグリッドで描画するライブラリ
//!
//! 純粋な計算部分（反復計算・カラーランプ・グリッドサンプリング）と
//! 描画バッファ処理を `common` 以下に分離し、ウィンドウ表示は
//! バイナリ側（main.rs）が担当する。

pub mod common;
