//! 共通モジュール

pub mod colors;
pub mod constants;
pub mod draw;
pub mod mandelbrot;
pub mod region;
pub mod sampler;
pub mod view;
