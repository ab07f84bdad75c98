//! 계산 로직과 화면 상태를 라이브러리로 분리하여 GUI와 CLI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod hooke;
pub mod logging;
pub mod pressure;
pub mod quantity;
pub mod report;
pub mod state;
pub mod ui_cli;
pub mod units;
