//! 결과 표시용 단위 정의 모듈.

pub mod pressure;

pub use pressure::{from_pascal, PressureUnit};
