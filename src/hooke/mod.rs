//! 훅의 법칙(스프링) 계산과 스프링 그림의 애니메이션 보간.

pub mod smoothing;
pub mod spring;

pub use smoothing::SmoothedValue;
pub use spring::*;
