//! 압력 계산 모듈 모음.
//! 기계적 압력(F/A)과 이상기체 압력(nRT/V)으로 구성한다.

pub mod ideal_gas;
pub mod mechanical;

pub use ideal_gas::*;
pub use mechanical::*;

/// 면적·체적을 입력받을 때 적용하는 하한 [m² 또는 m³].
pub const MIN_INPUT_DENOMINATOR: f64 = 0.01;
/// 계산 시점에 분모에 한 번 더 거는 하한.
pub const EPSILON_DENOMINATOR: f64 = 1e-6;

/// 압력 화면의 하위 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureMode {
    #[default]
    Mechanical,
    IdealGas,
}

impl PressureMode {
    pub const ALL: [PressureMode; 2] = [PressureMode::Mechanical, PressureMode::IdealGas];

    pub fn label(self) -> &'static str {
        match self {
            PressureMode::Mechanical => "Mecánica (F/A)",
            PressureMode::IdealGas => "Gas ideal (nRT/V)",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            PressureMode::Mechanical => "Presión mecánica: P = F / A",
            PressureMode::IdealGas => "Gas ideal: P = n R T / V",
        }
    }
}
