use super::EPSILON_DENOMINATOR;
use crate::units::{from_pascal, PressureUnit};

/// 기계적 압력 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct MechanicalPressureInput {
    /// 힘 [N]
    pub force_n: f64,
    /// 작용 면적 [m²]. 입력 시점에 0.01로 하한 처리되어 있어야 한다.
    pub area_m2: f64,
}

/// 기계적 압력 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicalPressureResult {
    pub pressure_pa: f64,
    pub pressure_bar: f64,
}

/// P = F / max(A, 1e-6).
pub fn compute_mechanical_pressure(input: MechanicalPressureInput) -> MechanicalPressureResult {
    let pressure_pa = input.force_n / input.area_m2.max(EPSILON_DENOMINATOR);
    MechanicalPressureResult {
        pressure_pa,
        pressure_bar: from_pascal(pressure_pa, PressureUnit::Bar),
    }
}
