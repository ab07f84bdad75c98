use super::EPSILON_DENOMINATOR;
use crate::units::{from_pascal, PressureUnit};

/// 기체 상수 R [J/(mol·K)].
pub const GAS_CONSTANT: f64 = 8.314462618;

/// 이상기체 압력 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct IdealGasInput {
    /// 물질량 [mol]
    pub n_mol: f64,
    /// 절대온도 [K]
    pub temperature_k: f64,
    /// 용기 체적 [m³]. 입력 시점에 0.01로 하한 처리되어 있어야 한다.
    pub volume_m3: f64,
}

/// 이상기체 압력 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasResult {
    pub pressure_pa: f64,
    pub pressure_atm: f64,
}

/// P = n·R·T / max(V, 1e-6). 분자 간 상호작용이 없는 강체 용기를 가정한다.
pub fn compute_ideal_gas_pressure(input: IdealGasInput) -> IdealGasResult {
    let volume_m3 = input.volume_m3.max(EPSILON_DENOMINATOR);
    let pressure_pa = (input.n_mol * GAS_CONSTANT * input.temperature_k) / volume_m3;
    IdealGasResult {
        pressure_pa,
        pressure_atm: from_pascal(pressure_pa, PressureUnit::Atm),
    }
}
