/// 결과 카드에 표시하는 압력 단위. 내부 기준은 항상 Pa 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Pascal,
    Bar,
    Atm,
}

pub const PA_PER_BAR: f64 = 100_000.0;
pub const PA_PER_ATM: f64 = 101_325.0;

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
        }
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Atm => value_pa / PA_PER_ATM,
    }
}
