use crate::pressure::MIN_INPUT_DENOMINATOR;

/// 슬라이더로 입력받는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Mass,
    SpringConstant,
    Force,
    Area,
    AmountOfSubstance,
    Temperature,
    Volume,
}

/// 입력값의 허용 범위와 기본값.
///
/// `min`/`max`는 슬라이더 범위와 같다. 면적·체적은 `min`이 곧 입력 시점의 하한(0.01)이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputDomain {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputDomain {
    /// 값을 범위 안으로 넣는다. NaN은 그대로 통과하므로 호출 측에서 먼저 걸러야 한다.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl QuantityKind {
    pub fn domain(self) -> InputDomain {
        let (min, max, default) = match self {
            QuantityKind::Mass => (0.1, 10.0, 2.0),
            QuantityKind::SpringConstant => (10.0, 500.0, 100.0),
            QuantityKind::Force => (0.0, 2000.0, 100.0),
            QuantityKind::Area => (MIN_INPUT_DENOMINATOR, 10.0, 1.0),
            QuantityKind::AmountOfSubstance => (0.1, 50.0, 1.0),
            QuantityKind::Temperature => (200.0, 1200.0, 293.0),
            QuantityKind::Volume => (MIN_INPUT_DENOMINATOR, 10.0, 1.0),
        };
        InputDomain { min, max, default }
    }

    /// 화면에 표시되는 입력 라벨(값 제외).
    pub fn label(self) -> &'static str {
        match self {
            QuantityKind::Mass => "Masa (kg)",
            QuantityKind::SpringConstant => "Constante elástica k (N/m)",
            QuantityKind::Force => "Fuerza F (N)",
            QuantityKind::Area => "Área A (m²)",
            QuantityKind::AmountOfSubstance => "Cantidad de sustancia n (mol)",
            QuantityKind::Temperature => "Temperatura T (K)",
            QuantityKind::Volume => "Volumen V (m³)",
        }
    }

    pub fn unit_symbol(self) -> &'static str {
        match self {
            QuantityKind::Mass => "kg",
            QuantityKind::SpringConstant => "N/m",
            QuantityKind::Force => "N",
            QuantityKind::Area => "m²",
            QuantityKind::AmountOfSubstance => "mol",
            QuantityKind::Temperature => "K",
            QuantityKind::Volume => "m³",
        }
    }

    /// 입력 라벨에 붙는 소수 자릿수.
    pub fn label_decimals(self) -> usize {
        match self {
            QuantityKind::SpringConstant => 0,
            QuantityKind::Force | QuantityKind::Temperature => 1,
            QuantityKind::Mass
            | QuantityKind::Area
            | QuantityKind::AmountOfSubstance
            | QuantityKind::Volume => 2,
        }
    }

    /// "Masa (kg): 2.00" 형태의 입력 라벨을 만든다.
    pub fn format_input(self, value: f64) -> String {
        format!("{}: {:.*}", self.label(), self.label_decimals(), value)
    }
}
