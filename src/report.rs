//! 결과값을 화면/콘솔 표시용 문자열로 만든다.
//! 형식 문자열은 GUI와 CLI가 공유한다.

use crate::hooke::SpringResult;
use crate::pressure::{IdealGasResult, MechanicalPressureResult};
use crate::units::PressureUnit;

pub const SPRING_NOTE: &str = "Nota: modelo cuasiestático (sin oscilaciones/damping).";
pub const IDEAL_GAS_NOTE: &str = "Asume gas ideal (sin interacciones) y contenedor rígido.";

/// 결과 카드 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl ReportLine {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

pub fn format_extension(extension_m: f64) -> String {
    format!("{extension_m:.3} m")
}

pub fn format_newtons(force_n: f64) -> String {
    format!("{force_n:.2} N")
}

pub fn format_pascal(pressure_pa: f64) -> String {
    format!("{pressure_pa:.2} {}", PressureUnit::Pascal.symbol())
}

pub fn format_bar(pressure_bar: f64) -> String {
    format!("{pressure_bar:.4} {}", PressureUnit::Bar.symbol())
}

pub fn format_atm(pressure_atm: f64) -> String {
    format!("{pressure_atm:.3} {}", PressureUnit::Atm.symbol())
}

pub fn spring_report(result: &SpringResult) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Extensión (m)", format_extension(result.extension_m)),
        ReportLine::new("Fuerza elástica (N)", format_newtons(result.spring_force_n)),
        ReportLine::new("Peso (N)", format_newtons(result.weight_n)),
    ]
}

pub fn mechanical_report(result: &MechanicalPressureResult) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Presión (Pa)", format_pascal(result.pressure_pa)),
        ReportLine::new("Presión (bar)", format_bar(result.pressure_bar)),
    ]
}

pub fn ideal_gas_report(result: &IdealGasResult) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Presión (Pa)", format_pascal(result.pressure_pa)),
        ReportLine::new("Presión (atm)", format_atm(result.pressure_atm)),
    ]
}
