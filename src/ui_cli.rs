use std::io::{BufRead, Write};

use tracing::info;

use crate::app::AppError;
use crate::pressure::PressureMode;
use crate::quantity::QuantityKind;
use crate::report::{self, ReportLine};
use crate::state::{PressureScreen, SetOutcome, SpringScreen, Tab};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Open(Tab),
    Exit,
}

/// 대화형 콘솔. 입력이 끝나면(EOF) 메뉴를 빠져나간다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 메인 메뉴 루프. 각 화면은 열릴 때 기본값으로 만들어지고 닫히면 버려진다.
    pub fn session(&mut self) -> Result<(), AppError> {
        loop {
            match self.main_menu()? {
                MenuChoice::Open(Tab::Spring) => self.spring_screen()?,
                MenuChoice::Open(Tab::Pressure) => self.pressure_screen()?,
                MenuChoice::Exit => {
                    self.println("Hasta luego.")?;
                    info!("console session finished");
                    return Ok(());
                }
            }
        }
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다.
    pub fn main_menu(&mut self) -> Result<MenuChoice, AppError> {
        self.println("\n=== Física/Química ===")?;
        self.println("1) Resorte")?;
        self.println("2) Presión")?;
        self.println("0) Salir")?;
        loop {
            let Some(sel) = self.read_line("Opción: ")? else {
                return Ok(MenuChoice::Exit);
            };
            match sel.trim() {
                "1" => return Ok(MenuChoice::Open(Tab::Spring)),
                "2" => return Ok(MenuChoice::Open(Tab::Pressure)),
                "0" => return Ok(MenuChoice::Exit),
                _ => self.println("Opción no válida. Inténtalo de nuevo.")?,
            }
        }
    }

    fn spring_screen(&mut self) -> Result<(), AppError> {
        let mut screen = SpringScreen::default();
        loop {
            self.println(&format!("\n-- {} --", Tab::Spring.label()))?;
            self.println("Simulador de resorte (Ley de Hooke)")?;
            let state = *screen.state();
            self.print_inputs(&[
                (QuantityKind::Mass, state.mass_kg()),
                (QuantityKind::SpringConstant, state.k_n_per_m()),
            ])?;
            self.print_report(&report::spring_report(&state.evaluate()))?;
            self.println(report::SPRING_NOTE)?;
            self.println("1) Cambiar masa  2) Cambiar k  0) Volver")?;
            let Some(sel) = self.read_line("Opción: ")? else {
                return Ok(());
            };
            let kind = match sel.trim() {
                "1" => QuantityKind::Mass,
                "2" => QuantityKind::SpringConstant,
                "0" => return Ok(()),
                _ => {
                    self.println("Opción no válida.")?;
                    continue;
                }
            };
            let Some(value) = self.read_quantity(kind)? else {
                return Ok(());
            };
            let outcome = if kind == QuantityKind::Mass {
                screen.set_mass_kg(value)
            } else {
                screen.set_k_n_per_m(value)
            };
            self.print_outcome(kind, outcome)?;
        }
    }

    fn pressure_screen(&mut self) -> Result<(), AppError> {
        let mut screen = PressureScreen::default();
        loop {
            self.println(&format!("\n-- {} --", Tab::Pressure.label()))?;
            let mode = screen.mode();
            self.println(&format!("Modo: {}", mode.label()))?;
            self.println(&format!(
                "1) {}  2) {}",
                PressureMode::Mechanical.label(),
                PressureMode::IdealGas.label()
            ))?;
            self.println(mode.formula())?;
            let fields = pressure_fields(mode);
            let values: Vec<(QuantityKind, f64)> = fields
                .iter()
                .filter_map(|&kind| pressure_value(&mut screen, kind).map(|v| (kind, v)))
                .collect();
            self.print_inputs(&values)?;
            match mode {
                PressureMode::Mechanical => {
                    let result = screen.mechanical_mut().evaluate();
                    self.print_report(&report::mechanical_report(&result))?;
                }
                PressureMode::IdealGas => {
                    let result = screen.ideal_gas_mut().evaluate();
                    self.print_report(&report::ideal_gas_report(&result))?;
                    self.println(report::IDEAL_GAS_NOTE)?;
                }
            }
            let edits: Vec<String> = fields
                .iter()
                .enumerate()
                .map(|(i, kind)| format!("{}) {}", i + 3, kind.label()))
                .collect();
            self.println(&format!("{}  0) Volver", edits.join("  ")))?;

            let Some(sel) = self.read_line("Opción: ")? else {
                return Ok(());
            };
            let sel = sel.trim();
            match sel {
                "0" => return Ok(()),
                "1" => screen.select_mode(PressureMode::Mechanical),
                "2" => screen.select_mode(PressureMode::IdealGas),
                _ => {
                    let picked = sel
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(3))
                        .and_then(|i| fields.get(i).copied());
                    let Some(kind) = picked else {
                        self.println("Opción no válida.")?;
                        continue;
                    };
                    let Some(value) = self.read_quantity(kind)? else {
                        return Ok(());
                    };
                    let outcome = set_pressure_value(&mut screen, kind, value);
                    self.print_outcome(kind, outcome)?;
                }
            }
        }
    }

    fn print_inputs(&mut self, values: &[(QuantityKind, f64)]) -> Result<(), AppError> {
        for (kind, value) in values {
            self.println(&kind.format_input(*value))?;
        }
        Ok(())
    }

    fn print_report(&mut self, lines: &[ReportLine]) -> Result<(), AppError> {
        for line in lines {
            self.println(&line.to_string())?;
        }
        Ok(())
    }

    fn print_outcome(&mut self, kind: QuantityKind, outcome: SetOutcome) -> Result<(), AppError> {
        match outcome {
            SetOutcome::Accepted => Ok(()),
            SetOutcome::Clamped { stored, .. } => self.println(&format!(
                "Valor fuera de rango; se usa {stored} {}.",
                kind.unit_symbol()
            )),
            SetOutcome::Rejected => self.println("Valor no válido; se mantiene el anterior."),
        }
    }

    fn read_quantity(&mut self, kind: QuantityKind) -> Result<Option<f64>, AppError> {
        let domain = kind.domain();
        let prompt = format!("{} [{} – {}]: ", kind.label(), domain.min, domain.max);
        self.read_f64(&prompt)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    fn read_f64(&mut self, prompt: &str) -> Result<Option<f64>, AppError> {
        loop {
            let Some(s) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match s.trim().replace(',', ".").parse::<f64>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => self.println("Introduce un número.")?,
            }
        }
    }
}

fn pressure_fields(mode: PressureMode) -> &'static [QuantityKind] {
    match mode {
        PressureMode::Mechanical => &[QuantityKind::Force, QuantityKind::Area],
        PressureMode::IdealGas => &[
            QuantityKind::AmountOfSubstance,
            QuantityKind::Temperature,
            QuantityKind::Volume,
        ],
    }
}

fn pressure_value(screen: &mut PressureScreen, kind: QuantityKind) -> Option<f64> {
    match kind {
        QuantityKind::Force => Some(screen.mechanical_mut().force_n()),
        QuantityKind::Area => Some(screen.mechanical_mut().area_m2()),
        QuantityKind::AmountOfSubstance => Some(screen.ideal_gas_mut().n_mol()),
        QuantityKind::Temperature => Some(screen.ideal_gas_mut().temperature_k()),
        QuantityKind::Volume => Some(screen.ideal_gas_mut().volume_m3()),
        QuantityKind::Mass | QuantityKind::SpringConstant => None,
    }
}

fn set_pressure_value(screen: &mut PressureScreen, kind: QuantityKind, value: f64) -> SetOutcome {
    match kind {
        QuantityKind::Force => screen.mechanical_mut().set_force_n(value),
        QuantityKind::Area => screen.mechanical_mut().set_area_m2(value),
        QuantityKind::AmountOfSubstance => screen.ideal_gas_mut().set_n_mol(value),
        QuantityKind::Temperature => screen.ideal_gas_mut().set_temperature_k(value),
        QuantityKind::Volume => screen.ideal_gas_mut().set_volume_m3(value),
        QuantityKind::Mass | QuantityKind::SpringConstant => SetOutcome::Rejected,
    }
}
