use std::io::{BufRead, Write};

use clap::Subcommand;
use thiserror::Error;
use tracing::debug;

use crate::quantity::QuantityKind;
use crate::report::{self, ReportLine};
use crate::state::{IdealGasState, MechanicalPressureState, SetOutcome, SpringState};
use crate::ui_cli::Console;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("error de configuración: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// 한 번만 계산하고 끝나는 CLI 하위 명령. 생략한 입력은 화면 기본값을 쓴다.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Ley de Hooke: extensión, fuerza elástica y peso
    Spring {
        /// Masa (kg), 0.1–10
        #[arg(long)]
        mass: Option<f64>,
        /// Constante elástica k (N/m), 10–500
        #[arg(long)]
        k: Option<f64>,
    },
    /// Presión mecánica P = F / A
    Mechanical {
        /// Fuerza F (N), 0–2000
        #[arg(long)]
        force: Option<f64>,
        /// Área A (m²), 0.01–10
        #[arg(long)]
        area: Option<f64>,
    },
    /// Gas ideal P = n R T / V
    IdealGas {
        /// Cantidad de sustancia n (mol), 0.1–50
        #[arg(long)]
        moles: Option<f64>,
        /// Temperatura T (K), 200–1200
        #[arg(long)]
        temperature: Option<f64>,
        /// Volumen V (m³), 0.01–10
        #[arg(long)]
        volume: Option<f64>,
    },
}

/// 인자가 주어졌을 때만 setter를 부른다. 범위 밖 값은 setter가 잘라내고 경고를 남긴다.
fn apply_arg(value: Option<f64>, set: impl FnOnce(f64) -> SetOutcome) {
    if let Some(value) = value {
        set(value);
    }
}

/// 하위 명령을 평가해 출력할 줄 목록(입력 라벨 + 결과)을 만든다.
pub fn evaluate_command(command: &Command) -> Vec<String> {
    let (inputs, results): (Vec<String>, Vec<ReportLine>) = match *command {
        Command::Spring { mass, k } => {
            let mut state = SpringState::default();
            apply_arg(mass, |v| state.set_mass_kg(v));
            apply_arg(k, |v| state.set_k_n_per_m(v));
            (
                vec![
                    QuantityKind::Mass.format_input(state.mass_kg()),
                    QuantityKind::SpringConstant.format_input(state.k_n_per_m()),
                ],
                report::spring_report(&state.evaluate()),
            )
        }
        Command::Mechanical { force, area } => {
            let mut state = MechanicalPressureState::default();
            apply_arg(force, |v| state.set_force_n(v));
            apply_arg(area, |v| state.set_area_m2(v));
            (
                vec![
                    QuantityKind::Force.format_input(state.force_n()),
                    QuantityKind::Area.format_input(state.area_m2()),
                ],
                report::mechanical_report(&state.evaluate()),
            )
        }
        Command::IdealGas {
            moles,
            temperature,
            volume,
        } => {
            let mut state = IdealGasState::default();
            apply_arg(moles, |v| state.set_n_mol(v));
            apply_arg(temperature, |v| state.set_temperature_k(v));
            apply_arg(volume, |v| state.set_volume_m3(v));
            (
                vec![
                    QuantityKind::AmountOfSubstance.format_input(state.n_mol()),
                    QuantityKind::Temperature.format_input(state.temperature_k()),
                    QuantityKind::Volume.format_input(state.volume_m3()),
                ],
                report::ideal_gas_report(&state.evaluate()),
            )
        }
    };
    debug!(?command, "command evaluated");
    inputs
        .into_iter()
        .chain(results.iter().map(ToString::to_string))
        .collect()
}

/// 하위 명령이 있으면 한 번 계산해 출력하고, 없으면 대화형 메뉴를 실행한다.
pub fn run<R: BufRead, W: Write>(
    command: Option<&Command>,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    match command {
        Some(cmd) => {
            for line in evaluate_command(cmd) {
                console.println(&line)?;
            }
            Ok(())
        }
        None => console.session(),
    }
}
