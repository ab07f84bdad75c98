//! 화면별 입력 상태와 화면 수명 주기.
//!
//! 입력은 항상 setter를 거친다. setter는 비유한 값을 버리고, 유한한 값은 슬라이더
//! 범위로 잘라 저장하므로 저장된 값은 범위를 벗어나지 않는다.

use tracing::{debug, warn};

use crate::hooke::{self, SmoothedValue, SpringInput, SpringResult};
use crate::pressure::{
    self, IdealGasInput, IdealGasResult, MechanicalPressureInput, MechanicalPressureResult,
    PressureMode,
};
use crate::quantity::QuantityKind;

/// setter 호출 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetOutcome {
    /// 요청값을 그대로 저장했다.
    Accepted,
    /// 범위 밖이라 잘라낸 값을 저장했다.
    Clamped { requested: f64, stored: f64 },
    /// NaN/무한대라 이전 값을 유지했다.
    Rejected,
}

fn apply_input(kind: QuantityKind, slot: &mut f64, requested: f64) -> SetOutcome {
    if !requested.is_finite() {
        warn!(?kind, requested, "non-finite input rejected");
        return SetOutcome::Rejected;
    }
    let stored = kind.domain().clamp(requested);
    *slot = stored;
    if stored == requested {
        SetOutcome::Accepted
    } else {
        warn!(?kind, requested, stored, "input clamped to domain");
        SetOutcome::Clamped { requested, stored }
    }
}

/// 스프링 화면 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    mass_kg: f64,
    k_n_per_m: f64,
}

impl Default for SpringState {
    fn default() -> Self {
        Self {
            mass_kg: QuantityKind::Mass.domain().default,
            k_n_per_m: QuantityKind::SpringConstant.domain().default,
        }
    }
}

impl SpringState {
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn k_n_per_m(&self) -> f64 {
        self.k_n_per_m
    }

    pub fn set_mass_kg(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::Mass, &mut self.mass_kg, value)
    }

    pub fn set_k_n_per_m(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::SpringConstant, &mut self.k_n_per_m, value)
    }

    pub fn input(&self) -> SpringInput {
        SpringInput {
            mass_kg: self.mass_kg,
            k_n_per_m: self.k_n_per_m,
        }
    }

    pub fn evaluate(&self) -> SpringResult {
        hooke::compute_spring(self.input())
    }
}

/// 기계적 압력 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicalPressureState {
    force_n: f64,
    area_m2: f64,
}

impl Default for MechanicalPressureState {
    fn default() -> Self {
        Self {
            force_n: QuantityKind::Force.domain().default,
            area_m2: QuantityKind::Area.domain().default,
        }
    }
}

impl MechanicalPressureState {
    pub fn force_n(&self) -> f64 {
        self.force_n
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn set_force_n(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::Force, &mut self.force_n, value)
    }

    /// 0.01 m² 미만은 저장하지 않고 0.01로 올린다.
    pub fn set_area_m2(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::Area, &mut self.area_m2, value)
    }

    pub fn input(&self) -> MechanicalPressureInput {
        MechanicalPressureInput {
            force_n: self.force_n,
            area_m2: self.area_m2,
        }
    }

    pub fn evaluate(&self) -> MechanicalPressureResult {
        pressure::compute_mechanical_pressure(self.input())
    }
}

/// 이상기체 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasState {
    n_mol: f64,
    temperature_k: f64,
    volume_m3: f64,
}

impl Default for IdealGasState {
    fn default() -> Self {
        Self {
            n_mol: QuantityKind::AmountOfSubstance.domain().default,
            temperature_k: QuantityKind::Temperature.domain().default,
            volume_m3: QuantityKind::Volume.domain().default,
        }
    }
}

impl IdealGasState {
    pub fn n_mol(&self) -> f64 {
        self.n_mol
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    pub fn volume_m3(&self) -> f64 {
        self.volume_m3
    }

    pub fn set_n_mol(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::AmountOfSubstance, &mut self.n_mol, value)
    }

    pub fn set_temperature_k(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::Temperature, &mut self.temperature_k, value)
    }

    /// 0.01 m³ 미만은 저장하지 않고 0.01로 올린다.
    pub fn set_volume_m3(&mut self, value: f64) -> SetOutcome {
        apply_input(QuantityKind::Volume, &mut self.volume_m3, value)
    }

    pub fn input(&self) -> IdealGasInput {
        IdealGasInput {
            n_mol: self.n_mol,
            temperature_k: self.temperature_k,
            volume_m3: self.volume_m3,
        }
    }

    pub fn evaluate(&self) -> IdealGasResult {
        pressure::compute_ideal_gas_pressure(self.input())
    }
}

/// 스프링 화면. 입력 상태와 그림 길이 보간값을 함께 가진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringScreen {
    state: SpringState,
    length_px: SmoothedValue,
}

impl Default for SpringScreen {
    fn default() -> Self {
        Self::with_time_constant(crate::hooke::smoothing::DEFAULT_TIME_CONSTANT_S)
    }
}

impl SpringScreen {
    pub fn with_time_constant(time_constant_s: f64) -> Self {
        let state = SpringState::default();
        let target = state.evaluate().target_length_px;
        Self {
            state,
            length_px: SmoothedValue::with_time_constant(target, time_constant_s),
        }
    }

    pub fn state(&self) -> &SpringState {
        &self.state
    }

    pub fn set_mass_kg(&mut self, value: f64) -> SetOutcome {
        let outcome = self.state.set_mass_kg(value);
        self.sync_target();
        outcome
    }

    pub fn set_k_n_per_m(&mut self, value: f64) -> SetOutcome {
        let outcome = self.state.set_k_n_per_m(value);
        self.sync_target();
        outcome
    }

    /// 입력이 바뀐 뒤 그림 목표 길이를 다시 맞춘다.
    fn sync_target(&mut self) {
        self.length_px.retarget(self.state.evaluate().target_length_px);
    }

    pub fn set_time_constant(&mut self, time_constant_s: f64) {
        self.length_px.set_time_constant(time_constant_s);
    }

    /// 프레임마다 호출한다. 아직 움직이는 중이면 true.
    pub fn advance(&mut self, dt_s: f64) -> bool {
        self.length_px.step(dt_s)
    }

    pub fn displayed_length_px(&self) -> f64 {
        self.length_px.value()
    }

    pub fn target_length_px(&self) -> f64 {
        self.length_px.target()
    }
}

/// 압력 화면. 하위 모드 상태는 처음 표시될 때 만들어지고 화면이 살아있는 동안 유지된다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureScreen {
    mode: PressureMode,
    mechanical: Option<MechanicalPressureState>,
    ideal_gas: Option<IdealGasState>,
}

impl PressureScreen {
    pub fn mode(&self) -> PressureMode {
        self.mode
    }

    pub fn select_mode(&mut self, mode: PressureMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "pressure mode switched");
            self.mode = mode;
        }
    }

    pub fn mechanical_mut(&mut self) -> &mut MechanicalPressureState {
        self.mechanical.get_or_insert_with(MechanicalPressureState::default)
    }

    pub fn ideal_gas_mut(&mut self) -> &mut IdealGasState {
        self.ideal_gas.get_or_insert_with(IdealGasState::default)
    }

    /// 아직 한 번도 표시되지 않은 하위 모드는 None.
    pub fn mechanical(&self) -> Option<&MechanicalPressureState> {
        self.mechanical.as_ref()
    }

    pub fn ideal_gas(&self) -> Option<&IdealGasState> {
        self.ideal_gas.as_ref()
    }
}

/// 상단 탭.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Spring,
    Pressure,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Spring, Tab::Pressure];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Spring => "Resorte",
            Tab::Pressure => "Presión",
        }
    }
}

/// 현재 떠 있는 화면. 탭을 바꾸면 이전 화면 상태는 버려진다.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveScreen {
    Spring(SpringScreen),
    Pressure(PressureScreen),
}

impl Default for ActiveScreen {
    fn default() -> Self {
        ActiveScreen::Spring(SpringScreen::default())
    }
}

impl ActiveScreen {
    pub fn tab(&self) -> Tab {
        match self {
            ActiveScreen::Spring(_) => Tab::Spring,
            ActiveScreen::Pressure(_) => Tab::Pressure,
        }
    }

    /// 다른 탭이면 새 화면을 기본값으로 연다. 같은 탭이면 아무것도 하지 않는다.
    pub fn open(&mut self, tab: Tab, time_constant_s: f64) {
        if self.tab() == tab {
            return;
        }
        debug!(from = ?self.tab(), to = ?tab, "screen switched");
        *self = match tab {
            Tab::Spring => ActiveScreen::Spring(SpringScreen::with_time_constant(time_constant_s)),
            Tab::Pressure => ActiveScreen::Pressure(PressureScreen::default()),
        };
    }
}
