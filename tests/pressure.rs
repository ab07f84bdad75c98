use physics_edu_toolbox::pressure::{
    self, IdealGasInput, MechanicalPressureInput, GAS_CONSTANT,
};
use physics_edu_toolbox::units::{from_pascal, PressureUnit};

fn mech(force_n: f64, area_m2: f64) -> pressure::MechanicalPressureResult {
    pressure::compute_mechanical_pressure(MechanicalPressureInput { force_n, area_m2 })
}

fn gas(n_mol: f64, temperature_k: f64, volume_m3: f64) -> pressure::IdealGasResult {
    pressure::compute_ideal_gas_pressure(IdealGasInput {
        n_mol,
        temperature_k,
        volume_m3,
    })
}

#[test]
fn mechanical_default_inputs() {
    let res = mech(100.0, 1.0);
    assert!((res.pressure_pa - 100.0).abs() < 1e-12);
    assert!((res.pressure_bar - 0.001).abs() < 1e-15);
}

#[test]
fn mechanical_extreme_corner() {
    let res = mech(2000.0, 0.01);
    assert!((res.pressure_pa - 200_000.0).abs() < 1e-6);
    assert!((res.pressure_bar - 2.0).abs() < 1e-10);
}

#[test]
fn mechanical_zero_force_gives_zero_pressure() {
    let res = mech(0.0, 3.0);
    assert_eq!(res.pressure_pa, 0.0);
    assert_eq!(res.pressure_bar, 0.0);
}

#[test]
fn evaluation_floor_guards_degenerate_area() {
    // 입력 단계 하한을 우회해도 계산 단계에서 1e-6으로 막는다.
    let res = mech(1.0, 0.0);
    assert!(res.pressure_pa.is_finite());
    assert!((res.pressure_pa - 1e6).abs() < 1e-3);
    let res = mech(1.0, -4.0);
    assert!((res.pressure_pa - 1e6).abs() < 1e-3);
}

#[test]
fn ideal_gas_room_temperature_mole() {
    let res = gas(1.0, 293.0, 1.0);
    assert!((res.pressure_pa - 2436.137547074).abs() < 1e-6);
    assert!((res.pressure_atm - 0.024042808).abs() < 1e-8);
}

#[test]
fn ideal_gas_extreme_corner() {
    let res = gas(50.0, 1200.0, 0.01);
    assert!((res.pressure_pa - 49_886_775.708).abs() < 1e-3);
    assert!((res.pressure_atm - res.pressure_pa / 101_325.0).abs() < 1e-12);
    assert!((res.pressure_atm - 492.3442).abs() < 1e-3);
}

#[test]
fn ideal_gas_degenerate_volume_stays_finite() {
    let res = gas(1.0, 300.0, 0.0);
    assert!(res.pressure_pa.is_finite());
    assert!((res.pressure_pa - GAS_CONSTANT * 300.0 / 1e-6).abs() < 1e-3);
}

#[test]
fn ideal_gas_is_linear_in_moles_and_temperature() {
    let base = gas(2.0, 400.0, 2.0).pressure_pa;
    assert!((gas(4.0, 400.0, 2.0).pressure_pa - 2.0 * base).abs() < 1e-9);
    assert!((gas(2.0, 800.0, 2.0).pressure_pa - 2.0 * base).abs() < 1e-9);
    assert!((gas(2.0, 400.0, 4.0).pressure_pa - 0.5 * base).abs() < 1e-9);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let a = gas(13.7, 777.7, 0.37);
    let b = gas(13.7, 777.7, 0.37);
    assert_eq!(a.pressure_pa.to_bits(), b.pressure_pa.to_bits());
    assert_eq!(a.pressure_atm.to_bits(), b.pressure_atm.to_bits());
    assert_eq!(mech(123.4, 0.56), mech(123.4, 0.56));
}

#[test]
fn pascal_to_output_units() {
    assert_eq!(from_pascal(101_325.0, PressureUnit::Atm), 1.0);
    assert_eq!(from_pascal(250_000.0, PressureUnit::Bar), 2.5);
    assert_eq!(from_pascal(42.0, PressureUnit::Pascal), 42.0);
    assert_eq!(PressureUnit::Bar.symbol(), "bar");
}

#[test]
fn mode_labels_match_selector() {
    assert_eq!(pressure::PressureMode::Mechanical.label(), "Mecánica (F/A)");
    assert_eq!(pressure::PressureMode::IdealGas.label(), "Gas ideal (nRT/V)");
    assert_eq!(pressure::PressureMode::default(), pressure::PressureMode::Mechanical);
}
