use physics_edu_toolbox::hooke::{self, SpringInput};
use physics_edu_toolbox::pressure::{self, IdealGasInput, MechanicalPressureInput};
use physics_edu_toolbox::quantity::QuantityKind;
use physics_edu_toolbox::report;

fn values(lines: &[report::ReportLine]) -> Vec<&str> {
    lines.iter().map(|l| l.value.as_str()).collect()
}

#[test]
fn spring_card_text() {
    let res = hooke::compute_spring(SpringInput {
        mass_kg: 2.0,
        k_n_per_m: 100.0,
    });
    let lines = report::spring_report(&res);
    assert_eq!(values(&lines), ["0.196 m", "19.62 N", "19.62 N"]);
    assert_eq!(lines[0].to_string(), "Extensión (m): 0.196 m");
    assert_eq!(lines[1].label, "Fuerza elástica (N)");
    assert_eq!(lines[2].label, "Peso (N)");
}

#[test]
fn mechanical_card_text() {
    let res = pressure::compute_mechanical_pressure(MechanicalPressureInput {
        force_n: 100.0,
        area_m2: 1.0,
    });
    assert_eq!(
        values(&report::mechanical_report(&res)),
        ["100.00 Pa", "0.0010 bar"]
    );
    let res = pressure::compute_mechanical_pressure(MechanicalPressureInput {
        force_n: 2000.0,
        area_m2: 0.01,
    });
    assert_eq!(
        values(&report::mechanical_report(&res)),
        ["200000.00 Pa", "2.0000 bar"]
    );
}

#[test]
fn ideal_gas_card_text() {
    let res = pressure::compute_ideal_gas_pressure(IdealGasInput {
        n_mol: 1.0,
        temperature_k: 293.0,
        volume_m3: 1.0,
    });
    let lines = report::ideal_gas_report(&res);
    assert_eq!(values(&lines), ["2436.14 Pa", "0.024 atm"]);
    assert_eq!(lines[1].to_string(), "Presión (atm): 0.024 atm");

    let res = pressure::compute_ideal_gas_pressure(IdealGasInput {
        n_mol: 50.0,
        temperature_k: 1200.0,
        volume_m3: 0.01,
    });
    assert_eq!(
        values(&report::ideal_gas_report(&res)),
        ["49886775.71 Pa", "492.344 atm"]
    );
}

#[test]
fn input_labels_use_slider_precision() {
    assert_eq!(QuantityKind::Mass.format_input(2.0), "Masa (kg): 2.00");
    assert_eq!(
        QuantityKind::SpringConstant.format_input(100.0),
        "Constante elástica k (N/m): 100"
    );
    assert_eq!(QuantityKind::Force.format_input(100.0), "Fuerza F (N): 100.0");
    assert_eq!(QuantityKind::Area.format_input(0.01), "Área A (m²): 0.01");
    assert_eq!(
        QuantityKind::AmountOfSubstance.format_input(1.0),
        "Cantidad de sustancia n (mol): 1.00"
    );
    assert_eq!(QuantityKind::Temperature.format_input(293.0), "Temperatura T (K): 293.0");
    assert_eq!(QuantityKind::Volume.format_input(1.0), "Volumen V (m³): 1.00");
}
