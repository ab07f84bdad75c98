use physics_edu_toolbox::hooke::smoothing::{
    SmoothedValue, MIN_TIME_CONSTANT_S, SNAP_EPSILON_PX,
};

const DT: f64 = 1.0 / 60.0;

#[test]
fn new_value_rests_on_target() {
    let mut v = SmoothedValue::new(159.24);
    assert_eq!(v.value(), 159.24);
    assert!(!v.is_animating());
    assert!(!v.step(DT));
}

#[test]
fn converges_monotonically_without_overshoot() {
    let mut v = SmoothedValue::with_time_constant(120.0, 0.12);
    v.retarget(320.0);
    let mut prev = v.value();
    let mut steps = 0;
    while v.step(DT) {
        let cur = v.value();
        assert!(cur > prev, "progress must be monotonic");
        assert!(cur <= 320.0, "overshoot: {cur}");
        prev = cur;
        steps += 1;
        assert!(steps < 10_000);
    }
    assert_eq!(v.value(), 320.0);
    assert!(steps > 10, "no smoothing happened");
}

#[test]
fn converges_downwards_too() {
    let mut v = SmoothedValue::new(300.0);
    v.retarget(125.0);
    let mut prev = v.value();
    while v.step(DT) {
        assert!(v.value() < prev);
        assert!(v.value() >= 125.0);
        prev = v.value();
    }
    assert_eq!(v.value(), 125.0);
}

#[test]
fn single_step_never_jumps_to_target() {
    let mut v = SmoothedValue::new(0.0);
    v.retarget(100.0);
    v.step(DT);
    assert!(v.value() > 0.0 && v.value() < 100.0);
}

#[test]
fn retarget_mid_animation_continues_from_current_value() {
    let mut v = SmoothedValue::new(100.0);
    v.retarget(300.0);
    for _ in 0..5 {
        v.step(DT);
    }
    let mid = v.value();
    v.retarget(50.0);
    assert_eq!(v.value(), mid);
    v.step(DT);
    assert!(v.value() < mid);
    while v.step(DT) {}
    assert_eq!(v.value(), 50.0);
}

#[test]
fn non_positive_or_invalid_dt_is_a_no_op() {
    let mut v = SmoothedValue::new(10.0);
    v.retarget(20.0);
    for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(v.step(dt));
        assert_eq!(v.value(), 10.0);
    }
}

#[test]
fn snaps_when_close_enough() {
    let mut v = SmoothedValue::new(10.0);
    v.retarget(10.0 + SNAP_EPSILON_PX / 2.0);
    assert!(!v.step(DT));
    assert_eq!(v.value(), v.target());
}

#[test]
fn time_constant_is_floored() {
    let v = SmoothedValue::with_time_constant(0.0, 0.0);
    assert_eq!(v.time_constant_s(), MIN_TIME_CONSTANT_S);
    let mut v = SmoothedValue::with_time_constant(0.0, -3.0);
    assert_eq!(v.time_constant_s(), MIN_TIME_CONSTANT_S);
    v.set_time_constant(0.4);
    assert_eq!(v.time_constant_s(), 0.4);
}

#[test]
fn non_finite_target_is_ignored() {
    let mut v = SmoothedValue::new(5.0);
    v.retarget(f64::NAN);
    assert_eq!(v.target(), 5.0);
}
