/// 남은 거리가 이보다 작으면 목표값에 붙인다 [px].
pub const SNAP_EPSILON_PX: f64 = 0.05;
/// 시정수 하한 [s]. 0 이하이면 보간 없이 점프하게 되므로 막는다.
pub const MIN_TIME_CONSTANT_S: f64 = 0.01;
pub const DEFAULT_TIME_CONSTANT_S: f64 = 0.12;

/// 목표값을 지수적으로 따라가는 표시용 값.
///
/// 매 프레임 `step`으로 남은 거리의 일정 비율만큼 다가가므로 목표를 넘지 않고
/// 단조롭게 수렴한다. 도중에 `retarget` 해도 현재 보간값에서 이어간다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedValue {
    current: f64,
    target: f64,
    time_constant_s: f64,
}

impl SmoothedValue {
    /// 목표값 위에 정지한 상태로 만든다. 첫 표시에는 애니메이션이 없다.
    pub fn new(initial: f64) -> Self {
        Self::with_time_constant(initial, DEFAULT_TIME_CONSTANT_S)
    }

    pub fn with_time_constant(initial: f64, time_constant_s: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            time_constant_s: sanitize_time_constant(time_constant_s),
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn time_constant_s(&self) -> f64 {
        self.time_constant_s
    }

    pub fn set_time_constant(&mut self, time_constant_s: f64) {
        self.time_constant_s = sanitize_time_constant(time_constant_s);
    }

    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }

    /// 목표를 바꾼다. 현재값은 그대로 두고 다음 `step`부터 새 목표로 향한다.
    pub fn retarget(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// `dt_s`만큼 진행한다. 아직 움직이는 중이면 true.
    pub fn step(&mut self, dt_s: f64) -> bool {
        if !dt_s.is_finite() || dt_s <= 0.0 {
            return self.is_animating();
        }
        let gap = self.target - self.current;
        if gap.abs() < SNAP_EPSILON_PX {
            self.current = self.target;
            return false;
        }
        let alpha = 1.0 - (-dt_s / self.time_constant_s).exp();
        self.current += gap * alpha;
        if (self.target - self.current).abs() < SNAP_EPSILON_PX {
            self.current = self.target;
        }
        self.is_animating()
    }
}

fn sanitize_time_constant(time_constant_s: f64) -> f64 {
    if time_constant_s.is_finite() {
        time_constant_s.max(MIN_TIME_CONSTANT_S)
    } else {
        DEFAULT_TIME_CONSTANT_S
    }
}
