/// 표준 중력가속도 [m/s²]. 화면 계산에 쓰는 값 그대로 둔다.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// 나눗셈 전에 스프링 상수에 적용하는 하한 [N/m].
pub const MIN_SPRING_CONSTANT: f64 = 1.0;

/// 하중이 없을 때 그림 속 스프링 길이 [px].
pub const NATURAL_LENGTH_PX: f64 = 120.0;
/// 연신량 1 m 당 그림 길이 [px].
pub const PX_PER_METER: f64 = 200.0;

pub const TOP_MARGIN_PX: f64 = 40.0;
pub const COIL_WIDTH_PX: f64 = 40.0;
pub const COIL_TURNS: usize = 10;
pub const BLOCK_WIDTH_PX: f64 = 80.0;
pub const BLOCK_HEIGHT_PX: f64 = 50.0;
/// 천장 막대 폭의 절반과 앵커 위 간격.
pub const CEILING_HALF_WIDTH_PX: f64 = 100.0;
pub const CEILING_OFFSET_PX: f64 = 10.0;
pub const FLOOR_HALF_WIDTH_PX: f64 = 120.0;

/// 스프링 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct SpringInput {
    /// 매달린 질량 [kg]
    pub mass_kg: f64,
    /// 스프링 상수 [N/m]
    pub k_n_per_m: f64,
}

/// 스프링 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringResult {
    /// 정적 평형 연신량 [m]
    pub extension_m: f64,
    /// 탄성력 k·x [N]
    pub spring_force_n: f64,
    /// 무게 m·g [N]
    pub weight_n: f64,
    /// 그림 속 스프링 목표 길이 [px]
    pub target_length_px: f64,
}

/// 준정적 연신량 x = m·g / max(k, 1).
pub fn extension(mass_kg: f64, k_n_per_m: f64, g: f64) -> f64 {
    (mass_kg * g) / k_n_per_m.max(MIN_SPRING_CONSTANT)
}

/// 탄성력 F = k·x.
pub fn spring_force(k_n_per_m: f64, extension_m: f64) -> f64 {
    k_n_per_m * extension_m
}

pub fn weight(mass_kg: f64, g: f64) -> f64 {
    mass_kg * g
}

/// 연신량을 그림 길이로 옮긴다. 물리량이 아니라 화면 매핑이다.
pub fn target_length_px(extension_m: f64) -> f64 {
    NATURAL_LENGTH_PX + extension_m * PX_PER_METER
}

/// 표준 중력으로 스프링 결과 전체를 계산한다.
pub fn compute_spring(input: SpringInput) -> SpringResult {
    let extension_m = extension(input.mass_kg, input.k_n_per_m, STANDARD_GRAVITY);
    SpringResult {
        extension_m,
        spring_force_n: spring_force(input.k_n_per_m, extension_m),
        weight_n: weight(input.mass_kg, STANDARD_GRAVITY),
        target_length_px: target_length_px(extension_m),
    }
}

/// 코일 지그재그 꼭짓점을 만든다.
///
/// 중심선 위 `top_y`에서 시작해 턴마다 왼쪽(반 구간) → 오른쪽(구간 끝)을 찍고
/// 마지막에 중심선 `bottom_y`로 돌아온다. 점 개수는 `2 * COIL_TURNS + 2`.
pub fn coil_polyline(center_x: f64, top_y: f64, bottom_y: f64) -> Vec<(f64, f64)> {
    let segment = (bottom_y - top_y) / COIL_TURNS as f64;
    let half_width = COIL_WIDTH_PX / 2.0;
    let mut points = Vec::with_capacity(2 * COIL_TURNS + 2);
    points.push((center_x, top_y));
    for i in 0..COIL_TURNS {
        let y1 = top_y + i as f64 * segment + segment / 2.0;
        let y2 = top_y + (i + 1) as f64 * segment;
        points.push((center_x - half_width, y1));
        points.push((center_x + half_width, y2));
    }
    points.push((center_x, bottom_y));
    points
}
