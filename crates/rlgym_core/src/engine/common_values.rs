//! Arena constants (Unreal units, uu)
//!
//! RocketSim soccar 필드 기준. Blue 골대는 -Y, Orange 골대는 +Y.

// ============================================================
// Field Geometry
// ============================================================
pub mod field {
    /// 사이드 월 x 좌표 (양쪽 대칭)
    pub const SIDE_WALL_X: f32 = 4096.0;

    /// 백 월 y 좌표 (양쪽 대칭)
    pub const BACK_WALL_Y: f32 = 5120.0;

    /// 천장 높이
    pub const CEILING_Z: f32 = 2044.0;

    /// 중력 가속도 크기 (uu/s²), 방향은 -Z
    pub const GRAVITY: f32 = 650.0;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    pub const RADIUS: f32 = 92.75;

    /// 바닥에 정지한 공의 z 좌표
    pub const RESTING_HEIGHT: f32 = 93.15;

    pub const MAX_SPEED: f32 = 6000.0;

    pub const MAX_ANG_SPEED: f32 = 6.0;

    /// 차 지붕 위에 올린 공의 z 오프셋 (차 중심 기준)
    pub const ROOF_OFFSET: f32 = 155.0;
}

// ============================================================
// Car
// ============================================================
pub mod car {
    /// 바닥에 놓인 차의 z 좌표
    pub const RESTING_HEIGHT: f32 = 17.0;

    pub const MAX_SPEED: f32 = 2300.0;

    pub const MAX_ANG_SPEED: f32 = 5.5;

    /// 점프 후 플립 가능 시간 (초)
    pub const DOUBLEJUMP_MAX_DELAY: f32 = 1.25;

    /// 부스트 최대량 (arena 단위, 관측에서는 0..1로 정규화)
    pub const MAX_BOOST: f32 = 100.0;

    pub const KICKOFF_BOOST: f32 = 33.3;
}

// ============================================================
// Observation Normalization
// ============================================================
pub mod norm {
    /// 위치/속도 정규화 상수
    pub const POS_STD: f32 = 2300.0;

    /// 각속도 정규화 상수
    pub const ANG_STD: f32 = std::f32::consts::PI;
}

// ============================================================
// Boost Pads
// ============================================================
pub mod boost {
    /// 필드 위 고정 부스트 패드 개수
    pub const LOCATIONS_AMOUNT: usize = 34;

    /// 패드 좌표 (Blue 쪽 → Orange 쪽 순서)
    ///
    /// 배치가 원점 대칭이므로 역순 리스트가 곧 반전(Orange) 시점의 순서가 된다.
    pub const LOCATIONS: [[f32; 3]; LOCATIONS_AMOUNT] = [
        [0.0, -4240.0, 70.0],
        [-1792.0, -4184.0, 70.0],
        [1792.0, -4184.0, 70.0],
        [-3072.0, -4096.0, 73.0],
        [3072.0, -4096.0, 73.0],
        [-940.0, -3308.0, 70.0],
        [940.0, -3308.0, 70.0],
        [0.0, -2816.0, 70.0],
        [-3584.0, -2484.0, 70.0],
        [3584.0, -2484.0, 70.0],
        [-1788.0, -2300.0, 70.0],
        [1788.0, -2300.0, 70.0],
        [-2048.0, -1036.0, 70.0],
        [0.0, -1024.0, 70.0],
        [2048.0, -1036.0, 70.0],
        [-3584.0, 0.0, 73.0],
        [-1024.0, 0.0, 70.0],
        [1024.0, 0.0, 70.0],
        [3584.0, 0.0, 73.0],
        [-2048.0, 1036.0, 70.0],
        [0.0, 1024.0, 70.0],
        [2048.0, 1036.0, 70.0],
        [-1788.0, 2300.0, 70.0],
        [1788.0, 2300.0, 70.0],
        [-3584.0, 2484.0, 70.0],
        [3584.0, 2484.0, 70.0],
        [0.0, 2816.0, 70.0],
        [-940.0, 3310.0, 70.0],
        [940.0, 3308.0, 70.0],
        [-3072.0, 4096.0, 73.0],
        [3072.0, 4096.0, 73.0],
        [-1792.0, 4184.0, 70.0],
        [1792.0, 4184.0, 70.0],
        [0.0, 4240.0, 70.0],
    ];
}

// ============================================================
// Kickoff Spawns
// ============================================================
pub mod kickoff {
    use std::f32::consts::PI;

    /// Blue 킥오프 위치 (x, y, yaw). Orange는 x/y 반전 + yaw + π.
    pub const BLUE_SPAWNS: [(f32, f32, f32); 5] = [
        (-2048.0, -2560.0, PI * 0.25),
        (2048.0, -2560.0, PI * 0.75),
        (-256.0, -3840.0, PI * 0.5),
        (256.0, -3840.0, PI * 0.5),
        (0.0, -4608.0, PI * 0.5),
    ];
}
