//! Arena - physics engine seam
//!
//! 물리 엔진(RocketSim 등)은 외부 협력자. 이 크레이트는 차량/공 상태를 읽고
//! 덮어쓰기만 한다.
//!
//! - `Arena` trait: 엔진 어댑터가 구현하는 최소 인터페이스
//! - `SnapshotArena`: 동역학 없는 인메모리 구현 (테스트, 벤치, CLI용)

use serde::{Deserialize, Serialize};

use super::common_values::{ball, boost, car};
use super::math::{RotMat, Vec3};
use crate::error::ArenaError;

/// Stable car identifier assigned by the arena.
pub type CarId = u32;

// =============================================================================
// Team
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }

    /// Direction of this team's attack along Y (+1 for Blue, -1 for Orange).
    pub fn attack_sign(self) -> f32 {
        match self {
            Team::Blue => 1.0,
            Team::Orange => -1.0,
        }
    }
}

// =============================================================================
// Entity States
// =============================================================================

/// Car state as read from / written to the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    pub pos: Vec3,
    pub rot_mat: RotMat,
    pub vel: Vec3,
    pub ang_vel: Vec3,
    /// 0..100 (arena units)
    pub boost: f32,
    pub is_on_ground: bool,
    pub has_jumped: bool,
    pub has_double_jumped: bool,
    pub has_flipped: bool,
    /// Seconds since the first jump (0 while grounded)
    pub air_time_since_jump: f32,
    pub is_demoed: bool,
}

impl Default for CarState {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, car::RESTING_HEIGHT),
            rot_mat: RotMat::identity(),
            vel: Vec3::zeros(),
            ang_vel: Vec3::zeros(),
            boost: car::MAX_BOOST / 3.0,
            is_on_ground: true,
            has_jumped: false,
            has_double_jumped: false,
            has_flipped: false,
            air_time_since_jump: 0.0,
            is_demoed: false,
        }
    }
}

/// Ball state as read from / written to the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec3,
    pub vel: Vec3,
    pub ang_vel: Vec3,
}

impl Default for BallState {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, ball::RESTING_HEIGHT),
            vel: Vec3::zeros(),
            ang_vel: Vec3::zeros(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarInfo {
    pub id: CarId,
    pub team: Team,
    pub state: CarState,
}

// =============================================================================
// Arena Trait
// =============================================================================

/// Physics engine handle
///
/// Implementations own every entity; callers only read and overwrite state.
/// `cars()` must return cars in a stable order (spawn order for RocketSim).
pub trait Arena {
    fn cars(&self) -> Vec<CarInfo>;

    fn car_state(&self, id: CarId) -> Result<CarState, ArenaError>;

    fn set_car_state(&mut self, id: CarId, state: &CarState) -> Result<(), ArenaError>;

    fn ball_state(&self) -> BallState;

    fn set_ball_state(&mut self, state: &BallState);

    /// 1.0 = active, 0.0 = on cooldown (world order)
    fn boost_pad_states(&self) -> [f32; boost::LOCATIONS_AMOUNT];

    /// Car ids of `team` in arena order
    fn team_car_ids(&self, team: Team) -> Vec<CarId> {
        self.cars().into_iter().filter(|c| c.team == team).map(|c| c.id).collect()
    }
}

// =============================================================================
// SnapshotArena
// =============================================================================

/// In-memory arena with no dynamics.
///
/// State written is exactly the state read back; pads are all active unless
/// toggled with [`SnapshotArena::set_pad_active`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotArena {
    cars: Vec<CarInfo>,
    ball: BallState,
    pads: Vec<bool>,
    next_id: CarId,
}

impl Default for SnapshotArena {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotArena {
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            ball: BallState::default(),
            pads: vec![true; boost::LOCATIONS_AMOUNT],
            next_id: 1,
        }
    }

    /// Arena with `blue` Blue cars followed by `orange` Orange cars.
    pub fn with_cars(blue: usize, orange: usize) -> Self {
        let mut arena = Self::new();
        for _ in 0..blue {
            arena.add_car(Team::Blue);
        }
        for _ in 0..orange {
            arena.add_car(Team::Orange);
        }
        arena
    }

    pub fn add_car(&mut self, team: Team) -> CarId {
        let id = self.next_id;
        self.next_id += 1;
        self.cars.push(CarInfo { id, team, state: CarState::default() });
        id
    }

    pub fn remove_car(&mut self, id: CarId) -> Result<(), ArenaError> {
        let idx = self.index_of(id)?;
        self.cars.remove(idx);
        Ok(())
    }

    pub fn set_pad_active(&mut self, idx: usize, active: bool) {
        if let Some(pad) = self.pads.get_mut(idx) {
            *pad = active;
        }
    }

    fn index_of(&self, id: CarId) -> Result<usize, ArenaError> {
        self.cars.iter().position(|c| c.id == id).ok_or(ArenaError::UnknownCar { id })
    }
}

impl Arena for SnapshotArena {
    fn cars(&self) -> Vec<CarInfo> {
        self.cars.clone()
    }

    fn car_state(&self, id: CarId) -> Result<CarState, ArenaError> {
        let idx = self.index_of(id)?;
        Ok(self.cars[idx].state)
    }

    fn set_car_state(&mut self, id: CarId, state: &CarState) -> Result<(), ArenaError> {
        let idx = self.index_of(id)?;
        self.cars[idx].state = *state;
        Ok(())
    }

    fn ball_state(&self) -> BallState {
        self.ball
    }

    fn set_ball_state(&mut self, state: &BallState) {
        self.ball = *state;
    }

    fn boost_pad_states(&self) -> [f32; boost::LOCATIONS_AMOUNT] {
        std::array::from_fn(|i| if self.pads[i] { 1.0 } else { 0.0 })
    }
}
