//! Shared placement helpers for scenario state setters.

use rand::RngCore;

use crate::engine::arena::{Arena, CarId, CarState, Team};
use crate::engine::common_values::car;
use crate::engine::math::{coin_flip, rand_float, Angle, Vec3};
use crate::error::{Result, StateSetterError};

/// Attacker / defender pair for one-vs-one scenarios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matchup {
    pub attacker: CarId,
    pub defender: CarId,
    /// +1.0 when Blue attacks (towards +Y), -1.0 when Orange attacks
    pub team_fix: f32,
}

impl Matchup {
    pub fn attacking_team(&self) -> Team {
        if self.team_fix > 0.0 {
            Team::Blue
        } else {
            Team::Orange
        }
    }
}

/// First Blue and first Orange car in arena order, roles swapped with 50%.
///
/// Fails before any state is written when either team has no car.
pub fn resolve_matchup(arena: &dyn Arena, rng: &mut dyn RngCore) -> Result<Matchup> {
    let cars = arena.cars();
    let first_of = |team: Team| {
        cars.iter()
            .find(|c| c.team == team)
            .map(|c| c.id)
            .ok_or(StateSetterError::MissingTeamCar { team })
    };
    let blue = first_of(Team::Blue)?;
    let orange = first_of(Team::Orange)?;

    if coin_flip(rng) {
        Ok(Matchup { attacker: orange, defender: blue, team_fix: -1.0 })
    } else {
        Ok(Matchup { attacker: blue, defender: orange, team_fix: 1.0 })
    }
}

/// Grounded, stationary car facing `yaw`
pub fn ground_car(x: f32, y: f32, yaw: f32, boost: f32) -> CarState {
    CarState {
        pos: Vec3::new(x, y, car::RESTING_HEIGHT),
        rot_mat: Angle::from_yaw(yaw).to_rot_mat(),
        boost,
        ..Default::default()
    }
}

/// Defender parked on its goal line (the goal the attacker is shooting at)
pub fn goal_defender(rng: &mut dyn RngCore, team_fix: f32) -> CarState {
    use std::f32::consts::FRAC_PI_4;

    let x = rand_float(rng, -800.0, 800.0);
    let y = team_fix * rand_float(rng, 4500.0, 5100.0);
    let yaw = rand_float(rng, -FRAC_PI_4, FRAC_PI_4);
    ground_car(x, y, yaw, car::MAX_BOOST)
}

/// Generic legal ground spot around midfield for cars outside the matchup
pub fn random_ground_car(rng: &mut dyn RngCore) -> CarState {
    use std::f32::consts::PI;

    let x = rand_float(rng, -1472.0, 1472.0);
    let y = rand_float(rng, -1984.0, 1984.0);
    let yaw = rand_float(rng, -PI, PI);
    ground_car(x, y, yaw, car::MAX_BOOST)
}

/// Place every car except the attacker: defender in goal, rest at random ground spots.
pub fn place_defender_and_others(
    arena: &mut dyn Arena,
    rng: &mut dyn RngCore,
    matchup: &Matchup,
) -> Result<()> {
    for info in arena.cars() {
        if info.id == matchup.attacker {
            continue;
        }
        let state = if info.id == matchup.defender {
            goal_defender(rng, matchup.team_fix)
        } else {
            random_ground_car(rng)
        };
        arena.set_car_state(info.id, &state)?;
    }
    Ok(())
}
