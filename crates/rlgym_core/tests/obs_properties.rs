//! Property tests for AdvancedObsPadder over random rosters and states.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rlgym_core::engine::arena::{Arena, BallState, CarState};
use rlgym_core::engine::game::Action;
use rlgym_core::engine::math::{Angle, Vec3};
use rlgym_core::engine::observation::{AdvancedObsPadder, ObsBuilder, DUMMY_OBS_SIZE};
use rlgym_core::engine::state_setters::{RandomState, StateSetter};
use rlgym_core::{GameState, SnapshotArena};

fn arb_vec(lim: f32) -> impl Strategy<Value = Vec3> {
    (-lim..lim, -lim..lim, -lim..lim).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_car() -> impl Strategy<Value = CarState> {
    (
        arb_vec(4000.0),
        (-3.1f32..3.1, -1.5f32..1.5, -3.1f32..3.1),
        arb_vec(2300.0),
        arb_vec(5.5),
        0.0f32..100.0,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(pos, (yaw, pitch, roll), vel, ang_vel, boost, on_ground, jumped)| CarState {
            pos,
            rot_mat: Angle::new(yaw, pitch, roll).to_rot_mat(),
            vel,
            ang_vel,
            boost,
            is_on_ground: on_ground,
            has_jumped: jumped,
            ..Default::default()
        })
}

/// (team_size, blue cars, orange cars) with rosters up to one over the padding size
fn arb_roster() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..=4).prop_flat_map(|t| (Just(t), 0..=t + 1, 0..=t + 1))
}

fn snapshot(blue: usize, orange: usize, cars: &[CarState], ball: BallState) -> GameState {
    let mut arena = SnapshotArena::with_cars(blue, orange);
    for (info, state) in arena.cars().iter().zip(cars.iter().cycle()) {
        arena.set_car_state(info.id, state).unwrap();
    }
    arena.set_ball_state(&ball);
    GameState::from_arena(&arena)
}

proptest! {
    /// Length is `9 + 8 + 34 + 26 + 32·(T−1) + 32·T` for every player and roster
    #[test]
    fn prop_obs_length_fixed(
        (team_size, blue, orange) in arb_roster(),
        cars in prop::collection::vec(arb_car(), 1..4),
        ball_pos in arb_vec(3000.0),
        ball_vel in arb_vec(6000.0),
    ) {
        let padder = AdvancedObsPadder::new(team_size, false).unwrap();
        let expected = 9 + 8 + 34 + 26 + 32 * (team_size - 1) + 32 * team_size;
        prop_assert_eq!(padder.obs_size(), expected);

        let ball = BallState { pos: ball_pos, vel: ball_vel, ang_vel: Vec3::zeros() };
        let state = snapshot(blue, orange, &cars, ball);

        for obs in padder.build_all(&state, &[]) {
            prop_assert_eq!(obs.len(), expected);
            prop_assert!(obs.iter().all(|v| v.is_finite()));
        }
    }

    /// Missing teammates and opponents leave zero blocks at the tail of their region
    #[test]
    fn prop_padding_is_zero(
        team_size in 1usize..=4,
        car in arb_car(),
    ) {
        let padder = AdvancedObsPadder::new(team_size, false).unwrap();
        let state = snapshot(1, 0, &[car], BallState::default());
        let obs = padder.build_obs(&state.players[0], &state, &Action::default());

        let start = AdvancedObsPadder::allies_offset();
        let padded = DUMMY_OBS_SIZE * (2 * team_size - 1);
        prop_assert_eq!(obs.len(), start + padded);
        prop_assert!(obs[start..].iter().all(|v| *v == 0.0));
    }

    /// Blue in a snapshot and Orange in the point-mirrored snapshot see the same vector
    #[test]
    fn prop_mirror_symmetry(
        me in arb_car(),
        other in arb_car(),
        ball_pos in arb_vec(3000.0),
        ball_vel in arb_vec(2000.0),
    ) {
        let padder = AdvancedObsPadder::default();
        let mirror = |v: &Vec3| Vec3::new(-v.x, -v.y, v.z);
        let mirror_car = |c: &CarState| CarState {
            pos: mirror(&c.pos),
            vel: mirror(&c.vel),
            ang_vel: mirror(&c.ang_vel),
            rot_mat: c.rot_mat.invert(),
            ..*c
        };

        let ball = BallState { pos: ball_pos, vel: ball_vel, ang_vel: Vec3::zeros() };
        let blue_view = snapshot(1, 1, &[me, other], ball);

        let ball_m = BallState { pos: mirror(&ball_pos), vel: mirror(&ball_vel), ang_vel: Vec3::zeros() };
        // Orange 차량이 `me`, Blue 차량이 `other` 역할
        let orange_view = snapshot(1, 1, &[mirror_car(&other), mirror_car(&me)], ball_m);

        let a = padder.build_obs(&blue_view.players[0], &blue_view, &Action::default());
        let b = padder.build_obs(&orange_view.players[1], &orange_view, &Action::default());
        prop_assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            // 부스트 패드는 상태가 모두 1.0이므로 순서 반전과 무관
            prop_assert!((x - y).abs() < 1e-4, "index {}: {} vs {}", i, x, y);
        }
    }
}

#[test]
fn random_states_always_encode_to_fixed_length() {
    let padder = AdvancedObsPadder::default();
    let setter = RandomState::default();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for (blue, orange) in [(1, 1), (2, 2), (3, 3), (0, 3), (4, 4)] {
        let mut arena = SnapshotArena::with_cars(blue, orange);
        let state = setter.reset_state(&mut arena, &mut rng).unwrap();
        for obs in padder.build_all(&state, &[]) {
            assert_eq!(obs.len(), 237);
        }
    }
}
