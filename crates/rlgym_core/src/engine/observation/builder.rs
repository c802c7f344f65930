//! ObsBuilder Trait
//!
//! All observations are derived solely from a `GameState` snapshot.

use crate::engine::game::{Action, GameState, PlayerData};

/// Observation builder trait
///
/// Implementations must be pure in `build_obs`: same inputs, same output.
/// Per-episode bookkeeping goes through `reset` / `pre_step`.
pub trait ObsBuilder: Send + Sync {
    /// Called once per episode with the state produced by the state setter
    fn reset(&mut self, initial_state: &GameState);

    /// Called once per step before any `build_obs` for that step
    fn pre_step(&mut self, _state: &GameState) {}

    /// Build observation for one player
    ///
    /// # Arguments
    /// * `player` - Acting player (perspective is derived from its team)
    /// * `state` - Current snapshot
    /// * `prev_action` - Player's previous action (8 slots)
    fn build_obs(&self, player: &PlayerData, state: &GameState, prev_action: &Action) -> Vec<f32>;

    /// Fixed output length
    fn obs_size(&self) -> usize;

    /// One observation per player in snapshot order.
    ///
    /// `prev_actions[i]` belongs to `state.players[i]`; missing entries are
    /// treated as the zero action.
    fn build_all(&self, state: &GameState, prev_actions: &[Action]) -> Vec<Vec<f32>> {
        state
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let action = prev_actions.get(i).copied().unwrap_or_default();
                self.build_obs(player, state, &action)
            })
            .collect()
    }
}
