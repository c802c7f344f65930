//! StateSetter - Episode Reset Scenarios
//!
//! 에피소드 리셋 시 공/차량을 특정 전술 상황에 배치하는 시나리오 모음.
//!
//! ## 구성 요소
//!
//! - `StateSetter` trait: 모든 시나리오의 공통 인터페이스
//! - `KickoffState`: 표준 킥오프
//! - `FlickState`: 지붕 위 드리블 → 플릭
//! - `AerialState`: 공중볼 에어리얼
//! - `AirDribbleSetup`: 벽 타고 에어 드리블
//! - `CeilingShotState`: 천장 슛
//! - `RandomState`: 완전 랜덤 배치
//! - `WeightedStateSetter`: 가중치 기반 시나리오 선택기
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use rlgym_core::engine::state_setters::{StateSetter, WeightedStateSetter};
//! use rlgym_core::engine::config::GameMode;
//!
//! let setter = WeightedStateSetter::for_game_mode(GameMode::Duel)?;
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let state = setter.reset_state(&mut arena, &mut rng)?;
//! ```

mod aerial;
mod air_dribble;
mod ceiling_shot;
mod common;
mod flick;
mod kickoff;
mod random;
mod weighted;

pub use aerial::AerialState;
pub use air_dribble::AirDribbleSetup;
pub use ceiling_shot::CeilingShotState;
pub use common::{resolve_matchup, Matchup};
pub use flick::FlickState;
pub use kickoff::KickoffState;
pub use random::RandomState;
pub use weighted::WeightedStateSetter;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::arena::Arena;
use super::game::GameState;
use crate::error::Result;

// ============================================================================
// StateSetter Trait
// ============================================================================

/// 시나리오 배치 트레이트
///
/// 구현체는 arena의 공/차량 상태를 덮어쓰고 결과 스냅샷을 반환한다.
/// 난수는 호출자가 주입 (테스트에서는 시드 고정 RNG 사용).
pub trait StateSetter: Send + Sync {
    /// 공/차량 배치 후 결과 스냅샷 반환
    ///
    /// # Errors
    /// 시나리오가 요구하는 팀 차량이 없으면 상태를 건드리지 않고 실패.
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState>;

    /// 시나리오 이름 (로깅/리포트용)
    fn name(&self) -> &str;
}

/// Reset with a freshly seeded generator (one per call).
pub fn reset_with_entropy(setter: &dyn StateSetter, arena: &mut dyn Arena) -> Result<GameState> {
    let mut rng = ChaCha8Rng::from_entropy();
    setter.reset_state(arena, &mut rng)
}
