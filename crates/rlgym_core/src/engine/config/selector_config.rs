use serde::{Deserialize, Serialize};

use super::GameMode;

/// Scenario weights for `WeightedStateSetter`
///
/// 정규화 불필요. `ceiling_shot`이 `None`이면 선택기에 포함하지 않음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorWeights {
    pub kickoff: f32,
    pub flick: f32,
    pub aerial: f32,
    pub air_dribble: f32,
    pub random: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling_shot: Option<f32>,
}

impl Default for SelectorWeights {
    fn default() -> Self {
        Self {
            kickoff: 0.2,
            flick: 0.2,
            aerial: 0.3,
            air_dribble: 0.3,
            random: 0.0,
            ceiling_shot: None,
        }
    }
}

impl SelectorWeights {
    /// 현재 모든 모드가 같은 테이블을 사용
    pub fn for_game_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Duel | GameMode::Doubles | GameMode::Standard => Self::default(),
        }
    }

    /// `(name, weight)` in selector order
    pub fn entries(&self) -> Vec<(&'static str, f32)> {
        let mut out = vec![
            ("kickoff", self.kickoff),
            ("flick", self.flick),
            ("aerial", self.aerial),
            ("air_dribble", self.air_dribble),
            ("random", self.random),
        ];
        if let Some(w) = self.ceiling_shot {
            out.push(("ceiling_shot", w));
        }
        out
    }
}
