// Tunables for the round, the speech voice and the background canvas.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points awarded per correct answer.
    pub points_per_correct: u32,
    /// How long answer feedback stays on screen before the outcome is applied.
    pub feedback_delay_ms: u32,
    /// Period of the elapsed-time tick while a round is running.
    pub tick_interval_ms: u32,
    /// Number of reveal steps for the hidden picture.
    pub total_parts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_correct: 10,
            feedback_delay_ms: 1500,
            tick_interval_ms: 100,
            total_parts: 8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: 0.7,
            pitch: 1.2,
            volume: 0.9,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OceanConfig {
    pub width: f64,
    pub height: f64,
    pub fish: usize,
    pub dolphins: usize,
    pub seahorses: usize,
    pub jellyfish: usize,
    pub starfish: usize,
    pub treasure: usize,
    pub seaweed: usize,
}

impl OceanConfig {
    pub fn population(&self) -> usize {
        self.fish
            + self.dolphins
            + self.seahorses
            + self.jellyfish
            + self.starfish
            + self.treasure
            + self.seaweed
    }
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fish: 25,
            dolphins: 3,
            seahorses: 4,
            jellyfish: 5,
            starfish: 6,
            treasure: 2,
            seaweed: 8,
        }
    }
}

// localStorage key for the auto-speak toggle
pub const AUTO_SPEAK_KEY: &str = "owm_setting_auto_speak";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_population_matches_counts() {
        assert_eq!(OceanConfig::default().population(), 53);
    }

    #[test]
    fn game_config_round_trips_through_json() {
        let cfg = GameConfig {
            feedback_delay_ms: 900,
            ..Default::default()
        };
        let raw = serde_json::to_string(&cfg).unwrap();
        let back: GameConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(back.points_per_correct, 10);
    }
}
