//! Sound effects
//!
//! The game ships without audio assets, so playback is a stub: effects are
//! picked from simulation events and logged. Mute follows page visibility, so
//! a real backend can slot in behind `AudioManager::play`.

use crate::sim::GameEvent;

/// Playback volume for effects
const SFX_VOLUME: f32 = 0.8;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Difficulty level went up
    LevelUp,
    /// Shield pickup collected
    ShieldCollect,
    /// Shield absorbed a hit
    ShieldHit,
    /// Bomb detonated
    Bomb,
    /// Player was hit
    GameOver,
    /// Finished run made the top scores
    HighScore,
    /// New run started
    Restart,
}

impl SoundEffect {
    /// Effects triggered by a simulation event, in play order
    pub fn for_event(event: &GameEvent) -> Vec<SoundEffect> {
        match event {
            GameEvent::DifficultyUp { .. } => vec![SoundEffect::LevelUp],
            GameEvent::ShieldCollected { .. } => vec![SoundEffect::ShieldCollect],
            GameEvent::ShieldAbsorbed { .. } => vec![SoundEffect::ShieldHit],
            GameEvent::BombDetonated { .. } => vec![SoundEffect::Bomb],
            GameEvent::GameOver { rank: Some(_), .. } => {
                vec![SoundEffect::GameOver, SoundEffect::HighScore]
            }
            GameEvent::GameOver { rank: None, .. } => vec![SoundEffect::GameOver],
            GameEvent::Restarted => vec![SoundEffect::Restart],
        }
    }
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    muted: bool,
    /// Number of effects requested at an audible volume
    played: usize,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            muted: false,
            played: 0,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            SFX_VOLUME
        }
    }

    pub fn played(&self) -> usize {
        self.played
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sfx {:?} at volume {:.2}", effect, vol);
    }

    /// Play every effect the given events call for
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            for effect in SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_adds_fanfare() {
        let event = GameEvent::GameOver {
            survival: 12.5,
            rank: Some(1),
        };
        assert_eq!(
            SoundEffect::for_event(&event),
            vec![SoundEffect::GameOver, SoundEffect::HighScore]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new();
        let events = [GameEvent::Restarted, GameEvent::BombDetonated { cleared: 3 }];

        audio.set_muted(true);
        audio.play_events(&events);
        assert_eq!(audio.played(), 0);

        audio.set_muted(false);
        audio.play_events(&events);
        assert_eq!(audio.played(), 2);
    }
}
