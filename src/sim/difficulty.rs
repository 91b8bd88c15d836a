//! Difficulty ramp
//!
//! The level only ever goes up during a session: one step each time the
//! configured interval of play has passed since the last step.

use super::state::{GameEvent, GameState};

/// Raise the difficulty level if the interval has elapsed.
/// Returns true when the level changed.
pub fn update_difficulty(state: &mut GameState) -> bool {
    if state.elapsed - state.last_difficulty_increase <= state.tuning.difficulty_interval {
        return false;
    }

    state.difficulty += 1;
    state.last_difficulty_increase = state.elapsed;
    state.events.push(GameEvent::DifficultyUp {
        level: state.difficulty,
    });
    log::info!("Difficulty up: level {}", state.difficulty);
    true
}

/// Spawn a wave of `level` projectiles if the spawn interval has elapsed
pub fn update_spawning(state: &mut GameState) -> usize {
    if state.elapsed - state.last_spawn <= state.tuning.spawn_interval() {
        return 0;
    }

    let count = state.difficulty as usize;
    for _ in 0..count {
        state.spawn_projectile();
    }
    state.last_spawn = state.elapsed;
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_increase_before_interval() {
        let mut state = GameState::new(1);
        state.elapsed = 6.0;
        assert!(!update_difficulty(&mut state));
        assert_eq!(state.difficulty, 1);
    }

    #[test]
    fn test_increase_resets_timestamp() {
        let mut state = GameState::new(1);
        state.elapsed = 6.01;
        assert!(update_difficulty(&mut state));
        assert_eq!(state.difficulty, 2);
        assert_eq!(state.last_difficulty_increase, 6.01);
        assert_eq!(state.events, vec![GameEvent::DifficultyUp { level: 2 }]);

        // Only once per interval
        state.elapsed = 8.0;
        assert!(!update_difficulty(&mut state));
        state.elapsed = 12.02;
        assert!(update_difficulty(&mut state));
        assert_eq!(state.difficulty, 3);
    }

    #[test]
    fn test_spawn_wave_matches_level() {
        let mut state = GameState::new(9);
        state.projectiles.clear();
        state.difficulty = 3;

        state.elapsed = 0.1;
        assert_eq!(update_spawning(&mut state), 0);

        state.elapsed = 0.25;
        assert_eq!(update_spawning(&mut state), 3);
        assert_eq!(state.projectiles.len(), 3);
        assert_eq!(state.last_spawn, 0.25);

        // Faster projectiles at higher levels
        let tuning = &state.tuning;
        let max = tuning.projectile_speed_max * tuning.speed_multiplier(3);
        assert!(state.projectiles.iter().all(|p| p.vel.length() <= max * 2f32.sqrt() + 1e-3));
    }
}
