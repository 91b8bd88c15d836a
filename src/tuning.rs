//! Data-driven game balance
//!
//! Every number that shapes how the game plays lives here, with the shipped
//! values as `Default`. Partial JSON overrides fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::TuningError;

/// Most charges a shield can hold
pub const MAX_SHIELD_CHARGE: u8 = 3;

/// Balance values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    /// Charges granted by a shield pickup
    pub shield_durability: u8,
    /// Seconds before the bomb can be used again
    pub bomb_cooldown: f32,
    /// Projectiles strictly inside this distance are cleared by the bomb
    pub bomb_radius: f32,
    /// Lifetime of the explosion effect (seconds)
    pub explosion_duration: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Projectiles already on screen when a session starts
    pub initial_projectiles: u32,
    /// Speed range at level 1 (units per tick)
    pub projectile_speed_min: f32,
    pub projectile_speed_max: f32,
    /// Extra speed fraction per difficulty level above 1
    pub speed_step_per_level: f32,
    /// Spawn waves per second (each wave spawns `level` projectiles)
    pub spawn_rate: f32,
    /// Distance beyond the screen edge before a projectile is dropped
    pub cull_margin: f32,

    // === Difficulty ===
    /// Seconds of play between difficulty increases
    pub difficulty_interval: f32,

    // === Shield pickup ===
    pub shield_pickup_radius: f32,
    /// Per-tick chance that an inactive pickup appears
    pub shield_spawn_chance: f32,

    // === Scores ===
    /// Entries kept in the ranking
    pub max_ranking: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: 10.0,
            shield_durability: 3,
            bomb_cooldown: 10.0,
            bomb_radius: 150.0,
            explosion_duration: 0.5,

            projectile_radius: 8.0,
            initial_projectiles: 20,
            projectile_speed_min: 2.0,
            projectile_speed_max: 5.0,
            speed_step_per_level: 0.1,
            spawn_rate: 5.0,
            cull_margin: 100.0,

            difficulty_interval: 6.0,

            shield_pickup_radius: 15.0,
            shield_spawn_chance: 0.05,

            max_ranking: 5,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Seconds between spawn waves
    pub fn spawn_interval(&self) -> f32 {
        1.0 / self.spawn_rate
    }

    /// Speed multiplier applied to projectiles spawned at `level`
    pub fn speed_multiplier(&self, level: u32) -> f32 {
        1.0 + level.saturating_sub(1) as f32 * self.speed_step_per_level
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_radius", self.player_radius),
            ("projectile_radius", self.projectile_radius),
            ("bomb_cooldown", self.bomb_cooldown),
            ("bomb_radius", self.bomb_radius),
            ("explosion_duration", self.explosion_duration),
            ("projectile_speed_min", self.projectile_speed_min),
            ("projectile_speed_max", self.projectile_speed_max),
            ("spawn_rate", self.spawn_rate),
            ("difficulty_interval", self.difficulty_interval),
            ("shield_pickup_radius", self.shield_pickup_radius),
            ("max_ranking", self.max_ranking as f32),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("cull_margin", self.cull_margin),
            ("speed_step_per_level", self.speed_step_per_level),
        ];
        for (field, value) in non_negative {
            // NaN fails this too
            if !(value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !(1..=MAX_SHIELD_CHARGE).contains(&self.shield_durability) {
            return Err(TuningError::ShieldDurability {
                value: self.shield_durability,
                max: MAX_SHIELD_CHARGE,
            });
        }

        if !(0.0..=1.0).contains(&self.shield_spawn_chance) {
            return Err(TuningError::NotProbability {
                field: "shield_spawn_chance",
                value: self.shield_spawn_chance,
            });
        }

        if self.projectile_speed_min > self.projectile_speed_max {
            return Err(TuningError::InvertedSpeedRange {
                min: self.projectile_speed_min,
                max: self.projectile_speed_max,
            });
        }

        let diameter = self.shield_pickup_radius * 2.0;
        if diameter >= SCREEN_WIDTH || diameter >= SCREEN_HEIGHT {
            return Err(TuningError::PickupTooLarge {
                radius: self.shield_pickup_radius,
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_speed_multiplier() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_multiplier(1), 1.0);
        assert!((tuning.speed_multiplier(3) - 1.2).abs() < 1e-6);
        // Level 0 never happens, but must not underflow
        assert_eq!(tuning.speed_multiplier(0), 1.0);
    }

    #[test]
    fn test_spawn_interval() {
        let tuning = Tuning::default();
        assert!((tuning.spawn_interval() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "bomb_radius": 200.0 }"#).unwrap();
        assert_eq!(tuning.bomb_radius, 200.0);
        assert_eq!(tuning.player_radius, Tuning::default().player_radius);
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "spawn_rate": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NotPositive { field: "spawn_rate", .. }));

        let err = Tuning::from_json(r#"{ "shield_spawn_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NotProbability { .. }));

        let err = Tuning::from_json(
            r#"{ "projectile_speed_min": 6.0, "projectile_speed_max": 5.0 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TuningError::InvertedSpeedRange { .. }));

        let err = Tuning::from_json(r#"{ "shield_pickup_radius": 300.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::PickupTooLarge { .. }));

        let err = Tuning::from_json(r#"{ "cull_margin": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Negative { field: "cull_margin", .. }));

        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_shield_durability_capped() {
        let err = Tuning::from_json(r#"{ "shield_durability": 200 }"#).unwrap_err();
        assert!(matches!(err, TuningError::ShieldDurability { value: 200, max: 3 }));

        let err = Tuning::from_json(r#"{ "shield_durability": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::ShieldDurability { value: 0, .. }));

        for charge in 1..=MAX_SHIELD_CHARGE {
            let tuning = Tuning {
                shield_durability: charge,
                ..Tuning::default()
            };
            assert!(tuning.validate().is_ok());
        }
    }

    #[test]
    fn test_nan_rejected() {
        for field in ["cull_margin", "speed_step_per_level"] {
            let mut tuning = Tuning::default();
            match field {
                "cull_margin" => tuning.cull_margin = f32::NAN,
                _ => tuning.speed_step_per_level = f32::NAN,
            }
            let err = tuning.validate().unwrap_err();
            assert!(matches!(err, TuningError::Negative { field: f, .. } if f == field));
        }

        let tuning = Tuning {
            projectile_speed_max: f32::NAN,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());
    }
}
