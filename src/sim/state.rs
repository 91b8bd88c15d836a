//! Game state and core simulation types
//!
//! One `GameState` is one session. The host owns it and hands it to `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::spawn_projectile;
use crate::consts::*;
use crate::highscores::ScoreLedger;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player-controlled point
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Remaining hits the shield absorbs (0 = unshielded)
    pub shield: u8,
    pub bomb_available: bool,
    /// Seconds until the bomb is available again
    pub bomb_cooldown: f32,
    pub bomb_cooldown_max: f32,
    pub bomb_radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            radius: tuning.player_radius,
            shield: 0,
            bomb_available: true,
            bomb_cooldown: 0.0,
            bomb_cooldown_max: tuning.bomb_cooldown,
            bomb_radius: tuning.bomb_radius,
        }
    }

    pub fn has_shield(&self) -> bool {
        self.shield > 0
    }

    /// Absorb one hit. Never goes below zero.
    pub fn reduce_shield(&mut self) {
        self.shield = self.shield.saturating_sub(1);
    }

    /// Arm the bomb if it is ready. Returns true if it was used.
    pub fn use_bomb(&mut self) -> bool {
        if !self.bomb_available {
            return false;
        }
        self.bomb_available = false;
        self.bomb_cooldown = self.bomb_cooldown_max;
        true
    }

    /// Count the cooldown down by `dt`, re-arming at zero
    pub fn update_bomb_cooldown(&mut self, dt: f32) {
        if self.bomb_available {
            return;
        }
        self.bomb_cooldown -= dt;
        if self.bomb_cooldown <= 0.0 {
            self.bomb_available = true;
            self.bomb_cooldown = 0.0;
        }
    }

    /// Cooldown progress for the HUD bar (1 = ready)
    pub fn bomb_charge(&self) -> f32 {
        if self.bomb_available || self.bomb_cooldown_max <= 0.0 {
            1.0
        } else {
            (1.0 - self.bomb_cooldown / self.bomb_cooldown_max).clamp(0.0, 1.0)
        }
    }
}

/// A projectile flying in from a screen edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub radius: f32,
    /// RGBA, 0-255
    pub color: [u8; 4],
}

impl Projectile {
    /// Advance by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Glow pulse bounds for the pickup
const PICKUP_GLOW_MAX: f32 = 3.0;
/// Rotation per tick (radians)
const PICKUP_SPIN: f32 = 0.05;

/// The single shield pickup
#[derive(Debug, Clone)]
pub struct ShieldPickup {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
    /// Star rotation (radians)
    pub angle: f32,
    pub glow_size: f32,
    /// Glow growth per tick; flips sign at the pulse bounds
    pub glow_dir: f32,
}

impl ShieldPickup {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::from(PICKUP_PARKED_POS),
            radius,
            active: false,
            angle: 0.0,
            glow_size: 0.0,
            glow_dir: 0.1,
        }
    }

    /// Spin and pulse while active
    pub fn animate(&mut self) {
        if !self.active {
            return;
        }
        self.angle += PICKUP_SPIN;
        self.glow_size += self.glow_dir;
        if self.glow_size > PICKUP_GLOW_MAX || self.glow_size < 0.0 {
            self.glow_dir = -self.glow_dir;
        }
    }

    /// Hide off-screen until the next spawn
    pub fn deactivate(&mut self) {
        self.active = false;
        self.pos = Vec2::from(PICKUP_PARKED_POS);
    }
}

/// Bomb blast effect
#[derive(Debug, Clone)]
pub struct Explosion {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub alpha: f32,
    pub duration: f32,
    pub lifetime: f32,
}

impl Explosion {
    pub fn new(center: Vec2, max_radius: f32, duration: f32) -> Self {
        Self {
            center,
            radius: 0.0,
            max_radius,
            alpha: 1.0,
            duration,
            lifetime: duration,
        }
    }

    /// 0 at detonation, 1 when spent
    pub fn progress(&self) -> f32 {
        (1.0 - self.lifetime / self.duration).clamp(0.0, 1.0)
    }

    /// Grow then shrink the blast, fading out
    pub fn update(&mut self, dt: f32) {
        self.lifetime -= dt;
        let progress = self.progress();
        self.radius = self.max_radius * (progress * std::f32::consts::PI).sin();
        self.alpha = 1.0 - progress;
    }

    pub fn is_active(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Blast tint: white-hot fading to yellow
    pub fn color(&self) -> [u8; 4] {
        let progress = self.progress();
        [
            255,
            (255.0 * progress) as u8,
            (100.0 * progress) as u8,
            (self.alpha.clamp(0.0, 1.0) * 180.0) as u8,
        ]
    }
}

/// Initial lifetime of a score popup (seconds)
pub const SCORE_POPUP_LIFETIME: f32 = 2.0;

/// Floating "N seconds" popup shown at game over
#[derive(Debug, Clone)]
pub struct ScoreAnimation {
    pub score: f32,
    pub pos: Vec2,
    pub scale: f32,
    pub alpha: f32,
    pub lifetime: f32,
}

impl ScoreAnimation {
    pub fn new(score: f32, pos: Vec2) -> Self {
        Self {
            score,
            pos,
            scale: 1.0,
            alpha: 1.0,
            lifetime: SCORE_POPUP_LIFETIME,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.lifetime -= dt;
        self.scale += 0.02;
        self.alpha -= 0.02;
    }

    pub fn is_active(&self) -> bool {
        self.lifetime > 0.0 && self.alpha > 0.0
    }
}

/// Gameplay events for audio and logging hooks
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    DifficultyUp { level: u32 },
    ShieldCollected { charge: u8 },
    ShieldAbsorbed { remaining: u8 },
    BombDetonated { cleared: usize },
    GameOver { survival: f32, rank: Option<usize> },
    Restarted,
}

/// Game-over overlay animation targets
pub const OVERLAY_ALPHA_MAX: f32 = 0.8;
pub const OVERLAY_ALPHA_STEP: f32 = 0.02;
pub const GAME_OVER_SCALE_START: f32 = 0.5;
pub const GAME_OVER_SCALE_MAX: f32 = 1.2;
pub const GAME_OVER_SCALE_STEP: f32 = 0.03;
pub const RANKING_REVEAL_STEP: f32 = 0.03;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values this session was created with
    pub tuning: Tuning,
    /// Session RNG (seeded once per process, carried across restarts)
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Survival time in seconds (f32 view of `play_time`)
    pub elapsed: f32,
    /// Survival time accumulated at full precision
    pub play_time: f64,
    /// Difficulty level (starts at 1)
    pub difficulty: u32,
    pub last_difficulty_increase: f32,
    pub last_spawn: f32,
    pub player: Player,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    pub shield_pickup: ShieldPickup,
    pub explosion: Option<Explosion>,
    pub score_animations: Vec<ScoreAnimation>,
    /// Best survival times; carried across restarts
    pub ledger: ScoreLedger,
    // === Game over presentation ===
    pub game_over_alpha: f32,
    pub game_over_scale: f32,
    pub ranking_reveal: f32,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::from_parts(tuning, Pcg32::seed_from_u64(seed), None)
    }

    /// Build a fresh session around an existing RNG and (optionally) ledger
    fn from_parts(tuning: Tuning, rng: Pcg32, ledger: Option<ScoreLedger>) -> Self {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        let ledger = ledger.unwrap_or_else(|| ScoreLedger::new(tuning.max_ranking));

        let mut state = Self {
            player: Player::new(center, &tuning),
            projectiles: Vec::with_capacity(tuning.initial_projectiles as usize),
            shield_pickup: ShieldPickup::new(tuning.shield_pickup_radius),
            tuning,
            rng,
            phase: GamePhase::Playing,
            time_ticks: 0,
            elapsed: 0.0,
            play_time: 0.0,
            difficulty: 1,
            last_difficulty_increase: 0.0,
            last_spawn: 0.0,
            explosion: None,
            score_animations: Vec::new(),
            ledger,
            game_over_alpha: 0.0,
            game_over_scale: GAME_OVER_SCALE_START,
            ranking_reveal: 0.0,
            events: Vec::new(),
        };

        for _ in 0..state.tuning.initial_projectiles {
            state.spawn_projectile();
        }

        state
    }

    /// Start over: a fresh session that inherits the ledger, the RNG stream
    /// and any events the host has not drained yet
    pub fn restart(&mut self) {
        let tuning = self.tuning.clone();
        let rng = self.rng.clone();
        let ledger = std::mem::take(&mut self.ledger);
        let mut events = std::mem::take(&mut self.events);

        *self = Self::from_parts(tuning, rng, Some(ledger));

        events.push(GameEvent::Restarted);
        self.events = events;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Append one projectile at the current difficulty
    pub fn spawn_projectile(&mut self) {
        let projectile = spawn_projectile(&mut self.rng, &self.tuning, self.difficulty);
        self.projectiles.push(projectile);
    }

    /// Remove all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, 1);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.play_time, 0.0);
        assert_eq!(state.projectiles.len(), 20);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert!(state.player.bomb_available);
        assert!(!state.shield_pickup.active);
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_shield_never_negative() {
        let mut player = Player::new(Vec2::ZERO, &Tuning::default());
        player.shield = 1;
        player.reduce_shield();
        player.reduce_shield();
        assert_eq!(player.shield, 0);
        assert!(!player.has_shield());
    }

    #[test]
    fn test_bomb_cooldown_cycle() {
        let mut player = Player::new(Vec2::ZERO, &Tuning::default());
        assert!(player.use_bomb());
        assert!(!player.bomb_available);
        assert_eq!(player.bomb_cooldown, player.bomb_cooldown_max);
        assert!(!player.use_bomb());

        player.update_bomb_cooldown(4.0);
        assert!(!player.bomb_available);
        assert!((player.bomb_cooldown - 6.0).abs() < 1e-5);

        player.update_bomb_cooldown(7.0);
        assert!(player.bomb_available);
        assert_eq!(player.bomb_cooldown, 0.0);
        assert_eq!(player.bomb_charge(), 1.0);
    }

    #[test]
    fn test_pickup_glow_pulses() {
        let mut pickup = ShieldPickup::new(15.0);
        pickup.animate();
        assert_eq!(pickup.angle, 0.0, "inactive pickup does not animate");

        pickup.active = true;
        for _ in 0..100 {
            pickup.animate();
            assert!(pickup.glow_size > -0.2 && pickup.glow_size < 3.2);
        }
        assert!((pickup.angle - 5.0).abs() < 1e-3);

        pickup.deactivate();
        assert!(!pickup.active);
        assert_eq!(pickup.pos, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn test_explosion_lifecycle() {
        let mut explosion = Explosion::new(Vec2::new(10.0, 10.0), 150.0, 0.5);
        assert!(explosion.is_active());

        explosion.update(0.25);
        assert!((explosion.radius - 150.0).abs() < 1e-3, "peak radius at midpoint");
        assert!((explosion.alpha - 0.5).abs() < 1e-5);

        explosion.update(0.25);
        assert!(!explosion.is_active());
        assert!(explosion.radius.abs() < 1e-3);
        assert_eq!(explosion.color()[3], 0);
    }

    #[test]
    fn test_score_animation_expires() {
        let mut anim = ScoreAnimation::new(12.5, Vec2::new(400.0, 200.0));
        let mut ticks = 0;
        while anim.is_active() {
            anim.update(SIM_DT);
            ticks += 1;
        }
        // Alpha runs out (~50 ticks) well before the 2 s lifetime (120 ticks)
        assert!((50..=51).contains(&ticks), "expired after {ticks} ticks");
        assert!(anim.scale > 1.9);
    }

    #[test]
    fn test_restart_carries_ledger() {
        let mut state = GameState::new(5);
        state.ledger.record(3.0);
        state.difficulty = 4;
        state.elapsed = 30.0;
        state.play_time = 30.0;
        state.projectiles.clear();

        state.restart();
        assert_eq!(state.ledger.entries(), &[3.0]);
        assert_eq!(state.difficulty, 1);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.play_time, 0.0);
        assert_eq!(state.projectiles.len(), 20);
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }
}
