//! HUD text layout
//!
//! Turns a `GameState` into positioned text items. The browser host writes
//! them into DOM overlays; the native host logs the status line. Positions
//! are in the same 800x600 screen space as the renderer.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::GameState;

/// Approximate glyph width used to centre text (pixels at scale 1)
const GLYPH_WIDTH: f32 = 6.0;
/// Top-left of the status line
const STATUS_POS: Vec2 = Vec2::new(20.0, 20.0);
/// Top-left of the bomb label (sits just above the cooldown bar)
const BOMB_LABEL_POS: Vec2 = Vec2::new(20.0, 35.0);
/// Horizontal slide distance of ranking rows before they settle
const RANKING_SLIDE: f32 = 100.0;
/// Vertical gap between ranking rows
const RANKING_ROW_HEIGHT: f32 = 20.0;

/// One piece of positioned text
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    /// Top-left corner in screen space
    pub pos: Vec2,
    pub scale: f32,
    /// 0.0 - 1.0
    pub alpha: f32,
}

impl HudText {
    fn at(text: String, pos: Vec2) -> Self {
        Self {
            text,
            pos,
            scale: 1.0,
            alpha: 1.0,
        }
    }
}

/// Game-over screen text
#[derive(Debug, Clone, PartialEq)]
pub struct GameOverText {
    pub title: HudText,
    pub prompt: HudText,
    /// Present once the ranking has started to reveal
    pub ranking_title: Option<HudText>,
    pub ranking: Vec<HudText>,
}

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudModel {
    pub status: HudText,
    /// Charge number drawn over the player while shielded
    pub shield: Option<HudText>,
    pub bomb: HudText,
    pub popups: Vec<HudText>,
    pub game_over: Option<GameOverText>,
}

impl HudModel {
    pub fn from_state(state: &GameState) -> Self {
        let status = HudText::at(
            format!(
                "Time: {:.2}  Difficulty: {}",
                state.elapsed, state.difficulty
            ),
            STATUS_POS,
        );

        let player = &state.player;
        let shield = (player.has_shield() && !state.is_game_over()).then(|| {
            HudText::at(player.shield.to_string(), player.pos - Vec2::splat(3.0))
        });

        let bomb_text = if player.bomb_available {
            "BOMB READY [X]".to_string()
        } else {
            format!("BOMB {:.1}s", player.bomb_cooldown)
        };
        let bomb = HudText::at(bomb_text, BOMB_LABEL_POS);

        let popups = state
            .score_animations
            .iter()
            .map(|anim| {
                let text = format!("{:.2} seconds", anim.score);
                let width = text.len() as f32 * GLYPH_WIDTH * anim.scale;
                HudText {
                    text,
                    pos: Vec2::new(anim.pos.x - width / 2.0, anim.pos.y),
                    scale: anim.scale,
                    alpha: anim.alpha.clamp(0.0, 1.0),
                }
            })
            .collect();

        let game_over = state.is_game_over().then(|| game_over_text(state));

        Self {
            status,
            shield,
            bomb,
            popups,
            game_over,
        }
    }
}

fn game_over_text(state: &GameState) -> GameOverText {
    let title_text = "GAME OVER";
    let title_scale = state.game_over_scale;
    let title_width = title_text.len() as f32 * 8.0 * title_scale;
    let title_y = SCREEN_HEIGHT / 3.0 - 20.0;
    let title = HudText {
        text: title_text.to_string(),
        pos: Vec2::new((SCREEN_WIDTH - title_width) / 2.0, title_y),
        scale: title_scale,
        alpha: 1.0,
    };

    let prompt_text = "Press SPACE to restart";
    let prompt = HudText::at(
        prompt_text.to_string(),
        Vec2::new(
            SCREEN_WIDTH / 2.0 - prompt_text.len() as f32 * 3.0,
            title_y + 40.0,
        ),
    );

    let reveal = state.ranking_reveal.clamp(0.0, 1.0);
    if reveal <= 0.0 {
        return GameOverText {
            title,
            prompt,
            ranking_title: None,
            ranking: Vec::new(),
        };
    }

    let left = SCREEN_WIDTH / 2.0 - 50.0;
    let top = SCREEN_HEIGHT / 2.0 + 30.0;
    let entries = state.ledger.entries();
    let shown = ((entries.len() as f32 * reveal) as usize).min(entries.len());
    let offset = (1.0 - reveal) * RANKING_SLIDE;

    let ranking = entries[..shown]
        .iter()
        .enumerate()
        .map(|(i, score)| {
            HudText::at(
                format!("{}. {:.2} seconds", i + 1, score),
                Vec2::new(
                    left + offset,
                    top + RANKING_ROW_HEIGHT * (i + 1) as f32,
                ),
            )
        })
        .collect();

    GameOverText {
        title,
        prompt,
        ranking_title: Some(HudText::at("TOP SCORES:".to_string(), Vec2::new(left, top))),
        ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, ScoreAnimation};

    #[test]
    fn test_status_and_bomb_labels() {
        let mut state = GameState::new(1);
        state.elapsed = 12.5;
        state.difficulty = 3;

        let hud = HudModel::from_state(&state);
        assert_eq!(hud.status.text, "Time: 12.50  Difficulty: 3");
        assert_eq!(hud.bomb.text, "BOMB READY [X]");
        assert!(hud.shield.is_none());
        assert!(hud.game_over.is_none());

        state.player.use_bomb();
        state.player.update_bomb_cooldown(2.5);
        let hud = HudModel::from_state(&state);
        assert_eq!(hud.bomb.text, "BOMB 7.5s");
    }

    #[test]
    fn test_shield_label_follows_player() {
        let mut state = GameState::new(1);
        state.player.shield = 2;
        state.player.pos = Vec2::new(100.0, 200.0);

        let hud = HudModel::from_state(&state);
        let shield = hud.shield.unwrap();
        assert_eq!(shield.text, "2");
        assert_eq!(shield.pos, Vec2::new(97.0, 197.0));
    }

    #[test]
    fn test_popup_centred_on_anchor() {
        let mut state = GameState::new(1);
        state
            .score_animations
            .push(ScoreAnimation::new(4.5, Vec2::new(400.0, 300.0)));

        let hud = HudModel::from_state(&state);
        let popup = &hud.popups[0];
        assert_eq!(popup.text, "4.50 seconds");
        // 12 glyphs, 6 px each
        assert_eq!(popup.pos, Vec2::new(364.0, 300.0));
    }

    #[test]
    fn test_ranking_reveal_is_gradual() {
        let mut state = GameState::new(1);
        for score in [10.0, 8.0, 12.0, 5.0] {
            state.ledger.record(score);
        }
        state.phase = GamePhase::GameOver;

        state.ranking_reveal = 0.0;
        let over = HudModel::from_state(&state).game_over.unwrap();
        assert_eq!(over.title.text, "GAME OVER");
        assert_eq!(over.prompt.text, "Press SPACE to restart");
        assert!(over.ranking_title.is_none());
        assert!(over.ranking.is_empty());

        // floor(4 * 0.5) = 2 rows, slid right by 50 px
        state.ranking_reveal = 0.5;
        let over = HudModel::from_state(&state).game_over.unwrap();
        assert_eq!(over.ranking_title.unwrap().text, "TOP SCORES:");
        assert_eq!(over.ranking.len(), 2);
        assert_eq!(over.ranking[0].text, "1. 12.00 seconds");
        assert_eq!(over.ranking[1].text, "2. 10.00 seconds");
        assert_eq!(over.ranking[0].pos.x, SCREEN_WIDTH / 2.0 - 50.0 + 50.0);

        state.ranking_reveal = 1.0;
        let over = HudModel::from_state(&state).game_over.unwrap();
        assert_eq!(over.ranking.len(), 4);
        assert_eq!(over.ranking[3].text, "4. 5.00 seconds");
        assert_eq!(over.ranking[3].pos.x, SCREEN_WIDTH / 2.0 - 50.0);
    }

    #[test]
    fn test_no_shield_label_on_game_over() {
        let mut state = GameState::new(1);
        state.player.shield = 3;
        state.phase = GamePhase::GameOver;
        assert!(HudModel::from_state(&state).shield.is_none());
    }
}
