//! Input handling for the menu and game screens.
//!
//! Keeps the dispatch logic out of main.rs as a priority chain: overlays
//! first (reveal, game over, confirmations), then normal text entry. All
//! state lives in small UI structs owned by the main loop.

use crate::game::{self, Difficulty, GameSession, GuessOutcome, TerminalState};
use crate::highscores::HighScoreStore;
use crate::settings::Settings;
use crate::ui::effects::InputFlash;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use std::time::Instant;

/// Maximum characters accepted in the guess entry box.
const MAX_ENTRY_LEN: usize = 10;

/// One submitted guess and what the game said about it.
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub text: String,
    pub outcome: GuessOutcome,
}

/// Game-screen state: the session plus everything the scene renders.
#[derive(Debug)]
pub struct GameUi {
    pub session: GameSession,
    /// Monotonic across sessions; gates stale flash reverts.
    pub generation: u64,
    /// Text in the guess entry box.
    pub entry: String,
    pub history: Vec<GuessRecord>,
    pub last_outcome: Option<GuessOutcome>,
    /// Secret revealed by giving up. Present ⇒ reveal overlay is showing.
    pub revealed: Option<u32>,
    /// First Esc pressed; second confirms the give-up.
    pub quit_pending: bool,
    /// The win that just happened set a new high score.
    pub new_best: bool,
    /// Soft warning (score file not writable). Never fatal.
    pub warning: Option<String>,
    pub flash: InputFlash,
}

impl GameUi {
    pub fn new<R: Rng>(difficulty: Difficulty, generation: u64, rng: &mut R) -> Self {
        Self {
            session: game::start_session(difficulty, rng),
            generation,
            entry: String::new(),
            history: Vec::new(),
            last_outcome: None,
            revealed: None,
            quit_pending: false,
            new_best: false,
            warning: None,
            flash: InputFlash::new(),
        }
    }
}

/// What the main loop should do after a game-screen key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInputResult {
    Continue,
    /// Start a fresh session at the same difficulty.
    PlayAgain,
    ToMenu,
}

/// Dispatcher for game-screen input.
pub fn handle_game_input(
    key: KeyEvent,
    ui: &mut GameUi,
    store: &mut HighScoreStore,
    now: Instant,
) -> GameInputResult {
    // 1. Give-up reveal overlay: any key returns to the menu.
    if ui.revealed.is_some() {
        return GameInputResult::ToMenu;
    }

    // 2. Won/lost overlay.
    if ui.session.status.is_over() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => GameInputResult::PlayAgain,
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => GameInputResult::ToMenu,
            _ => GameInputResult::Continue,
        };
    }

    // 3. Give-up confirmation (double-Esc pattern).
    if ui.quit_pending {
        if matches!(key.code, KeyCode::Esc) {
            ui.revealed = game::abandon(&mut ui.session);
        }
        ui.quit_pending = false;
        return GameInputResult::Continue;
    }

    // 4. Normal entry.
    match key.code {
        KeyCode::Esc => ui.quit_pending = true,
        KeyCode::Enter => submit_entry(ui, store, now),
        KeyCode::Backspace => {
            ui.entry.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if ui.entry.len() < MAX_ENTRY_LEN {
                ui.entry.push(c);
            }
        }
        KeyCode::Char('-') if ui.entry.is_empty() => ui.entry.push('-'),
        _ => {}
    }
    GameInputResult::Continue
}

/// Evaluate the entry box contents and react to the outcome.
fn submit_entry(ui: &mut GameUi, store: &mut HighScoreStore, now: Instant) {
    let text = ui.entry.clone();
    let outcome = game::evaluate(&mut ui.session, &text);
    ui.last_outcome = Some(outcome);

    if !outcome.valid {
        // Rejected input costs nothing; flash the box and let the player
        // edit what they typed.
        ui.flash.trigger(ui.generation, now);
        return;
    }

    ui.history.push(GuessRecord { text, outcome });
    ui.entry.clear();

    if outcome.terminal == TerminalState::Won {
        match store.record_if_better(ui.session.difficulty, ui.session.attempts_used) {
            Ok(improved) => ui.new_best = improved,
            Err(e) => {
                // The win still counts in memory; the file just didn't take.
                ui.new_best = store
                    .table()
                    .get(ui.session.difficulty)
                    .is_some_and(|best| best == ui.session.attempts_used);
                ui.warning = Some(format!("High score not saved: {e}"));
            }
        }
    }
}

/// Menu-screen state.
#[derive(Debug)]
pub struct MenuUi {
    pub selected: usize,
    pub confirm_reset: bool,
    pub warning: Option<String>,
}

impl MenuUi {
    pub fn new(last_difficulty: Difficulty) -> Self {
        let selected = Difficulty::ALL
            .iter()
            .position(|d| *d == last_difficulty)
            .unwrap_or(0);
        Self {
            selected,
            confirm_reset: false,
            warning: None,
        }
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        Difficulty::from_index(self.selected)
    }
}

/// What the main loop should do after a menu key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInputResult {
    Continue,
    StartGame(Difficulty),
    Quit,
}

/// Dispatcher for menu input.
pub fn handle_menu_input(
    key: KeyEvent,
    menu: &mut MenuUi,
    store: &mut HighScoreStore,
    settings: &mut Settings,
) -> MenuInputResult {
    // Reset confirmation blocks everything else.
    if menu.confirm_reset {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('y')) {
            if let Err(e) = store.reset() {
                menu.warning = Some(format!("Scores cleared, but file not updated: {e}"));
            } else {
                menu.warning = None;
            }
        }
        menu.confirm_reset = false;
        return MenuInputResult::Continue;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            menu.selected = menu.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            menu.selected = (menu.selected + 1).min(Difficulty::ALL.len() - 1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let difficulty = menu.selected_difficulty();
            settings.last_difficulty = difficulty;
            settings.save().ok();
            return MenuInputResult::StartGame(difficulty);
        }
        KeyCode::Char('t') => {
            settings.theme = settings.theme.next();
            settings.save().ok();
        }
        KeyCode::Char('r') => menu.confirm_reset = true,
        KeyCode::Esc | KeyCode::Char('q') => return MenuInputResult::Quit,
        _ => {}
    }
    MenuInputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Comparison, SessionStatus};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_store() -> HighScoreStore {
        use std::sync::atomic::{AtomicU32, Ordering};
        static NEXT: AtomicU32 = AtomicU32::new(0);
        let path = std::env::temp_dir().join(format!(
            "hotcold_input_test_{}_{}.txt",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::remove_file(&path).ok();
        HighScoreStore::open(path)
    }

    fn game_ui(secret: u32) -> GameUi {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ui = GameUi::new(Difficulty::Easy, 1, &mut rng);
        ui.session.secret = secret;
        ui
    }

    fn type_and_submit(ui: &mut GameUi, store: &mut HighScoreStore, text: &str) {
        let now = Instant::now();
        for c in text.chars() {
            handle_game_input(key(KeyCode::Char(c)), ui, store, now);
        }
        handle_game_input(key(KeyCode::Enter), ui, store, now);
    }

    #[test]
    fn test_digits_fill_entry() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        for c in ['4', '2'] {
            handle_game_input(key(KeyCode::Char(c)), &mut ui, &mut store, Instant::now());
        }
        assert_eq!(ui.entry, "42");
    }

    #[test]
    fn test_letters_ignored() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        handle_game_input(key(KeyCode::Char('x')), &mut ui, &mut store, Instant::now());
        assert!(ui.entry.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        handle_game_input(key(KeyCode::Char('7')), &mut ui, &mut store, Instant::now());
        handle_game_input(key(KeyCode::Backspace), &mut ui, &mut store, Instant::now());
        assert!(ui.entry.is_empty());
    }

    #[test]
    fn test_entry_length_capped() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        for _ in 0..20 {
            handle_game_input(key(KeyCode::Char('9')), &mut ui, &mut store, Instant::now());
        }
        assert_eq!(ui.entry.len(), MAX_ENTRY_LEN);
    }

    #[test]
    fn test_minus_only_leading() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        handle_game_input(key(KeyCode::Char('-')), &mut ui, &mut store, Instant::now());
        handle_game_input(key(KeyCode::Char('5')), &mut ui, &mut store, Instant::now());
        handle_game_input(key(KeyCode::Char('-')), &mut ui, &mut store, Instant::now());
        assert_eq!(ui.entry, "-5");
    }

    #[test]
    fn test_submit_valid_guess_records_history() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        type_and_submit(&mut ui, &mut store, "5");

        assert_eq!(ui.history.len(), 1);
        assert_eq!(ui.history[0].text, "5");
        assert_eq!(ui.history[0].outcome.comparison, Comparison::TooLow);
        assert!(ui.entry.is_empty());
    }

    #[test]
    fn test_rejected_guess_flashes_and_keeps_entry() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        type_and_submit(&mut ui, &mut store, "99");

        assert!(ui.history.is_empty());
        assert_eq!(ui.entry, "99");
        assert_eq!(
            ui.last_outcome.unwrap().comparison,
            Comparison::OutOfRange
        );
        assert!(ui.flash.is_lit(ui.generation, Instant::now()));
        assert_eq!(ui.session.attempts_used, 0);
    }

    #[test]
    fn test_empty_submit_is_not_a_number() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        handle_game_input(key(KeyCode::Enter), &mut ui, &mut store, Instant::now());

        assert_eq!(
            ui.last_outcome.unwrap().comparison,
            Comparison::NotANumber
        );
        assert_eq!(ui.session.attempts_used, 0);
    }

    #[test]
    fn test_winning_records_high_score() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        type_and_submit(&mut ui, &mut store, "10");

        assert_eq!(ui.session.status, SessionStatus::Won);
        assert!(ui.new_best);
        assert_eq!(store.table().get(Difficulty::Easy), Some(1));
    }

    #[test]
    fn test_winning_worse_than_best_is_not_new_best() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        store.record_if_better(Difficulty::Easy, 1).unwrap();

        type_and_submit(&mut ui, &mut store, "5");
        type_and_submit(&mut ui, &mut store, "10");

        assert_eq!(ui.session.status, SessionStatus::Won);
        assert!(!ui.new_best);
        assert_eq!(store.table().get(Difficulty::Easy), Some(1));
    }

    #[test]
    fn test_double_esc_gives_up() {
        let mut ui = game_ui(10);
        let mut store = test_store();

        handle_game_input(key(KeyCode::Esc), &mut ui, &mut store, Instant::now());
        assert!(ui.quit_pending);
        assert_eq!(ui.session.status, SessionStatus::InProgress);

        handle_game_input(key(KeyCode::Esc), &mut ui, &mut store, Instant::now());
        assert_eq!(ui.session.status, SessionStatus::Abandoned);
        assert_eq!(ui.revealed, Some(10));
    }

    #[test]
    fn test_other_key_cancels_give_up() {
        let mut ui = game_ui(10);
        let mut store = test_store();

        handle_game_input(key(KeyCode::Esc), &mut ui, &mut store, Instant::now());
        handle_game_input(key(KeyCode::Char('5')), &mut ui, &mut store, Instant::now());
        assert!(!ui.quit_pending);
        assert_eq!(ui.session.status, SessionStatus::InProgress);
        // The cancelling key is swallowed, not typed.
        assert!(ui.entry.is_empty());
    }

    #[test]
    fn test_abandon_never_touches_high_scores() {
        let mut ui = game_ui(10);
        let mut store = test_store();

        handle_game_input(key(KeyCode::Esc), &mut ui, &mut store, Instant::now());
        handle_game_input(key(KeyCode::Esc), &mut ui, &mut store, Instant::now());

        assert!(store.table().is_empty());
    }

    #[test]
    fn test_reveal_overlay_exits_to_menu() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        ui.revealed = Some(10);

        let result = handle_game_input(key(KeyCode::Char('x')), &mut ui, &mut store, Instant::now());
        assert_eq!(result, GameInputResult::ToMenu);
    }

    #[test]
    fn test_game_over_enter_plays_again() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        type_and_submit(&mut ui, &mut store, "10");

        let result = handle_game_input(key(KeyCode::Enter), &mut ui, &mut store, Instant::now());
        assert_eq!(result, GameInputResult::PlayAgain);
    }

    #[test]
    fn test_game_over_esc_returns_to_menu() {
        let mut ui = game_ui(10);
        let mut store = test_store();
        type_and_submit(&mut ui, &mut store, "10");

        let result = handle_game_input(key(KeyCode::Esc), &mut ui, &mut store, Instant::now());
        assert_eq!(result, GameInputResult::ToMenu);
    }

    #[test]
    fn test_menu_navigation_clamped() {
        let mut menu = MenuUi::new(Difficulty::Easy);
        let mut store = test_store();
        let mut settings = Settings::default();

        handle_menu_input(key(KeyCode::Up), &mut menu, &mut store, &mut settings);
        assert_eq!(menu.selected, 0);

        for _ in 0..5 {
            handle_menu_input(key(KeyCode::Down), &mut menu, &mut store, &mut settings);
        }
        assert_eq!(menu.selected, Difficulty::ALL.len() - 1);
    }

    #[test]
    fn test_menu_starts_at_last_difficulty() {
        let menu = MenuUi::new(Difficulty::Hard);
        assert_eq!(menu.selected_difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_menu_enter_starts_game() {
        let mut menu = MenuUi::new(Difficulty::Medium);
        let mut store = test_store();
        let mut settings = Settings::default();

        let result = handle_menu_input(key(KeyCode::Enter), &mut menu, &mut store, &mut settings);
        assert_eq!(result, MenuInputResult::StartGame(Difficulty::Medium));
        assert_eq!(settings.last_difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_menu_reset_requires_confirmation() {
        let mut menu = MenuUi::new(Difficulty::Easy);
        let mut store = test_store();
        let mut settings = Settings::default();
        store.record_if_better(Difficulty::Easy, 3).unwrap();

        handle_menu_input(key(KeyCode::Char('r')), &mut menu, &mut store, &mut settings);
        assert!(menu.confirm_reset);
        assert!(!store.table().is_empty());

        // Declining keeps the scores.
        handle_menu_input(key(KeyCode::Char('n')), &mut menu, &mut store, &mut settings);
        assert!(!menu.confirm_reset);
        assert!(!store.table().is_empty());

        // Confirming clears them.
        handle_menu_input(key(KeyCode::Char('r')), &mut menu, &mut store, &mut settings);
        handle_menu_input(key(KeyCode::Char('y')), &mut menu, &mut store, &mut settings);
        assert!(store.table().is_empty());
    }

    #[test]
    fn test_menu_quit() {
        let mut menu = MenuUi::new(Difficulty::Easy);
        let mut store = test_store();
        let mut settings = Settings::default();

        let result = handle_menu_input(key(KeyCode::Char('q')), &mut menu, &mut store, &mut settings);
        assert_eq!(result, MenuInputResult::Quit);
    }
}
