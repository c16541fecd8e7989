use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use hotcold::game::Difficulty;
use hotcold::highscores::HighScoreStore;
use hotcold::input::{
    handle_game_input, handle_menu_input, GameInputResult, GameUi, MenuInputResult, MenuUi,
};
use hotcold::settings::Settings;
use hotcold::ui::{game_scene, menu_scene};
use hotcold::{build_info, highscores};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Menu(MenuUi),
    Game(GameUi),
}

/// Decision carried out of the event match so the screen can be replaced
/// without fighting the borrow on the current one.
enum Next {
    Stay,
    ToMenu,
    NewGame(Difficulty),
    Quit,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "reset-scores" => {
                let mut store = HighScoreStore::open_default();
                match store.reset() {
                    Ok(()) => {
                        println!("High scores cleared.");
                        std::process::exit(0);
                    }
                    Err(e) => {
                        eprintln!("Could not clear high scores: {e}");
                        std::process::exit(1);
                    }
                }
            }
            "--version" | "-v" => {
                println!(
                    "hotcold {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Hot & Cold - terminal number-guessing game\n");
                println!("Usage: hotcold [command]\n");
                println!("Commands:");
                println!("  reset-scores  Clear all recorded best wins");
                println!("  --version     Show version information");
                println!("  --help        Show this help message");
                println!(
                    "\nScores live in ~/.hotcold/{}",
                    highscores::SCORES_FILE
                );
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {other}");
                eprintln!("Run 'hotcold --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut settings = Settings::load();
    let mut store = HighScoreStore::open_default();
    let mut rng = rand::thread_rng();
    // Bumped for every session so stale flash effects die with their game.
    let mut generation: u64 = 0;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut screen = Screen::Menu(MenuUi::new(settings.last_difficulty));

    loop {
        let next = match &mut screen {
            Screen::Menu(menu) => {
                terminal.draw(|frame| {
                    menu_scene::render_menu(
                        frame,
                        frame.size(),
                        menu,
                        store.table(),
                        settings.theme,
                    );
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        match handle_menu_input(key, menu, &mut store, &mut settings) {
                            MenuInputResult::Continue => Next::Stay,
                            MenuInputResult::StartGame(difficulty) => Next::NewGame(difficulty),
                            MenuInputResult::Quit => Next::Quit,
                        }
                    } else {
                        Next::Stay
                    }
                } else {
                    Next::Stay
                }
            }
            Screen::Game(ui) => {
                let now = Instant::now();
                ui.flash.tick(ui.generation, now);
                terminal.draw(|frame| {
                    game_scene::render_game(frame, frame.size(), ui, settings.theme, now);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        match handle_game_input(key, ui, &mut store, Instant::now()) {
                            GameInputResult::Continue => Next::Stay,
                            GameInputResult::PlayAgain => Next::NewGame(ui.session.difficulty),
                            GameInputResult::ToMenu => Next::ToMenu,
                        }
                    } else {
                        Next::Stay
                    }
                } else {
                    Next::Stay
                }
            }
        };

        match next {
            Next::Stay => {}
            Next::ToMenu => {
                screen = Screen::Menu(MenuUi::new(settings.last_difficulty));
            }
            Next::NewGame(difficulty) => {
                generation += 1;
                screen = Screen::Game(GameUi::new(difficulty, generation, &mut rng));
            }
            Next::Quit => break,
        }
    }

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
