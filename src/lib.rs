//! Hot & Cold - terminal number-guessing game.
//!
//! Game rules live under [`game`]; the terminal shell (scenes, input
//! dispatch) only renders what the core returns.

pub mod build_info;
pub mod game;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod ui;
pub mod utils;
