//! Guessing game rules: secret selection, attempt budgeting, guess
//! evaluation, and proximity hints.
//!
//! `evaluate` fails soft: bad input produces a `valid=false` outcome and
//! never consumes an attempt, so the shell can always render a response.

use super::types::{
    Comparison, Difficulty, GameSession, GuessOutcome, Proximity, SessionStatus, TerminalState,
};
use rand::Rng;

/// Attempt budget for a range: `max(5, ceil(log2(range_max)) + 1)`.
///
/// `ceil(log2(n)) + 1` is the number of guesses a perfect binary search
/// needs to guarantee a win on `[1, n]`; the floor of 5 keeps Easy mode
/// from being punishingly short.
pub fn attempt_budget_for(range_max: u32) -> u32 {
    (ceil_log2(range_max) + 1).max(5)
}

fn ceil_log2(n: u32) -> u32 {
    if n <= 1 {
        return 0;
    }
    32 - (n - 1).leading_zeros()
}

/// Draw a secret uniformly from `[1, range_max]`.
pub fn pick_secret<R: Rng>(range_max: u32, rng: &mut R) -> u32 {
    rng.gen_range(1..=range_max)
}

/// Start a fresh session: range and budget from the difficulty, secret from
/// the RNG, zero attempts used.
pub fn start_session<R: Rng>(difficulty: Difficulty, rng: &mut R) -> GameSession {
    let range_max = difficulty.range_max();
    GameSession {
        difficulty,
        secret: pick_secret(range_max, rng),
        range_max,
        attempts_used: 0,
        attempt_budget: attempt_budget_for(range_max),
        status: SessionStatus::InProgress,
    }
}

/// Classify how close a wrong guess landed.
///
/// Thresholds scale with the range: hot within `max(1, range/20)`, warm
/// within `max(2, range/10)` (integer division).
pub fn proximity_for(secret: u32, guess: u32, range_max: u32) -> Proximity {
    let d = secret.abs_diff(guess);
    let hot = (range_max / 20).max(1);
    let warm = (range_max / 10).max(2);
    if d <= hot {
        Proximity::Hot
    } else if d <= warm {
        Proximity::Warm
    } else {
        Proximity::Cold
    }
}

/// Evaluate one raw guess against the session.
///
/// Rejections (session over, unparseable input, out-of-range value) return
/// `valid=false` without consuming an attempt. An out-of-range value was
/// never in the game, so it costs nothing.
pub fn evaluate(session: &mut GameSession, raw_input: &str) -> GuessOutcome {
    let remaining = session.attempts_remaining();

    // Defensive guard: a correctly gated shell never evaluates a finished
    // or unstarted session.
    if session.status != SessionStatus::InProgress {
        return GuessOutcome::rejected(Comparison::NotANumber, remaining);
    }

    let parsed: i64 = match raw_input.trim().parse() {
        Ok(v) => v,
        Err(_) => return GuessOutcome::rejected(Comparison::NotANumber, remaining),
    };

    if parsed < 1 || parsed > session.range_max as i64 {
        return GuessOutcome::rejected(Comparison::OutOfRange, remaining);
    }
    let guess = parsed as u32;

    session.attempts_used += 1;

    if guess == session.secret {
        session.status = SessionStatus::Won;
        return GuessOutcome {
            valid: true,
            comparison: Comparison::Correct,
            proximity: Proximity::NotApplicable,
            attempts_remaining: session.attempts_remaining(),
            terminal: TerminalState::Won,
        };
    }

    let comparison = if guess < session.secret {
        Comparison::TooLow
    } else {
        Comparison::TooHigh
    };
    let proximity = proximity_for(session.secret, guess, session.range_max);

    let terminal = if session.attempts_used >= session.attempt_budget {
        session.status = SessionStatus::Lost;
        TerminalState::Lost
    } else {
        TerminalState::None
    };

    GuessOutcome {
        valid: true,
        comparison,
        proximity,
        attempts_remaining: session.attempts_remaining(),
        terminal,
    }
}

/// Player-initiated quit. Only meaningful while in progress; returns the
/// revealed secret so the shell can show it. An abandoned session is not a
/// loss and never updates high scores.
pub fn abandon(session: &mut GameSession) -> Option<u32> {
    if session.status != SessionStatus::InProgress {
        return None;
    }
    session.status = SessionStatus::Abandoned;
    Some(session.secret)
}
