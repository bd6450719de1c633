//! Guess evaluation.
//!
//! The engine is pure: it compares a submitted guess against a secret
//! number and classifies the result. It never touches session state.

use std::cmp::Ordering;

use crate::page::Status;

/// Classification of a guess relative to the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The submitted text holds no integer.
    Invalid,
    /// The guess matched; carries the matched value.
    Correct(i64),
    /// The guess was above the secret.
    TooHigh(i64),
    /// The guess was below the secret.
    TooLow(i64),
}

impl Outcome {
    /// Banner text shown to the player.
    pub fn message(&self) -> String {
        match self {
            Outcome::Invalid => "Por favor, insira um número válido.".to_string(),
            Outcome::Correct(n) => {
                format!("Parabéns! Você acertou. O número era {n}. O jogo foi reiniciado.")
            }
            Outcome::TooHigh(n) => {
                format!("Você chutou {n}. É muito ALTO! Tente um número menor.")
            }
            Outcome::TooLow(n) => {
                format!("Você chutou {n}. É muito BAIXO! Tente um número maior.")
            }
        }
    }

    /// Banner style.
    pub fn status(&self) -> Status {
        match self {
            Outcome::Correct(_) => Status::Success,
            _ => Status::Error,
        }
    }

    /// Value to pre-fill the guess field with on the next page.
    pub fn guess_display(&self) -> String {
        match self {
            Outcome::TooHigh(n) | Outcome::TooLow(n) => n.to_string(),
            Outcome::Invalid | Outcome::Correct(_) => String::new(),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct(_))
    }
}

/// Extract an integer from form input.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits is read; anything after it is ignored. Magnitudes beyond
/// `i64` saturate. Returns `None` when no digit is found.
pub fn parse_guess(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    });

    Some(match (magnitude, negative) {
        (Some(m), true) => -m,
        (Some(m), false) => m,
        (None, true) => i64::MIN,
        (None, false) => i64::MAX,
    })
}

/// Evaluate a raw guess against the secret number.
///
/// Guesses outside the secret range are compared as-is.
pub fn evaluate(secret: u8, raw: &str) -> Outcome {
    let Some(guess) = parse_guess(raw) else {
        return Outcome::Invalid;
    };

    match guess.cmp(&i64::from(secret)) {
        Ordering::Equal => Outcome::Correct(guess),
        Ordering::Greater => Outcome::TooHigh(guess),
        Ordering::Less => Outcome::TooLow(guess),
    }
}
