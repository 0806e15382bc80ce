//! Motivational quotes shown at the bottom of the dashboard.

use rand::Rng;

/// The fixed, ordered list of quotes.
pub const QUOTES: [&str; 5] = [
    "Believe in yourself – you are capable of amazing things.",
    "Success is not final, failure is not fatal: It is the courage to continue that counts.",
    "Your journey is unique. Embrace it with pride!",
    "Dream big, start small, act now.",
    "Every expert was once a beginner.",
];

/// Picks a quote uniformly at random using `rng`.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES[rng.random_range(0..QUOTES.len())]
}

/// Picks a quote using the thread-local RNG.
pub fn random_quote() -> &'static str {
    pick(&mut rand::rng())
}
