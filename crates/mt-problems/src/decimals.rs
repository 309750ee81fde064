//! Decimal arithmetic generation rules.
//!
//! Operands are generated on an integer lattice (tenths or hundredths) so
//! every result is exact at its place count; only the rendered strings and
//! the final [`Answer::Decimal`] carry the floating value.

use rand::Rng;
use rand::rngs::StdRng;
use uuid::Uuid;

use mt_core::{Answer, Difficulty, Problem, Skill};

/// Generate a decimal problem at the given tier.
///
/// Tiers 1-3 are addition (tenths, then wider tenths, then hundredths),
/// tier 4 is subtraction at hundredths, tier 5 is a decimal times a whole
/// number.
pub fn generate(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    match difficulty.value() {
        2 => addition_lattice(difficulty, rng, 10..=999, 10, 1),
        3 => addition_lattice(difficulty, rng, 10..=999, 100, 2),
        4 => subtraction_hundredths(difficulty, rng),
        5 => times_whole(difficulty, rng),
        _ => addition_lattice(difficulty, rng, 1..=99, 10, 1),
    }
}

fn addition_lattice(
    difficulty: Difficulty,
    rng: &mut StdRng,
    range: std::ops::RangeInclusive<i64>,
    scale: i64,
    places: usize,
) -> Problem {
    let a = rng.random_range(range.clone());
    let b = rng.random_range(range);
    let (af, bf) = (a as f64 / scale as f64, b as f64 / scale as f64);
    let sum = (a + b) as f64 / scale as f64;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Decimals,
        difficulty,
        question: format!("What is {af:.places$} + {bf:.places$}?"),
        answer: Answer::Decimal(sum),
        choices: None,
        hints: vec![
            "Line up the decimal points before adding.".to_string(),
            format!("Add as whole numbers, then put the decimal point back {places} place(s) from the right."),
        ],
        explanation: format!("{af:.places$} + {bf:.places$} = {sum:.places$}"),
    }
}

fn subtraction_hundredths(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let mut a = rng.random_range(100..=999);
    let mut b = rng.random_range(100..=999);
    if b > a {
        std::mem::swap(&mut a, &mut b);
    }
    let (af, bf) = (a as f64 / 100.0, b as f64 / 100.0);
    let diff = (a - b) as f64 / 100.0;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Decimals,
        difficulty,
        question: format!("What is {af:.2} - {bf:.2}?"),
        answer: Answer::Decimal(diff),
        choices: None,
        hints: vec![
            "Line up the decimal points before subtracting.".to_string(),
            "Subtract as whole numbers, then put the decimal point back two places from the right."
                .to_string(),
        ],
        explanation: format!("{af:.2} - {bf:.2} = {diff:.2}"),
    }
}

fn times_whole(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let tenths = rng.random_range(11..=99);
    let whole = rng.random_range(2..=9);
    let a = tenths as f64 / 10.0;
    let product = (tenths * whole) as f64 / 10.0;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Decimals,
        difficulty,
        question: format!("What is {a:.1} x {whole}?"),
        answer: Answer::Decimal(product),
        choices: None,
        hints: vec![
            "Multiply as if there were no decimal point.".to_string(),
            format!("Work out {tenths} x {whole}, then move the decimal point one place left."),
        ],
        explanation: format!("{a:.1} x {whole} = {product:.1}"),
    }
}
