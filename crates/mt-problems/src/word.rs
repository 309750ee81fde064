//! Narrative word-problem generation.
//!
//! A narrative template (actor, object, verb pair) is selected
//! independently of the numeric generation, then the operands are
//! interpolated into it. The operation is chosen uniformly between
//! addition and subtraction; subtraction operands are swapped when
//! needed so the result is never negative.

use rand::Rng;
use rand::rngs::StdRng;
use uuid::Uuid;

use mt_core::{Answer, Difficulty, Problem, Skill};

/// A narrative frame for a word problem.
struct Template {
    actor: &'static str,
    object: &'static str,
    gain: &'static str,
    loss: &'static str,
}

/// Narrative templates. Verbs are conjugated for the third person so the
/// interpolation reads naturally for any operand values.
const TEMPLATES: &[Template] = &[
    Template {
        actor: "Maya",
        object: "apples",
        gain: "picks",
        loss: "gives away",
    },
    Template {
        actor: "Leo",
        object: "marbles",
        gain: "wins",
        loss: "loses",
    },
    Template {
        actor: "Ava",
        object: "stickers",
        gain: "collects",
        loss: "trades away",
    },
    Template {
        actor: "Sam",
        object: "seashells",
        gain: "finds",
        loss: "drops",
    },
    Template {
        actor: "Noah",
        object: "baseball cards",
        gain: "buys",
        loss: "gives away",
    },
    Template {
        actor: "Mia",
        object: "crayons",
        gain: "gets",
        loss: "loses",
    },
    Template {
        actor: "Ethan",
        object: "toy cars",
        gain: "receives",
        loss: "donates",
    },
    Template {
        actor: "Zoe",
        object: "library books",
        gain: "borrows",
        loss: "returns",
    },
    Template {
        actor: "Liam",
        object: "balloons",
        gain: "blows up",
        loss: "pops",
    },
    Template {
        actor: "Emma",
        object: "coins",
        gain: "saves",
        loss: "spends",
    },
];

/// Generate a word problem at the given tier.
pub fn generate(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let template = &TEMPLATES[rng.random_range(0..TEMPLATES.len())];

    let range = match difficulty.value() {
        2 => 2..=20,
        3 => 10..=99,
        4 => 25..=250,
        5 => 100..=999,
        _ => 1..=9,
    };
    let mut a: i64 = rng.random_range(range.clone());
    let mut b: i64 = rng.random_range(range);
    let is_addition = rng.random_range(0..2) == 0;
    if !is_addition && b > a {
        std::mem::swap(&mut a, &mut b);
    }

    let Template {
        actor,
        object,
        gain,
        loss,
    } = template;

    let (question, result, op) = if is_addition {
        (
            format!(
                "{actor} has {a} {object}. Then {actor} {gain} {b} more {object}. \
                 How many {object} does {actor} have now?"
            ),
            a + b,
            '+',
        )
    } else {
        (
            format!(
                "{actor} has {a} {object}. Then {actor} {loss} {b} {object}. \
                 How many {object} does {actor} have left?"
            ),
            a - b,
            '-',
        )
    };

    let direction_hint = if is_addition {
        "The amount goes up, so add the two numbers.".to_string()
    } else {
        "The amount goes down, so subtract the smaller number from the larger one.".to_string()
    };

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::WordProblem,
        difficulty,
        question,
        answer: Answer::Integer(result),
        choices: None,
        hints: vec![
            "Read the story and decide whether the amount goes up or down.".to_string(),
            direction_hint,
        ],
        explanation: format!("{actor} ends with {result} {object}: {a} {op} {b} = {result}."),
    }
}
