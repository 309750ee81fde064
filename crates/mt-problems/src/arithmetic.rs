//! Whole-number arithmetic generation rules.
//!
//! Tier ranges follow the grade progression: single digits at tier 1 up to
//! multi-digit columns at tier 5. Subtraction operands are swapped so the
//! result is never negative; division is built quotient-first so the
//! result is always an exact integer.

use rand::Rng;
use rand::rngs::StdRng;
use uuid::Uuid;

use mt_core::{Answer, Difficulty, Problem, Skill};

/// Generate an addition problem at the given tier.
pub fn addition(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let (operands, tier_hint): (Vec<i64>, String) = match difficulty.value() {
        2 => {
            let a = rng.random_range(10..=99);
            let b = rng.random_range(1..=9);
            (
                vec![a, b],
                "Add the ones first, then carry into the tens if needed.".to_string(),
            )
        }
        3 => {
            let a = rng.random_range(10..=99);
            let b = rng.random_range(10..=99);
            (
                vec![a, b],
                "Add the ones column first, then the tens column.".to_string(),
            )
        }
        4 => {
            let a = rng.random_range(100..=999);
            let b = rng.random_range(100..=999);
            (
                vec![a, b],
                "Work column by column from the right, carrying as you go.".to_string(),
            )
        }
        5 => {
            let a = rng.random_range(100..=999);
            let b = rng.random_range(100..=999);
            let c = rng.random_range(100..=999);
            (
                vec![a, b, c],
                "Add the first two numbers, then add the third to that total.".to_string(),
            )
        }
        // Tier-1 rule doubles as the fallback for any tier without a rule.
        _ => {
            let a = rng.random_range(1..=9);
            let b = rng.random_range(1..=9);
            (vec![a, b], format!("Start at {a} and count up {b}."))
        }
    };

    let sum: i64 = operands.iter().sum();
    let expr = join_expr(&operands, "+");

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Addition,
        difficulty,
        question: format!("What is {expr}?"),
        answer: Answer::Integer(sum),
        choices: None,
        hints: vec!["Add the numbers together.".to_string(), tier_hint],
        explanation: format!("{expr} = {sum}"),
    }
}

/// Generate a subtraction problem at the given tier.
///
/// Operands are swapped when needed so the difference is non-negative.
pub fn subtraction(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let (mut a, mut b, tier_hint) = match difficulty.value() {
        2 => (
            rng.random_range(10..=99),
            rng.random_range(1..=9),
            "Take the small number away from the ones, borrowing if needed.",
        ),
        3 => (
            rng.random_range(10..=99),
            rng.random_range(10..=99),
            "Subtract the ones column first, borrowing from the tens if needed.",
        ),
        4 => (
            rng.random_range(100..=999),
            rng.random_range(100..=999),
            "Work column by column from the right, borrowing as you go.",
        ),
        5 => (
            rng.random_range(1000..=9999),
            rng.random_range(1000..=9999),
            "Line the numbers up by place value before subtracting.",
        ),
        _ => (
            rng.random_range(2..=9),
            rng.random_range(1..=9),
            "Count down from the bigger number.",
        ),
    };
    if b > a {
        std::mem::swap(&mut a, &mut b);
    }
    let diff = a - b;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Subtraction,
        difficulty,
        question: format!("What is {a} - {b}?"),
        answer: Answer::Integer(diff),
        choices: None,
        hints: vec![
            "Take the second number away from the first.".to_string(),
            tier_hint.to_string(),
        ],
        explanation: format!("{a} - {b} = {diff}"),
    }
}

/// Generate a multiplication problem at the given tier.
pub fn multiplication(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let (a, b, tier_hint) = match difficulty.value() {
        2 => (
            rng.random_range(2..=9),
            rng.random_range(2..=9),
            "Use the times tables you know.",
        ),
        3 => (
            rng.random_range(10..=99),
            rng.random_range(2..=9),
            "Multiply the ones, then the tens, and add the parts.",
        ),
        4 => (
            rng.random_range(10..=99),
            rng.random_range(10..=99),
            "Break one number into tens and ones, multiply each, then add.",
        ),
        5 => (
            rng.random_range(100..=999),
            rng.random_range(10..=99),
            "Multiply by the tens digit and the ones digit separately, then add.",
        ),
        _ => (
            rng.random_range(1..=5),
            rng.random_range(1..=5),
            "Think of it as repeated addition.",
        ),
    };
    let product = a * b;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Multiplication,
        difficulty,
        question: format!("What is {a} x {b}?"),
        answer: Answer::Integer(product),
        choices: None,
        hints: vec![
            format!("{a} x {b} means {b} groups of {a}."),
            tier_hint.to_string(),
        ],
        explanation: format!("{a} x {b} = {product}"),
    }
}

/// Generate a division problem at the given tier.
///
/// Built quotient-first: divisor and quotient are drawn, the dividend is
/// their product, so the answer is always an exact integer.
pub fn division(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let (divisor, quotient, tier_hint) = match difficulty.value() {
        2 => (
            rng.random_range(2..=9),
            rng.random_range(2..=9),
            "Which times-table fact uses these numbers?",
        ),
        3 => (
            rng.random_range(2..=9),
            rng.random_range(10..=25),
            "Divide the tens first, then the ones.",
        ),
        4 => (
            rng.random_range(11..=25),
            rng.random_range(2..=25),
            "Estimate how many times the divisor fits, then check by multiplying.",
        ),
        5 => (
            rng.random_range(12..=40),
            rng.random_range(10..=99),
            "Use long division: divide, multiply, subtract, bring down.",
        ),
        _ => (
            rng.random_range(2..=5),
            rng.random_range(1..=5),
            "Share the total into equal groups.",
        ),
    };
    let dividend = divisor * quotient;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Division,
        difficulty,
        question: format!("What is {dividend} / {divisor}?"),
        answer: Answer::Integer(quotient),
        choices: None,
        hints: vec![
            format!("How many groups of {divisor} fit into {dividend}?"),
            tier_hint.to_string(),
        ],
        explanation: format!(
            "{dividend} / {divisor} = {quotient}, because {divisor} x {quotient} = {dividend}"
        ),
    }
}

fn join_expr(operands: &[i64], op: &str) -> String {
    operands
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(&format!(" {op} "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn check_many(f: fn(Difficulty, &mut StdRng) -> Problem, check: fn(&Problem)) {
        let mut rng = StdRng::seed_from_u64(99);
        for tier in 1..=5 {
            for _ in 0..50 {
                check(&f(Difficulty::new(tier), &mut rng));
            }
        }
    }

    fn integer_answer(p: &Problem) -> i64 {
        match p.answer {
            Answer::Integer(n) => n,
            ref other => panic!("expected integer answer, got {other:?}"),
        }
    }

    #[test]
    fn addition_answer_is_sum_of_operands() {
        // Scenario: operands 3 and 4 must yield answer 7, for every draw.
        check_many(addition, |p| {
            let operands: Vec<i64> = p
                .question
                .trim_start_matches("What is ")
                .trim_end_matches('?')
                .split(" + ")
                .map(|s| s.parse().unwrap())
                .collect();
            assert_eq!(integer_answer(p), operands.iter().sum::<i64>());
        });
    }

    #[test]
    fn addition_tier_one_is_single_digit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = addition(Difficulty::new(1), &mut rng);
            let n = integer_answer(&p);
            assert!((2..=18).contains(&n), "tier 1 sum out of range: {n}");
        }
    }

    #[test]
    fn addition_tier_five_has_three_addends() {
        let mut rng = StdRng::seed_from_u64(8);
        let p = addition(Difficulty::new(5), &mut rng);
        assert_eq!(p.question.matches('+').count(), 2);
    }

    #[test]
    fn subtraction_never_negative() {
        check_many(subtraction, |p| {
            assert!(integer_answer(p) >= 0, "negative: {}", p.question);
        });
    }

    #[test]
    fn multiplication_answer_is_product() {
        check_many(multiplication, |p| {
            let parts: Vec<i64> = p
                .question
                .trim_start_matches("What is ")
                .trim_end_matches('?')
                .split(" x ")
                .map(|s| s.parse().unwrap())
                .collect();
            assert_eq!(integer_answer(p), parts[0] * parts[1]);
        });
    }

    #[test]
    fn division_always_exact() {
        check_many(division, |p| {
            let parts: Vec<i64> = p
                .question
                .trim_start_matches("What is ")
                .trim_end_matches('?')
                .split(" / ")
                .map(|s| s.parse().unwrap())
                .collect();
            let (dividend, divisor) = (parts[0], parts[1]);
            assert_eq!(dividend % divisor, 0, "inexact: {}", p.question);
            assert_eq!(integer_answer(p), dividend / divisor);
        });
    }

    #[test]
    fn two_hints_general_then_specific() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = subtraction(Difficulty::new(3), &mut rng);
        assert_eq!(p.hints.len(), 2);
        assert!(p.hints[0].contains("Take the second number away"));
    }
}
