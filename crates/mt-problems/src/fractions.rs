//! Fraction generation rules.
//!
//! Tier 1 is the equivalent-fraction multiple-choice item; tiers 2-3 are
//! same-denominator addition and subtraction; tier 4 adds unlike
//! denominators where one divides the other; tier 5 is simplification.
//! All arithmetic is exact integer arithmetic on numerators/denominators.

use rand::Rng;
use rand::rngs::StdRng;
use uuid::Uuid;

use mt_core::{Answer, Difficulty, Problem, Skill};

/// Generate a fraction problem at the given tier.
pub fn generate(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    match difficulty.value() {
        2 => same_denominator_addition(difficulty, rng),
        3 => same_denominator_subtraction(difficulty, rng),
        4 => unlike_denominator_addition(difficulty, rng),
        5 => simplification(difficulty, rng),
        _ => equivalent_choice(difficulty, rng),
    }
}

/// Tier 1: pick the equivalent fraction among four options.
///
/// Given `num/denom` and multiplier `k`, the correct option is
/// `num*k/denom*k`; distractors are the numerator off by one in either
/// direction and the naive `+1/+1` baseline. All three sit well outside
/// the decimal answer tolerance, so exactly one option checks out.
fn equivalent_choice(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let denom = rng.random_range(2..=9);
    let num = rng.random_range(1..denom);
    let k = rng.random_range(2..=6);
    let (cn, cd) = (num * k, denom * k);

    let correct = format!("{cn}/{cd}");
    let mut choices = vec![
        format!("{}/{}", cn + 1, cd),
        format!("{}/{}", cn - 1, cd),
        format!("{}/{}", num + 1, denom + 1),
    ];
    choices.insert(rng.random_range(0..=choices.len()), correct);

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Fractions,
        difficulty,
        question: format!("Which fraction is equivalent to {num}/{denom}?"),
        answer: Answer::Fraction {
            numerator: cn,
            denominator: cd,
        },
        choices: Some(choices),
        hints: vec![
            "An equivalent fraction multiplies top and bottom by the same number.".to_string(),
            format!("Try multiplying both parts of {num}/{denom} by {k}."),
        ],
        explanation: format!(
            "{num}/{denom} = {cn}/{cd}: both the numerator and the denominator were multiplied by {k}."
        ),
    }
}

/// Tier 2: `a/d + b/d` with `a + b < d`, so the sum stays proper.
fn same_denominator_addition(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let denom = rng.random_range(4..=10);
    let a = rng.random_range(1..=denom - 2);
    let b = rng.random_range(1..=denom - 1 - a);
    let sum = a + b;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Fractions,
        difficulty,
        question: format!("What is {a}/{denom} + {b}/{denom}?"),
        answer: Answer::Fraction {
            numerator: sum,
            denominator: denom,
        },
        choices: None,
        hints: vec![
            "When the denominators match, add only the numerators.".to_string(),
            format!("Work out {a} + {b} and keep the denominator {denom}."),
        ],
        explanation: format!("{a}/{denom} + {b}/{denom} = {sum}/{denom}"),
    }
}

/// Tier 3: `a/d - b/d` with `a > b`, so the difference stays positive.
fn same_denominator_subtraction(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let denom = rng.random_range(4..=10);
    let a = rng.random_range(2..denom);
    let b = rng.random_range(1..a);
    let diff = a - b;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Fractions,
        difficulty,
        question: format!("What is {a}/{denom} - {b}/{denom}?"),
        answer: Answer::Fraction {
            numerator: diff,
            denominator: denom,
        },
        choices: None,
        hints: vec![
            "When the denominators match, subtract only the numerators.".to_string(),
            format!("Work out {a} - {b} and keep the denominator {denom}."),
        ],
        explanation: format!("{a}/{denom} - {b}/{denom} = {diff}/{denom}"),
    }
}

/// Tier 4: `a/d1 + b/d2` where `d2` is a multiple of `d1`; the answer is
/// expressed over the common denominator `d2`.
fn unlike_denominator_addition(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    let d1 = rng.random_range(2..=6);
    let m = rng.random_range(2..=3);
    let d2 = d1 * m;
    let a = rng.random_range(1..d1);
    let b = rng.random_range(1..d2);
    let sum = a * m + b;

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Fractions,
        difficulty,
        question: format!("What is {a}/{d1} + {b}/{d2}?"),
        answer: Answer::Fraction {
            numerator: sum,
            denominator: d2,
        },
        choices: None,
        hints: vec![
            "Rewrite both fractions over a common denominator first.".to_string(),
            format!("{a}/{d1} is the same as {}/{d2}.", a * m),
        ],
        explanation: format!(
            "{a}/{d1} = {}/{d2}, and {}/{d2} + {b}/{d2} = {sum}/{d2}",
            a * m,
            a * m
        ),
    }
}

/// Tier 5: reduce `(n*k)/(d*k)` to lowest terms `n/d`.
fn simplification(difficulty: Difficulty, rng: &mut StdRng) -> Problem {
    // Draw until numerator and denominator are coprime so the reduced
    // form is unique.
    let (num, denom) = loop {
        let d = rng.random_range(2..=9);
        let n = rng.random_range(1..d);
        if gcd(n, d) == 1 {
            break (n, d);
        }
    };
    let k = rng.random_range(2..=6);
    let (un, ud) = (num * k, denom * k);

    Problem {
        id: Uuid::new_v4(),
        skill: Skill::Fractions,
        difficulty,
        question: format!("Simplify {un}/{ud} to lowest terms."),
        answer: Answer::Fraction {
            numerator: num,
            denominator: denom,
        },
        choices: None,
        hints: vec![
            "Find the greatest number that divides both the top and the bottom.".to_string(),
            format!("Both {un} and {ud} can be divided by {k}."),
        ],
        explanation: format!("{un}/{ud} = {num}/{denom}: divide both parts by {k}."),
    }
}

/// Greatest common divisor, classic Euclid.
fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn fraction_answer(p: &Problem) -> (i64, i64) {
        match p.answer {
            Answer::Fraction {
                numerator,
                denominator,
            } => (numerator, denominator),
            ref other => panic!("expected fraction answer, got {other:?}"),
        }
    }

    #[test]
    fn tier_one_is_multiple_choice_with_four_options() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let p = generate(Difficulty::new(1), &mut rng);
            let choices = p.choices.as_ref().expect("tier 1 must be multiple choice");
            assert_eq!(choices.len(), 4);
            // Exactly one option is the correct answer.
            let matching = choices.iter().filter(|c| p.answer.matches(c)).count();
            assert_eq!(matching, 1, "choices: {choices:?}, answer: {}", p.answer);
        }
    }

    #[test]
    fn tier_one_correct_option_is_true_multiple() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let p = generate(Difficulty::new(1), &mut rng);
            let (cn, cd) = fraction_answer(&p);
            let base = p
                .question
                .trim_start_matches("Which fraction is equivalent to ")
                .trim_end_matches('?');
            let (n, d) = base.split_once('/').unwrap();
            let (n, d): (i64, i64) = (n.parse().unwrap(), d.parse().unwrap());
            // cn/cd reduces back to n/d.
            assert_eq!(cn * d, cd * n);
        }
    }

    #[test]
    fn tier_two_sum_stays_proper() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let p = generate(Difficulty::new(2), &mut rng);
            let (n, d) = fraction_answer(&p);
            assert!(n < d, "improper sum {n}/{d}");
            assert!(p.choices.is_none());
        }
    }

    #[test]
    fn tier_three_difference_positive() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let p = generate(Difficulty::new(3), &mut rng);
            let (n, _) = fraction_answer(&p);
            assert!(n >= 1);
        }
    }

    #[test]
    fn tier_four_common_denominator_arithmetic() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let p = generate(Difficulty::new(4), &mut rng);
            let (n, d) = fraction_answer(&p);
            let body = p
                .question
                .trim_start_matches("What is ")
                .trim_end_matches('?');
            let (left, right) = body.split_once(" + ").unwrap();
            let (a, d1) = left.split_once('/').unwrap();
            let (b, d2) = right.split_once('/').unwrap();
            let (a, d1): (i64, i64) = (a.parse().unwrap(), d1.parse().unwrap());
            let (b, d2): (i64, i64) = (b.parse().unwrap(), d2.parse().unwrap());
            assert_eq!(d2 % d1, 0);
            assert_eq!(d, d2);
            assert_eq!(n, a * (d2 / d1) + b);
        }
    }

    #[test]
    fn tier_five_answer_is_reduced() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let p = generate(Difficulty::new(5), &mut rng);
            let (n, d) = fraction_answer(&p);
            assert_eq!(gcd(n, d), 1, "not reduced: {n}/{d}");
        }
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(9, 9), 9);
        assert_eq!(gcd(5, 0), 5);
    }
}
