//! Maths generators: numeric-range policies instead of template banks.
//!
//! Every answer is computed in integers.  Money is held in pence, decimals in
//! hundredths or tenths, clock times in minutes since midnight, and only
//! formatted at the end so the option labels and the explanation always come
//! from the same value.

use crate::question_engine::{
    helpers::{
        format_clock, format_duration, format_fixed, format_money, gcd, join_list,
        magnitude_spread, numeric_distractors, Draft, DISTRACTOR_COUNT,
    },
    models::Difficulty,
    rng::SeededRng,
};

// ---------------------------------------------------------------------------
// Shared numeric option builder
// ---------------------------------------------------------------------------

/// Up to two topic-specific near misses, then random neighbours.
///
/// The random search always runs, whatever the near misses turn out to be, so
/// the number of stream draws does not depend on the content.
fn numeric_options(
    rng: &mut SeededRng,
    answer: i64,
    near: &[i64],
    step: i64,
    valid: impl Fn(i64) -> bool,
    label: impl Fn(i64) -> String,
) -> Vec<String> {
    let spread = magnitude_spread(answer / step.max(1));
    let random = numeric_distractors(rng, answer, step, spread, &valid);

    let mut chosen: Vec<i64> = Vec::with_capacity(DISTRACTOR_COUNT);
    let near_ok = near.iter().copied().filter(|&v| v != answer && valid(v));
    for v in near_ok.take(2).chain(random) {
        if chosen.len() < DISTRACTOR_COUNT && !chosen.contains(&v) {
            chosen.push(v);
        }
    }
    chosen.into_iter().map(label).collect()
}

fn plain(v: i64) -> String {
    v.to_string()
}

fn non_negative(v: i64) -> bool {
    v >= 0
}

fn positive(v: i64) -> bool {
    v > 0
}

// ---------------------------------------------------------------------------
// Addition & subtraction
// ---------------------------------------------------------------------------

fn arithmetic_range(d: Difficulty) -> (i64, i64) {
    match d.level() {
        1 => (2, 20),
        2 => (10, 99),
        3 => (50, 500),
        4 => (100, 999),
        _ => (1000, 9999),
    }
}

/// Draw order: operator, left operand, right operand, distractors, shuffle.
pub fn arithmetic(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (lo, hi) = arithmetic_range(d);
    let op = *rng.pick(&['+', '-']);
    let mut a = rng.random_int(lo, hi);
    let mut b = rng.random_int(lo, hi);

    // No negative results: subtract the smaller operand from the larger.
    if op == '-' && a < b {
        std::mem::swap(&mut a, &mut b);
    }
    let answer = if op == '+' { a + b } else { a - b };

    // Forgetting to carry / borrow shifts the answer by a power of ten.
    let near = if d.level() >= 2 { [answer + 10, answer - 10] } else { [answer + 1, answer - 1] };
    let distractors = numeric_options(rng, answer, &near, 1, non_negative, plain);

    Draft::text(
        format!("What is {a} {op} {b}?"),
        answer.to_string(),
        distractors,
        format!("{a} {op} {b} = {answer}"),
    )
    .tag("arithmetic")
}

// ---------------------------------------------------------------------------
// Multiplication & division
// ---------------------------------------------------------------------------

fn factor_ranges(rng: &mut SeededRng, d: Difficulty) -> (i64, i64) {
    match d.level() {
        1 => (*rng.pick(&[2, 5, 10]), rng.random_int(1, 10)),
        2 => (rng.random_int(2, 10), rng.random_int(1, 12)),
        3 => (rng.random_int(2, 12), rng.random_int(2, 12)),
        4 => (rng.random_int(11, 99), rng.random_int(2, 9)),
        _ => (rng.random_int(11, 99), rng.random_int(11, 99)),
    }
}

pub fn multiplication(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (a, b) = factor_ranges(rng, d);
    let answer = a * b;
    // Neighbouring facts from the same table.
    let near = [a * (b + 1), a * (b - 1), (a + 1) * b];
    let distractors = numeric_options(rng, answer, &near, 1, positive, plain);

    Draft::text(
        format!("What is {a} × {b}?"),
        answer.to_string(),
        distractors,
        format!("{a} × {b} = {answer}"),
    )
    .tag("times-tables")
}

/// Built backwards from divisor × quotient, so the quotient is always whole.
pub fn division(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (divisor, quotient) = match d.level() {
        1 => (*rng.pick(&[2, 5, 10]), rng.random_int(1, 10)),
        2 => (rng.random_int(2, 10), rng.random_int(1, 12)),
        3 => (rng.random_int(2, 12), rng.random_int(2, 12)),
        4 => (rng.random_int(3, 9), rng.random_int(12, 99)),
        _ => (rng.random_int(11, 25), rng.random_int(11, 50)),
    };
    let dividend = divisor * quotient;
    let near = [quotient + 1, quotient - 1, dividend - divisor];
    let distractors = numeric_options(rng, quotient, &near, 1, positive, plain);

    Draft::text(
        format!("What is {dividend} ÷ {divisor}?"),
        quotient.to_string(),
        distractors,
        format!("{dividend} ÷ {divisor} = {quotient}"),
    )
    .tag("division")
}

// ---------------------------------------------------------------------------
// Fractions of amounts
// ---------------------------------------------------------------------------

pub fn fractions(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (denominator, unit) = match d.level() {
        1 => (*rng.pick(&[2, 4]), rng.random_int(1, 10)),
        2 => (*rng.pick(&[2, 3, 4, 5, 10]), rng.random_int(2, 12)),
        3 => (rng.random_int(3, 8), rng.random_int(2, 15)),
        4 => (rng.random_int(5, 12), rng.random_int(3, 20)),
        _ => (rng.random_int(6, 12), rng.random_int(5, 30)),
    };
    let mut numerator = if d.level() <= 2 { 1 } else { rng.random_int(1, denominator - 1) };
    let mut denominator = denominator;

    // Keep the fraction in lowest terms; the amount scales with it.
    let g = gcd(numerator, denominator);
    numerator /= g;
    denominator /= g;

    let amount = denominator * unit;
    let answer = numerator * unit;

    let near = [unit, answer + unit, answer - unit];
    let distractors = numeric_options(rng, answer, &near, 1, positive, plain);

    let explanation = if numerator == 1 {
        format!("{amount} ÷ {denominator} = {answer}")
    } else {
        format!("{amount} ÷ {denominator} = {unit}, and {unit} × {numerator} = {answer}")
    };

    Draft::text(
        format!("What is {numerator}/{denominator} of {amount}?"),
        answer.to_string(),
        distractors,
        explanation,
    )
    .tag("fractions")
}

// ---------------------------------------------------------------------------
// Decimals
// ---------------------------------------------------------------------------

pub fn decimals(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let level = d.level();
    let places: u32 = if level <= 2 { 1 } else { 2 };

    if level == 5 {
        // Decimal × whole number.
        let a = rng.random_int(101, 999);
        let b = rng.random_int(2, 9);
        let answer = a * b;
        let near = [answer + 100, answer - 100, a * (b + 1)];
        let label = |v: i64| format_fixed(v, places);
        let distractors = numeric_options(rng, answer, &near, 1, positive, label);
        let (fa, fans) = (format_fixed(a, places), format_fixed(answer, places));
        return Draft::text(
            format!("What is {fa} × {b}?"),
            fans.clone(),
            distractors,
            format!("{fa} × {b} = {fans}"),
        )
        .tag("decimals");
    }

    let (lo, hi) = match level {
        1 => (1, 50),
        2 => (10, 999),
        3 => (10, 999),
        _ => (100, 9999),
    };
    let op = if level == 1 { '+' } else { *rng.pick(&['+', '-']) };
    let mut a = rng.random_int(lo, hi);
    let mut b = rng.random_int(lo, hi);
    if op == '-' && a < b {
        std::mem::swap(&mut a, &mut b);
    }
    let answer = if op == '+' { a + b } else { a - b };

    // Place-value slips: off by a whole one, or by ten in the last place.
    let unit = 10i64.pow(places);
    let near = [answer + unit, answer - unit, answer + 10];
    let label = |v: i64| format_fixed(v, places);
    let distractors = numeric_options(rng, answer, &near, 1, non_negative, label);

    let (fa, fb, fans) = (format_fixed(a, places), format_fixed(b, places), format_fixed(answer, places));
    Draft::text(
        format!("What is {fa} {op} {fb}?"),
        fans.clone(),
        distractors,
        format!("{fa} {op} {fb} = {fans}"),
    )
    .tag("decimals")
}

// ---------------------------------------------------------------------------
// Percentages
// ---------------------------------------------------------------------------

pub fn percentages(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let percent: i64 = match d.level() {
        1 => *rng.pick(&[10, 50]),
        2 => *rng.pick(&[10, 20, 25, 50]),
        3 => *rng.pick(&[5, 15, 30, 40, 75]),
        4 => *rng.pick(&[35, 45, 60, 65, 85]),
        _ => rng.random_int(1, 99),
    };
    // Smallest whole amount for which `percent`% is a whole number.
    let base = 100 / gcd(percent, 100);
    let max_k = (400 / base).max(2);
    let k = rng.random_int(1, max_k);
    let amount = base * k;
    let answer = amount * percent / 100;

    let near = [amount - answer, answer * 10, percent];
    let distractors = numeric_options(rng, answer, &near, 1, non_negative, plain);

    Draft::text(
        format!("What is {percent}% of {amount}?"),
        answer.to_string(),
        distractors,
        format!("{percent}% of {amount} = {amount} × {percent} ÷ 100 = {answer}"),
    )
    .tag("percentages")
}

// ---------------------------------------------------------------------------
// Solving equations
// ---------------------------------------------------------------------------

pub fn algebra(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let level = d.level();
    let x = match level {
        1 => rng.random_int(1, 20),
        2 => rng.random_int(2, 12),
        _ => rng.random_int(2, 15),
    };
    let a = if level == 1 { 1 } else { rng.random_int(2, 9) };
    let b = if level == 2 { 0 } else { rng.random_int(1, 20) };

    let (equation, working, near) = match level {
        1 => {
            let c = x + b;
            (
                format!("x + {b} = {c}"),
                format!("x = {c} − {b} = {x}"),
                [c + b, c, x + 1],
            )
        }
        2 => {
            let c = a * x;
            (
                format!("{a}x = {c}"),
                format!("x = {c} ÷ {a} = {x}"),
                [c - a, c, x + 1],
            )
        }
        3 => {
            let c = a * x + b;
            (
                format!("{a}x + {b} = {c}"),
                format!("{a}x = {c} − {b} = {}, so x = {} ÷ {a} = {x}", c - b, c - b),
                [c - b, (c + b) / a, x + 1],
            )
        }
        4 => {
            // Keep the right-hand side positive: b must stay below a·x.
            let b = if b >= a * x { a * x - 1 } else { b };
            let c = a * x - b;
            (
                format!("{a}x − {b} = {c}"),
                format!("{a}x = {c} + {b} = {}, so x = {} ÷ {a} = {x}", c + b, c + b),
                [c + b, (c - b).max(0) / a, x - 1],
            )
        }
        _ => {
            let c = a * (x + b);
            (
                format!("{a}(x + {b}) = {c}"),
                format!("x + {b} = {c} ÷ {a} = {}, so x = {} − {b} = {x}", x + b, x + b),
                [x + b, x + 2 * b, c / a - 1 - b],
            )
        }
    };
    let distractors = numeric_options(rng, x, &near, 1, non_negative, plain);

    Draft::text(
        format!("Solve for x: {equation}"),
        x.to_string(),
        distractors,
        working,
    )
    .tag("equations")
}

// ---------------------------------------------------------------------------
// Money & change
// ---------------------------------------------------------------------------

const NOTES: [i64; 5] = [100, 500, 1000, 2000, 5000];
const ITEMS: [&str; 8] = ["a comic", "a sandwich", "a pencil case", "a drink", "a toy car", "a notebook", "a bag of apples", "a ruler"];

/// Smallest note strictly greater than `total`.
fn paying_note(total: i64) -> i64 {
    NOTES
        .iter()
        .copied()
        .find(|&n| n > total)
        .unwrap_or_else(|| (total / 5000 + 1) * 5000)
}

pub fn money(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let level = d.level();
    let (count, lo, hi, step) = match level {
        1 => (1, 10, 95, 5),
        2 => (1, 50, 495, 5),
        3 => (2, 25, 499, 1),
        4 => (2, 35, 299, 1),
        _ => (3, 50, 999, 1),
    };
    let quantity = if level >= 4 { rng.random_int(2, 6) } else { 1 };

    let mut prices: Vec<i64> = Vec::with_capacity(count);
    for _ in 0..count {
        prices.push(rng.random_int(lo / step, hi / step) * step);
    }
    let names = rng.pick_n(&ITEMS, count);

    // The first item is bought `quantity` times.
    let total = prices[0] * quantity + prices[1..].iter().sum::<i64>();
    let paid = paying_note(total);
    let change = paid - total;

    let mut bought: Vec<String> = Vec::with_capacity(count);
    for (i, (name, price)) in names.iter().zip(&prices).enumerate() {
        if i == 0 && quantity > 1 {
            bought.push(format!("{quantity} of {name} at {} each", format_money(*price)));
        } else {
            bought.push(format!("{name} for {}", format_money(*price)));
        }
    }

    let mut parts: Vec<String> = Vec::with_capacity(count);
    for (i, price) in prices.iter().enumerate() {
        if i == 0 && quantity > 1 {
            parts.push(format!("{quantity} × {}", format_money(*price)));
        } else {
            parts.push(format_money(*price));
        }
    }

    let near = [total, change + 100, change + 10];
    let distractors = numeric_options(rng, change, &near, step, positive, format_money);

    let total_line = if parts.len() == 1 && quantity == 1 {
        format!("The cost is {}", format_money(total))
    } else {
        format!("Total = {} = {}", parts.join(" + "), format_money(total))
    };

    Draft::text(
        format!(
            "You buy {} and pay with {}. How much change do you get?",
            join_list(&bought),
            format_money(paid)
        ),
        format_money(change),
        distractors,
        format!(
            "{total_line}. Change = {} − {} = {}",
            format_money(paid),
            format_money(total),
            format_money(change)
        ),
    )
    .tag("money")
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// (opening clause, verb, verb in the third person)
const JOURNEYS: [(&str, &str, &str); 4] = [
    ("A train leaves", "arrive", "arrives"),
    ("A bus sets off", "arrive", "arrives"),
    ("A football match kicks off", "finish", "finishes"),
    ("A school trip starts", "end", "ends"),
];

pub fn time(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let level = d.level();
    let (start, duration) = match level {
        1 => (rng.random_int(7, 18) * 60, rng.random_int(1, 8) * 30),
        2 => (rng.random_int(28, 76) * 15, rng.random_int(1, 12) * 15),
        3 => (rng.random_int(84, 228) * 5, rng.random_int(4, 48) * 5),
        _ => (rng.random_int(6 * 60, 20 * 60), rng.random_int(10, 300)),
    };
    let end = start + duration;
    let step = if level <= 3 { 5 } else { 1 };

    // Hour slips and reading the minutes as the hour are the usual mistakes.
    let backwards = level == 5;
    let answer = if backwards { start } else { end };
    let near = [answer + 60, answer - 60, answer + 10];
    let distractors = numeric_options(rng, answer, &near, step, |_| true, format_clock);

    let (context, verb, verbs) = *rng.pick(&JOURNEYS);
    let dur = format_duration(duration);
    if backwards {
        Draft::text(
            format!(
                "{context} and takes {dur}. It {verbs} at {}. What time did it start?",
                format_clock(end)
            ),
            format_clock(start),
            distractors,
            format!("{} − {dur} = {}", format_clock(end), format_clock(start)),
        )
        .tag("time")
    } else {
        Draft::text(
            format!("{context} at {} and takes {dur}. What time does it {verb}?", format_clock(start)),
            format_clock(end),
            distractors,
            format!("{} + {dur} = {}", format_clock(start), format_clock(end)),
        )
        .tag("time")
    }
}

// ---------------------------------------------------------------------------
// Number sequences
// ---------------------------------------------------------------------------

const SHOWN_TERMS: usize = 5;

pub fn number_sequences(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let mut terms: Vec<i64> = Vec::with_capacity(SHOWN_TERMS + 1);
    let rule: String;

    match d.level() {
        1 | 2 => {
            let step = if d.level() == 1 { rng.random_int(2, 5) } else { rng.random_int(3, 12) };
            let descending = d.level() == 2 && rng.chance(0.5);
            // A descending run must not drop below zero.
            let start = if descending {
                rng.random_int(step * (SHOWN_TERMS as i64 + 1), step * 12)
            } else {
                rng.random_int(1, 20)
            };
            let delta = if descending { -step } else { step };
            for i in 0..=SHOWN_TERMS as i64 {
                terms.push(start + delta * i);
            }
            rule = if descending {
                format!("subtract {step} each time")
            } else {
                format!("add {step} each time")
            };
        }
        3 => {
            let factor = rng.random_int(2, 3);
            let start = rng.random_int(1, 5);
            let mut t = start;
            for _ in 0..=SHOWN_TERMS {
                terms.push(t);
                t *= factor;
            }
            rule = format!("multiply by {factor} each time");
        }
        4 => {
            let mut gap = rng.random_int(1, 4);
            let growth = rng.random_int(1, 2);
            let mut t = rng.random_int(1, 15);
            for _ in 0..=SHOWN_TERMS {
                terms.push(t);
                t += gap;
                gap += growth;
            }
            rule = format!("the gap grows by {growth} each time");
        }
        _ => {
            let mut a = rng.random_int(1, 9);
            let mut b = rng.random_int(a, a + 9);
            for _ in 0..=SHOWN_TERMS {
                terms.push(a);
                let next = a + b;
                a = b;
                b = next;
            }
            rule = "each term is the sum of the two before it".to_string();
        }
    }

    let answer = terms[SHOWN_TERMS];
    let last = terms[SHOWN_TERMS - 1];
    let prev_gap = last - terms[SHOWN_TERMS - 2];
    // Repeating the last gap, or overshooting by one more gap.
    let near = [last + prev_gap, answer + prev_gap, answer + 1];
    let distractors = numeric_options(rng, answer, &near, 1, non_negative, plain);

    let shown: Vec<String> = terms[..SHOWN_TERMS].iter().map(i64::to_string).collect();
    Draft::text(
        format!("What comes next? {}, ?", shown.join(", ")),
        answer.to_string(),
        distractors,
        format!("The rule is: {rule}, so the next term is {answer}"),
    )
    .tag("sequences")
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

fn round_half_up(value: i64, unit: i64) -> i64 {
    ((value + unit / 2) / unit) * unit
}

pub fn rounding(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (unit, lo, hi, places, place_name) = match d.level() {
        1 => (10, 11, 99, 0, "10"),
        2 => (10, 101, 999, 0, "10"),
        3 => (100, 101, 9999, 0, "100"),
        4 => (1000, 1001, 99_999, 0, "1000"),
        // Hundredths rounded to tenths.
        _ => (10, 101, 9999, 2, "tenth"),
    };
    let mut value = rng.random_int(lo, hi);
    // An exact multiple would make the question trivial.
    if value % unit == 0 {
        value += unit / 2 - 1;
    }
    let answer = round_half_up(value, unit);
    let truncated = (value / unit) * unit;
    let wrong_place = round_half_up(value, unit * 10);
    let near = [truncated, truncated + unit, wrong_place];

    let label = move |v: i64| if places == 0 { v.to_string() } else { format_fixed(v / 10, 1) };
    let distractors = numeric_options(rng, answer, &near, unit, non_negative, label);

    let shown = if places == 0 { value.to_string() } else { format_fixed(value, places) };
    let answer_label = label(answer);
    let (prompt, explanation) = if places == 0 {
        (
            format!("Round {shown} to the nearest {place_name}."),
            format!("{shown} rounded to the nearest {place_name} is {answer_label}"),
        )
    } else {
        (
            format!("Round {shown} to one decimal place."),
            format!("{shown} rounded to one decimal place is {answer_label}"),
        )
    };

    Draft::text(prompt, answer_label, distractors, explanation).tag("rounding")
}

// ---------------------------------------------------------------------------
// Ratio
// ---------------------------------------------------------------------------

const SHARERS: [(&str, &str); 4] = [("Ava", "Ben"), ("Priya", "Tom"), ("Noah", "Zara"), ("Lily", "Sam")];
const SHARED: [&str; 4] = ["sweets", "marbles", "stickers", "cards"];

pub fn ratio(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (max_part, max_k) = match d.level() {
        1 => (3, 6),
        2 => (4, 10),
        3 => (5, 12),
        4 => (7, 20),
        _ => (9, 25),
    };
    let a = rng.random_int(1, max_part);
    let mut b = rng.random_int(1, max_part);
    if b == a {
        b += 1;
    }
    let k = rng.random_int(2, max_k);
    let (first, second) = *rng.pick(&SHARERS);
    let thing = *rng.pick(&SHARED);

    let total = k * (a + b);
    let answer = k * a;
    let near = [k * b, k, total - k];
    let distractors = numeric_options(rng, answer, &near, 1, positive, plain);

    Draft::text(
        format!("{first} and {second} share {total} {thing} in the ratio {a}:{b}. How many does {first} get?"),
        answer.to_string(),
        distractors,
        format!("{total} ÷ ({a} + {b}) = {k}, so {first} gets {k} × {a} = {answer}"),
    )
    .tag("ratio")
}

// ---------------------------------------------------------------------------
// Area & perimeter
// ---------------------------------------------------------------------------

pub fn area_perimeter(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let cm = |v: i64| format!("{v} cm");
    let cm2 = |v: i64| format!("{v} cm²");

    match d.level() {
        1 | 2 => {
            let (lo, hi) = if d.level() == 1 { (2, 10) } else { (3, 15) };
            let l = rng.random_int(lo, hi);
            let w = rng.random_int(lo, hi);
            let perimeter = 2 * (l + w);
            // Adding only two sides, or giving the area.
            let near = [l + w, l * w, perimeter + 2];
            let distractors = numeric_options(rng, perimeter, &near, 1, positive, cm);
            Draft::text(
                format!("A rectangle is {l} cm long and {w} cm wide. What is its perimeter?"),
                cm(perimeter),
                distractors,
                format!("Perimeter = 2 × ({l} + {w}) = {}", cm(perimeter)),
            )
            .tag("perimeter")
        }
        3 => {
            let l = rng.random_int(4, 20);
            let w = rng.random_int(3, 15);
            let area = l * w;
            let near = [2 * (l + w), area + l, area - w];
            let distractors = numeric_options(rng, area, &near, 1, positive, cm2);
            Draft::text(
                format!("A rectangle is {l} cm long and {w} cm wide. What is its area?"),
                cm2(area),
                distractors,
                format!("Area = {l} × {w} = {}", cm2(area)),
            )
            .tag("area")
        }
        4 => {
            // An L-shape: a rectangle with one corner rectangle removed.
            let l = rng.random_int(8, 20);
            let w = rng.random_int(6, 15);
            let cut_l = rng.random_int(2, l - 3);
            let cut_w = rng.random_int(2, w - 3);
            let whole = l * w;
            let cut = cut_l * cut_w;
            let area = whole - cut;
            let near = [whole, whole + cut, 2 * (l + w)];
            let distractors = numeric_options(rng, area, &near, 1, positive, cm2);
            Draft::text(
                format!(
                    "An L-shape is made by cutting a {cut_l} cm by {cut_w} cm rectangle from the corner \
                     of a {l} cm by {w} cm rectangle. What is its area?"
                ),
                cm2(area),
                distractors,
                format!("{l} × {w} − {cut_l} × {cut_w} = {whole} − {cut} = {}", cm2(area)),
            )
            .tag("area")
        }
        _ => {
            let mut base = rng.random_int(3, 20);
            let height = rng.random_int(3, 20);
            // Whole-number answers only.
            if (base * height) % 2 == 1 {
                base += 1;
            }
            let area = base * height / 2;
            let near = [base * height, area + base, area - height];
            let distractors = numeric_options(rng, area, &near, 1, positive, cm2);
            Draft::text(
                format!("A triangle has a base of {base} cm and a height of {height} cm. What is its area?"),
                cm2(area),
                distractors,
                format!("Area = {base} × {height} ÷ 2 = {}", cm2(area)),
            )
            .tag("area")
        }
    }
}

// ---------------------------------------------------------------------------
// Averages
// ---------------------------------------------------------------------------

pub fn mean(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let (n, spread) = match d.level() {
        1 => (3usize, 3),
        2 => (4, 5),
        3 => (5, 8),
        4 => (5, 15),
        _ => (6, 25),
    };
    // Large enough that no value can reach zero after the balancing step.
    let floor = (n as i64 - 1) * spread + 1;
    let mean = rng.random_int(floor, floor + 10 * d.level() as i64);

    let mut deviations: Vec<i64> = (0..n - 1).map(|_| rng.random_int(-spread, spread)).collect();
    let balance = -deviations.iter().sum::<i64>();
    deviations.push(balance);
    let values: Vec<i64> = deviations.iter().map(|dv| mean + dv).collect();

    let total: i64 = values.iter().sum();
    let count = n as i64;
    let mut sorted = values.clone();
    sorted.sort_unstable();
    let median_ish = sorted[n / 2];
    let near = [median_ish, total / (count - 1), mean + 1];
    let distractors = numeric_options(rng, mean, &near, 1, positive, plain);

    let listed: Vec<String> = values.iter().map(i64::to_string).collect();
    Draft::text(
        format!("What is the mean of {}?", listed.join(", ")),
        mean.to_string(),
        distractors,
        format!("Total = {} = {total}, and {total} ÷ {count} = {mean}", listed.join(" + ")),
    )
    .tag("averages")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::helpers::finish;
    use crate::question_engine::models::Topic;

    fn run(build: fn(&mut SeededRng, Difficulty) -> Draft, topic: Topic, seed: u32, level: u8) -> crate::question_engine::models::Question {
        let mut rng = SeededRng::new(seed);
        let d = Difficulty::clamped(i64::from(level));
        let draft = build(&mut rng, d);
        finish(&mut rng, topic, seed, d, draft)
    }

    fn correct_label(q: &crate::question_engine::models::Question) -> String {
        q.correct_option().and_then(|o| o.content.as_text()).unwrap_or_default().to_string()
    }

    #[test]
    fn arithmetic_level_one_addition_has_exact_explanation() {
        let mut seen_addition = false;
        for seed in 0..200u32 {
            let q = run(arithmetic, Topic::Arithmetic, seed, 1);
            let label = correct_label(&q);
            let Some((a, rest)) = q.explanation.split_once(" + ") else { continue };
            seen_addition = true;
            let (b, answer) = rest.split_once(" = ").expect("explanation has '='");
            let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
            assert!((2..=20).contains(&a) && (2..=20).contains(&b), "operands {a}, {b} out of range");
            assert_eq!(q.explanation, format!("{a} + {b} = {}", a + b));
            assert_eq!(answer, label);
        }
        assert!(seen_addition, "no addition question in 200 seeds");
    }

    #[test]
    fn subtraction_never_goes_negative() {
        for level in 1..=5 {
            for seed in 0..100u32 {
                let q = run(arithmetic, Topic::Arithmetic, seed, level);
                for o in &q.options {
                    let v: i64 = o.content.as_text().unwrap().parse().unwrap();
                    assert!(v >= 0, "negative option {v} at level {level} seed {seed}");
                }
            }
        }
    }

    #[test]
    fn money_labels_are_well_formed_and_positive() {
        for level in 1..=5 {
            for seed in 0..100u32 {
                let q = run(money, Topic::Money, seed, level);
                for o in &q.options {
                    let text = o.content.as_text().unwrap();
                    let rest = text.strip_prefix('£').unwrap_or_else(|| panic!("missing £ in {text}"));
                    let (pounds, pence) = rest.split_once('.').unwrap_or_else(|| panic!("bad money {text}"));
                    assert!(pounds.chars().all(|c| c.is_ascii_digit()) && !pounds.is_empty(), "{text}");
                    assert!(pence.len() == 2 && pence.chars().all(|c| c.is_ascii_digit()), "{text}");
                    assert_ne!(text, "£0.00");
                }
            }
        }
    }

    #[test]
    fn time_labels_are_valid_clock_times() {
        for level in 1..=5 {
            for seed in 0..100u32 {
                let q = run(time, Topic::Time, seed, level);
                for o in &q.options {
                    let text = o.content.as_text().unwrap();
                    let (h, m) = text.split_once(':').unwrap_or_else(|| panic!("bad time {text}"));
                    assert_eq!((h.len(), m.len()), (2, 2), "{text}");
                    let (h, m): (u32, u32) = (h.parse().unwrap(), m.parse().unwrap());
                    assert!(h < 24 && m < 60, "{text}");
                }
            }
        }
    }

    #[test]
    fn division_answers_are_whole() {
        for level in 1..=5 {
            for seed in 0..50u32 {
                let q = run(division, Topic::Division, seed, level);
                let (lhs, q_str) = q.explanation.split_once(" = ").unwrap();
                let (dividend, divisor) = lhs.split_once(" ÷ ").unwrap();
                let (dividend, divisor, quotient): (i64, i64, i64) =
                    (dividend.parse().unwrap(), divisor.parse().unwrap(), q_str.parse().unwrap());
                assert_eq!(dividend, divisor * quotient);
            }
        }
    }

    #[test]
    fn mean_values_stay_positive() {
        for level in 1..=5 {
            for seed in 0..100u32 {
                let q = run(mean, Topic::Mean, seed, level);
                let list = q.prompt.trim_start_matches("What is the mean of ").trim_end_matches('?');
                assert!(list.split(", ").all(|v| v.parse::<i64>().unwrap() > 0), "{}", q.prompt);
            }
        }
    }

    #[test]
    fn rounding_half_up() {
        assert_eq!(round_half_up(45, 10), 50);
        assert_eq!(round_half_up(44, 10), 40);
        assert_eq!(round_half_up(1500, 1000), 2000);
    }
}
