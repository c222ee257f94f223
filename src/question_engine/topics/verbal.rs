//! Verbal-reasoning generators: alphabet puzzles built from arithmetic on
//! letter positions, and word puzzles drawn from `banks::verbal`.

use crate::question_engine::{
    banks::{band, verbal},
    helpers::{join_list, text_distractors, Draft},
    models::Difficulty,
    rng::SeededRng,
};

const ALPHABET_LEN: i64 = 26;

/// Alphabet position (wrapping) → capital letter.
fn letter(i: i64) -> char {
    char::from(b'A' + i.rem_euclid(ALPHABET_LEN) as u8)
}

fn position(c: char) -> i64 {
    i64::from(c.to_ascii_uppercase() as u8 - b'A')
}

fn signed(step: i64) -> String {
    if step >= 0 { format!("+{step}") } else { step.to_string() }
}

fn places(n: i64) -> String {
    if n.abs() == 1 { "1 place".to_string() } else { format!("{} places", n.abs()) }
}

// ---------------------------------------------------------------------------
// Letter series
// ---------------------------------------------------------------------------

pub fn letter_series(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let level = d.level();
    let shown = if level <= 2 { 4 } else { 5 };
    let start = rng.random_int(0, ALPHABET_LEN - 1);

    if level == 5 {
        return letter_pair_series(rng, start, shown);
    }

    // Offsets of every term (shown terms plus the answer) from `start`.
    let (steps, rule): (Vec<i64>, String) = match level {
        1 => {
            let step = rng.random_int(1, 2);
            (vec![step; shown], format!("each letter moves forward {}", places(step)))
        }
        2 => {
            let step = rng.random_int(2, 3) * if rng.chance(0.5) { 1 } else { -1 };
            let dir = if step > 0 { "forward" } else { "back" };
            (vec![step; shown], format!("each letter moves {dir} {}", places(step)))
        }
        3 => {
            let a = rng.random_int(1, 3);
            let mut b = rng.random_int(1, 3);
            if b == a {
                b = a % 3 + 1;
            }
            let steps = (0..shown).map(|i| if i % 2 == 0 { a } else { b }).collect();
            (steps, format!("the steps alternate {} and {}", signed(a), signed(b)))
        }
        _ => {
            let first = rng.random_int(1, 2);
            let steps = (0..shown as i64).map(|i| first + i).collect();
            (steps, format!("the step grows by one each time, starting at {}", signed(first)))
        }
    };

    let mut terms: Vec<i64> = vec![start];
    for s in &steps {
        let next = terms[terms.len() - 1] + s;
        terms.push(next);
    }
    let answer_pos = terms[shown];
    let answer = letter(answer_pos).to_string();

    // Near misses: neighbours of the answer and repeating the previous step.
    let last_step = steps[shown - 2];
    let candidates: Vec<String> = [1, -1, 2, -2, 3, -3]
        .iter()
        .map(|k| letter(answer_pos + k).to_string())
        .chain(std::iter::once(letter(terms[shown - 1] + last_step).to_string()))
        .collect();
    let pool: Vec<&str> = candidates.iter().map(String::as_str).collect();
    let distractors = text_distractors(rng, &answer, &pool, |i| letter(answer_pos + 4 + i as i64).to_string());

    let series: Vec<String> = terms[..shown].iter().map(|&p| letter(p).to_string()).collect();
    Draft::text(
        format!("What letter comes next? {}, ?", series.join(", ")),
        answer.clone(),
        distractors,
        format!("The rule is: {rule}, so the next letter is {answer}"),
    )
    .tag("alphabet")
}

/// Two interleaved series written as letter pairs (`AZ, BY, CX, …`).
fn letter_pair_series(rng: &mut SeededRng, start: i64, shown: usize) -> Draft {
    let first_step = rng.random_int(1, 3);
    let second_step = rng.random_int(1, 3) * if rng.chance(0.5) { 1 } else { -1 };
    let second_start = rng.random_int(0, ALPHABET_LEN - 1);

    let pair = |i: i64| -> (i64, i64) { (start + first_step * i, second_start + second_step * i) };
    let label = |(x, y): (i64, i64)| format!("{}{}", letter(x), letter(y));

    let (ax, ay) = pair(shown as i64);
    let answer = label((ax, ay));
    let candidates: Vec<String> = [
        (ax + 1, ay),
        (ax, ay + 1),
        (ax - 1, ay),
        (ax, ay - 1),
        (ay, ax),
        (ax + first_step, ay + second_step),
    ]
    .into_iter()
    .map(label)
    .collect();
    let pool: Vec<&str> = candidates.iter().map(String::as_str).collect();
    let distractors = text_distractors(rng, &answer, &pool, |i| label((ax + 2 + i as i64, ay - 2)));

    let series: Vec<String> = (0..shown as i64).map(|i| label(pair(i))).collect();
    Draft::text(
        format!("What pair comes next? {}, ?", series.join(", ")),
        answer.clone(),
        distractors,
        format!(
            "The first letters move {} and the second letters move {}, so the next pair is {answer}",
            signed(first_step),
            signed(second_step)
        ),
    )
    .tag("alphabet")
}

// ---------------------------------------------------------------------------
// Letter codes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Cipher {
    Shift(i64),
    /// A↔Z, B↔Y, …
    Mirror,
}

impl Cipher {
    fn encode(self, word: &str) -> String {
        word.chars()
            .map(|c| match self {
                Cipher::Shift(s) => letter(position(c) + s),
                Cipher::Mirror => letter(ALPHABET_LEN - 1 - position(c)),
            })
            .collect()
    }

    fn describe(self) -> String {
        match self {
            Cipher::Shift(s) if s > 0 => format!("each letter moves forward {}", places(s)),
            Cipher::Shift(s) => format!("each letter moves back {}", places(s)),
            Cipher::Mirror => "each letter is swapped with its mirror in the alphabet (A and Z, B and Y)".to_string(),
        }
    }
}

pub fn letter_codes(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let words = rng.pick_n(&band(verbal::CODE_WORDS, d), 2);
    let (example, target) = (words[0].word, words[1].word);

    let magnitude = match d.level() {
        1 => 1,
        2 => rng.random_int(1, 2),
        3 => rng.random_int(1, 3),
        _ => rng.random_int(1, 5),
    };
    let backwards = d.level() >= 3 && rng.chance(0.5);
    let cipher = if d.level() == 5 && rng.chance(0.4) {
        Cipher::Mirror
    } else if backwards {
        Cipher::Shift(-magnitude)
    } else {
        Cipher::Shift(magnitude)
    };

    let answer = cipher.encode(target);

    // Off-by-one shifts, the wrong direction, and the right letters reversed.
    let near_shift = match cipher {
        Cipher::Shift(s) => s,
        Cipher::Mirror => 0,
    };
    let candidates: Vec<String> = vec![
        Cipher::Shift(near_shift + 1).encode(target),
        Cipher::Shift(near_shift - 1).encode(target),
        Cipher::Shift(-near_shift).encode(target),
        answer.chars().rev().collect(),
        cipher.encode(example),
    ];
    let pool: Vec<&str> = candidates.iter().map(String::as_str).collect();
    let distractors = text_distractors(rng, &answer, &pool, |i| Cipher::Shift(near_shift + 2 + i as i64).encode(target));

    Draft::text(
        format!(
            "If {example} is written in code as {}, what is the code for {target}?",
            cipher.encode(example)
        ),
        answer.clone(),
        distractors,
        format!("In this code {}, so {target} becomes {answer}", cipher.describe()),
    )
    .tag("codes")
}

// ---------------------------------------------------------------------------
// Hidden words
// ---------------------------------------------------------------------------

fn letters_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphabetic).collect::<String>().to_lowercase()
}

pub fn hidden_words(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(verbal::HIDDEN_WORDS, d));
    let joined = letters_only(entry.sentence);

    // A pool word hiding in the same sentence would be a second right answer.
    let pool: Vec<&str> = verbal::HIDDEN_WORD_POOL
        .iter()
        .copied()
        .filter(|w| !joined.contains(w))
        .collect();
    let distractors = text_distractors(rng, entry.hidden, &pool, |i| format!("{}{}", entry.hidden, i + 1));

    let words: Vec<&str> = entry.sentence.split_whitespace().collect();
    let span = words
        .windows(2)
        .find(|w| letters_only(&format!("{}{}", w[0], w[1])).contains(entry.hidden))
        .map(|w| format!("{} {}", w[0], w[1]))
        .unwrap_or_else(|| entry.sentence.to_string());

    Draft::text(
        format!(
            "A word is hidden across the end of one word and the start of the next. Find it: \"{}\"",
            entry.sentence
        ),
        entry.hidden,
        distractors,
        format!("Reading straight through \"{span}\" spells the hidden word {}", entry.hidden),
    )
    .tag("hidden-words")
}

// ---------------------------------------------------------------------------
// Analogies
// ---------------------------------------------------------------------------

pub fn analogies(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(verbal::ANALOGIES, d));
    let distractors = text_distractors(rng, entry.d, entry.wrong, |i| format!("{}{}", entry.c, i + 1));

    Draft::text(
        format!("{} is to {} as {} is to ?", entry.a, entry.b, entry.c),
        entry.d,
        distractors,
        format!("Just as {}, {} goes with {}", entry.relation, entry.c, entry.d),
    )
    .tag("analogies")
}

// ---------------------------------------------------------------------------
// Odd word out
// ---------------------------------------------------------------------------

pub fn odd_word_out(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let candidates = band(verbal::CATEGORIES, d);
    let group = *rng.pick(&candidates);
    let members = rng.pick_n(group.members, 3);

    let mut others: Vec<&verbal::Category> =
        candidates.iter().copied().filter(|c| c.name != group.name).collect();
    if others.is_empty() {
        others = verbal::CATEGORIES.iter().filter(|c| c.name != group.name).collect();
    }
    let intruder_group = *rng.pick(&others);
    let odd = *rng.pick(intruder_group.members);

    // Categories are disjoint, so the three members are the only distractors needed.
    let distractors: Vec<String> = members.iter().map(|m| m.to_string()).collect();
    let listed: Vec<String> = members.iter().map(|m| m.to_string()).collect();

    Draft::text(
        "Which word is the odd one out?",
        odd,
        distractors,
        format!(
            "{} are all {}, so the odd one out is {odd}",
            join_list(&listed),
            group.name
        ),
    )
    .tag("categories")
}

// ---------------------------------------------------------------------------
// Compound words
// ---------------------------------------------------------------------------

pub fn compound_words(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(verbal::COMPOUNDS, d));
    let distractors = text_distractors(rng, entry.second, entry.wrong, |i| format!("{}{}", entry.second, i + 1));

    Draft::text(
        format!("Which word can go after '{}' to make a new word?", entry.first),
        entry.second,
        distractors,
        format!("{} + {} makes {}{}, so the answer is {}", entry.first, entry.second, entry.first, entry.second, entry.second),
    )
    .tag("compound-words")
}
