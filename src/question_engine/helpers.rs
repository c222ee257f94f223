//! Shared building blocks for every generator.
//!
//! Each generator follows the same skeleton: pick content for the difficulty
//! band, derive the answer, synthesise three distractors, shuffle, and write
//! an explanation that repeats the working.  The pieces that are identical
//! across topics live here so topic files only contain topic logic.
//!
//! ## Distractor search
//!
//! Searches draw candidates from the stream under an explicit attempt budget
//! ([`MAX_ATTEMPTS`]).  When the budget runs out a deterministic padding rule
//! takes over, so a search always ends with exactly three distractors.
//!
//! ## RNG ordering
//!
//! [`finish`] performs the option shuffle, so it must be the last stream call
//! in a generator.  Anything drawn after it would not affect the question and
//! anything drawn before it is part of that generator's fixed order.

use std::collections::HashSet;

use tracing::trace;

use crate::question_engine::{
    models::{AnswerFormat, AnswerOption, Difficulty, OptionContent, Question, Topic},
    rng::SeededRng,
};

pub const OPTION_COUNT: usize = 4;
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Upper bound on random draws in any distractor search.
pub const MAX_ATTEMPTS: usize = 60;

/// Generic answers used only when a text search could not find three
/// distinct candidates of its own.
const LAST_RESORT: [&str; 4] = [
    "None of these",
    "Cannot be worked out",
    "More than one of these",
    "Not enough information",
];

const OPTION_IDS: [&str; OPTION_COUNT] = ["A", "B", "C", "D"];

// ---------------------------------------------------------------------------
// Draft: everything a generator decides before the shuffle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Draft {
    pub prompt: String,
    pub passage: Option<String>,
    pub visual: Option<String>,
    pub correct: OptionContent,
    pub distractors: Vec<OptionContent>,
    pub explanation: String,
    pub tags: Vec<String>,
}

impl Draft {
    pub fn new(
        prompt: impl Into<String>,
        correct: OptionContent,
        distractors: Vec<OptionContent>,
        explanation: impl Into<String>,
    ) -> Self {
        Draft {
            prompt: prompt.into(),
            passage: None,
            visual: None,
            correct,
            distractors,
            explanation: explanation.into(),
            tags: Vec::new(),
        }
    }

    /// Text-only draft from plain labels.
    pub fn text(
        prompt: impl Into<String>,
        correct: impl Into<String>,
        distractors: Vec<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Draft::new(
            prompt,
            OptionContent::text(correct),
            distractors.into_iter().map(OptionContent::text).collect(),
            explanation,
        )
    }

    pub fn with_passage(mut self, passage: impl Into<String>) -> Self {
        self.passage = Some(passage.into());
        self
    }

    pub fn with_visual(mut self, svg: impl Into<String>) -> Self {
        self.visual = Some(svg.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Distractor synthesis
// ---------------------------------------------------------------------------

/// Typical perturbation size for an answer of this magnitude.
pub fn magnitude_spread(correct: i64) -> i64 {
    (correct.abs() / 10).clamp(3, 50)
}

/// Three distinct integers near `correct`.
///
/// Candidates are `correct ± k·step` with `k` drawn from `1..=spread`; a
/// candidate is rejected when it equals the answer, repeats an earlier one, or
/// fails `valid`.  After [`MAX_ATTEMPTS`] draws the remaining slots are filled
/// with `correct + step, correct - step, correct + 2·step, …` in that order.
pub fn numeric_distractors(
    rng: &mut SeededRng,
    correct: i64,
    step: i64,
    spread: i64,
    valid: impl Fn(i64) -> bool,
) -> Vec<i64> {
    let step = step.max(1);
    let spread = spread.max(1);
    let mut out: Vec<i64> = Vec::with_capacity(DISTRACTOR_COUNT);
    let accept = |c: i64, out: &Vec<i64>| c != correct && valid(c) && !out.contains(&c);

    let mut attempts = 0;
    while out.len() < DISTRACTOR_COUNT && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let k = rng.random_int(1, spread);
        let sign = if rng.chance(0.5) { 1 } else { -1 };
        let candidate = correct + sign * k * step;
        if accept(candidate, &out) {
            out.push(candidate);
        }
    }

    if out.len() < DISTRACTOR_COUNT {
        trace!(correct, found = out.len(), "numeric distractor search exhausted, padding");
        let mut k = 1;
        while out.len() < DISTRACTOR_COUNT {
            for candidate in [correct + k * step, correct - k * step] {
                if out.len() < DISTRACTOR_COUNT && accept(candidate, &out) {
                    out.push(candidate);
                }
            }
            k += 1;
            // Upward offsets satisfy every validity rule used in this crate
            // (non-negative, non-zero, bounded below), so this is reached only
            // by a broken predicate.
            if k > 10_000 {
                let mut pad = correct + k * step;
                while out.len() < DISTRACTOR_COUNT {
                    if !out.contains(&pad) {
                        out.push(pad);
                    }
                    pad += step;
                }
            }
        }
    }
    out
}

/// Collect up to three distinct options from `candidates`, skipping any that
/// look like `correct` or like an option already kept.  Comparison uses
/// [`OptionContent::normalized`], never the parameters that produced them.
pub fn distinct_options<I>(correct: &OptionContent, candidates: I) -> Vec<OptionContent>
where
    I: IntoIterator<Item = OptionContent>,
{
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(correct.normalized());
    let mut out = Vec::with_capacity(DISTRACTOR_COUNT);
    for candidate in candidates {
        if out.len() == DISTRACTOR_COUNT {
            break;
        }
        if seen.insert(candidate.normalized()) {
            out.push(candidate);
        }
    }
    out
}

/// Three distinct words from `pool`, none equal to `correct`
/// (case-insensitively).  The pool is shuffled once and walked in order;
/// `fallback(i)` supplies the i-th padding word when the pool runs dry.
pub fn text_distractors(
    rng: &mut SeededRng,
    correct: &str,
    pool: &[&str],
    fallback: impl Fn(usize) -> String,
) -> Vec<String> {
    let mut shuffled: Vec<&str> = pool.to_vec();
    rng.shuffle(&mut shuffled);

    let lowered = correct.to_lowercase();
    let mut out: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
    for word in shuffled.into_iter().take(MAX_ATTEMPTS) {
        if out.len() == DISTRACTOR_COUNT {
            break;
        }
        let w = word.to_lowercase();
        if w != lowered && !out.iter().any(|o| o.to_lowercase() == w) {
            out.push(word.to_string());
        }
    }

    let mut i = 0;
    while out.len() < DISTRACTOR_COUNT && i < MAX_ATTEMPTS {
        let word = fallback(i);
        let w = word.to_lowercase();
        if w != lowered && !out.iter().any(|o| o.to_lowercase() == w) {
            out.push(word);
        }
        i += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Seconds allowed per question.
pub fn time_limit_secs(difficulty: Difficulty, format: AnswerFormat) -> u32 {
    let base = match difficulty.level() {
        1 => 30,
        2 => 40,
        3 => 50,
        4 => 60,
        _ => 75,
    };
    match format {
        AnswerFormat::MultipleChoice => base,
        AnswerFormat::VisualChoice => base + 15,
    }
}

/// XP awarded for a correct answer.
pub fn xp_reward(difficulty: Difficulty) -> u32 {
    match difficulty.level() {
        1 => 10,
        2 => 15,
        3 => 20,
        4 => 30,
        _ => 40,
    }
}

pub fn question_id(topic: Topic, difficulty: Difficulty, seed: u32) -> String {
    format!("{}-{}-{:08X}", topic.code(), difficulty, seed)
}

/// Shuffle the four options, letter them A–D and wrap everything into the
/// final [`Question`].  This is the last stream call of every generator.
pub fn finish(
    rng: &mut SeededRng,
    topic: Topic,
    seed: u32,
    difficulty: Difficulty,
    draft: Draft,
) -> Question {
    let Draft { prompt, passage, visual, correct, distractors, explanation, mut tags } = draft;

    let mut distractors = distinct_options(&correct, distractors);
    if distractors.len() < DISTRACTOR_COUNT {
        trace!(topic = %topic.key(), found = distractors.len(), "padding with last-resort options");
        let extra = LAST_RESORT.iter().map(|s| OptionContent::text(*s));
        let mut padded = distractors;
        padded.extend(extra);
        distractors = distinct_options(&correct, padded);
    }

    let format = match correct {
        OptionContent::Visual { .. } => AnswerFormat::VisualChoice,
        OptionContent::Text { .. } => AnswerFormat::MultipleChoice,
    };

    let mut slots: Vec<(bool, OptionContent)> = Vec::with_capacity(OPTION_COUNT);
    slots.push((true, correct));
    slots.extend(distractors.into_iter().map(|d| (false, d)));
    rng.shuffle(&mut slots);

    let mut correct_option_id = String::new();
    let options: Vec<AnswerOption> = slots
        .into_iter()
        .zip(OPTION_IDS)
        .map(|((is_correct, content), id)| {
            if is_correct {
                correct_option_id = id.to_string();
            }
            AnswerOption { id: id.to_string(), content }
        })
        .collect();

    let subject = topic.subject();
    tags.push(subject.prefix().to_string());
    tags.push(format!("difficulty-{}", difficulty));

    Question {
        id: question_id(topic, difficulty, seed),
        subject,
        topic,
        difficulty,
        format,
        prompt,
        passage,
        visual,
        options,
        correct_option_id,
        explanation,
        time_limit_secs: time_limit_secs(difficulty, format),
        xp_reward: xp_reward(difficulty),
        generator: topic.key(),
        seed,
        tags,
    }
}

// ---------------------------------------------------------------------------
// Formatting / small maths
// ---------------------------------------------------------------------------

pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `450` → `"£4.50"`.  Callers never pass negative amounts.
pub fn format_money(pence: i64) -> String {
    format!("£{}.{:02}", pence / 100, pence % 100)
}

/// Minutes since midnight → 24-hour `"HH:MM"`, wrapping past midnight.
pub fn format_clock(minutes: i64) -> String {
    let m = minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// `95` → `"1 h 35 min"`, `60` → `"1 h"`, `20` → `"20 min"`.
pub fn format_duration(minutes: i64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Fixed-point value with `places` decimals (`format_fixed(1205, 2)` → `"12.05"`).
pub fn format_fixed(scaled: i64, places: u32) -> String {
    let unit = 10i64.pow(places);
    if places == 0 {
        return scaled.to_string();
    }
    format!(
        "{}.{:0width$}",
        scaled / unit,
        scaled % unit,
        width = places as usize
    )
}

/// Join items as "a, b and c".
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_distractors_are_distinct_valid_and_not_the_answer() {
        for seed in 0..200 {
            let mut rng = SeededRng::new(seed);
            let d = numeric_distractors(&mut rng, 2, 1, 3, |v| v >= 0);
            assert_eq!(d.len(), DISTRACTOR_COUNT);
            assert!(d.iter().all(|&v| v >= 0 && v != 2));
            let mut s = d.clone();
            s.sort_unstable();
            s.dedup();
            assert_eq!(s.len(), DISTRACTOR_COUNT);
        }
    }

    #[test]
    fn numeric_fallback_engages_when_predicate_is_tight() {
        // Only values above 1000 pass, which random offsets of ±2 never hit.
        let mut rng = SeededRng::new(5);
        let d = numeric_distractors(&mut rng, 998, 1, 2, |v| v > 1000);
        assert_eq!(d, vec![1001, 1002, 1003]);
    }

    #[test]
    fn text_distractors_pad_from_fallback() {
        let mut rng = SeededRng::new(3);
        let d = text_distractors(&mut rng, "cat", &["cat", "Cat"], |i| format!("dog{i}"));
        assert_eq!(d, vec!["dog0", "dog1", "dog2"]);
    }

    #[test]
    fn finish_keeps_the_correct_option_through_the_shuffle() {
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            let draft = Draft::text(
                "2 + 2?",
                "4",
                vec!["3".into(), "5".into(), "6".into()],
                "2 + 2 = 4",
            );
            let q = finish(&mut rng, Topic::Arithmetic, seed, Difficulty::clamped(1), draft);
            assert_eq!(q.options.len(), OPTION_COUNT);
            let correct = q.correct_option().expect("correct option present");
            assert_eq!(correct.content.as_text(), Some("4"));
        }
    }

    #[test]
    fn finish_pads_short_drafts() {
        let mut rng = SeededRng::new(1);
        let draft = Draft::text("?", "yes", vec!["yes".into(), "no".into()], "yes");
        let q = finish(&mut rng, Topic::Synonyms, 1, Difficulty::clamped(2), draft);
        assert_eq!(q.options.len(), OPTION_COUNT);
        let mut labels: Vec<String> = q.options.iter().map(|o| o.content.normalized()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), OPTION_COUNT);
    }

    #[test]
    fn formatting_helpers() {
        assert_eq!(format_money(450), "£4.50");
        assert_eq!(format_money(5), "£0.05");
        assert_eq!(format_clock(25 * 60 + 5), "01:05");
        assert_eq!(format_clock(-10), "23:50");
        assert_eq!(format_duration(95), "1 h 35 min");
        assert_eq!(format_duration(60), "1 h");
        assert_eq!(format_fixed(1205, 2), "12.05");
        assert_eq!(format_fixed(7, 1), "0.7");
        assert_eq!(join_list(&["a".into(), "b".into(), "c".into()]), "a, b and c");
    }
}
