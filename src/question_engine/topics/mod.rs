//! Scalar topic generators grouped by subject.
//!
//! Each module holds the text-answer generators for one subject.  Every
//! public builder has the same shape:
//!
//! ```ignore
//! pub fn <topic>(rng: &mut SeededRng, difficulty: Difficulty) -> Draft
//! ```
//!
//! Builders decide content, answer, distractors and explanation; the
//! registry in `generator.rs` hands the draft to `helpers::finish`, which
//! shuffles and letters the options.  Visual topics live under `geometry`.

use crate::question_engine::{helpers::Draft, models::Difficulty, rng::SeededRng};

/// Arithmetic, number and measure topics.
pub mod maths;
/// Vocabulary, spelling, grammar and comprehension.
pub mod english;
/// Letter and word puzzles.
pub mod verbal;

/// Signature shared by every registered builder, scalar or visual.
pub type Build = fn(&mut SeededRng, Difficulty) -> Draft;
