//! # quiz_item_gen
//!
//! A fully offline, deterministic generator of multiple-choice practice
//! questions for maths, English, verbal reasoning and non-verbal reasoning.
//!
//! There is no question bank: every item is built on demand from a `u32`
//! seed and a difficulty from 1 to 5.  Text topics derive an answer and
//! synthesise near-miss distractors; non-verbal topics build shapes, render
//! them to standalone SVG and keep only options that *look* different.
//!
//! ## How it works
//!
//! 1. Pick a [`Topic`] (or a whole [`Subject`] through [`TopicSelector`]) and
//!    a [`Difficulty`].
//! 2. Call [`generate`] with a seed, or [`generate_one`] for a fresh one.  The
//!    topic's generator draws everything from a [`SeededRng`] in a fixed
//!    order, so the same inputs always give the same question.
//! 3. The returned [`Question`] carries the prompt, four lettered options,
//!    the correct id, an explanation, and the seed that reproduces it.
//!
//! Topics without a generator yet return `None` rather than an error; use
//! [`available_topics`] to list what is implemented.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_item_gen::{generate, generate_batch_seeded, Difficulty, Topic};
//!
//! let d = Difficulty::new(2).unwrap();
//! let q = generate(Topic::Arithmetic, 42, d).unwrap();
//! println!("{}", q.prompt);
//! for opt in &q.options {
//!     let mark = if opt.id == q.correct_option_id { "+" } else { " " };
//!     println!("[{mark}] {}: {:?}", opt.id, opt.content);
//! }
//!
//! // Same seed, same question.
//! assert_eq!(generate(Topic::Arithmetic, 42, d), Some(q));
//!
//! // A reproducible mixed quiz.
//! let quiz = generate_batch_seeded(&[Topic::Synonyms, Topic::Rotation], 4, d, Some(7));
//! assert_eq!(quiz.len(), 4);
//! ```
//!
//! Quizzes can also be described in TOML and loaded with [`QuizPlan`].

pub mod question_engine;

pub use question_engine::{
    available_topics, generate, generate_batch, generate_batch_seeded, generate_for,
    generate_one, is_implemented, AnswerFormat, AnswerOption, Difficulty, OptionContent,
    Question, QuizError, QuizPlan, SeededRng, Subject, Topic, TopicSelector,
};

#[cfg(test)]
mod tests;
