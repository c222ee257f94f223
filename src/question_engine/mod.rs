//! Core question engine: seeded content generation across four subjects.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: subjects, topics, difficulty, questions and options |
//! | `rng`       | mulberry32 stream with int/pick/shuffle helpers |
//! | `banks`     | Static level-tagged word, sentence and passage tables |
//! | `helpers`   | Draft skeleton, distractor search, option shuffle and assembly |
//! | `topics`    | 26 text generators grouped by subject |
//! | `geometry`  | Shape model, SVG renderer and the 5 visual families |
//! | `generator` | Static topic registry and the single-question entry points |
//! | `batch`     | Round-robin quiz assembly and TOML quiz plans |
//! | `error`     | `QuizError` for the fallible front |

pub mod banks;
pub mod batch;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod helpers;
pub mod models;
pub mod rng;
pub mod topics;

// Re-export the public API surface so callers can use
// `question_engine::generate_one` without reaching into sub-modules.
pub use batch::{generate_batch, generate_batch_seeded, QuizPlan, MAX_BATCH};
pub use error::QuizError;
pub use generator::{available_topics, generate, generate_for, generate_one, is_implemented};
pub use models::{
    AnswerFormat, AnswerOption, Difficulty, OptionContent, Question, Subject, Topic,
    TopicSelector,
};
pub use rng::SeededRng;
