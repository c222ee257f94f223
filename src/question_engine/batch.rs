//! Quiz assembly: cycle a topic list into a batch of independent questions.
//!
//! Item seeds come from one base stream, one `next_u32` per slot, so a batch
//! is reproducible from its base seed and every item is reproducible on its
//! own from the seed it carries.

use std::path::Path;

use rand::RngCore;
use serde::Deserialize;
use tracing::debug;

use crate::question_engine::{
    error::QuizError,
    generator::generate,
    models::{Difficulty, Question, Topic},
    rng::SeededRng,
};

/// Largest batch a plan may ask for.
pub const MAX_BATCH: usize = 200;

/// `count` questions cycling through `topics`, from an entropy seed.
pub fn generate_batch(topics: &[Topic], count: usize, difficulty: Difficulty) -> Vec<Question> {
    generate_batch_seeded(topics, count, difficulty, None)
}

/// Round-robin over `topics`.  Slots whose topic has no generator are
/// skipped, so the batch can come back shorter than `count`.
pub fn generate_batch_seeded(
    topics: &[Topic],
    count: usize,
    difficulty: Difficulty,
    base_seed: Option<u32>,
) -> Vec<Question> {
    if topics.is_empty() {
        return Vec::new();
    }
    let base_seed = base_seed.unwrap_or_else(|| rand::thread_rng().next_u32());
    let mut seeds = SeededRng::new(base_seed);

    let batch: Vec<Question> = topics
        .iter()
        .cycle()
        .take(count)
        .filter_map(|&topic| {
            let seed = seeds.next_u32();
            let q = generate(topic, seed, difficulty);
            if q.is_none() {
                debug!(topic = %topic.key(), seed, "skipping unimplemented topic");
            }
            q
        })
        .collect();

    debug!(requested = count, produced = batch.len(), base_seed, %difficulty, "batch assembled");
    batch
}

// ---------------------------------------------------------------------------
// Quiz plans
// ---------------------------------------------------------------------------

/// A quiz described in TOML:
///
/// ```toml
/// topics = ["maths.arithmetic", "nvr.rotation"]
/// count = 10
/// difficulty = 3
/// seed = 42        # optional
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizPlan {
    pub topics: Vec<String>,
    pub count: usize,
    #[serde(default = "default_difficulty")]
    pub difficulty: i64,
    #[serde(default)]
    pub seed: Option<u32>,
}

fn default_difficulty() -> i64 {
    i64::from(Difficulty::MIN)
}

impl QuizPlan {
    pub fn from_toml_str(s: &str) -> Result<Self, QuizError> {
        let plan: QuizPlan = toml::from_str(s)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Typed topics and difficulty, or the first problem found.
    pub fn validate(&self) -> Result<(Vec<Topic>, Difficulty), QuizError> {
        if self.topics.is_empty() {
            return Err(QuizError::InvalidPlan("topic list is empty".into()));
        }
        if self.count == 0 || self.count > MAX_BATCH {
            return Err(QuizError::InvalidPlan(format!(
                "count {} is outside 1..={MAX_BATCH}",
                self.count
            )));
        }
        let difficulty = u8::try_from(self.difficulty)
            .map_err(|_| QuizError::DifficultyOutOfRange(self.difficulty))
            .and_then(Difficulty::new)?;
        let topics = self
            .topics
            .iter()
            .map(|key| key.parse::<Topic>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok((topics, difficulty))
    }

    pub fn run(&self) -> Result<Vec<Question>, QuizError> {
        let (topics, difficulty) = self.validate()?;
        Ok(generate_batch_seeded(&topics, self.count, difficulty, self.seed))
    }
}
