use rand::RngCore;
use tracing::debug;

use crate::question_engine::{
    geometry,
    helpers::finish,
    models::{Difficulty, Question, Subject, Topic, TopicSelector},
    rng::SeededRng,
    topics::{english, maths, verbal, Build},
};

/// Every implemented topic and its builder.  Topics missing from this table
/// are known to the model but have no generator yet.
static REGISTRY: &[(Topic, Build)] = &[
    // Maths
    (Topic::Arithmetic,      maths::arithmetic),
    (Topic::Multiplication,  maths::multiplication),
    (Topic::Division,        maths::division),
    (Topic::Fractions,       maths::fractions),
    (Topic::Decimals,        maths::decimals),
    (Topic::Percentages,     maths::percentages),
    (Topic::Algebra,         maths::algebra),
    (Topic::Money,           maths::money),
    (Topic::Time,            maths::time),
    (Topic::NumberSequences, maths::number_sequences),
    (Topic::Rounding,        maths::rounding),
    (Topic::Ratio,           maths::ratio),
    (Topic::AreaPerimeter,   maths::area_perimeter),
    (Topic::Mean,            maths::mean),
    // English
    (Topic::Synonyms,        english::synonyms),
    (Topic::Antonyms,        english::antonyms),
    (Topic::Spelling,        english::spelling),
    (Topic::WordClasses,     english::word_classes),
    (Topic::Punctuation,     english::punctuation),
    (Topic::Comprehension,   english::comprehension),
    // Verbal reasoning
    (Topic::LetterSeries,    verbal::letter_series),
    (Topic::LetterCodes,     verbal::letter_codes),
    (Topic::HiddenWords,     verbal::hidden_words),
    (Topic::Analogies,       verbal::analogies),
    (Topic::OddWordOut,      verbal::odd_word_out),
    (Topic::CompoundWords,   verbal::compound_words),
    // Non-verbal reasoning
    (Topic::ShapeSeries,     geometry::series::build),
    (Topic::ShapeMatrices,   geometry::matrices::build),
    (Topic::Rotation,        geometry::rotation::build),
    (Topic::Reflection,      geometry::reflection::build),
    (Topic::OddShapeOut,     geometry::odd_one_out::build),
];

fn lookup(topic: Topic) -> Option<Build> {
    REGISTRY.iter().find(|(t, _)| *t == topic).map(|(_, build)| *build)
}

pub fn is_implemented(topic: Topic) -> bool {
    lookup(topic).is_some()
}

/// Implemented topics of one subject, in registry order.
pub fn available_topics(subject: Subject) -> Vec<Topic> {
    REGISTRY
        .iter()
        .map(|(t, _)| *t)
        .filter(|t| t.subject() == subject)
        .collect()
}

/// Deterministic entry point: the same `(topic, seed, difficulty)` always
/// yields the same question.  `None` means the topic has no generator yet.
pub fn generate(topic: Topic, seed: u32, difficulty: Difficulty) -> Option<Question> {
    let Some(build) = lookup(topic) else {
        debug!(topic = %topic.key(), "no generator registered");
        return None;
    };
    let mut rng = SeededRng::new(seed);
    let draft = build(&mut rng, difficulty);
    Some(finish(&mut rng, topic, seed, difficulty, draft))
}

/// One question with a fresh seed from OS entropy.
pub fn generate_one(topic: Topic, difficulty: Difficulty) -> Option<Question> {
    generate(topic, rand::thread_rng().next_u32(), difficulty)
}

/// Resolve a selector and generate.
///
/// A subject selector picks one of that subject's implemented topics with the
/// seed's own stream, then runs the chosen generator from the same seed.
pub fn generate_for(selector: TopicSelector, seed: u32, difficulty: Difficulty) -> Option<Question> {
    let topic = match selector {
        TopicSelector::Topic(topic) => topic,
        TopicSelector::Subject(subject) => {
            let topics = available_topics(subject);
            if topics.is_empty() {
                debug!(%subject, "subject has no implemented topics");
                return None;
            }
            *SeededRng::new(seed).pick(&topics)
        }
    };
    generate(topic, seed, difficulty)
}
