use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::question_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Subjects and topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Maths,
    English,
    VerbalReasoning,
    NonVerbalReasoning,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Maths,
        Subject::English,
        Subject::VerbalReasoning,
        Subject::NonVerbalReasoning,
    ];

    /// Namespace prefix used in topic keys (`"maths.arithmetic"`).
    pub fn prefix(self) -> &'static str {
        match self {
            Subject::Maths              => "maths",
            Subject::English            => "english",
            Subject::VerbalReasoning    => "verbal",
            Subject::NonVerbalReasoning => "nvr",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Subject::Maths              => "Maths",
            Subject::English            => "English",
            Subject::VerbalReasoning    => "Verbal Reasoning",
            Subject::NonVerbalReasoning => "Non-Verbal Reasoning",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Subject {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.prefix() == s)
            .ok_or_else(|| QuizError::UnknownSubject(s.to_string()))
    }
}

/// Every content category the practice tool knows about.
///
/// Not every topic has a generator yet; see
/// [`available_topics`](crate::question_engine::generator::available_topics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    // Maths
    Arithmetic,
    Multiplication,
    Division,
    Fractions,
    Decimals,
    Percentages,
    Algebra,
    Money,
    Time,
    NumberSequences,
    Rounding,
    Ratio,
    AreaPerimeter,
    Mean,
    Probability,
    Angles,
    WordProblems,
    // English
    Synonyms,
    Antonyms,
    Spelling,
    WordClasses,
    Punctuation,
    Comprehension,
    VocabularyInContext,
    CreativeWriting,
    // Verbal reasoning
    LetterSeries,
    LetterCodes,
    HiddenWords,
    Analogies,
    OddWordOut,
    CompoundWords,
    LogicPuzzles,
    NumberConnections,
    // Non-verbal reasoning
    ShapeSeries,
    ShapeMatrices,
    Rotation,
    Reflection,
    OddShapeOut,
    ShapeCodes,
    CubeNets,
}

impl Topic {
    pub const ALL: [Topic; 40] = [
        Topic::Arithmetic,
        Topic::Multiplication,
        Topic::Division,
        Topic::Fractions,
        Topic::Decimals,
        Topic::Percentages,
        Topic::Algebra,
        Topic::Money,
        Topic::Time,
        Topic::NumberSequences,
        Topic::Rounding,
        Topic::Ratio,
        Topic::AreaPerimeter,
        Topic::Mean,
        Topic::Probability,
        Topic::Angles,
        Topic::WordProblems,
        Topic::Synonyms,
        Topic::Antonyms,
        Topic::Spelling,
        Topic::WordClasses,
        Topic::Punctuation,
        Topic::Comprehension,
        Topic::VocabularyInContext,
        Topic::CreativeWriting,
        Topic::LetterSeries,
        Topic::LetterCodes,
        Topic::HiddenWords,
        Topic::Analogies,
        Topic::OddWordOut,
        Topic::CompoundWords,
        Topic::LogicPuzzles,
        Topic::NumberConnections,
        Topic::ShapeSeries,
        Topic::ShapeMatrices,
        Topic::Rotation,
        Topic::Reflection,
        Topic::OddShapeOut,
        Topic::ShapeCodes,
        Topic::CubeNets,
    ];

    pub fn subject(self) -> Subject {
        use Topic::*;
        match self {
            Arithmetic | Multiplication | Division | Fractions | Decimals | Percentages
            | Algebra | Money | Time | NumberSequences | Rounding | Ratio | AreaPerimeter
            | Mean | Probability | Angles | WordProblems => Subject::Maths,
            Synonyms | Antonyms | Spelling | WordClasses | Punctuation | Comprehension
            | VocabularyInContext | CreativeWriting => Subject::English,
            LetterSeries | LetterCodes | HiddenWords | Analogies | OddWordOut
            | CompoundWords | LogicPuzzles | NumberConnections => Subject::VerbalReasoning,
            ShapeSeries | ShapeMatrices | Rotation | Reflection | OddShapeOut | ShapeCodes
            | CubeNets => Subject::NonVerbalReasoning,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Topic::Arithmetic          => "arithmetic",
            Topic::Multiplication      => "multiplication",
            Topic::Division            => "division",
            Topic::Fractions           => "fractions",
            Topic::Decimals            => "decimals",
            Topic::Percentages         => "percentages",
            Topic::Algebra             => "algebra",
            Topic::Money               => "money",
            Topic::Time                => "time",
            Topic::NumberSequences     => "number_sequences",
            Topic::Rounding            => "rounding",
            Topic::Ratio               => "ratio",
            Topic::AreaPerimeter       => "area_perimeter",
            Topic::Mean                => "mean",
            Topic::Probability         => "probability",
            Topic::Angles              => "angles",
            Topic::WordProblems        => "word_problems",
            Topic::Synonyms            => "synonyms",
            Topic::Antonyms            => "antonyms",
            Topic::Spelling            => "spelling",
            Topic::WordClasses         => "word_classes",
            Topic::Punctuation         => "punctuation",
            Topic::Comprehension       => "comprehension",
            Topic::VocabularyInContext => "vocabulary_in_context",
            Topic::CreativeWriting     => "creative_writing",
            Topic::LetterSeries        => "letter_series",
            Topic::LetterCodes         => "letter_codes",
            Topic::HiddenWords         => "hidden_words",
            Topic::Analogies           => "analogies",
            Topic::OddWordOut          => "odd_word_out",
            Topic::CompoundWords       => "compound_words",
            Topic::LogicPuzzles        => "logic_puzzles",
            Topic::NumberConnections   => "number_connections",
            Topic::ShapeSeries         => "series",
            Topic::ShapeMatrices       => "matrices",
            Topic::Rotation            => "rotation",
            Topic::Reflection          => "reflection",
            Topic::OddShapeOut         => "odd_one_out",
            Topic::ShapeCodes          => "codes",
            Topic::CubeNets            => "cube_nets",
        }
    }

    /// Namespaced key, e.g. `"maths.arithmetic"` or `"nvr.rotation"`.
    pub fn key(self) -> String {
        format!("{}.{}", self.subject().prefix(), self.name())
    }

    /// Short prefix used in question ids.
    pub fn code(self) -> &'static str {
        match self {
            Topic::Arithmetic          => "AR",
            Topic::Multiplication      => "MU",
            Topic::Division            => "DV",
            Topic::Fractions           => "FR",
            Topic::Decimals            => "DC",
            Topic::Percentages         => "PC",
            Topic::Algebra             => "AL",
            Topic::Money               => "MO",
            Topic::Time                => "TM",
            Topic::NumberSequences     => "NS",
            Topic::Rounding            => "RD",
            Topic::Ratio               => "RA",
            Topic::AreaPerimeter       => "AP",
            Topic::Mean                => "ME",
            Topic::Probability         => "PB",
            Topic::Angles              => "AN",
            Topic::WordProblems        => "WP",
            Topic::Synonyms            => "SY",
            Topic::Antonyms            => "AT",
            Topic::Spelling            => "SP",
            Topic::WordClasses         => "WC",
            Topic::Punctuation         => "PU",
            Topic::Comprehension       => "CO",
            Topic::VocabularyInContext => "VC",
            Topic::CreativeWriting     => "CW",
            Topic::LetterSeries        => "LS",
            Topic::LetterCodes         => "LC",
            Topic::HiddenWords         => "HW",
            Topic::Analogies           => "AG",
            Topic::OddWordOut          => "OW",
            Topic::CompoundWords       => "CP",
            Topic::LogicPuzzles        => "LP",
            Topic::NumberConnections   => "NC",
            Topic::ShapeSeries         => "SS",
            Topic::ShapeMatrices       => "SM",
            Topic::Rotation            => "RO",
            Topic::Reflection          => "RF",
            Topic::OddShapeOut         => "OS",
            Topic::ShapeCodes          => "SC",
            Topic::CubeNets            => "CN",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Arithmetic          => "Addition & Subtraction",
            Topic::Multiplication      => "Multiplication",
            Topic::Division            => "Division",
            Topic::Fractions           => "Fractions of Amounts",
            Topic::Decimals            => "Decimals",
            Topic::Percentages         => "Percentages",
            Topic::Algebra             => "Solving Equations",
            Topic::Money               => "Money & Change",
            Topic::Time                => "Time",
            Topic::NumberSequences     => "Number Sequences",
            Topic::Rounding            => "Rounding",
            Topic::Ratio               => "Ratio",
            Topic::AreaPerimeter       => "Area & Perimeter",
            Topic::Mean                => "Averages",
            Topic::Probability         => "Probability",
            Topic::Angles              => "Angles",
            Topic::WordProblems        => "Word Problems",
            Topic::Synonyms            => "Synonyms",
            Topic::Antonyms            => "Antonyms",
            Topic::Spelling            => "Spelling",
            Topic::WordClasses         => "Word Classes",
            Topic::Punctuation         => "Punctuation",
            Topic::Comprehension       => "Comprehension",
            Topic::VocabularyInContext => "Vocabulary in Context",
            Topic::CreativeWriting     => "Creative Writing",
            Topic::LetterSeries        => "Letter Series",
            Topic::LetterCodes         => "Letter Codes",
            Topic::HiddenWords         => "Hidden Words",
            Topic::Analogies           => "Word Analogies",
            Topic::OddWordOut          => "Odd Word Out",
            Topic::CompoundWords       => "Compound Words",
            Topic::LogicPuzzles        => "Logic Puzzles",
            Topic::NumberConnections   => "Number Connections",
            Topic::ShapeSeries         => "Shape Series",
            Topic::ShapeMatrices       => "Shape Matrices",
            Topic::Rotation            => "Rotation",
            Topic::Reflection          => "Reflection",
            Topic::OddShapeOut         => "Odd Shape Out",
            Topic::ShapeCodes          => "Shape Codes",
            Topic::CubeNets            => "Cube Nets",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Topic {
    type Err = QuizError;

    /// Parses a namespaced key such as `"verbal.letter_codes"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.key() == s)
            .ok_or_else(|| QuizError::UnknownTopic(s.to_string()))
    }
}

/// Either one specific topic or "any implemented topic of this subject".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSelector {
    Topic(Topic),
    Subject(Subject),
}

impl From<Topic> for TopicSelector {
    fn from(t: Topic) -> Self {
        TopicSelector::Topic(t)
    }
}

impl From<Subject> for TopicSelector {
    fn from(s: Subject) -> Self {
        TopicSelector::Subject(s)
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty band, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, QuizError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Difficulty(level))
        } else {
            Err(QuizError::DifficultyOutOfRange(i64::from(level)))
        }
    }

    /// Total constructor: any integer is clamped into `1..=5`.
    pub fn clamped(level: i64) -> Self {
        Difficulty(level.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty)
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = QuizError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Difficulty::new(v)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Question / option types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFormat {
    /// Four text options.
    MultipleChoice,
    /// Four options that are each a self-contained SVG document.
    VisualChoice,
}

/// What an option shows to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionContent {
    Text { text: String },
    Visual { svg: String },
}

impl OptionContent {
    pub fn text(s: impl Into<String>) -> Self {
        OptionContent::Text { text: s.into() }
    }

    pub fn visual(svg: impl Into<String>) -> Self {
        OptionContent::Visual { svg: svg.into() }
    }

    /// Canonical form used for "do these two options look the same" checks.
    pub fn normalized(&self) -> String {
        match self {
            OptionContent::Text { text } => collapse_whitespace(text),
            OptionContent::Visual { svg } => crate::question_engine::geometry::render::normalize_svg(svg),
        }
    }

    /// Text label, if this is a text option.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionContent::Text { text } => Some(text),
            OptionContent::Visual { .. } => None,
        }
    }
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub content: OptionContent,
}

/// One fully-formed assessment item.  Built once by a generator, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub subject: Subject,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub format: AnswerFormat,
    pub prompt: String,
    pub passage: Option<String>,
    /// Stem figure (series strip, matrix grid, source shape) for visual items.
    pub visual: Option<String>,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: String,
    pub explanation: String,
    pub time_limit_secs: u32,
    pub xp_reward: u32,
    /// Identifies which generator produced this item (the topic key).
    pub generator: String,
    pub seed: u32,
    pub tags: Vec<String>,
}

impl Question {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == self.correct_option_id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_keys_are_unique_and_parse_back() {
        let mut keys: Vec<String> = Topic::ALL.iter().map(|t| t.key()).collect();
        for t in Topic::ALL {
            assert_eq!(t.key().parse::<Topic>().ok(), Some(t));
        }
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Topic::ALL.len());
    }

    #[test]
    fn topic_keys_carry_subject_prefix() {
        for t in Topic::ALL {
            assert!(
                t.key().starts_with(&format!("{}.", t.subject().prefix())),
                "{} does not start with its subject prefix",
                t.key()
            );
        }
    }

    #[test]
    fn unknown_topic_is_an_error() {
        assert!(matches!("maths.calculus".parse::<Topic>(), Err(QuizError::UnknownTopic(_))));
    }

    #[test]
    fn difficulty_rejects_out_of_range() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
        assert_eq!(Difficulty::new(3).map(Difficulty::level).ok(), Some(3));
        assert_eq!(Difficulty::clamped(-4).level(), 1);
        assert_eq!(Difficulty::clamped(99).level(), 5);
    }

    #[test]
    fn difficulty_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Difficulty::clamped(4)).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<Difficulty>("9").is_err());
    }

    #[test]
    fn text_normalization_collapses_whitespace() {
        let a = OptionContent::text("  twelve   apples ");
        let b = OptionContent::text("twelve apples");
        assert_eq!(a.normalized(), b.normalized());
    }
}
