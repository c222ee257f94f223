//! English content: word pairs, spelling lists, tagged sentences, passages.

use std::fmt;

/// A headword and its paired answer (a synonym or an antonym).
#[derive(Debug)]
pub struct WordPair {
    pub level: u8,
    pub word: &'static str,
    pub answer: &'static str,
}

const fn pair(level: u8, word: &'static str, answer: &'static str) -> WordPair {
    WordPair { level, word, answer }
}

pub static SYNONYMS: &[WordPair] = &[
    pair(1, "happy", "glad"),
    pair(1, "fast", "quick"),
    pair(1, "shut", "close"),
    pair(1, "begin", "start"),
    pair(1, "big", "large"),
    pair(2, "angry", "cross"),
    pair(2, "shout", "yell"),
    pair(2, "tired", "weary"),
    pair(2, "brave", "bold"),
    pair(2, "silent", "quiet"),
    pair(3, "ancient", "old"),
    pair(3, "damp", "moist"),
    pair(3, "rich", "wealthy"),
    pair(3, "difficult", "hard"),
    pair(3, "gloomy", "dismal"),
    pair(4, "fragile", "delicate"),
    pair(4, "vacant", "empty"),
    pair(4, "conceal", "hide"),
    pair(4, "abundant", "plentiful"),
    pair(5, "meticulous", "thorough"),
    pair(5, "candid", "frank"),
    pair(5, "benevolent", "kind"),
    pair(5, "obstinate", "stubborn"),
    pair(5, "ominous", "threatening"),
];

pub static ANTONYMS: &[WordPair] = &[
    pair(1, "hot", "cold"),
    pair(1, "up", "down"),
    pair(1, "wet", "dry"),
    pair(1, "early", "late"),
    pair(2, "strong", "weak"),
    pair(2, "ancient", "modern"),
    pair(2, "generous", "mean"),
    pair(2, "arrive", "depart"),
    pair(3, "expand", "contract"),
    pair(3, "victory", "defeat"),
    pair(3, "permanent", "temporary"),
    pair(4, "scarce", "plentiful"),
    pair(4, "reveal", "conceal"),
    pair(4, "optimistic", "pessimistic"),
    pair(5, "transparent", "opaque"),
    pair(5, "frugal", "extravagant"),
    pair(5, "hostile", "friendly"),
];

#[derive(Debug)]
pub struct SpellingWord {
    pub level: u8,
    pub word: &'static str,
}

const fn spell(level: u8, word: &'static str) -> SpellingWord {
    SpellingWord { level, word }
}

pub static SPELLING: &[SpellingWord] = &[
    spell(1, "because"),
    spell(1, "friend"),
    spell(1, "school"),
    spell(1, "people"),
    spell(2, "believe"),
    spell(2, "different"),
    spell(2, "February"),
    spell(2, "library"),
    spell(3, "separate"),
    spell(3, "government"),
    spell(3, "beginning"),
    spell(3, "surprise"),
    spell(4, "necessary"),
    spell(4, "occasion"),
    spell(4, "committee"),
    spell(4, "receive"),
    spell(5, "accommodation"),
    spell(5, "conscientious"),
    spell(5, "embarrass"),
    spell(5, "rhythm"),
    spell(5, "millennium"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
}

impl WordClass {
    pub const ALL: [WordClass; 7] = [
        WordClass::Noun,
        WordClass::Verb,
        WordClass::Adjective,
        WordClass::Adverb,
        WordClass::Pronoun,
        WordClass::Preposition,
        WordClass::Conjunction,
    ];
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WordClass::Noun        => "noun",
            WordClass::Verb        => "verb",
            WordClass::Adjective   => "adjective",
            WordClass::Adverb      => "adverb",
            WordClass::Pronoun     => "pronoun",
            WordClass::Preposition => "preposition",
            WordClass::Conjunction => "conjunction",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct ClassifiedWord {
    pub level: u8,
    pub sentence: &'static str,
    pub word: &'static str,
    pub class: WordClass,
}

const fn classified(level: u8, sentence: &'static str, word: &'static str, class: WordClass) -> ClassifiedWord {
    ClassifiedWord { level, sentence, word, class }
}

pub static WORD_CLASSES: &[ClassifiedWord] = &[
    classified(1, "The dog ran across the garden.", "dog", WordClass::Noun),
    classified(1, "Sam jumped over the puddle.", "jumped", WordClass::Verb),
    classified(1, "She wore a red coat.", "red", WordClass::Adjective),
    classified(2, "The tortoise walked slowly home.", "slowly", WordClass::Adverb),
    classified(2, "They shared the cake with Mia.", "They", WordClass::Pronoun),
    classified(2, "The cat hid under the table.", "under", WordClass::Preposition),
    classified(3, "I wanted to play, but it was raining.", "but", WordClass::Conjunction),
    classified(3, "Her kindness surprised everyone.", "kindness", WordClass::Noun),
    classified(3, "The exhausted runners crossed the line.", "exhausted", WordClass::Adjective),
    classified(4, "We waited patiently although the queue was long.", "although", WordClass::Conjunction),
    classified(4, "The children rarely complain about homework.", "rarely", WordClass::Adverb),
    classified(4, "The river flooded the valley during the storm.", "during", WordClass::Preposition),
    classified(5, "His bravery was recognised by the whole village.", "recognised", WordClass::Verb),
    classified(5, "The committee reached its decision unanimously.", "unanimously", WordClass::Adverb),
    classified(5, "Whoever finishes first may choose the game.", "Whoever", WordClass::Pronoun),
];

#[derive(Debug)]
pub struct PunctuatedSentence {
    pub level: u8,
    pub sentence: &'static str,
}

const fn punct(level: u8, sentence: &'static str) -> PunctuatedSentence {
    PunctuatedSentence { level, sentence }
}

pub static PUNCTUATION: &[PunctuatedSentence] = &[
    punct(1, "My sister likes apples."),
    punct(1, "Where is my hat?"),
    punct(1, "Tom and Ella went to London."),
    punct(2, "We bought eggs, milk, bread and jam."),
    punct(2, "The dog's bowl was empty."),
    punct(2, "Can you help me, please?"),
    punct(3, "After lunch, we played football in the park."),
    punct(3, "\"Stop right there!\" shouted the guard."),
    punct(3, "The children's coats were hanging by the door."),
    punct(4, "Although it was late, Priya kept reading."),
    punct(4, "My uncle, who lives in Wales, keeps bees."),
    punct(4, "It's time the team ate their dinner."),
    punct(5, "The museum, which opened in 1901, houses three galleries."),
    punct(5, "\"Have you seen Max's keys?\" asked Mum."),
    punct(5, "However, the bridge was closed; we took the ferry instead."),
];

#[derive(Debug)]
pub struct ComprehensionItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub wrong: &'static [&'static str],
    /// Restates the line of the passage that settles the question.
    pub evidence: &'static str,
}

#[derive(Debug)]
pub struct Passage {
    pub level: u8,
    pub title: &'static str,
    pub text: &'static str,
    pub items: &'static [ComprehensionItem],
}

pub static PASSAGES: &[Passage] = &[
    Passage {
        level: 1,
        title: "The Lost Kite",
        text: "On Saturday morning Leo took his green kite to the hill behind his house. \
               The wind was so strong that the string slipped out of his hands. \
               The kite floated over the trees and landed in Mrs Patel's garden. \
               She gave it back to Leo with a biscuit and a smile.",
        items: &[
            ComprehensionItem {
                question: "What colour was Leo's kite?",
                answer: "green",
                wrong: &["red", "blue", "yellow", "orange"],
                evidence: "The passage describes \"his green kite\"",
            },
            ComprehensionItem {
                question: "Where did the kite land?",
                answer: "in Mrs Patel's garden",
                wrong: &["on the hill", "in a tree", "on Leo's roof", "in the park"],
                evidence: "The kite \"landed in Mrs Patel's garden\"",
            },
            ComprehensionItem {
                question: "On which day did Leo fly his kite?",
                answer: "Saturday",
                wrong: &["Sunday", "Friday", "Monday", "Wednesday"],
                evidence: "It happened \"On Saturday morning\"",
            },
        ],
    },
    Passage {
        level: 3,
        title: "Honeybees",
        text: "A honeybee colony can contain up to sixty thousand bees, yet only one of them is the queen. \
               Worker bees, which are all female, collect nectar and pollen and look after the young. \
               Male bees, called drones, do not collect food at all. \
               In winter the workers cluster together and shiver their muscles to keep the hive warm.",
        items: &[
            ComprehensionItem {
                question: "What are male bees called?",
                answer: "drones",
                wrong: &["workers", "queens", "larvae", "scouts"],
                evidence: "The passage says \"Male bees, called drones\"",
            },
            ComprehensionItem {
                question: "How do worker bees keep the hive warm in winter?",
                answer: "by shivering their muscles",
                wrong: &["by eating honey", "by sealing the door", "by flying south", "by sleeping"],
                evidence: "Workers \"shiver their muscles to keep the hive warm\"",
            },
            ComprehensionItem {
                question: "How many queens does a colony have?",
                answer: "one",
                wrong: &["two", "ten", "sixty thousand", "none"],
                evidence: "The passage says \"only one of them is the queen\"",
            },
        ],
    },
    Passage {
        level: 5,
        title: "The Lighthouse Keeper",
        text: "For thirty years Agnes tended the lamp at Gull Point, climbing the hundred and twelve steps each dusk. \
               When the lighthouse was automated in 1987, she refused to leave the island, \
               insisting that no machine could read the sea as she did. \
               Reluctantly, the harbour board allowed her to stay on as an unpaid warden, \
               a post she held until her ninetieth birthday.",
        items: &[
            ComprehensionItem {
                question: "Why did Agnes refuse to leave the island?",
                answer: "she believed a machine could not read the sea as well as she could",
                wrong: &[
                    "she had nowhere else to live",
                    "the harbour board paid her to stay",
                    "she was afraid of boats",
                    "the lighthouse was not yet automated",
                ],
                evidence: "She insisted \"no machine could read the sea as she did\"",
            },
            ComprehensionItem {
                question: "Which word best describes the harbour board's decision?",
                answer: "reluctant",
                wrong: &["eager", "generous", "hasty", "secret"],
                evidence: "The board allowed her to stay \"Reluctantly\"",
            },
            ComprehensionItem {
                question: "How was Agnes rewarded as warden?",
                answer: "she was not paid",
                wrong: &["she was paid a salary", "she received a medal", "she was given a house", "she was paid in fish"],
                evidence: "She stayed on \"as an unpaid warden\"",
            },
        ],
    },
];
