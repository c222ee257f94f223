//! Verbal-reasoning content: hidden-word sentences, analogies, word
//! categories, compound words and words for letter-code puzzles.

#[derive(Debug)]
pub struct HiddenWordSentence {
    pub level: u8,
    pub sentence: &'static str,
    /// Spans the end of one word and the start of the next.
    pub hidden: &'static str,
}

const fn hidden(level: u8, sentence: &'static str, hidden: &'static str) -> HiddenWordSentence {
    HiddenWordSentence { level, sentence, hidden }
}

pub static HIDDEN_WORDS: &[HiddenWordSentence] = &[
    hidden(1, "The car tried to start.", "cart"),
    hidden(1, "I hope nothing fell.", "open"),
    hidden(1, "Sam eats his lunch.", "meat"),
    hidden(2, "The farm ended its tours.", "mend"),
    hidden(2, "Our dog ate early.", "gate"),
    hidden(2, "The bus ends its trip.", "send"),
    hidden(3, "The mouse ate the cheese.", "seat"),
    hidden(3, "The hero sent a letter.", "rose"),
    hidden(3, "Put the cup on the shelf.", "upon"),
    hidden(4, "The kind earl left early.", "dear"),
    hidden(4, "The lion ears twitched.", "near"),
    hidden(4, "We must open the gate.", "stop"),
    hidden(5, "Grandma's tea chest was heavy.", "teach"),
    hidden(5, "Our solo veteran spoke.", "love"),
];

/// Four-letter words offered as wrong answers for hidden-word items.
pub static HIDDEN_WORD_POOL: &[&str] = &[
    "lamp", "fish", "door", "rain", "bird", "milk", "coat", "star", "ring", "tree", "moon",
    "frog", "desk", "ship", "kite", "nest", "drum", "sock", "boat", "leaf", "wolf",
];

/// `a` is to `b` as `c` is to `d`.
#[derive(Debug)]
pub struct Analogy {
    pub level: u8,
    pub a: &'static str,
    pub b: &'static str,
    pub c: &'static str,
    pub d: &'static str,
    /// How `a` relates to `b`, phrased as a clause.
    pub relation: &'static str,
    pub wrong: &'static [&'static str],
}

pub static ANALOGIES: &[Analogy] = &[
    Analogy {
        level: 1, a: "hot", b: "cold", c: "up", d: "down",
        relation: "hot is the opposite of cold",
        wrong: &["above", "top", "high", "sky"],
    },
    Analogy {
        level: 1, a: "puppy", b: "dog", c: "kitten", d: "cat",
        relation: "a puppy grows into a dog",
        wrong: &["mouse", "milk", "lion", "pet"],
    },
    Analogy {
        level: 1, a: "bird", b: "nest", c: "bee", d: "hive",
        relation: "a bird lives in a nest",
        wrong: &["honey", "flower", "sting", "wing"],
    },
    Analogy {
        level: 2, a: "fish", b: "swim", c: "bird", d: "fly",
        relation: "a fish moves by swimming",
        wrong: &["nest", "feather", "sing", "tree"],
    },
    Analogy {
        level: 2, a: "glove", b: "hand", c: "sock", d: "foot",
        relation: "a glove is worn on the hand",
        wrong: &["shoe", "leg", "wool", "boot"],
    },
    Analogy {
        level: 3, a: "author", b: "book", c: "composer", d: "music",
        relation: "an author creates a book",
        wrong: &["piano", "orchestra", "concert", "conductor"],
    },
    Analogy {
        level: 3, a: "doctor", b: "hospital", c: "teacher", d: "school",
        relation: "a doctor works in a hospital",
        wrong: &["pupil", "lesson", "desk", "book"],
    },
    Analogy {
        level: 4, a: "chapter", b: "book", c: "verse", d: "poem",
        relation: "a chapter is part of a book",
        wrong: &["poet", "rhyme", "writer", "library"],
    },
    Analogy {
        level: 4, a: "sheep", b: "flock", c: "wolf", d: "pack",
        relation: "sheep gather in a flock",
        wrong: &["den", "howl", "cub", "forest"],
    },
    Analogy {
        level: 5, a: "scarce", b: "abundant", c: "fragile", d: "sturdy",
        relation: "scarce is the opposite of abundant",
        wrong: &["brittle", "delicate", "broken", "glass"],
    },
    Analogy {
        level: 5, a: "thermometer", b: "temperature", c: "barometer", d: "pressure",
        relation: "a thermometer measures temperature",
        wrong: &["weather", "wind", "storm", "mercury"],
    },
];

#[derive(Debug)]
pub struct Category {
    pub level: u8,
    /// Plural noun phrase: "fruits", "musical instruments".
    pub name: &'static str,
    pub members: &'static [&'static str],
}

pub static CATEGORIES: &[Category] = &[
    Category { level: 1, name: "fruits", members: &["apple", "banana", "pear", "grape", "plum", "cherry"] },
    Category { level: 1, name: "colours", members: &["red", "blue", "green", "yellow", "purple"] },
    Category { level: 1, name: "farm animals", members: &["cow", "sheep", "horse", "pig", "goat"] },
    Category { level: 2, name: "vegetables", members: &["carrot", "potato", "onion", "cabbage", "leek"] },
    Category { level: 2, name: "pieces of furniture", members: &["chair", "table", "sofa", "bed", "wardrobe"] },
    Category { level: 2, name: "kinds of weather", members: &["rain", "snow", "hail", "fog", "sleet"] },
    Category { level: 3, name: "musical instruments", members: &["violin", "trumpet", "flute", "cello", "harp"] },
    Category { level: 3, name: "planets", members: &["Mars", "Venus", "Jupiter", "Saturn", "Neptune"] },
    Category { level: 3, name: "birds", members: &["robin", "sparrow", "eagle", "owl", "swan"] },
    Category { level: 4, name: "metals", members: &["iron", "zinc", "tin", "nickel", "aluminium"] },
    Category { level: 4, name: "feelings", members: &["joy", "anger", "fear", "grief", "envy"] },
    Category { level: 4, name: "joints of the body", members: &["elbow", "knee", "ankle", "wrist", "shoulder"] },
    Category { level: 5, name: "ways of speaking", members: &["whisper", "mutter", "exclaim", "murmur", "declare"] },
    Category { level: 5, name: "polygons", members: &["hexagon", "pentagon", "octagon", "rhombus", "trapezium"] },
    Category { level: 5, name: "gemstones", members: &["ruby", "emerald", "sapphire", "diamond", "topaz"] },
];

#[derive(Debug)]
pub struct Compound {
    pub level: u8,
    pub first: &'static str,
    pub second: &'static str,
    /// Words that do not join `first` to make a real word.
    pub wrong: &'static [&'static str],
}

pub static COMPOUNDS: &[Compound] = &[
    Compound { level: 1, first: "sun", second: "flower", wrong: &["cake", "door", "boot", "pen"] },
    Compound { level: 1, first: "rain", second: "bow", wrong: &["cup", "ship", "lamp", "pen"] },
    Compound { level: 1, first: "foot", second: "ball", wrong: &["tree", "cup", "milk", "rain"] },
    Compound { level: 2, first: "butter", second: "fly", wrong: &["door", "bed", "hat", "pig"] },
    Compound { level: 2, first: "snow", second: "man", wrong: &["cup", "desk", "pen", "bag"] },
    Compound { level: 2, first: "star", second: "fish", wrong: &["shoe", "milk", "book", "pan"] },
    Compound { level: 3, first: "water", second: "fall", wrong: &["chair", "coat", "sock", "plate"] },
    Compound { level: 3, first: "light", second: "house", wrong: &["spoon", "cat", "rug", "cloud"] },
    Compound { level: 3, first: "key", second: "board", wrong: &["pear", "sock", "coat", "nest"] },
    Compound { level: 4, first: "thunder", second: "storm", wrong: &["plate", "shoe", "desk", "pear"] },
    Compound { level: 4, first: "grass", second: "hopper", wrong: &["kettle", "button", "pillow", "carpet"] },
    Compound { level: 4, first: "earth", second: "quake", wrong: &["spoon", "candle", "jacket", "basket"] },
    Compound { level: 5, first: "wheel", second: "barrow", wrong: &["window", "pocket", "ladder", "mitten"] },
    Compound { level: 5, first: "horse", second: "radish", wrong: &["kettle", "pencil", "marble", "cushion"] },
    Compound { level: 5, first: "candle", second: "stick", wrong: &["plate", "mouse", "river", "tower"] },
];

#[derive(Debug)]
pub struct CodeWord {
    pub level: u8,
    pub word: &'static str,
}

const fn code_word(level: u8, word: &'static str) -> CodeWord {
    CodeWord { level, word }
}

pub static CODE_WORDS: &[CodeWord] = &[
    code_word(1, "CAT"),
    code_word(1, "DOG"),
    code_word(1, "SUN"),
    code_word(1, "HAT"),
    code_word(2, "FISH"),
    code_word(2, "BOOK"),
    code_word(2, "LAMP"),
    code_word(3, "PLANT"),
    code_word(3, "TRAIN"),
    code_word(3, "CLOUD"),
    code_word(4, "GARDEN"),
    code_word(4, "PENCIL"),
    code_word(4, "BASKET"),
    code_word(5, "MARBLE"),
    code_word(5, "CASTLE"),
    code_word(5, "PLANET"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> String {
        s.chars().filter(|c| c.is_ascii_alphabetic()).collect::<String>().to_lowercase()
    }

    #[test]
    fn hidden_words_really_cross_a_word_boundary() {
        for entry in HIDDEN_WORDS {
            assert!(letters(entry.sentence).contains(entry.hidden), "{} not in {}", entry.hidden, entry.sentence);
            assert!(
                entry.sentence.split_whitespace().all(|w| !letters(w).contains(entry.hidden)),
                "{} sits inside a single word of '{}'",
                entry.hidden,
                entry.sentence
            );
        }
    }

    #[test]
    fn analogy_answers_are_not_among_their_wrong_options() {
        for a in ANALOGIES {
            assert!(!a.wrong.contains(&a.d), "{} lists its own answer as wrong", a.c);
            assert!(a.wrong.len() >= 3);
        }
        for c in COMPOUNDS {
            assert!(!c.wrong.contains(&c.second));
            assert!(c.wrong.len() >= 3);
        }
    }

    #[test]
    fn categories_do_not_share_members() {
        let mut all: Vec<&str> = CATEGORIES.iter().flat_map(|c| c.members.iter().copied()).collect();
        let n = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n);
    }
}
