//! English generators.  Content comes from `banks::english`; the generators
//! only choose, corrupt and explain.

use crate::question_engine::{
    banks::{band, english::{self, WordClass, WordPair}},
    helpers::{text_distractors, Draft, DISTRACTOR_COUNT},
    models::Difficulty,
    rng::SeededRng,
};

// ---------------------------------------------------------------------------
// Synonyms & antonyms
// ---------------------------------------------------------------------------

/// Paired answers of the other entries, i.e. real words of similar level.
fn other_answers<'a>(bank: &'a [WordPair], chosen: &WordPair) -> Vec<&'a str> {
    bank.iter()
        .filter(|p| p.word != chosen.word && p.answer != chosen.answer && p.answer != chosen.word)
        .map(|p| p.answer)
        .collect()
}

pub fn synonyms(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(english::SYNONYMS, d));
    let pool = other_answers(english::SYNONYMS, entry);
    let distractors = text_distractors(rng, entry.answer, &pool, |i| format!("{}{}", entry.word, "s".repeat(i + 1)));

    Draft::text(
        format!("Which word means the same as '{}'?", entry.word),
        entry.answer,
        distractors,
        format!("'{}' and '{}' have the same meaning, so the answer is {}", entry.word, entry.answer, entry.answer),
    )
    .tag("vocabulary")
}

pub fn antonyms(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(english::ANTONYMS, d));

    // A synonym of the headword is the most tempting wrong answer.
    let mut pool: Vec<&str> = english::SYNONYMS
        .iter()
        .filter(|p| p.word == entry.word)
        .map(|p| p.answer)
        .collect();
    pool.extend(other_answers(english::ANTONYMS, entry));
    let distractors = text_distractors(rng, entry.answer, &pool, |i| entry.word.repeat(i + 2));

    Draft::text(
        format!("Which word means the opposite of '{}'?", entry.word),
        entry.answer,
        distractors,
        format!("'{}' is the opposite of '{}', so the answer is {}", entry.answer, entry.word, entry.answer),
    )
    .tag("vocabulary")
}

// ---------------------------------------------------------------------------
// Spelling
// ---------------------------------------------------------------------------

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Plausible misspellings of `word`, in a fixed order.
///
/// Covers the common slips: ie/ei swaps, lost or added double letters,
/// dropped vowels, swapped letters and c/s confusion.
fn misspellings(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out: Vec<String> = Vec::new();

    if word.contains("ie") {
        out.push(word.replacen("ie", "ei", 1));
    }
    if word.contains("ei") {
        out.push(word.replacen("ei", "ie", 1));
    }

    for i in 1..chars.len() {
        // Undouble a doubled letter.
        if chars[i] == chars[i - 1] {
            let mut v = chars.clone();
            v.remove(i);
            out.push(v.into_iter().collect());
        }
    }

    for i in 1..chars.len().saturating_sub(1) {
        let c = chars[i];
        // Double a single consonant that sits between two vowels.
        if !is_vowel(c) && is_vowel(chars[i - 1]) && is_vowel(chars[i + 1]) {
            let mut v = chars.clone();
            v.insert(i, c);
            out.push(v.into_iter().collect());
        }
        // Drop an inner vowel.
        if is_vowel(c) {
            let mut v = chars.clone();
            v.remove(i);
            out.push(v.into_iter().collect());
        }
    }

    // Swap the first pair of differing inner letters.
    if let Some(i) = (1..chars.len().saturating_sub(2)).find(|&i| chars[i] != chars[i + 1]) {
        let mut v = chars.clone();
        v.swap(i, i + 1);
        out.push(v.into_iter().collect());
    }

    if let Some(i) = chars.iter().skip(1).position(|&c| c == 'c') {
        let mut v = chars.clone();
        v[i + 1] = 's';
        out.push(v.into_iter().collect());
    }
    if let Some(i) = chars.iter().skip(1).position(|&c| c == 's') {
        let mut v = chars.clone();
        v[i + 1] = 'c';
        out.push(v.into_iter().collect());
    }

    out.retain(|m| m != word);
    out
}

pub fn spelling(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(english::SPELLING, d));
    let candidates = misspellings(entry.word);
    let pool: Vec<&str> = candidates.iter().map(String::as_str).collect();

    // Appending letters never produces the correct spelling.
    let word = entry.word;
    let distractors = text_distractors(rng, word, &pool, |i| format!("{word}{}", "e".repeat(i + 1)));

    Draft::text(
        "Which word is spelled correctly?",
        word,
        distractors,
        format!("The correct spelling is {word}"),
    )
    .tag("spelling")
}

// ---------------------------------------------------------------------------
// Word classes
// ---------------------------------------------------------------------------

fn class_reason(class: WordClass) -> &'static str {
    match class {
        WordClass::Noun        => "names a person, place, thing or idea",
        WordClass::Verb        => "is a doing or being word",
        WordClass::Adjective   => "describes a noun",
        WordClass::Adverb      => "tells us how, when or where something happens",
        WordClass::Pronoun     => "stands in place of a noun",
        WordClass::Preposition => "shows how one thing relates to another in place or time",
        WordClass::Conjunction => "joins two parts of a sentence",
    }
}

fn article(word: &str) -> &'static str {
    if word.starts_with(is_vowel) { "an" } else { "a" }
}

pub fn word_classes(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(english::WORD_CLASSES, d));
    let answer = entry.class.to_string();
    let names: Vec<String> = WordClass::ALL.iter().map(WordClass::to_string).collect();
    let pool: Vec<&str> = names.iter().map(String::as_str).collect();
    let distractors = text_distractors(rng, &answer, &pool, |i| format!("class {i}"));

    Draft::text(
        format!("In the sentence \"{}\", which word class is '{}'?", entry.sentence, entry.word),
        answer.clone(),
        distractors,
        format!("'{}' {}, so it is {} {answer}", entry.word, class_reason(entry.class), article(&answer)),
    )
    .tag("grammar")
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Broken versions of a correctly punctuated sentence, in a fixed order.
fn corruptions(sentence: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    // Lower-case the opening letter (after any opening quote).
    if let Some((i, c)) = sentence.char_indices().find(|(_, c)| c.is_alphabetic()) {
        if c.is_uppercase() {
            let mut s = String::with_capacity(sentence.len());
            s.push_str(&sentence[..i]);
            s.extend(c.to_lowercase());
            s.push_str(&sentence[i + c.len_utf8()..]);
            out.push(s);
        }
    }

    // Wrong end mark.
    if let Some(last) = sentence.chars().last() {
        let swapped = match last {
            '.' => Some('?'),
            '?' | '!' => Some('.'),
            _ => None,
        };
        if let Some(mark) = swapped {
            let mut s = sentence[..sentence.len() - last.len_utf8()].to_string();
            s.push(mark);
            out.push(s);
        }
    }

    if sentence.contains(',') {
        out.push(sentence.replace(',', ""));
    }
    if sentence.contains('\'') {
        out.push(sentence.replace('\'', ""));
    }
    if sentence.contains("'s ") {
        out.push(sentence.replacen("'s ", "s' ", 1));
    }
    if sentence.contains('"') {
        out.push(sentence.replace('"', ""));
    }
    if sentence.contains(';') {
        out.push(sentence.replace(';', ","));
    }

    // A stray comma after the first word.
    if let Some(space) = sentence.find(' ') {
        if !sentence[..space].ends_with(',') {
            out.push(format!("{},{}", &sentence[..space], &sentence[space..]));
        }
    }

    // Proper nouns and "I" lose their capitals.
    let mut seen_first = false;
    let lowered: String = sentence
        .split(' ')
        .map(|w| {
            let starts_upper = w.chars().find(|c| c.is_alphabetic()).is_some_and(char::is_uppercase);
            if starts_upper && seen_first {
                w.to_lowercase()
            } else {
                if w.chars().any(char::is_alphabetic) {
                    seen_first = true;
                }
                w.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push(lowered);

    out.retain(|s| s != sentence);
    out
}

pub fn punctuation(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let entry = *rng.pick(&band(english::PUNCTUATION, d));
    let mut candidates = corruptions(entry.sentence);
    rng.shuffle(&mut candidates);

    // Case matters here, so the case-insensitive text search is not used.
    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
    for c in candidates {
        if distractors.len() < DISTRACTOR_COUNT && !distractors.contains(&c) {
            distractors.push(c);
        }
    }

    Draft::text(
        "Which sentence is punctuated correctly?",
        entry.sentence,
        distractors,
        format!("The correctly punctuated version is: {}", entry.sentence),
    )
    .tag("grammar")
}

// ---------------------------------------------------------------------------
// Comprehension
// ---------------------------------------------------------------------------

pub fn comprehension(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let passage = *rng.pick(&band(english::PASSAGES, d));
    let item = rng.pick(passage.items);
    let distractors = text_distractors(rng, item.answer, item.wrong, |i| format!("it does not say ({})", i + 1));

    Draft::text(
        format!("Read \"{}\". {}", passage.title, item.question),
        item.answer,
        distractors,
        format!("{}, so the answer is: {}", item.evidence, item.answer),
    )
    .with_passage(passage.text)
    .tag("reading")
}
