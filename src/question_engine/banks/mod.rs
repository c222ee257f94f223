//! Static, read-only content tables.
//!
//! Banks are plain data: every entry carries a `level` in `1..=5` and
//! generators filter them at call time with [`band`].  Keeping them as data
//! (rather than code) keeps them easy to test and to localise.

pub mod english;
pub mod verbal;

use crate::question_engine::models::Difficulty;

/// Anything tagged with a content level.
pub trait Levelled {
    fn level(&self) -> u8;
}

/// Entries whose level lies within ±1 of `difficulty` (clamped to 1..=5).
///
/// Total over every difficulty: if a bank has no entry inside the window the
/// entries at the nearest populated level are returned instead, so a
/// non-empty bank never yields an empty band.
pub fn band<T: Levelled>(bank: &[T], difficulty: Difficulty) -> Vec<&T> {
    let d = difficulty.level();
    let lo = d.saturating_sub(1).max(Difficulty::MIN);
    let hi = (d + 1).min(Difficulty::MAX);

    let inside: Vec<&T> = bank
        .iter()
        .filter(|e| (lo..=hi).contains(&e.level()))
        .collect();
    if !inside.is_empty() {
        return inside;
    }

    let nearest = bank.iter().map(|e| e.level().abs_diff(d)).min();
    match nearest {
        Some(gap) => bank.iter().filter(|e| e.level().abs_diff(d) == gap).collect(),
        None => Vec::new(),
    }
}

macro_rules! levelled {
    ($($ty:ty),* $(,)?) => {
        $(impl Levelled for $ty {
            fn level(&self) -> u8 {
                self.level
            }
        })*
    };
}

levelled!(
    english::WordPair,
    english::SpellingWord,
    english::ClassifiedWord,
    english::PunctuatedSentence,
    english::Passage,
    verbal::HiddenWordSentence,
    verbal::Analogy,
    verbal::Category,
    verbal::Compound,
    verbal::CodeWord,
);

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        level: u8,
    }

    impl Levelled for Entry {
        fn level(&self) -> u8 {
            self.level
        }
    }

    #[test]
    fn band_uses_plus_minus_one_window() {
        let bank: Vec<Entry> = (1..=5).map(|level| Entry { level }).collect();
        let got: Vec<u8> = band(&bank, Difficulty::clamped(3)).iter().map(|e| e.level).collect();
        assert_eq!(got, vec![2, 3, 4]);
        let got: Vec<u8> = band(&bank, Difficulty::clamped(1)).iter().map(|e| e.level).collect();
        assert_eq!(got, vec![1, 2]);
    }

    #[test]
    fn band_falls_back_to_nearest_level() {
        let bank = [Entry { level: 5 }];
        assert_eq!(band(&bank, Difficulty::clamped(1)).len(), 1);
    }

    fn assert_total<T: Levelled>(name: &str, bank: &[T]) {
        for d in Difficulty::all() {
            let b = band(bank, d);
            assert!(!b.is_empty(), "{name} has an empty band at difficulty {d}");
            assert!(
                b.iter().all(|e| e.level().abs_diff(d.level()) <= 1),
                "{name} band at difficulty {d} leaves the ±1 window"
            );
        }
    }

    #[test]
    fn every_shipped_bank_covers_every_difficulty() {
        assert_total("synonyms", english::SYNONYMS);
        assert_total("antonyms", english::ANTONYMS);
        assert_total("spelling", english::SPELLING);
        assert_total("word classes", english::WORD_CLASSES);
        assert_total("punctuation", english::PUNCTUATION);
        assert_total("passages", english::PASSAGES);
        assert_total("hidden words", verbal::HIDDEN_WORDS);
        assert_total("analogies", verbal::ANALOGIES);
        assert_total("categories", verbal::CATEGORIES);
        assert_total("compounds", verbal::COMPOUNDS);
        assert_total("code words", verbal::CODE_WORDS);
    }
}
