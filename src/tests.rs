//! Cross-topic tests for the `quiz_item_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Structure | Four options, ids A–D, exactly one correct, no two options alike |
//! | Determinism | Same (topic, seed, difficulty) → byte-identical JSON |
//! | Explanations | Text explanations end with the correct label |
//! | Value domains | Money and clock labels, non-negative arithmetic |
//! | Scenarios | Arithmetic working; reflection answer matches its plan |
//! | Registry | Subject filtering, selector, formats per subject |
//! | Properties | Uniqueness and determinism over arbitrary seeds; odd-one-out collisions and incidental noise |

use proptest::prelude::*;

use crate::question_engine::{
    geometry::{
        odd_one_out,
        reflection,
        render::{normalize_svg, render, render_with_mirror},
        shape::Fill,
    },
    rng::SeededRng,
};
use crate::{
    available_topics, generate, generate_for, AnswerFormat, Difficulty, OptionContent, Question,
    Subject, Topic,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Every implemented topic across all subjects.
fn implemented() -> Vec<Topic> {
    Subject::ALL.into_iter().flat_map(available_topics).collect()
}

fn q(topic: Topic, seed: u32, level: i64) -> Question {
    generate(topic, seed, Difficulty::clamped(level)).unwrap()
}

fn correct_text(question: &Question) -> &str {
    question
        .correct_option()
        .and_then(|o| o.content.as_text())
        .unwrap()
}

const SEEDS: [u32; 6] = [0, 1, 42, 999, 0xDEAD_BEEF, u32::MAX];

// ── structure ────────────────────────────────────────────────────────────────

fn assert_well_formed(question: &Question) {
    let ctx = format!("{} seed {} difficulty {}", question.topic.key(), question.seed, question.difficulty);

    let ids: Vec<&str> = question.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "C", "D"], "{ctx}");

    let correct = question.options.iter().filter(|o| o.id == question.correct_option_id).count();
    assert_eq!(correct, 1, "{ctx}");

    let mut seen: Vec<String> = question.options.iter().map(|o| o.content.normalized()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 4, "duplicate options: {ctx}");

    assert!(!question.prompt.trim().is_empty(), "{ctx}");
    assert!(!question.explanation.trim().is_empty(), "{ctx}");
    assert_eq!(question.generator, question.topic.key(), "{ctx}");
    assert_eq!(question.subject, question.topic.subject(), "{ctx}");
}

#[test]
fn every_topic_and_difficulty_is_well_formed() {
    for topic in implemented() {
        for d in Difficulty::all() {
            for seed in SEEDS {
                let question = generate(topic, seed, d).unwrap();
                assert_well_formed(&question);
                assert_eq!(question.difficulty, d);
            }
        }
    }
}

#[test]
fn many_seeds_never_collapse_options() {
    for topic in implemented() {
        for seed in 0..60 {
            assert_well_formed(&q(topic, seed, i64::from(seed % 5) + 1));
        }
    }
}

#[test]
fn id_encodes_topic_difficulty_and_seed() {
    let question = q(Topic::Division, 0xBEEF, 3);
    assert_eq!(question.id, "DV-3-0000BEEF");
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_json() {
    for topic in implemented() {
        for d in Difficulty::all() {
            let a = generate(topic, 12345, d).unwrap().to_json().unwrap();
            let b = generate(topic, 12345, d).unwrap().to_json().unwrap();
            assert_eq!(a, b, "{} difficulty {d}", topic.key());
        }
    }
}

#[test]
fn question_round_trips_through_json() {
    for topic in [Topic::Comprehension, Topic::ShapeMatrices] {
        let question = q(topic, 8, 4);
        let json = serde_json::to_string(&question).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, question);
    }
}

#[test]
fn different_seeds_vary_the_content() {
    for topic in implemented() {
        let mut drawn: Vec<String> = (0..20)
            .map(|s| {
                let question = q(topic, s, 3);
                let answer = question.correct_option().map(|o| o.content.normalized());
                format!("{}{:?}{:?}", question.prompt, question.visual, answer)
            })
            .collect();
        drawn.sort();
        drawn.dedup();
        assert!(drawn.len() > 1, "{} always produces the same item", topic.key());
    }
}

// ── explanations ─────────────────────────────────────────────────────────────

#[test]
fn text_explanations_end_with_the_correct_label() {
    for topic in implemented() {
        if topic.subject() == Subject::NonVerbalReasoning {
            continue;
        }
        for d in Difficulty::all() {
            for seed in 0..20 {
                let question = generate(topic, seed, d).unwrap();
                let label = correct_text(&question);
                let explanation = &question.explanation;
                let ctx = format!("{} seed {seed} difficulty {d}: {explanation:?} / {label:?}", topic.key());

                assert!(explanation.ends_with(label), "{ctx}");
                let before = explanation[..explanation.len() - label.len()].chars().last();
                assert!(before.map_or(true, |c| !c.is_alphanumeric()), "{ctx}");
            }
        }
    }
}

// ── value domains ────────────────────────────────────────────────────────────

#[test]
fn money_labels_are_pounds_and_pence() {
    for seed in 0..100 {
        let question = q(Topic::Money, seed, i64::from(seed % 5) + 1);
        for option in &question.options {
            let text = option.content.as_text().unwrap();
            let rest = text.strip_prefix('£').unwrap_or_else(|| panic!("{text}"));
            let (pounds, pence) = rest.split_once('.').unwrap();
            assert!(pounds.parse::<u32>().is_ok(), "{text}");
            assert_eq!(pence.len(), 2, "{text}");
            assert!(pence.parse::<u32>().is_ok(), "{text}");
        }
    }
}

#[test]
fn time_labels_are_24_hour_clock() {
    for seed in 0..100 {
        let question = q(Topic::Time, seed, i64::from(seed % 5) + 1);
        for option in &question.options {
            let text = option.content.as_text().unwrap();
            let (h, m) = text.split_once(':').unwrap_or_else(|| panic!("{text}"));
            assert_eq!((h.len(), m.len()), (2, 2), "{text}");
            assert!(h.parse::<u32>().unwrap() < 24, "{text}");
            assert!(m.parse::<u32>().unwrap() < 60, "{text}");
        }
    }
}

#[test]
fn arithmetic_options_are_non_negative_integers() {
    for d in 1..=5 {
        for seed in 0..50 {
            for option in &q(Topic::Arithmetic, seed, d).options {
                let text = option.content.as_text().unwrap();
                assert!(text.parse::<u64>().is_ok(), "{text}");
            }
        }
    }
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn arithmetic_addition_explains_its_working() {
    let mut checked = 0;
    for seed in 0..200 {
        let question = q(Topic::Arithmetic, seed, 1);
        let Some(sum) = question.prompt.strip_prefix("What is ").and_then(|p| p.strip_suffix('?')) else {
            panic!("unexpected prompt {:?}", question.prompt);
        };
        let Some((a, b)) = sum.split_once(" + ") else { continue };
        let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
        assert!((2..=20).contains(&a) && (2..=20).contains(&b), "{sum}");

        let answer = a + b;
        assert_eq!(question.explanation, format!("{a} + {b} = {answer}"));
        assert_eq!(correct_text(&question), answer.to_string());
        checked += 1;
    }
    assert!(checked > 50, "only {checked} additions in 200 seeds");
}

#[test]
fn reflection_answer_is_the_planned_mirror_image() {
    for d in Difficulty::all() {
        for seed in 0..40 {
            let question = generate(Topic::Reflection, seed, d).unwrap();
            let plan = reflection::plan(&mut SeededRng::new(seed), d);

            let correct = question.correct_option().unwrap();
            assert_eq!(correct.content, OptionContent::visual(render(&plan.answer)));
            assert_eq!(question.visual, Some(render_with_mirror(&plan.source, plan.axis)));
            assert_eq!(question.format, AnswerFormat::VisualChoice);

            let source = normalize_svg(&render(&plan.source));
            let offered = question.options.iter().any(|o| o.content.normalized() == source);
            if plan.original_offered {
                assert!(offered, "seed {seed} difficulty {d}");
            }
        }
    }
}

// ── registry ─────────────────────────────────────────────────────────────────

#[test]
fn available_topics_never_leak_across_subjects() {
    for subject in Subject::ALL {
        let topics = available_topics(subject);
        assert!(!topics.is_empty(), "{subject}");
        for topic in topics {
            assert_eq!(topic.subject(), subject);
            assert!(topic.key().starts_with(&format!("{}.", subject.prefix())));
        }
    }
}

#[test]
fn implemented_topic_counts() {
    assert_eq!(available_topics(Subject::Maths).len(), 14);
    assert_eq!(available_topics(Subject::English).len(), 6);
    assert_eq!(available_topics(Subject::VerbalReasoning).len(), 6);
    assert_eq!(available_topics(Subject::NonVerbalReasoning).len(), 5);
}

#[test]
fn answer_format_follows_subject() {
    for topic in implemented() {
        let question = q(topic, 3, 2);
        let visual = topic.subject() == Subject::NonVerbalReasoning;
        let expected = if visual { AnswerFormat::VisualChoice } else { AnswerFormat::MultipleChoice };
        assert_eq!(question.format, expected, "{}", topic.key());
        assert!(question.options.iter().all(|o| o.content.as_text().is_some() != visual));
    }
}

#[test]
fn comprehension_carries_a_passage() {
    for seed in 0..10 {
        let question = q(Topic::Comprehension, seed, 3);
        assert!(question.passage.as_deref().is_some_and(|p| p.len() > 40));
    }
}

#[test]
fn visual_stems_present_except_odd_one_out() {
    for topic in available_topics(Subject::NonVerbalReasoning) {
        let question = q(topic, 5, 3);
        assert_eq!(question.visual.is_some(), topic != Topic::OddShapeOut, "{}", topic.key());
    }
}

#[test]
fn subject_selector_is_deterministic() {
    let d = Difficulty::clamped(3);
    for seed in SEEDS {
        let a = generate_for(Subject::NonVerbalReasoning.into(), seed, d);
        let b = generate_for(Subject::NonVerbalReasoning.into(), seed, d);
        assert_eq!(a, b);
        assert_eq!(a.unwrap().subject, Subject::NonVerbalReasoning);
    }
}

// ── properties ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn options_are_unique_for_any_seed(seed: u32, level in 1i64..=5) {
        for topic in implemented() {
            let question = q(topic, seed, level);
            let mut seen: Vec<String> = question.options.iter().map(|o| o.content.normalized()).collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), 4, "{} seed {}", topic.key(), seed);
        }
    }

    #[test]
    fn generation_is_deterministic_for_any_seed(seed: u32, level in 1i64..=5) {
        for topic in implemented() {
            prop_assert_eq!(q(topic, seed, level), q(topic, seed, level));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn odd_shape_never_draws_like_a_normal_one(seed: u32, level in 1i64..=5) {
        let plan = odd_one_out::plan(&mut SeededRng::new(seed), Difficulty::clamped(level));
        let odd = normalize_svg(&render(&plan.odd));
        for normal in &plan.normals {
            prop_assert_ne!(&normalize_svg(&render(normal)), &odd);
        }
    }

    #[test]
    fn only_the_controlled_property_singles_out_one_shape(seed: u32, level in 1i64..=5) {
        let plan = odd_one_out::plan(&mut SeededRng::new(seed), Difficulty::clamped(level));
        let mut shapes = plan.normals.clone();
        shapes.push(plan.odd);

        let mut properties: Vec<(&str, Vec<u32>)> = vec![
            ("opacity", shapes.iter().map(|s| u32::from(s.opacity)).collect()),
            ("colour", shapes.iter().map(|s| s.colour as u32).collect()),
        ];
        if plan.property != odd_one_out::Property::Sides {
            properties.push(("sides", shapes.iter().map(|s| s.sides).collect()));
        }
        if plan.property != odd_one_out::Property::Size {
            properties.push(("size", shapes.iter().map(|s| s.size).collect()));
        }
        if plan.property != odd_one_out::Property::Fill {
            properties.push(("fill", shapes.iter().map(|s| u32::from(s.fill == Fill::Solid)).collect()));
        }
        if plan.property != odd_one_out::Property::Count {
            properties.push(("count", shapes.iter().map(|s| s.count).collect()));
        }

        for (name, values) in properties {
            prop_assert!(!singles_out_one(&values), "{} singles out a shape: {:?}", name, values);
        }
    }
}

/// Three options agree and the fourth differs.
fn singles_out_one(values: &[u32]) -> bool {
    values.iter().any(|v| {
        let (same, other): (Vec<&u32>, Vec<&u32>) = values.iter().partition(|w| *w == v);
        other.len() == 1 && same.len() == values.len() - 1
    })
}

#[test]
fn hard_odd_one_out_shares_every_opacity_level() {
    for seed in 0..2000 {
        for level in 4..=5 {
            let plan = odd_one_out::plan(&mut SeededRng::new(seed), Difficulty::clamped(level));
            let opacities: Vec<u32> = plan
                .normals
                .iter()
                .chain(std::iter::once(&plan.odd))
                .map(|s| u32::from(s.opacity))
                .collect();
            for v in &opacities {
                let n = opacities.iter().filter(|w| *w == v).count();
                assert_eq!(n, 2, "seed {seed} difficulty {level}: {opacities:?}");
            }
        }
    }
}
