//! Reflection: mirror a shape in a vertical or horizontal line.
//!
//! Mirroring is a sign flip on one scale axis.  The candidate list is the
//! other sign combinations, then the untouched source (from difficulty 3,
//! and only when it looks different from the answer), then turns of the
//! source.  The source can be symmetric about the mirror line, in which case
//! several candidates draw the same picture and the render-level dedup in
//! [`visual_distractors`] drops them.

use crate::question_engine::{
    geometry::{
        render::{normalize_svg, render, render_with_mirror, Axis},
        shape::{Marker, ShapeKind, ShapeSpec, PALETTE},
        visual_distractors,
    },
    helpers::Draft,
    models::{Difficulty, OptionContent},
    rng::SeededRng,
};

/// Rotations tried when the flips run short.
const FALLBACK_TURNS: [i32; 6] = [90, 270, 45, 135, 225, 315];

#[derive(Debug, Clone)]
pub struct ReflectionPlan {
    pub source: ShapeSpec,
    pub axis: Axis,
    pub answer: ShapeSpec,
    /// Ordered candidates, before render-level dedup.
    pub candidates: Vec<ShapeSpec>,
    pub original_offered: bool,
}

fn flip(spec: ShapeSpec, axis: Axis) -> ShapeSpec {
    match axis {
        Axis::Vertical => spec.mirrored(true, false),
        Axis::Horizontal => spec.mirrored(false, true),
    }
}

fn looks_same(a: &ShapeSpec, b: &ShapeSpec) -> bool {
    normalize_svg(&render(a)) == normalize_svg(&render(b))
}

/// Everything `build` decides, in stream order.
pub fn plan(rng: &mut SeededRng, d: Difficulty) -> ReflectionPlan {
    let level = d.level();
    // From difficulty 3 some shapes keep a mirror axis.
    let marker = if level >= 3 && rng.chance(0.4) { Marker::Vertex } else { Marker::Edge };
    let sides = rng.random_int(3, 6) as u32;
    let turn = if level >= 3 { rng.random_int(0, 7) * 45 } else { rng.random_int(0, 11) * 30 };
    let source = ShapeSpec::new(ShapeKind::Composite(marker))
        .with_sides(sides)
        .with_size(rng.random_int(26, 36) as u32)
        .with_colour(rng.index(PALETTE.len()))
        .with_rotation(turn as i32);
    let axis = if rng.chance(0.5) { Axis::Vertical } else { Axis::Horizontal };
    let other = match axis {
        Axis::Vertical => Axis::Horizontal,
        Axis::Horizontal => Axis::Vertical,
    };

    let answer = flip(source, axis);
    let mut candidates = vec![flip(source, other), source.mirrored(true, true)];

    let original_offered = level >= 3 && !looks_same(&source, &answer);
    if original_offered {
        candidates.insert(0, source);
    }
    candidates.extend(FALLBACK_TURNS.iter().map(|t| source.with_rotation(source.rotation + t)));

    ReflectionPlan { source, axis, answer, candidates, original_offered }
}

pub fn build(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let p = plan(rng, d);
    let distractors = visual_distractors(&p.answer, p.candidates.iter().copied());

    let mut explanation = match p.axis {
        Axis::Vertical => "A vertical mirror line swaps left and right but leaves top and bottom alone".to_string(),
        Axis::Horizontal => "A horizontal mirror line swaps top and bottom but leaves left and right alone".to_string(),
    };
    if looks_same(&p.source, &p.answer) {
        explanation.push_str("; this shape is symmetric about the line, so its reflection looks the same");
    }

    Draft::new(
        "Which option shows the shape reflected in the dashed mirror line?",
        OptionContent::visual(render(&p.answer)),
        distractors,
        explanation,
    )
    .with_visual(render_with_mirror(&p.source, p.axis))
    .tag("reflection")
    .tag(match p.axis {
        Axis::Vertical => "vertical-mirror",
        Axis::Horizontal => "horizontal-mirror",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_only_offered_from_difficulty_three() {
        for seed in 0..100 {
            for level in 1..=2 {
                let mut rng = SeededRng::new(seed);
                assert!(!plan(&mut rng, Difficulty::clamped(level)).original_offered);
            }
        }
    }

    #[test]
    fn original_offered_exactly_when_it_looks_different() {
        let mut symmetric_seen = false;
        for seed in 0..300 {
            let mut rng = SeededRng::new(seed);
            let p = plan(&mut rng, Difficulty::clamped(4));
            let differs = !looks_same(&p.source, &p.answer);
            assert_eq!(p.original_offered, differs, "seed {seed}");
            symmetric_seen |= !differs;
        }
        assert!(symmetric_seen, "no symmetric source in 300 seeds");
    }

    #[test]
    fn no_distractor_draws_like_the_answer() {
        for seed in 0..200 {
            for d in Difficulty::all() {
                let mut rng = SeededRng::new(seed);
                let draft = build(&mut rng, d);
                let answer = draft.correct.normalized();
                assert_eq!(draft.distractors.len(), 3);
                assert!(draft.distractors.iter().all(|o| o.normalized() != answer), "seed {seed} difficulty {d}");
            }
        }
    }
}
