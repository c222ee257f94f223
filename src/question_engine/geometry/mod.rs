//! Non-verbal reasoning: shape model, renderer and the five visual families.
//!
//! | Module          | Topic               | Stem                     |
//! |-----------------|---------------------|--------------------------|
//! | `series`        | `nvr.series`        | strip ending in "?"      |
//! | `matrices`      | `nvr.matrices`      | 2 × 2 grid, last cell "?"|
//! | `rotation`      | `nvr.rotation`      | source shape             |
//! | `reflection`    | `nvr.reflection`    | source shape + mirror    |
//! | `odd_one_out`   | `nvr.odd_one_out`   | none (options only)      |
//!
//! Every family builds `ShapeSpec` candidates and hands them to
//! [`visual_distractors`], which keeps the first three whose *rendered* form
//! differs from the answer and from each other.

pub mod matrices;
pub mod odd_one_out;
pub mod reflection;
pub mod render;
pub mod rotation;
pub mod series;
pub mod shape;

use tracing::trace;

use crate::question_engine::{
    helpers::{distinct_options, DISTRACTOR_COUNT},
    models::{Difficulty, OptionContent},
    rng::SeededRng,
};

use self::shape::{Fill, Marker, ShapeKind, ShapeSpec, PALETTE};

/// Three visual distractors, deduplicated by normalized render.
///
/// `candidates` are tried in order.  If they collapse to fewer than three
/// distinct pictures, recoloured copies of the answer fill the gap; every
/// palette entry draws differently, so this always completes.
pub fn visual_distractors<I>(correct: &ShapeSpec, candidates: I) -> Vec<OptionContent>
where
    I: IntoIterator<Item = ShapeSpec>,
{
    let answer = OptionContent::visual(render::render(correct));
    let mut out = distinct_options(&answer, candidates.into_iter().map(|s| OptionContent::visual(render::render(&s))));
    if out.len() < DISTRACTOR_COUNT {
        trace!(found = out.len(), "visual candidates collapsed, recolouring the answer");
        let recoloured = (1..PALETTE.len())
            .map(|k| correct.with_colour(correct.colour + k))
            .map(|s| OptionContent::visual(render::render(&s)));
        out.extend(recoloured);
        out = distinct_options(&answer, out);
    }
    out
}

/// A shape whose turns and flips are all visible.
pub fn chiral_shape(rng: &mut SeededRng, d: Difficulty) -> ShapeSpec {
    let sides = match d.level() {
        1 | 2 => rng.random_int(3, 4),
        _ => rng.random_int(3, 6),
    } as u32;
    ShapeSpec::new(ShapeKind::Composite(Marker::Edge))
        .with_sides(sides)
        .with_size(rng.random_int(26, 36) as u32)
        .with_colour(rng.index(PALETTE.len()))
}

/// Solid or outline, equally likely.
pub fn random_fill(rng: &mut SeededRng) -> Fill {
    if rng.chance(0.5) { Fill::Solid } else { Fill::Outline }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::geometry::render::normalize_svg;

    #[test]
    fn collapsing_candidates_are_replaced_by_recolours() {
        let square = ShapeSpec::polygon(4);
        // Every candidate draws exactly like the answer.
        let same = vec![square.with_rotation(90), square.with_rotation(180), square.with_rotation(270)];
        let out = visual_distractors(&square, same);
        assert_eq!(out.len(), DISTRACTOR_COUNT);
        let answer = normalize_svg(&render::render(&square));
        let mut seen: Vec<String> = out.iter().map(OptionContent::normalized).collect();
        assert!(seen.iter().all(|s| *s != answer));
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), DISTRACTOR_COUNT);
    }
}
