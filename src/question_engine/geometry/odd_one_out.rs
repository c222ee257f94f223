//! Odd one out: three shapes agree on one property, the fourth does not.
//!
//! Colour is a free property: every option gets its own palette entry, so
//! no two options can ever draw alike and colour never decides the answer.
//! The odd value of the controlled property is always chosen *away* from
//! the shared value, stepping up when stepping down would leave the valid
//! range.  From difficulty 4 every option also gets a little opacity noise.

use crate::question_engine::{
    geometry::{
        random_fill,
        render::render,
        shape::{polygon_name, Fill, ShapeKind, ShapeSpec, MIN_SIDES, MIN_SIZE, PALETTE},
    },
    helpers::Draft,
    models::{Difficulty, OptionContent},
    rng::SeededRng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Sides,
    Size,
    Fill,
    Count,
}

fn properties_for(d: Difficulty) -> &'static [Property] {
    use Property::*;
    match d.level() {
        1 => &[Sides, Fill, Count],
        _ => &[Sides, Size, Fill, Count],
    }
}

#[derive(Debug, Clone)]
pub struct OddPlan {
    pub property: Property,
    pub normals: Vec<ShapeSpec>,
    pub odd: ShapeSpec,
}

/// `base ± gap`, preferring a random direction but never below `floor`.
fn away_from(rng: &mut SeededRng, base: i64, gap: i64, floor: i64) -> i64 {
    let down = base - gap;
    if down >= floor && rng.chance(0.5) { down } else { base + gap }
}

pub fn plan(rng: &mut SeededRng, d: Difficulty) -> OddPlan {
    let level = d.level();
    let property = *rng.pick(properties_for(d));
    let palette: Vec<usize> = (0..PALETTE.len()).collect();
    let colours = rng.pick_n(&palette, 4);

    let kind = match property {
        Property::Sides => ShapeKind::Polygon,
        _ => *rng.pick(&[ShapeKind::Circle, ShapeKind::Polygon, ShapeKind::Rectangle]),
    };
    let base = ShapeSpec::new(kind)
        .with_sides(rng.random_int(3, 8) as u32)
        .with_size(rng.random_int(18, 30) as u32)
        .with_fill(random_fill(rng));

    let (normal, odd) = match property {
        Property::Sides => {
            let gap = if level <= 2 { 2 } else { 1 };
            let sides = away_from(rng, i64::from(base.sides), gap, i64::from(MIN_SIDES));
            (base, base.with_sides(sides as u32))
        }
        Property::Size => {
            let gap = match level {
                1 | 2 => 10,
                3 => 8,
                4 => 6,
                _ => 5,
            };
            let size = away_from(rng, i64::from(base.size), gap, i64::from(MIN_SIZE));
            (base, base.with_size(size as u32))
        }
        Property::Fill => {
            let other = match base.fill {
                Fill::Solid => Fill::Outline,
                Fill::Outline => Fill::Solid,
            };
            (base, base.with_fill(other))
        }
        Property::Count => {
            let count = rng.random_int(1, 2);
            let odd = away_from(rng, count, 1, 1);
            (base.with_count(count as u32), base.with_count(odd as u32))
        }
    };
    finish_plan(rng, level, property, normal, odd, &colours)
}

fn finish_plan(
    rng: &mut SeededRng,
    level: u8,
    property: Property,
    normal: ShapeSpec,
    odd: ShapeSpec,
    colours: &[usize],
) -> OddPlan {
    let mut normals: Vec<ShapeSpec> = colours[..3].iter().map(|&c| normal.with_colour(c)).collect();
    let mut odd = odd.with_colour(colours[3]);

    // Incidental noise on a property that plays no part in the answer.  Two
    // options share each level, so opacity never singles one out.
    if level >= 4 {
        let pair = rng.pick_n(&[100u8, 90, 80], 2);
        let mut levels = [pair[0], pair[0], pair[1], pair[1]];
        rng.shuffle(&mut levels);
        for (spec, opacity) in normals.iter_mut().chain(std::iter::once(&mut odd)).zip(levels) {
            *spec = spec.with_opacity(opacity);
        }
    }
    OddPlan { property, normals, odd }
}

fn explain(p: &OddPlan) -> String {
    let normal = &p.normals[0];
    let odd = &p.odd;
    let reason = match p.property {
        Property::Sides => format!(
            "Three of the shapes are {}s with {} sides; the odd one out is a {} with {}",
            polygon_name(normal.sides),
            normal.sides,
            polygon_name(odd.sides),
            odd.sides
        ),
        Property::Size => format!(
            "Three of the shapes are the same size; the odd one out is {}",
            if odd.size > normal.size { "bigger" } else { "smaller" }
        ),
        Property::Fill => {
            let word = |f: Fill| if f == Fill::Solid { "solid" } else { "outlined" };
            format!("Three of the shapes are {}; the odd one out is {}", word(normal.fill), word(odd.fill))
        }
        Property::Count => format!(
            "Three of the cells hold {} shape{}; the odd one out holds {}",
            normal.count,
            if normal.count == 1 { "" } else { "s" },
            odd.count
        ),
    };
    format!("{reason}. Colour does not matter here")
}

pub fn build(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let p = plan(rng, d);
    let distractors = p.normals.iter().map(|s| OptionContent::visual(render(s))).collect();

    Draft::new(
        "Which shape is the odd one out?",
        OptionContent::visual(render(&p.odd)),
        distractors,
        explain(&p),
    )
    .tag("odd-one-out")
    .tag(match p.property {
        Property::Sides => "sides",
        Property::Size => "size",
        Property::Fill => "fill",
        Property::Count => "count",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::geometry::render::normalize_svg;

    #[test]
    fn odd_differs_only_on_the_controlled_property() {
        for seed in 0..200 {
            for d in Difficulty::all() {
                let mut rng = SeededRng::new(seed);
                let p = plan(&mut rng, d);
                let n = p.normals[0];
                let o = p.odd;
                match p.property {
                    Property::Sides => assert_ne!(n.sides, o.sides),
                    Property::Size => assert_ne!(n.size, o.size),
                    Property::Fill => assert_ne!(n.fill, o.fill),
                    Property::Count => assert_ne!(n.count, o.count),
                }
                assert_eq!(n.kind, o.kind);
            }
        }
    }

    #[test]
    fn opacity_noise_pairs_up_the_options() {
        for seed in 0..500 {
            for level in 4..=5 {
                let p = plan(&mut SeededRng::new(seed), Difficulty::clamped(level));
                let mut levels: Vec<u8> = p.normals.iter().chain([&p.odd]).map(|s| s.opacity).collect();
                levels.sort_unstable();
                assert!(levels[0] == levels[1] && levels[2] == levels[3], "seed {seed}: {levels:?}");
                assert_ne!(levels[1], levels[2], "seed {seed}: {levels:?}");
            }
        }
    }

    #[test]
    fn side_count_at_the_lower_boundary_steps_up() {
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            assert_eq!(away_from(&mut rng, 3, 1, 3), 4);
            assert_eq!(away_from(&mut rng, 3, 2, 3), 5);
        }
    }

    #[test]
    fn odd_never_draws_like_a_normal() {
        for seed in 0..300 {
            for d in Difficulty::all() {
                let mut rng = SeededRng::new(seed);
                let p = plan(&mut rng, d);
                let odd = normalize_svg(&render(&p.odd));
                for n in &p.normals {
                    assert_ne!(normalize_svg(&render(n)), odd, "seed {seed} difficulty {d}");
                }
            }
        }
    }
}
