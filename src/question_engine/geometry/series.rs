//! Shape series: one attribute moves by a fixed step from cell to cell.

use crate::question_engine::{
    geometry::{
        chiral_shape, random_fill,
        render::{render, render_strip},
        shape::{polygon_name, Fill, ShapeKind, ShapeSpec, PALETTE},
        visual_distractors,
    },
    helpers::Draft,
    models::{Difficulty, OptionContent},
    rng::SeededRng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Size,
    Rotation,
    Sides,
    Opacity,
    Count,
}

impl Attribute {
    fn tag(self) -> &'static str {
        match self {
            Attribute::Size     => "size",
            Attribute::Rotation => "rotation",
            Attribute::Sides    => "sides",
            Attribute::Opacity  => "opacity",
            Attribute::Count    => "count",
        }
    }
}

fn attributes_for(d: Difficulty) -> &'static [Attribute] {
    use Attribute::*;
    match d.level() {
        1 => &[Size, Sides, Count],
        2 => &[Size, Sides, Count, Rotation],
        3 => &[Size, Rotation, Sides, Opacity],
        _ => &[Rotation, Opacity, Size, Sides],
    }
}

/// `value(i) = start + step·i`, applied to one attribute of `base`.
#[derive(Debug, Clone, Copy)]
struct Progression {
    attribute: Attribute,
    base: ShapeSpec,
    start: i64,
    step: i64,
}

impl Progression {
    fn value(&self, i: i64) -> i64 {
        self.start + self.step * i
    }

    fn term(&self, i: i64) -> ShapeSpec {
        let v = self.value(i);
        match self.attribute {
            Attribute::Size     => self.base.with_size(v.max(1) as u32),
            Attribute::Rotation => self.base.with_rotation(v as i32),
            Attribute::Sides    => self.base.with_sides(v.max(3) as u32),
            Attribute::Opacity  => self.base.with_opacity(v.clamp(1, 100) as u8),
            Attribute::Count    => self.base.with_count(v.max(1) as u32),
        }
    }

    fn rule(&self, answer: &ShapeSpec) -> String {
        let step = self.step.abs();
        match self.attribute {
            Attribute::Size => format!("Each shape is {step} units bigger than the last, so the next is a {answer}"),
            Attribute::Rotation => {
                let dir = if self.step > 0 { "clockwise" } else { "anticlockwise" };
                format!("Each shape turns a further {step}° {dir}, so the next is turned {step}° {dir} from the last one")
            }
            Attribute::Sides => format!(
                "Each shape has {} more than the last, so the next is a {}",
                if step == 1 { "one side".to_string() } else { format!("{step} sides") },
                polygon_name(answer.sides)
            ),
            Attribute::Opacity => format!(
                "Each shape is {step}% fainter than the last, so the next is at {}% opacity",
                answer.opacity
            ),
            Attribute::Count => format!("One more shape is added each time, so the next cell holds {}", answer.count),
        }
    }
}

fn plan(rng: &mut SeededRng, d: Difficulty, shown: i64) -> Progression {
    let level = d.level();
    let attribute = *rng.pick(attributes_for(d));
    let colour = rng.index(PALETTE.len());

    match attribute {
        Attribute::Size => {
            let kind = *rng.pick(&[ShapeKind::Circle, ShapeKind::Polygon, ShapeKind::Rectangle]);
            let sides = rng.random_int(3, 6) as u32;
            let base = ShapeSpec::new(kind).with_sides(sides).with_colour(colour).with_fill(random_fill(rng));
            let step = match level {
                1 | 2 => 7,
                3 => 5,
                _ => 4,
            };
            Progression { attribute, base, start: rng.random_int(10, 14), step }
        }
        Attribute::Rotation => {
            let base = chiral_shape(rng, d).with_colour(colour);
            let magnitude = match level {
                1 | 2 => 90,
                3 => 45,
                _ => *rng.pick(&[30, 45, 60]),
            };
            let sign = if level >= 4 && rng.chance(0.5) { -1 } else { 1 };
            Progression { attribute, base, start: rng.random_int(0, 23) * 15, step: magnitude * sign }
        }
        Attribute::Sides => {
            let base = ShapeSpec::polygon(3).with_colour(colour).with_fill(random_fill(rng)).with_size(30);
            Progression { attribute, base, start: rng.random_int(3, 4), step: 1 }
        }
        Attribute::Opacity => {
            let kind = *rng.pick(&[ShapeKind::Circle, ShapeKind::Polygon]);
            let base = ShapeSpec::new(kind).with_sides(rng.random_int(4, 6) as u32).with_colour(colour);
            let step = if level == 3 { -20 } else { -15 };
            Progression { attribute, base, start: 100, step }
        }
        Attribute::Count => {
            let kind = *rng.pick(&[ShapeKind::Circle, ShapeKind::Polygon]);
            let base = ShapeSpec::new(kind).with_sides(rng.random_int(3, 5) as u32).with_colour(colour);
            let start = if shown >= 4 { 1 } else { rng.random_int(1, 2) };
            Progression { attribute, base, start, step: 1 }
        }
    }
}

pub fn build(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let shown: i64 = if d.level() <= 2 { 3 } else { 4 };
    let p = plan(rng, d, shown);

    let answer = p.term(shown);
    let flipped_fill = match answer.fill {
        Fill::Solid => Fill::Outline,
        Fill::Outline => Fill::Solid,
    };

    // Double step, no change, reset to the start, a step backwards, and the
    // right step with the wrong fill.
    let candidates = vec![
        p.term(shown + 1),
        p.term(shown - 1),
        p.term(0),
        p.term(shown - 2),
        answer.with_fill(flipped_fill),
    ];
    let distractors = visual_distractors(&answer, candidates);

    let mut cells: Vec<Option<ShapeSpec>> = (0..shown).map(|i| Some(p.term(i))).collect();
    cells.push(None);

    Draft::new(
        "Which shape comes next in the series?",
        OptionContent::visual(render(&answer)),
        distractors,
        p.rule(&answer),
    )
    .with_visual(render_strip(&cells))
    .tag("series")
    .tag(p.attribute.tag())
}
