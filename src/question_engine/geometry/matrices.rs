//! 2 × 2 matrices: each attribute follows either the row or the column.
//!
//! The missing bottom-right cell takes the row rule's second value and the
//! column rule's second value at the same time.

use crate::question_engine::{
    geometry::{
        render::{render, render_grid},
        shape::{Fill, ShapeSpec, PALETTE},
        visual_distractors,
    },
    helpers::{join_list, Draft},
    models::{Difficulty, OptionContent},
    rng::SeededRng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Sides,
    Colour,
    Fill,
    Size,
    Count,
}

const ATTRIBUTES: [Attribute; 5] = [
    Attribute::Sides,
    Attribute::Colour,
    Attribute::Fill,
    Attribute::Size,
    Attribute::Count,
];

impl Attribute {
    fn name(self) -> &'static str {
        match self {
            Attribute::Sides  => "number of sides",
            Attribute::Colour => "colour",
            Attribute::Fill   => "shading",
            Attribute::Size   => "size",
            Attribute::Count  => "number of shapes",
        }
    }

    fn apply(self, spec: ShapeSpec, v: i64) -> ShapeSpec {
        match self {
            Attribute::Sides  => spec.with_sides(v as u32),
            Attribute::Colour => spec.with_colour(v as usize),
            Attribute::Fill   => spec.with_fill(if v == 0 { Fill::Solid } else { Fill::Outline }),
            Attribute::Size   => spec.with_size(v as u32),
            Attribute::Count  => spec.with_count(v as u32),
        }
    }

    /// Two distinct values in a random order.
    fn values(self, rng: &mut SeededRng) -> [i64; 2] {
        let pair = match self {
            Attribute::Sides  => rng.pick_n(&[3, 4, 5, 6], 2),
            Attribute::Colour => rng.pick_n(&(0..PALETTE.len() as i64).collect::<Vec<_>>(), 2),
            Attribute::Fill   => rng.pick_n(&[0, 1], 2),
            Attribute::Size   => rng.pick_n(&[16, 32], 2),
            Attribute::Count  => rng.pick_n(&[1, 2], 2),
        };
        [pair[0], pair[1]]
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    attribute: Attribute,
    /// `true`: the value depends on the row; `false`: on the column.
    by_row: bool,
    values: [i64; 2],
}

#[derive(Debug, Clone)]
struct Matrix {
    base: ShapeSpec,
    rules: Vec<Rule>,
}

impl Matrix {
    fn cell(&self, row: usize, col: usize) -> ShapeSpec {
        self.rules.iter().fold(self.base, |spec, rule| {
            let i = if rule.by_row { row } else { col };
            rule.attribute.apply(spec, rule.values[i])
        })
    }

    /// The answer with the listed rules switched to their other value.
    fn tweaked(&self, which: &[usize]) -> ShapeSpec {
        which.iter().fold(self.cell(1, 1), |spec, &k| {
            let rule = self.rules[k];
            rule.attribute.apply(spec, rule.values[0])
        })
    }
}

fn plan(rng: &mut SeededRng, d: Difficulty) -> Matrix {
    let n = match d.level() {
        1 => 1,
        2 | 3 => 2,
        _ => 3,
    };
    let attributes = rng.pick_n(&ATTRIBUTES, n);
    let first_by_row = rng.chance(0.5);

    let mut rules = Vec::with_capacity(n);
    for (i, attribute) in attributes.into_iter().enumerate() {
        // With two or more rules, at least one follows rows and one columns.
        let by_row = match i {
            0 => first_by_row,
            1 => !first_by_row,
            _ => rng.chance(0.5),
        };
        let values = attribute.values(rng);
        rules.push(Rule { attribute, by_row, values });
    }

    let base = ShapeSpec::polygon(4)
        .with_size(26)
        .with_colour(rng.index(PALETTE.len()));
    Matrix { base, rules }
}

pub fn build(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let m = plan(rng, d);
    let answer = m.cell(1, 1);

    let mut candidates = vec![m.cell(0, 1), m.cell(1, 0), m.cell(0, 0)];
    for k in 0..m.rules.len() {
        candidates.push(m.tweaked(&[k]));
    }
    for a in 0..m.rules.len() {
        for b in a + 1..m.rules.len() {
            candidates.push(m.tweaked(&[a, b]));
        }
    }
    let distractors = visual_distractors(&answer, candidates);

    let rows: Vec<Vec<Option<ShapeSpec>>> = vec![
        vec![Some(m.cell(0, 0)), Some(m.cell(0, 1))],
        vec![Some(m.cell(1, 0)), None],
    ];

    let down: Vec<String> = m.rules.iter().filter(|r| r.by_row).map(|r| r.attribute.name().to_string()).collect();
    let across: Vec<String> = m.rules.iter().filter(|r| !r.by_row).map(|r| r.attribute.name().to_string()).collect();
    let mut parts: Vec<String> = Vec::new();
    if !across.is_empty() {
        parts.push(format!("the {} changes from left to right", join_list(&across)));
    }
    if !down.is_empty() {
        parts.push(format!("the {} changes from top to bottom", join_list(&down)));
    }

    Draft::new(
        "Which shape completes the grid?",
        OptionContent::visual(render(&answer)),
        distractors,
        format!("In each row and column {}, so the missing shape is {answer}", parts.join(" and ")),
    )
    .with_visual(render_grid(&rows))
    .tag("matrices")
    .tag(format!("rules-{}", m.rules.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::geometry::render::normalize_svg;

    #[test]
    fn rule_count_grows_with_difficulty() {
        for (level, expected) in [(1, 1), (2, 2), (3, 2), (4, 3), (5, 3)] {
            let mut rng = SeededRng::new(11);
            assert_eq!(plan(&mut rng, Difficulty::clamped(level)).rules.len(), expected);
        }
    }

    #[test]
    fn two_rules_split_between_rows_and_columns() {
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            let m = plan(&mut rng, Difficulty::clamped(3));
            assert_ne!(m.rules[0].by_row, m.rules[1].by_row);
        }
    }

    #[test]
    fn missing_cell_combines_row_and_column() {
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            let m = plan(&mut rng, Difficulty::clamped(4));
            let answer = m.cell(1, 1);
            // Bottom-right differs from every shown cell.
            for (r, c) in [(0, 0), (0, 1), (1, 0)] {
                assert_ne!(normalize_svg(&render(&m.cell(r, c))), normalize_svg(&render(&answer)));
            }
        }
    }
}
