//! Rotation: pick the source shape turned through a right-angle multiple.

use crate::question_engine::{
    geometry::{chiral_shape, render::render, shape::ShapeSpec, visual_distractors},
    helpers::Draft,
    models::{Difficulty, OptionContent},
    rng::SeededRng,
};

const TARGETS: [i32; 3] = [90, 180, 270];

/// Turn phrasing; from difficulty 4 a 270° turn is asked as 90° anticlockwise.
fn describe_turn(target: i32, d: Difficulty) -> String {
    if target == 270 && d.level() >= 4 {
        "90° anticlockwise".to_string()
    } else {
        format!("{target}° clockwise")
    }
}

/// Wrong angles, nearest-first at higher difficulty.
fn wrong_angles(rng: &mut SeededRng, target: i32, d: Difficulty) -> Vec<i32> {
    if d.level() <= 2 {
        let mut others: Vec<i32> = [0, 90, 180, 270].into_iter().filter(|&a| a != target).collect();
        rng.shuffle(&mut others);
        others
    } else {
        // Within 90° of the target; the closer, the harder.
        let offsets: &[i32] = if d.level() == 3 { &[45, -45, 90, -90] } else { &[30, -30, 45, -45, 60, -60] };
        let mut angles: Vec<i32> = offsets.iter().map(|o| target + o).collect();
        rng.shuffle(&mut angles);
        angles
    }
}

pub fn build(rng: &mut SeededRng, d: Difficulty) -> Draft {
    let source = chiral_shape(rng, d).with_rotation(rng.random_int(0, 11) as i32 * 30);
    let target = *rng.pick(&TARGETS);
    let answer = source.with_rotation(source.rotation + target);

    let mut candidates: Vec<ShapeSpec> = wrong_angles(rng, target, d)
        .into_iter()
        .map(|a| source.with_rotation(source.rotation + a))
        .collect();
    // The mirror image is the classic trap from difficulty 2.
    if d.level() >= 2 {
        candidates.insert(1, answer.mirrored(true, false));
    }
    // Finer angles as padding when the above collapse.
    candidates.extend((1..24).map(|k| source.with_rotation(source.rotation + target + k * 15)));

    let distractors = visual_distractors(&answer, candidates);
    let turn = describe_turn(target, d);

    Draft::new(
        format!("Which option shows the shape turned {turn}?"),
        OptionContent::visual(render(&answer)),
        distractors,
        format!("Turning the shape {turn} moves the dot with it; the other options are turned by a different amount or flipped"),
    )
    .with_visual(render(&source))
    .tag("rotation")
    .tag(format!("turn-{target}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_distractors_are_right_angle_multiples() {
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            let angles = wrong_angles(&mut rng, 90, Difficulty::clamped(1));
            assert_eq!(angles.len(), 3);
            assert!(angles.iter().all(|a| a % 90 == 0 && *a != 90));
        }
    }

    #[test]
    fn hard_distractors_stay_within_a_right_angle() {
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            for a in wrong_angles(&mut rng, 180, Difficulty::clamped(5)) {
                assert!((a - 180).abs() < 90 && a != 180);
            }
        }
    }

    #[test]
    fn anticlockwise_wording_only_when_hard() {
        assert_eq!(describe_turn(270, Difficulty::clamped(2)), "270° clockwise");
        assert_eq!(describe_turn(270, Difficulty::clamped(4)), "90° anticlockwise");
    }

    #[test]
    fn every_option_is_distinct() {
        for seed in 0..100 {
            for d in Difficulty::all() {
                let mut rng = SeededRng::new(seed);
                let draft = build(&mut rng, d);
                let mut all: Vec<String> = draft.distractors.iter().map(OptionContent::normalized).collect();
                all.push(draft.correct.normalized());
                all.sort();
                all.dedup();
                assert_eq!(all.len(), 4, "seed {seed} difficulty {d}");
            }
        }
    }
}
