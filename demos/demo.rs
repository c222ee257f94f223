//! Tour of the question engine.
//!
//! Run with: `cargo run --example demo`
//! Set `QUIZ_LOG=debug` to see dispatch misses and batch summaries.
//!
//! 1. **One question per implemented topic**, fixed seeds, so the output is
//!    the same on every run.
//! 2. **Subject selector**: a random implemented topic of each subject,
//!    picked from the seed.
//! 3. **Quiz plan**: a TOML-described batch, including a topic with no
//!    generator that is silently skipped.
//!
//! SVG payloads are summarised by size; pipe a question through
//! `Question::to_json` to get the full documents.

use quiz_item_gen::{
    available_topics, generate, generate_for, generate_one, Difficulty, OptionContent, Question,
    QuizPlan, Subject, Topic,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PLAN: &str = r#"
topics = ["maths.money", "english.spelling", "nvr.odd_one_out", "maths.probability"]
count = 8
difficulty = 3
seed = 2024
"#;

fn describe(content: &OptionContent) -> String {
    match content {
        OptionContent::Text { text } => text.clone(),
        OptionContent::Visual { svg } => format!("<svg, {} bytes>", svg.len()),
    }
}

fn print_question(q: &Question) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} — {}]  difficulty {}  id {}", q.subject, q.topic, q.difficulty, q.id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if let Some(passage) = &q.passage {
        println!("  {passage}");
        println!();
    }
    if let Some(svg) = &q.visual {
        println!("  (figure: {} bytes of SVG)", svg.len());
    }
    println!("  Q: {}", q.prompt);
    for option in &q.options {
        let marker = if option.id == q.correct_option_id { "✓" } else { " " };
        println!("  [{}] {marker} {}", option.id, describe(&option.content));
    }
    println!("  → {}", q.explanation);
    println!("  {} s, {} xp, tags: {}", q.time_limit_secs, q.xp_reward, q.tags.join(", "));
    println!();
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── Fresh seed ─────────────────────────────────────────────────────────
    println!();
    println!("══ generate_one: fresh seed each run ══");
    println!();
    if let Some(q) = generate_one(Topic::Arithmetic, Difficulty::clamped(2)) {
        println!("  {}  (seed {} reproduces it)", q.prompt, q.seed);
    }

    // ── Every implemented topic ────────────────────────────────────────────
    for subject in Subject::ALL {
        println!();
        println!("══ {subject} ══");
        println!();
        for (i, topic) in available_topics(subject).into_iter().enumerate() {
            let level = (i % 5) as i64 + 1;
            if let Some(q) = generate(topic, 1000 + i as u32, Difficulty::clamped(level)) {
                print_question(&q);
            }
        }
    }

    // ── Subject selector ───────────────────────────────────────────────────
    println!();
    println!("══ Subject selector: one item per subject ══");
    println!();
    for (subject, seed) in Subject::ALL.into_iter().zip(7001u32..) {
        if let Some(q) = generate_for(subject.into(), seed, Difficulty::clamped(3)) {
            println!("  {subject}  →  {}  ({})", q.topic, q.id);
        }
    }

    // ── Quiz plan ──────────────────────────────────────────────────────────
    println!();
    println!("══ Quiz plan from TOML ══");
    println!();
    match QuizPlan::from_toml_str(PLAN).and_then(|plan| plan.run()) {
        Ok(quiz) => {
            println!("  {} questions (probability has no generator and is skipped)", quiz.len());
            for q in &quiz {
                let answer = q.correct_option().map(|o| describe(&o.content)).unwrap_or_default();
                println!("  {:<16} {:<40} {}", q.id, q.prompt, answer);
            }
        }
        Err(e) => eprintln!("  plan failed: {e}"),
    }
}
