//! Toggling word sets mid-drill.
//!
//! Run with: `cargo run --example reconfigure`
//!
//! Shows how enabling and disabling sets re-partitions the piles: answered
//! cards stay answered, cards from disabled sets vanish from every pile, and
//! the remaining pool is reshuffled.

use vocab_drill::{DrillConfig, DrillSession, Variant, VocabItem, WordSet};

fn set(name: &str, words: &[(&str, &str)]) -> WordSet {
    WordSet::new(
        name,
        Variant::Lithuanian,
        words.iter().map(|(lt, en)| VocabItem::new(*lt, *en)).collect(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sets = vec![
        set("Greetings", &[("labas", "hello"), ("ačiū", "thank you"), ("viso gero", "goodbye")]),
        set("Numbers", &[("vienas", "one"), ("du", "two"), ("trys", "three")]),
    ];
    let config = DrillConfig::from_toml_str(
        r#"
        rng_seed = 7
        enabled_sets = ["Greetings"]
        "#,
    )?;
    let mut session = DrillSession::new(sets, config)?;

    for verdict in [true, false] {
        if let Some(item) = session.current_item() {
            println!("{} -> {}", item.front, item.back);
        }
        session.answer(verdict)?;
        session.advance();
    }
    println!("after two answers:   {}", session.stats());

    session.set_enabled("Numbers", true)?;
    println!("Numbers enabled:     {}", session.stats());

    session.set_enabled("Greetings", false)?;
    println!("Greetings disabled:  {}", session.stats());

    for (name, enabled) in session.deck().set_flags() {
        println!("  [{}] {name}", if enabled { "x" } else { " " });
    }
    Ok(())
}
