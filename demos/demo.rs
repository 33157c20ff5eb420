//! Simulated German article drill.
//!
//! Run with: `cargo run --example demo [path/to/words.tsv]`
//!
//! Without an argument a small built-in list is used. The simulated learner
//! misses each noun the first time it is shown and knows it afterwards, so
//! the output shows missed cards resurfacing from the wrong pile until the
//! deck is cleared.
//!
//! Set `RUST_LOG=vocab_drill=debug` to watch every draw and answer.

use vocab_drill::{
    load_word_set, to_view_json, DrillConfig, DrillSession, Variant, VocabItem, WordSet,
};

fn builtin_set() -> WordSet {
    let words = [
        ("Time", "Die Zeit", "Die Zeiten"),
        ("Man", "Der Mann", "Die Männer"),
        ("Eye", "Das Auge", "Die Augen"),
        ("Day", "Der Tag", "Die Tage"),
        ("Year", "Das Jahr", "Die Jahre"),
        ("Door", "Die Tür", "Die Türen"),
    ];
    let items = words
        .iter()
        .map(|(en, de, pl)| {
            let noun = de.split(' ').skip(1).collect::<Vec<_>>().join(" ");
            VocabItem::new(noun, *de).with_gloss(*en).with_example(*pl)
        })
        .collect();
    WordSet::new("Initial Set", Variant::German, items)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vocab_drill=info".parse()?),
        )
        .init();

    let set = match std::env::args().nth(1) {
        Some(path) => load_word_set("Initial Set", path, Variant::German)?,
        None => builtin_set(),
    };

    let mut session = DrillSession::new(vec![set], DrillConfig::seeded(42))?;
    let mut seen = std::collections::HashSet::new();

    while let Some(card) = session.current() {
        let item = session.current_item().ok_or("card without item")?;
        let source = if card.from_wrong_pile { "wrong pile" } else { "pool" };
        println!("━━ {}  ({source})", item.front);

        let article = item.back.split(' ').next().unwrap_or_default().to_lowercase();
        let guess = if seen.insert(card.id) { "der".to_string() } else { article };

        let outcome = session.guess_gender(&guess)?;
        let mark = if outcome.was_correct { "✓" } else { "✗" };
        println!("   guessed {guess:<3}  {mark}  {}", outcome.answer);
        println!("   {}", session.stats());
        session.advance();
    }

    println!();
    println!("Final view:");
    println!("{}", serde_json::to_string_pretty(&to_view_json(&session))?);
    Ok(())
}
