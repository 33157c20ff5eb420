use serde_json::{json, Value};

use crate::drill_engine::{
    grading::{answer_color, extract_gender, revealed_answer},
    models::{CurrentCard, Variant, VocabItem},
    session::DrillSession,
};

/// Card face for the current draw. Back-side fields stay `null` until the
/// answer is revealed, so a client cannot peek.
fn card_json(card: CurrentCard, item: &VocabItem, variant: Variant) -> Value {
    let (answer, color) = if card.revealed {
        match variant {
            Variant::German => (
                Some(revealed_answer(&item.back)),
                Some(answer_color(&extract_gender(&item.back))),
            ),
            Variant::Lithuanian => (Some(item.back.clone()), None),
        }
    } else {
        (None, None)
    };

    let hidden = |v: &Option<String>| if card.revealed { v.clone() } else { None };

    json!({
        "id": card.id.to_string(),
        "variant": variant.to_string(),
        "front": item.front,
        "revealed": card.revealed,
        "fromWrongPile": card.from_wrong_pile,
        "answer": answer,
        "answerColor": color,
        "gloss": hidden(&item.gloss),
        "example": hidden(&item.example),
        "kind": item.kind,
        "audioId": item.audio_id,
    })
}

/// Snapshot of everything a front end needs to render the drill.
pub fn to_view_json(session: &DrillSession) -> Value {
    let deck = session.deck();
    let card = session.current().and_then(|c| {
        let item = deck.get(c.id)?;
        let variant = deck.variant_of(c.id)?;
        Some(card_json(c, item, variant))
    });

    let sets: Vec<Value> = deck
        .set_flags()
        .map(|(name, enabled)| json!({ "name": name, "enabled": enabled }))
        .collect();

    let stats = session.stats();
    json!({
        "card": card,
        "piles": {
            "remaining": stats.remaining,
            "wrong": stats.wrong,
            "correct": stats.correct,
        },
        "exhausted": stats.exhausted,
        "revealDelayMs": session.config().reveal_delay_ms,
        "sets": sets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::{config::DrillConfig, models::WordSet};

    fn session() -> DrillSession {
        let set = WordSet::new(
            "initial",
            Variant::German,
            vec![VocabItem::new("Zeit", "Die Zeit")
                .with_gloss("Time")
                .with_example("Die Zeiten")],
        );
        DrillSession::new(vec![set], DrillConfig::seeded(3)).unwrap()
    }

    #[test]
    fn hidden_card_does_not_leak_answer() {
        let v = to_view_json(&session());
        assert_eq!(v["card"]["front"], "Zeit");
        assert_eq!(v["card"]["revealed"], false);
        assert!(v["card"]["answer"].is_null());
        assert!(v["card"]["gloss"].is_null());
        assert_eq!(v["piles"]["remaining"], 1);
        assert_eq!(v["sets"][0]["name"], "initial");
        assert_eq!(v["sets"][0]["enabled"], true);
    }

    #[test]
    fn revealed_card_shows_answer_and_color() {
        let mut s = session();
        s.guess_gender("die").unwrap();
        let v = to_view_json(&s);
        assert_eq!(v["card"]["answer"], "die Zeit");
        assert_eq!(v["card"]["answerColor"], "blue");
        assert_eq!(v["card"]["gloss"], "Time");
        assert_eq!(v["card"]["example"], "Die Zeiten");
        assert_eq!(v["piles"]["correct"], 1);
        assert_eq!(v["exhausted"], true);
    }

    #[test]
    fn exhausted_deck_renders_no_card() {
        let mut s = session();
        s.answer(true).unwrap();
        s.advance();
        let v = to_view_json(&s);
        assert!(v["card"].is_null());
        assert_eq!(v["revealDelayMs"], 1000);
    }
}
