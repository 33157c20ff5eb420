//! German article drill: split "Die Zeit" into its article and noun and grade
//! a der/die/das guess.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::drill_engine::models::VocabItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Der,
    Die,
    Das,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Der, Gender::Die, Gender::Das];

    /// Colour hint front ends use when revealing the answer.
    pub fn color(self) -> &'static str {
        match self {
            Gender::Der => "red",
            Gender::Die => "blue",
            Gender::Das => "green",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Der => write!(f, "der"),
            Gender::Die => write!(f, "die"),
            Gender::Das => write!(f, "das"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "der" => Ok(Gender::Der),
            "die" => Ok(Gender::Die),
            "das" => Ok(Gender::Das),
            other => Err(format!("not an article: {other:?}")),
        }
    }
}

/// Lowercased first word, e.g. "Die Zeit" → "die".
pub fn extract_gender(german: &str) -> String {
    german.split(' ').next().unwrap_or_default().to_lowercase()
}

/// Everything after the first word, e.g. "Die Zeit" → "Zeit".
pub fn extract_noun(german: &str) -> String {
    german.split(' ').skip(1).collect::<Vec<_>>().join(" ")
}

/// Colour for a raw article string; anything unrecognised is black.
pub fn answer_color(article: &str) -> &'static str {
    article.parse::<Gender>().map(Gender::color).unwrap_or("black")
}

/// Whether `guess` matches the article on the back of a German card.
pub fn check_gender(item: &VocabItem, guess: &str) -> bool {
    guess.trim().to_lowercase() == extract_gender(&item.back)
}

/// Answer text as revealed: lowercased article plus noun ("die Zeit").
pub fn revealed_answer(german: &str) -> String {
    format!("{} {}", extract_gender(german), extract_noun(german))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_article_and_noun() {
        assert_eq!(extract_gender("Die Zeit"), "die");
        assert_eq!(extract_noun("Die Zeit"), "Zeit");
        assert_eq!(extract_noun("Das Auto fahren"), "Auto fahren");
        assert_eq!(extract_noun("Zeit"), "");
    }

    #[test]
    fn grading_ignores_case() {
        let item = VocabItem::new("Mann", "Der Mann");
        assert!(check_gender(&item, "der"));
        assert!(check_gender(&item, "DER"));
        assert!(!check_gender(&item, "das"));
    }

    #[test]
    fn colors_follow_article() {
        assert_eq!(answer_color("der"), "red");
        assert_eq!(answer_color("Die"), "blue");
        assert_eq!(answer_color("das"), "green");
        assert_eq!(answer_color("-"), "black");
    }

    #[test]
    fn parses_and_displays_articles() {
        for g in Gender::ALL {
            assert_eq!(g.to_string().parse::<Gender>(), Ok(g));
        }
        assert!("den".parse::<Gender>().is_err());
        assert_eq!(revealed_answer("Das Haus"), "das Haus");
    }
}
