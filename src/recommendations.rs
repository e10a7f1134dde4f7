//! Static recommendation tables keyed off classified state
//!
//! Rule tables over the classifier output, no computation of its own.

use crate::state::BiorhythmState;
use serde::{Deserialize, Serialize};

/// Recommendation categories shown on the daily panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Nutrition,
    Exercise,
    Creativity,
    Emotional,
}

/// One daily recommendation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
}

fn entry(category: RecommendationCategory, title: &str, description: &str) -> Recommendation {
    Recommendation {
        category,
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Daily recommendations derived from the classified state
///
/// Each category picks its wording from the sign of the relevant cycle
/// value; the list itself is fixed, one entry per category.
pub fn daily_recommendations(state: &BiorhythmState) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(4);

    if state.physical.value > 0 {
        recommendations.push(entry(
            RecommendationCategory::Nutrition,
            "Protein and energy",
            "Lean protein and complex carbohydrates will fuel the day.",
        ));
    } else {
        recommendations.push(entry(
            RecommendationCategory::Nutrition,
            "Restorative foods",
            "Favor vitamin- and mineral-rich meals to rebuild reserves.",
        ));
    }

    if state.physical.value > 0 {
        recommendations.push(entry(
            RecommendationCategory::Exercise,
            "Intense training",
            "A good day for high-intensity sessions.",
        ));
    } else {
        recommendations.push(entry(
            RecommendationCategory::Exercise,
            "Gentle activity",
            "Yoga, walking or stretching will serve better than hard efforts.",
        ));
    }

    if state.intellectual.value > 0 {
        recommendations.push(entry(
            RecommendationCategory::Creativity,
            "Complex projects",
            "Your mind is sharp — take on problem-solving work.",
        ));
    } else {
        recommendations.push(entry(
            RecommendationCategory::Creativity,
            "Relaxing activities",
            "Keep creative work simple and low-stakes.",
        ));
    }

    if state.emotional.value > 0 {
        recommendations.push(entry(
            RecommendationCategory::Emotional,
            "Social connection",
            "Your emotional state is positive — a good day to socialize.",
        ));
    } else {
        recommendations.push(entry(
            RecommendationCategory::Emotional,
            "Self-care",
            "Set aside time for introspection and personal care.",
        ));
    }

    recommendations
}

struct HeritageTexts {
    key: &'static str,
    high: &'static str,
    low: &'static str,
}

// Condensed from the app's cultural text tables; lookup key is free-form
// and falls back to the generic entry.
static HERITAGE_TABLE: [HeritageTexts; 6] = [
    HeritageTexts {
        key: "latino",
        high: "Celebrate the high energy with shared meals and music — invite family, cook something generous, and let traditional dances channel the surplus.",
        low: "Honor the low cycle the traditional way: slow broths, chamomile with honey, advice from elders, and unhurried time for home remedies.",
    },
    HeritageTexts {
        key: "european",
        high: "Structure the day tightly: demanding sport, whole grains, and reading that challenges the intellect suit this peak.",
        low: "Lean into contemplation — root-vegetable soups, warm baths, candlelight, and quiet reading restore the balance.",
    },
    HeritageTexts {
        key: "asian",
        high: "Channel the elevated chi: martial arts or tai chi at dawn, warming yang foods, green tea for sustained clarity.",
        low: "Restore yin: miso soup, steamed vegetables, silent meditation, and a shiatsu massage to release what is blocked.",
    },
    HeritageTexts {
        key: "african",
        high: "Celebrate vital strength with drumming, dance and community — rich foods and gratitude rituals keep the spirit high.",
        low: "Heal with nature: tuber broths, medicinal plants, guidance from elders, and barefoot contact with the earth.",
    },
    HeritageTexts {
        key: "indigenous",
        high: "Greet the day with a gratitude ceremony: sacred grains, ceremonial song, and time outdoors with the four elements.",
        low: "Follow the moon's medicine: plant teas, a purifying steam bath, and rest inside the natural cycles.",
    },
    HeritageTexts {
        key: "other",
        high: "Your heritage is a resource — seek out ancestral recipes, music and gathering traditions that celebrate vitality.",
        low: "Look to family tradition for restorative practices: inherited remedies, elder wisdom, and foods that ground you.",
    },
];

/// Cultural recommendation text for a heritage key
///
/// The high/low variant is chosen by the mean of the three classified
/// values; unknown keys fall back to the generic entry.
pub fn heritage_recommendation(heritage: &str, state: &BiorhythmState) -> &'static str {
    let texts = HERITAGE_TABLE
        .iter()
        .find(|t| t.key == heritage.to_lowercase())
        .unwrap_or(&HERITAGE_TABLE[HERITAGE_TABLE.len() - 1]);

    if state.mean_value() > 0.0 {
        texts.high
    } else {
        texts.low
    }
}
