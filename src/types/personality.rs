//! Five-trait personality distribution.

use serde::{Deserialize, Serialize};

/// Personality traits, in the canonical order used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    CalmGenius,
    Playful,
    Oracle,
    Confident,
    Empathetic,
}

impl Trait {
    /// All five traits in canonical order.
    pub const ALL: [Trait; 5] = [
        Trait::CalmGenius,
        Trait::Playful,
        Trait::Oracle,
        Trait::Confident,
        Trait::Empathetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::CalmGenius => "calm_genius",
            Trait::Playful => "playful",
            Trait::Oracle => "oracle",
            Trait::Confident => "confident",
            Trait::Empathetic => "empathetic",
        }
    }
}

/// Normalized trait weights plus the dominant trait.
///
/// After normalization the five weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub calm_genius: f64,
    pub playful: f64,
    pub oracle: f64,
    pub confident: f64,
    pub empathetic: f64,
    pub dominant: Trait,
}

impl Default for PersonalityProfile {
    /// Starting profile before any emotion has been observed.
    fn default() -> Self {
        Self {
            calm_genius: 0.3,
            playful: 0.2,
            oracle: 0.2,
            confident: 0.15,
            empathetic: 0.15,
            dominant: Trait::CalmGenius,
        }
    }
}

impl PersonalityProfile {
    /// Build a profile from weights in canonical order, deriving `dominant`.
    pub fn from_weights(weights: [f64; 5]) -> Self {
        let [calm_genius, playful, oracle, confident, empathetic] = weights;
        Self {
            calm_genius,
            playful,
            oracle,
            confident,
            empathetic,
            dominant: dominant_of(&weights),
        }
    }

    /// Weights in canonical order.
    pub fn weights(&self) -> [f64; 5] {
        [
            self.calm_genius,
            self.playful,
            self.oracle,
            self.confident,
            self.empathetic,
        ]
    }

    pub fn weight(&self, t: Trait) -> f64 {
        match t {
            Trait::CalmGenius => self.calm_genius,
            Trait::Playful => self.playful,
            Trait::Oracle => self.oracle,
            Trait::Confident => self.confident,
            Trait::Empathetic => self.empathetic,
        }
    }

    pub fn sum(&self) -> f64 {
        self.weights().iter().sum()
    }
}

/// Arg-max over canonical order; the first of equal maxima wins.
pub fn dominant_of(weights: &[f64; 5]) -> Trait {
    let mut best = 0;
    for i in 1..weights.len() {
        if weights[i] > weights[best] {
            best = i;
        }
    }
    Trait::ALL[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_ties_resolve_to_first() {
        assert_eq!(dominant_of(&[0.2; 5]), Trait::CalmGenius);
        assert_eq!(dominant_of(&[0.1, 0.3, 0.3, 0.2, 0.1]), Trait::Playful);
        assert_eq!(dominant_of(&[0.1, 0.1, 0.1, 0.1, 0.6]), Trait::Empathetic);
    }

    #[test]
    fn test_from_weights_round_trips_order() {
        let p = PersonalityProfile::from_weights([0.1, 0.2, 0.4, 0.2, 0.1]);
        assert_eq!(p.weights(), [0.1, 0.2, 0.4, 0.2, 0.1]);
        assert_eq!(p.dominant, Trait::Oracle);
        assert_eq!(p.weight(Trait::Oracle), 0.4);
    }

    #[test]
    fn test_trait_serializes_snake_case() {
        let s = serde_json::to_string(&Trait::CalmGenius).unwrap();
        assert_eq!(s, "\"calm_genius\"");
    }
}
