use serde::{Deserialize, Serialize};

/// The five Big-Five personality dimensions, in the fixed order a test
/// walks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

pub const DIMENSION_ORDER: [Dimension; 5] = [
    Dimension::Openness,
    Dimension::Conscientiousness,
    Dimension::Extraversion,
    Dimension::Agreeableness,
    Dimension::Neuroticism,
];

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Openness => "openness",
            Dimension::Conscientiousness => "conscientiousness",
            Dimension::Extraversion => "extraversion",
            Dimension::Agreeableness => "agreeableness",
            Dimension::Neuroticism => "neuroticism",
        }
    }

    /// Arabic display name used on reports and in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Openness => "الانفتاح على التجارب",
            Dimension::Conscientiousness => "الضمير الحي",
            Dimension::Extraversion => "الانبساط",
            Dimension::Agreeableness => "المقبولية",
            Dimension::Neuroticism => "العصابية",
        }
    }

    /// Position in the fixed test order.
    pub fn index(&self) -> usize {
        DIMENSION_ORDER
            .iter()
            .position(|d| d == self)
            .expect("dimension is part of the fixed order")
    }

    /// The dimension that follows this one, or `None` for the last.
    pub fn next(&self) -> Option<Dimension> {
        DIMENSION_ORDER.get(self.index() + 1).copied()
    }
}

impl TryFrom<&str> for Dimension {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "openness" => Ok(Dimension::Openness),
            "conscientiousness" => Ok(Dimension::Conscientiousness),
            "extraversion" => Ok(Dimension::Extraversion),
            "agreeableness" => Ok(Dimension::Agreeableness),
            "neuroticism" => Ok(Dimension::Neuroticism),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed_and_forward_only() {
        assert_eq!(Dimension::Openness.next(), Some(Dimension::Conscientiousness));
        assert_eq!(Dimension::Agreeableness.next(), Some(Dimension::Neuroticism));
        assert_eq!(Dimension::Neuroticism.next(), None);
        assert_eq!(Dimension::Openness.index(), 0);
        assert_eq!(Dimension::Neuroticism.index(), 4);
    }

    #[test]
    fn parses_round_trip() {
        for dim in DIMENSION_ORDER {
            assert_eq!(Dimension::try_from(dim.as_str()), Ok(dim));
        }
        assert!(Dimension::try_from("charisma").is_err());
    }
}
