/// Lower bound (inclusive) of the encouraging tier.
pub const AMAZING_THRESHOLD: f64 = 7.0;

/// Lower bound (inclusive) of the neutral tier.
pub const OKAY_THRESHOLD: f64 = 4.5;

/// Qualitative tier of a happiness index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `score >= 7`
    Amazing,
    /// `4.5 <= score < 7`
    Okay,
    /// `score < 4.5`
    TakeCare,
}

impl Tier {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Amazing => "🌟",
            Self::Okay => "🙂",
            Self::TakeCare => "😟",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Amazing => "You're doing amazing!",
            Self::Okay => "You're doing okay!",
            Self::TakeCare => "Take care of yourself!",
        }
    }
}

/// The emoji and message shown on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tier: Tier,
    pub emoji: &'static str,
    pub message: &'static str,
}

impl Classification {
    /// Classify a score. Each tier includes its lower bound.
    pub fn of(score: f64) -> Self {
        let tier = if score >= AMAZING_THRESHOLD {
            Tier::Amazing
        } else if score >= OKAY_THRESHOLD {
            Tier::Okay
        } else {
            Tier::TakeCare
        };
        Self {
            tier,
            emoji: tier.emoji(),
            message: tier.message(),
        }
    }
}

/// Shorthand for [`Classification::of`].
pub fn classify(score: f64) -> Classification {
    Classification::of(score)
}
