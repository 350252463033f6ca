use std::fmt;

/// The six solved.ac ranks, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Ruby,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
        Rank::Diamond,
        Rank::Ruby,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
            Rank::Ruby => "Ruby",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const STEP_NUMERALS: [&str; 5] = ["I", "II", "III", "IV", "V"];

/// A solved.ac difficulty tier
///
/// Levels 1..=30 are split into six ranks of five steps each. Within a rank
/// the step counts down as the level goes up, so level 6 is `Silver V` and
/// level 10 is `Silver I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Level 0: not yet rated by the community
    Unrated,
    Ranked { rank: Rank, step: u8 },
    /// Any level outside 0..=30, or metadata that could not be fetched
    Unknown,
}

impl Tier {
    /// Maps a solved.ac numeric level to a tier
    ///
    /// # Examples
    ///
    /// ```
    /// use boj_notion::Tier;
    ///
    /// assert_eq!(Tier::from_level(0).to_string(), "Unrated");
    /// assert_eq!(Tier::from_level(10).to_string(), "Silver I");
    /// assert_eq!(Tier::from_level(31), Tier::Unknown);
    /// ```
    pub fn from_level(level: i64) -> Self {
        match level {
            0 => Tier::Unrated,
            1..=30 => {
                let index = (level - 1) as usize;
                Tier::Ranked {
                    rank: Rank::ALL[index / 5],
                    step: 5 - (index % 5) as u8,
                }
            }
            _ => Tier::Unknown,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Tier::Ranked { rank, .. } => Some(rank),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Unrated => f.write_str("Unrated"),
            Tier::Ranked { rank, step } => {
                let numeral = STEP_NUMERALS
                    .get(usize::from(*step).saturating_sub(1))
                    .copied()
                    .unwrap_or("?");
                write!(f, "{} {}", rank, numeral)
            }
            Tier::Unknown => f.write_str("Unknown"),
        }
    }
}
