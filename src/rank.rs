const TOP_LIMIT: u32 = 3;
const TOP_10_LIMIT: u32 = 10;
const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Numeric placement read out of a raw rank string.
///
/// `Unbounded` sorts after every explicit place, so a rank that could not be
/// read always compares as the worst result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placement {
    Place(u32),
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    Top,
    Top10,
    Other,
}

impl RankTier {
    pub fn for_placement(placement: Placement) -> Self {
        match placement {
            Placement::Place(place) if place <= TOP_LIMIT => RankTier::Top,
            Placement::Place(place) if place <= TOP_10_LIMIT => RankTier::Top10,
            _ => RankTier::Other,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            RankTier::Top => "rank-badge rank-top",
            RankTier::Top10 => "rank-badge rank-top-10",
            RankTier::Other => "rank-badge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankClass {
    pub placement: Placement,
    pub tier: RankTier,
}

/// Classifies a rank such as `"8/762"`, `"3rd"` or `"12"`.
///
/// Never fails: anything that cannot be read degrades to
/// `Placement::Unbounded` and therefore to `RankTier::Other`.
pub fn classify(raw: &str) -> RankClass {
    let placement = parse_placement(raw);
    RankClass {
        placement,
        tier: RankTier::for_placement(placement),
    }
}

pub fn parse_placement(raw: &str) -> Placement {
    let clean = raw.trim().to_lowercase();

    let place = if let Some((before, _)) = clean.split_once('/') {
        leading_number(before)
    } else if let Some(stem) = strip_ordinal(&clean) {
        leading_number(stem)
    } else if !clean.is_empty() && clean.chars().all(|c| c.is_ascii_digit()) {
        leading_number(&clean)
    } else {
        None
    };

    place.map(Placement::Place).unwrap_or(Placement::Unbounded)
}

fn strip_ordinal(clean: &str) -> Option<&str> {
    ORDINAL_SUFFIXES
        .iter()
        .find_map(|suffix| clean.strip_suffix(suffix))
}

// Reads the leading run of digits, ignoring whatever follows it.
fn leading_number(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    // Zero is not a placement. The original page tiered "0/10" as top; here
    // it reads as unbounded.
    text[..end].parse::<u32>().ok().filter(|&place| place > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_rank_uses_place_before_separator() {
        assert_eq!(parse_placement("8/762"), Placement::Place(8));
        assert_eq!(parse_placement("216/2653"), Placement::Place(216));
        assert_eq!(parse_placement(" 1 / 891 "), Placement::Place(1));
    }

    #[test]
    fn ordinal_rank_uses_leading_integer() {
        assert_eq!(parse_placement("3rd"), Placement::Place(3));
        assert_eq!(parse_placement("29th"), Placement::Place(29));
        assert_eq!(parse_placement("1ST"), Placement::Place(1));
        assert_eq!(parse_placement("22nd"), Placement::Place(22));
    }

    #[test]
    fn bare_integer_rank() {
        assert_eq!(parse_placement("12"), Placement::Place(12));
    }

    #[test]
    fn unreadable_rank_is_unbounded() {
        for raw in ["", "n/a", "/100", "first", "honorable mention", "0/10", "-3"] {
            assert_eq!(parse_placement(raw), Placement::Unbounded, "{raw:?}");
        }
    }

    #[test]
    fn unbounded_sorts_after_every_place() {
        assert!(Placement::Place(u32::MAX) < Placement::Unbounded);
        assert!(Placement::Place(2) < Placement::Place(10));
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(classify("1/10").tier, RankTier::Top);
        assert_eq!(classify("3/1224").tier, RankTier::Top);
        assert_eq!(classify("4/971").tier, RankTier::Top10);
        assert_eq!(classify("10/672").tier, RankTier::Top10);
        assert_eq!(classify("11/500").tier, RankTier::Other);
        assert_eq!(classify("29th").tier, RankTier::Other);
        assert_eq!(classify("unranked").tier, RankTier::Other);
    }

    #[test]
    fn badge_classes() {
        assert_eq!(RankTier::Top.badge_class(), "rank-badge rank-top");
        assert_eq!(RankTier::Top10.badge_class(), "rank-badge rank-top-10");
        assert_eq!(RankTier::Other.badge_class(), "rank-badge");
    }
}
