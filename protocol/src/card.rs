use std::fmt;
use std::str::FromStr;

/// ---- Suits ----
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Eichel,
    Gras,
    Herz,
    Schelln,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Eichel, Suit::Gras, Suit::Herz, Suit::Schelln];

    fn token(self) -> char {
        match self {
            Suit::Eichel => 'E',
            Suit::Gras => 'G',
            Suit::Herz => 'H',
            Suit::Schelln => 'S',
        }
    }

    fn from_token(c: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|suit| suit.token() == c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Eichel => write!(f, "Eichel"),
            Suit::Gras => write!(f, "Gras"),
            Suit::Herz => write!(f, "Herz"),
            Suit::Schelln => write!(f, "Schelln"),
        }
    }
}

/// ---- Ranks ----
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Ten,
    Unter,
    Ober,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Unter,
        Rank::Ober,
        Rank::King,
        Rank::Ace,
    ];

    fn token(self) -> char {
        match self {
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'Z',
            Rank::Unter => 'U',
            Rank::Ober => 'O',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_token(c: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|rank| rank.token() == c)
    }

    /// Short label printed on a card face.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Unter => "U",
            Rank::Ober => "O",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// ---- Cards ----
///
/// One of the 32 cards of a Bavarian deck. On the wire a card is a two
/// character token, suit first: `"H7"`, `"EO"`, `"SZ"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.token(), self.rank.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card token {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(s_suit), Some(s_rank), None) => Suit::from_token(s_suit)
                .zip(Rank::from_token(s_rank))
                .map(|(suit, rank)| Card::new(suit, rank))
                .ok_or_else(|| ParseCardError(s.to_string())),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_32_distinct_cards() {
        let cards: Vec<Card> = Card::all().collect();
        assert_eq!(cards.len(), 32);
        for (i, a) in cards.iter().enumerate() {
            assert!(cards[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn test_tokens_parse_back() {
        for card in Card::all() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
        assert_eq!("HZ".parse(), Ok(Card::new(Suit::Herz, Rank::Ten)));
        assert_eq!("EO".parse(), Ok(Card::new(Suit::Eichel, Rank::Ober)));
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["", "H", "H10", "X7", "H1", "h7"] {
            assert_eq!(token.parse::<Card>(), Err(ParseCardError(token.to_string())));
        }
    }
}
