use std::fmt;

/// Number of players around the table.
pub const SEAT_COUNT: usize = 4;

/// One of the four fixed positions at the table, `0..SEAT_COUNT`.
///
/// Snapshots are rotated by the server so that seat 0 is always the
/// viewer's own seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("seat {0} is outside 0..4")]
pub struct SeatOutOfRange(pub u8);

impl Seat {
    pub const ALL: [Seat; SEAT_COUNT] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    pub const fn new(index: usize) -> Option<Self> {
        if index < SEAT_COUNT {
            Some(Seat(index as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Seat> {
        Seat::ALL.into_iter()
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Seat {
    type Error = SeatOutOfRange;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Seat::new(raw as usize).ok_or(SeatOutOfRange(raw))
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The absolute seat that plays `offset` positions after `lead`.
pub fn seat_at(lead: Seat, offset: usize) -> Seat {
    Seat(((lead.index() + offset % SEAT_COUNT) % SEAT_COUNT) as u8)
}

/// The seat that put the last card into a trick led by `lead`, if any card
/// has been played yet.
pub fn most_recent_seat(lead: Seat, card_count: usize) -> Option<Seat> {
    card_count.checked_sub(1).map(|offset| seat_at(lead, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(i: usize) -> Seat {
        Seat::new(i).unwrap()
    }

    #[test]
    fn test_seat_at_wraps_modulo_four() {
        for lead in Seat::all() {
            for offset in 0..12 {
                assert_eq!(seat_at(lead, offset).index(), (lead.index() + offset) % 4);
                assert_eq!(seat_at(lead, offset), seat_at(lead, offset + SEAT_COUNT));
            }
        }
    }

    #[test]
    fn test_seat_at_handles_huge_offsets() {
        assert_eq!(seat_at(seat(3), usize::MAX), seat((3 + usize::MAX % 4) % 4));
    }

    #[test]
    fn test_most_recent_seat() {
        assert_eq!(most_recent_seat(seat(2), 0), None);
        assert_eq!(most_recent_seat(seat(2), 1), Some(seat(2)));
        assert_eq!(most_recent_seat(seat(2), 3), Some(seat(0)));
        assert_eq!(most_recent_seat(seat(1), 4), Some(seat(0)));
    }

    #[test]
    fn test_seat_range() {
        assert_eq!(Seat::all().count(), SEAT_COUNT);
        assert!(Seat::ALL.iter().enumerate().all(|(i, s)| s.index() == i));
        assert_eq!(Seat::try_from(3), Ok(seat(3)));
        assert_eq!(Seat::try_from(4), Err(SeatOutOfRange(4)));
        assert!(Seat::new(4).is_none());
    }
}
