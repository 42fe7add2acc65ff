use schafkopf_protocol::{Seat, StateSnapshot};

use crate::scene::{PanelRegion, SeatPanel};

pub fn render(snapshot: &StateSnapshot) -> PanelRegion {
    let mut panel = PanelRegion::default();
    for seat in Seat::all() {
        panel.seats[seat.index()] = seat_panel(snapshot, seat);
    }
    panel
}

fn seat_panel(snapshot: &StateSnapshot, seat: Seat) -> SeatPanel {
    let mut text = snapshot.seat_labels[seat.index()].clone();
    if let Some(rule) = snapshot.active_rule.as_ref().filter(|rule| rule.seat == seat) {
        text.push_str(": ");
        text.push_str(&rule.text);
    }
    SeatPanel {
        text,
        under_timeout: snapshot.timeout_seat == Some(seat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::empty_snapshot;
    use schafkopf_protocol::ActiveRule;

    #[test]
    fn test_labels_copied_per_seat() {
        let panel = render(&empty_snapshot());
        let texts: Vec<&str> = panel.seats.iter().map(|seat| seat.text.as_str()).collect();
        assert_eq!(texts, ["Anna", "Bert", "Carl", "Dora"]);
        assert!(panel.seats.iter().all(|seat| !seat.under_timeout));
    }

    #[test]
    fn test_rule_annotates_only_its_seat() {
        let mut snapshot = empty_snapshot();
        snapshot.active_rule = Some(ActiveRule {
            seat: Seat::new(2).unwrap(),
            text: "Herz-Solo".into(),
        });
        let panel = render(&snapshot);
        assert_eq!(panel.seats[2].text, "Carl: Herz-Solo");
        assert_eq!(panel.seats[1].text, "Bert");
        assert_eq!(panel.seats[3].text, "Dora");
    }

    #[test]
    fn test_timeout_marks_single_seat() {
        let mut snapshot = empty_snapshot();
        snapshot.timeout_seat = Seat::new(1);
        let panel = render(&snapshot);
        let marked: Vec<usize> = (0..4).filter(|&i| panel.seats[i].under_timeout).collect();
        assert_eq!(marked, vec![1]);
    }
}
