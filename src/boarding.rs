use crate::seat::Seat;
use colored::Colorize;

/// What a card printer is handed for each occupied seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardingCard<'a> {
    pub passenger: &'a str,
    pub seat: Seat,
    pub flight_number: &'a str,
    pub aircraft_model: &'a str,
}

pub fn render_card(card: &BoardingCard<'_>) -> String {
    let output = format!(
        "| Name: {}  Flight: {}  Seat: {}  Aircraft: {} |",
        card.passenger, card.flight_number, card.seat, card.aircraft_model
    );
    let inner = output.chars().count() - 2;
    let banner = format!("+{}+", "-".repeat(inner));
    let border = format!("|{}|", " ".repeat(inner));
    [banner.clone(), border.clone(), output, border, banner].join("\n")
}

pub fn console_card_printer(card: &BoardingCard<'_>) {
    for line in render_card(card).lines() {
        if line.starts_with('+') {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> BoardingCard<'static> {
        BoardingCard {
            passenger: "Cathy",
            seat: Seat::new(7, 'D'),
            flight_number: "AA123",
            aircraft_model: "Airbus",
        }
    }

    #[test]
    fn test_render_card_layout() {
        let rendered = render_card(&card());
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "| Name: Cathy  Flight: AA123  Seat: 7D  Aircraft: Airbus |");
        assert_eq!(lines[0], lines[4]);
        assert_eq!(lines[1], lines[3]);
        assert!(lines[0].starts_with("+-") && lines[0].ends_with("-+"));
        assert!(lines[1].trim_matches('|').chars().all(|c| c == ' '));
    }

    #[test]
    fn test_render_card_lines_share_width() {
        let rendered = render_card(&BoardingCard {
            passenger: "Zoë Ångström",
            ..card()
        });
        let widths = rendered.lines().map(|l| l.chars().count()).collect::<Vec<usize>>();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
