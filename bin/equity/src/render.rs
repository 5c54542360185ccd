use colored::Colorize;
use runout_cards::*;
use runout_core::Count;
use runout_core::Percentage;
use runout_equity::*;
use std::collections::BTreeMap;
use std::time::Duration;

const LABEL: usize = 16;
const COLUMN: usize = 8;

/// Seats ordered by descending wins. Equal wins keep input order.
pub fn order(equities: &Equities) -> Vec<Seat> {
    let mut seats = (0..equities.tallies().len())
        .map(Seat::from)
        .collect::<Vec<Seat>>();
    seats.sort_by_key(|&seat| std::cmp::Reverse(equities.tally(seat).wins()));
    seats
}

/// One category cell. Undefined and zero both print as a dot.
pub fn cell(percentage: Option<Percentage>) -> String {
    match percentage {
        None => ".".to_string(),
        Some(p) if p == 0.0 => ".".to_string(),
        Some(p) if p < 0.1 => "<0.1%".to_string(),
        Some(p) => format!("{:.1}%", p),
    }
}

fn share(percentage: Option<Percentage>) -> String {
    percentage
        .map(|p| format!("{:.1}%", p))
        .unwrap_or_else(|| ".".to_string())
}

fn paint(card: Card) -> colored::ColoredString {
    let text = card.to_string();
    match card.suit() {
        Suit::C => text.green(),
        Suit::D => text.blue(),
        Suit::H => text.red(),
        Suit::S => text.normal(),
    }
}

/// Cards printed with suit colours. Visible width stays two per card.
pub fn cards(hand: Hand) -> String {
    hand.into_iter().map(|card| paint(card).to_string()).collect()
}

fn hole(hole: Hole) -> String {
    let (lo, hi) = hole.cards();
    format!("{}{}", paint(hi), paint(lo))
}

/// right-aligns text whose visible width is known, ignoring escape codes
fn pad(text: String, visible: usize, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), text)
}

/// The board, the win/tie table, and the category breakdown.
pub fn text(table: &Table, equities: &Equities, elapsed: Duration) -> String {
    let total = equities.total();
    let seats = order(equities);
    let mut out = String::new();
    if table.board().size() > 0 {
        out.push_str(&format!("board: {}\n\n", cards(Hand::from(table.board()))));
    }
    out.push_str(&format!("{:<LABEL$}{:>COLUMN$}{:>COLUMN$}\n", "hand", "win", "tie"));
    for &seat in seats.iter() {
        let tally = equities.tally(seat);
        out.push_str(&format!(
            "{}{}{:>COLUMN$}{:>COLUMN$}\n",
            hole(table.hole(seat)),
            " ".repeat(LABEL - 4),
            share(tally.win_percentage(total)),
            share(tally.tie_percentage(total)),
        ));
    }
    out.push('\n');
    out.push_str(&" ".repeat(LABEL));
    for &seat in seats.iter() {
        out.push_str(&pad(hole(table.hole(seat)), 4, COLUMN));
    }
    out.push('\n');
    for category in Category::all().into_iter() {
        out.push_str(&format!("{:<LABEL$}", category.to_string()));
        for &seat in seats.iter() {
            let p = equities.tally(seat).category_percentage(category);
            out.push_str(&format!("{:>COLUMN$}", cell(p)));
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!(
        "{} combinations calculated in {:.2?}",
        total, elapsed
    ));
    out
}

/// Machine-readable result, one entry per hand in input order.
#[derive(Debug, serde::Serialize)]
pub struct Report {
    board: String,
    total: Count,
    elapsed_ms: f64,
    hands: Vec<Line>,
}

#[derive(Debug, serde::Serialize)]
struct Line {
    seat: Seat,
    hand: String,
    wins: Count,
    ties: Count,
    win: Option<Percentage>,
    tie: Option<Percentage>,
    equity: Option<Percentage>,
    categories: BTreeMap<String, Count>,
}

impl Report {
    pub fn new(table: &Table, equities: &Equities, elapsed: Duration) -> Self {
        let total = equities.total();
        let hands = table
            .seats()
            .map(|seat| {
                let tally = equities.tally(seat);
                Line {
                    seat,
                    hand: table.hole(seat).to_string(),
                    wins: tally.wins(),
                    ties: tally.ties(),
                    win: tally.win_percentage(total),
                    tie: tally.tie_percentage(total),
                    equity: tally.equity(total),
                    categories: Category::all()
                        .into_iter()
                        .filter(|&c| tally.count(c) > 0)
                        .map(|c| (c.to_string(), tally.count(c)))
                        .collect(),
                }
            })
            .collect();
        Self {
            board: table.board().to_string(),
            total,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            hands,
        }
    }
    pub fn json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(holes: &str, board: &str) -> Table {
        let holes = holes
            .split_whitespace()
            .map(|h| Hole::try_from(h).unwrap())
            .collect::<Vec<_>>();
        Table::try_from((holes, Board::try_from(board).unwrap())).unwrap()
    }

    #[test]
    fn cells() {
        assert_eq!(cell(None), ".");
        assert_eq!(cell(Some(0.0)), ".");
        assert_eq!(cell(Some(0.04)), "<0.1%");
        assert_eq!(cell(Some(0.1)), "0.1%");
        assert_eq!(cell(Some(45.25)), "45.2%");
        assert_eq!(cell(Some(100.0)), "100.0%");
    }

    #[test]
    fn most_wins_first() {
        let table = table("7c2d AsAh KdKc", "3s8hQc");
        let equities = table_equities(&table);
        assert_eq!(order(&equities), vec![Seat::from(1), Seat::from(2), Seat::from(0)]);
    }

    #[test]
    fn text_layout() {
        colored::control::set_override(false);
        let table = table("AsAh KdKc", "2c7d9hJs3c");
        let equities = table_equities(&table);
        let text = text(&table, &equities, Duration::from_millis(3));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "board: 2c3c7d9hJs");
        assert!(lines[3].starts_with("AsAh") && lines[3].ends_with("100.0%    0.0%"));
        assert!(lines[4].starts_with("KdKc") && lines[4].ends_with("0.0%    0.0%"));
        assert!(text.contains(&format!("{:<16}{:>8}{:>8}\n", "pair", "100.0%", ".")));
        assert!(text.contains(&format!("{:<16}{:>8}{:>8}\n", "flush", ".", ".")));
        assert!(text.ends_with("1 combinations calculated in 3.00ms"));
    }

    #[test]
    fn json_report() {
        let table = table("AsAh KdKc", "2c7d9hJs3c");
        let equities = table_equities(&table);
        let json = Report::new(&table, &equities, Duration::ZERO).json().unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["hands"][0]["hand"], "AsAh");
        assert_eq!(value["hands"][0]["wins"], 1);
        assert_eq!(value["hands"][0]["categories"]["pair"], 1);
        assert_eq!(value["hands"][1]["seat"], 1);
        assert_eq!(value["hands"][1]["win"], 0.0);
    }

    fn table_equities(table: &Table) -> Equities {
        Calculation::new(table.clone()).run(&Showdown).unwrap()
    }
}
