use anyhow::Context;
use runout_cards::*;
use runout_core::BOARD_SIZE;
use runout_equity::Table;

/// Turns raw hand and board strings into a validated [`Table`].
///
/// Hands may arrive as separate arguments or as one whitespace-separated
/// string. Every card is checked before any duplicate is reported, and a
/// duplicate is named by the card itself.
pub fn table(hands: &[String], board: &str) -> anyhow::Result<Table> {
    let hands = hands
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect::<Vec<&str>>();
    anyhow::ensure!(!hands.is_empty(), "at least one hand is needed");
    let board = board.split_whitespace().collect::<String>();
    anyhow::ensure!(
        board.chars().count() <= BOARD_SIZE * 2,
        "maximum cards in board are {}",
        BOARD_SIZE
    );
    let mut seen = Vec::new();
    let mut holes = Vec::with_capacity(hands.len());
    for hand in hands {
        let chars = hand.chars().collect::<Vec<char>>();
        anyhow::ensure!(
            chars.len() == 4,
            "{} hand is not valid, hands must have 2 cards with a valid suit",
            hand
        );
        let a = card(&chars[..2], &format!("{} hand", hand))?;
        let b = card(&chars[2..], &format!("{} hand", hand))?;
        seen.extend([a, b]);
        holes.push((a, b));
    }
    let chars = board.chars().collect::<Vec<char>>();
    let mut community = Vec::with_capacity(BOARD_SIZE);
    for pair in chars.chunks(2) {
        let c = card(pair, &format!("{} board", board))?;
        seen.push(c);
        community.push(c);
    }
    if let Some(dupe) = duplicate(&seen) {
        anyhow::bail!("card {} is duplicated", dupe);
    }
    let holes = holes
        .into_iter()
        .map(Hole::try_from)
        .collect::<Result<Vec<Hole>, String>>()
        .map_err(anyhow::Error::msg)?;
    let board = Board::try_from(Hand::from(community)).map_err(anyhow::Error::msg)?;
    Table::try_from((holes, board))
}

fn card(chars: &[char], context: &str) -> anyhow::Result<Card> {
    let s = chars.iter().collect::<String>();
    Card::try_from(s.as_str())
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("{} card ({}) is not valid", s, context))
}

/// first card, in input order, that was already seen
fn duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = Hand::empty();
    for &card in cards {
        if seen.contains(&card) {
            return Some(card);
        }
        seen = seen.toggle(card);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use runout_equity::Seat;

    fn hands(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }
    fn error(hands: &[String], board: &str) -> String {
        format!("{:#}", table(hands, board).unwrap_err())
    }

    #[test]
    fn hands_and_board() {
        let table = table(&hands("AsKs QdQh"), "2h7hTc").unwrap();
        assert_eq!(table.n(), 2);
        assert_eq!(table.board().size(), 3);
        assert_eq!(table.hole(Seat::from(1)), Hole::try_from("QdQh").unwrap());
    }

    #[test]
    fn single_string_of_hands() {
        let table = table(&["AsKs QdQh 9c9d".to_string()], "").unwrap();
        assert_eq!(table.n(), 3);
        assert_eq!(table.missing(), 5);
    }

    #[test]
    fn board_with_spaces() {
        assert_eq!(table(&hands("AsKs QdQh"), "2h 7h Tc").unwrap().board().size(), 3);
    }

    #[test]
    fn single_hand_is_enough() {
        assert_eq!(table(&hands("AsKs"), "").unwrap().n(), 1);
    }

    #[test]
    fn no_hands() {
        assert_eq!(error(&[], "2h7hTc"), "at least one hand is needed");
        assert_eq!(error(&["  ".to_string()], ""), "at least one hand is needed");
    }

    #[test]
    fn six_card_board() {
        assert_eq!(
            error(&hands("AsKs QdQh"), "2h7hTc3d4d5d"),
            "maximum cards in board are 5"
        );
    }

    #[test]
    fn short_hand() {
        assert!(error(&hands("AsK QdQh"), "").starts_with("AsK hand is not valid"));
    }

    #[test]
    fn bad_card_is_named() {
        assert!(error(&hands("AsKx QdQh"), "").starts_with("Kx card (AsKx hand) is not valid"));
        assert!(error(&hands("AsKs QdQh"), "2h7").starts_with("7 card (2h7 board) is not valid"));
    }

    #[test]
    fn duplicate_card_is_named() {
        assert_eq!(error(&hands("AsKs AsQh"), ""), "card As is duplicated");
        assert_eq!(error(&hands("AsKs QdQh"), "Qd2c3c"), "card Qd is duplicated");
        assert_eq!(error(&hands("AsAs QdQh"), ""), "card As is duplicated");
    }

    #[test]
    fn too_many_hands() {
        let mut deck = Deck::new();
        let hands = (0..24).map(|_| deck.hole().to_string()).collect::<Vec<_>>();
        assert!(table(&hands, "").is_err());
    }
}
