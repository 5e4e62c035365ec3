//! Plain-text rendering of the board.

use pairing_core::{is_card_visible, Card, Selection};

use crate::session::BoardView;

const COLUMNS: usize = 4;
const MAX_LABEL_WIDTH: usize = 24;

/// Render the board as a numbered grid. Visible cards carry a `*`.
pub fn render(view: &BoardView) -> String {
    let round = &view.round;
    let (matched, total) = round.progress();

    let mut out = format!(
        "Category: {}   Matched: {}/{}\n",
        view.category.label(),
        matched,
        total
    );

    if round.cards.is_empty() {
        out.push_str("(no cards)\n");
        return out;
    }

    let width = round
        .cards
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let number_width = round.cards.len().to_string().len();

    for (row_index, cards) in round.cards.chunks(COLUMNS).enumerate() {
        let cells: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let number = row_index * COLUMNS + i + 1;
                let marker = if is_card_visible(round, card) { '*' } else { ' ' };
                format!(
                    "{:>nw$}.{}{:<w$}",
                    number,
                    marker,
                    truncate(&card.label, width),
                    nw = number_width,
                    w = width
                )
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    if round.is_complete() {
        out.push_str("All pairs matched! Type `r` to play again.\n");
    }

    out
}

/// Feedback line for picking `card` on the board in `view`, if any.
///
/// A pick is ignored while a mismatched pair is still face up, so the player
/// is told why nothing happened.
pub fn pick_feedback(view: &BoardView, card: &Card, outcome: &Selection) -> Option<&'static str> {
    match outcome {
        Selection::Mismatched { .. } => {
            Some("No match. The cards turn back shortly; type `s` to redraw.")
        }
        Selection::Ignored if view.round.selected.len() >= 2 => {
            Some("Wait for the two cards to turn back, then pick again (`s` redraws).")
        }
        Selection::Ignored if view.round.is_matched(card) => Some("That card is already matched."),
        Selection::Ignored => Some("That card is already face up."),
        Selection::Pending | Selection::Matched { .. } => None,
    }
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut short: String = label.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}
