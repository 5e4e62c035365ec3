//! Card selection and match detection.
//!
//! A round moves through `Idle -> OneSelected -> Evaluating` and back to
//! `Idle`, either immediately on a match or through [`clear_selection`] once
//! the caller's feedback delay has passed on a mismatch.

use serde::{Deserialize, Serialize};

use crate::round::{RoundId, RoundState};
use crate::types::Card;

/// Deferred clear for a mismatched selection.
///
/// Only clears the round and the cards it was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearTicket {
    pub round: RoundId,
    pub card_ids: [String; 2],
}

/// What a click did to the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Selection {
    /// The click was not accepted; state is unchanged.
    Ignored,
    /// First card of a pair is now selected.
    Pending,
    /// Both cards share a key, which is now matched.
    Matched { key: String },
    /// Both cards stay selected until the ticket is applied.
    Mismatched { ticket: ClearTicket },
}

/// Select `card` in `state`.
///
/// Ignored when two cards are already selected, when the card is already
/// selected or matched, or when it does not belong to the round.
pub fn select_card(state: &RoundState, card: &Card) -> (RoundState, Selection) {
    if state.selected.len() >= 2
        || state.is_selected(card)
        || state.is_matched(card)
        || state.card(&card.id).is_none()
    {
        return (state.clone(), Selection::Ignored);
    }

    let mut next = state.clone();
    next.selected.push(card.clone());

    if next.selected.len() < 2 {
        return (next, Selection::Pending);
    }

    let (first, second) = (&next.selected[0], &next.selected[1]);
    if first.match_key == second.match_key && first.id != second.id {
        let key = first.match_key.clone();
        next.matched_keys.insert(key.clone());
        next.selected.clear();
        (next, Selection::Matched { key })
    } else {
        let ticket = ClearTicket {
            round: next.round,
            card_ids: [first.id.clone(), second.id.clone()],
        };
        (next, Selection::Mismatched { ticket })
    }
}

/// Apply a deferred clear. Stale tickets leave the state untouched.
pub fn clear_selection(state: &RoundState, ticket: &ClearTicket) -> RoundState {
    let current: Vec<&str> = state.selected.iter().map(|c| c.id.as_str()).collect();
    let issued: Vec<&str> = ticket.card_ids.iter().map(String::as_str).collect();

    if state.round != ticket.round || current != issued {
        return state.clone();
    }

    let mut next = state.clone();
    next.selected.clear();
    next
}

/// Whether the card should be shown as selected or matched.
pub fn is_card_visible(state: &RoundState, card: &Card) -> bool {
    state.is_selected(card) || state.is_matched(card)
}
