//! Round construction: pairs in, shuffled cards out.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Card, CardSide, Pair};

static NEXT_ROUND_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one round. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(u64);

impl RoundId {
    pub fn fresh() -> Self {
        Self(NEXT_ROUND_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round-{}", self.0)
    }
}

/// Everything the board needs for one play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub round: RoundId,
    pub cards: Vec<Card>,
    /// At most two cards, in click order.
    pub selected: Vec<Card>,
    pub matched_keys: BTreeSet<String>,
}

impl RoundState {
    /// Start a round over already shuffled cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            round: RoundId::fresh(),
            cards,
            selected: Vec::new(),
            matched_keys: BTreeSet::new(),
        }
    }

    /// Shuffle `pairs` into a new round.
    pub fn from_pairs(pairs: &[Pair]) -> Self {
        Self::new(build_round(pairs))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Look up a card of this round by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, card: &Card) -> bool {
        self.selected.iter().any(|c| c.id == card.id)
    }

    pub fn is_matched(&self, card: &Card) -> bool {
        self.matched_keys.contains(&card.match_key)
    }

    /// Matched keys against the number of distinct keys on the board.
    pub fn progress(&self) -> (usize, usize) {
        let total: BTreeSet<&str> = self.cards.iter().map(|c| c.match_key.as_str()).collect();
        let matched = total
            .iter()
            .filter(|key| self.matched_keys.contains(**key))
            .count();
        (matched, total.len())
    }

    /// True once every card on a non-empty board has been matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| self.is_matched(c))
    }
}

/// Expand pairs into cards and shuffle them with the thread-local RNG.
pub fn build_round(pairs: &[Pair]) -> Vec<Card> {
    build_round_with_rng(pairs, &mut rand::rng())
}

/// Expand pairs into cards and shuffle them with the given RNG.
///
/// Each pair yields a term card and a match card, both keyed by the pair's
/// match text. The shuffle is a uniform Fisher-Yates permutation; a result
/// equal to the unshuffled order is drawn again.
pub fn build_round_with_rng<R: Rng + ?Sized>(pairs: &[Pair], rng: &mut R) -> Vec<Card> {
    let mut cards = expand_pairs(pairs);
    if cards.len() < 2 {
        return cards;
    }

    let original: Vec<String> = cards.iter().map(|c| c.id.clone()).collect();
    loop {
        cards.shuffle(rng);
        if cards.iter().zip(&original).any(|(card, id)| card.id != *id) {
            return cards;
        }
    }
}

/// Flatmap pairs into cards in (term, match) order with unique ids.
fn expand_pairs(pairs: &[Pair]) -> Vec<Card> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut cards = Vec::with_capacity(pairs.len() * 2);

    for pair in pairs {
        for (side, label) in [
            (CardSide::Term, &pair.term),
            (CardSide::Match, &pair.match_text),
        ] {
            let base = format!("{}-{}", label, side.as_str());
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            // Suffixed ids end in a digit, base ids never do.
            let id = if *count == 1 {
                base
            } else {
                format!("{}-{}", base, count)
            };

            cards.push(Card {
                id,
                label: label.clone(),
                match_key: pair.match_text.clone(),
                side,
            });
        }
    }

    cards
}
