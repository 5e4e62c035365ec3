//! Game session: the single owner of the round being played.

use pairing_core::{
    clear_selection, select_card, Category, ClearTicket, NewPair, Pair, RoundState, Selection,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::api::{ClientError, PairsClient};

/// What the board shows right now.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub category: Category,
    pub round: RoundState,
}

struct SessionInner {
    category: Category,
    round: RoundState,
    /// Bumped by every load; a fetch only lands if it is still the latest.
    load_seq: u64,
    pending_clear: Option<JoinHandle<()>>,
}

impl SessionInner {
    fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

/// Session controller. Clones share the same board.
#[derive(Clone)]
pub struct GameSession {
    client: PairsClient,
    mismatch_delay: Duration,
    inner: Arc<Mutex<SessionInner>>,
}

impl GameSession {
    /// Create a session with an empty board for `category`.
    pub fn new(client: PairsClient, category: Category, mismatch_delay: Duration) -> Self {
        Self {
            client,
            mismatch_delay,
            inner: Arc::new(Mutex::new(SessionInner {
                category,
                round: RoundState::empty(),
                load_seq: 0,
                pending_clear: None,
            })),
        }
    }

    /// Fetch `category` and replace the board with a fresh round.
    ///
    /// The current board stays in place until the fetch succeeds. On error
    /// nothing changes and the caller may retry.
    pub async fn load(&self, category: Category) -> Result<(), ClientError> {
        let seq = {
            let mut inner = self.inner.lock().await;
            inner.load_seq += 1;
            inner.load_seq
        };

        let pairs = self.client.fetch_pairs(category).await.map_err(|e| {
            tracing::warn!(%category, error = %e, "failed to fetch pairs");
            e
        })?;

        self.install(seq, category, &pairs).await;
        Ok(())
    }

    /// Reshuffle the current category, dropping selection and matches.
    pub async fn reset(&self) -> Result<(), ClientError> {
        let category = self.inner.lock().await.category;
        self.load(category).await
    }

    /// Switch the board to another category.
    pub async fn change_category(&self, category: Category) -> Result<(), ClientError> {
        self.load(category).await
    }

    /// Replace the board with already fetched pairs.
    pub async fn replace_round(&self, category: Category, pairs: &[Pair]) {
        let seq = {
            let mut inner = self.inner.lock().await;
            inner.load_seq += 1;
            inner.load_seq
        };
        self.install(seq, category, pairs).await;
    }

    async fn install(&self, seq: u64, category: Category, pairs: &[Pair]) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.load_seq != seq {
            tracing::debug!(%category, "discarding superseded fetch");
            return false;
        }

        inner.cancel_pending_clear();
        inner.round = RoundState::from_pairs(pairs);
        inner.category = category;

        tracing::info!(
            %category,
            round = %inner.round.round,
            cards = inner.round.cards.len(),
            "new round"
        );
        true
    }

    /// Click the card with `card_id`.
    ///
    /// A mismatch leaves both cards selected and schedules their clear after
    /// the feedback delay.
    pub async fn click(&self, card_id: &str) -> Selection {
        let mut inner = self.inner.lock().await;
        let Some(card) = inner.round.card(card_id).cloned() else {
            return Selection::Ignored;
        };

        let (next, outcome) = select_card(&inner.round, &card);
        inner.round = next;

        match &outcome {
            Selection::Matched { key } => {
                let (matched, total) = inner.round.progress();
                tracing::debug!(%key, matched, total, "pair matched");
            }
            Selection::Mismatched { ticket } => {
                tracing::debug!(cards = ?ticket.card_ids, "pair mismatched");
                inner.cancel_pending_clear();
                inner.pending_clear = Some(self.schedule_clear(ticket.clone()));
            }
            Selection::Pending | Selection::Ignored => {}
        }

        outcome
    }

    fn schedule_clear(&self, ticket: ClearTicket) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let delay = self.mismatch_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut inner = inner.lock().await;
            if inner.round.round == ticket.round {
                inner.round = clear_selection(&inner.round, &ticket);
                inner.pending_clear = None;
            }
        })
    }

    /// Submit a new pair and reload the board when it belongs on it.
    ///
    /// The pair is stored once the backend accepts it. A failed reload only
    /// leaves the old board up, so it is logged rather than returned.
    pub async fn add_pair(&self, new_pair: &NewPair) -> Result<Pair, ClientError> {
        let pair = self.client.add_pair(new_pair).await?;
        tracing::info!(term = %pair.term, category = %pair.category, "pair added");

        let current = self.inner.lock().await.category;
        if current.includes(pair.category) {
            if let Err(e) = self.load(current).await {
                tracing::warn!(%current, error = %e, "board not refreshed after adding pair");
            }
        }

        Ok(pair)
    }

    /// Copy of the board for rendering.
    pub async fn snapshot(&self) -> BoardView {
        let inner = self.inner.lock().await;
        BoardView {
            category: inner.category,
            round: inner.round.clone(),
        }
    }

    pub fn client(&self) -> &PairsClient {
        &self.client
    }
}
