use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    AppResult, Error,
    api::{Api, Dev, Judgment},
    swipe::{MatchChannel, SwipeQueue},
};

/// One swipe-screen session for a resolved identity. Owns the candidate
/// queue, the single active-match slot, the realtime subscription and the
/// ledger of judgments the server never acknowledged.
pub struct Screen {
    user_id: String,
    api: Api,
    queue: SwipeQueue,
    active_match: Option<Dev>,
    channel: MatchChannel,
    pending: Vec<String>,
    failed_tx: mpsc::UnboundedSender<String>,
    failed_rx: mpsc::UnboundedReceiver<String>,
}

impl Screen {
    /// Fetches the candidate feed and opens the match subscription, the two
    /// running concurrently; neither waits on the other.
    pub async fn mount(api: Api, ws_url: &str, user_id: String) -> AppResult<Screen> {
        let (devs, channel) = tokio::join!(
            api.fetch_devs(&user_id),
            MatchChannel::connect(ws_url, &user_id),
        );

        let mut queue = SwipeQueue::new();
        queue.ingest(devs?);
        let channel = channel?;
        info!(user_id = %user_id, devs = queue.len(), "screen mounted");

        let (failed_tx, failed_rx) = mpsc::unbounded_channel();
        Ok(Screen {
            user_id,
            api,
            queue,
            active_match: None,
            channel,
            pending: Vec::new(),
            failed_tx,
            failed_rx,
        })
    }

    pub fn like(&mut self) -> AppResult<Dev> {
        self.judge(Judgment::Like)
    }

    pub fn dislike(&mut self) -> AppResult<Dev> {
        self.judge(Judgment::Dislike)
    }

    /// Pops the head and reports the judgment without waiting for the
    /// server. The removal is optimistic: a failed report doesn't put the
    /// dev back, it lands in the reconciliation ledger instead. If the
    /// screen is gone by the time the report settles, the failure send is a
    /// no-op, so nothing mutates state for a dead session.
    fn judge(&mut self, judgment: Judgment) -> AppResult<Dev> {
        let target = self.queue.advance().ok_or(Error::InvalidState)?;

        let api = self.api.clone();
        let user_id = self.user_id.clone();
        let target_id = target.id.clone();
        let failed_tx = self.failed_tx.clone();
        tokio::spawn(async move {
            if let Err(err) = api.report(&user_id, &target_id, judgment).await {
                warn!(%target_id, %err, "judgment report failed");
                let _ = failed_tx.send(target_id);
            }
        });

        Ok(target)
    }

    pub fn head(&self) -> Option<&Dev> {
        self.queue.head()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Terminal for the session; there is no refetch.
    pub fn out_of_devs(&self) -> bool {
        self.queue.is_empty()
    }

    /// Waits for the next match event. Pends forever once the channel is
    /// closed, so a `select!` around it simply stops firing.
    pub async fn next_match(&mut self) -> Dev {
        match self.channel.recv().await {
            Some(dev) => dev,
            None => std::future::pending().await,
        }
    }

    /// A new match always replaces whatever was on display.
    pub fn apply_match(&mut self, dev: Dev) {
        info!(dev = %dev.name, "it's a match");
        self.active_match = Some(dev);
    }

    pub fn active_match(&self) -> Option<&Dev> {
        self.active_match.as_ref()
    }

    /// Purely local; the server never hears about dismissals.
    pub fn dismiss_match(&mut self) {
        self.active_match = None;
    }

    /// Ids whose report failed, in judgment order. The queue has already
    /// advanced past them; a later fetch can reconcile.
    pub fn pending_reconciliation(&mut self) -> &[String] {
        while let Ok(id) = self.failed_rx.try_recv() {
            self.pending.push(id);
        }
        &self.pending
    }

    /// Tears the subscription down. Dropping the screen does this too, but
    /// logout and quit paths close it deliberately.
    pub fn close(mut self) {
        self.channel.close();
    }
}
