use futures_util::StreamExt;
use serde::Deserialize;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::debug;

use crate::{AppResult, api::Dev};

#[derive(Deserialize)]
struct Frame {
    event: String,
    data: Dev,
}

/// The realtime subscription for one screen session. Connecting with the
/// `user` query parameter is the whole addressing mechanism: the server
/// routes match events for that identity to this socket, no handshake.
pub struct MatchChannel {
    rx: mpsc::UnboundedReceiver<Dev>,
    reader: JoinHandle<()>,
}

impl MatchChannel {
    pub async fn connect(ws_url: &str, user_id: &str) -> AppResult<MatchChannel> {
        let (mut stream, _) = connect_async(format!("{ws_url}/?user={user_id}")).await?;
        let (tx, rx) = mpsc::unbounded_channel();

        let reader = tokio::spawn(async move {
            while let Some(Ok(msg)) = stream.next().await {
                let Message::Text(text) = msg else {
                    continue;
                };
                let Ok(Frame { event, data }) = serde_json::from_str::<Frame>(text.as_str())
                else {
                    debug!("ignoring unparseable frame: {text}");
                    continue;
                };
                if event != "match" {
                    continue;
                }
                // receiver gone means the screen is gone
                if tx.send(data).is_err() {
                    break;
                }
            }
            debug!("match channel reader finished");
        });

        Ok(MatchChannel { rx, reader })
    }

    /// The next match event, in server-send order. `None` once the
    /// connection is gone.
    pub async fn recv(&mut self) -> Option<Dev> {
        self.rx.recv().await
    }

    pub fn close(&mut self) {
        self.reader.abort();
        self.rx.close();
    }
}

impl Drop for MatchChannel {
    fn drop(&mut self) {
        self.reader.abort();
    }
}
