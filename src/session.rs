use tracing::info;

use crate::{
    AppResult,
    api::Api,
    store::{Store, USER_KEY},
};

/// One read at startup. A failed or empty read both mean "no identity":
/// the caller stays on the login prompt, nothing retries.
pub async fn resolve_existing(store: &Store) -> Option<String> {
    store.get(USER_KEY).await.ok().flatten()
}

/// Exchanges a username for a server-assigned identity and persists it.
pub async fn login(api: &Api, store: &Store, username: &str) -> AppResult<String> {
    let dev = api.create_dev(username).await?;
    store.set(USER_KEY, &dev.id).await?;
    info!(user_id = %dev.id, "logged in");
    Ok(dev.id)
}

pub async fn logout(store: &Store) -> AppResult<()> {
    info!("logging out");
    store.clear().await
}
