use serde::{Deserialize, Serialize};

use crate::AppResult;

/// A candidate developer profile, exactly as the server hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dev {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Like,
    Dislike,
}

impl Judgment {
    fn path_segment(self) -> &'static str {
        match self {
            Judgment::Like => "likes",
            Judgment::Dislike => "dislikes",
        }
    }
}

/// Client for the tindev HTTP API. Cheap to clone, one per process is fine.
#[derive(Clone)]
pub struct Api {
    http: reqwest::Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Api {
        Api {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Registers (or retrieves) a dev by GitHub username. The `_id` of the
    /// returned record is the durable identity everything else is keyed by.
    pub async fn create_dev(&self, username: &str) -> AppResult<Dev> {
        let dev = self
            .http
            .post(format!("{}/devs", self.base_url))
            .json(&serde_json::json!({ "username": username }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(dev)
    }

    /// The candidate feed for `user_id`, in presentation order. The server
    /// already excludes devs this user judged; the client doesn't filter.
    pub async fn fetch_devs(&self, user_id: &str) -> AppResult<Vec<Dev>> {
        let devs = self
            .http
            .get(format!("{}/devs", self.base_url))
            .header("user", user_id)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(devs)
    }

    /// Reports a like/dislike on `target_id`. The response body is ignored;
    /// only the status matters.
    pub async fn report(&self, user_id: &str, target_id: &str, judgment: Judgment) -> AppResult<()> {
        self.http
            .post(format!(
                "{}/devs/{}/{}",
                self.base_url,
                target_id,
                judgment.path_segment()
            ))
            .header("user", user_id)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
