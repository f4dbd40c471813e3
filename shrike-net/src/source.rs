//! Profile source collaborator
//!
//! Fetches a profile snapshot plus its recent posts from the platform's
//! public web API. The trait is the seam: the aggregator and CLI only see
//! `ProfileFetch`, so tests and future sources swap in without touching the
//! core.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use shrike_core::{PostSample, ProfileSnapshot};

use crate::{create_client, NetConfig, NetError};

/// Errors from profile fetching
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Fetch failed with status {0}")]
    Status(StatusCode),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Malformed(String),

    #[error(transparent)]
    Net(#[from] NetError),
}

/// Snapshot plus the recent-post sequence, fetched together.
///
/// `posts` is reverse-chronological fetch order and is empty for private
/// accounts; no post data is accessed before the privacy flag is known.
#[derive(Debug, Clone)]
pub struct ProfileFetch {
    pub snapshot: ProfileSnapshot,
    pub posts: Vec<PostSample>,
}

/// Common interface for profile data sources
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, username: &str) -> Result<ProfileFetch, FetchError>;
}

const PROFILE_ENDPOINT: &str = "https://www.instagram.com/api/v1/users/web_profile_info/";

/// App id the web frontend sends; without it the endpoint returns a login wall
const IG_APP_ID: &str = "936619743392459";

/// Profile source backed by Instagram's public web API
pub struct InstagramSource {
    client: Client,
}

impl InstagramSource {
    pub fn new(config: &NetConfig) -> Result<Self, NetError> {
        Ok(Self {
            client: create_client(config)?,
        })
    }
}

#[async_trait]
impl ProfileSource for InstagramSource {
    async fn fetch(&self, username: &str) -> Result<ProfileFetch, FetchError> {
        debug!("Fetching profile: {}", username);

        let response = self
            .client
            .get(PROFILE_ENDPOINT)
            .query(&[("username", username)])
            .header("x-ig-app-id", IG_APP_ID)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(username.to_string()));
        }
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: WebProfileResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        let user = body
            .data
            .user
            .ok_or_else(|| FetchError::NotFound(username.to_string()))?;

        Ok(user.into_fetch())
    }
}

// Response shape of the web_profile_info endpoint, reduced to the fields the
// scan needs. Defaults keep missing fields tolerable; the endpoint's schema
// drifts.

#[derive(Debug, Deserialize)]
struct WebProfileResponse {
    data: ProfileData,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    username: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    biography: String,
    #[serde(default)]
    edge_followed_by: CountNode,
    #[serde(default)]
    edge_follow: CountNode,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    profile_pic_url: String,
    #[serde(default)]
    edge_owner_to_timeline_media: TimelineMedia,
}

#[derive(Debug, Default, Deserialize)]
struct CountNode {
    #[serde(default)]
    count: u64,
}

#[derive(Debug, Default, Deserialize)]
struct TimelineMedia {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    edges: Vec<MediaEdge>,
}

#[derive(Debug, Deserialize)]
struct MediaEdge {
    node: MediaNode,
}

#[derive(Debug, Deserialize)]
struct MediaNode {
    #[serde(default)]
    taken_at_timestamp: i64,
    #[serde(default)]
    edge_liked_by: CountNode,
    #[serde(default)]
    edge_media_to_comment: CountNode,
    #[serde(default)]
    edge_media_to_caption: CaptionEdges,
}

#[derive(Debug, Default, Deserialize)]
struct CaptionEdges {
    #[serde(default)]
    edges: Vec<CaptionEdge>,
}

#[derive(Debug, Deserialize)]
struct CaptionEdge {
    node: CaptionNode,
}

#[derive(Debug, Deserialize)]
struct CaptionNode {
    #[serde(default)]
    text: String,
}

impl UserNode {
    fn into_fetch(self) -> ProfileFetch {
        let is_private = self.is_private;

        let snapshot = ProfileSnapshot {
            username: self.username,
            full_name: self.full_name,
            biography: self.biography,
            follower_count: self.edge_followed_by.count,
            following_count: self.edge_follow.count,
            post_count: self.edge_owner_to_timeline_media.count,
            is_private,
            has_profile_picture: !self.profile_pic_url.is_empty(),
        };

        // Private accounts expose no timeline; do not touch the edges.
        let posts = if is_private {
            Vec::new()
        } else {
            self.edge_owner_to_timeline_media
                .edges
                .into_iter()
                .map(|edge| edge.node.into_sample())
                .collect()
        };

        ProfileFetch { snapshot, posts }
    }
}

impl MediaNode {
    fn into_sample(self) -> PostSample {
        let published_at = DateTime::<Utc>::from_timestamp(self.taken_at_timestamp, 0)
            .unwrap_or_else(Utc::now);

        let caption = self
            .edge_media_to_caption
            .edges
            .into_iter()
            .next()
            .map(|edge| edge.node.text)
            .unwrap_or_default();

        PostSample {
            published_at,
            caption,
            like_count: self.edge_liked_by.count,
            comment_count: self.edge_media_to_comment.count,
        }
    }
}
