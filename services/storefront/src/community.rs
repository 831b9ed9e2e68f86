//! Community feed view controller
//!
//! The feed is ordered by like count, most liked first. Publishing
//! validates locally (something to say, logged in, image under the size
//! cap) before any network call, then reloads the feed. A like only
//! bumps the rendered count after the backend acknowledged it.

use tracing::{error, info};

use common::error::{ClientError, ClientResult};
use common::models::{ImageAttachment, MAX_IMAGE_BYTES, NewPost, Post};
use gateway::StorefrontBackend;

pub struct CommunityView<B: StorefrontBackend> {
    backend: B,
    posts: Vec<Post>,
    generation: u64,
}

impl<B: StorefrontBackend> CommunityView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            posts: Vec::new(),
            generation: 0,
        }
    }

    /// The feed currently rendered, most liked first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Refresh the feed; stale responses are discarded and failures keep
    /// the previous feed rendered
    pub async fn load(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        match self.backend.list_posts().await {
            Ok(posts) => self.apply(generation, posts),
            Err(err) => error!("feed refresh failed: {err}"),
        }
    }

    fn apply(&mut self, generation: u64, mut posts: Vec<Post>) {
        if generation != self.generation {
            info!("discarding a stale feed response");
            return;
        }
        posts.sort_by(|a, b| b.like_count.cmp(&a.like_count));
        self.posts = posts;
    }

    /// Publish a post and reload the feed on success
    pub async fn create(
        &mut self,
        user_id: Option<i64>,
        content: &str,
        image: Option<ImageAttachment>,
    ) -> ClientResult<()> {
        let content = content.trim();
        if content.is_empty() && image.is_none() {
            return Err(ClientError::Validation(
                "Write something or attach an image".to_string(),
            ));
        }
        let Some(user_id) = user_id else {
            return Err(ClientError::LoginRequired);
        };
        if let Some(image) = &image {
            if image.bytes.len() > MAX_IMAGE_BYTES {
                return Err(ClientError::Validation(
                    "Images must be 5 MB or smaller".to_string(),
                ));
            }
        }

        self.backend
            .create_post(&NewPost {
                user_id,
                content: content.to_string(),
                image,
            })
            .await?;
        self.load().await;
        Ok(())
    }

    /// Like a post. The rendered count is only bumped once the backend
    /// acknowledged the like.
    pub async fn like(&mut self, user_id: i64, post_id: i64) -> ClientResult<()> {
        self.backend.like_post(post_id, user_id).await?;
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.like_count += 1;
        }
        Ok(())
    }
}
