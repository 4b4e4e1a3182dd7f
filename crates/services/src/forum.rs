//! # Forum Service
//!
//! Builds forum entities (ids and timestamps are assigned here, never by
//! callers) and delegates persistence to the repository port.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use domains::models::{Comment, ForumPost, Reply};
use domains::ports::ForumRepo;
use domains::{AppError, Result};

pub struct ForumService {
    repo: Arc<dyn ForumRepo>,
}

impl ForumService {
    pub fn new(repo: Arc<dyn ForumRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<ForumPost>> {
        self.repo.list_posts().await
    }

    pub async fn create_post(
        &self,
        title: String,
        author: String,
        tags: Vec<String>,
    ) -> Result<ForumPost> {
        require_filled("title", &title)?;
        require_filled("author", &author)?;

        let post = ForumPost::new(title, author, tags);
        debug!(post_id = %post.id, "creating forum post");
        self.repo.create_post(post).await
    }

    pub async fn add_comment(
        &self,
        post_id: Uuid,
        author: String,
        text: String,
    ) -> Result<ForumPost> {
        require_filled("author", &author)?;
        require_filled("comment", &text)?;

        self.repo
            .append_comment(post_id, Comment::new(author, text))
            .await
    }

    pub async fn add_reply(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        author: String,
        text: String,
    ) -> Result<ForumPost> {
        require_filled("author", &author)?;
        require_filled("comment", &text)?;

        self.repo
            .append_reply(post_id, comment_id, Reply::new(author, text))
            .await
    }

    pub async fn like_post(&self, post_id: Uuid) -> Result<ForumPost> {
        self.repo.increment_likes(post_id).await
    }
}

fn require_filled(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::ports::MockForumRepo;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn create_post_assigns_id_and_zeroed_counters() {
        let mut repo = MockForumRepo::new();
        repo.expect_create_post()
            .withf(|post| {
                post.title == "Wheat rust outbreak"
                    && post.like_count == 0
                    && post.reply_count == 0
                    && post.comments.is_empty()
            })
            .returning(|post| Ok(post));

        let service = ForumService::new(Arc::new(repo));
        let post = service
            .create_post(
                "Wheat rust outbreak".to_string(),
                "asha".to_string(),
                vec!["disease".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(post.author, "asha");
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_the_store() {
        let mut repo = MockForumRepo::new();
        repo.expect_create_post().never();

        let service = ForumService::new(Arc::new(repo));
        let err = service
            .create_post("   ".to_string(), "asha".to_string(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn add_reply_targets_the_identified_comment() {
        let post_id = Uuid::now_v7();
        let comment_id = Uuid::now_v7();

        let mut repo = MockForumRepo::new();
        repo.expect_append_reply()
            .with(
                eq(post_id),
                eq(comment_id),
                mockall::predicate::function(|reply: &Reply| reply.text == "try neem oil"),
            )
            .returning(|_, _, _| {
                Ok(ForumPost::new(
                    "t".to_string(),
                    "a".to_string(),
                    Vec::new(),
                ))
            });

        let service = ForumService::new(Arc::new(repo));
        service
            .add_reply(
                post_id,
                comment_id,
                "ravi".to_string(),
                "try neem oil".to_string(),
            )
            .await
            .unwrap();
    }
}
