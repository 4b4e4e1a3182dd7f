//! # SQLite Forum Repository
//!
//! Maps the relational rows back to the `domains` forum aggregate. Every
//! mutation is a single statement (or one transaction), so concurrent
//! writers never overwrite each other's appends.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use uuid::Uuid;

use domains::models::{Comment, ForumPost, Reply};
use domains::ports::ForumRepo;
use domains::{AppError, Result};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS posts (
        id          BLOB PRIMARY KEY,
        title       TEXT NOT NULL,
        author      TEXT NOT NULL,
        tags        TEXT NOT NULL,
        likes       INTEGER NOT NULL DEFAULT 0,
        created_at  TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id          BLOB PRIMARY KEY,
        post_id     BLOB NOT NULL REFERENCES posts(id),
        author      TEXT NOT NULL,
        body        TEXT NOT NULL,
        created_at  TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS replies (
        id          BLOB PRIMARY KEY,
        comment_id  BLOB NOT NULL REFERENCES comments(id),
        author      TEXT NOT NULL,
        body        TEXT NOT NULL,
        created_at  TEXT NOT NULL
    )",
];

pub struct SqliteForumRepo {
    pool: SqlitePool,
}

// Helpers for UUID conversion
fn uuid_to_blob(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

fn blob_to_uuid(blob: &[u8]) -> Uuid {
    Uuid::from_slice(blob).unwrap_or_default()
}

fn db(err: sqlx::Error) -> AppError {
    AppError::Internal(format!("database error: {err}"))
}

impl SqliteForumRepo {
    /// Opens (creating if missing) the database at `url` and ensures the
    /// schema exists.
    ///
    /// SQLite allows one writer at a time; a single pooled connection also
    /// keeps `sqlite::memory:` databases visible to every caller.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(db)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(db)?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await.map_err(db)?;
        }

        Ok(Self { pool })
    }

    /// Loads the full post aggregate: post row, its comments in creation
    /// order, and each comment's replies in creation order.
    async fn load_post(&self, post_id: Uuid) -> Result<ForumPost> {
        let row = sqlx::query(
            "SELECT id, title, author, tags, likes, created_at FROM posts WHERE id = ?",
        )
        .bind(uuid_to_blob(post_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(db)?
        .ok_or_else(|| AppError::NotFound("post", post_id.to_string()))?;

        let comment_rows = sqlx::query(
            "SELECT id, author, body, created_at FROM comments
             WHERE post_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(uuid_to_blob(post_id))
        .fetch_all(&self.pool)
        .await
        .map_err(db)?;

        let mut comments = Vec::with_capacity(comment_rows.len());
        for comment_row in comment_rows {
            let comment_id = blob_to_uuid(comment_row.get::<Vec<u8>, _>("id").as_slice());

            let replies = sqlx::query(
                "SELECT id, author, body, created_at FROM replies
                 WHERE comment_id = ? ORDER BY created_at ASC, id ASC",
            )
            .bind(uuid_to_blob(comment_id))
            .fetch_all(&self.pool)
            .await
            .map_err(db)?
            .into_iter()
            .map(|row| Reply {
                id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
                author: row.get("author"),
                text: row.get("body"),
                created_at: row.get::<DateTime<Utc>, _>("created_at"),
            })
            .collect();

            comments.push(Comment {
                id: comment_id,
                author: comment_row.get("author"),
                text: comment_row.get("body"),
                created_at: comment_row.get::<DateTime<Utc>, _>("created_at"),
                replies,
            });
        }

        Ok(ForumPost {
            id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
            title: row.get("title"),
            author: row.get("author"),
            tags: serde_json::from_str(&row.get::<String, _>("tags")).unwrap_or_default(),
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
            like_count: row.get("likes"),
            reply_count: comments.len(),
            comments,
        })
    }

    async fn post_exists(&self, post_id: Uuid) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM posts WHERE id = ?")
            .bind(uuid_to_blob(post_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(db)?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl ForumRepo for SqliteForumRepo {
    async fn list_posts(&self) -> Result<Vec<ForumPost>> {
        let rows = sqlx::query("SELECT id FROM posts ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db)?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let id = blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice());
            posts.push(self.load_post(id).await?);
        }
        Ok(posts)
    }

    async fn create_post(&self, post: ForumPost) -> Result<ForumPost> {
        sqlx::query(
            "INSERT INTO posts (id, title, author, tags, likes, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(post.id))
        .bind(&post.title)
        .bind(&post.author)
        .bind(serde_json::to_string(&post.tags).unwrap_or_else(|_| "[]".to_string()))
        .bind(post.like_count)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(db)?;

        self.load_post(post.id).await
    }

    async fn append_comment(&self, post_id: Uuid, comment: Comment) -> Result<ForumPost> {
        if !self.post_exists(post_id).await? {
            return Err(AppError::NotFound("post", post_id.to_string()));
        }

        sqlx::query(
            "INSERT INTO comments (id, post_id, author, body, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(comment.id))
        .bind(uuid_to_blob(post_id))
        .bind(&comment.author)
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(db)?;

        self.load_post(post_id).await
    }

    async fn append_reply(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        reply: Reply,
    ) -> Result<ForumPost> {
        let comment = sqlx::query("SELECT 1 FROM comments WHERE id = ? AND post_id = ?")
            .bind(uuid_to_blob(comment_id))
            .bind(uuid_to_blob(post_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(db)?;

        if comment.is_none() {
            return Err(AppError::NotFound("comment", comment_id.to_string()));
        }

        sqlx::query(
            "INSERT INTO replies (id, comment_id, author, body, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(reply.id))
        .bind(uuid_to_blob(comment_id))
        .bind(&reply.author)
        .bind(&reply.text)
        .bind(reply.created_at)
        .execute(&self.pool)
        .await
        .map_err(db)?;

        self.load_post(post_id).await
    }

    async fn increment_likes(&self, post_id: Uuid) -> Result<ForumPost> {
        let result = sqlx::query("UPDATE posts SET likes = likes + 1 WHERE id = ?")
            .bind(uuid_to_blob(post_id))
            .execute(&self.pool)
            .await
            .map_err(db)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("post", post_id.to_string()));
        }

        self.load_post(post_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    async fn repo() -> SqliteForumRepo {
        SqliteForumRepo::connect("sqlite::memory:").await.unwrap()
    }

    fn post(title: &str) -> ForumPost {
        ForumPost::new(title.to_string(), "asha".to_string(), vec!["soil".to_string()])
    }

    #[tokio::test]
    async fn posts_list_most_recent_first() {
        let repo = repo().await;

        let mut older = post("older");
        older.created_at = Utc::now() - Duration::hours(1);
        repo.create_post(older).await.unwrap();
        repo.create_post(post("newer")).await.unwrap();

        let posts = repo.list_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "newer");
        assert_eq!(posts[1].title, "older");
        assert_eq!(posts[1].tags, vec!["soil".to_string()]);
    }

    #[tokio::test]
    async fn comment_raises_the_derived_reply_count() {
        let repo = repo().await;
        let created = repo.create_post(post("irrigation tips")).await.unwrap();
        assert_eq!(created.reply_count, 0);

        let updated = repo
            .append_comment(
                created.id,
                Comment::new("ravi".to_string(), "drip lines worked for me".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(updated.reply_count, 1);
        assert_eq!(updated.comments.len(), 1);
        assert_eq!(updated.comments[0].text, "drip lines worked for me");
    }

    #[tokio::test]
    async fn comment_on_missing_post_is_not_found() {
        let repo = repo().await;
        let err = repo
            .append_comment(
                Uuid::now_v7(),
                Comment::new("ravi".to_string(), "hello".to_string()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("post", _)));
    }

    #[tokio::test]
    async fn reply_lands_only_under_the_addressed_comment() {
        let repo = repo().await;
        let created = repo.create_post(post("pests")).await.unwrap();

        let mut first = Comment::new("ravi".to_string(), "aphids everywhere".to_string());
        first.created_at = Utc::now() - Duration::minutes(5);
        let with_first = repo.append_comment(created.id, first).await.unwrap();
        let second = Comment::new("meena".to_string(), "same here".to_string());
        repo.append_comment(created.id, second).await.unwrap();

        let target = with_first.comments[0].id;
        let updated = repo
            .append_reply(
                created.id,
                target,
                Reply::new("asha".to_string(), "try neem oil".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(updated.comments[0].replies.len(), 1);
        assert_eq!(updated.comments[0].replies[0].text, "try neem oil");
        assert!(updated.comments[1].replies.is_empty());
    }

    #[tokio::test]
    async fn reply_to_missing_comment_is_not_found() {
        let repo = repo().await;
        let created = repo.create_post(post("weeds")).await.unwrap();

        let err = repo
            .append_reply(
                created.id,
                Uuid::now_v7(),
                Reply::new("asha".to_string(), "hello".to_string()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("comment", _)));
    }

    #[tokio::test]
    async fn likes_increment_in_place() {
        let repo = repo().await;
        let created = repo.create_post(post("harvest photos")).await.unwrap();

        repo.increment_likes(created.id).await.unwrap();
        let updated = repo.increment_likes(created.id).await.unwrap();
        assert_eq!(updated.like_count, 2);
    }
}
