// ABOUTME: The in-memory post collection and the data operations that mutate it.
// ABOUTME: Validates submissions, assigns ids and dates, and reports unknown post ids as errors.

use thiserror::Error;

use crate::model::{Comment, Post, PostDraft};

/// Errors returned by collection operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlogError {
    #[error("Please fill in all fields")]
    MissingPostFields,

    #[error("Please fill in all comment fields")]
    MissingCommentFields,

    #[error("post not found: {0}")]
    PostNotFound(String),
}

/// The ordered post collection. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blog {
    posts: Vec<Post>,
}

impl Blog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a loaded collection.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Validate the draft and append a new post built from it.
    pub fn create_post(&mut self, draft: PostDraft) -> Result<Post, BlogError> {
        let draft = draft.validated().ok_or(BlogError::MissingPostFields)?;
        let post = Post::from_draft(draft);
        self.posts.push(post.clone());
        Ok(post)
    }

    /// Replace the four editable fields of an existing post. The id, date,
    /// and comments are left untouched.
    pub fn update_post(&mut self, id: &str, draft: PostDraft) -> Result<Post, BlogError> {
        let draft = draft.validated().ok_or(BlogError::MissingPostFields)?;
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;

        post.title = draft.title;
        post.author = draft.author;
        post.excerpt = draft.excerpt;
        post.content = draft.content;

        Ok(post.clone())
    }

    /// Remove a post, and with it all of its comments.
    pub fn delete_post(&mut self, id: &str) -> Result<Post, BlogError> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;
        Ok(self.posts.remove(index))
    }

    /// Append a comment to the end of a post's comment sequence.
    pub fn add_comment(
        &mut self,
        post_id: &str,
        author: &str,
        text: &str,
    ) -> Result<Comment, BlogError> {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            return Err(BlogError::MissingCommentFields);
        }

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| BlogError::PostNotFound(post_id.to_string()))?;

        let comment = Comment::new(author.to_string(), text.to_string());
        post.comments.push(comment.clone());
        Ok(comment)
    }
}
