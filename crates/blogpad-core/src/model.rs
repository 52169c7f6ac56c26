// ABOUTME: Defines the Post and Comment records persisted in the post collection.
// ABOUTME: Also holds PostDraft, the four user-editable fields submitted from the post form.

use serde::{Deserialize, Serialize};

use crate::id::{format_date, generate_id};

/// A reader remark attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub date: String,
}

impl Comment {
    /// Create a comment with a fresh id dated today.
    pub fn new(author: String, text: String) -> Self {
        Self {
            id: generate_id(),
            author,
            text,
            date: format_date(None),
        }
    }
}

/// A blog entry. The `id` is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    /// Records written before comments existed have no such field.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Build a new post from a validated draft: fresh id, today's date, no comments.
    pub fn from_draft(draft: PostDraft) -> Self {
        Self {
            id: generate_id(),
            title: draft.title,
            author: draft.author,
            excerpt: draft.excerpt,
            content: draft.content,
            date: format_date(None),
            comments: Vec::new(),
        }
    }

    /// The current user-editable fields of this post, as a form would show them.
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
        }
    }
}

/// The fields a user submits when creating or editing a post. Absent fields
/// deserialize as empty and are caught by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            excerpt: excerpt.into(),
            content: content.into(),
        }
    }

    /// Trim every field. Returns None if any field is empty afterwards.
    pub fn validated(self) -> Option<Self> {
        let trimmed = Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
        };

        let complete = !trimmed.title.is_empty()
            && !trimmed.author.is_empty()
            && !trimmed.excerpt.is_empty()
            && !trimmed.content.is_empty();

        complete.then_some(trimmed)
    }
}
