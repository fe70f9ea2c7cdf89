//! The concrete post item tracked by the demo application.

use crate::core::Entry;
use serde::{Deserialize, Serialize};

/// A post: a stable numeric id and a title.
///
/// Immutable once created; identity is by `id`. Deserialization accepts
/// either `title` or `text` for the title field, matching the two payload
/// shapes the seed source may return.
///
/// # Example
///
/// ```rust
/// use rewind::Post;
///
/// let post: Post = serde_json::from_str(r#"{"id": 2, "text": "qui est esse"}"#).unwrap();
/// assert_eq!(post.title, "qui est esse");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(alias = "text")]
    pub title: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl Entry for Post {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accessors_delegate_to_fields() {
        let post = Post::new(3, "ea molestias");

        assert_eq!(post.id(), 3);
        assert_eq!(post.label(), "ea molestias");
    }

    #[test]
    fn deserializes_title_field() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "title": "sunt aut facere"}"#).unwrap();
        assert_eq!(post, Post::new(1, "sunt aut facere"));
    }

    #[test]
    fn deserializes_text_alias() {
        let post: Post = serde_json::from_str(r#"{"id": 5, "text": "nesciunt quas odio"}"#).unwrap();
        assert_eq!(post, Post::new(5, "nesciunt quas odio"));
    }

    #[test]
    fn post_roundtrips_through_json() {
        let post = Post::new(4, "eum et est occaecati");

        let json = serde_json::to_string(&post).unwrap();
        let deserialized: Post = serde_json::from_str(&json).unwrap();

        assert_eq!(post, deserialized);
    }
}
