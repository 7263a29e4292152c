#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    /// Display name of the comment's author
    pub author: String,

    pub text: String,

    /// Increment-only vote counters, there is no retraction
    pub upvotes: u64,
    pub downvotes: u64,

    /// Child comments, in reply order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(id: CommentId, author: impl Into<String>, text: impl Into<String>) -> Comment {
        Comment {
            id,
            author: author.into(),
            text: text.into(),
            upvotes: 0,
            downvotes: 0,
            replies: Vec::new(),
        }
    }

    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    pub fn find_in(comments: &[Comment], id: CommentId) -> Option<&Comment> {
        for c in comments {
            if c.id == id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in(&c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    /// Number of comments in this subtree, the comment itself included
    pub fn subtree_size(&self) -> usize {
        1 + self.replies.iter().map(Comment::subtree_size).sum::<usize>()
    }
}
