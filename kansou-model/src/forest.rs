use crate::{Action, Comment, CommentId, VoteDirection};

/// The whole state of the widget: top-level comments plus the id allocator.
///
/// Every operation is pure, the caller is expected to replace its state with
/// the returned forest.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Forest {
    /// Top-level comments, in posting order
    pub comments: Vec<Comment>,

    /// Next id to hand out. Strictly greater than every id in `comments`,
    /// never decremented, so deleting a comment can not lead to id reuse.
    next_id: u64,
}

impl Default for Forest {
    fn default() -> Forest {
        Forest::new()
    }
}

impl Forest {
    pub fn new() -> Forest {
        Forest {
            comments: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a forest around already-existing comments, seeding the id
    /// allocator past the highest id found at any depth
    pub fn from_comments(comments: Vec<Comment>) -> Forest {
        let next_id = max_id(&comments) + 1;
        Forest { comments, next_id }
    }

    pub fn find(&self, id: CommentId) -> Option<&Comment> {
        Comment::find_in(&self.comments, id)
    }

    pub fn node_count(&self) -> usize {
        self.comments.iter().map(Comment::subtree_size).sum()
    }

    /// Appends a new top-level comment
    pub fn post(&self, author: &str, text: &str) -> Forest {
        let mut comments = self.comments.clone();
        comments.push(Comment::new(CommentId(self.next_id), author, text));
        Forest {
            comments,
            next_id: self.next_id + 1,
        }
    }

    /// Appends a new comment at the end of `parent`'s replies, wherever
    /// `parent` sits in the forest
    pub fn add_reply(&self, parent: CommentId, author: &str, text: &str) -> Forest {
        let reply = Comment::new(CommentId(self.next_id), author, text);
        let (comments, found) = rewrite_first(&self.comments, parent, &|mut c| {
            c.replies.push(reply.clone());
            Some(c)
        });
        if !found {
            tracing::warn!(?parent, "got reply for comment not in forest");
            return self.clone();
        }
        Forest {
            comments,
            next_id: self.next_id + 1,
        }
    }

    pub fn vote(&self, target: CommentId, direction: VoteDirection) -> Forest {
        let (comments, found) = rewrite_first(&self.comments, target, &|mut c| {
            match direction {
                VoteDirection::Up => c.upvotes += 1,
                VoteDirection::Down => c.downvotes += 1,
            }
            Some(c)
        });
        if !found {
            tracing::warn!(?target, "got vote for comment not in forest");
            return self.clone();
        }
        Forest {
            comments,
            next_id: self.next_id,
        }
    }

    pub fn edit_text(&self, target: CommentId, text: &str) -> Forest {
        let (comments, found) = rewrite_first(&self.comments, target, &|mut c| {
            c.text = text.to_string();
            Some(c)
        });
        if !found {
            tracing::warn!(?target, "got edit for comment not in forest");
            return self.clone();
        }
        Forest {
            comments,
            next_id: self.next_id,
        }
    }

    /// Removes the comment along with its whole reply subtree
    pub fn delete_subtree(&self, target: CommentId) -> Forest {
        let (comments, found) = rewrite_first(&self.comments, target, &|_| None);
        if !found {
            tracing::warn!(?target, "got delete for comment not in forest");
            return self.clone();
        }
        Forest {
            comments,
            next_id: self.next_id,
        }
    }

    pub fn apply(&self, action: &Action) -> Forest {
        match action {
            Action::Post { author, text } => self.post(author, text),
            Action::Reply {
                parent,
                author,
                text,
            } => self.add_reply(*parent, author, text),
            Action::Vote { comment, direction } => self.vote(*comment, *direction),
            Action::Edit { comment, text } => self.edit_text(*comment, text),
            Action::Delete { comment } => self.delete_subtree(*comment),
        }
    }
}

fn max_id(comments: &[Comment]) -> u64 {
    comments
        .iter()
        .map(|c| c.id.0.max(max_id(&c.replies)))
        .max()
        .unwrap_or(0)
}

/// Rewrites the first comment matching `target` in a pre-order walk,
/// recursing into replies otherwise. `rewrite` returning `None` drops the
/// matched comment together with its subtree. Also returns whether a match
/// was found, so callers can tell a rewritten forest from a plain copy.
fn rewrite_first<F>(comments: &[Comment], target: CommentId, rewrite: &F) -> (Vec<Comment>, bool)
where
    F: Fn(Comment) -> Option<Comment>,
{
    let mut res = Vec::with_capacity(comments.len());
    let mut found = false;
    for c in comments {
        if found {
            res.push(c.clone());
            continue;
        }
        if c.id == target {
            found = true;
            if let Some(c) = rewrite(c.clone()) {
                res.push(c);
            }
            continue;
        }
        let mut c = c.clone();
        let (replies, found_below) = rewrite_first(&c.replies, target, rewrite);
        if found_below {
            found = true;
            c.replies = replies;
        }
        res.push(c);
    }
    (res, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_forest() -> Forest {
        // 1 "a"
        //   +- 3 "a1"
        //   |    +- 4 "a11"
        //   +- 5 "a2"
        // 2 "b"
        let mut a1 = Comment::new(CommentId(3), "User2", "a1");
        a1.replies.push(Comment::new(CommentId(4), "User1", "a11"));
        let mut a = Comment::new(CommentId(1), "User1", "a");
        a.replies.push(a1);
        a.replies.push(Comment::new(CommentId(5), "User3", "a2"));
        let b = Comment::new(CommentId(2), "User2", "b");
        Forest::from_comments(vec![a, b])
    }

    #[test]
    fn from_comments_seeds_id_allocator_past_nested_ids() {
        let f = example_forest();
        assert_eq!(f.next_id, 6);
        assert_eq!(Forest::new().next_id, 1);
    }

    #[test]
    fn missing_id_is_a_no_op() {
        let f = example_forest();
        let absent = CommentId(42);
        assert_eq!(f.vote(absent, VoteDirection::Up), f);
        assert_eq!(f.delete_subtree(absent), f);
        assert_eq!(f.add_reply(absent, "User1", "hi"), f);
        assert_eq!(f.edit_text(absent, "hi"), f);
    }

    #[test]
    fn vote_increments_exactly_one_counter() {
        let f = example_forest();
        let voted = f.vote(CommentId(4), VoteDirection::Up);

        let mut expected = example_forest();
        expected.comments[0].replies[0].replies[0].upvotes = 1;
        assert_eq!(voted, expected);

        let down = voted.vote(CommentId(2), VoteDirection::Down);
        let mut expected = expected;
        expected.comments[1].downvotes = 1;
        assert_eq!(down, expected);
    }

    #[test]
    fn vote_is_strictly_additive() {
        let f = example_forest();
        let twice = f
            .vote(CommentId(1), VoteDirection::Up)
            .vote(CommentId(1), VoteDirection::Up);
        assert_eq!(twice.find(CommentId(1)).unwrap().upvotes, 2);
        assert_eq!(twice.find(CommentId(1)).unwrap().downvotes, 0);
    }

    #[test]
    fn add_reply_appends_a_fresh_comment_at_the_end() {
        let f = example_forest();
        let replied = f.add_reply(CommentId(1), "User2", "hi");

        let parent = replied.find(CommentId(1)).unwrap();
        assert_eq!(parent.replies.len(), 3);
        // prior replies keep their order
        assert_eq!(parent.replies[0].id, CommentId(3));
        assert_eq!(parent.replies[1].id, CommentId(5));
        assert_eq!(
            parent.replies[2],
            Comment::new(CommentId(6), "User2", "hi")
        );
        assert_eq!(replied.node_count(), f.node_count() + 1);
    }

    #[test]
    fn add_reply_reaches_nested_comments() {
        let f = example_forest();
        let replied = f.add_reply(CommentId(4), "User3", "deep");
        assert_eq!(
            replied.find(CommentId(4)).unwrap().replies,
            vec![Comment::new(CommentId(6), "User3", "deep")]
        );
    }

    #[test]
    fn edit_text_recurses_into_replies() {
        // All four mutating operations walk the whole forest; editing a
        // nested reply is supported, not a silent no-op.
        let f = example_forest();
        let edited = f.edit_text(CommentId(4), "a11, edited");
        assert_eq!(edited.find(CommentId(4)).unwrap().text, "a11, edited");
        assert_eq!(edited.find(CommentId(4)).unwrap().author, "User1");
        // nothing else changed
        assert_eq!(edited.delete_subtree(CommentId(4)), f.delete_subtree(CommentId(4)));
    }

    #[test]
    fn delete_subtree_removes_every_descendant() {
        let f = example_forest();
        let subtree_size = f.find(CommentId(3)).unwrap().subtree_size();
        let deleted = f.delete_subtree(CommentId(3));
        assert_eq!(deleted.node_count(), f.node_count() - subtree_size);
        assert_eq!(deleted.find(CommentId(3)), None);
        assert_eq!(deleted.find(CommentId(4)), None);
        assert_eq!(deleted.find(CommentId(5)).unwrap().text, "a2");
    }

    #[test]
    fn deleting_a_root_drops_the_whole_tree() {
        let f = example_forest();
        let deleted = f.delete_subtree(CommentId(1));
        assert_eq!(deleted.comments.len(), 1);
        assert_eq!(deleted.comments[0].id, CommentId(2));
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let f = Forest::new().post("User1", "a").post("User2", "b");
        let reposted = f.delete_subtree(CommentId(2)).post("User2", "c");
        assert_eq!(reposted.comments[1].id, CommentId(3));
        assert_eq!(reposted.find(CommentId(2)), None);
    }

    #[test]
    fn post_appends_a_top_level_comment() {
        let f = example_forest().post("User4", "c");
        assert_eq!(f.comments.len(), 3);
        assert_eq!(f.comments[2], Comment::new(CommentId(6), "User4", "c"));
    }

    #[test]
    fn duplicate_ids_mutate_the_first_pre_order_match_only() {
        // The id-uniqueness invariant makes this unreachable through the
        // operations themselves, but a hand-built forest must still behave
        // deterministically.
        let f = Forest::from_comments(vec![
            Comment::new(CommentId(1), "User1", "first"),
            Comment::new(CommentId(1), "User2", "second"),
        ]);
        let voted = f.vote(CommentId(1), VoteDirection::Up);
        assert_eq!(voted.comments[0].upvotes, 1);
        assert_eq!(voted.comments[1].upvotes, 0);
    }

    #[test]
    fn full_scenario() {
        let f = Forest::from_comments(vec![Comment::new(CommentId(1), "User1", "a")]);

        let voted = f.vote(CommentId(1), VoteDirection::Up);
        assert_eq!(voted.find(CommentId(1)).unwrap().upvotes, 1);
        assert_eq!(voted.find(CommentId(1)).unwrap().downvotes, 0);

        let replied = voted.add_reply(CommentId(1), "Bob", "hi");
        let reply = &replied.find(CommentId(1)).unwrap().replies[0];
        assert_eq!(reply.author, "Bob");
        assert_eq!(reply.text, "hi");
        assert_eq!((reply.upvotes, reply.downvotes), (0, 0));
        assert_eq!(reply.replies, Vec::new());

        assert_eq!(replied.delete_subtree(CommentId(1)).comments, Vec::new());
    }

    #[test]
    fn apply_dispatches_actions() {
        let f = example_forest();
        assert_eq!(
            f.apply(&Action::Vote {
                comment: CommentId(2),
                direction: VoteDirection::Down,
            }),
            f.vote(CommentId(2), VoteDirection::Down)
        );
        assert_eq!(
            f.apply(&Action::Reply {
                parent: CommentId(1),
                author: String::from("User2"),
                text: String::from("hi"),
            }),
            f.add_reply(CommentId(1), "User2", "hi")
        );
        assert_eq!(
            f.apply(&Action::Post {
                author: String::from("User4"),
                text: String::from("c"),
            }),
            f.post("User4", "c")
        );
        assert_eq!(
            f.apply(&Action::Edit {
                comment: CommentId(2),
                text: String::from("b, edited"),
            }),
            f.edit_text(CommentId(2), "b, edited")
        );
        assert_eq!(
            f.apply(&Action::Delete {
                comment: CommentId(2)
            }),
            f.delete_subtree(CommentId(2))
        );
    }
}
