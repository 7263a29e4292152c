use crate::{CommentId, Error};

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum VoteDirection {
    Up,
    Down,
}

/// A user intent as forwarded by the rendering layer, before it is applied to
/// the forest
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Action {
    Post {
        author: String,
        text: String,
    },
    Reply {
        parent: CommentId,
        author: String,
        text: String,
    },
    Vote {
        comment: CommentId,
        direction: VoteDirection,
    },
    Edit {
        comment: CommentId,
        text: String,
    },
    Delete {
        comment: CommentId,
    },
}

fn validate_string(s: &str) -> Result<(), Error> {
    if s.trim().is_empty() {
        return Err(Error::EmptyText);
    }
    if s.contains('\0') {
        return Err(Error::NullByteInString(s.to_string()));
    }
    Ok(())
}

impl Action {
    /// Checks the action at the UI-intent boundary, before the forest is
    /// touched. Missing target ids are not an error, the matching forest
    /// operation no-ops on them.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Action::Post { author, text } => {
                validate_string(author)?;
                validate_string(text)
            }
            Action::Reply {
                parent: _,
                author,
                text,
            } => {
                validate_string(author)?;
                validate_string(text)
            }
            Action::Vote {
                comment: _,
                direction: _,
            } => Ok(()),
            Action::Edit { comment: _, text } => validate_string(text),
            Action::Delete { comment: _ } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text() {
        let action = Action::Reply {
            parent: CommentId(1),
            author: String::from("User1"),
            text: String::from(""),
        };
        assert_eq!(action.validate(), Err(Error::EmptyText));
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let action = Action::Edit {
            comment: CommentId(1),
            text: String::from(" \n\t"),
        };
        assert_eq!(action.validate(), Err(Error::EmptyText));
    }

    #[test]
    fn rejects_null_byte() {
        let action = Action::Post {
            author: String::from("User1"),
            text: String::from("a\0b"),
        };
        assert_eq!(
            action.validate(),
            Err(Error::NullByteInString(String::from("a\0b")))
        );
    }

    #[test]
    fn votes_and_deletes_need_no_text() {
        assert_eq!(
            Action::Vote {
                comment: CommentId(1),
                direction: VoteDirection::Up,
            }
            .validate(),
            Ok(())
        );
        assert_eq!(Action::Delete { comment: CommentId(1) }.validate(), Ok(()));
    }
}
