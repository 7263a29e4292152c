mod comment;
pub use comment::CommentView;

mod new_comment;
pub use new_comment::NewCommentBox;

mod review_panel;
pub use review_panel::{PanelMsg, ReviewPanel, ReviewPanelProps};
