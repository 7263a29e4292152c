use kansou_model::{Comment, CommentId, Forest};

mod ui;

fn main() {
    tracing_wasm::set_as_global_default();
    let initial = Forest::from_comments(vec![
        Comment::new(CommentId(1), "User1", "This is a comment"),
        Comment::new(CommentId(2), "User2", "This is another comment"),
    ]);
    yew::Renderer::<ui::ReviewPanel>::with_props(ui::ReviewPanelProps {
        current_user: whoami::username(),
        initial,
        reply_depth_limit: 1,
    })
    .render();
}
