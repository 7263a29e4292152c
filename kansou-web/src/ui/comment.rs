use kansou_model::{Comment, CommentId, VoteDirection};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentViewProps {
    pub comment: Comment,

    /// Nesting depth of this comment, 0 for top-level comments
    #[prop_or(0)]
    pub depth: usize,
    pub reply_depth_limit: usize,

    pub on_reply: Callback<(CommentId, String)>,
    pub on_vote: Callback<(CommentId, VoteDirection)>,
    pub on_edit: Callback<(CommentId, String)>,
    pub on_delete: Callback<CommentId>,
}

#[function_component(CommentView)]
pub fn comment_view(p: &CommentViewProps) -> Html {
    // None while viewing, Some(draft) while the matching form is open.
    // Both buffers live and die with this rendered node, they are not part
    // of the comment itself.
    let edit = use_state(|| None::<String>);
    let reply = use_state(|| None::<String>);

    let body = match (*edit).clone() {
        Some(draft) => edit_form(p, edit.clone(), draft),
        None => html! {
            <>
                <p class="comment-text">{ &p.comment.text }</p>
                { action_row(p, edit.clone(), reply.clone()) }
            </>
        },
    };
    let reply_box = (*reply)
        .clone()
        .map(|draft| reply_form(p, reply.clone(), draft));

    html! {
        <div class="comment">
            <div class="comment-header">
                <span class="comment-author">{ &p.comment.author }</span>
            </div>
            { body }
            { for reply_box }
            { for p.comment.replies.iter().map(|r| html! {
                <CommentView
                    key={ r.id.0 }
                    comment={ r.clone() }
                    depth={ p.depth + 1 }
                    reply_depth_limit={ p.reply_depth_limit }
                    on_reply={ p.on_reply.clone() }
                    on_vote={ p.on_vote.clone() }
                    on_edit={ p.on_edit.clone() }
                    on_delete={ p.on_delete.clone() }
                />
            }) }
        </div>
    }
}

fn action_row(
    p: &CommentViewProps,
    edit: UseStateHandle<Option<String>>,
    reply: UseStateHandle<Option<String>>,
) -> Html {
    let id = p.comment.id;
    let on_upvote = p.on_vote.reform(move |_| (id, VoteDirection::Up));
    let on_downvote = p.on_vote.reform(move |_| (id, VoteDirection::Down));
    let on_delete = p.on_delete.reform(move |_| id);
    let start_edit = {
        let text = p.comment.text.clone();
        Callback::from(move |_| edit.set(Some(text.clone())))
    };
    // TODO: focus the reply textarea when the box opens
    let reply_toggle = (p.depth < p.reply_depth_limit).then(|| {
        let toggle = Callback::from(move |_| {
            match reply.is_some() {
                // closing the box discards the draft
                true => reply.set(None),
                false => reply.set(Some(String::new())),
            }
        });
        html! {
            <button
                type="button"
                class="btn bi-btn bi-reply"
                aria-label="Reply"
                onclick={ toggle }
            >
            </button>
        }
    });
    html! {
        <div class="comment-actions d-flex align-items-center">
            <button
                type="button"
                class="btn bi-btn bi-arrow-up"
                aria-label="Upvote"
                onclick={ on_upvote }
            >
            </button>
            <span class="comment-score mx-1">{ p.comment.score() }</span>
            <button
                type="button"
                class="btn bi-btn bi-arrow-down"
                aria-label="Downvote"
                onclick={ on_downvote }
            >
            </button>
            { for reply_toggle }
            <button
                type="button"
                class="btn bi-btn bi-pencil"
                aria-label="Edit"
                onclick={ start_edit }
            >
            </button>
            <button
                type="button"
                class="btn bi-btn bi-trash"
                aria-label="Delete"
                onclick={ on_delete }
            >
            </button>
        </div>
    }
}

fn edit_form(p: &CommentViewProps, edit: UseStateHandle<Option<String>>, draft: String) -> Html {
    let onchange = {
        let edit = edit.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            edit.set(Some(input.value()))
        })
    };
    let on_save = {
        let id = p.comment.id;
        let on_edit = p.on_edit.clone();
        let edit = edit.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            // an all-whitespace draft neither commits nor leaves edit mode
            if draft.trim().is_empty() {
                return;
            }
            on_edit.emit((id, draft.clone()));
            edit.set(None);
        })
    };
    let on_cancel = Callback::from(move |_| edit.set(None));
    html! {
        <div class="comment-edit">
            <textarea value={ draft } {onchange} />
            <button type="button" class="btn btn-primary btn-sm" onclick={ on_save }>
                { "Save" }
            </button>
            <button type="button" class="btn btn-outline-secondary btn-sm" onclick={ on_cancel }>
                { "Cancel" }
            </button>
        </div>
    }
}

fn reply_form(p: &CommentViewProps, reply: UseStateHandle<Option<String>>, draft: String) -> Html {
    let onchange = {
        let reply = reply.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            reply.set(Some(input.value()))
        })
    };
    let on_submit = {
        let id = p.comment.id;
        let on_reply = p.on_reply.clone();
        let reply = reply.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            // submitting an empty reply leaves the box open
            if draft.trim().is_empty() {
                return;
            }
            on_reply.emit((id, draft.clone()));
            reply.set(None);
        })
    };
    let on_cancel = Callback::from(move |_| reply.set(None));
    html! {
        <div class="comment-reply">
            <textarea value={ draft } {onchange} />
            <button type="button" class="btn btn-primary btn-sm" onclick={ on_submit }>
                { "Reply" }
            </button>
            <button type="button" class="btn btn-outline-secondary btn-sm" onclick={ on_cancel }>
                { "Cancel" }
            </button>
        </div>
    }
}
