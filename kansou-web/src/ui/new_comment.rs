use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NewCommentBoxProps {
    pub on_post: Callback<String>,
}

#[function_component(NewCommentBox)]
pub fn new_comment_box(p: &NewCommentBoxProps) -> Html {
    let draft = use_state(String::new);
    let onchange = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value())
        })
    };
    let on_submit = {
        let on_post = p.on_post.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            if draft.trim().is_empty() {
                return;
            }
            on_post.emit((*draft).clone());
            draft.set(String::new());
        })
    };
    html! {
        <div class="new-comment">
            <textarea
                value={ (*draft).clone() }
                placeholder="Add a comment"
                aria-label="New comment"
                {onchange}
            />
            <button type="button" class="btn btn-primary" onclick={ on_submit }>
                { "Comment" }
            </button>
        </div>
    }
}
