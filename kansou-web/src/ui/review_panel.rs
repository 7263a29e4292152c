use kansou_model::{Action, CommentId, Forest, VoteDirection};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct ReviewPanelProps {
    /// Author recorded on comments posted from this widget instance
    pub current_user: String,

    /// Comments the widget starts with
    #[prop_or_default]
    pub initial: Forest,

    /// Nesting depth below which the reply control is offered. The default
    /// only offers replies on top-level comments.
    #[prop_or(1)]
    pub reply_depth_limit: usize,
}

pub enum PanelMsg {
    NewUserAction(Action),
}

/// Owns the authoritative forest; children only report intents back up
pub struct ReviewPanel {
    forest: Forest,
}

impl Component for ReviewPanel {
    type Message = PanelMsg;
    type Properties = ReviewPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        ReviewPanel {
            forest: ctx.props().initial.clone(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PanelMsg::NewUserAction(action) => {
                // The forms already suppress empty submissions, so anything
                // failing validation here is a view bug
                if let Err(err) = action.validate() {
                    tracing::warn!(?action, %err, "dropping invalid user action");
                    return false;
                }
                tracing::debug!(?action, "applying user action");
                self.forest = self.forest.apply(&action);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_post = {
            let author = ctx.props().current_user.clone();
            ctx.link().callback(move |text| {
                PanelMsg::NewUserAction(Action::Post {
                    author: author.clone(),
                    text,
                })
            })
        };
        let on_reply = {
            let author = ctx.props().current_user.clone();
            ctx.link().callback(move |(parent, text)| {
                PanelMsg::NewUserAction(Action::Reply {
                    parent,
                    author: author.clone(),
                    text,
                })
            })
        };
        let on_vote = ctx
            .link()
            .callback(|(comment, direction): (CommentId, VoteDirection)| {
                PanelMsg::NewUserAction(Action::Vote { comment, direction })
            });
        let on_edit = ctx
            .link()
            .callback(|(comment, text)| PanelMsg::NewUserAction(Action::Edit { comment, text }));
        let on_delete = ctx
            .link()
            .callback(|comment| PanelMsg::NewUserAction(Action::Delete { comment }));

        html! {
            <div class="review-panel">
                { for self.forest.comments.iter().map(|c| html! {
                    <ui::CommentView
                        key={ c.id.0 }
                        comment={ c.clone() }
                        reply_depth_limit={ ctx.props().reply_depth_limit }
                        on_reply={ on_reply.clone() }
                        on_vote={ on_vote.clone() }
                        on_edit={ on_edit.clone() }
                        on_delete={ on_delete.clone() }
                    />
                }) }
                <ui::NewCommentBox {on_post} />
            </div>
        }
    }
}
