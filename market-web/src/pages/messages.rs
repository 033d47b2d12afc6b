//! Inbox: conversations on the left, the selected thread and a reply box on
//! the right. `?to=<user id>` opens a thread with that user.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use shared::dto::{compare_timestamps, group_conversations, Id, Message, SendMessageRequest};

use crate::components::{loaded, Flash, Notice};
use crate::services::api::{messages, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::format::format_date;

/// Messages exchanged with `counterpart`, oldest first.
pub fn thread_with(messages: &[Message], counterpart: &Id) -> Vec<Message> {
    let mut thread: Vec<Message> = messages
        .iter()
        .filter(|m| &m.sender_id == counterpart || &m.recipient_id == counterpart)
        .cloned()
        .collect();
    thread.sort_by(|a, b| compare_timestamps(&a.sent_at, &b.sent_at));
    thread
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let query = use_query_map();
    let me = session.user_id().unwrap_or_default();

    let selected = RwSignal::new(query.with_untracked(|q| q.get("to")).map(Id::from));
    let body = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let inbox = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { messages::list_messages(&client).await }
        }
    });

    let on_send = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(recipient_id) = selected.get_untracked() else {
            notice.set(Some(Notice::error("Pick a conversation first")));
            return;
        };
        if sending.get_untracked() {
            return;
        }
        let request = SendMessageRequest {
            recipient_id,
            body: body.get_untracked().trim().to_string(),
        };
        let client = client.clone();
        sending.set(true);
        spawn_local(async move {
            match messages::send_message(&client, &request).await {
                Ok(_) => {
                    body.set(String::new());
                    inbox.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
            sending.set(false);
        });
    };

    view! {
        <section class="page messages-page">
            <h1>"Messages"</h1>
            <Flash notice=notice/>
            {move || {
                let me = me.clone();
                loaded(
                    inbox.get(),
                    move |all| {
                        let conversations = group_conversations(&all, &me);
                        let thread = selected.get().map(|c| thread_with(&all, &c)).unwrap_or_default();
                        view! {
                            <div class="inbox">
                                <ul class="conversation-list">
                                    {conversations.is_empty().then(|| view! { <li class="empty">"No conversations yet"</li> })}
                                    {conversations
                                        .into_iter()
                                        .map(|c| {
                                            let id = c.counterpart_id.clone();
                                            let active = selected.get().as_ref() == Some(&id);
                                            view! {
                                                <li
                                                    class=if active { "conversation active" } else { "conversation" }
                                                    on:click=move |_| selected.set(Some(id.clone()))
                                                >
                                                    <strong>{c.counterpart_name}</strong>
                                                    {(c.unread > 0).then(|| view! { <span class="unread">{c.unread}</span> })}
                                                    <p class="preview">{c.last_body}</p>
                                                    <small>{format_date(&c.last_sent_at)}</small>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <div class="thread">
                                    {thread
                                        .into_iter()
                                        .map(|m| {
                                            let class = if m.sender_id == me { "bubble mine" } else { "bubble theirs" };
                                            view! {
                                                <div class=class>
                                                    <p>{m.body}</p>
                                                    <small>{format_date(&m.sent_at)}</small>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
            <form class="reply form-inline" on:submit=on_send>
                <textarea
                    rows="2"
                    placeholder="Write a message"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit" disabled=move || sending.get() || selected.with(Option::is_none)>
                    "Send"
                </button>
            </form>
        </section>
    }
}
