use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::{Appointment, Id, Member, MembershipStatus, NewAppointmentRequest};

use crate::components::{loaded, Flash, Notice, StatusPill};
use crate::error::AppError;
use crate::services::api::{cooperatives, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::{appointment_label, appointment_tone};
use crate::utils::format::format_date;

#[derive(Debug, Clone)]
struct Agenda {
    coop_id: Id,
    members: Vec<Member>,
    appointments: Vec<Appointment>,
}

#[component]
pub fn CoopAppointmentsPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);

    let agenda = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let cooperative = cooperatives::my_cooperative(&client).await?;
                let members = cooperatives::list_members(&client, &cooperative.id).await?;
                let mut appointments = cooperatives::list_appointments(&client, &cooperative.id).await?;
                appointments.sort_by(|a, b| a.scheduled_for.cmp(&b.scheduled_for));
                Ok::<_, AppError>(Agenda { coop_id: cooperative.id, members, appointments })
            }
        }
    });

    let title = RwSignal::new(String::new());
    let member_id = RwSignal::new(String::new());
    let scheduled_for = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let on_create = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(current)) = agenda.get_untracked() else {
            return;
        };
        if member_id.get_untracked().is_empty() {
            notice.set(Some(Notice::error("Pick a member")));
            return;
        }
        let notes_text = notes.get_untracked().trim().to_string();
        let request = NewAppointmentRequest {
            title: title.get_untracked().trim().to_string(),
            member_id: Id::from(member_id.get_untracked()),
            scheduled_for: scheduled_for.get_untracked(),
            notes: (!notes_text.is_empty()).then_some(notes_text),
        };
        let client = client.clone();
        spawn_local(async move {
            match cooperatives::create_appointment(&client, &current.coop_id, &request).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("Appointment scheduled")));
                    title.set(String::new());
                    notes.set(String::new());
                    agenda.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page appointments-page">
            <h1>"Appointments"</h1>
            <Flash notice=notice/>
            {move || {
                let on_create = on_create.clone();
                loaded(
                    agenda.get(),
                    move |Agenda { members, appointments, .. }| {
                        let active: Vec<Member> = members
                            .into_iter()
                            .filter(|m| m.status == MembershipStatus::Active)
                            .collect();
                        view! {
                            <form class="card form form-grid" on:submit=on_create>
                                <h3>"Schedule"</h3>
                                <input
                                    type="text"
                                    placeholder="Title"
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                                <select on:change=move |ev| member_id.set(event_target_value(&ev))>
                                    <option value="">"Member..."</option>
                                    {active
                                        .into_iter()
                                        .map(|m| {
                                            let name = m.full_name.clone().unwrap_or_else(|| format!("Member {}", m.id));
                                            let value = m.user_id.clone().unwrap_or(m.id).to_string();
                                            view! { <option value=value>{name}</option> }
                                        })
                                        .collect_view()}
                                </select>
                                <input
                                    type="datetime-local"
                                    prop:value=move || scheduled_for.get()
                                    on:input=move |ev| scheduled_for.set(event_target_value(&ev))
                                />
                                <textarea
                                    rows="2"
                                    placeholder="Notes"
                                    prop:value=move || notes.get()
                                    on:input=move |ev| notes.set(event_target_value(&ev))
                                ></textarea>
                                <button class="btn" type="submit">"Schedule"</button>
                            </form>
                            <ul class="appointment-list">
                                {appointments.is_empty().then(|| view! { <li class="empty">"Nothing scheduled"</li> })}
                                {appointments
                                    .into_iter()
                                    .map(|a| {
                                        view! {
                                            <li class="card appointment">
                                                <div>
                                                    <strong>{a.title}</strong>
                                                    <span class="muted">{a.member_name.unwrap_or_default()}</span>
                                                </div>
                                                <span>{format_date(&a.scheduled_for)}</span>
                                                <StatusPill tone=appointment_tone(a.status) label=appointment_label(a.status)/>
                                                {a.notes.map(|n| view! { <p class="description">{n}</p> })}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
