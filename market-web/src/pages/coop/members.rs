use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::{Id, Member, MembershipStatus};

use crate::components::{loaded, Flash, Notice, StatusPill};
use crate::error::AppError;
use crate::services::api::{cooperatives, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::membership_tone;
use crate::utils::format::format_date;

/// Pending requests first, then active, then the rest; by name within each.
pub fn sort_members(members: &mut [Member]) {
    fn rank(status: MembershipStatus) -> u8 {
        match status {
            MembershipStatus::Pending => 0,
            MembershipStatus::Active => 1,
            MembershipStatus::Suspended => 2,
            MembershipStatus::Unknown => 3,
        }
    }
    members.sort_by(|a, b| {
        rank(a.status)
            .cmp(&rank(b.status))
            .then_with(|| a.full_name.cmp(&b.full_name))
    });
}

#[component]
pub fn CoopMembersPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);

    let roster = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let cooperative = cooperatives::my_cooperative(&client).await?;
                let mut members = cooperatives::list_members(&client, &cooperative.id).await?;
                sort_members(&mut members);
                Ok::<_, AppError>((cooperative.id, members))
            }
        }
    });

    let decide = move |coop_id: Id, member: Member, status: MembershipStatus| {
        let client = client.clone();
        spawn_local(async move {
            match cooperatives::decide_membership(&client, &coop_id, &member.id, status).await {
                Ok(_) => {
                    let name = member.full_name.unwrap_or_else(|| format!("Member {}", member.id));
                    notice.set(Some(Notice::success(format!("{} is now {}", name, status.label().to_lowercase()))));
                    roster.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page members-page">
            <h1>"Members"</h1>
            <Flash notice=notice/>
            {move || {
                let decide = decide.clone();
                loaded(
                    roster.get(),
                    move |(coop_id, members)| {
                        if members.is_empty() {
                            return view! { <p class="empty">"No members yet"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Contact"</th>
                                        <th>"Joined"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {members
                                        .into_iter()
                                        .map(|member| {
                                            let choices: &[MembershipStatus] = match member.status {
                                                MembershipStatus::Pending => &[MembershipStatus::Active, MembershipStatus::Suspended],
                                                MembershipStatus::Active => &[MembershipStatus::Suspended],
                                                MembershipStatus::Suspended => &[MembershipStatus::Active],
                                                MembershipStatus::Unknown => &[],
                                            };
                                            let actions = choices
                                                .iter()
                                                .map(|status| {
                                                    let status = *status;
                                                    let label = if status == MembershipStatus::Active { "Approve" } else { "Suspend" };
                                                    let decide = decide.clone();
                                                    let coop_id = coop_id.clone();
                                                    let member = member.clone();
                                                    view! {
                                                        <button
                                                            class="btn btn-small"
                                                            on:click=move |_| decide(coop_id.clone(), member.clone(), status)
                                                        >
                                                            {label}
                                                        </button>
                                                    }
                                                })
                                                .collect_view();
                                            let contact = member
                                                .email
                                                .clone()
                                                .or_else(|| member.phone.clone())
                                                .unwrap_or_default();
                                            view! {
                                                <tr>
                                                    <td>{member.full_name.clone().unwrap_or_else(|| format!("Member {}", member.id))}</td>
                                                    <td>{contact}</td>
                                                    <td>{member.joined_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                    <td><StatusPill tone=membership_tone(member.status) label=member.status.label()/></td>
                                                    <td class="actions">{actions}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, name: &str, status: MembershipStatus) -> Member {
        Member {
            id: Id::from(id),
            user_id: None,
            full_name: Some(name.to_string()),
            email: None,
            phone: None,
            status,
            joined_at: None,
        }
    }

    #[test]
    fn test_pending_requests_first() {
        let mut members = vec![
            member(1, "Zawadi", MembershipStatus::Active),
            member(2, "Baraka", MembershipStatus::Suspended),
            member(3, "Neema", MembershipStatus::Pending),
            member(4, "Akinyi", MembershipStatus::Active),
        ];
        sort_members(&mut members);
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["3", "4", "1", "2"]);
    }
}
