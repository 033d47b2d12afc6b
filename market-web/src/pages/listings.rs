//! Crop listings owned by the current user: farmers list their harvest,
//! cooperative owners list pooled produce.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::{Id, NewCropRequest};
use shared::normalize::{normalize_crop, DEFAULT_UNIT};

use crate::components::{loaded, Flash, Notice};
use crate::services::api::{crops, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::format::{format_date, format_money, format_quantity};

#[component]
pub fn MyListings(#[prop(into)] title: String) -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);

    let listings = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { crops::my_crops(&client).await }
        }
    });

    let crop_name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit = RwSignal::new(DEFAULT_UNIT.to_string());
    let price = RwSignal::new(String::new());
    let harvest_date = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_create = {
        let client = client.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let request = match NewCropRequest::from_form(
                &crop_name.get_untracked(),
                &quantity.get_untracked(),
                &unit.get_untracked(),
                &price.get_untracked(),
                &harvest_date.get_untracked(),
                &description.get_untracked(),
            ) {
                Ok(request) => request,
                Err(message) => {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
            };
            let client = client.clone();
            saving.set(true);
            spawn_local(async move {
                match crops::create_crop(&client, &request).await {
                    Ok(_) => {
                        notice.set(Some(Notice::success(format!("Listed {}", request.crop_name))));
                        crop_name.set(String::new());
                        quantity.set(String::new());
                        price.set(String::new());
                        harvest_date.set(String::new());
                        description.set(String::new());
                        listings.refetch();
                    }
                    Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
                }
                saving.set(false);
            });
        }
    };

    let remove = move |id: Id| {
        let client = client.clone();
        spawn_local(async move {
            match crops::delete_crop(&client, &id).await {
                Ok(()) => {
                    notice.set(Some(Notice::success("Listing removed")));
                    listings.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page listings-page">
            <h1>{title}</h1>
            <Flash notice=notice/>
            <form class="card form form-grid" on:submit=on_create>
                <h3>"New listing"</h3>
                <input
                    type="text"
                    placeholder="Crop name"
                    prop:value=move || crop_name.get()
                    on:input=move |ev| crop_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Unit"
                    prop:value=move || unit.get()
                    on:input=move |ev| unit.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Price per unit (KES)"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || harvest_date.get()
                    on:input=move |ev| harvest_date.set(event_target_value(&ev))
                />
                <textarea
                    rows="2"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit" disabled=move || saving.get()>"Add listing"</button>
            </form>
            {move || {
                let remove = remove.clone();
                loaded(
                    listings.get(),
                    move |records| {
                        if records.is_empty() {
                            return view! { <p class="empty">"No listings yet"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Crop"</th>
                                        <th>"Quantity"</th>
                                        <th>"Price"</th>
                                        <th>"Harvested"</th>
                                        <th>"Value"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {records
                                        .iter()
                                        .map(normalize_crop)
                                        .map(|crop| {
                                            let remove = remove.clone();
                                            let id = crop.id.clone();
                                            view! {
                                                <tr>
                                                    <td>{crop.name.clone()}</td>
                                                    <td>{format_quantity(crop.quantity, &crop.unit)}</td>
                                                    <td>{format!("{} / {}", format_money(crop.price_per_unit, "KES"), crop.unit)}</td>
                                                    <td>{crop.harvest_date.as_deref().map(format_date).unwrap_or_default()}</td>
                                                    <td>{format_money(crop.listing_value(), "KES")}</td>
                                                    <td>
                                                        <button class="btn btn-ghost btn-small" on:click=move |_| remove(id.clone())>
                                                            "Remove"
                                                        </button>
                                                    </td>
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
