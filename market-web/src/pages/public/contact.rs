use leptos::prelude::*;

pub const SUPPORT_EMAIL: &str = "support@agromarket.example";
pub const SUPPORT_PHONE: &str = "+254 700 000 000";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page contact-page">
            <div class="card">
                <h1 class="card-title">"Contact us"</h1>
                <p>"Questions about an order, your cooperative or API access? Reach the support team:"</p>
                <dl class="contact-list">
                    <dt>"Email"</dt>
                    <dd><a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a></dd>
                    <dt>"Phone"</dt>
                    <dd><a href=format!("tel:{}", SUPPORT_PHONE.replace(' ', ""))>{SUPPORT_PHONE}</a></dd>
                    <dt>"Hours"</dt>
                    <dd>"Monday to Friday, 8:00 to 17:00 EAT"</dd>
                </dl>
            </div>
        </div>
    }
}
