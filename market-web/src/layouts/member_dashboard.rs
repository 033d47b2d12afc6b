use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::{DashboardShell, NotFound, RequireSession};
use crate::pages::member::{
    MemberCooperativesPage, MemberOrdersPage, MemberOverviewPage, MyProfilePage, OrderDetailPage,
    ProfileDetailPage, TransactionsPage,
};
use crate::pages::messages::MessagesPage;
use crate::pages::settings::SettingsPage;
use crate::routing::{decode_param, MemberRoute, ID_PARAM, MEMBER_AREA};

#[component]
pub fn MemberDashboardLayout() -> impl IntoView {
    view! {
        <RequireSession allowed=MEMBER_AREA.allowed>
            <DashboardShell role=MEMBER_AREA.shell>
                <Routes fallback=|| view! { <NotFound home=MemberRoute::Overview.path()/> }>
                    <Route path=path!("/PetOwnerDashboard") view=MemberOverviewPage/>
                    <Route path=path!("/PetOwnerDashboard/Cooperatives") view=MemberCooperativesPage/>
                    <Route path=path!("/PetOwnerDashboard/Orders") view=MemberOrdersPage/>
                    <Route path=path!("/PetOwnerDashboard/Orders/:id") view=OrderDetailRoute/>
                    <Route path=path!("/PetOwnerDashboard/PetProfile") view=MyProfilePage/>
                    <Route path=path!("/PetOwnerDashboard/PetProfile/:id") view=ProfileDetailRoute/>
                    <Route path=path!("/PetOwnerDashboard/Transactions") view=TransactionsPage/>
                    <Route path=path!("/PetOwnerDashboard/Messages") view=MessagesPage/>
                    <Route path=path!("/PetOwnerDashboard/Settings") view=SettingsPage/>
                </Routes>
            </DashboardShell>
        </RequireSession>
    }
}

/// The decoded `:id` of the current detail route.
fn id_param() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get_str(ID_PARAM).map(decode_param)))
}

#[component]
fn OrderDetailRoute() -> impl IntoView {
    let id = id_param();
    move || id.get().map(|id| view! { <OrderDetailPage id=id/> })
}

#[component]
fn ProfileDetailRoute() -> impl IntoView {
    let id = id_param();
    move || id.get().map(|id| view! { <ProfileDetailPage id=id/> })
}
