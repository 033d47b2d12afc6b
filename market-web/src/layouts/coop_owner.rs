use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::components::{DashboardShell, NotFound, RequireSession};
use crate::pages::coop::{
    CoopAppointmentsPage, CoopMembersPage, CoopOrdersPage, CoopOverviewPage, CoopProducePage,
};
use crate::pages::messages::MessagesPage;
use crate::pages::settings::SettingsPage;
use crate::routing::{CoopRoute, COOP_OWNER_AREA};

#[component]
pub fn CoopOwnerLayout() -> impl IntoView {
    view! {
        <RequireSession allowed=COOP_OWNER_AREA.allowed>
            <DashboardShell role=COOP_OWNER_AREA.shell>
                <Routes fallback=|| view! { <NotFound home=CoopRoute::Overview.path()/> }>
                    <Route path=path!("/CoopDashboard") view=CoopOverviewPage/>
                    <Route path=path!("/CoopDashboard/Members") view=CoopMembersPage/>
                    <Route path=path!("/CoopDashboard/Appointments") view=CoopAppointmentsPage/>
                    <Route path=path!("/CoopDashboard/Produce") view=CoopProducePage/>
                    <Route path=path!("/CoopDashboard/Orders") view=CoopOrdersPage/>
                    <Route path=path!("/CoopDashboard/Messages") view=MessagesPage/>
                    <Route path=path!("/CoopDashboard/Settings") view=SettingsPage/>
                </Routes>
            </DashboardShell>
        </RequireSession>
    }
}
