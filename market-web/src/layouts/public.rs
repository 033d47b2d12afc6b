//! Public layout: navbar and footer around marketing, auth, marketplace,
//! farmer and organization pages. Both chrome pieces can be suppressed per
//! path.
//!
//! Farmer and organization pages sit at flat paths but share one guarded
//! dashboard shell per role, mounted once by a path-less parent route so
//! moving between them keeps the shell.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::{DashboardShell, Footer, NotFound, PublicNavbar, RequireSession};
use crate::config::use_config;
use crate::pages::farmer::{FarmerCropsPage, FarmerDashboardPage, FarmerOrdersPage};
use crate::pages::organization::{OrganizationApiKeysPage, OrganizationDashboardPage};
use crate::pages::public::{
    AboutPage, ContactPage, ForgotPasswordPage, HomePage, LoginPage, MarketplacePage,
    ResetPasswordPage, SignupPage,
};
use crate::routing::{chrome_for, Area, PublicRoute, FARMER_AREA, ORGANIZATION_AREA};

#[component]
pub fn PublicLayout() -> impl IntoView {
    let location = use_location();
    let chrome = Memo::new(move |_| chrome_for(&location.pathname.get()));

    view! {
        <div class="layout layout-public">
            <Show when=move || chrome.get().nav>
                <PublicNavbar/>
            </Show>
            <div class="public-content">
                <Routes fallback=|| view! { <NotFound home=PublicRoute::Home.path()/> }>
                    <Route path=path!("/") view=LandingRedirect/>
                    <Route path=path!("/Home") view=HomePage/>
                    <Route path=path!("/Login") view=LoginPage/>
                    <Route path=path!("/Signup") view=SignupPage/>
                    <Route path=path!("/ForgotPassword") view=ForgotPasswordPage/>
                    <Route path=path!("/ResetPassword") view=ResetPasswordPage/>
                    <Route path=path!("/About") view=AboutPage/>
                    <Route path=path!("/Contact") view=ContactPage/>
                    <Route path=path!("/Marketplace") view=MarketplacePage/>
                    <ParentRoute path=path!("") view=FarmerArea>
                        <Route path=path!("/FarmerDashboard") view=FarmerDashboardPage/>
                        <Route path=path!("/FarmerCrops") view=FarmerCropsPage/>
                        <Route path=path!("/FarmerOrders") view=FarmerOrdersPage/>
                    </ParentRoute>
                    <ParentRoute path=path!("") view=OrganizationArea>
                        <Route path=path!("/OrganizationDashboard") view=OrganizationDashboardPage/>
                        <Route path=path!("/OrganizationApiKeys") view=OrganizationApiKeysPage/>
                    </ParentRoute>
                </Routes>
            </div>
            <Show when=move || chrome.get().footer>
                <Footer/>
            </Show>
        </div>
    }
}

#[component]
fn LandingRedirect() -> impl IntoView {
    let landing = use_config().default_landing;
    view! { <Redirect path=landing/> }
}

/// Guard and shell around the child route's view.
fn guarded_area(area: Area) -> impl IntoView {
    view! {
        <RequireSession allowed=area.allowed>
            <DashboardShell role=area.shell>
                <Outlet/>
            </DashboardShell>
        </RequireSession>
    }
}

#[component]
fn FarmerArea() -> impl IntoView {
    guarded_area(FARMER_AREA)
}

#[component]
fn OrganizationArea() -> impl IntoView {
    guarded_area(ORGANIZATION_AREA)
}
