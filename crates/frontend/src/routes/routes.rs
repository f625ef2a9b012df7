use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::supply_overview::SupplyOverview;
use crate::domain::inventory::ui::{InventoryDetails, InventoryList};
use crate::domain::orders::ui::OrdersList;
use crate::domain::production::ui::{ProductionDetails, ProductionList};
use crate::domain::suppliers::ui::{SupplierDetails, SupplierList};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::payment_result::PaymentResultPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::reset_password::ResetPasswordPage;

/// Everything behind the shell requires a session; without one the
/// login page renders in place.
#[component]
fn ProtectedShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell>
                <Outlet />
            </Shell>
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/reset-password") view=ResetPasswordPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=SupplyOverview />
                    <Route path=path!("/inventory") view=InventoryList />
                    <Route path=path!("/inventory/:id") view=InventoryDetails />
                    <Route path=path!("/production") view=ProductionList />
                    <Route path=path!("/production/new") view=ProductionDetails />
                    <Route path=path!("/suppliers") view=SupplierList />
                    <Route path=path!("/suppliers/new") view=SupplierDetails />
                    <Route path=path!("/suppliers/:id") view=SupplierDetails />
                    <Route path=path!("/orders") view=OrdersList />
                    <Route path=path!("/payment/status/:session_id") view=PaymentResultPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
