use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::{ToastHost, Toasts};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // App-wide toast service.
    provide_context(Toasts::new());

    view! {
        <AuthProvider>
            <ToastHost />
            <AppRoutes />
        </AuthProvider>
    }
}
