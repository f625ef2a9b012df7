use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Chaiwala Admin"</div>

            <nav class="sidebar__nav">
                <A href="/">"Dashboard"</A>
                <A href="/inventory">"Inventory"</A>
                <A href="/production">"Production"</A>
                <A href="/suppliers">"Suppliers"</A>
                <A href="/orders">"Orders"</A>
                <A href="/profile">"My profile"</A>
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__user">{username}</span>
                <button
                    class="btn btn--link"
                    on:click=move |_| do_logout(set_auth_state)
                >
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
