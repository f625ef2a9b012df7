use leptos::prelude::*;

use super::sidebar::Sidebar;

/// Two-column application shell: sidebar navigation plus the routed
/// page content.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">{children()}</main>
        </div>
    }
}
