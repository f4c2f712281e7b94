pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;

/// Portal frame: header on top, resolved menu on the left, routed page in the center
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <top_header::TopHeader />
            <div class="app-body">
                <left::Left />
                <main class="app-main">
                    <center::Center>{children()}</center::Center>
                </main>
            </div>
        </div>
    }
}
