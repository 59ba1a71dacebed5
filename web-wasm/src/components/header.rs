//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Teajia"</h1>
            <button
                class="filter-toggle"
                aria-expanded=move || sidebar_open.get().to_string()
                on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
            >
                "Filters"
            </button>
        </header>
    }
}
