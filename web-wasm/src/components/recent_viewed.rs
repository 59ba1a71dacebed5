//! 最近見た商品

use leptos::prelude::*;

#[component]
pub fn RecentViewed<FO>(names: Signal<Vec<String>>, on_open: FO) -> impl IntoView
where
    FO: Fn(String) + 'static + Clone + Send,
{
    view! {
        <Show when=move || !names.with(|n| n.is_empty())>
            <section class="recently-viewed">
                <h3>"Recently Viewed"</h3>
                <div class="recent-teas">
                    <For
                        each=move || names.get()
                        key=|name| name.clone()
                        children={
                            let on_open = on_open.clone();
                            move |name| {
                                let on_open = on_open.clone();
                                let label = name.clone();
                                view! {
                                    <div class="recent-tea" on:click=move |_| on_open(name.clone())>
                                        {label}
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
