//! 商品カード一覧

use leptos::prelude::*;
use teajia_common::TeaRecord;

#[component]
pub fn TeaGrid<FO, FT>(teas: Signal<Vec<TeaRecord>>, on_open: FO, on_tag: FT) -> impl IntoView
where
    FO: Fn(String) + 'static + Clone + Send,
    FT: Fn(String) + 'static + Clone + Send,
{
    view! {
        <Show
            when=move || !teas.with(|t| t.is_empty())
            fallback=|| view! { <div class="empty-state">"No teas match your filters."</div> }
        >
            <div class="tea-grid">
                <For
                    each=move || teas.get().into_iter().enumerate()
                    key=|(i, tea)| (*i, tea.display_name.clone())
                    children={
                        let on_open = on_open.clone();
                        let on_tag = on_tag.clone();
                        move |(_, tea)| {
                            view! { <TeaCard tea=tea on_open=on_open.clone() on_tag=on_tag.clone() /> }
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn TeaCard<FO, FT>(tea: TeaRecord, on_open: FO, on_tag: FT) -> impl IntoView
where
    FO: Fn(String) + 'static + Clone + Send,
    FT: Fn(String) + 'static + Clone + Send,
{
    let tea_type = tea.tea_type();
    let stock = tea.stock_status();
    let tags = tea.tags();
    let name = tea.display_name.clone();

    view! {
        <div
            class="tea-card"
            role="button"
            tabindex="0"
            on:click={
                let on_open = on_open.clone();
                let name = name.clone();
                move |_| on_open(name.clone())
            }
            on:keydown={
                let on_open = on_open.clone();
                let name = name.clone();
                move |ev| {
                    let key = ev.key();
                    if key == "Enter" || key == " " {
                        ev.prevent_default();
                        on_open(name.clone());
                    }
                }
            }
        >
            <div class=format!("tea-card-image {}", tea_type.pattern_class())>
                <span class="tea-card-type-badge">{tea_type.label()}</span>
            </div>
            <div class="tea-card-content">
                <h3 class="tea-card-name">{tea.title_display()}</h3>
                <div class="tea-card-price">{format!("${}/g", tea.price_display())}</div>
                {(!tea.origin_label.is_empty())
                    .then(|| view! { <p class="tea-card-origin">{tea.origin_label.clone()}</p> })}
                <div class="tea-card-tags">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            let on_tag = on_tag.clone();
                            let clicked = tag.clone();
                            view! {
                                <span
                                    class="tea-tag"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        on_tag(clicked.clone());
                                    }
                                >
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="tea-card-stock">
                    <span class=format!("stock-indicator {}", stock.level.css_class())></span>
                    <span>{stock.text}</span>
                </div>
            </div>
        </div>
    }
}
