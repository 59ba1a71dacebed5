//! フィルタサイドバー
//!
//! 検索・プリセット・茶種・価格・産地の各操作を Catalog に反映する。

use leptos::prelude::*;
use teajia_common::{Catalog, Preset, TeaType};

/// 価格スライダーの表示文言
pub fn price_label(max: f64, ceiling: f64) -> String {
    if max >= ceiling {
        "All Prices".to_string()
    } else {
        format!("Up to ${}/g", max)
    }
}

#[component]
pub fn FilterSidebar(catalog: RwSignal<Catalog>, open: ReadSignal<bool>) -> impl IntoView {
    let categories = Memo::new(move |_| catalog.with(|c| c.category_options()));
    let origins = Memo::new(move |_| catalog.with(|c| c.origin_options()));
    let ceiling = move || catalog.with(|c| c.price_ceiling());
    let max_price = move || catalog.with(|c| c.filters().max_price_per_unit);

    view! {
        <aside class="filter-sidebar" class:active=move || open.get()>
            <div class="filter-group">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search teas, origins, notes..."
                    prop:value=move || catalog.with(|c| c.filters().search_input.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        catalog.update(|c| c.set_search(&term));
                    }
                />
            </div>

            <div class="filter-group presets">
                {Preset::ALL
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                class="preset-btn"
                                class:active=move || {
                                    catalog.with(|c| c.filters().active_preset == Some(preset))
                                }
                                on:click=move |_| catalog.update(|c| c.set_preset(Some(preset)))
                            >
                                {preset.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="filter-group">
                <h3>"Tea Type"</h3>
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let label = TeaType::classify(&category).label();
                        let id = format!("type-{}", category);
                        let checked_value = category.clone();
                        view! {
                            <div class="filter-checkbox">
                                <input
                                    type="checkbox"
                                    id=id.clone()
                                    prop:checked=move || {
                                        catalog.with(|c| c.filters().selected_categories.contains(&checked_value))
                                    }
                                    on:change=move |_| catalog.update(|c| c.toggle_category(&category))
                                />
                                <label for=id>{label}</label>
                            </div>
                        }
                    }
                />
            </div>

            <div class="filter-group">
                <h3>"Price"</h3>
                <input
                    type="range"
                    min="0"
                    step="0.01"
                    prop:max=move || ceiling().to_string()
                    prop:value=move || max_price().to_string()
                    on:input=move |ev| {
                        if let Ok(max) = event_target_value(&ev).parse::<f64>() {
                            catalog.update(|c| c.set_max_price(max));
                        }
                    }
                />
                <span class="price-display">{move || price_label(max_price(), ceiling())}</span>
            </div>

            <div class="filter-group">
                <h3>"Origin"</h3>
                <For
                    each=move || origins.get()
                    key=|origin| origin.clone()
                    children=move |origin| {
                        let id = format!("origin-{}", origin);
                        let checked_value = origin.clone();
                        let label = origin.clone();
                        view! {
                            <div class="filter-checkbox">
                                <input
                                    type="checkbox"
                                    id=id.clone()
                                    prop:checked=move || {
                                        catalog.with(|c| c.filters().selected_origins.contains(&checked_value))
                                    }
                                    on:change=move |_| catalog.update(|c| c.toggle_origin(&origin))
                                />
                                <label for=id>{label}</label>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || catalog.with(|c| !c.filters().active_tags.is_empty())>
                <div class="filter-group active-tags">
                    {move || {
                        catalog.with(|c| {
                            c.filters()
                                .active_tags
                                .iter()
                                .map(|tag| view! { <span class="tea-tag">{tag.clone()}</span> })
                                .collect_view()
                        })
                    }}
                    <button class="btn btn-small" on:click=move |_| catalog.update(|c| c.clear_tags())>
                        "×"
                    </button>
                </div>
            </Show>

            <button
                class="btn btn-secondary clear-filters"
                prop:disabled=move || catalog.with(|c| !c.filters().is_active(c.price_ceiling()))
                on:click=move |_| catalog.update(|c| c.clear_filters())
            >
                "Clear Filters"
            </button>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(3.0, 3.0), "All Prices");
        assert_eq!(price_label(1.5, 3.0), "Up to $1.5/g");
    }
}
