//! 集計バー

use leptos::prelude::*;
use teajia_common::Statistics;

#[component]
pub fn StatsBar(stats: Signal<Statistics>) -> impl IntoView {
    view! {
        <div class="stats-bar">
            <div class="stat">
                <span class="stat-value">{move || stats.get().total_count}</span>
                <span class="stat-label">"Teas"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{move || stats.get().distinct_category_count}</span>
                <span class="stat-label">"Types"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{move || stats.get().in_stock_count}</span>
                <span class="stat-label">"In Stock"</span>
            </div>
        </div>
    }
}
