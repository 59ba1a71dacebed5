//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use teajia_common::{Catalog, LoadState, TeaRecord};

use crate::api;
use crate::components::{
    filter_sidebar::FilterSidebar,
    header::Header,
    recent_viewed::RecentViewed,
    stats_bar::StatsBar,
    tea_grid::TeaGrid,
    tea_modal::TeaModal,
};
use crate::storage::LocalStore;

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new());
    let (selected, set_selected) = signal(None::<TeaRecord>);
    let (sidebar_open, set_sidebar_open) = signal(false);

    // 起動時に一度だけ取得
    spawn_local(async move {
        let payload = api::fetch_csv(api::CATALOG_CSV_URL).await;
        catalog.update(|c| {
            c.finish_loading(payload);
            if let LoadState::Error(message) = c.state() {
                log_error(&format!("Error loading tea data: {}", message));
            }
            if let Err(e) = c.load_history(&LocalStore) {
                log_error(&e.to_string());
            }
        });
    });

    let on_open = move |name: String| {
        let mut opened = None;
        catalog.update(|c| {
            opened = c.record_view(&name).cloned();
            if opened.is_none() {
                return;
            }
            // 保存できなくても詳細は開く
            if let Err(e) = c.save_history(&mut LocalStore) {
                log_error(&format!("Error saving recent teas: {}", e));
            }
        });
        if opened.is_some() {
            set_selected.set(opened);
        }
    };

    let on_tag = move |tag: String| catalog.update(|c| c.set_tag(&tag));
    let on_close = move |_: ()| set_selected.set(None);

    let stats = Signal::derive(move || catalog.with(|c| c.statistics()));
    let teas = Signal::derive(move || {
        catalog.with(|c| c.view().into_iter().cloned().collect::<Vec<_>>())
    });
    let recent = Signal::derive(move || {
        catalog.with(|c| c.history().names().into_iter().map(String::from).collect::<Vec<_>>())
    });

    view! {
        <div class="app">
            <Header sidebar_open=sidebar_open set_sidebar_open=set_sidebar_open />
            <StatsBar stats=stats />

            <div class="layout">
                <FilterSidebar catalog=catalog open=sidebar_open />

                <main class="main-content">
                    <RecentViewed names=recent on_open=on_open />
                    {move || match catalog.with(|c| c.state().clone()) {
                        LoadState::Loading => view! {
                            <div class="loading">"Loading teas..."</div>
                        }
                        .into_any(),
                        LoadState::Error(_) => view! {
                            <div class="empty-state">
                                "Unable to load tea catalog. Please refresh the page."
                            </div>
                        }
                        .into_any(),
                        LoadState::Ready => view! {
                            <TeaGrid teas=teas on_open=on_open on_tag=on_tag />
                        }
                        .into_any(),
                    }}
                </main>
            </div>

            <TeaModal selected=selected on_close=on_close />
        </div>
    }
}
