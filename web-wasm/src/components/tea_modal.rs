//! 商品詳細モーダル

use leptos::ev;
use leptos::prelude::*;
use teajia_common::TeaRecord;

#[component]
pub fn TeaModal<FC>(selected: ReadSignal<Option<TeaRecord>>, on_close: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    // Escape で閉じる
    let handle = window_event_listener(ev::keydown, {
        let on_close = on_close.clone();
        move |ev| {
            if ev.key() == "Escape" && selected.with_untracked(|s| s.is_some()) {
                on_close(());
            }
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        {move || {
            selected.get().map(|tea| {
                let tea_type = tea.tea_type();
                let stock = tea.stock_status();
                let on_backdrop = on_close.clone();
                let on_button = on_close.clone();
                let source = if tea.origin_label.is_empty() {
                    "Not specified".to_string()
                } else {
                    tea.origin_label.clone()
                };
                let notes = if tea.tasting_notes.is_empty() {
                    "See tasting notes".to_string()
                } else {
                    tea.tasting_notes.clone()
                };

                view! {
                    <div class="modal-backdrop" on:click=move |_| on_backdrop(())></div>
                    <div class="modal" role="dialog" aria-modal="true">
                        <button class="modal-close" aria-label="Close" on:click=move |_| on_button(())>
                            "×"
                        </button>
                        <div class="modal-image">
                            <span style="font-size: 4rem;">{tea.emoji()}</span>
                        </div>
                        <h2>{tea.display_name.clone()}</h2>
                        <p class="modal-english-name">{tea.alternate_name.clone()}</p>
                        <span class="modal-badge">{tea_type.label()}</span>

                        <section class="modal-origin">
                            <p><strong>"Source: "</strong>{source}</p>
                            <p><strong>"Type: "</strong>{tea.category.clone()}</p>
                            {tea.has_meaningful_age().then(|| view! {
                                <p><strong>"Age: "</strong>{tea.age_label.clone()}</p>
                            })}
                            {(!tea.weight_label.is_empty()).then(|| view! {
                                <p><strong>"Weight: "</strong>{tea.weight_label.clone()}</p>
                            })}
                        </section>

                        <section class="modal-flavor">{notes}</section>

                        <section class="modal-brewing">
                            <p><strong>"Price per Gram: "</strong>{format!("${}", tea.price_display())}</p>
                            {(!tea.item_code.is_empty()).then(|| view! {
                                <p><strong>"Item #: "</strong>{tea.item_code.clone()}</p>
                            })}
                            {(!tea.shipping_label.is_empty()).then(|| view! {
                                <p><strong>"Shipping: "</strong>{tea.shipping_label.clone()}</p>
                            })}
                        </section>

                        <div class="modal-stock">
                            <span class=format!("stock-indicator {}", stock.level.css_class())></span>
                            <span><strong>{stock.text}</strong></span>
                        </div>
                    </div>
                }
            })
        }}
    }
}
