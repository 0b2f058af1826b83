//! Pagination Bar Component
//!
//! Previous/next and numbered page buttons plus a rows-per-page selector.
//! Buttons are disabled at the bounds computed from the live view size.

use leptos::prelude::*;
use list_manager::ListState;

#[component]
pub fn PaginationBar(
    state: RwSignal<ListState>,
    page_sizes: Vec<usize>,
) -> impl IntoView {
    let view_len = move || state.with(|s| s.active_view().len());
    let page_index = move || state.with(|s| s.pagination.page_index());
    let page_count = move || state.with(|s| s.page_count());

    let range_label = move || {
        let (first, last, total) = state.with(|s| s.pagination.range_label(s.active_view().len()));
        format!("{}–{} de {}", first, last, total)
    };

    let on_page_size = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            state.update(|s| s.pagination.set_page_size(size));
        }
    };

    view! {
        <div class="pagination">
            <button
                disabled=move || !state.with(|s| s.pagination.has_previous())
                on:click=move |_| state.update(|s| s.previous_page())
            >
                "Anterior"
            </button>
            {move || (0..page_count()).map(|index| {
                view! {
                    <button
                        class=move || if page_index() == index { "page-btn active" } else { "page-btn" }
                        on:click=move |_| state.update(|s| s.pagination.go_to(index))
                    >
                        {index + 1}
                    </button>
                }
            }).collect_view()}
            <button
                disabled=move || {
                    let len = view_len();
                    !state.with(|s| s.pagination.has_next(len))
                }
                on:click=move |_| state.update(|s| s.next_page())
            >
                "Siguiente"
            </button>

            <label class="rows-per-page">
                "Filas por página: "
                <select on:change=on_page_size>
                    {page_sizes.into_iter().map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || state.with(|s| s.pagination.page_size()) == size
                            >
                                {size}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="range-label">{range_label}</span>
        </div>
    }
}
