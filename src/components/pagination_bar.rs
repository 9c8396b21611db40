//! Pagination Bar Component

use leptos::prelude::*;
use task_grid::page_numbers;

/// Previous/next and numbered page buttons
///
/// Every button just requests a page; `on_page` decides whether the
/// request is in range.
#[component]
pub fn PaginationBar(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || current_page.get() <= 1
                on:click=move |_| on_page.run(current_page.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>
            <For
                each=move || page_numbers(total_pages.get())
                key=|page| *page
                children=move |page| {
                    let page_class = move || {
                        if current_page.get() == page { "page-btn active" } else { "page-btn" }
                    };
                    view! {
                        <button class=page_class on:click=move |_| on_page.run(page)>
                            {page}
                        </button>
                    }
                }
            />
            <button
                class="page-btn"
                disabled=move || current_page.get() >= total_pages.get()
                on:click=move |_| on_page.run(current_page.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
