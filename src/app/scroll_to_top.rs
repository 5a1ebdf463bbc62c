use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::viewport::scroll_to_top_visible;

use super::header::scroll_to_section;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        <Show when=move || scroll_to_top_visible(scroll_y.get())>
            <div class="fixed bottom-8 right-8 z-50 animate-in fade-in zoom-in">
                <button
                    class="rounded-full shadow-lg h-12 w-12 text-white bg-gradient-to-r from-primary to-purple-600 hover:from-primary/90 hover:to-purple-600/90 hover:scale-110 transition-transform"
                    on:click=move |_| scroll_to_section(None)
                >
                    "↑"
                    <span class="sr-only">"Back to top"</span>
                </button>
            </div>
        </Show>
    }
}
