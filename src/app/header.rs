use leptos::prelude::*;
use leptos_use::{use_media_query, use_window_scroll};

use crate::content::{NAV_ITEMS, PROFILE};
use crate::resume::{ButtonSize, ResumeVariant};
use crate::viewport::header_is_scrolled;

use super::resume_button::ResumeDownloadButton;
use super::theme::ModeToggle;

/// Scrolls to the element with the given id, or to the top of the page for `None`.
pub fn scroll_to_section(target: Option<&str>) {
    let Some(id) = target else {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        return;
    };
    match document().get_element_by_id(id) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no section with id {id}"),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Signal::derive(move || header_is_scrolled(scroll_y.get()));
    let is_mobile = use_media_query("(max-width: 767px)".to_string());
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |target: Option<&'static str>| {
        set_menu_open(false);
        scroll_to_section(target);
    };

    let nav_buttons = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <button class=class on:click=move |_| go_to(item.target)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 transition-all duration-300"
            class=(
                ["bg-background/80", "backdrop-blur-md", "shadow-sm", "border-b", "border-border/20"],
                move || is_scrolled.get(),
            )
            class:bg-transparent=move || !is_scrolled.get()
        >
            <div class="container max-w-6xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="#"
                        class="text-xl font-bold logo-text hover:scale-105 transition-transform"
                        data-text=PROFILE.name
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(None);
                        }
                    >
                        {PROFILE.name}
                    </a>

                    <nav class="hidden md:flex items-center space-x-1">
                        {nav_buttons(
                            "px-4 py-2 rounded-md text-sm font-medium hover:bg-primary/10 transition-colors duration-200",
                        )}
                        <ResumeDownloadButton variant=ResumeVariant::Minimal size=ButtonSize::Sm />
                        <ModeToggle />
                    </nav>

                    <div class="flex items-center md:hidden space-x-2">
                        <ModeToggle />
                        <button
                            class="h-9 w-9 rounded-md hover:bg-primary/10"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get() && is_mobile.get()>
                <div class="md:hidden bg-background/95 backdrop-blur-md border-t border-border/20">
                    <div class="container max-w-6xl mx-auto px-4 py-4 space-y-1 flex flex-col">
                        {nav_buttons(
                            "w-full text-left px-4 py-2 rounded-md text-lg hover:bg-primary/10",
                        )}
                    </div>
                </div>
            </Show>
        </header>
    }
}
