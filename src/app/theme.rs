use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::{Appearance, ThemePreference};

/// Colour scheme state shared from the root. `set_preference` is the only way to change it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    preference: Signal<ThemePreference>,
    set_preference: WriteSignal<ThemePreference>,
    system_dark: Signal<bool>,
}

impl ThemeContext {
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn appearance(&self) -> Appearance {
        self.preference.get().resolve(self.system_dark.get())
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        log::debug!("theme preference set to {}", preference.label());
        self.set_preference.set(preference);
    }
}

pub fn provide_theme() {
    #[cfg(feature = "hydrate")]
    let (preference, set_preference, _) =
        use_local_storage::<ThemePreference, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (preference, set_preference) = {
        let (preference, set_preference) = signal(ThemePreference::initial(None));
        (Signal::from(preference), set_preference)
    };

    let ctx = ThemeContext {
        preference,
        set_preference,
        system_dark: use_preferred_dark(),
    };

    Effect::new(move |_| {
        let appearance = ctx.appearance();
        if let Some(root) = document().document_element() {
            if let Err(err) = root.set_attribute("data-theme", appearance.as_str()) {
                log::warn!("couldn't apply theme: {err:?}");
            }
        }
    });

    provide_context(ctx);
}

#[component]
pub fn ModeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class="h-9 w-9 rounded-md hover:bg-primary/10 transition-colors duration-200"
                aria-label="Toggle theme"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || theme.appearance().icon()}
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-32 rounded-md border border-muted/20 bg-background shadow-lg z-50">
                    {ThemePreference::ALL
                        .into_iter()
                        .map(|pref| {
                            view! {
                                <button
                                    class="block w-full px-3 py-2 text-left text-sm hover:bg-primary/10"
                                    class:font-bold=move || theme.preference() == pref
                                    on:click=move |_| {
                                        theme.set_preference(pref);
                                        set_open(false);
                                    }
                                >
                                    {pref.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
