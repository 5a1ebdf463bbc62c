use leptos::{either::EitherOf3, ev::MouseEvent, html, prelude::*, task::spawn_local};

use crate::contact::Delay;
use crate::content::{updated_label, RESUME_FILE_NAME, RESUME_PATH};
use crate::notice::Severity;
use crate::resume::{aria_label, button_text, ButtonSize, ResumeVariant, PREPARE_DELAY};

use super::delay::BrowserDelay;
use super::notify::Notifier;

#[component]
pub fn ResumeDownloadButton(
    #[prop(optional)] variant: ResumeVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(default = true)] show_preview: bool,
) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let anchor = NodeRef::<html::A>::new();
    let (downloading, set_downloading) = signal(false);

    let download = move |_: MouseEvent| {
        if downloading.get_untracked() {
            return;
        }
        set_downloading(true);
        spawn_local(async move {
            BrowserDelay.sleep(PREPARE_DELAY).await;
            match anchor.get_untracked() {
                Some(a) => {
                    a.click();
                    notifier.notify(
                        "Resume downloaded!",
                        "Thanks for your interest, the download has started.",
                        Severity::Success,
                    );
                }
                None => {
                    log::warn!("resume link isn't mounted");
                    notifier.notify(
                        "Download failed",
                        "Something went wrong with the download. Please try again later or contact me directly.",
                        Severity::Destructive,
                    );
                }
            }
            set_downloading.try_set(false);
        });
    };

    let hidden_link = view! {
        <a node_ref=anchor href=RESUME_PATH download=RESUME_FILE_NAME class="hidden" aria-hidden="true"></a>
    };

    let body = match variant {
        ResumeVariant::Card => {
            let updated = updated_label(env!("BUILD_TIME")).unwrap_or_default();
            EitherOf3::A(view! {
                <div class="hover:-translate-y-0.5 transition-transform">
                    <div class="rounded-lg border bg-background/50 backdrop-blur-sm border-muted/20 hover:border-primary/20 transition-all duration-300 p-6">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-4">
                                <div class="bg-gradient-to-r from-primary/10 to-purple-500/10 p-3 rounded-full text-primary">
                                    "📄"
                                </div>
                                <div>
                                    <h3 class="font-semibold text-foreground">"My resume"</h3>
                                    <p class="text-sm text-muted-foreground">
                                        "PDF • Last updated " {updated}
                                    </p>
                                </div>
                            </div>
                            <button
                                class="rounded-md h-10 px-4 text-white bg-gradient-to-r from-primary to-purple-600 hover:from-primary/90 hover:to-purple-600/90 disabled:opacity-70"
                                aria-label=move || aria_label(downloading.get())
                                disabled=move || downloading.get()
                                on:click=download
                            >
                                {move || if downloading.get() { "⟳" } else { "⬇" }}
                            </button>
                        </div>
                    </div>
                </div>
            })
        }
        ResumeVariant::Minimal => EitherOf3::B(view! {
            <button
                class=format!(
                    "group rounded-md {} hover:bg-primary/10 focus:ring-2 focus:ring-primary/20",
                    size.classes(),
                )
                aria-label=move || aria_label(downloading.get())
                disabled=move || downloading.get()
                on:click=download
            >
                <span class="flex items-center gap-2 group-hover:text-primary transition-colors">
                    <span class=size.icon_classes()>
                        {move || if downloading.get() { "⟳" } else { "⬇" }}
                    </span>
                    {move || button_text(downloading.get())}
                </span>
            </button>
        }),
        ResumeVariant::Default => EitherOf3::C(view! {
            <div class="flex flex-col gap-2">
                <button
                    class=format!(
                        "group relative overflow-hidden rounded-md bg-background/80 backdrop-blur-sm border-2 border-muted/40 hover:border-primary/60 text-foreground hover:text-primary font-semibold transition-all duration-300 shadow-md hover:shadow-lg disabled:opacity-70 {}",
                        size.classes(),
                    )
                    aria-label=move || aria_label(downloading.get())
                    disabled=move || downloading.get()
                    on:click=download
                >
                    <span class="relative flex items-center gap-2.5">
                        <span class=size.icon_classes() class:animate-spin=move || downloading.get()>
                            "⬇"
                        </span>
                        {move || button_text(downloading.get())}
                    </span>
                </button>
                <Show when=move || show_preview>
                    <div class="flex items-center justify-center gap-2 text-xs text-muted-foreground">
                        <span>"PDF"</span>
                        <a
                            href=RESUME_PATH
                            target="_blank"
                            rel="noopener noreferrer"
                            class="h-5 px-2 hover:text-primary transition-colors"
                            aria-label="Preview the resume in a new window"
                        >
                            "Preview ↗"
                        </a>
                    </div>
                </Show>
            </div>
        }),
    };

    view! {
        {hidden_link}
        {body}
    }
}
