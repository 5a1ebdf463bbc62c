use leptos::{either::Either, ev, html, prelude::*, task::spawn_local};

use crate::contact::{
    ContactDispatcher, ContactSession, Field, RevertTicket, SimulatedDispatcher, SubmissionState,
    SubmitDecision, REVERT_DELAY,
};
use crate::content::{CONTACT_DETAILS, SOCIAL_LINKS};
use crate::resume::ResumeVariant;
use crate::viewport::{reveal_style, REVEAL_AMOUNT};

use super::delay::BrowserDelay;
use super::notify::Notifier;
use super::resume_button::ResumeDownloadButton;
use super::reveal::use_reveal;

#[component]
fn FormField(
    session: RwSignal<ContactSession>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || session.with(|s| s.form().get(field).to_string());
    let error = move || session.with(|s| s.errors().get(field).map(str::to_string));
    let disabled = move || session.with(|s| s.state().is_submitting());
    let on_input = move |ev: ev::Event| {
        session.update(|s| s.set_field(field, event_target_value(&ev)));
    };

    let input_type = if field == Field::Email { "email" } else { "text" };
    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=field.id()
                placeholder=placeholder
                class="w-full min-h-[150px] rounded-md border px-3 py-2 bg-background/50"
                class:border-red-500=move || error().is_some()
                prop:value=value
                on:input=on_input
                disabled=disabled
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=field.id()
                type=input_type
                placeholder=placeholder
                class="w-full h-10 rounded-md border px-3 py-2 bg-background/50"
                class:border-red-500=move || error().is_some()
                prop:value=value
                on:input=on_input
                disabled=disabled
            />
        })
    };

    view! {
        <div class="space-y-2">
            <label for=field.id() class="text-sm font-medium">
                {label}
            </label>
            {control}
            {move || error().map(|msg| view! { <p class="text-sm text-red-500">{msg}</p> })}
        </div>
    }
}

fn button_content(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Send message",
        SubmissionState::Submitting => "⟳ Sending...",
        SubmissionState::Success => "✓ Sent",
        SubmissionState::Error => "✕ Failed to send",
    }
}

fn button_class(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Success => "bg-green-600 hover:bg-green-700",
        SubmissionState::Error => "bg-red-600 hover:bg-red-700",
        _ => "bg-gradient-to-r from-primary to-purple-600 hover:from-primary/90 hover:to-purple-600/90",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_AMOUNT);
    let notifier = expect_context::<Notifier>();
    let dispatcher = SimulatedDispatcher::new(BrowserDelay);

    let session = RwSignal::new(ContactSession::new());
    let revert_timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_revert_timer = move || {
        if let Some(Some(handle)) = revert_timer.try_update_value(Option::take) {
            handle.clear();
        }
    };

    let schedule_revert = move |ticket: RevertTicket| {
        clear_revert_timer();
        let handle = set_timeout_with_handle(
            move || {
                revert_timer.try_update_value(|t| *t = None);
                if session.try_update(|s| s.revert(ticket)) == Some(true) {
                    log::debug!("contact form back to idle");
                }
            },
            REVERT_DELAY,
        );
        match handle {
            Ok(handle) => revert_timer.set_value(Some(handle)),
            Err(err) => log::warn!("couldn't schedule contact form reset: {err:?}"),
        }
    };

    on_cleanup(move || {
        clear_revert_timer();
        session.try_update(|s| s.cancel_pending_revert());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match session.try_update(|s| s.submit()) {
            None | Some(SubmitDecision::Ignored) => {
                log::debug!("contact submission already in flight");
            }
            Some(SubmitDecision::Rejected(notice)) => notifier.show(notice),
            Some(SubmitDecision::Dispatch(form)) => {
                clear_revert_timer();
                log::info!("dispatching contact message ({} chars)", form.message_len());
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    let outcome = dispatcher.dispatch(&form).await;
                    if let Err(err) = &outcome {
                        log::warn!("contact submission failed: {err}");
                    }
                    // the section may have been torn down while we waited
                    let Some(Some(resolution)) = session.try_update(|s| s.resolve(outcome)) else {
                        log::debug!("dropping contact result, form is gone");
                        return;
                    };
                    notifier.show(resolution.notice);
                    schedule_revert(resolution.revert);
                });
            }
        }
    };

    let state = move || session.with(|s| s.state());

    view! {
        <section id="contact" node_ref=section_ref class="py-20 bg-muted/10 backdrop-blur-sm relative">
            <div class="container max-w-6xl mx-auto px-4 relative z-10">
                <div
                    class="space-y-2 text-center mb-16"
                    style=move || reveal_style(revealed.get(), (0, 20), 0)
                >
                    <span class="inline-block rounded-full border px-3 py-1 text-sm bg-background/50 backdrop-blur-sm">
                        "Contact"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold tracking-tight">"Get in Touch"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "Have a project idea or want to talk about working together? I'd love to hear from you."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-8">
                    <div class="space-y-8" style=move || reveal_style(revealed.get(), (-50, 0), 0)>
                        <div class="space-y-6">
                            <h3 class="text-2xl font-bold">"Contact details"</h3>
                            <p class="text-muted-foreground">
                                "Reach out through any of the channels below. I'm always happy to discuss new projects, creative ideas or opportunities."
                            </p>
                        </div>

                        <div class="grid gap-6">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex items-center gap-4 p-4 rounded-lg border bg-background/50 backdrop-blur-sm border-muted/20 hover:border-primary/20 transition-all duration-300">
                                            <div class="bg-gradient-to-r from-primary/10 to-purple-500/10 p-3 rounded-full text-primary">
                                                {item.icon}
                                            </div>
                                            <div>
                                                <p class="text-sm text-muted-foreground">{item.label}</p>
                                                <p class="font-medium">{item.value}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <ResumeDownloadButton variant=ResumeVariant::Card />

                        <div class="space-y-4">
                            <h4 class="font-medium">"Social media"</h4>
                            <div class="grid grid-cols-3 gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <div class="flex flex-col items-center gap-2 hover:-translate-y-0.5 transition-transform">
                                                <a
                                                    href=social.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class=format!(
                                                        "h-10 w-10 inline-flex items-center justify-center rounded-md border bg-background/50 backdrop-blur-sm transition-all duration-300 border-muted/20 hover:border-primary/20 hover:shadow-lg {}",
                                                        social.hover_class,
                                                    )
                                                >
                                                    <i class=social.icon></i>
                                                    <span class="sr-only">{social.label}</span>
                                                </a>
                                                <span class="text-xs text-muted-foreground text-center font-medium">
                                                    {social.label}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div style=move || reveal_style(revealed.get(), (50, 0), 200)>
                        <div class="rounded-lg border bg-background/50 backdrop-blur-sm border-muted/20 p-6">
                            <form on:submit=on_submit class="space-y-6" novalidate>
                                <div class="grid sm:grid-cols-2 gap-4">
                                    <FormField
                                        session=session
                                        field=Field::Name
                                        label="Name *"
                                        placeholder="Your name"
                                    />
                                    <FormField
                                        session=session
                                        field=Field::Email
                                        label="Email *"
                                        placeholder="Your email"
                                    />
                                </div>
                                <FormField
                                    session=session
                                    field=Field::Subject
                                    label="Subject *"
                                    placeholder="What can I help you with?"
                                />
                                <FormField
                                    session=session
                                    field=Field::Message
                                    label="Message *"
                                    placeholder="Tell me about your project..."
                                    multiline=true
                                />

                                <button
                                    type="submit"
                                    class=move || {
                                        format!(
                                            "w-full h-10 rounded-md text-white font-medium transition-all duration-300 disabled:opacity-70 {}",
                                            button_class(state()),
                                        )
                                    }
                                    disabled=move || state().is_submitting()
                                >
                                    {move || button_content(state())}
                                </button>

                                <p class="text-xs text-muted-foreground text-center">
                                    "* Required fields. Your details are handled securely and never shared with third parties."
                                </p>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
