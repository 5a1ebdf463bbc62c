use chrono::Local;
use leptos::prelude::*;

use crate::content::{EXPERIENCES, PROFILE};
use crate::employment::EmploymentStatus;
use crate::resume::{ButtonSize, ResumeVariant};

use super::employment_status::EmploymentStatusIndicator;
use super::header::scroll_to_section;
use super::resume_button::ResumeDownloadButton;

#[component]
pub fn Hero() -> impl IntoView {
    let status = EXPERIENCES
        .first()
        .map(|exp| EmploymentStatus::from_end_date(exp.end_date(), Local::now().date_naive()))
        .unwrap_or(EmploymentStatus::Seeking);

    view! {
        <section class="relative h-screen flex flex-col justify-center items-center px-4 overflow-hidden">
            <div class="absolute inset-0 -z-10">
                <div class="absolute inset-0 bg-grid-pattern opacity-[0.03] animate-grid-drift"></div>
                <div class="absolute inset-0 bg-gradient-to-b from-background/10 via-background/50 to-background"></div>
            </div>

            <div class="container max-w-6xl mx-auto grid lg:grid-cols-2 gap-8 items-center relative z-10">
                <div class="space-y-6 animate-in fade-in slide-in-from-left">
                    <div class="space-y-2">
                        <h2 class="text-xl font-medium text-primary">{PROFILE.greeting}</h2>
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold tracking-tight bg-gradient-to-r from-primary via-purple-500 to-cyan-500 bg-clip-text text-transparent">
                            {PROFILE.name}
                        </h1>
                        <h3 class="text-2xl sm:text-3xl font-medium text-muted-foreground">
                            {PROFILE.role}
                        </h3>
                    </div>

                    <EmploymentStatusIndicator status=status />

                    <p class="text-lg text-muted-foreground max-w-md">{PROFILE.tagline}</p>

                    <div class="flex flex-wrap gap-4 items-start">
                        <button
                            class="h-12 px-8 rounded-md text-white bg-gradient-to-r from-primary to-purple-600 hover:from-primary/90 hover:to-purple-600/90 hover:scale-105 transition-transform"
                            on:click=move |_| scroll_to_section(Some("contact"))
                        >
                            "Contact me"
                        </button>
                        <ResumeDownloadButton size=ButtonSize::Lg variant=ResumeVariant::Default />
                    </div>
                </div>

                <div class="relative aspect-square max-w-md mx-auto lg:ml-auto animate-in fade-in zoom-in">
                    <div class="absolute inset-0 rounded-full bg-gradient-to-tr from-primary/20 to-purple-500/20 blur-3xl animate-pulse"></div>
                    <div class="relative h-full w-full rounded-full border border-muted/20 overflow-hidden backdrop-blur-sm hover:scale-105 transition-transform">
                        <img src=PROFILE.portrait alt=PROFILE.name class="object-cover h-full w-full" />
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 z-10 animate-bounce">
                <button class="h-10 w-10 rounded-md" on:click=move |_| scroll_to_section(Some("skills"))>
                    "↓"
                    <span class="sr-only">"Scroll down"</span>
                </button>
            </div>
        </section>
    }
}
