use chrono::Local;
use leptos::{html, prelude::*};

use crate::content::EXPERIENCES;
use crate::employment::{EmploymentStatus, IndicatorVariant};
use crate::viewport::{reveal_style, REVEAL_AMOUNT};

use super::employment_status::EmploymentStatusIndicator;
use super::reveal::use_reveal;

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_AMOUNT);
    let today = Local::now().date_naive();

    view! {
        <section id="experience" node_ref=section_ref class="py-20 bg-muted/10 backdrop-blur-sm relative">
            <div class="container max-w-6xl mx-auto px-4 relative z-10">
                <div
                    class="space-y-2 text-center mb-16"
                    style=move || reveal_style(revealed.get(), (0, 20), 0)
                >
                    <span class="inline-block rounded-full border px-3 py-1 text-sm bg-background/50 backdrop-blur-sm">
                        "Career"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold tracking-tight">"Work Experience"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "My professional journey and milestones"
                    </p>
                </div>

                <div class="relative">
                    <div
                        class="absolute left-4 md:left-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-primary via-purple-500 to-cyan-500 -ml-px hidden md:block origin-top"
                        style=move || {
                            let scale = if revealed.get() { 1 } else { 0 };
                            format!("transform: scaleY({scale}); transition: transform 1s ease-out 500ms;")
                        }
                    ></div>

                    <div class="space-y-12 relative">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, exp)| {
                                let status = EmploymentStatus::from_end_date(exp.end_date(), today);
                                let side = if index % 2 == 0 { "md:ml-auto" } else { "" };
                                let delay = index as u32 * 200;
                                view! {
                                    <div
                                        class="relative"
                                        style=move || reveal_style(revealed.get(), (0, 50), delay)
                                    >
                                        <div class=format!(
                                            "md:w-[calc(50%-20px)] {side} relative rounded-lg border bg-background/50 backdrop-blur-sm border-muted/20 hover:border-primary/20 transition-all duration-300",
                                        )>
                                            <div class="absolute top-8 md:-left-[21px] -left-[11px] w-5 h-5 rounded-full border-4 border-background bg-gradient-to-r from-primary to-purple-500 hidden md:block"></div>
                                            <div class="p-6 pb-2">
                                                <div class="flex justify-between items-start flex-wrap gap-2">
                                                    <div>
                                                        <h3 class="text-xl font-bold">{exp.title}</h3>
                                                        <div class="flex items-center gap-2 text-muted-foreground mt-1">
                                                            <span>"💼 " {exp.company}</span>
                                                        </div>
                                                    </div>
                                                    <EmploymentStatusIndicator
                                                        status=status
                                                        variant=IndicatorVariant::Compact
                                                    />
                                                </div>
                                                <div class="flex flex-wrap gap-4 mt-2 text-sm text-muted-foreground">
                                                    <span>"📅 " {exp.period}</span>
                                                    <span>"📍 " {exp.location}</span>
                                                </div>
                                            </div>
                                            <div class="p-6 pt-2">
                                                <ul class="space-y-2 list-disc pl-5">
                                                    {exp
                                                        .highlights
                                                        .iter()
                                                        .map(|item| view! { <li>{*item}</li> })
                                                        .collect_view()}
                                                </ul>
                                                {exp
                                                    .is_current()
                                                    .then(|| {
                                                        view! {
                                                            <div class="mt-4">
                                                                <EmploymentStatusIndicator
                                                                    status=status
                                                                    variant=IndicatorVariant::Detailed
                                                                />
                                                            </div>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
