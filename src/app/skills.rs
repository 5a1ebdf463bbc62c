use leptos::{html, prelude::*};

use crate::content::{skills_in, SkillCategory};
use crate::viewport::{reveal_style, REVEAL_AMOUNT};

use super::reveal::use_reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_AMOUNT);
    let (active, set_active) = signal(SkillCategory::Frontend);

    view! {
        <section id="skills" node_ref=section_ref class="py-20 bg-background/80 backdrop-blur-sm relative">
            <div class="container max-w-6xl mx-auto px-4 relative z-10">
                <div
                    class="space-y-2 text-center mb-16"
                    style=move || reveal_style(revealed.get(), (0, 20), 0)
                >
                    <span class="inline-block rounded-full border px-3 py-1 text-sm bg-background/50 backdrop-blur-sm">
                        "Expertise"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold tracking-tight">"Technical Skills"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "An overview of my technical abilities and professional strengths"
                    </p>
                </div>

                <div class="flex justify-center mb-8">
                    <div role="tablist" class="grid grid-cols-2 md:grid-cols-4 w-full max-w-md rounded-md p-1 bg-background/50 backdrop-blur-sm">
                        {SkillCategory::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <button
                                        role="tab"
                                        class="rounded-sm px-3 py-1.5 text-sm font-medium transition-all"
                                        class=(["bg-background", "shadow-sm"], move || active.get() == category)
                                        aria-selected=move || (active.get() == category).to_string()
                                        on:click=move |_| set_active(category)
                                    >
                                        {category.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {move || {
                    let category = active.get();
                    view! {
                        <div role="tabpanel" class="grid md:grid-cols-2 gap-6">
                            {skills_in(category)
                                .enumerate()
                                .map(|(index, skill)| {
                                    let delay = index as u32 * 100;
                                    view! {
                                        <div
                                            class="rounded-lg border bg-background/50 backdrop-blur-sm border-muted/20 hover:border-primary/20 transition-all duration-300 p-6"
                                            style=move || reveal_style(revealed.get(), (0, 20), delay)
                                        >
                                            <div class="flex justify-between items-center mb-2">
                                                <h3 class="font-medium">{skill.name}</h3>
                                                <span class="text-sm text-muted-foreground">
                                                    {format!("{}%", skill.level)}
                                                </span>
                                            </div>
                                            <div class="h-2 w-full bg-muted/30 rounded-full overflow-hidden">
                                                <div
                                                    class="h-full bg-gradient-to-r from-primary to-purple-500"
                                                    style=move || {
                                                        let width = if revealed.get() { skill.level } else { 0 };
                                                        format!(
                                                            "width: {width}%; transition: width 1s ease-out {}ms;",
                                                            delay + 200,
                                                        )
                                                    }
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }}
            </div>
        </section>
    }
}
