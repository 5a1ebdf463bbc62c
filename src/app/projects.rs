use leptos::{html, prelude::*};

use crate::content::{project, Project, PROJECTS};
use crate::viewport::{reveal_style, PROJECTS_REVEAL_AMOUNT};

use super::reveal::use_reveal;

#[component]
fn Tags(tags: &'static [&'static str]) -> impl IntoView {
    tags.iter()
        .map(|tag| {
            view! {
                <span class="rounded-full border px-2.5 py-0.5 text-xs bg-background/50 backdrop-blur-sm">
                    {*tag}
                </span>
            }
        })
        .collect_view()
}

#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    view! {
        {project
            .github
            .map(|href| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 rounded-md border px-3 h-9 text-sm hover:bg-primary/10"
                    >
                        <i class="devicon-github-plain"></i>
                        "Code"
                    </a>
                }
            })}
        {project
            .demo
            .map(|href| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 rounded-md px-3 h-9 text-sm text-white bg-gradient-to-r from-primary to-purple-600"
                    >
                        "Live demo ↗"
                    </a>
                }
            })}
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, PROJECTS_REVEAL_AMOUNT);
    let (selected, set_selected) = signal(None::<&'static str>);

    view! {
        <section id="projects" node_ref=section_ref class="py-20 bg-background/80 backdrop-blur-sm relative">
            <div class="container max-w-6xl mx-auto px-4 relative z-10">
                <div
                    class="space-y-2 text-center mb-16"
                    style=move || reveal_style(revealed.get(), (0, 20), 0)
                >
                    <span class="inline-block rounded-full border px-3 py-1 text-sm bg-background/50 backdrop-blur-sm">
                        "Portfolio"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold tracking-tight">"Featured Projects"</h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "A selection of recent work. Click a card for details."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let delay = index as u32 * 100;
                            view! {
                                <div
                                    class="group cursor-pointer rounded-lg border overflow-hidden bg-background/50 backdrop-blur-sm border-muted/20 hover:border-primary/20 hover:-translate-y-1 transition-all duration-300 flex flex-col"
                                    style=move || reveal_style(revealed.get(), (0, 20), delay)
                                    on:click=move |_| set_selected(Some(project.id))
                                >
                                    <div class="relative aspect-video overflow-hidden">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="object-cover w-full h-full group-hover:scale-105 transition-transform duration-500"
                                        />
                                    </div>
                                    <div class="p-6 space-y-2 flex-1">
                                        <h3 class="text-xl font-bold">{project.title}</h3>
                                        <p class="text-muted-foreground">{project.description}</p>
                                        <div class="flex flex-wrap gap-2 pt-2">
                                            <Tags tags=project.tags />
                                        </div>
                                    </div>
                                    <div class="p-6 pt-0 flex gap-2" on:click=|ev| ev.stop_propagation()>
                                        <ProjectLinks project=project />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(project)
                    .map(|project| {
                        view! {
                            <div
                                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
                                on:click=move |_| set_selected(None)
                            >
                                <div
                                    role="dialog"
                                    aria-modal="true"
                                    class="relative w-full max-w-3xl rounded-lg border bg-background p-6 shadow-lg space-y-4"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <button
                                        class="absolute right-4 top-4 opacity-70 hover:opacity-100"
                                        aria-label="Close"
                                        on:click=move |_| set_selected(None)
                                    >
                                        "✕"
                                    </button>
                                    <h2 class="text-2xl font-bold">{project.title}</h2>
                                    <p class="text-muted-foreground">{project.description}</p>
                                    <div class="relative aspect-video overflow-hidden rounded-md">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="object-cover w-full h-full"
                                        />
                                    </div>
                                    <p>{project.details}</p>
                                    <div class="flex flex-wrap gap-2">
                                        <Tags tags=project.tags />
                                    </div>
                                    <div class="flex gap-2">
                                        <ProjectLinks project=project />
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
