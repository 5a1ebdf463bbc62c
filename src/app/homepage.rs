use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::PROFILE;

use super::contact::Contact;
use super::experience::Experience;
use super::hero::Hero;
use super::projects::Projects;
use super::scroll_to_top::ScrollToTop;
use super::skills::Skills;

/// The whole site: every section in page order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.role />
        <div class="bg-background relative">
            <Hero />
            <Skills />
            <Experience />
            <Projects />
            <Contact />
            <ScrollToTop />
        </div>
    }
}
