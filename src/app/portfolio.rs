use leptos::prelude::*;

use super::hooks::use_scroll_offset;
use super::nav::{Backdrop, NavBar};
use super::sections::{About, ContactSection, Footer, Hero, Projects, Skills};
use crate::content::SiteContent;

/// The whole page for a given content document.
#[component]
pub fn Portfolio(content: SiteContent) -> impl IntoView {
    // recorded for the page's lifetime; nothing renders from it yet
    let _scroll_y = use_scroll_offset();

    let year = content.copyright_year();
    let SiteContent {
        profile,
        about,
        skills,
        projects,
        contact,
        ..
    } = content;
    let initials = profile.initials.clone();
    let name = profile.name.clone();

    view! {
        <main class="relative overflow-hidden">
            <Backdrop />
            <NavBar initials />
            <Hero profile />
            <About paragraphs=about />
            <Skills categories=skills />
            <Projects projects />
            <ContactSection contact />
            <Footer name year />
        </main>
    }
}
