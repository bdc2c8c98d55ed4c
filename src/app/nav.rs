use leptos::prelude::*;

use super::reveal::{Reveal, RevealOn};
use crate::content::Section;
use crate::motion::Preset;

/// Blurred blobs drifting behind the page.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute top-20 left-10 w-72 h-72 bg-primary/30 rounded-full blur-3xl animate-float" />
            <div
                class="absolute bottom-20 right-10 w-96 h-96 bg-secondary/20 rounded-full blur-3xl animate-float"
                style="animation-delay: 2s"
            />
            <div
                class="absolute top-1/2 left-1/2 w-80 h-80 bg-accent/20 rounded-full blur-3xl animate-float"
                style="animation-delay: 4s"
            />
        </div>
    }
}

#[component]
pub fn NavBar(initials: String) -> impl IntoView {
    view! {
        <Reveal preset=Preset::SlideDown on=RevealOn::Mount class="fixed top-0 w-full z-50 glass">
            <nav class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold gradient-text transition-transform hover:scale-105">
                    {initials}
                </h1>
                <div class="flex gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.anchor()
                                    class="text-gray-300 hover:text-white transition-all hover:scale-110 active:scale-95"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </Reveal>
    }
}
