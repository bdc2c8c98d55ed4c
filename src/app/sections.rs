use std::time::Duration;

use leptos::prelude::*;

use super::reveal::{Reveal, RevealOn, StaggerGroup, StaggerItem};
use crate::content::{Contact, Profile, Project, Section, SkillCategory};
use crate::motion::{Preset, Stagger};

const CTA_PRIMARY: &str = "px-8 py-4 bg-gradient-to-r from-primary to-secondary rounded-full text-white font-semibold hover:shadow-2xl transition-all hover:scale-105 active:scale-95";
const CTA_GLASS: &str = "px-8 py-4 glass rounded-full text-white font-semibold hover:bg-white/10 transition-all hover:scale-105 active:scale-95";

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        greeting,
        role,
        next_role,
        tagline,
        ..
    } = profile;
    let slow_fade = Preset::Fade {
        duration: Duration::from_secs(1),
    };
    let quick_fade = Preset::Fade {
        duration: Duration::from_millis(600),
    };

    view! {
        <section class="relative min-h-screen flex items-center justify-center px-6 pt-20">
            <StaggerGroup stagger=Stagger::HERO class="max-w-5xl mx-auto text-center z-10">
                <StaggerItem index=0 preset=Preset::FadeUp class="mb-6">
                    <span class="text-primary text-lg font-semibold">{greeting}</span>
                </StaggerItem>
                <StaggerItem index=1 preset=Preset::FadeUp>
                    <h1 class="text-7xl md:text-8xl font-bold mb-6 gradient-text">{name}</h1>
                </StaggerItem>
                <StaggerItem index=2 preset=Preset::FadeUp class="text-3xl md:text-4xl text-gray-300 mb-8">
                    <span>{role}</span>
                    <Reveal
                        preset=slow_fade
                        delay=Duration::from_secs(1)
                        on=RevealOn::Mount
                        class="inline"
                    >
                        <span class="gradient-text">" → " {next_role}</span>
                    </Reveal>
                </StaggerItem>
                <StaggerItem index=3 preset=Preset::FadeUp>
                    <p class="text-xl text-gray-400 mb-12 max-w-3xl mx-auto leading-relaxed">
                        {tagline}
                    </p>
                </StaggerItem>
                <StaggerItem index=4 preset=Preset::FadeUp class="flex gap-6 justify-center">
                    <a href=Section::Projects.anchor() class=format!("{CTA_PRIMARY} animate-glow")>
                        "View My Work"
                    </a>
                    <a href=Section::Contact.anchor() class=CTA_GLASS>
                        "Get in Touch"
                    </a>
                </StaggerItem>
            </StaggerGroup>
            <Reveal
                preset=quick_fade
                delay=Duration::from_secs(2)
                on=RevealOn::Mount
                class="absolute bottom-10 left-1/2 -translate-x-1/2"
            >
                <div class="w-6 h-10 border-2 border-primary rounded-full flex justify-center pt-2 animate-bounce">
                    <div class="w-1 h-3 bg-primary rounded-full" />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn About(paragraphs: Vec<String>) -> impl IntoView {
    let last = paragraphs.len().saturating_sub(1);
    view! {
        <section id=Section::About.id() class="relative py-32 px-6 z-10">
            <div class="max-w-6xl mx-auto">
                <Reveal preset=Preset::Rise>
                    <h2 class="text-5xl font-bold mb-12 text-center">
                        <span class="gradient-text">"About Me"</span>
                    </h2>
                    <div class="gradient-border p-8 md:p-12">
                        {paragraphs
                            .into_iter()
                            .enumerate()
                            .map(|(i, text)| {
                                let class = if i == last {
                                    "text-xl text-gray-300 leading-relaxed"
                                } else {
                                    "text-xl text-gray-300 leading-relaxed mb-6"
                                };
                                view! { <p class=class>{text}</p> }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="relative py-32 px-6 z-10">
            <div class="max-w-6xl mx-auto">
                <Reveal preset=Preset::Rise class="mb-16">
                    <h2 class="text-5xl font-bold text-center gradient-text">
                        "Skills & Technologies"
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-8">
                    {categories
                        .into_iter()
                        .enumerate()
                        .map(|(idx, category)| {
                            view! {
                                <Reveal preset=Preset::Rise delay=Stagger::SKILLS.delay_for(idx)>
                                    <div class="gradient-border p-8 h-full">
                                        <h3 class="text-2xl font-bold mb-6 capitalize gradient-text">
                                            {category.name}
                                        </h3>
                                        <div class="flex flex-wrap gap-3">
                                            {category
                                                .items
                                                .into_iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="px-4 py-2 glass rounded-full text-sm hover:bg-white/10 transition-all hover:scale-110 cursor-default">
                                                            {skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="relative py-32 px-6 z-10">
            <div class="max-w-6xl mx-auto">
                <Reveal preset=Preset::Rise class="mb-16">
                    <h2 class="text-5xl font-bold text-center gradient-text">"Featured Projects"</h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(idx, project)| {
                            view! {
                                <Reveal preset=Preset::Rise delay=Stagger::PROJECTS.delay_for(idx)>
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tags,
        gradient,
    } = project;
    let banner = format!(
        "w-full h-48 bg-gradient-to-br {} rounded-lg mb-6 group-hover:shadow-2xl transition-shadow",
        gradient.classes()
    );

    view! {
        <article class="gradient-border p-8 h-full hover:scale-105 transition-transform cursor-pointer group">
            <div class=banner />
            <h3 class="text-2xl font-bold mb-3 gradient-text">{title}</h3>
            <p class="text-gray-400 mb-4">{description}</p>
            <div class="flex flex-wrap gap-2">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="px-3 py-1 text-xs glass rounded-full">{tag}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let mailto = contact.mailto();
    let Contact {
        heading,
        blurb,
        links,
        ..
    } = contact;

    view! {
        <section id=Section::Contact.id() class="relative py-32 px-6 z-10">
            <div class="max-w-4xl mx-auto text-center">
                <Reveal preset=Preset::Rise>
                    <h2 class="text-5xl font-bold mb-8 gradient-text">{heading}</h2>
                    <p class="text-xl text-gray-400 mb-12">{blurb}</p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center mb-12">
                        <a href=mailto class=CTA_PRIMARY>
                            "Email Me"
                        </a>
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=CTA_GLASS
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(name: String, year: String) -> impl IntoView {
    let notice = format!("© {year} {name}. All rights reserved.");
    view! {
        <footer class="relative py-8 px-6 text-center text-gray-500 z-10">
            <p>{notice}</p>
        </footer>
    }
}
