use chrono::Datelike;
use leptos::prelude::*;

use crate::layout::{HoverTarget, Section};
use crate::portfolio::{Portfolio, PORTFOLIO};
use crate::style::{
    card_class, contact_link_class, hero_presentation, outline_button_class,
    primary_button_class, project_arrow_class, HeroElement,
};

use super::homepage::PageHandle;
use super::reveal::Reveal;

fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <Reveal>
            <div class="flex items-center gap-5 mb-12">
                <h2 class="font-display text-4xl font-bold text-slate-100">{title}</h2>
                <div class="flex-1 h-px bg-gradient-to-r from-violet-400/40 to-transparent" />
            </div>
        </Reveal>
    }
}

#[component]
fn Tags(tags: &'static [String]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|t| {
                    view! {
                        <span class="px-3 py-1 rounded-full text-xs text-violet-300 bg-violet-400/10 border border-violet-400/20">
                            {t.as_str()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Hero(page: PageHandle) -> impl IntoView {
    let profile = &portfolio().profile;
    let ready = Memo::new(move |_| page.state.with(|s| s.ready));
    let entrance = move |el: HeroElement| move || hero_presentation(el, ready.get()).css();

    view! {
        <section
            id=Section::About.anchor_id()
            class="min-h-screen flex items-center justify-center px-6 pt-28 pb-16"
        >
            <div class="flex flex-col lg:flex-row items-center gap-14 max-w-6xl w-full">
                <div class="relative shrink-0" style=entrance(HeroElement::Initials)>
                    <div class="w-40 h-40 rounded-full flex items-center justify-center font-display text-5xl font-bold text-white bg-gradient-to-br from-violet-600 to-pink-500">
                        {profile.initials.as_str()}
                    </div>
                    <div class="orbit orbit-1" />
                    <div class="orbit orbit-2" />
                </div>
                <div class="flex-1">
                    <p class="text-sm tracking-widest uppercase text-violet-400 mb-3" style=entrance(HeroElement::Greeting)>
                        "Hello, I'm"
                    </p>
                    <h1 class="font-display text-6xl font-bold text-slate-50 mb-3" style=entrance(HeroElement::Name)>
                        {profile.name.as_str()}
                    </h1>
                    <h2 class="text-2xl text-violet-300 mb-4" style=entrance(HeroElement::Role)>
                        {profile.role.as_str()}
                    </h2>
                    <p class="text-sm text-slate-500 mb-6" style=entrance(HeroElement::Tagline)>
                        {profile.tagline.as_str()}
                    </p>
                    <p class="max-w-2xl text-base leading-relaxed text-slate-400 mb-8" style=entrance(HeroElement::Bio)>
                        {profile.bio.as_str()}
                    </p>
                    <div class="flex flex-wrap gap-4 mb-10" style=entrance(HeroElement::Stats)>
                        {portfolio()
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="px-5 py-3 rounded-xl bg-white/[0.03] border border-white/[0.07] text-center">
                                        <div class="font-display text-2xl font-bold text-violet-300">
                                            {stat.value.as_str()}
                                        </div>
                                        <div class="text-xs uppercase tracking-wider text-slate-500">
                                            {stat.label.as_str()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-4" style=entrance(HeroElement::Actions)>
                        <button
                            class=move || primary_button_class(page.is_hovered(HoverTarget::ViewProjects))
                            on:click=move |_| page.navigate.run(Section::Projects)
                            on:mouseenter=move |_| page.enter(HoverTarget::ViewProjects)
                            on:mouseleave=move |_| page.leave()
                        >
                            "View Projects"
                        </button>
                        <a
                            href=profile.mailto()
                            class=move || outline_button_class(page.is_hovered(HoverTarget::GetInTouch))
                            on:mouseenter=move |_| page.enter(HoverTarget::GetInTouch)
                            on:mouseleave=move |_| page.leave()
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(page: PageHandle) -> impl IntoView {
    view! {
        <section id=Section::Experience.anchor_id() class="px-6 py-28">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="Experience" />
                <div class="flex flex-col gap-5">
                    {portfolio()
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            let target = HoverTarget::Experience(i);
                            let delay = u32::try_from(i).unwrap_or(0) * 150;
                            view! {
                                <Reveal delay_ms=delay>
                                    <div
                                        class=move || card_class(page.is_hovered(target))
                                        on:mouseenter=move |_| page.enter(target)
                                        on:mouseleave=move |_| page.leave()
                                    >
                                        <div class="flex flex-wrap justify-between items-start gap-3">
                                            <div>
                                                <h3 class="font-display text-xl font-bold text-slate-100">
                                                    {exp.role.as_str()}
                                                </h3>
                                                <p class="text-sm mt-1">
                                                    <span class="font-semibold text-violet-400">
                                                        {exp.company.as_str()}
                                                    </span>
                                                    <span class="mx-2 text-slate-700">"·"</span>
                                                    <span class="text-slate-500">{exp.location.as_str()}</span>
                                                </p>
                                            </div>
                                            <span class="px-4 py-1 rounded-full text-xs text-violet-300 bg-violet-400/10 border border-violet-400/20">
                                                {exp.period.as_str()}
                                            </span>
                                        </div>
                                        <ul class="flex flex-col gap-2.5 my-5">
                                            {exp
                                                .points
                                                .iter()
                                                .map(|pt| {
                                                    view! {
                                                        <li class="flex gap-3 items-start">
                                                            <span class="mt-2 text-[6px] text-violet-400 shrink-0">"◆"</span>
                                                            <span class="text-sm leading-relaxed text-slate-400">{pt.as_str()}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                        <Tags tags=&exp.tags />
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
pub fn SkillsSection(page: PageHandle) -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor_id() class="px-6 py-28 bg-black/20">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="Skills" />
                <div class="grid gap-5 grid-cols-[repeat(auto-fit,minmax(220px,1fr))]">
                    {portfolio()
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, cat)| {
                            let target = HoverTarget::SkillCategory(i);
                            let delay = u32::try_from(i).unwrap_or(0) * 100;
                            view! {
                                <Reveal delay_ms=delay style="height: 100%">
                                    <div
                                        class=move || card_class(page.is_hovered(target))
                                        on:mouseenter=move |_| page.enter(target)
                                        on:mouseleave=move |_| page.leave()
                                    >
                                        <p class="mb-4 text-xs font-semibold uppercase tracking-widest text-violet-400">
                                            {cat.category.as_str()}
                                        </p>
                                        <div class="flex flex-wrap gap-2">
                                            {cat
                                                .items
                                                .iter()
                                                .map(|sk| {
                                                    view! {
                                                        <span class="px-3.5 py-1.5 rounded-lg text-sm text-slate-300 bg-white/5 border border-white/10">
                                                            {sk.as_str()}
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
pub fn ProjectsSection(page: PageHandle) -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="px-6 py-28">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="Projects" />
                {portfolio()
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let target = HoverTarget::Project(i);
                        view! {
                            <Reveal delay_ms=100>
                                <div
                                    class=move || card_class(page.is_hovered(target))
                                    on:mouseenter=move |_| page.enter(target)
                                    on:mouseleave=move |_| page.leave()
                                >
                                    <div class="flex flex-wrap justify-between items-start gap-3 mb-3.5">
                                        <div>
                                            <h3 class="font-display text-xl font-bold text-slate-100">
                                                {project.title.as_str()}
                                            </h3>
                                            <p class="mt-1 text-xs tracking-wide text-violet-400">
                                                {project.subtitle.as_str()}
                                            </p>
                                        </div>
                                        <span class=move || project_arrow_class(page.is_hovered(target))>
                                            "↗"
                                        </span>
                                    </div>
                                    <p class="mb-5 text-sm leading-relaxed text-slate-400">
                                        {project.description.as_str()}
                                    </p>
                                    <Tags tags=&project.tags />
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
                <Reveal delay_ms=200>
                    <div class="flex flex-wrap gap-4 mt-8">
                        {portfolio()
                            .awards
                            .iter()
                            .map(|award| {
                                view! {
                                    <div class="flex items-center gap-2.5 px-6 py-3 rounded-full bg-amber-400/[0.07] border border-amber-400/20">
                                        <span class="text-base">"⭐"</span>
                                        <div>
                                            <p class="font-display text-sm font-bold text-amber-400">
                                                {award.title.as_str()}
                                            </p>
                                            <p class="text-[11px] tracking-wide text-amber-800">
                                                {award.period.as_str()}
                                            </p>
                                        </div>
                                    </div>
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
pub fn ContactSection(page: PageHandle) -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor_id() class="px-6 py-28 text-center bg-black/20">
            <div class="max-w-5xl mx-auto">
                <Reveal>
                    <div class="flex items-center justify-center gap-5 mb-12">
                        <div class="flex-1 max-w-[120px] h-px bg-violet-400/40" />
                        <h2 class="font-display text-4xl font-bold text-slate-100">"Let's Connect"</h2>
                        <div class="flex-1 max-w-[120px] h-px bg-violet-400/40" />
                    </div>
                </Reveal>
                <Reveal delay_ms=100>
                    <p class="max-w-md mx-auto mb-10 text-[15px] leading-loose text-slate-500">
                        "Open to full-time opportunities and exciting projects."
                        <br />
                        "Let's build something great together."
                    </p>
                </Reveal>
                <Reveal delay_ms=200>
                    <div class="flex flex-wrap justify-center gap-3.5 mb-10">
                        {portfolio()
                            .contact_links
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                let target = HoverTarget::ContactLink(i);
                                view! {
                                    <a
                                        href=link.href.as_str()
                                        class=move || contact_link_class(page.is_hovered(target))
                                        on:mouseenter=move |_| page.enter(target)
                                        on:mouseleave=move |_| page.leave()
                                    >
                                        {link.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal delay_ms=300>
                    <div class="flex flex-wrap justify-center gap-9">
                        {portfolio()
                            .contact_facts
                            .iter()
                            .map(|fact| {
                                view! {
                                    <div class="flex items-center gap-2 text-[13px] text-slate-600">
                                        <span>{fact.icon.as_str()}</span>
                                        <span>{fact.value.as_str()}</span>
                                    </div>
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
pub fn Footer() -> impl IntoView {
    let profile = &portfolio().profile;
    let year = chrono::Utc::now().year();
    view! {
        <footer class="px-6 py-8 border-t border-white/5">
            <div class="flex flex-wrap items-center justify-between gap-3 max-w-5xl mx-auto">
                <span class="font-display text-xl font-bold bg-gradient-to-br from-violet-400 to-pink-400 bg-clip-text text-transparent">
                    {format!("{}.", profile.initials)}
                </span>
                <span class="text-xs text-slate-700">
                    {format!("Designed & built by {} · © {year}", profile.name)}
                </span>
                <span class="text-xs text-slate-700">{profile.location.as_str()}</span>
            </div>
        </footer>
    }
}
