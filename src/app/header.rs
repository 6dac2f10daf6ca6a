use leptos::{either::*, prelude::*};

use crate::layout::{HoverTarget, Section, ViewportClass};
use crate::portfolio::PORTFOLIO;
use crate::style::{
    hamburger_style, header_class, mobile_link_class, nav_link_class, nav_underline_class,
    outline_button_class,
};

use super::homepage::PageHandle;

#[component]
pub fn Header(page: PageHandle) -> impl IntoView {
    let scrolled = Memo::new(move |_| page.state.with(|s| s.scrolled));
    let narrow = Memo::new(move |_| page.state.with(|s| s.viewport == ViewportClass::Narrow));
    let menu_open = Memo::new(move |_| page.state.with(|s| s.menu_open));

    view! {
        <nav class=move || header_class(scrolled.get())>
            <div class="flex items-center justify-between max-w-6xl mx-auto px-6 h-[72px]">
                <span
                    class="font-display text-2xl font-bold cursor-pointer text-violet-300"
                    on:click=move |_| page.scroll_top.run(())
                >
                    {PORTFOLIO.profile.initials.as_str()}
                    <span class="text-pink-400">"."</span>
                </span>
                {move || {
                    if narrow.get() {
                        Either::Left(
                            view! {
                                <button
                                    class="text-2xl text-violet-300 px-2"
                                    aria-label="Toggle navigation"
                                    style=move || hamburger_style(menu_open.get())
                                    on:click=move |_| page.toggle_menu.run(())
                                >
                                    "☰"
                                </button>
                            },
                        )
                    } else {
                        Either::Right(view! { <DesktopLinks page /> })
                    }
                }}
            </div>
            // the sidebar only exists in the narrow layout
            <Show when=move || menu_open.get() && narrow.get()>
                <MobileMenu page />
            </Show>
        </nav>
    }
}

#[component]
fn DesktopLinks(page: PageHandle) -> impl IntoView {
    let links = Section::ALL
        .into_iter()
        .map(|section| {
            let target = HoverTarget::Nav(section);
            let active = move || page.state.with(|s| s.active == section);
            let hovered = move || page.is_hovered(target);
            view! {
                <button
                    class=move || nav_link_class(active(), hovered())
                    on:click=move |_| page.navigate.run(section)
                    on:mouseenter=move |_| page.enter(target)
                    on:mouseleave=move |_| page.leave()
                >
                    <span class="relative z-10">{section.label()}</span>
                    <span class=move || nav_underline_class(active(), hovered()) />
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="flex items-center gap-7">{links}</div>
        <a
            href=PORTFOLIO.profile.mailto()
            class=move || outline_button_class(page.is_hovered(HoverTarget::HireMe))
            on:mouseenter=move |_| page.enter(HoverTarget::HireMe)
            on:mouseleave=move |_| page.leave()
        >
            "Hire Me ✦"
        </a>
    }
}

#[component]
fn MobileMenu(page: PageHandle) -> impl IntoView {
    view! {
        <div class="flex flex-col py-2 border-t border-white/10 bg-background/95 animate-slide-down">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class=move || mobile_link_class(page.state.with(|s| s.active == section))
                            on:click=move |_| page.navigate.run(section)
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
            <a href=PORTFOLIO.profile.mailto() class="px-6 py-3 text-violet-300">
                "📧 Email Me"
            </a>
        </div>
    }
}
