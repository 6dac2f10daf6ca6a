use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::layout::{HoverTarget, LayoutConfig, PageState, Section};
use crate::portfolio::PORTFOLIO;
use crate::timer::EntranceTimer;

use super::browser::{anchor_top, scroll_to_section, scroll_to_top, TimeoutScheduler};
use super::header::Header;
use super::sections::{
    ContactSection, ExperienceSection, Footer, Hero, ProjectsSection, SkillsSection,
};

/// Read access to the page state plus the events children may raise.
/// Everything here is `Copy` so it can be handed to any number of closures.
#[derive(Clone, Copy)]
pub struct PageHandle {
    pub state: Signal<PageState>,
    pub hover: Callback<Option<HoverTarget>>,
    pub navigate: Callback<Section>,
    pub toggle_menu: Callback<()>,
    pub scroll_top: Callback<()>,
}

impl PageHandle {
    pub fn is_hovered(self, target: HoverTarget) -> bool {
        self.state.with(|s| s.is_hovered(target))
    }

    pub fn enter(self, target: HoverTarget) {
        self.hover.run(Some(target));
    }

    pub fn leave(self) {
        self.hover.run(None);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = LayoutConfig::DEFAULT;
    let state = RwSignal::new(PageState::default());
    let entrance = StoredValue::new(EntranceTimer::new(config.entrance_delay));

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, .. } = use_window_size();

    Effect::watch(
        || (),
        move |_, _, _| {
            entrance.update_value(|timer| {
                timer.arm(&TimeoutScheduler, move || state.update(PageState::mark_ready));
            });
        },
        true,
    );

    // runs once on mount as well, which seeds the active section
    Effect::new(move |_| {
        let y = scroll_y.get();
        state.maybe_update(|s| {
            let before = (s.active, s.scrolled);
            if s.on_scroll(y, &config, anchor_top) {
                log::debug!("active section: {}", s.active.label());
            }
            before != (s.active, s.scrolled)
        });
    });

    Effect::new(move |_| {
        let w = width.get();
        state.maybe_update(|s| {
            let before = (s.viewport, s.menu_open);
            s.on_resize(w, &config);
            before != (s.viewport, s.menu_open)
        });
    });

    let page = PageHandle {
        state: state.into(),
        hover: Callback::new(move |target: Option<HoverTarget>| {
            state.update(|s| match target {
                Some(t) => s.hover_enter(t),
                None => s.hover_leave(),
            });
        }),
        navigate: Callback::new(move |section: Section| {
            let Some(target) = state.try_update(|s| s.navigate(section)) else {
                return;
            };
            if let Err(err) = scroll_to_section(target) {
                log::debug!("{err}");
            }
        }),
        toggle_menu: Callback::new(move |_: ()| state.update(PageState::toggle_menu)),
        scroll_top: Callback::new(move |_: ()| scroll_to_top()),
    };

    view! {
        <Title text=PORTFOLIO.profile.role.as_str() />
        <div class="relative min-h-screen overflow-x-hidden bg-background text-slate-200 font-sans">
            <div class="blob blob-1" />
            <div class="blob blob-2" />
            <div class="blob blob-3" />
            <Header page />
            <div class="relative z-10 w-full">
                <Hero page />
                <ExperienceSection page />
                <SkillsSection page />
                <ProjectsSection page />
                <ContactSection page />
                <Footer />
            </div>
        </div>
    }
}
