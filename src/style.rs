//! Pure mappings from UI state to presentation.
//!
//! Animated properties come out as inline CSS because their delays vary per
//! element. Static hover/active swaps come out as Tailwind class lists.

const EASE_OUT: &str = "cubic-bezier(.22,1,.36,1)";
const REVEAL_OFFSET_PX: u32 = 36;

#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub opacity: f64,
    pub transform: Option<String>,
    pub transition: String,
}

impl Presentation {
    pub fn css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        if let Some(transform) = &self.transform {
            css.push_str(&format!(" transform: {transform};"));
        }
        css.push_str(&format!(" transition: {};", self.transition));
        css
    }

    /// Places `base` beneath the computed declarations so the animation
    /// properties always win.
    pub fn css_over(&self, base: &str) -> String {
        let base = base.trim().trim_end_matches(';');
        if base.is_empty() {
            self.css()
        } else {
            format!("{base}; {}", self.css())
        }
    }
}

pub fn reveal_presentation(revealed: bool, delay_ms: u32) -> Presentation {
    let (opacity, offset) = if revealed {
        (1.0, 0)
    } else {
        (0.0, REVEAL_OFFSET_PX)
    };
    Presentation {
        opacity,
        transform: Some(format!("translateY({offset}px)")),
        transition: format!(
            "opacity 0.8s {EASE_OUT} {delay_ms}ms, transform 0.8s {EASE_OUT} {delay_ms}ms"
        ),
    }
}

/// Hero elements that stagger in once the page is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroElement {
    Initials,
    Greeting,
    Name,
    Role,
    Tagline,
    Bio,
    Stats,
    Actions,
}

pub fn hero_presentation(element: HeroElement, ready: bool) -> Presentation {
    let opacity = if ready { 1.0 } else { 0.0 };
    let slide = |px: u32, secs: &str, delay: &str| Presentation {
        opacity,
        transform: Some(if ready {
            "translateY(0)".to_string()
        } else {
            format!("translateY({px}px)")
        }),
        transition: format!("all {secs} {EASE_OUT} {delay}"),
    };
    match element {
        HeroElement::Initials => Presentation {
            opacity,
            transform: Some(
                if ready {
                    "scale(1) translateY(0)"
                } else {
                    "scale(0.8) translateY(20px)"
                }
                .to_string(),
            ),
            transition: format!("all 1s {EASE_OUT} 0.1s"),
        },
        HeroElement::Greeting => slide(20, "0.7s", "0.25s"),
        HeroElement::Name => slide(28, "0.8s", "0.4s"),
        HeroElement::Role => slide(24, "0.8s", "0.55s"),
        HeroElement::Tagline => Presentation {
            opacity,
            transform: None,
            transition: "opacity 0.8s ease 0.65s".to_string(),
        },
        HeroElement::Bio => slide(20, "0.8s", "0.75s"),
        HeroElement::Stats => slide(20, "0.8s", "0.9s"),
        HeroElement::Actions => slide(20, "0.8s", "1.05s"),
    }
}

pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed inset-x-0 top-0 z-50 backdrop-blur-md bg-background/80 border-b border-white/10 shadow-[0_4px_40px_rgba(0,0,0,0.4)] transition-all duration-300"
    } else {
        "fixed inset-x-0 top-0 z-50 backdrop-blur-md bg-background/80 border-b border-transparent transition-all duration-300"
    }
}

pub fn nav_link_class(active: bool, hovered: bool) -> &'static str {
    match (active, hovered) {
        (true, _) => "relative py-2 text-sm font-medium text-violet-300 transition-colors duration-300",
        (false, true) => "relative py-2 text-sm font-medium text-violet-100 transition-colors duration-300",
        (false, false) => "relative py-2 text-sm font-medium text-slate-500 transition-colors duration-300",
    }
}

pub fn nav_underline_class(active: bool, hovered: bool) -> &'static str {
    match (active, hovered) {
        (true, _) => "absolute bottom-0 inset-x-0 h-0.5 rounded bg-gradient-to-r from-violet-400 to-pink-400 scale-x-100 transition-transform duration-300",
        (false, true) => "absolute bottom-0 inset-x-0 h-0.5 rounded bg-violet-400/45 scale-x-100 transition-transform duration-300",
        (false, false) => "absolute bottom-0 inset-x-0 h-0.5 rounded bg-violet-400/45 scale-x-0 transition-transform duration-300",
    }
}

pub fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "w-full text-left px-6 py-3 border-l-4 border-pink-400 bg-violet-400/10 text-violet-200"
    } else {
        "w-full text-left px-6 py-3 border-l-4 border-transparent text-slate-400"
    }
}

pub fn hamburger_style(menu_open: bool) -> &'static str {
    if menu_open {
        "transform: rotate(90deg); transition: transform 0.3s ease;"
    } else {
        "transform: rotate(0deg); transition: transform 0.3s ease;"
    }
}

/// Experience, skill and project cards share one hover treatment.
pub fn card_class(hovered: bool) -> &'static str {
    if hovered {
        "h-full p-7 rounded-2xl border bg-violet-400/[0.07] border-violet-400/40 -translate-y-1 shadow-[0_12px_40px_rgba(0,0,0,0.3)] transition-all duration-300"
    } else {
        "h-full p-7 rounded-2xl border bg-white/[0.03] border-white/[0.07] translate-y-0 transition-all duration-300"
    }
}

pub fn project_arrow_class(hovered: bool) -> &'static str {
    if hovered {
        "text-2xl text-violet-400 translate-x-1 -translate-y-1 transition-all duration-300"
    } else {
        "text-2xl text-slate-700 transition-all duration-300"
    }
}

pub fn primary_button_class(hovered: bool) -> &'static str {
    if hovered {
        "px-7 py-3 rounded-full font-medium text-white bg-gradient-to-br from-violet-600 to-pink-500 -translate-y-1 shadow-[0_16px_44px_rgba(124,58,237,0.6)] transition-all duration-300"
    } else {
        "px-7 py-3 rounded-full font-medium text-white bg-gradient-to-br from-violet-600 to-pink-500 shadow-[0_8px_28px_rgba(124,58,237,0.38)] transition-all duration-300"
    }
}

pub fn outline_button_class(hovered: bool) -> &'static str {
    if hovered {
        "px-7 py-3 rounded-full font-medium border border-violet-400/65 text-violet-300 bg-violet-400/[0.08] -translate-y-1 transition-all duration-300"
    } else {
        "px-7 py-3 rounded-full font-medium border border-violet-400/30 text-violet-400 transition-all duration-300"
    }
}

pub fn contact_link_class(hovered: bool) -> &'static str {
    if hovered {
        "px-6 py-3 rounded-full border text-sm font-medium border-violet-400/55 text-violet-300 bg-violet-400/[0.12] -translate-y-1 shadow-[0_8px_24px_rgba(0,0,0,0.3)] transition-all duration-300"
    } else {
        "px-6 py-3 rounded-full border text-sm font-medium border-white/10 text-slate-400 bg-white/[0.04] transition-all duration-300"
    }
}
