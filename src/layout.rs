use std::time::Duration;

use crate::reveal::Threshold;

/// Tuning for the page chrome. The header offset matches the fixed nav
/// bar's rendered height and should move with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub header_offset_px: f64,
    pub scrolled_threshold_px: f64,
    pub narrow_breakpoint_px: f64,
    pub entrance_delay: Duration,
    pub reveal_threshold: Threshold,
}

impl LayoutConfig {
    pub const DEFAULT: Self = Self {
        header_offset_px: 140.0,
        scrolled_threshold_px: 40.0,
        narrow_breakpoint_px: 768.0,
        entrance_delay: Duration::from_millis(200),
        reveal_threshold: Threshold::DEFAULT,
    };
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Anything on the page that swaps to an alternate style under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    Nav(Section),
    HireMe,
    ViewProjects,
    GetInTouch,
    Experience(usize),
    SkillCategory(usize),
    Project(usize),
    ContactLink(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn classify(width: f64, config: &LayoutConfig) -> Self {
        if width < config.narrow_breakpoint_px {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Returns the bottommost section whose anchor sits at or above the scroll
/// offset once the fixed header is accounted for. Sections without an anchor
/// in the document are skipped.
pub fn active_section<F>(scroll_y: f64, header_offset: f64, anchor_top: F) -> Option<Section>
where
    F: Fn(Section) -> Option<f64>,
{
    Section::ALL.iter().rev().copied().find(|&section| {
        anchor_top(section).is_some_and(|top| scroll_y >= top - header_offset)
    })
}

/// Transient UI state owned by the page. Every transition is driven by one
/// discrete host event.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub active: Section,
    pub scrolled: bool,
    pub viewport: ViewportClass,
    pub menu_open: bool,
    pub hovered: Option<HoverTarget>,
    pub ready: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            active: Section::About,
            scrolled: false,
            viewport: ViewportClass::Wide,
            menu_open: false,
            hovered: None,
            ready: false,
        }
    }
}

impl PageState {
    /// Returns true when the active section changed.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, config: &LayoutConfig, anchor_top: F) -> bool
    where
        F: Fn(Section) -> Option<f64>,
    {
        self.scrolled = scroll_y > config.scrolled_threshold_px;
        match active_section(scroll_y, config.header_offset_px, anchor_top) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn on_resize(&mut self, width: f64, config: &LayoutConfig) {
        self.viewport = ViewportClass::classify(width, config);
        if self.viewport == ViewportClass::Wide {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the menu and hands back the section the host should scroll to.
    pub fn navigate(&mut self, section: Section) -> Section {
        self.menu_open = false;
        section
    }

    pub fn hover_enter(&mut self, target: HoverTarget) {
        self.hovered = Some(target);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    pub fn is_hovered(&self, target: HoverTarget) -> bool {
        self.hovered == Some(target)
    }

    pub fn mark_ready(&mut self) {
        self.ready = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(section: Section) -> Option<f64> {
        Some(match section {
            Section::About => 0.0,
            Section::Experience => 800.0,
            Section::Skills => 1600.0,
            Section::Projects => 2400.0,
            Section::Contact => 3200.0,
        })
    }

    #[test]
    fn test_active_section_tie_break() {
        assert_eq!(active_section(1665.0, 140.0, anchors), Some(Section::Skills));
        assert_eq!(active_section(0.0, 140.0, anchors), Some(Section::About));
        assert_eq!(active_section(660.0, 140.0, anchors), Some(Section::Experience));
        assert_eq!(active_section(659.0, 140.0, anchors), Some(Section::About));
        assert_eq!(active_section(9000.0, 140.0, anchors), Some(Section::Contact));
    }

    #[test]
    fn test_active_section_skips_missing_anchors() {
        let partial = |section| match section {
            Section::Skills => None,
            other => anchors(other),
        };
        assert_eq!(active_section(1665.0, 140.0, partial), Some(Section::Experience));
        assert_eq!(active_section(100.0, 140.0, |_| None), None);
    }

    #[test]
    fn test_scroll_keeps_previous_section_when_none_qualify() {
        let config = LayoutConfig::DEFAULT;
        let mut state = PageState::default();
        assert!(state.on_scroll(2300.0, &config, anchors));
        assert_eq!(state.active, Section::Projects);

        assert!(!state.on_scroll(10.0, &config, |_| None));
        assert_eq!(state.active, Section::Projects);
    }

    #[test]
    fn test_scrolled_threshold() {
        let config = LayoutConfig::DEFAULT;
        let mut state = PageState::default();
        state.on_scroll(39.0, &config, anchors);
        assert!(!state.scrolled);
        state.on_scroll(40.0, &config, anchors);
        assert!(!state.scrolled);
        state.on_scroll(41.0, &config, anchors);
        assert!(state.scrolled);
        state.on_scroll(0.0, &config, anchors);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_classification_depends_only_on_latest_width() {
        let config = LayoutConfig::DEFAULT;
        let mut state = PageState::default();
        for width in [1200.0, 767.0, 400.0, 768.0] {
            state.on_resize(width, &config);
        }
        assert_eq!(state.viewport, ViewportClass::Wide);
        state.on_resize(767.0, &config);
        assert_eq!(state.viewport, ViewportClass::Narrow);
        assert_eq!(ViewportClass::classify(768.0, &config), ViewportClass::Wide);
    }

    #[test]
    fn test_menu_closes_on_widen() {
        let config = LayoutConfig::DEFAULT;
        let mut state = PageState::default();
        state.on_resize(500.0, &config);
        state.toggle_menu();
        assert!(state.menu_open);

        state.on_resize(600.0, &config);
        assert!(state.menu_open);

        state.on_resize(1024.0, &config);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigate_always_closes_menu() {
        let mut state = PageState::default();
        assert_eq!(state.navigate(Section::Contact), Section::Contact);
        assert!(!state.menu_open);

        state.toggle_menu();
        assert_eq!(state.navigate(Section::Skills), Section::Skills);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_hover_is_single_valued() {
        let mut state = PageState::default();
        state.hover_enter(HoverTarget::Experience(0));
        state.hover_enter(HoverTarget::Project(0));
        assert!(state.is_hovered(HoverTarget::Project(0)));
        assert!(!state.is_hovered(HoverTarget::Experience(0)));

        state.hover_leave();
        assert_eq!(state.hovered, None);
    }
}
