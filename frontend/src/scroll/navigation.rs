use log::{debug, warn};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Page sections that can be scrolled to. The id is the DOM id of the
/// `<section>` rendered by the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    Stats,
    About,
    Process,
    Cta,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Stats => "stats",
            Section::About => "about",
            Section::Process => "process",
            Section::Cta => "cta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Services => "Services",
            Section::Stats => "Stats",
            Section::About => "About",
            Section::Process => "Process",
            Section::Cta => "Contact",
        }
    }
}

pub const NAV_ITEMS: [Section; 5] = [
    Section::Hero,
    Section::Services,
    Section::Stats,
    Section::About,
    Section::Process,
];

pub const QUICK_LINKS: [Section; 4] = [
    Section::Hero,
    Section::Services,
    Section::About,
    Section::Process,
];

/// Smooth-scrolls the section's top edge into view. Returns false when the
/// section is not in the document.
pub fn scroll_to_section(section: Section) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            debug!("Scrolled to #{}", section.id());
            true
        }
        None => {
            warn!("No element with id #{} to scroll to", section.id());
            false
        }
    }
}

/// Opens `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("Could not open {}: {:?}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "Services", "Stats", "About", "Process"]);
    }

    #[test]
    fn test_quick_links_skip_stats() {
        assert!(!QUICK_LINKS.contains(&Section::Stats));
        assert_eq!(QUICK_LINKS[0], Section::Hero);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let all = [
            Section::Hero,
            Section::Services,
            Section::Stats,
            Section::About,
            Section::Process,
            Section::Cta,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
        assert_eq!(Section::Cta.id(), "cta");
    }
}
