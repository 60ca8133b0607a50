//! Navigation bar entries, what a click on each of them does, and which home
//! section is highlighted for the current scroll position.

use std::time::Duration;

/// Section anchors of the home page, top to bottom.
pub const HOME_SECTIONS: &[&str] = &[
    "home",
    "products",
    "industries",
    "features",
    "testimonials",
    "partners",
    "faq",
    "demo",
];

/// Wait between routing home and scrolling, so the home page has mounted.
pub const ROUTE_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// The viewport is shrunk by this much at the top and the bottom when
/// measuring section visibility.
pub const SECTION_MARGIN_PX: f64 = 100.0;

/// Smallest visible share of a section for it to become active.
pub const MIN_VISIBLE_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Careers,
    Device,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// An element id on the home page.
    Section(&'static str),
    Careers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
    /// Dropdown entries, empty for plain items.
    pub children: &'static [NavLink],
}

const fn section(label: &'static str, id: &'static str) -> NavLink {
    NavLink {
        label,
        target: NavTarget::Section(id),
    }
}

pub static PRODUCT_LINKS: &[NavLink] = &[
    section("Aspire", "aspire"),
    section("Pro2", "pro2"),
    section("Elite-A", "elite"),
];

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        target: NavTarget::Section("home"),
        children: &[],
    },
    NavItem {
        label: "Products",
        target: NavTarget::Section("products"),
        children: PRODUCT_LINKS,
    },
    NavItem {
        label: "Industries",
        target: NavTarget::Section("industries"),
        children: &[],
    },
    NavItem {
        label: "Features",
        target: NavTarget::Section("features"),
        children: &[],
    },
    NavItem {
        label: "Partners",
        target: NavTarget::Section("partners"),
        children: &[],
    },
    NavItem {
        label: "Careers",
        target: NavTarget::Careers,
        children: &[],
    },
];

pub const BOOK_DEMO: NavLink = section("Book a Demo", "demo");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    OpenCareers,
    RouteHome,
    /// Smooth-scroll to a section of the page already shown.
    ScrollTo(&'static str),
    /// Route to the home page, then scroll once `delay` has passed.
    RouteHomeThenScroll {
        section: &'static str,
        delay: Duration,
    },
}

/// Resolves a click on `target` while `page` is shown.
pub fn resolve(target: NavTarget, page: Page) -> NavAction {
    match (target, page) {
        (NavTarget::Careers, _) => NavAction::OpenCareers,
        (NavTarget::Section(id), Page::Home) => NavAction::ScrollTo(id),
        (NavTarget::Section(id), _) => NavAction::RouteHomeThenScroll {
            section: id,
            delay: ROUTE_SCROLL_DELAY,
        },
    }
}

pub fn logo_action(page: Page) -> NavAction {
    match page {
        Page::Home => NavAction::ScrollTo("home"),
        _ => NavAction::RouteHome,
    }
}

pub fn is_highlighted(item: &NavItem, active_section: &str, page: Page) -> bool {
    match item.target {
        NavTarget::Careers => page == Page::Careers,
        NavTarget::Section(id) => page == Page::Home && id == active_section,
    }
}

/// Vertical extent of a section relative to the viewport top, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    /// Share of the section inside the margin-shrunk viewport.
    pub fn visible_ratio(&self, viewport_height: f64) -> f64 {
        let height = self.bottom - self.top;
        if height <= 0.0 {
            return 0.0;
        }
        let window_top = SECTION_MARGIN_PX;
        let window_bottom = viewport_height - SECTION_MARGIN_PX;
        let visible = self.bottom.min(window_bottom) - self.top.max(window_top);
        (visible.max(0.0) / height).min(1.0)
    }
}

/// The section with the largest visible share, if any reaches the threshold.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64) -> Option<&'static str> {
    sections
        .iter()
        .map(|bounds| (bounds.id, bounds.visible_ratio(viewport_height)))
        .filter(|(_, ratio)| *ratio >= MIN_VISIBLE_RATIO)
        .fold(None::<(&'static str, f64)>, |best, candidate| match best {
            Some((_, ratio)) if ratio >= candidate.1 => best,
            _ => Some(candidate),
        })
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_clicks_scroll_on_home_and_route_elsewhere() {
        assert_eq!(
            resolve(NavTarget::Section("features"), Page::Home),
            NavAction::ScrollTo("features")
        );
        assert_eq!(
            resolve(BOOK_DEMO.target, Page::Careers),
            NavAction::RouteHomeThenScroll {
                section: "demo",
                delay: Duration::from_millis(100),
            }
        );
        assert_eq!(
            resolve(NavTarget::Careers, Page::Home),
            NavAction::OpenCareers
        );
        assert_eq!(logo_action(Page::Device), NavAction::RouteHome);
    }

    #[test]
    fn careers_item_is_highlighted_on_the_careers_page_only() {
        let careers = NAV_ITEMS.last().unwrap();
        assert!(is_highlighted(careers, "home", Page::Careers));
        assert!(!is_highlighted(careers, "home", Page::Home));
        assert!(is_highlighted(&NAV_ITEMS[0], "home", Page::Home));
        assert!(!is_highlighted(&NAV_ITEMS[0], "home", Page::Careers));
    }

    #[test]
    fn products_dropdown_lists_the_three_devices() {
        let products = &NAV_ITEMS[1];
        let labels: Vec<_> = products.children.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Aspire", "Pro2", "Elite-A"]);
    }

    #[test]
    fn ratio_ignores_the_margins() {
        let bounds = SectionBounds {
            id: "faq",
            top: 0.0,
            bottom: 200.0,
        };
        assert!((bounds.visible_ratio(800.0) - 0.5).abs() < f64::EPSILON);
        let below = SectionBounds {
            id: "faq",
            top: 750.0,
            bottom: 1200.0,
        };
        assert_eq!(below.visible_ratio(800.0), 0.0);
    }

    #[test]
    fn most_visible_section_wins() {
        let sections = [
            SectionBounds {
                id: "home",
                top: -500.0,
                bottom: 300.0,
            },
            SectionBounds {
                id: "products",
                top: 300.0,
                bottom: 900.0,
            },
        ];
        assert_eq!(active_section(&sections, 800.0), Some("products"));
    }

    #[test]
    fn nothing_is_active_below_the_threshold() {
        let sections = [SectionBounds {
            id: "home",
            top: -2000.0,
            bottom: 150.0,
        }];
        assert_eq!(active_section(&sections, 800.0), None);
    }
}
