// src/gui/router.rs
use crate::config::options::PageKind;
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::coverage::PAGE,
    &pages::enhancements::PAGE,
    &pages::mobile_usability::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Out-of-range falls back to the first tab.
pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(PAGES[0])
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_in_order() {
        let titles: Vec<_> = all_pages().iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["Coverage", "Enhancements", "Mobile Usability"]);
        assert_eq!(index_of(PageKind::MobileUsability), 2);
        assert_eq!(page_at(99).kind(), PageKind::Coverage);
    }
}
