/// Results from years before this one start collapsed in the table.
pub const CUTOFF_YEAR: i32 = 2025;
pub const GALLERY_PAGE_SIZE: usize = 6;

const RESULTS_ROOT_ID: &str = "ctf-results";
const REPORTS_ROOT_ID: &str = "reports";
const GALLERY_ITEM_SELECTOR: &str = "#physical-gallery .gallery-item";
const GALLERY_BUTTON_ID: &str = "show-more-btn";
const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
const NAV_LINKS_SELECTOR: &str = ".nav-links";

/// Page-level settings handed to every component and DOM binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub cutoff_year: i32,
    pub gallery_page_size: usize,
    pub results_root_id: &'static str,
    pub reports_root_id: &'static str,
    pub gallery_item_selector: &'static str,
    pub gallery_button_id: &'static str,
    pub menu_button_selector: &'static str,
    pub nav_links_selector: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cutoff_year: CUTOFF_YEAR,
            gallery_page_size: GALLERY_PAGE_SIZE,
            results_root_id: RESULTS_ROOT_ID,
            reports_root_id: REPORTS_ROOT_ID,
            gallery_item_selector: GALLERY_ITEM_SELECTOR,
            gallery_button_id: GALLERY_BUTTON_ID,
            menu_button_selector: MENU_BUTTON_SELECTOR,
            nav_links_selector: NAV_LINKS_SELECTOR,
        }
    }
}
