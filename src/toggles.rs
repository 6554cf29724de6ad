pub const SHOW_MORE_PHOTOS_LABEL: &str = "Show More Photos";
pub const SHOW_LESS_PHOTOS_LABEL: &str = "Show Less Photos";

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always leaves the menu closed.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn icon_class(self) -> &'static str {
        if self.open {
            "fa-times"
        } else {
            "fa-bars"
        }
    }
}

/// Photo gallery pagination: the first `page_size` items, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryPager {
    page_size: usize,
    expanded: bool,
}

impl GalleryPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_visible(self, index: usize) -> bool {
        self.expanded || index < self.page_size
    }

    #[cfg(test)]
    pub fn visible_count(self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            total.min(self.page_size)
        }
    }

    pub fn label(self) -> &'static str {
        if self.expanded {
            SHOW_LESS_PHOTOS_LABEL
        } else {
            SHOW_MORE_PHOTOS_LABEL
        }
    }
}
