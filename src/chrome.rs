/// Local UI state around the page content that is not driven by the
/// viewport: the menu overlay, the theme, the experience accordion and the
/// testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChrome {
    menu_open: bool,
    dark_mode: bool,
    open_accordion: Option<usize>,
    testimonial: usize,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            menu_open: false,
            dark_mode: true,
            open_accordion: Some(0),
            testimonial: 0,
        }
    }
}

impl PageChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    pub fn open_accordion(&self) -> Option<usize> {
        self.open_accordion
    }

    pub fn is_accordion_open(&self, index: usize) -> bool {
        self.open_accordion == Some(index)
    }

    /// Opening one entry closes the others; clicking the open entry closes it.
    pub fn toggle_accordion(&mut self, index: usize) {
        self.open_accordion = if self.open_accordion == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn testimonial(&self) -> usize {
        self.testimonial
    }

    pub fn next_testimonial(&mut self, len: usize) {
        if len == 0 {
            self.testimonial = 0;
            return;
        }
        self.testimonial = (self.testimonial + 1) % len;
    }

    pub fn prev_testimonial(&mut self, len: usize) {
        if len == 0 {
            self.testimonial = 0;
            return;
        }
        self.testimonial = (self.testimonial + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let chrome = PageChrome::new();
        assert!(!chrome.is_menu_open());
        assert!(chrome.is_dark_mode());
        assert_eq!(chrome.open_accordion(), Some(0));
        assert_eq!(chrome.testimonial(), 0);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut chrome = PageChrome::new();
        chrome.toggle_menu();
        assert!(chrome.is_menu_open());
        chrome.close_menu();
        assert!(!chrome.is_menu_open());
        chrome.close_menu();
        assert!(!chrome.is_menu_open());
    }

    #[test]
    fn test_theme_toggle() {
        let mut chrome = PageChrome::new();
        chrome.toggle_theme();
        assert!(!chrome.is_dark_mode());
        chrome.set_dark_mode(true);
        assert!(chrome.is_dark_mode());
    }

    #[test]
    fn test_accordion_single_open() {
        let mut chrome = PageChrome::new();
        chrome.toggle_accordion(0);
        assert_eq!(chrome.open_accordion(), None);
        chrome.toggle_accordion(2);
        assert!(chrome.is_accordion_open(2));
        chrome.toggle_accordion(1);
        assert!(chrome.is_accordion_open(1));
        assert!(!chrome.is_accordion_open(2));
    }

    #[test]
    fn test_carousel_wraps() {
        let mut chrome = PageChrome::new();
        chrome.prev_testimonial(2);
        assert_eq!(chrome.testimonial(), 1);
        chrome.next_testimonial(2);
        assert_eq!(chrome.testimonial(), 0);
        chrome.next_testimonial(3);
        chrome.next_testimonial(3);
        chrome.next_testimonial(3);
        assert_eq!(chrome.testimonial(), 0);
    }

    #[test]
    fn test_carousel_empty() {
        let mut chrome = PageChrome::new();
        chrome.next_testimonial(0);
        chrome.prev_testimonial(0);
        assert_eq!(chrome.testimonial(), 0);
    }
}
