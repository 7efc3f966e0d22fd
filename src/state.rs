/// The five sections the site can display. Selection is in-memory only:
/// no URL routing, no history.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    Game,
    Contacts,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::Game,
        Section::Contacts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services & Pricing",
            Section::Portfolio => "Portfolio",
            Section::Game => "Game in Development",
            Section::Contacts => "Contacts",
        }
    }
}

/// Modal viewer state: either closed, or open on a valid portfolio index.
/// `next`/`prev` wrap circularly, so an open index stays in range for any
/// list length >= 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lightbox {
    Closed,
    Open(usize),
}

impl Lightbox {
    pub fn open(index: usize) -> Self {
        Lightbox::Open(index)
    }

    pub fn close(self) -> Self {
        Lightbox::Closed
    }

    pub fn next(self, len: usize) -> Self {
        match self {
            Lightbox::Open(i) if len > 0 => Lightbox::Open((i + 1) % len),
            other => other,
        }
    }

    pub fn prev(self, len: usize) -> Self {
        match self {
            Lightbox::Open(i) if len > 0 => Lightbox::Open((i + len - 1) % len),
            other => other,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Lightbox::Open(i) => Some(i),
            Lightbox::Closed => None,
        }
    }
}

/// Outcome of the one fallible operation on the page. Both variants carry
/// the handle so the user can always read it off the toast and copy it
/// by hand when the clipboard write was refused.
#[derive(Clone, PartialEq, Debug)]
pub enum CopyFeedback {
    Copied(String),
    Manual(String),
}

impl CopyFeedback {
    pub fn message(&self) -> String {
        match self {
            CopyFeedback::Copied(handle) => format!("Copied: {}", handle),
            CopyFeedback::Manual(handle) => {
                format!("Couldn't copy automatically. The handle is: {}", handle)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CopyFeedback::Manual(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_belongs_to_the_menu() {
        for section in Section::ALL {
            assert!(!section.label().is_empty());
        }
        assert_eq!(Section::ALL.len(), 5);
    }

    #[test]
    fn next_wraps_forward() {
        for n in 1..=8usize {
            for i in 0..n {
                assert_eq!(Lightbox::Open(i).next(n), Lightbox::Open((i + 1) % n));
            }
        }
    }

    #[test]
    fn prev_wraps_backward() {
        for n in 1..=8usize {
            for i in 0..n {
                assert_eq!(Lightbox::Open(i).prev(n), Lightbox::Open((i + n - 1) % n));
            }
        }
    }

    #[test]
    fn open_then_close() {
        assert_eq!(Lightbox::open(4), Lightbox::Open(4));
        assert_eq!(Lightbox::Open(4).close(), Lightbox::Closed);
        assert_eq!(Lightbox::Closed.close(), Lightbox::Closed);
    }

    #[test]
    fn navigation_on_closed_viewer_is_a_no_op() {
        assert_eq!(Lightbox::Closed.next(6), Lightbox::Closed);
        assert_eq!(Lightbox::Closed.prev(6), Lightbox::Closed);
        assert_eq!(Lightbox::Closed.index(), None);
    }

    #[test]
    fn copy_messages_contain_the_handle() {
        let ok = CopyFeedback::Copied("mono_alr".to_string());
        let fallback = CopyFeedback::Manual("mono_alr".to_string());
        assert!(ok.message().contains("mono_alr"));
        assert!(fallback.message().contains("mono_alr"));
        assert!(!ok.is_error());
        assert!(fallback.is_error());
    }

    #[test]
    fn browse_session_walkthrough() {
        // Home -> Contacts -> Portfolio, then a wrap-around tour of a
        // six-entry gallery.
        let mut section = Section::Home;
        assert_eq!(section, Section::Home);
        section = Section::Contacts;
        assert_eq!(section, Section::Contacts);
        section = Section::Portfolio;

        let mut lb = Lightbox::open(0);
        for _ in 0..3 {
            lb = lb.next(6);
        }
        assert_eq!(lb, Lightbox::Open(3));
        for _ in 0..4 {
            lb = lb.prev(6);
        }
        assert_eq!(lb, Lightbox::Open(5));
        lb = lb.close();
        assert_eq!(lb, Lightbox::Closed);
        assert_eq!(section, Section::Portfolio);
    }
}
