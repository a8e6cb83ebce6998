/// Distance below the top of the viewport used to decide which region is in view.
pub const SCROLL_OFFSET: f64 = 100.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Page order, which is also the matching priority.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Vertical extent of a rendered region, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section (in page order) containing the point `SCROLL_OFFSET` below
/// the viewport top. Sections `bounds` can't find are skipped.
pub fn locate<F>(scroll_y: f64, bounds: F) -> Option<Section>
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    let point = scroll_y + SCROLL_OFFSET;
    Section::ALL
        .into_iter()
        .find(|&s| bounds(s).is_some_and(|b| b.contains(point)))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection {
    current: Section,
}

impl ActiveSection {
    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    /// Re-evaluate after a scroll. Keeps the previous section when nothing
    /// matches. Returns whether the active section changed.
    pub fn observe<F>(&mut self, scroll_y: f64, bounds: F) -> bool
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        match locate(scroll_y, bounds) {
            Some(s) if s != self.current => {
                log::trace!("active section: {}", s.id());
                self.current = s;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // hero 0..800, about 800..1400, experience 1400..2600, projects 2600..4000,
    // skills 4000..4700, contact 4700..5600
    fn layout(section: Section) -> Option<SectionBounds> {
        let (top, height) = match section {
            Section::Hero => (0.0, 800.0),
            Section::About => (800.0, 600.0),
            Section::Experience => (1400.0, 1200.0),
            Section::Projects => (2600.0, 1400.0),
            Section::Skills => (4000.0, 700.0),
            Section::Contact => (4700.0, 900.0),
        };
        Some(SectionBounds::new(top, height))
    }

    #[test]
    fn test_locate_projects() {
        // reference point 3000 only falls inside projects
        assert_eq!(locate(2900.0, layout), Some(Section::Projects));

        let mut active = ActiveSection::default();
        assert!(active.observe(2900.0, layout));
        assert_eq!(active.current().id(), "projects");
    }

    #[test]
    fn test_offset_applied() {
        // 750 + 100 = 850 lands in about, not hero
        assert_eq!(locate(750.0, layout), Some(Section::About));
        // 699 + 100 = 799 is still hero
        assert_eq!(locate(699.0, layout), Some(Section::Hero));
        // bottom edge is exclusive
        assert_eq!(locate(700.0, layout), Some(Section::About));
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut active = ActiveSection::default();
        assert!(active.observe(4100.0, layout));
        assert_eq!(active.current(), Section::Skills);

        // past the end of the page
        assert!(!active.observe(10_000.0, layout));
        assert_eq!(active.current(), Section::Skills);

        // nothing rendered at all
        assert!(!active.observe(0.0, |_| None));
        assert_eq!(active.current(), Section::Skills);
    }

    #[test]
    fn test_priority_on_overlap() {
        let overlapping = |s: Section| match s {
            Section::About => Some(SectionBounds::new(0.0, 1000.0)),
            Section::Projects => Some(SectionBounds::new(0.0, 1000.0)),
            _ => None,
        };
        assert_eq!(locate(0.0, overlapping), Some(Section::About));
    }

    #[test]
    fn test_missing_sections_skipped() {
        let partial = |s: Section| match s {
            Section::Contact => Some(SectionBounds::new(0.0, 500.0)),
            _ => None,
        };
        assert_eq!(locate(0.0, partial), Some(Section::Contact));
    }

    #[test]
    fn test_same_section_reports_no_change() {
        let mut active = ActiveSection::default();
        assert!(!active.observe(0.0, layout));
        assert!(active.is_active(Section::Hero));
    }

    #[test]
    fn test_ids_and_links() {
        let ids: Vec<_> = Section::ALL.iter().map(Section::id).collect();
        assert_eq!(
            ids,
            ["hero", "about", "experience", "projects", "skills", "contact"]
        );
        assert_eq!(Section::Skills.href(), "#skills");
    }
}
