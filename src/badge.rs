//! Detection of the floating "built with" attribution badge injected by the
//! site generator's hosting script.

pub const BADGE_ID_PREFIX: &str = "v0-built-with-button";
pub const BADGE_SELECTOR: &str = r#"div[id^="v0-built-with-button"]"#;

/// What the sweeper reads off a candidate element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BadgeCandidate {
    pub id: String,
    pub text: String,
    pub has_svg: bool,
    pub position: String,
    pub bottom: String,
}

impl BadgeCandidate {
    /// All four markers must be present; anything else is left alone.
    pub fn is_attribution_badge(&self) -> bool {
        self.id.starts_with(BADGE_ID_PREFIX)
            && self.text.to_lowercase().contains("built with")
            && self.has_svg
            && self.position == "fixed"
            && self.bottom == "24px"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge() -> BadgeCandidate {
        BadgeCandidate {
            id: "v0-built-with-button-3f2a".to_string(),
            text: "Built with v0".to_string(),
            has_svg: true,
            position: "fixed".to_string(),
            bottom: "24px".to_string(),
        }
    }

    #[test]
    fn test_matches_badge() {
        assert!(badge().is_attribution_badge());
    }

    #[test]
    fn test_each_marker_required() {
        let candidates = [
            BadgeCandidate {
                id: "footer".to_string(),
                ..badge()
            },
            BadgeCandidate {
                text: "Made by hand".to_string(),
                ..badge()
            },
            BadgeCandidate {
                has_svg: false,
                ..badge()
            },
            BadgeCandidate {
                position: "absolute".to_string(),
                ..badge()
            },
            BadgeCandidate {
                bottom: "0px".to_string(),
                ..badge()
            },
        ];
        for c in candidates {
            assert!(!c.is_attribution_badge(), "{c:?}");
        }
    }
}
