//! Status highlight colours

use crate::models::Status;

/// Highlight applied to a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorToken {
    /// Plain outlined badge
    #[default]
    None,
    Green,
    Yellow,
    Red,
}

impl ColorToken {
    /// CSS modifier class added to the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorToken::None => "",
            ColorToken::Green => "badge-green",
            ColorToken::Yellow => "badge-yellow",
            ColorToken::Red => "badge-red",
        }
    }

    /// CSS colour name, empty for an unhighlighted badge
    pub fn css_color(&self) -> &'static str {
        match self {
            ColorToken::None => "",
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Red => "red",
        }
    }

    pub fn is_highlighted(&self) -> bool {
        *self != ColorToken::None
    }
}

/// Highlight for the badge of `status` when the draft is at `current`.
///
/// Compares enum identity only; labels play no part.
pub fn highlight_for(status: Status, current: Status) -> ColorToken {
    if status != current {
        return ColorToken::None;
    }
    match status {
        Status::Pending => ColorToken::Green,
        Status::Ongoing => ColorToken::Yellow,
        Status::Completed => ColorToken::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_matches_current_only() {
        assert_eq!(highlight_for(Status::Pending, Status::Pending), ColorToken::Green);
        assert_eq!(highlight_for(Status::Ongoing, Status::Ongoing), ColorToken::Yellow);
        assert_eq!(highlight_for(Status::Completed, Status::Completed), ColorToken::Red);

        for status in Status::ALL {
            for current in Status::ALL {
                if status != current {
                    assert_eq!(highlight_for(status, current), ColorToken::None);
                }
            }
        }
    }

    #[test]
    fn test_css_mapping() {
        assert_eq!(ColorToken::Yellow.css_class(), "badge-yellow");
        assert_eq!(ColorToken::None.css_class(), "");
        assert!(!ColorToken::None.is_highlighted());
    }

    #[test]
    fn test_css_color() {
        assert_eq!(ColorToken::Green.css_color(), "green");
        assert_eq!(ColorToken::Yellow.css_color(), "yellow");
        assert_eq!(ColorToken::Red.css_color(), "red");
        assert_eq!(ColorToken::None.css_color(), "");
        assert_eq!(highlight_for(Status::Completed, Status::Completed).css_color(), "red");
    }
}
