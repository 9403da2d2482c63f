//! Pane layout of the editor page.

use serde::Deserialize;

/// Which pane, if any, fills the page.
///
/// Maximizing one pane hides the other, so at most one flag is set. Parsed
/// from the page query string (`?editor_maximized=true`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Editor fills the page, previewer hidden.
    pub editor_maximized: bool,
    /// Previewer fills the page, editor hidden.
    pub previewer_maximized: bool,
}

impl ViewState {
    /// Resolve conflicting flags. The editor wins when both are set.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            editor_maximized: self.editor_maximized,
            previewer_maximized: self.previewer_maximized && !self.editor_maximized,
        }
    }

    /// Flip the editor between maximized and normal.
    #[must_use]
    pub fn toggle_editor(self) -> Self {
        Self {
            editor_maximized: !self.editor_maximized,
            previewer_maximized: false,
        }
    }

    /// Flip the previewer between maximized and normal.
    #[must_use]
    pub fn toggle_previewer(self) -> Self {
        Self {
            editor_maximized: false,
            previewer_maximized: !self.previewer_maximized,
        }
    }

    /// Whether the editor pane is shown.
    #[must_use]
    pub fn editor_visible(self) -> bool {
        !self.previewer_maximized
    }

    /// Whether the previewer pane is shown.
    #[must_use]
    pub fn previewer_visible(self) -> bool {
        !self.editor_maximized
    }

    /// Page URL that restores this state.
    #[must_use]
    pub fn href(self) -> &'static str {
        if self.editor_maximized {
            "/?editor_maximized=true"
        } else if self.previewer_maximized {
            "/?previewer_maximized=true"
        } else {
            "/"
        }
    }

    /// Class for the page body, used by the stylesheet to hide panes.
    pub(crate) fn body_class(self) -> &'static str {
        if self.editor_maximized {
            "editor-maximized"
        } else if self.previewer_maximized {
            "previewer-maximized"
        } else {
            "split"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EDITOR: ViewState = ViewState {
        editor_maximized: true,
        previewer_maximized: false,
    };
    const PREVIEWER: ViewState = ViewState {
        editor_maximized: false,
        previewer_maximized: true,
    };

    #[test]
    fn test_default_shows_both_panes() {
        let view = ViewState::default();
        assert!(view.editor_visible());
        assert!(view.previewer_visible());
        assert_eq!(view.href(), "/");
    }

    #[test]
    fn test_toggle_editor() {
        let view = ViewState::default().toggle_editor();
        assert_eq!(view, EDITOR);
        assert!(view.editor_visible());
        assert!(!view.previewer_visible());
        assert_eq!(view.toggle_editor(), ViewState::default());
    }

    #[test]
    fn test_toggle_previewer() {
        let view = ViewState::default().toggle_previewer();
        assert_eq!(view, PREVIEWER);
        assert!(!view.editor_visible());
        assert!(view.previewer_visible());
        assert_eq!(view.toggle_previewer(), ViewState::default());
    }

    #[test]
    fn test_toggles_are_mutually_exclusive() {
        assert_eq!(EDITOR.toggle_previewer(), PREVIEWER);
        assert_eq!(PREVIEWER.toggle_editor(), EDITOR);
    }

    #[test]
    fn test_normalized_prefers_editor() {
        let both = ViewState {
            editor_maximized: true,
            previewer_maximized: true,
        };
        assert_eq!(both.normalized(), EDITOR);
        assert_eq!(PREVIEWER.normalized(), PREVIEWER);
    }

    #[test]
    fn test_href_and_body_class() {
        assert_eq!(EDITOR.href(), "/?editor_maximized=true");
        assert_eq!(PREVIEWER.href(), "/?previewer_maximized=true");
        assert_eq!(EDITOR.body_class(), "editor-maximized");
        assert_eq!(PREVIEWER.body_class(), "previewer-maximized");
        assert_eq!(ViewState::default().body_class(), "split");
    }

    #[test]
    fn test_deserialize_partial_query() {
        let view: ViewState = serde_json::from_str(r#"{"previewer_maximized": true}"#).unwrap();
        assert_eq!(view, PREVIEWER);
    }
}
