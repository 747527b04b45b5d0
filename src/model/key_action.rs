//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Rotation
    /// Advance the focused surface. Default: →/l
    Next,
    /// Retreat the focused surface. Default: ←/h
    Prev,
    /// Jump the focused surface to a page (0-based). Default: 1-9
    JumpTo(usize),
    /// Toggle the focused surface's pause. Default: p/Space
    TogglePause,

    // Focus and screens
    /// Cycle focus: images → news → updates → marquee. Default: Tab
    CycleFocus,
    /// Open the first article in the news window. Default: Enter
    OpenArticle,
    /// Leave the article / not-found screen, close overlays. Default: Esc
    Back,

    // Institutions
    /// Switch to the next institution. Default: ]
    NextInstitution,
    /// Switch to the previous institution. Default: [
    PrevInstitution,

    // Overlays and misc
    /// Open the admissions enquiry form. Default: a
    OpenAdmissions,
    /// Reload content for the current institution. Default: r
    Reload,
    /// Toggle the help overlay. Default: ?
    ToggleHelp,
    /// Quit. Default: q (Ctrl+C always quits)
    Quit,
}
