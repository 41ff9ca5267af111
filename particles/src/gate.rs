//! Suspension flags for the frame loop.

/// The frame body runs only while every gate is open. The scheduler keeps
/// ticking regardless; a closed gate costs one check per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gates {
    /// Set once the boot delay after mount has elapsed.
    pub booted: bool,
    /// Hero container intersects the viewport.
    pub hero_visible: bool,
    /// Page-visibility state is `visible`.
    pub tab_visible: bool,
}

impl Gates {
    /// State at mount: not booted, hero assumed on screen.
    #[must_use]
    pub fn at_mount(tab_visible: bool) -> Self {
        Self { booted: false, hero_visible: true, tab_visible }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.booted && self.hero_visible && self.tab_visible
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
