/// Two-state visibility shared by the modal and the loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Not rendered (initial state)
    #[default]
    Hidden,
    /// Rendered on top of the page
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    pub fn show(&mut self) {
        *self = Visibility::Visible;
    }

    /// Hide, returning whether anything changed
    pub fn hide(&mut self) -> bool {
        let was_visible = self.is_visible();
        *self = Visibility::Hidden;
        was_visible
    }
}
