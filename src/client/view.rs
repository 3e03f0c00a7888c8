use super::messages::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

/// The rendered login page.
pub trait LoginView {
    /// Re-render every translatable label.
    fn apply_language(&mut self, language: Language);
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);
    fn focus(&mut self, field: Field);
    fn set_field_invalid(&mut self, field: Field, invalid: bool);
    /// Disables the submit button and swaps its label for a loader while
    /// `loading`; otherwise restores `idle_label`.
    fn set_loading(&mut self, loading: bool, idle_label: &str);
    fn show_success(&mut self, label: &str);
    fn set_shaking(&mut self, shaking: bool);
    fn set_username(&mut self, username: &str);
    fn clear_password(&mut self);
    fn set_remember(&mut self, checked: bool);
    fn set_password_visible(&mut self, visible: bool);
    fn navigate(&mut self, page: &str);
}
