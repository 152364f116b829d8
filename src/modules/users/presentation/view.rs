use crate::modules::users::application::dto::UserModel;

/// Capability set a UI surface must implement for the presenter to
/// drive it. The presenter depends on nothing else about the surface.
///
/// Methods are only ever invoked on the interactive thread.
pub trait UserDetailsView: Send + Sync {
    fn render_user(&self, user: &UserModel);
    fn show_loading(&self);
    fn hide_loading(&self);
    fn show_retry(&self);
    fn hide_retry(&self);
    fn show_error(&self, message: &str);
}
