use crate::error::UiError;

/// Lifecycle shared by every page controller.
///
/// `init` syncs the page with the controller's starting state right after
/// mount. `teardown` undoes anything the controller left on the page.
pub trait UiController {
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns a [`UiError`] if the initial DOM sync fails.
    fn init(&mut self) -> Result<(), UiError> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] if restoring the page fails.
    fn teardown(&mut self) -> Result<(), UiError> {
        Ok(())
    }
}
