use serde::{Deserialize, Serialize};

use crate::types::{CarId, WallboxConfig, WallboxStatus};

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly
/// depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Page state - the complete state of the wallbox form
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    /// Car whose wallbox configuration is being edited (`-1`: none).
    pub carid: CarId,

    /// Form state: the last loaded configuration or the operator's edits,
    /// never a partial merge of both.
    pub config: WallboxConfig,

    /// Status returned by the most recent test or save call.
    pub status: Option<WallboxStatus>,

    /// Form differs from the last loaded or saved configuration.
    pub form_dirty: bool,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
