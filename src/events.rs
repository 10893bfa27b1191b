use serde::{Deserialize, Serialize};

use crate::types::{CarId, WallboxConfig, WallboxStatus};

/// Events that can happen on the wallbox page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    /// Page load: remember the car context, fetch the saved configuration
    /// and probe the wallbox with it.
    Initialize { carid: CarId },

    /// Operator edited the form; carries the whole form state.
    FormUpdate { config: WallboxConfig },

    /// Probe the wallbox with the current form values.
    Test,

    /// Persist the current form values for the given car.
    Save { carid: CarId },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    LoadResponse(Result<WallboxConfig, String>),
    #[serde(skip)]
    TestResponse(Result<WallboxStatus, String>),
    #[serde(skip)]
    SaveResponse(Result<WallboxStatus, String>),

    // UI actions
    ClearError,
    ClearSuccess,
}
