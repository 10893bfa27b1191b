mod wallbox;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Wallbox form domain
        Event::Initialize { .. }
        | Event::FormUpdate { .. }
        | Event::Test
        | Event::Save { .. }
        | Event::LoadResponse(_)
        | Event::TestResponse(_)
        | Event::SaveResponse(_) => wallbox::handle(event, model),

        // UI actions
        Event::ClearError => update_field!(model.error_message, None),
        Event::ClearSuccess => update_field!(model.success_message, None),
    }
}
