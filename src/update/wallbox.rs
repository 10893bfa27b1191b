use crux_core::Command;

use crate::events::Event;
use crate::handle_response;
use crate::model::Model;
use crate::stream_post;
use crate::types::{WallboxConfig, WallboxRequest, WallboxStatus};
use crate::Effect;

/// Handle wallbox form events (load, edits, test, save)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { carid } => {
            model.carid = carid;
            stream_post!(
                model,
                WallboxRequest::load(carid),
                LoadResponse,
                "Load wallbox configuration",
                WallboxConfig
            )
        }

        Event::FormUpdate { config } => {
            if model.config == config {
                return Command::done();
            }
            model.config = config;
            model.form_dirty = true;
            crux_core::render::render()
        }

        Event::Test => send_test(model),

        Event::Save { carid } => stream_post!(
            model,
            WallboxRequest::save(carid, model.config.clone()),
            SaveResponse,
            "Save wallbox configuration",
            WallboxStatus
        ),

        Event::LoadResponse(result) => match result {
            Ok(config) => {
                // Populate the form, then probe the wallbox with the
                // freshly loaded values, as the page does on load.
                model.config = config;
                model.form_dirty = false;
                send_test(model)
            }
            Err(e) => model.set_error_and_render(e),
        },

        Event::TestResponse(result) => handle_response!(model, result, {
            on_success: |model, status| {
                model.status = Some(status);
            },
        }),

        Event::SaveResponse(result) => handle_response!(model, result, {
            on_success: |model, status| {
                model.status = Some(status);
                model.form_dirty = false;
            },
            success_message: "Wallbox configuration saved",
        }),

        _ => unreachable!("Non-wallbox event passed to wallbox handler"),
    }
}

/// Probe the wallbox with whatever is in the form right now; any
/// combination of values is sent as-is, empty ones included.
fn send_test(model: &mut Model) -> Command<Effect, Event> {
    stream_post!(
        model,
        WallboxRequest::test(model.config.clone()),
        TestResponse,
        "Wallbox test",
        WallboxStatus
    )
}
