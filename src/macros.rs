/// Macro for model field updates with automatic rendering.
/// Renders only when the value actually changed.
///
/// # Example
///
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
#[macro_export]
macro_rules! update_field {
    ($model_field:expr, $value:expr) => {{
        let value = $value;
        if $model_field != value {
            $model_field = value;
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};
}

/// Macro for POST requests to the stream endpoint with standard error
/// handling.
///
/// Encodes the request into the `url`/`data` form envelope, renders the
/// loading state, and maps the JSON response into the given response event.
///
/// # Example
///
/// ```ignore
/// stream_post!(model, WallboxRequest::test(config), TestResponse, "Wallbox test", WallboxStatus)
/// ```
#[macro_export]
macro_rules! stream_post {
    ($model:expr, $request:expr, $response_event:ident, $action:expr, $response_type:ty) => {{
        $model.start_loading();
        match $request.form_body() {
            Ok(body) => crux_core::Command::all([
                crux_core::render::render(),
                $crate::HttpCmd::post($crate::build_url($crate::types::STREAM_ENDPOINT))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body_string(body)
                    .build()
                    .then_send(|result| {
                        let event_result: Result<$response_type, String> =
                            $crate::process_json_response($action, result);
                        $crate::events::Event::$response_event(event_result)
                    }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};
}

/// Macro for handling response events with standard loading state and error
/// handling.
///
/// # Patterns
///
/// Pattern 1: Custom success handling
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
/// })
/// ```
///
/// Pattern 2: Custom success handler + success message
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
///     success_message: "Operation successful",
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    // Pattern 1: Only custom success handler
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};

    // Pattern 2: Custom success handler + success message
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block,
        success_message: $msg:expr $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};
}
