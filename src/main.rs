//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zroster library and
//! the Zellij plugin system: it translates host events into library events and
//! library actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Mount**: Once web access is granted, fetch the user list
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → [`zroster::app::map_key`] for the current input mode
//! - `WebRequestResult` → `Event::RepositoryReply`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Action Mapping
//!
//! - `Action::Fetch` → `web_request` with the call's context map
//! - `Action::CloseFocus` → `hide_self`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zroster::client::{Method, RepositoryCall};
use zroster::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zroster::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zroster::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests web access and subscribes to events.
    ///
    /// The list is not fetched until the permission result arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zroster::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size.get(), "parsed configuration");
        self.app = zroster::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the plugin UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                match zroster::app::map_key(self.app.input_mode, key) {
                    Some(event) => event,
                    None => {
                        tracing::trace!(bare_key = ?key.bare_key, "unbound key");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::RepositoryReply {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Event::PermissionsResult {
                    granted: matches!(permissions, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zroster::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(call) => Self::send(call),
        }
    }

    fn send(call: &RepositoryCall) {
        let verb = match call.method {
            Method::Get => HttpVerb::Get,
            Method::Post => HttpVerb::Post,
            Method::Put => HttpVerb::Put,
            Method::Delete => HttpVerb::Delete,
        };
        tracing::debug!(
            method = call.method.as_str(),
            url = %call.url,
            ticket = call.tag.ticket,
            "issuing web request"
        );
        web_request(&call.url, verb, call.headers.clone(), call.body.clone(), call.context());
    }
}
