//! Zellij plugin wrapper and entry point.
//!
//! Translates Zellij events into library [`Event`]s, runs them through
//! [`handle_event`] and executes the returned [`Action`]s with the Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: request `WebAccess`
//! 3. **Subscribe**: `Key`, `WebRequestResult`, `Timer`, `PermissionRequestResult`
//! 4. **Update**: map events, delegate to the library, execute actions
//! 5. **Render**: library renderer
//!
//! # Keybindings
//!
//! Anywhere:
//! - `Esc`: clear the stack and query
//! - `Ctrl+c`: close the plugin
//!
//! In the input:
//! - printable keys: type
//! - `Backspace`: delete
//! - `Ctrl+u`: clear the line
//! - `Enter`: search
//! - `Tab`/`Down`: browse the stack
//!
//! In the stack:
//! - `j`/`Down`, `k`/`Up`: move
//! - `/`, `i`, `Tab`: back to the input
//! - `Enter`: search the current query again
//! - `q`: close the plugin
//!
//! Host calls only exist inside Zellij, so the plugin itself is compiled for
//! wasm targets only. The event mapping is plain code and builds everywhere.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("jiffy is a Zellij plugin: build it with --target wasm32-wasip1 and load the .wasm from a layout");
}

/// Translation of Zellij input into library events.
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
mod events {
    use jiffy::giphy::parse_context;
    use jiffy::{Event, Focus};
    use std::collections::BTreeMap;
    use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

    /// Maps a key press to an application event for the given focus.
    pub fn map_key(focus: Focus, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('c') => Some(Event::CloseFocus),
                BareKey::Char('u') if focus == Focus::Input => Some(Event::ClearLine),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        if key.bare_key == BareKey::Esc {
            return Some(Event::Clear);
        }

        match focus {
            Focus::Input => match key.bare_key {
                BareKey::Enter => Some(Event::Enter),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Tab | BareKey::Down => Some(Event::FocusResults),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            Focus::Results => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Tab | BareKey::Char('/' | 'i') => Some(Event::FocusInput),
                BareKey::Enter => Some(Event::Enter),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            },
        }
    }

    /// Maps a finished web request to a search completion. Requests this plugin
    /// did not tag are ignored.
    pub fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some((request, term)) = parse_context(context) else {
            tracing::debug!(status = status, "ignoring untagged web request result");
            return None;
        };

        tracing::debug!(request = %request, term = %term, status = status, "web request result");
        Some(Event::SearchCompleted { request, status, body })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use jiffy::giphy::{RequestId, SearchParams, SearchRequest};

        fn key(bare_key: BareKey) -> KeyWithModifier {
            KeyWithModifier::new(bare_key)
        }

        fn ctrl(c: char) -> KeyWithModifier {
            KeyWithModifier::new(BareKey::Char(c)).with_ctrl_modifier()
        }

        #[test]
        fn input_focus_types_letters_that_navigate_elsewhere() {
            assert_eq!(map_key(Focus::Input, &key(BareKey::Char('j'))), Some(Event::Char('j')));
            assert_eq!(map_key(Focus::Input, &key(BareKey::Char('q'))), Some(Event::Char('q')));
            assert_eq!(map_key(Focus::Input, &key(BareKey::Enter)), Some(Event::Enter));
            assert_eq!(map_key(Focus::Input, &key(BareKey::Tab)), Some(Event::FocusResults));
            assert_eq!(map_key(Focus::Input, &ctrl('u')), Some(Event::ClearLine));
        }

        #[test]
        fn alt_chords_are_not_typed() {
            let alt = |c| KeyWithModifier::new(BareKey::Char(c)).with_alt_modifier();
            assert_eq!(map_key(Focus::Input, &alt('x')), None);
            assert_eq!(map_key(Focus::Results, &alt('j')), None);
            assert_eq!(map_key(Focus::Input, &KeyWithModifier::new(BareKey::Char('X'))), Some(Event::Char('X')));
        }

        #[test]
        fn results_focus_navigates() {
            assert_eq!(map_key(Focus::Results, &key(BareKey::Char('j'))), Some(Event::KeyDown));
            assert_eq!(map_key(Focus::Results, &key(BareKey::Up)), Some(Event::KeyUp));
            assert_eq!(map_key(Focus::Results, &key(BareKey::Char('/'))), Some(Event::FocusInput));
            assert_eq!(map_key(Focus::Results, &key(BareKey::Char('q'))), Some(Event::CloseFocus));
            assert_eq!(map_key(Focus::Results, &key(BareKey::Char('x'))), None);
            assert_eq!(map_key(Focus::Results, &ctrl('u')), None);
        }

        #[test]
        fn escape_and_ctrl_c_work_everywhere() {
            for focus in [Focus::Input, Focus::Results] {
                assert_eq!(map_key(focus, &key(BareKey::Esc)), Some(Event::Clear));
                assert_eq!(map_key(focus, &ctrl('c')), Some(Event::CloseFocus));
            }
        }

        #[test]
        fn only_tagged_web_results_complete_searches() {
            let request = SearchRequest::new(RequestId(7), "cats", SearchParams::default());
            assert_eq!(
                map_web_result(200, b"{}".to_vec(), &request.context()),
                Some(Event::SearchCompleted { request: RequestId(7), status: 200, body: b"{}".to_vec() })
            );
            assert_eq!(map_web_result(200, vec![], &BTreeMap::new()), None);
        }
    }
}

#[cfg(target_family = "wasm")]
mod plugin {
    use crate::events::{map_key, map_web_result};
    use jiffy::{handle_event, Action, AppState, Config};
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    /// Plugin state wrapper around the library's [`AppState`].
    pub struct State {
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: jiffy::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            jiffy::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            if config.api_key.is_none() {
                tracing::warn!("no api_key configured; searches will fail");
            }
            self.app = jiffy::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::Timer,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::event_name(&event);
            let span = tracing::debug_span!(
                "plugin_update_event",
                otel.name = %format!("plugin_update::{event_name}"),
                event_type = %event_name
            );
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => map_key(self.app.focus, key),
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    map_web_result(status, body, &context)
                }
                zellij_tile::prelude::Event::Timer(_) => Some(jiffy::Event::Tick),
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    Some(jiffy::Event::PermissionsResult {
                        granted: matches!(status, PermissionStatus::Granted),
                    })
                }
                _ => None,
            };
            let Some(our_event) = our_event else {
                return false;
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render = should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            jiffy::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
                zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
                _ => "Other".to_string(),
            }
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::SendSearch { url, context } => {
                    web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context.clone());
                }
                Action::ScheduleTick(seconds) => set_timeout(*seconds),
                Action::CloseFocus => hide_self(),
            }
        }
    }
}
