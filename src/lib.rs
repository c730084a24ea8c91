//! zroster: a Zellij plugin for browsing and managing a remote user directory.
//!
//! The plugin fetches a user collection from a REST endpoint, normalizes it
//! into flat records and shows them as a table with:
//! - Per-column filters and a free-text search
//! - Sorting by any column, ascending or descending
//! - Pagination with selectable page size, or infinite scroll
//! - Create, edit and delete dialogs whose requests are reconciled into the
//!   local store when the server replies

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key mapping, web_request, hide_self              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and intents                       │
//! │  - Mutation coordination                            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Pipeline      │   │ Client        │
//! │ (ui/)         │   │ (pipeline/)   │   │ (client/)     │
//! │ - Rendering   │   │ - Filter      │   │ - Requests    │
//! │ - Theming     │   │ - Search/Sort │   │ - Replies     │
//! │ - Components  │   │ - Paginate    │   │ - Trace ctx   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Records, drafts, validation, normalization       │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zroster.wasm" {
//!         endpoint "https://jsonplaceholder.typicode.com/users"
//!         page_size "25"
//!         infinite "false"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zroster::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), zroster::RosterError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod pipeline;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, RosterError};
pub use ui::Theme;

use client::{UserRepository, DEFAULT_ENDPOINT};
use pipeline::{PageSize, PageState};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Collection URL of the user resource.
    pub endpoint: String,

    /// Initial page size.
    pub page_size: PageSize,

    /// Start in infinite-scroll mode.
    pub infinite: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: PageSize::default(),
            infinite: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys take their defaults; invalid values are logged and also
    /// fall back to the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zroster::pipeline::PageSize;
    /// use zroster::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("infinite".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, PageSize::TwentyFive);
    /// assert!(config.infinite);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.endpoint, String::from);

        let page_size = config.get("page_size").map_or(defaults.page_size, |raw| {
            parse_page_size(raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid page_size, using default");
                defaults.page_size
            })
        });

        let infinite = config.get("infinite").map_or(defaults.infinite, |raw| {
            parse_flag(raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid infinite flag, using default");
                defaults.infinite
            })
        });

        Self {
            endpoint,
            page_size,
            infinite,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_page_size(raw: &str) -> Result<PageSize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(PageSize::from_value)
        .ok_or_else(|| RosterError::Config(format!("page_size must be 10, 25, 50 or 100, got {raw:?}")))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(RosterError::Config(format!("expected a boolean, got {raw:?}"))),
    }
}

/// Creates an unmounted `AppState` from configuration.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme
/// that fails to load is logged and replaced by the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing zroster plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let page = PageState {
        size: config.page_size,
        infinite: config.infinite,
        ..PageState::default()
    };

    AppState::new(UserRepository::new(&config.endpoint), page, theme)
}
