//! State, routing, and view composition for the documentation site.
//!
//! The site is a single-page application with a unidirectional data flow:
//!
//! - [`Location::parse`] turns a URL into a path, a query map, and a [`Route`]
//! - [`update`] applies an [`Action`] to the [`State`] and returns the
//!   [`Effect`]s to run
//! - [`view`] maps the state to a [`VNode`] tree
//! - [`App`] owns the loop, feeding browser events in through
//!   [`Subscriptions`] and patching a [`Mount`] after every cycle
//!
//! Page bodies are pre-rendered at build time by `docsite-content` and carried
//! as [`TrustedHtml`].
//!
//! # Example
//!
//! ```
//! use docsite_app::{App, AppOptions, HeadlessPlatform, HtmlMount, Route, Site, event_channel};
//!
//! let (_events, receiver) = event_channel();
//! let app = App::mount(
//!     Site::new("Hyperapp", "2.0.4"),
//!     &AppOptions::default(),
//!     HeadlessPlatform::new("/reference?x=5"),
//!     HtmlMount::new("app-container").unwrap(),
//!     receiver,
//! )
//! .unwrap();
//!
//! assert_eq!(app.state().route, Route::Reference);
//! assert!(app.target().html().contains("reference-page"));
//! ```

mod action;
mod effect;
mod error;
mod host;
mod location;
mod render;
mod site;
mod state;
mod subscription;
pub mod view;
mod vnode;

pub use action::{Action, ScrollPayload, Transition, init, update};
pub use effect::{Effect, EffectResult, HIGHLIGHT_SELECTOR};
pub use error::{HostError, MountError};
pub use host::{App, HeadlessPlatform, Platform};
pub use location::{Location, Query, Route, parse_query};
pub use render::{DocumentHead, HtmlMount, Mount, document, escape_html, render_html};
pub use site::{Content, SectionContent, Site};
pub use state::{AppOptions, DEFAULT_SHADOW_THRESHOLD, State, Viewport};
pub use subscription::{
    BrowserEvent, EventReceiver, EventSender, ScrollBatcher, Subscription, Subscriptions,
    event_channel,
};
pub use view::view;
pub use vnode::{Element, EventKind, TrustedHtml, VNode, el, text};
