//! Application host.
//!
//! [`App`] wires the initial state, the view, the subscriptions, and a mount
//! target together and owns the dispatch loop:
//!
//! ```text
//! browser event -> subscription -> action -> update -> state -> view -> mount
//!                                     ^                  |
//!                                     +---- effect <-----+
//! ```
//!
//! The loop is synchronous. Each call to [`App::dispatch`] processes the
//! action and everything its effects feed back, then renders once.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::action::{self, Action, Transition};
use crate::effect::{Effect, EffectResult};
use crate::error::HostError;
use crate::render::Mount;
use crate::site::Site;
use crate::state::{AppOptions, State};
use crate::subscription::{EventReceiver, Subscriptions};
use crate::view::view;

/// The environment the application runs in.
pub trait Platform {
    /// Current path and query, as the address bar shows it.
    fn current_url(&self) -> String;

    /// Run an effect and report what happened.
    fn run_effect(&mut self, effect: &Effect) -> EffectResult;
}

/// A mounted application.
pub struct App<P, M> {
    site: Site,
    state: State,
    platform: P,
    mount: M,
    subscriptions: Subscriptions,
}

impl<P: Platform, M: Mount> App<P, M> {
    /// Start the application.
    ///
    /// Parses the platform's current URL, runs the init effects, starts both
    /// subscriptions on `events`, and renders into `mount`.
    pub fn mount(
        site: Site,
        options: &AppOptions,
        platform: P,
        mount: M,
        events: EventReceiver,
    ) -> Result<Self, HostError> {
        let url = platform.current_url();
        info!(target_id = mount.target_id(), %url, "Mounting application");

        let Transition { state, effects } = action::init(options, &url);
        let mut app = Self {
            site,
            state,
            platform,
            mount,
            subscriptions: Subscriptions::start(events),
        };

        let follow_ups = app.run_effects(&effects);
        app.process(follow_ups);
        app.render()?;
        Ok(app)
    }

    /// Dispatch an action and render the result.
    pub fn dispatch(&mut self, action: Action) -> Result<(), HostError> {
        self.process(VecDeque::from([action]));
        self.render()
    }

    /// Dispatch every pending browser event except batched scrolls.
    ///
    /// Returns the number of actions dispatched.
    pub fn pump(&mut self) -> Result<usize, HostError> {
        let actions = self.subscriptions.poll();
        if actions.is_empty() {
            return Ok(0);
        }
        let count = actions.len();
        self.process(actions.into());
        self.render()?;
        Ok(count)
    }

    /// Animation-frame tick: dispatch the batched scroll, if any.
    ///
    /// Returns whether a scroll was dispatched.
    pub fn frame(&mut self) -> Result<bool, HostError> {
        match self.subscriptions.frame() {
            Some(action) => {
                self.dispatch(action)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stop the subscriptions and release the platform and mount target.
    pub fn unmount(mut self) -> (P, M) {
        self.subscriptions.stop();
        info!(target_id = self.mount.target_id(), "Unmounted application");
        (self.platform, self.mount)
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn target(&self) -> &M {
        &self.mount
    }

    /// Whether the subscriptions are running.
    pub fn is_listening(&self) -> bool {
        self.subscriptions.is_active()
    }

    /// Apply queued actions in order, appending effect follow-ups.
    fn process(&mut self, mut queue: VecDeque<Action>) {
        while let Some(action) = queue.pop_front() {
            debug!(action = action.name(), "Dispatch");
            let Transition { state, effects } = action::update(&self.state, action);
            self.state = state;
            queue.extend(self.run_effects(&effects));
        }
    }

    fn run_effects(&mut self, effects: &[Effect]) -> VecDeque<Action> {
        effects
            .iter()
            .filter_map(|effect| {
                debug!(effect = effect.name(), "Run effect");
                let result = self.platform.run_effect(effect);
                effect.follow_up(result)
            })
            .collect()
    }

    fn render(&mut self) -> Result<(), HostError> {
        trace!(state = ?self.state, "Render");
        let tree = view(&self.state, &self.site);
        let changed = self.mount.patch(&tree)?;
        debug!(changed, route = ?self.state.route, "Patched mount target");
        Ok(())
    }
}

/// A [`Platform`] without a browser.
///
/// Tracks a scroll offset, records every effect it runs, and logs
/// highlighting requests instead of performing them.
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    url: String,
    scroll_y: f64,
    executed: Vec<Effect>,
}

impl HeadlessPlatform {
    /// Platform whose address bar shows `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Start scrolled to `y`.
    #[must_use]
    pub fn with_scroll(mut self, y: f64) -> Self {
        self.scroll_y = y;
        self
    }

    /// Effects run so far, in order.
    pub fn executed(&self) -> &[Effect] {
        &self.executed
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

impl Platform for HeadlessPlatform {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn run_effect(&mut self, effect: &Effect) -> EffectResult {
        self.executed.push(effect.clone());
        match effect {
            Effect::Highlight { selector } => {
                debug!(selector, "Syntax highlighting skipped without a browser");
                EffectResult::Done
            }
            Effect::ScrollToTop => {
                self.scroll_y = 0.0;
                EffectResult::Scrolled { y: 0.0 }
            }
            Effect::ReadScroll => EffectResult::Scrolled { y: self.scroll_y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ScrollPayload;
    use crate::location::Route;
    use crate::render::HtmlMount;
    use crate::subscription::{BrowserEvent, EventSender, event_channel};
    use pretty_assertions::assert_eq;

    fn mount_at(url: &str) -> (App<HeadlessPlatform, HtmlMount>, EventSender) {
        mount_with(HeadlessPlatform::new(url))
    }

    fn mount_with(platform: HeadlessPlatform) -> (App<HeadlessPlatform, HtmlMount>, EventSender) {
        let (tx, rx) = event_channel();
        let app = App::mount(
            Site::new("Hyperapp", "2.0.4"),
            &AppOptions::default(),
            platform,
            HtmlMount::new("app-container").unwrap(),
            rx,
        )
        .unwrap();
        (app, tx)
    }

    #[test]
    fn test_mount_parses_initial_url() {
        let (app, _tx) = mount_at("/reference?x=5");
        assert_eq!(app.state().location.path, "/reference");
        assert_eq!(app.state().location.query["x"], "5");
        assert_eq!(app.state().route, Route::Reference);
        assert!(app.is_listening());
    }

    #[test]
    fn test_mount_renders_once_and_runs_init_effects() {
        let (app, _tx) = mount_at("/");
        assert_eq!(app.target().patches(), 1);
        assert!(app.target().html().starts_with(r#"<div id="top" class="app">"#));
        assert_eq!(
            app.platform().executed(),
            [Effect::ReadScroll, Effect::highlight()]
        );
    }

    #[test]
    fn test_mount_picks_up_restored_scroll() {
        let (app, _tx) = mount_with(HeadlessPlatform::new("/tutorial").with_scroll(300.0));
        assert!(app.state().viewport.scrolled);
        assert!(app.target().html().contains("site-header scrolled"));
    }

    #[test]
    fn test_initial_reference_marks_reference_link_active() {
        let (app, _tx) = mount_at("/reference?x=5");
        let html = app.target().html();
        assert!(html.contains(r#"<a class="active" href="/reference">Reference</a>"#));
        assert!(html.contains(r#"<a href="/">Quickstart</a>"#));
        assert!(html.contains(r#"<a href="/tutorial">Tutorial</a>"#));
    }

    #[test]
    fn test_unknown_path_mounts_not_found() {
        let (app, _tx) = mount_at("/does-not-exist");
        assert_eq!(app.state().route, Route::NotFound);
        assert!(app.target().html().contains("four-oh-four-page"));
    }

    #[test]
    fn test_menu_round_trip_through_dispatch() {
        let (mut app, _tx) = mount_at("/");
        let before = app.target().html().to_owned();

        app.dispatch(Action::OpenMenu).unwrap();
        assert!(app.state().menu_opened);
        assert!(app.target().html().contains("app noBodyScroll"));

        app.dispatch(Action::CloseMenu).unwrap();
        assert!(!app.state().menu_opened);
        assert_eq!(app.target().html(), before);
        assert_eq!(app.target().patches(), 3);
    }

    #[test]
    fn test_pop_state_navigates_and_scrolls_to_top() {
        let (mut app, tx) = mount_with(HeadlessPlatform::new("/").with_scroll(500.0));
        assert!(app.state().viewport.scrolled);

        tx.send(BrowserEvent::PopState {
            url: "/tutorial".to_owned(),
        });
        assert_eq!(app.pump().unwrap(), 1);

        assert_eq!(app.state().route, Route::Tutorial);
        assert!(!app.state().viewport.scrolled);
        assert!((app.platform().scroll_y()).abs() < f64::EPSILON);
        assert_eq!(
            &app.platform().executed()[2..],
            [Effect::ScrollToTop, Effect::highlight()]
        );
    }

    #[test]
    fn test_pop_state_query_reaches_search() {
        let (mut app, tx) = mount_at("/reference?page=2");
        tx.send(BrowserEvent::PopState {
            url: "/reference?q=x".to_owned(),
        });
        app.pump().unwrap();

        assert_eq!(app.state().search["q"], "x");
        assert_eq!(app.state().search["page"], "2");
        assert_eq!(app.state().location.query.get("page"), None);
    }

    #[test]
    fn test_scroll_events_wait_for_frame() {
        let (mut app, tx) = mount_at("/");
        tx.send(BrowserEvent::Scroll { y: 5.0 });
        tx.send(BrowserEvent::Scroll { y: 80.0 });

        assert_eq!(app.pump().unwrap(), 0);
        assert!(!app.state().viewport.scrolled);

        assert!(app.frame().unwrap());
        assert!(app.state().viewport.scrolled);
        assert!(!app.frame().unwrap());
        assert_eq!(app.target().patches(), 2);
    }

    #[test]
    fn test_dispatch_without_visible_change_does_not_patch() {
        let (mut app, _tx) = mount_at("/");
        app.dispatch(Action::WindowScroll(ScrollPayload { y: 3.0 }))
            .unwrap();
        assert_eq!(app.target().patches(), 1);
    }

    #[test]
    fn test_unmount_stops_subscriptions() {
        let (app, tx) = mount_at("/");
        let (platform, mount) = app.unmount();
        assert!(!tx.send(BrowserEvent::Scroll { y: 1.0 }));
        assert_eq!(platform.executed().len(), 2);
        assert_eq!(mount.patches(), 1);
    }
}
