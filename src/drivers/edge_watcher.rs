//! Debounced two-state button watcher.
//!
//! ## Hardware
//!
//! Momentary switch on one input line. The edge source is armed for exactly
//! one direction at a time; every accepted edge flips the armed direction,
//! so press and release strictly alternate.
//!
//! ## Acceptance
//!
//! | Condition                                   | Verdict                        |
//! |---------------------------------------------|--------------------------------|
//! | Edge matches armed direction, quiet elapsed | `Accepted(Pressed / Released)` |
//! | Edge in the other direction                 | `Ignored(WrongDirection)`      |
//! | Within the quiet period of the last accept  | `Ignored(WithinQuietPeriod)`   |
//!
//! Which edge counts as "pressed" depends on pull-up vs pull-down wiring and
//! is set by [`Polarity`].

use core::time::Duration;

use crate::events::{Edge, EdgeEvent};

/// Button transitions reported to the serial peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Pressed,
    Released,
}

/// Maps edge direction to button meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pull-down wiring: the line rises when pressed.
    #[default]
    RisingIsPress,
    /// Pull-up wiring: the line falls when pressed.
    FallingIsPress,
}

impl Polarity {
    pub const fn press_edge(self) -> Edge {
        match self {
            Self::RisingIsPress => Edge::Rising,
            Self::FallingIsPress => Edge::Falling,
        }
    }

    pub fn action_for(self, edge: Edge) -> ButtonAction {
        if edge == self.press_edge() {
            ButtonAction::Pressed
        } else {
            ButtonAction::Released
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Edge arrived for the direction that is not armed.
    WrongDirection,
    /// Edge arrived before the quiet period after the last accept elapsed.
    WithinQuietPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeVerdict {
    Accepted(ButtonAction),
    Ignored(IgnoreReason),
}

/// Running counters, reported at shutdown. Saturate at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeStats {
    pub presses: u32,
    pub releases: u32,
    pub ignored: u32,
}

pub struct EdgeWatcher {
    polarity: Polarity,
    quiet: Duration,
    armed: Edge,
    last_accepted: Option<Duration>,
    stats: EdgeStats,
}

impl EdgeWatcher {
    /// Starts armed for the press edge.
    pub fn new(polarity: Polarity, quiet: Duration) -> Self {
        Self {
            polarity,
            quiet,
            armed: polarity.press_edge(),
            last_accepted: None,
            stats: EdgeStats::default(),
        }
    }

    /// Direction the edge source should currently watch.
    pub fn armed(&self) -> Edge {
        self.armed
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn stats(&self) -> EdgeStats {
        self.stats
    }

    /// Classify one edge and, if accepted, flip the armed direction.
    pub fn on_edge(&mut self, event: EdgeEvent) -> EdgeVerdict {
        if event.edge != self.armed {
            self.stats.ignored = self.stats.ignored.saturating_add(1);
            return EdgeVerdict::Ignored(IgnoreReason::WrongDirection);
        }

        if let Some(last) = self.last_accepted {
            if event.at.saturating_sub(last) < self.quiet {
                self.stats.ignored = self.stats.ignored.saturating_add(1);
                return EdgeVerdict::Ignored(IgnoreReason::WithinQuietPeriod);
            }
        }

        self.last_accepted = Some(event.at);
        self.armed = event.edge.opposite();

        let action = self.polarity.action_for(event.edge);
        let counter = match action {
            ButtonAction::Pressed => &mut self.stats.presses,
            ButtonAction::Released => &mut self.stats.releases,
        };
        *counter = counter.saturating_add(1);
        EdgeVerdict::Accepted(action)
    }
}
