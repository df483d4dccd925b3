//! Leptos Popup Utilities
//!
//! Visibility tracking for modal popups identified by element id.
//! Every show starts a new generation so a delayed dismissal scheduled for an
//! older show never hides a popup that was shown again in the meantime.

use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// When the action attached to a timed dismissal runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    /// Only if the popup was still showing this ticket, e.g. restoring what it displaced
    IfCurrent,
    /// Whenever the timer fires, e.g. a reload after success
    Always,
}

/// Identifies one particular show of a popup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub id: &'static str,
    generation: u64,
}

impl Ticket {
    /// A ticket that matches no show at all
    pub fn unshown(id: &'static str) -> Self {
        Self { id, generation: 0 }
    }
}

/// Plain popup state, independent of any reactive runtime
#[derive(Clone, Debug, Default)]
pub struct PopupBoard {
    /// Visible popups in the order they were shown
    visible: Vec<&'static str>,
    generations: HashMap<&'static str, u64>,
}

impl PopupBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|v| *v == id)
    }

    pub fn visible(&self) -> &[&'static str] {
        &self.visible
    }

    /// Show a popup, leaving the others alone
    pub fn show(&mut self, id: &'static str) -> Ticket {
        let generation = self.generations.entry(id).or_insert(0);
        *generation += 1;
        let ticket = Ticket { id, generation: *generation };
        if !self.is_visible(id) {
            self.visible.push(id);
        }
        ticket
    }

    /// Show a popup and hide every other one.
    /// Returns the popups that were displaced, oldest first.
    pub fn show_exclusive(&mut self, id: &'static str) -> (Ticket, Vec<&'static str>) {
        let displaced: Vec<&'static str> = self.visible.iter().copied().filter(|v| *v != id).collect();
        self.visible.retain(|v| *v == id);
        (self.show(id), displaced)
    }

    pub fn hide(&mut self, id: &str) {
        self.visible.retain(|v| *v != id);
    }

    /// Hide the popup only if `ticket` is still its latest show.
    /// Returns whether anything was hidden.
    pub fn hide_if_current(&mut self, ticket: Ticket) -> bool {
        let current = self.generations.get(ticket.id).copied().unwrap_or(0);
        if current != ticket.generation || !self.is_visible(ticket.id) {
            return false;
        }
        self.hide(ticket.id);
        true
    }

    /// Timer expiry for `ticket`: hides it if still current and returns
    /// whether the attached action should run
    pub fn dismiss(&mut self, ticket: Ticket, when: Dismissal) -> bool {
        let hidden = self.hide_if_current(ticket);
        hidden || when == Dismissal::Always
    }

    /// Bring back the most recent displaced popup, but only onto an empty board
    pub fn restore(&mut self, displaced: &[&'static str]) -> Option<Ticket> {
        if !self.visible.is_empty() {
            return None;
        }
        displaced.last().map(|id| self.show(id))
    }
}

/// Reactive handle over a [`PopupBoard`]
#[derive(Clone, Copy)]
pub struct Popups {
    board: RwSignal<PopupBoard>,
}

impl Popups {
    pub fn new() -> Self {
        Self { board: RwSignal::new(PopupBoard::new()) }
    }

    /// Tracked visibility check for use in views
    pub fn is_visible(&self, id: &'static str) -> bool {
        self.board.with(|b| b.is_visible(id))
    }

    pub fn show_exclusive(&self, id: &'static str) -> (Ticket, Vec<&'static str>) {
        let mut shown = (Ticket::unshown(id), Vec::new());
        self.board.update(|b| shown = b.show_exclusive(id));
        shown
    }

    pub fn hide(&self, id: &'static str) {
        self.board.update(|b| b.hide(id));
    }

    pub fn restore(&self, displaced: Vec<&'static str>) {
        if displaced.is_empty() {
            return;
        }
        self.board.update(|b| {
            b.restore(&displaced);
        });
    }

    /// Expire `ticket` right away; see [`PopupBoard::dismiss`]
    pub fn dismiss_now(&self, ticket: Ticket, when: Dismissal) -> bool {
        self.board.try_update(|b| b.dismiss(ticket, when)).unwrap_or(false)
    }

    /// Hide the popup after `delay_ms` unless it was shown again meanwhile,
    /// then run `then` as `when` allows
    pub fn dismiss_after(self, ticket: Ticket, delay_ms: u32, when: Dismissal, then: impl FnOnce() + 'static) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if self.dismiss_now(ticket, when) {
                then();
            }
        });
    }
}

impl Default for Popups {
    fn default() -> Self {
        Self::new()
    }
}
