//! Route guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route subtree applies the same gate: wait until the
//! session store has rehydrated, then either admit the visitor or replace the
//! current route with a redirect. `components::guards` renders on top of the
//! phase signal installed here.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function of the session snapshot. `install_guard`
//! runs it inside an `Effect` that tracks the store, so the decision is made
//! on the first run after `initialized` flips rather than after a fixed
//! delay. Once a guard leaves `Pending` it stays put for the life of the
//! mount; the effect is owned by the guard component and dies with it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Role, Session};
use crate::state::session_store::SessionStore;

/// Which signed-in users a guard admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleRequirement {
    Any,
    Only(Role),
}

impl RoleRequirement {
    pub fn admits(self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::Only(required) => required == role,
        }
    }
}

/// Lifecycle of one guard mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Pending,
    Authorized,
    Unauthorized,
}

impl GuardPhase {
    /// Apply a decision. Terminal phases never change again.
    #[must_use]
    pub fn advance(self, decision: &GuardDecision) -> Self {
        match (self, decision) {
            (Self::Pending, GuardDecision::Wait) => Self::Pending,
            (Self::Pending, GuardDecision::Allow) => Self::Authorized,
            (Self::Pending, GuardDecision::Redirect(_)) => Self::Unauthorized,
            (settled, _) => settled,
        }
    }
}

/// Outcome of evaluating one session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not rehydrated yet.
    Wait,
    Allow,
    /// Replace the current route with this path.
    Redirect(String),
}

/// Decide what a guard does with `session`.
///
/// Signed-out visitors go to `fallback`. Signed-in visitors with the wrong
/// role go to their own dashboard.
pub fn evaluate(session: &Session, requirement: RoleRequirement, fallback: &str) -> GuardDecision {
    if !session.initialized {
        return GuardDecision::Wait;
    }
    let Some(signed_in) = &session.signed_in else {
        return GuardDecision::Redirect(fallback.to_owned());
    };
    let role = signed_in.identity.role;
    if requirement.admits(role) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(role.dashboard_root().to_owned())
    }
}

/// Navigation options for guard redirects: replace, so the denied route
/// does not stay in history.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Install the guard effect and return its phase signal.
///
/// The effect re-runs whenever the session changes until the phase settles.
/// Redirects go through `navigate` with `redirect_options()`.
pub fn install_guard<F>(
    store: SessionStore,
    requirement: RoleRequirement,
    fallback: String,
    navigate: F,
) -> ReadSignal<GuardPhase>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let (phase, set_phase) = signal(GuardPhase::Pending);
    Effect::new(move || {
        let session = store.session();
        let current = phase.get_untracked();
        if current != GuardPhase::Pending {
            return;
        }
        let decision = evaluate(&session, requirement, &fallback);
        let next = current.advance(&decision);
        if next != current {
            set_phase.set(next);
        }
        // Navigating may unmount this guard, so it goes last.
        if let GuardDecision::Redirect(target) = &decision {
            log::debug!("guard {requirement:?} redirecting to {target}");
            navigate(target, redirect_options());
        }
    });
    phase
}
