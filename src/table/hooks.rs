//! Enter/exit lifecycle hooks.
//!
//! Every state kind may carry up to three forms of each hook, tried in a
//! fixed order until one is found:
//!
//! 1. peer-aware, registered for one specific peer kind;
//! 2. peer-aware, for any peer;
//! 3. plain, receiving only the state itself.
//!
//! For an exit hook the peer is the incoming state; for an enter hook it is
//! the outgoing state (or the state itself at construction).

use crate::core::State;
use crate::table::error::BuildError;
use std::collections::HashMap;
use std::fmt;

/// Plain hook: `(context, state)`.
pub type HookFn<S, C> = Box<dyn FnMut(&mut C, &S) + Send>;

/// Peer-aware hook: `(context, state, peer)`.
pub type PeerHookFn<S, C> = Box<dyn FnMut(&mut C, &S, &S) + Send>;

/// Which side of a state change a hook belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Enter,
    Exit,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("enter"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

/// Which registered form a hook resolution picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HookForm {
    PeerKind,
    Peer,
    Plain,
}

pub(crate) struct HookChain<S: State, C> {
    lifecycle: Lifecycle,
    peer_kind: HashMap<(S::Kind, S::Kind), PeerHookFn<S, C>>,
    peer: HashMap<S::Kind, PeerHookFn<S, C>>,
    plain: HashMap<S::Kind, HookFn<S, C>>,
}

impl<S: State, C> HookChain<S, C> {
    pub(crate) fn new(lifecycle: Lifecycle) -> Self {
        Self {
            lifecycle,
            peer_kind: HashMap::new(),
            peer: HashMap::new(),
            plain: HashMap::new(),
        }
    }

    pub(crate) fn insert_peer_kind(
        &mut self,
        state: S::Kind,
        peer: S::Kind,
        hook: PeerHookFn<S, C>,
    ) -> Result<(), BuildError> {
        match self.peer_kind.insert((state, peer), hook) {
            Some(_) => Err(self.duplicate(format!("{state:?} with peer {peer:?}"))),
            None => Ok(()),
        }
    }

    pub(crate) fn insert_peer(
        &mut self,
        state: S::Kind,
        hook: PeerHookFn<S, C>,
    ) -> Result<(), BuildError> {
        match self.peer.insert(state, hook) {
            Some(_) => Err(self.duplicate(format!("{state:?} with any peer"))),
            None => Ok(()),
        }
    }

    pub(crate) fn insert_plain(
        &mut self,
        state: S::Kind,
        hook: HookFn<S, C>,
    ) -> Result<(), BuildError> {
        match self.plain.insert(state, hook) {
            Some(_) => Err(self.duplicate(format!("{state:?}"))),
            None => Ok(()),
        }
    }

    fn duplicate(&self, key: String) -> BuildError {
        BuildError::DuplicateHook {
            lifecycle: self.lifecycle,
            key,
        }
    }

    /// Run the highest-priority hook registered for `state`, if any.
    pub(crate) fn fire(&mut self, context: &mut C, state: &S, peer: &S) -> Option<HookForm> {
        let kind = state.kind();
        if let Some(hook) = self.peer_kind.get_mut(&(kind, peer.kind())) {
            hook(context, state, peer);
            return Some(HookForm::PeerKind);
        }
        if let Some(hook) = self.peer.get_mut(&kind) {
            hook(context, state, peer);
            return Some(HookForm::Peer);
        }
        if let Some(hook) = self.plain.get_mut(&kind) {
            hook(context, state);
            return Some(HookForm::Plain);
        }
        None
    }

    pub(crate) fn len(&self) -> usize {
        self.peer_kind.len() + self.peer.len() + self.plain.len()
    }
}

/// Enter and exit chains for every state kind.
pub(crate) struct Hooks<S: State, C> {
    pub(crate) enter: HookChain<S, C>,
    pub(crate) exit: HookChain<S, C>,
}

impl<S: State, C> Hooks<S, C> {
    pub(crate) fn new() -> Self {
        Self {
            enter: HookChain::new(Lifecycle::Enter),
            exit: HookChain::new(Lifecycle::Exit),
        }
    }
}
