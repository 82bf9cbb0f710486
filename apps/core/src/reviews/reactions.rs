//! Like/dislike reaction state.
//!
//! The transition itself is a pure function; `ReactionState` layers the
//! optimistic-update bookkeeping on top: counters change before the
//! network confirms, a pending marker records that a reconcile is owed,
//! and server-confirmed counts overwrite local state on success and on
//! failure alike, so counters cannot drift after a failed request.

use crate::models::review::{ReactionKind, Review};

/// Result of one toggle press, expressed as counter deltas so the caller
/// can apply it atomically — a like never transiently coexists with the
/// dislike it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub new_reaction: Option<ReactionKind>,
    pub like_delta: i64,
    pub dislike_delta: i64,
}

/// The reaction state machine:
/// pressing the current reaction clears it; pressing the opposite one
/// switches in a single step; pressing with no current reaction sets it.
pub fn toggle_transition(
    current: Option<ReactionKind>,
    requested: ReactionKind,
) -> ReactionTransition {
    let (new_reaction, like_delta, dislike_delta) = match current {
        Some(existing) if existing == requested => match requested {
            ReactionKind::Like => (None, -1, 0),
            ReactionKind::Dislike => (None, 0, -1),
        },
        Some(_) => match requested {
            ReactionKind::Like => (Some(ReactionKind::Like), 1, -1),
            ReactionKind::Dislike => (Some(ReactionKind::Dislike), -1, 1),
        },
        None => match requested {
            ReactionKind::Like => (Some(ReactionKind::Like), 1, 0),
            ReactionKind::Dislike => (Some(ReactionKind::Dislike), 0, 1),
        },
    };
    ReactionTransition {
        new_reaction,
        like_delta,
        dislike_delta,
    }
}

/// Per-review optimistic reaction counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionState {
    pub likes: i64,
    pub dislikes: i64,
    pub user_reaction: Option<ReactionKind>,
    pending: bool,
}

impl ReactionState {
    pub fn new(likes: i64, dislikes: i64, user_reaction: Option<ReactionKind>) -> Self {
        ReactionState {
            likes,
            dislikes,
            user_reaction,
            pending: false,
        }
    }

    pub fn from_review(review: &Review) -> Self {
        Self::new(review.likes, review.dislikes, review.user_reaction)
    }

    /// Applies a toggle press to the local counters, before the network
    /// call resolves. A second press while one is still in flight computes
    /// from this latest local state, never from a stale server snapshot.
    pub fn press(&mut self, requested: ReactionKind) -> ReactionTransition {
        let transition = toggle_transition(self.user_reaction, requested);
        self.likes += transition.like_delta;
        self.dislikes += transition.dislike_delta;
        self.user_reaction = transition.new_reaction;
        self.pending = true;
        transition
    }

    /// True while at least one press has not been reconciled yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Overwrites local state with server-confirmed counts. Call this on
    /// success and on failure — after a failed request the server truth
    /// replaces whatever the optimistic press did.
    pub fn reconcile(
        &mut self,
        likes: i64,
        dislikes: i64,
        user_reaction: Option<ReactionKind>,
    ) {
        self.likes = likes;
        self.dislikes = dislikes;
        self.user_reaction = user_reaction;
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_like_only_increments_likes() {
        let t = toggle_transition(None, ReactionKind::Like);
        assert_eq!(t.new_reaction, Some(ReactionKind::Like));
        assert_eq!((t.like_delta, t.dislike_delta), (1, 0));
    }

    #[test]
    fn test_repeat_press_clears_reaction() {
        // Toggling twice returns to origin.
        let first = toggle_transition(None, ReactionKind::Like);
        let second = toggle_transition(first.new_reaction, ReactionKind::Like);
        assert_eq!(second.new_reaction, None);
        assert_eq!((second.like_delta, second.dislike_delta), (-1, 0));
    }

    #[test]
    fn test_switch_moves_one_vote_atomically() {
        let t = toggle_transition(Some(ReactionKind::Like), ReactionKind::Dislike);
        assert_eq!(t.new_reaction, Some(ReactionKind::Dislike));
        assert_eq!((t.like_delta, t.dislike_delta), (-1, 1));
    }

    #[test]
    fn test_dislike_mirror_cases() {
        let set = toggle_transition(None, ReactionKind::Dislike);
        assert_eq!((set.like_delta, set.dislike_delta), (0, 1));
        let clear = toggle_transition(Some(ReactionKind::Dislike), ReactionKind::Dislike);
        assert_eq!((clear.like_delta, clear.dislike_delta), (0, -1));
        let switch = toggle_transition(Some(ReactionKind::Dislike), ReactionKind::Like);
        assert_eq!((switch.like_delta, switch.dislike_delta), (1, -1));
    }

    #[test]
    fn test_press_updates_local_counters_immediately() {
        let mut state = ReactionState::new(10, 2, None);
        state.press(ReactionKind::Like);
        assert_eq!(state.likes, 11);
        assert!(state.is_pending());
    }

    #[test]
    fn test_second_press_uses_latest_local_state() {
        // Like then dislike before the first request resolves: the second
        // press must see the optimistic LIKE, not the server's None.
        let mut state = ReactionState::new(10, 2, None);
        state.press(ReactionKind::Like);
        state.press(ReactionKind::Dislike);
        assert_eq!(state.likes, 10);
        assert_eq!(state.dislikes, 3);
        assert_eq!(state.user_reaction, Some(ReactionKind::Dislike));
    }

    #[test]
    fn test_reconcile_overwrites_and_clears_pending() {
        let mut state = ReactionState::new(10, 2, None);
        state.press(ReactionKind::Like);
        // Server rejected the mutation; its truth wins.
        state.reconcile(10, 2, None);
        assert_eq!(state.likes, 10);
        assert_eq!(state.user_reaction, None);
        assert!(!state.is_pending());
    }
}
