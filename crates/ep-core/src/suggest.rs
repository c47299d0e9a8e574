//! Suggestion paths over events a user has not registered for.
//!
//! For each user, every non-empty ordered arrangement of the unregistered
//! events is produced, in depth-first order. With two candidates `A` and `B`
//! the paths are `[A]`, `[A, B]`, `[B]`, `[B, A]`.
//!
//! The number of paths for `n` candidates is the sum of `n!/(n-k)!` for
//! `k = 1..=n`, which grows factorially. [`SuggestionLimits`] bounds the
//! candidate count per user, the total number of paths and the size of the
//! serialized result. Requests over any bound are rejected before any
//! enumeration happens.

use std::collections::HashSet;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Event, User};
use crate::types::{EventId, UserId, ValidationError};
use crate::validation::ensure_unique_events;

/// Suggestion errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// The input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A user has more unregistered events than the limit allows.
    #[error("user {user} has {candidates} unregistered events, limit is {limit}")]
    TooManyCandidates {
        user: UserId,
        candidates: usize,
        limit: usize,
    },

    /// The request would produce more paths than the limit allows.
    #[error("request would produce more than {limit} suggestion paths")]
    PathLimitExceeded { limit: usize },

    /// The serialized result would be larger than the limit allows.
    #[error("request would produce {bytes} bytes of suggestions, limit is {limit}")]
    OutputLimitExceeded { bytes: u64, limit: usize },
}

/// Bounds on the size of a suggestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionLimits {
    /// Maximum unregistered events per user.
    /// Default: 8 (109 600 paths for a single user).
    pub max_candidates: usize,

    /// Maximum paths across all users in one request.
    /// Default: 250 000.
    pub max_paths: usize,

    /// Maximum size of the result as compact JSON, in bytes.
    /// Every path repeats its events in full, so this grows with the
    /// event records themselves and not only with the path count.
    /// Default: 64 MiB.
    pub max_output_bytes: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            max_candidates: 8,
            max_paths: 250_000,
            max_output_bytes: 64 * 1024 * 1024,
        }
    }
}

/// One candidate itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionPath(Vec<Event>);

impl SuggestionPath {
    /// Full event records in path order.
    pub fn events(&self) -> &[Event] {
        &self.0
    }

    /// Event IDs in path order.
    pub fn ids(&self) -> Vec<EventId> {
        self.0.iter().map(|e| e.id).collect()
    }

    /// Paths are never empty; an empty one would be a bug in enumeration.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Suggestion paths for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSuggestions {
    pub user_id: UserId,
    pub paths: Vec<SuggestionPath>,
}

/// Number of non-empty ordered arrangements of `n` distinct items.
///
/// Returns `None` if the count does not fit in a `u64`.
pub fn count_paths(n: usize) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    let mut total = 0_u64;
    let mut arrangements = 1_u64;
    for k in 0..n {
        arrangements = arrangements.checked_mul(n - k)?;
        total = total.checked_add(arrangements)?;
    }
    Some(total)
}

/// Total number of events across all paths for `n` candidates.
///
/// Sum of `k * n!/(n-k)!` for `k = 1..=n`. Each candidate fills exactly
/// `1/n` of these slots. Returns `None` on overflow.
pub fn count_path_slots(n: usize) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    let mut total = 0_u64;
    let mut arrangements = 1_u64;
    for k in 0..n {
        arrangements = arrangements.checked_mul(n - k)?;
        total = total.checked_add(arrangements.checked_mul(k + 1)?)?;
    }
    Some(total)
}

/// Suggestion paths for every user, concatenated in user order.
pub fn suggest(
    events: &[Event],
    users: &[User],
    limits: &SuggestionLimits,
) -> Result<Vec<SuggestionPath>, SuggestionError> {
    Ok(suggest_by_user(events, users, limits)?
        .into_iter()
        .flat_map(|s| s.paths)
        .collect())
}

/// Suggestion paths grouped per user, in user order.
///
/// Users without registration data are skipped and do not appear in the
/// result. Limits are checked for all users before any path is built.
pub fn suggest_by_user(
    events: &[Event],
    users: &[User],
    limits: &SuggestionLimits,
) -> Result<Vec<UserSuggestions>, SuggestionError> {
    ensure_unique_events(events)?;

    let max_paths = u64::try_from(limits.max_paths).unwrap_or(u64::MAX);
    let max_output_bytes = u64::try_from(limits.max_output_bytes).unwrap_or(u64::MAX);
    let mut plans = Vec::with_capacity(users.len());
    let mut expected_paths = 0_u64;
    let mut expected_bytes = 0_u64;
    for user in users {
        let Some(candidates) = candidates_for(events, user) else {
            tracing::debug!(user = %user.id, "no registration data, skipping user");
            continue;
        };
        let paths = checked_path_count(user.id, candidates.len(), limits)?;
        expected_paths = expected_paths.saturating_add(paths);
        if expected_paths > max_paths {
            return Err(SuggestionError::PathLimitExceeded {
                limit: limits.max_paths,
            });
        }
        expected_bytes = expected_bytes.saturating_add(path_bytes(&candidates, paths));
        if expected_bytes > max_output_bytes {
            return Err(SuggestionError::OutputLimitExceeded {
                bytes: expected_bytes,
                limit: limits.max_output_bytes,
            });
        }
        plans.push((user.id, candidates));
    }

    tracing::debug!(
        users = plans.len(),
        paths = expected_paths,
        bytes = expected_bytes,
        "enumerating suggestion paths"
    );

    Ok(plans
        .into_iter()
        .map(|(user_id, candidates)| UserSuggestions {
            user_id,
            paths: enumerate_paths(&candidates),
        })
        .collect())
}

/// Suggestion paths for one user.
///
/// A user without registration data gets no paths.
pub fn suggest_for_user(
    events: &[Event],
    user: &User,
    limits: &SuggestionLimits,
) -> Result<Vec<SuggestionPath>, SuggestionError> {
    suggest(events, std::slice::from_ref(user), limits)
}

/// Events the user has not registered for, in input order.
///
/// Returns `None` when the user carries no registration data.
fn candidates_for<'a>(events: &'a [Event], user: &User) -> Option<Vec<&'a Event>> {
    let registered: HashSet<EventId> = user
        .registered_events
        .as_ref()?
        .iter()
        .map(|r| r.id)
        .collect();

    Some(
        events
            .iter()
            .filter(|e| !registered.contains(&e.id))
            .collect(),
    )
}

fn checked_path_count(
    user: UserId,
    candidates: usize,
    limits: &SuggestionLimits,
) -> Result<u64, SuggestionError> {
    if candidates > limits.max_candidates {
        return Err(SuggestionError::TooManyCandidates {
            user,
            candidates,
            limit: limits.max_candidates,
        });
    }
    count_paths(candidates).ok_or(SuggestionError::PathLimitExceeded {
        limit: limits.max_paths,
    })
}

/// Compact JSON size contributed by one user's paths to the flat result.
///
/// Each path is `[` + events joined by `,` + `]`, followed by a separating
/// `,`. That is `2 + k` punctuation bytes for a path of `k` events, plus the
/// events themselves. The flat list adds one `[` and drops the final `,`,
/// so the totals over all users differ from the exact size by at most one.
fn path_bytes(candidates: &[&Event], paths: u64) -> u64 {
    let Some(n) = u64::try_from(candidates.len()).ok().filter(|&n| n > 0) else {
        return 0;
    };
    let slots = count_path_slots(candidates.len()).unwrap_or(u64::MAX);
    let record_bytes = candidates
        .iter()
        .fold(0_u64, |acc, e| acc.saturating_add(serialized_len(e)));

    // Every candidate sits in slots / n of the slots.
    record_bytes
        .saturating_mul(slots / n)
        .saturating_add(slots)
        .saturating_add(paths.saturating_mul(2))
}

/// Length of an event as compact JSON, without allocating the buffer.
fn serialized_len(event: &Event) -> u64 {
    let mut counter = ByteCounter(0);
    match serde_json::to_writer(&mut counter, event) {
        Ok(()) => counter.0,
        Err(_) => u64::MAX,
    }
}

struct ByteCounter(u64);

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 = self.0.saturating_add(u64::try_from(buf.len()).unwrap_or(u64::MAX));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Depth-first enumeration of every non-empty ordered arrangement.
///
/// `cursors[d]` is the next candidate index to try at depth `d`; `path`
/// holds the candidate indices chosen so far and `used` marks them.
fn enumerate_paths(candidates: &[&Event]) -> Vec<SuggestionPath> {
    let n = candidates.len();
    let mut out = Vec::new();
    let mut used = vec![false; n];
    let mut path: Vec<usize> = Vec::with_capacity(n);
    let mut cursors: Vec<usize> = vec![0];

    while let Some(&start) = cursors.last() {
        if let Some(next) = (start..n).find(|&c| !used[c]) {
            let depth = cursors.len() - 1;
            cursors[depth] = next + 1;
            used[next] = true;
            path.push(next);
            out.push(SuggestionPath(
                path.iter().map(|&c| candidates[c].clone()).collect(),
            ));
            cursors.push(0);
        } else {
            cursors.pop();
            if let Some(last) = path.pop() {
                used[last] = false;
            }
        }
    }

    out
}
