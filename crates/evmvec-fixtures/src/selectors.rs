//! Bounded brute-force probe for 4-byte selector collisions.
//!
//! Walks two signature families in lockstep, accumulating selector maps
//! for each, and stops at the first cross-family collision. The iteration
//! cap bounds the walk: exhausting it reports
//! [`FixtureError::CollisionNotFound`] rather than looping forever.

use std::collections::HashMap;

use evmvec_core::Selector;

use crate::error::FixtureError;

/// Default iteration cap for the probe.
pub const DEFAULT_CAP: u64 = 5_000_000;

/// A cross-family selector collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCollision {
    pub selector: Selector,
    /// The colliding signature from the first family.
    pub signature_a: String,
    /// The colliding signature from the second family.
    pub signature_b: String,
}

/// Probe the `proxy{i}(uint256)` / `implementation{i}()` families.
pub fn find_collision(cap: u64) -> Result<SelectorCollision, FixtureError> {
    find_collision_with(
        |i| format!("proxy{i}(uint256)"),
        |i| format!("implementation{i}()"),
        cap,
    )
}

/// Probe two arbitrary signature families for a cross-family collision.
///
/// Collisions within a single family are not reported; the downstream
/// test needs two *different* function declarations that share a
/// selector.
pub fn find_collision_with(
    mut family_a: impl FnMut(u64) -> String,
    mut family_b: impl FnMut(u64) -> String,
    cap: u64,
) -> Result<SelectorCollision, FixtureError> {
    let mut seen_a: HashMap<Selector, String> = HashMap::new();
    let mut seen_b: HashMap<Selector, String> = HashMap::new();

    for i in 0..cap {
        let signature_a = family_a(i);
        let signature_b = family_b(i);
        let selector_a = Selector::from_signature(&signature_a);
        let selector_b = Selector::from_signature(&signature_b);

        if let Some(existing) = seen_a.get(&selector_b) {
            return Ok(SelectorCollision {
                selector: selector_b,
                signature_a: existing.clone(),
                signature_b,
            });
        }
        if let Some(existing) = seen_b.get(&selector_a) {
            return Ok(SelectorCollision {
                selector: selector_a,
                signature_a,
                signature_b: existing.clone(),
            });
        }

        seen_a.insert(selector_a, signature_a);
        seen_b.insert(selector_b, signature_b);
    }

    Err(FixtureError::CollisionNotFound { attempts: cap })
}
