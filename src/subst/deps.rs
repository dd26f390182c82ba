//! Dependency ordering for simultaneous bindings.
//!
//! A binding whose replacement references another binding's name must be
//! applied first, so the later binding rewrites the reference it introduced.
//! For `{a: b + 1, b: 2}` the order is `a` then `b`: applying `a` plants a
//! `b` in the tree, and applying `b` afterwards resolves both that one and
//! any original `b`.

use crate::errors::SigilError;
use crate::subst::Binding;

/// Computes the application order for a batch of bindings as indices into
/// `bindings`, or fails with [`SigilError::Cycle`] naming the participants.
///
/// Ties between independent bindings are broken by original insertion order
/// for determinism. A self-referential binding is always a cycle.
pub(crate) fn order_bindings(bindings: &[Binding]) -> Result<Vec<usize>, SigilError> {
    let n = bindings.len();

    // edges[i] holds every j that must come after i, i.e. every binding
    // whose name appears in i's replacement.
    let mut edges: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut in_degree = vec![0usize; n];
    for (i, binding) in bindings.iter().enumerate() {
        for (j, other) in bindings.iter().enumerate() {
            if binding.replacement.references(&other.target) {
                edges[i].push(j);
                in_degree[j] += 1;
            }
        }
    }

    // Kahn's algorithm; the scan picks the lowest-index ready binding so
    // independent bindings keep their insertion order.
    let mut order = Vec::with_capacity(n);
    let mut emitted = vec![false; n];
    while order.len() < n {
        let next = (0..n).find(|&i| !emitted[i] && in_degree[i] == 0);
        let Some(i) = next else {
            return Err(SigilError::cycle(cycle_participants(bindings, &edges, &emitted)));
        };
        emitted[i] = true;
        order.push(i);
        for &j in &edges[i] {
            in_degree[j] -= 1;
        }
    }

    Ok(order)
}

/// Narrows the stuck set down to the bindings actually sitting on a cycle:
/// repeatedly drop stuck bindings with no edge into the remaining set, then
/// report what is left, in insertion order.
fn cycle_participants(bindings: &[Binding], edges: &[Vec<usize>], emitted: &[bool]) -> Vec<String> {
    let mut stuck: Vec<bool> = emitted.iter().map(|done| !done).collect();
    loop {
        let removable = (0..bindings.len())
            .find(|&i| stuck[i] && !edges[i].iter().any(|&j| stuck[j]));
        match removable {
            Some(i) => stuck[i] = false,
            None => break,
        }
    }
    (0..bindings.len())
        .filter(|&i| stuck[i])
        .map(|i| bindings[i].target.qualified())
        .collect()
}
