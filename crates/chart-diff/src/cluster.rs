use crate::extract::NoteBuckets;

/// Merge per-tick note buckets into tolerance-windowed clusters.
///
/// Ticks are processed in ascending order. Each tick joins the first existing
/// cluster whose representative is within `window` ticks, scanning
/// representatives in creation order; otherwise it opens a new cluster at its
/// own tick. Because new clusters only ever open at ticks beyond everything
/// already processed, creation order and ascending representative order are
/// the same scan.
///
/// This is a greedy approximation, not optimal interval clustering: when
/// several representatives sit within the window, the earliest one wins and
/// nothing is rebalanced. Downstream tolerances are calibrated against this
/// exact behavior, so the scan order is part of the contract.
pub fn cluster_events(buckets: &NoteBuckets, window: u64) -> NoteBuckets {
    let mut clusters = NoteBuckets::new();
    let mut representatives: Vec<u64> = Vec::new();

    for (&tick, events) in buckets {
        let host = representatives
            .iter()
            .copied()
            .find(|&rep| tick.abs_diff(rep) <= window);

        match host {
            Some(rep) => {
                clusters
                    .entry(rep)
                    .or_default()
                    .extend(events.iter().copied());
            }
            None => {
                representatives.push(tick);
                clusters.insert(tick, events.clone());
            }
        }
    }

    clusters
}
