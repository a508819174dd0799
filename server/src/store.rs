use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestResult {
    pub clicks: u32,
    pub time: u32,
}

/// Best result per level path, kept for the process lifetime. Entries are
/// created lazily and never evicted. The entry API keeps the shard locked for
/// the whole read-modify-write, so concurrent submissions for one level never
/// lose an update.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: DashMap<String, BestResult>,
}

impl ResultStore {
    /// Installs `{clicks, time}` if the level has no result yet or `clicks`
    /// is strictly lower than the stored one; ties keep the existing entry,
    /// including its time. Returns the best clicks after the update.
    pub fn update_best(&self, path: &str, clicks: u32, time: u32) -> u32 {
        tracing::debug!(path, clicks, time, "submitting result");
        match self.results.entry(path.to_owned()) {
            Entry::Occupied(mut entry) => {
                let current = *entry.get();
                tracing::debug!(
                    path,
                    current_clicks = current.clicks,
                    current_time = current.time,
                    "current best"
                );
                if clicks < current.clicks {
                    entry.insert(BestResult { clicks, time });
                    tracing::info!(path, clicks, time, "new best result");
                    clicks
                } else {
                    tracing::debug!(path, "best result unchanged");
                    current.clicks
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(BestResult { clicks, time });
                tracing::info!(path, clicks, time, "first result for level");
                clicks
            }
        }
    }

    pub fn best(&self, path: &str) -> Option<BestResult> {
        self.results.get(path).map(|entry| *entry)
    }
}
