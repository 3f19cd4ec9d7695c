use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::database::seed::seed_activities;
use crate::error::AppError;
use crate::models::Activity;

/// In-memory directory of activities keyed by name.
///
/// The set of activities is fixed at construction. Only participant lists
/// change afterwards, and every change runs under the write guard so a
/// check-then-mutate sequence is never interleaved with another writer.
#[derive(Debug)]
pub struct ActivityDirectory {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityDirectory {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn list_activities(&self) -> IndexMap<String, Activity> {
        self.activities.read().clone()
    }

    pub fn load_activity(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Runs `f` against the named activity while holding the write guard.
    pub fn update_activity<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut activities = self.activities.write();
        let activity = activities.get_mut(name).ok_or(AppError::ActivityNotFound)?;
        f(activity)
    }
}
