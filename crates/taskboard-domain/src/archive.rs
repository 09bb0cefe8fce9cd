//! Read-only projection of tasks the task service aged out of To Do.
//!
//! The service owns the staleness threshold and the bucketing; this module
//! only parses the `date -> tasks` map into render-ready groups.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::task::Task;

#[derive(Debug, Clone)]
pub struct ArchivedTaskGroup {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

impl ArchivedTaskGroup {
    /// Group the service response into day buckets, newest day first.
    ///
    /// Keys that do not parse as `YYYY-MM-DD` are logged and skipped; tasks
    /// within a group keep the service's insertion order.
    pub fn from_response(raw: BTreeMap<String, Vec<Task>>) -> Vec<Self> {
        let mut groups: Vec<Self> = raw
            .into_iter()
            .filter_map(|(key, tasks)| match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
                Ok(date) => Some(Self { date, tasks }),
                Err(e) => {
                    tracing::warn!("Skipping archive bucket with bad date key {:?}: {}", key, e);
                    None
                }
            })
            .collect();
        groups.sort_by(|a, b| b.date.cmp(&a.date));
        groups
    }

    pub fn task_count(groups: &[Self]) -> usize {
        groups.iter().map(|g| g.tasks.len()).sum()
    }
}
