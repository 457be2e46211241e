// src/modules/task/application/domain/progress.rs
//
// Weighted completion progress. Completed tasks earn full credit, in-progress
// tasks half, pending none. SQL only ever counts rows by status; every
// percentage in the API and the export comes from `progress` below.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::TaskStatus;

/// `round(((completed*100 + in_progress*50) / (total*100)) * 100, 1)`, or 0 for an empty set.
pub fn progress(completed: i64, in_progress: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }

    let credit = (completed * 100 + in_progress * 50) as f64;
    let max_credit = (total * 100) as f64;

    (credit * 1000.0 / max_credit).round() / 10.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
}

impl StatusCounts {
    pub fn total(&self) -> i64 {
        self.pending + self.in_progress + self.completed
    }

    pub fn progress(&self) -> f64 {
        progress(self.completed, self.in_progress, self.total())
    }

    pub fn record(&mut self, status: TaskStatus, n: i64) {
        match status {
            TaskStatus::Pending => self.pending += n,
            TaskStatus::InProgress => self.in_progress += n,
            TaskStatus::Completed => self.completed += n,
        }
    }
}

/// Serialized task statistics shared by users, projects and task lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskStatsView {
    pub total_tasks: i64,
    pub pending_tasks: i64,
    pub in_progress_tasks: i64,
    pub completed_tasks: i64,
    #[schema(example = 62.5)]
    pub progress: f64,
}

impl From<StatusCounts> for TaskStatsView {
    fn from(counts: StatusCounts) -> Self {
        TaskStatsView {
            total_tasks: counts.total(),
            pending_tasks: counts.pending,
            in_progress_tasks: counts.in_progress,
            completed_tasks: counts.completed,
            progress: counts.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(progress(0, 0, 0), 0.0);
        assert_eq!(StatusCounts::default().progress(), 0.0);
    }

    #[test]
    fn test_all_completed_is_hundred() {
        assert_eq!(progress(7, 0, 7), 100.0);
    }

    #[test]
    fn test_mixed_set_is_weighted() {
        // 2 completed, 1 in progress, 1 pending
        assert_eq!(progress(2, 1, 4), 62.5);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        assert_eq!(progress(0, 1, 3), 16.7);
        assert_eq!(progress(1, 0, 3), 33.3);
        assert_eq!(progress(2, 0, 3), 66.7);
    }

    #[test]
    fn test_all_pending_is_zero() {
        assert_eq!(progress(0, 0, 5), 0.0);
    }

    #[test]
    fn test_counts_accumulate_by_status() {
        let mut counts = StatusCounts::default();
        counts.record(TaskStatus::Completed, 2);
        counts.record(TaskStatus::InProgress, 1);
        counts.record(TaskStatus::Pending, 1);

        assert_eq!(counts.total(), 4);
        assert_eq!(counts.progress(), 62.5);
    }

    #[test]
    fn test_view_carries_counts_and_progress() {
        let view = TaskStatsView::from(StatusCounts {
            pending: 1,
            in_progress: 1,
            completed: 2,
        });

        assert_eq!(view.total_tasks, 4);
        assert_eq!(view.pending_tasks, 1);
        assert_eq!(view.in_progress_tasks, 1);
        assert_eq!(view.completed_tasks, 2);
        assert_eq!(view.progress, 62.5);
    }

    #[test]
    fn test_progress_stays_within_bounds() {
        for total in 1..=12 {
            for completed in 0..=total {
                for in_progress in 0..=(total - completed) {
                    let p = progress(completed, in_progress, total);
                    assert!((0.0..=100.0).contains(&p), "{p} out of range");
                }
            }
        }
    }
}
