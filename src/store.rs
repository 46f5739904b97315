//! Append-only in-memory logs for feedback and comments.
//!
//! Entries are never updated or removed. A batch append happens under one
//! write lock, so readers see either none or all of it, in submission order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use utoipa::ToSchema;

use crate::classifier::AnalysisResult;

/// An analyzed feedback message.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeedbackRecord {
    #[schema(example = "alice")]
    pub user: String,
    #[schema(example = "Wow, that's amazing!")]
    pub message: String,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn new(user: String, message: String, analysis: AnalysisResult) -> Self {
        Self {
            user,
            message,
            analysis,
            timestamp: Utc::now(),
        }
    }
}

/// A raw comment, stored without analysis.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentRecord {
    #[schema(example = "bob")]
    pub user: String,
    #[schema(example = "Please add dark mode")]
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

impl CommentRecord {
    pub fn new(user: String, comment: String) -> Self {
        Self {
            user,
            comment,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store capacity of {capacity} entries reached ({len} stored, {requested} requested)")]
    CapacityExceeded {
        capacity: usize,
        len: usize,
        requested: usize,
    },
}

/// Ordered, append-only log with an optional size bound.
#[derive(Debug)]
pub struct AppendLog<T> {
    entries: RwLock<Vec<T>>,
    capacity: Option<usize>,
}

impl<T> Default for AppendLog<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> AppendLog<T> {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn append(&self, entry: T) -> Result<(), StoreError> {
        self.append_all(vec![entry])
    }

    /// Appends every entry or none of them.
    pub fn append_all(&self, batch: Vec<T>) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(capacity) = self.capacity {
            if entries.len() + batch.len() > capacity {
                return Err(StoreError::CapacityExceeded {
                    capacity,
                    len: entries.len(),
                    requested: batch.len(),
                });
            }
        }

        entries.extend(batch);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> AppendLog<T> {
    /// Copy of every entry, in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub type FeedbackStore = AppendLog<FeedbackRecord>;
pub type CommentStore = AppendLog<CommentRecord>;
