//! Ordered criteria set - insertion order defines matrix indices.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// An ordered, duplicate-free list of criterion names.
///
/// The position of a name in the list is its row/column index in the
/// comparison matrix and its slot in the derived weight vector, so the
/// order is fixed for the lifetime of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaSet {
    names: Vec<String>,
}

impl CriteriaSet {
    /// Creates a criteria set from an ordered sequence of names.
    ///
    /// Fails with `EmptyCriteria` on an empty sequence and
    /// `DuplicateCriterion` on a repeated name.
    pub fn new<I, S>(names: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AhpError::EmptyCriteria);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(AhpError::DuplicateCriterion(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; an empty set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the index of a criterion name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns true if the set contains the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the ordered names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name at the given index.
    pub fn name_at(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Iterates over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
