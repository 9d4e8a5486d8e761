// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query parameters for the todo collection endpoint.
//!
//! The server filters by `status` and sorts by `sort_by`/`order`. Empty
//! fields are omitted from the query string and fall back to server defaults
//! (no filter, sort by id ascending).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::todo::Status;

/// Field the server sorts the collection by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Id,
    Name,
    DueDate,
    Status,
}

impl SortBy {
    /// Returns the query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Name => "name",
            SortBy::DueDate => "due_date",
            SortBy::Status => "status",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortBy::Id),
            "name" => Ok(SortBy::Name),
            "due_date" => Ok(SortBy::DueDate),
            "status" => Ok(SortBy::Status),
            _ => Err(Error::InvalidSortField(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(Error::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Filter and sort options for listing todos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Only return todos with this status.
    pub status: Option<Status>,
    /// Field to sort by.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub order: Option<SortOrder>,
}

impl ListQuery {
    /// Returns the (key, value) pairs to append to the collection URL.
    ///
    /// Unset fields produce no pair.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
