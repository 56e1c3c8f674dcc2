//! Merge policies for quotes pulled from the server

use crate::types::quote::Quote;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How remote quotes are combined with the local list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeStrategy {
    /// Remote quotes go first, everything is kept
    Prepend,
    /// Remote quotes go last, everything is kept
    Append,
    /// Remote quotes go first, skipping any already present
    DedupeByContent,
}

impl MergeStrategy {
    /// Merge `remote` into `local`, returning how many quotes were added
    pub fn apply(self, local: &mut Vec<Quote>, remote: Vec<Quote>) -> usize {
        match self {
            MergeStrategy::Prepend => {
                let added = remote.len();
                prepend(local, remote);
                added
            }
            MergeStrategy::Append => {
                let added = remote.len();
                local.extend(remote);
                added
            }
            MergeStrategy::DedupeByContent => {
                let mut seen: HashSet<Quote> = local.iter().cloned().collect();
                let fresh: Vec<Quote> = remote
                    .into_iter()
                    .filter(|quote| seen.insert(quote.clone()))
                    .collect();
                let added = fresh.len();
                prepend(local, fresh);
                added
            }
        }
    }
}

fn prepend(local: &mut Vec<Quote>, mut front: Vec<Quote>) {
    front.append(local);
    *local = front;
}
