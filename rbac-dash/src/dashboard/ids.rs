// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::types::EntityId;

/// Monotonic id source for one collection. Ids handed out are never reused,
/// even after the entity that owned them is deleted. Once `EntityId::MAX` has
/// been used the sequence is exhausted and allocates nothing further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<EntityId>,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdSequence {
    pub fn starting_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = EntityId>,
    {
        match existing.into_iter().max() {
            Some(max) => Self {
                next: max.checked_add(1),
            },
            None => Self::default(),
        }
    }

    pub fn peek(&self) -> Option<EntityId> {
        self.next
    }

    pub fn allocate(&mut self) -> Option<EntityId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_starts_at_one() {
        let mut ids = IdSequence::starting_after(Vec::new());
        assert_eq!(ids.allocate(), Some(1));
        assert_eq!(ids.allocate(), Some(2));
    }

    #[test]
    fn starts_after_largest_existing_id() {
        let ids = IdSequence::starting_after(vec![1, 5, 3]);
        assert_eq!(ids.peek(), Some(6));
    }

    #[test]
    fn max_id_is_handed_out_once_then_exhausted() {
        let mut ids = IdSequence::starting_after(vec![EntityId::MAX - 1]);
        assert_eq!(ids.allocate(), Some(EntityId::MAX));
        assert_eq!(ids.allocate(), None);
        assert_eq!(ids.peek(), None);
    }

    #[test]
    fn existing_max_id_leaves_nothing_to_allocate() {
        let mut ids = IdSequence::starting_after(vec![3, EntityId::MAX]);
        assert_eq!(ids.allocate(), None);
    }
}
