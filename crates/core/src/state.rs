// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use railbook_domain::{Section, SeatNumber, Ticket, TicketId};
use std::collections::{BTreeMap, BTreeSet};

/// The set of currently occupied seat numbers within one section's
/// seat block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPool {
    /// The section this pool tracks.
    section: Section,
    /// The occupied seat numbers.
    occupied: BTreeSet<u8>,
}

impl SectionPool {
    /// Creates an empty pool for a section.
    ///
    /// # Arguments
    ///
    /// * `section` - The section this pool tracks
    #[must_use]
    pub const fn new(section: Section) -> Self {
        Self {
            section,
            occupied: BTreeSet::new(),
        }
    }

    /// Returns the section this pool tracks.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Returns the number of occupied seats.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Checks whether every seat in this section is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied.len() >= Section::CAPACITY as usize
    }

    /// Checks whether a seat number is occupied in this pool.
    #[must_use]
    pub fn contains(&self, seat: SeatNumber) -> bool {
        self.occupied.contains(&seat.value())
    }

    /// Returns the lowest unoccupied seat number in this section's
    /// block, scanning in ascending order.
    #[must_use]
    pub fn lowest_free(&self) -> Option<SeatNumber> {
        (self.section.first_seat()..=self.section.last_seat())
            .find(|seat| !self.occupied.contains(seat))
            .and_then(|seat| SeatNumber::new(i64::from(seat)).ok())
    }

    /// Marks a seat number as occupied.
    pub(crate) fn occupy(&mut self, seat: SeatNumber) {
        self.occupied.insert(seat.value());
    }

    /// Releases a seat number, returning whether it was present.
    pub(crate) fn release(&mut self, seat: SeatNumber) -> bool {
        self.occupied.remove(&seat.value())
    }
}

/// The complete mutable state of the booking engine.
///
/// The ticket registry and both seat pools live in one owned aggregate
/// so that every ticket-affecting operation mutates them atomically
/// behind a single mutual-exclusion boundary (the caller holds the
/// lock; the engine never observes partial updates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingState {
    /// The ticket registry, keyed by ticket id. Ordered keys keep
    /// listing operations deterministic.
    tickets: BTreeMap<u64, Ticket>,
    /// The occupied-seat pool for section A.
    pool_a: SectionPool,
    /// The occupied-seat pool for section B.
    pool_b: SectionPool,
    /// The next ticket id to issue. Monotonic; ids are never reused,
    /// even after deletes.
    next_ticket_id: u64,
}

impl BookingState {
    /// Creates a new empty booking state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tickets: BTreeMap::new(),
            pool_a: SectionPool::new(Section::A),
            pool_b: SectionPool::new(Section::B),
            next_ticket_id: 1,
        }
    }

    /// Returns the pool for a section.
    #[must_use]
    pub const fn pool(&self, section: Section) -> &SectionPool {
        match section {
            Section::A => &self.pool_a,
            Section::B => &self.pool_b,
        }
    }

    /// Returns the mutable pool for a section.
    pub(crate) const fn pool_mut(&mut self, section: Section) -> &mut SectionPool {
        match section {
            Section::A => &mut self.pool_a,
            Section::B => &mut self.pool_b,
        }
    }

    /// Checks whether a seat number is occupied in either pool.
    #[must_use]
    pub fn is_seat_occupied(&self, seat: SeatNumber) -> bool {
        self.pool_a.contains(seat) || self.pool_b.contains(seat)
    }

    /// Looks up a ticket by id.
    #[must_use]
    pub fn ticket(&self, ticket_id: TicketId) -> Option<&Ticket> {
        self.tickets.get(&ticket_id.value())
    }

    /// Iterates over all live tickets in ascending id order.
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Returns the number of live tickets.
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    /// Issues a fresh ticket id from the monotonic counter.
    pub(crate) const fn issue_ticket_id(&mut self) -> TicketId {
        let id: u64 = self.next_ticket_id;
        self.next_ticket_id += 1;
        TicketId::new(id)
    }

    /// Stores a ticket in the registry.
    pub(crate) fn insert_ticket(&mut self, ticket: Ticket) {
        self.tickets.insert(ticket.ticket_id.value(), ticket);
    }

    /// Returns a mutable reference to a ticket by id.
    pub(crate) fn ticket_mut(&mut self, ticket_id: TicketId) -> Option<&mut Ticket> {
        self.tickets.get_mut(&ticket_id.value())
    }

    /// Removes a ticket from the registry.
    pub(crate) fn remove_ticket(&mut self, ticket_id: TicketId) -> Option<Ticket> {
        self.tickets.remove(&ticket_id.value())
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}
