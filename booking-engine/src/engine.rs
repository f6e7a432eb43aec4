//! Booking Engine facade
//!
//! One struct owning the catalog and configuration, exposing the
//! operations the UI/CRUD layer consumes. Every operation is a
//! synchronous pure computation over snapshot inputs; the only mutable
//! state is the caller's draft, and callers serialize edits to it.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use shared::models::{
    BookingDraft, BookingKind, BookingRequest, BookingStatus, MenuCategory, MenuItem,
    MenuSelection, TimeSlot,
};
use shared::{AppError, AppResult};

use crate::catalog::CatalogService;
use crate::core::Config;
use crate::pricing::{Totals, compute_totals};
use crate::scheduling::{self, AdmissionReport, SlotUsage};
use crate::selection::{self, ToggleOutcome};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_guest_count, validate_optional_text,
    validate_required_text,
};

/// Booking engine - slot assignment, capacity accounting, menu
/// selection rules and price derivation behind one handle
#[derive(Debug, Clone)]
pub struct BookingEngine {
    config: Config,
    catalog: CatalogService,
}

impl BookingEngine {
    /// Build the engine from configuration and the collaborator-supplied
    /// menu catalog
    pub fn new(
        config: Config,
        categories: Vec<MenuCategory>,
        items: Vec<MenuItem>,
    ) -> AppResult<Self> {
        config.validate()?;
        let catalog = CatalogService::new(categories, items)?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Toggle a menu item on a draft
    ///
    /// On an applied toggle the draft's selection and derived prices are
    /// updated together; on a cap rejection, or any error, the draft is
    /// untouched and the outcome carries the violation for the caller
    /// to surface.
    pub fn toggle_menu_item(
        &self,
        draft: &mut BookingDraft,
        item_id: &str,
    ) -> AppResult<ToggleOutcome> {
        let outcome = selection::toggle(&self.catalog, &draft.selection, item_id)?;
        if !outcome.is_rejected() {
            // Price the new selection before mutating anything so a
            // stale draft cannot end up half-updated on the error path
            let totals = self.totals_for(&outcome.selection, draft.guest_count, draft.kind)?;
            draft.selection = outcome.selection.clone();
            draft.per_person = totals.per_person;
            draft.total = totals.total;
        }
        Ok(outcome)
    }

    /// Recompute a draft's derived prices from its current selection,
    /// guest count and kind
    pub fn recalculate_prices(&self, draft: &mut BookingDraft) -> AppResult<Totals> {
        let totals = self.totals_for(&draft.selection, draft.guest_count, draft.kind)?;
        draft.per_person = totals.per_person;
        draft.total = totals.total;
        Ok(totals)
    }

    /// Change a draft's guest count, recomputing prices
    pub fn set_guest_count(&self, draft: &mut BookingDraft, guest_count: i32) -> AppResult<Totals> {
        validate_guest_count(guest_count)?;
        draft.guest_count = guest_count;
        self.recalculate_prices(draft)
    }

    /// Set or change a draft's date and start time
    ///
    /// The start time is validated against service hours before the
    /// draft changes; the assigned display slot is returned.
    pub fn set_start(
        &self,
        draft: &mut BookingDraft,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> AppResult<TimeSlot> {
        let slot = self.assign_slot(start_time)?;
        draft.date = Some(date);
        draft.start_time = Some(start_time);
        Ok(slot)
    }

    /// Display slot for a start time
    pub fn assign_slot(&self, start_time: NaiveTime) -> AppResult<TimeSlot> {
        scheduling::assign(&self.config.slot_plan, start_time)
    }

    /// Per-slot occupancy for a date, over the collaborator's booking
    /// snapshot
    pub fn occupancy_for_date(
        &self,
        date: NaiveDate,
        bookings: &[BookingRequest],
    ) -> BTreeMap<TimeSlot, SlotUsage> {
        scheduling::occupancy(
            date,
            bookings,
            &self.config.slot_plan,
            &self.config.capacities,
        )
    }

    /// Advisory capacity check for a proposed booking
    pub fn check_admission(
        &self,
        date: NaiveDate,
        bookings: &[BookingRequest],
        start_time: NaiveTime,
        guest_count: i32,
    ) -> AppResult<AdmissionReport> {
        scheduling::check_admission(
            date,
            bookings,
            &self.config.slot_plan,
            &self.config.capacities,
            start_time,
            guest_count,
        )
    }

    /// Freeze a draft into a submittable booking request
    ///
    /// Validates contact fields, guest count, date/time presence and
    /// service hours, and the non-empty-menu requirement of
    /// reception-style kinds. Prices are recomputed from the catalog
    /// rather than trusted from the draft.
    pub fn submit(&self, draft: &BookingDraft) -> AppResult<BookingRequest> {
        validate_required_text(&draft.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_optional_text(&draft.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&draft.note, "note", MAX_NOTE_LEN)?;
        validate_guest_count(draft.guest_count)?;

        let date = draft
            .date
            .ok_or_else(|| AppError::validation("booking date is required"))?;
        let start_time = draft
            .start_time
            .ok_or_else(|| AppError::validation("booking start time is required"))?;
        self.assign_slot(start_time)?;

        if draft.kind.requires_menu() && draft.selection.is_empty() {
            return Err(AppError::validation(
                "this booking kind requires a menu selection",
            ));
        }

        let totals = self.totals_for(&draft.selection, draft.guest_count, draft.kind)?;
        Ok(BookingRequest {
            id: None,
            kind: draft.kind,
            status: BookingStatus::Pending,
            guest_count: draft.guest_count,
            customer_name: draft.customer_name.clone(),
            phone: draft.phone.clone(),
            note: draft.note.clone(),
            date,
            start_time,
            end_time: draft.end_time,
            selection: draft.selection.clone(),
            per_person: totals.per_person,
            total: totals.total,
        })
    }

    fn totals_for(
        &self,
        selection: &MenuSelection,
        guest_count: i32,
        kind: BookingKind,
    ) -> AppResult<Totals> {
        let items = self.catalog.resolve_selection(selection)?;
        let prices: Vec<f64> = items.iter().map(|item| item.price).collect();
        let cover_charge = if kind.has_cover_charge() {
            self.config.cover_charge
        } else {
            0.0
        };
        Ok(compute_totals(&prices, guest_count, cover_charge))
    }
}
