//! Data models shared across crates

pub mod booking;
pub mod category;
pub mod menu_item;
pub mod selection;
pub mod time_slot;

pub use booking::{BookingDraft, BookingKind, BookingRequest, BookingStatus};
pub use category::{CategoryRule, MenuCategory};
pub use menu_item::MenuItem;
pub use selection::MenuSelection;
pub use time_slot::{SlotPlan, SlotWindow, TimeSlot};
