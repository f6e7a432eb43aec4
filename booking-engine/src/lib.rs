//! Booking Engine - restaurant back-office reservation core
//!
//! # Architecture overview
//!
//! The library implements the two coupled cores of the reservation back
//! office:
//!
//! - **Slot scheduling** (`scheduling`): start-time → service-slot
//!   assignment and per-date occupancy/admission accounting
//! - **Menu selection** (`selection` + `pricing`): category rule
//!   enforcement over a draft's menu picks and derived per-person/total
//!   prices
//!
//! Persistence, notifications and the UI are external collaborators:
//! the catalog and per-date booking snapshots come in as plain data and
//! every operation is a synchronous pure computation.
//!
//! # Module structure
//!
//! ```text
//! booking-engine/src/
//! ├── core/          # Configuration (slot plan, capacities, cover charge)
//! ├── catalog/       # In-memory indexed menu catalog
//! ├── selection/     # Toggle operation and category rules
//! ├── pricing/       # Per-person/total price derivation
//! ├── scheduling/    # Slot assignment, occupancy, admission control
//! ├── utils/         # Logging, time parsing, validation
//! └── engine.rs      # BookingEngine facade
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod pricing;
pub mod scheduling;
pub mod selection;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogService, ItemMeta};
pub use core::{Config, SlotCapacities};
pub use engine::BookingEngine;
pub use pricing::{Totals, compute_totals};
pub use scheduling::{AdmissionReport, SlotUsage};
pub use selection::{RuleViolation, ToggleOutcome};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
