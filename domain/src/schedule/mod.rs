//! Time consensus domain
//!
//! Participants mark cells on a shared availability grid; the
//! [`TimeConsensusResolver`] counts how many participants support each cell
//! and ranks the cells by that support.
//!
//! ```text
//!            slot 0   slot 1   slot 2   slot 3
//!   day 0  │   .    │   .    │  ●●    │   ●    │
//!   day 1  │   ●    │   .    │   .    │   .    │
//!
//!   ranking: (0,2)×2, (0,3)×1, (1,0)×1
//! ```

pub mod consensus;
pub mod grid;
pub mod slot;

pub use consensus::{TimeConsensusResolver, TimeResolution};
pub use grid::AvailabilityGrid;
pub use slot::TimeSlotId;
