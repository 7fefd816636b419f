pub mod error;
pub mod models;

// Domain records (one module per entity kind)
pub mod holiday;
pub mod leave;
pub mod payslip;
pub mod task;
pub mod ticket;

// Core mechanisms
pub mod attendance;
pub mod filter;

// In-memory demo data
pub mod mock;

pub use error::*;
pub use models::*;

pub use holiday::*;
pub use leave::*;
pub use payslip::*;
pub use task::*;
pub use ticket::*;

pub use attendance::*;
pub use filter::*;
