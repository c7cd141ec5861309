//! Fixed-asset depreciation and disposal planning.
//!
//! Planning is pure: given the asset's facts and the disposal event, the
//! planner derives the ordered postings the workflow must make. The db
//! crate executes a plan inside one database transaction.

pub mod depreciation;
pub mod disposal;
pub mod error;

pub use depreciation::{calendar_months_between, monthly_depreciation, total_depreciation};
pub use disposal::{AssetFacts, DisposalMethod, DisposalPlan, PlannedPosting, plan_disposal};
pub use error::DisposalError;
