pub mod conflict;
pub mod ledger;
pub mod schedule;
