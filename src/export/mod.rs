//! Export views of payroll results.
//!
//! Rendering (PDF, spreadsheets) is left to callers; this module produces
//! the rounded, serialisable values they render.

mod salary_slip;

pub use salary_slip::SalarySlip;
