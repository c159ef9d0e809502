//! Test modules relocated from implementation files.
//!
//! Inline test modules that outgrow their implementation file live here.
