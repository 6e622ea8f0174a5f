//! # Housing Core
//!
//! The in-memory domain of the housing billing tool. Nothing in here touches a
//! terminal; the interactive session in `housing-cli` drives it.
//!
//! * **[`service`]**: the closed set of billable utility services.
//! * **[`tariff`]**: unit prices per service.
//! * **[`resident`]**: one resident and their bounded service ledger.
//! * **[`registry`]**: every resident plus the shared tariff.
//! * **[`bill`]**: the rendered cost of one resident.
//! * **[`validation`]**: pure parsers for every line the operator types.

pub mod bill;
pub mod registry;
pub mod resident;
pub mod service;
pub mod tariff;
pub mod validation;
