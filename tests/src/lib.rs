//! End-to-end scenarios for the housing workspace.

#[cfg(test)]
mod billing;
