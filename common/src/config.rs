/// Default number of distinct services a single resident may hold.
pub const DEFAULT_MAX_SERVICES: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of `-v` flags given on the command line.
    ///
    /// Only affects diagnostics written to stderr, never the menu itself.
    pub verbosity: u8,
    /// Skips the version banner at startup.
    pub no_banner: bool,
    pub ledger: LedgerPolicy,
}

/// What happens when a name that is already registered gets registered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reregistration {
    /// Replace the resident with a fresh one, dropping every recorded service.
    #[default]
    Reset,
    /// Leave the existing resident and its services untouched.
    Keep,
}

/// Which additions are checked against [`LedgerPolicy::max_services`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapCheck {
    /// Only a kind that is not yet on the ledger can be refused.
    /// Overwriting a recorded kind always goes through.
    #[default]
    NewKindsOnly,
    /// A full ledger refuses every addition, overwrites included.
    EveryAdd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    pub max_services: usize,
    pub reregistration: Reregistration,
    pub cap_check: CapCheck,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            max_services: DEFAULT_MAX_SERVICES,
            reregistration: Reregistration::default(),
            cap_check: CapCheck::default(),
        }
    }
}
