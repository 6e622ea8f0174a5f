use std::collections::BTreeMap;

use housing_common::config::{CapCheck, LedgerPolicy};
use rust_decimal::Decimal;
use tracing::trace;

use crate::service::ServiceKind;
use crate::tariff::Tariff;

/// A named resident and the amount consumed of each service.
///
/// The ledger holds at most `policy.max_services` distinct kinds. Adding a kind that
/// is already present replaces its amount.
#[derive(Debug, Clone)]
pub struct Resident {
    name: String,
    services: BTreeMap<ServiceKind, Decimal>,
    policy: LedgerPolicy,
}

impl Resident {
    pub fn new(name: impl Into<String>, policy: LedgerPolicy) -> Self {
        Self {
            name: name.into(),
            services: BTreeMap::new(),
            policy,
        }
    }

    /// Records `amount` for `service`.
    ///
    /// Returns `false`, leaving the ledger as it was, when the ledger is full and the
    /// policy refuses this addition.
    pub fn add_service(&mut self, service: ServiceKind, amount: Decimal) -> bool {
        let present = self.services.contains_key(&service);
        let full = self.services.len() >= self.policy.max_services;

        let refused = match self.policy.cap_check {
            CapCheck::NewKindsOnly => full && !present,
            CapCheck::EveryAdd => full,
        };
        if refused {
            trace!(resident = %self.name, %service, "ledger full");
            return false;
        }

        self.services.insert(service, amount);
        true
    }

    pub fn get_total_cost(&self, tariff: &Tariff) -> Decimal {
        self.services
            .iter()
            .map(|(kind, amount)| tariff.get_cost(*kind) * *amount)
            .sum()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self, service: ServiceKind) -> Option<Decimal> {
        self.services.get(&service).copied()
    }

    /// Recorded services in [`ServiceKind`] order.
    pub fn services(&self) -> impl Iterator<Item = (ServiceKind, Decimal)> + '_ {
        self.services.iter().map(|(kind, amount)| (*kind, *amount))
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}
