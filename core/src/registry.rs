//! # Resident Registry
//!
//! Owns every [`Resident`] keyed by name, together with the single [`Tariff`]
//! they are billed against. The registry is an ordinary value: whoever runs the
//! session constructs it and hands out `&mut` access, there is no global instance.

use std::collections::HashMap;

use housing_common::config::{LedgerPolicy, Reregistration};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::bill::Bill;
use crate::resident::Resident;
use crate::service::ServiceKind;
use crate::tariff::Tariff;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Resident \"{0}\" not found.")]
    ResidentNotFound(String),

    #[error("Resident \"{name}\" already has the maximum of {limit} services.")]
    ServiceLimitExceeded { name: String, limit: usize },
}

/// Outcome of [`Registry::add_resident`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    /// The name was taken; its previous ledger is gone.
    Replaced,
    /// The name was taken and the policy kept the existing resident.
    Kept,
}

#[derive(Debug, Clone)]
pub struct Registry {
    residents: HashMap<String, Resident>,
    tariff: Tariff,
    policy: LedgerPolicy,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(LedgerPolicy::default())
    }
}

impl Registry {
    pub fn new(policy: LedgerPolicy) -> Self {
        Self::with_tariff(Tariff::default(), policy)
    }

    pub fn with_tariff(tariff: Tariff, policy: LedgerPolicy) -> Self {
        Self {
            residents: HashMap::new(),
            tariff,
            policy,
        }
    }

    /// Registers `name`. Emptiness is the caller's concern.
    pub fn add_resident(&mut self, name: &str) -> Registration {
        let registration = match (self.residents.contains_key(name), self.policy.reregistration) {
            (false, _) => Registration::Created,
            (true, Reregistration::Reset) => Registration::Replaced,
            (true, Reregistration::Keep) => Registration::Kept,
        };

        if registration != Registration::Kept {
            self.residents
                .insert(name.to_string(), Resident::new(name, self.policy));
        }

        debug!(resident = name, ?registration, "resident registered");
        registration
    }

    pub fn resident_exists(&self, name: &str) -> bool {
        self.residents.contains_key(name)
    }

    pub fn resident(&self, name: &str) -> Option<&Resident> {
        self.residents.get(name)
    }

    pub fn add_service(
        &mut self,
        name: &str,
        service: ServiceKind,
        amount: Decimal,
    ) -> Result<(), RegistryError> {
        let Some(resident) = self.residents.get_mut(name) else {
            info!(resident = name, "service for unknown resident");
            return Err(RegistryError::ResidentNotFound(name.to_string()));
        };

        if !resident.add_service(service, amount) {
            info!(resident = name, %service, "service limit reached");
            return Err(RegistryError::ServiceLimitExceeded {
                name: name.to_string(),
                limit: self.policy.max_services,
            });
        }

        debug!(resident = name, %service, %amount, "service recorded");
        Ok(())
    }

    /// Builds the bill for `name` at the registry's tariff.
    pub fn resident_bill(&self, name: &str) -> Result<Bill, RegistryError> {
        self.residents
            .get(name)
            .map(|resident| Bill::for_resident(resident, &self.tariff))
            .ok_or_else(|| RegistryError::ResidentNotFound(name.to_string()))
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }
}
