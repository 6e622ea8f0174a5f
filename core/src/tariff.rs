use rust_decimal::Decimal;

use crate::service::ServiceKind;

/// Fixed price per consumed unit of each service.
///
/// Built once by the registry and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    water: Decimal,
    electricity: Decimal,
    gas: Decimal,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            water: Decimal::new(50, 1),
            electricity: Decimal::new(100, 1),
            gas: Decimal::new(70, 1),
        }
    }
}

impl Tariff {
    pub fn get_cost(&self, service: ServiceKind) -> Decimal {
        match service {
            ServiceKind::Water => self.water,
            ServiceKind::Electricity => self.electricity,
            ServiceKind::Gas => self.gas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prices() {
        let tariff = Tariff::default();
        assert_eq!(tariff.get_cost(ServiceKind::Water), Decimal::from(5));
        assert_eq!(tariff.get_cost(ServiceKind::Electricity), Decimal::from(10));
        assert_eq!(tariff.get_cost(ServiceKind::Gas), Decimal::from(7));
    }

    #[test]
    fn lookups_do_not_depend_on_order() {
        let tariff = Tariff::default();
        let forward: Vec<Decimal> = ServiceKind::ALL.iter().map(|k| tariff.get_cost(*k)).collect();
        let backward: Vec<Decimal> = ServiceKind::ALL
            .iter()
            .rev()
            .map(|k| tariff.get_cost(*k))
            .rev()
            .collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn every_price_is_non_negative() {
        let tariff = Tariff::default();
        assert!(ServiceKind::ALL.iter().all(|k| !tariff.get_cost(*k).is_sign_negative()));
    }
}
