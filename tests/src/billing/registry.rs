#![cfg(test)]
use housing_common::config::{CapCheck, LedgerPolicy, Reregistration};
use housing_core::registry::{Registration, Registry, RegistryError};
use housing_core::service::ServiceKind;
use housing_core::tariff::Tariff;
use rust_decimal::Decimal;

/// Registers "Ana", records water and gas, and bills her at the default tariff.
#[test]
fn ana_pays_for_water_and_gas() {
    let mut registry: Registry = Registry::default();
    registry.add_resident("Ana");
    registry
        .add_service("Ana", ServiceKind::Water, Decimal::from(20))
        .expect("water should be recorded");
    registry
        .add_service("Ana", ServiceKind::Gas, Decimal::from(5))
        .expect("gas should be recorded");

    let bill = registry.resident_bill("Ana").expect("Ana is registered");

    assert_eq!(bill.total, Decimal::from(135));
    assert_eq!(bill.formatted_total(), "$135.00");
    assert_eq!(
        bill.lines.iter().map(|line| line.service).collect::<Vec<_>>(),
        vec![ServiceKind::Water, ServiceKind::Gas]
    );
}

#[test]
fn residents_stay_registered_for_the_session() {
    let mut registry: Registry = Registry::default();
    let names = ["Ana", "Boris", "Chen", "Dana"];

    for (idx, name) in names.iter().enumerate() {
        registry.add_resident(name);
        for earlier in &names[..=idx] {
            assert!(registry.resident_exists(earlier), "{earlier} vanished");
        }
    }
    assert_eq!(registry.len(), names.len());
}

#[test]
fn reregistering_drops_recorded_services() {
    let mut registry: Registry = Registry::default();
    registry.add_resident("Ana");
    registry
        .add_service("Ana", ServiceKind::Electricity, Decimal::from(40))
        .unwrap();

    assert_eq!(registry.add_resident("Ana"), Registration::Replaced);
    assert_eq!(
        registry.resident_bill("Ana").unwrap().total,
        Decimal::ZERO
    );
}

#[test]
fn unknown_resident_is_reported_everywhere() {
    let mut registry: Registry = Registry::default();

    assert_eq!(
        registry.add_service("Ghost", ServiceKind::Water, Decimal::ONE),
        Err(RegistryError::ResidentNotFound("Ghost".into()))
    );
    assert_eq!(
        registry.resident_bill("Ghost"),
        Err(RegistryError::ResidentNotFound("Ghost".into()))
    );
    assert!(registry.is_empty());
}

#[test]
fn full_ledger_refuses_a_new_kind() {
    let policy: LedgerPolicy = LedgerPolicy {
        max_services: 2,
        reregistration: Reregistration::Reset,
        cap_check: CapCheck::NewKindsOnly,
    };
    let mut registry: Registry = Registry::new(policy);
    registry.add_resident("Ana");
    registry.add_service("Ana", ServiceKind::Water, Decimal::from(10)).unwrap();
    registry.add_service("Ana", ServiceKind::Electricity, Decimal::from(2)).unwrap();
    let before = registry.resident_bill("Ana").unwrap();

    let refused = registry.add_service("Ana", ServiceKind::Gas, Decimal::from(1));

    assert!(matches!(refused, Err(RegistryError::ServiceLimitExceeded { limit: 2, .. })));
    assert_eq!(registry.resident_bill("Ana").unwrap(), before);
    assert_eq!(before.total, Decimal::from(70));

    registry.add_service("Ana", ServiceKind::Water, Decimal::from(1)).unwrap();
    assert_eq!(registry.resident_bill("Ana").unwrap().total, Decimal::from(25));
}

#[test]
fn tariff_prices_are_fixed() {
    let registry: Registry = Registry::default();
    let tariff: &Tariff = registry.tariff();

    for _ in 0..3 {
        assert_eq!(tariff.get_cost(ServiceKind::Gas), Decimal::from(7));
        assert_eq!(tariff.get_cost(ServiceKind::Water), Decimal::from(5));
        assert_eq!(tariff.get_cost(ServiceKind::Electricity), Decimal::from(10));
    }
}
