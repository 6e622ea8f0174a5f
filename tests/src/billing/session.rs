#![cfg(test)]
use std::io::Cursor;

use housing_cli::commands::session::Session;
use housing_core::registry::Registry;
use housing_core::service::ServiceKind;
use rust_decimal::Decimal;

fn drive(script: &str) -> (Registry, String) {
    colored::control::set_override(false);
    let mut session = Session::new(
        Registry::default(),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    session.run().expect("session should not fail on in-memory I/O");
    let (registry, output) = session.into_parts();
    (registry, String::from_utf8(output).expect("output is UTF-8"))
}

/// The whole "Ana" walkthrough typed at the menu, ending with option 4.
#[test]
fn ana_walkthrough() {
    let script = "1\nAna\n2\nAna\n0\n20\n2\nAna\n2\n5\n3\nAna\n4\n";
    let (registry, output) = drive(script);

    assert!(registry.resident_exists("Ana"));
    assert_eq!(output.matches("Resident added.").count(), 1);
    assert_eq!(output.matches("Service added.").count(), 2);
    assert!(output.contains("$135.00"));
}

#[test]
fn amount_boundaries() {
    let script = "1\nAna\n2\nAna\n1\n0\n-5\n100.5\n100\n4\n";
    let (registry, output) = drive(script);

    let resident = registry.resident("Ana").unwrap();
    assert_eq!(resident.amount(ServiceKind::Electricity), Some(Decimal::from(100)));
    assert_eq!(
        output
            .matches("Amount must be positive and no greater than 100.")
            .count(),
        3
    );
}

#[test]
fn bill_for_unknown_resident() {
    let (_, output) = drive("3\nGhost\n4\n");
    assert!(output.contains("Resident \"Ghost\" not found."));
    assert!(!output.contains("RESIDENT BILL"));
}

#[test]
fn non_ascii_names_round_trip() {
    let (registry, output) = drive("1\nАнна\n2\nАнна\n2\n3\n3\nАнна\n4\n");

    assert!(registry.resident_exists("Анна"));
    assert!(output.contains("Анна"));
    assert!(output.contains("$21.00"));
}

#[test]
fn windows_line_endings() {
    let (registry, output) = drive("1\r\nAna\r\n2\r\nAna\r\n0\r\n4\r\n3\r\nAna\r\n4\r\n");

    assert!(registry.resident_exists("Ana"));
    assert!(output.contains("$20.00"));
}

#[test]
fn half_cent_total_rounds_up() {
    let (registry, output) = drive("1\nAna\n2\nAna\n0\n0.001\n3\nAna\n4\n");

    let bill = registry.resident_bill("Ana").unwrap();
    assert_eq!(bill.total, Decimal::new(5, 3));
    assert!(output.contains("> Total cost.: $0.01"));
}

#[test]
fn grouped_digits_are_not_an_amount() {
    let (registry, output) = drive("1\nAna\n2\nAna\n0\n1_0\n_5\n10\n4\n");

    let resident = registry.resident("Ana").unwrap();
    assert_eq!(resident.amount(ServiceKind::Water), Some(Decimal::from(10)));
    assert_eq!(output.matches("Amount must be a number.").count(), 2);
}
