use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::resident::Resident;
use crate::service::ServiceKind;
use crate::tariff::Tariff;

pub const CURRENCY_SYMBOL: &str = "$";

/// Formats an amount of money with the currency symbol and two decimals.
/// Half a cent rounds away from zero.
pub fn format_money(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", CURRENCY_SYMBOL, cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillLine {
    pub service: ServiceKind,
    pub amount: Decimal,
    pub unit_price: Decimal,
}

impl BillLine {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * self.amount
    }
}

/// What one resident owes at the current tariff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub resident: String,
    pub lines: Vec<BillLine>,
    pub total: Decimal,
}

impl Bill {
    pub fn for_resident(resident: &Resident, tariff: &Tariff) -> Self {
        let lines: Vec<BillLine> = resident
            .services()
            .map(|(service, amount)| BillLine {
                service,
                amount,
                unit_price: tariff.get_cost(service),
            })
            .collect();

        Self {
            resident: resident.name().to_string(),
            lines,
            total: resident.get_total_cost(tariff),
        }
    }

    pub fn formatted_total(&self) -> String {
        format_money(self.total)
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bill for {}:", self.resident)?;
        write!(f, "Total cost: {}", self.formatted_total())
    }
}
