use std::fmt;

/// A billable utility service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceKind {
    Water,
    Electricity,
    Gas,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Water,
        ServiceKind::Electricity,
        ServiceKind::Gas,
    ];

    /// Maps the number typed at the service prompt to a kind.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            0 => Some(ServiceKind::Water),
            1 => Some(ServiceKind::Electricity),
            2 => Some(ServiceKind::Gas),
            _ => None,
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            ServiceKind::Water => 0,
            ServiceKind::Electricity => 1,
            ServiceKind::Gas => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Water => "Water",
            ServiceKind::Electricity => "Electricity",
            ServiceKind::Gas => "Gas",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
