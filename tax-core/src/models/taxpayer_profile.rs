use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    Employee,
    SelfEmployed,
    BusinessOwner,
    Freelancer,
    Contractor,
    Other,
}

impl Occupation {
    pub const ALL: [Occupation; 6] = [
        Self::Employee,
        Self::SelfEmployed,
        Self::BusinessOwner,
        Self::Freelancer,
        Self::Contractor,
        Self::Other,
    ];

    /// Stable short code, accepted by [`Occupation::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "paye",
            Self::SelfEmployed => "self_employed",
            Self::BusinessOwner => "business_owner",
            Self::Freelancer => "freelancer",
            Self::Contractor => "contractor",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employee (PAYE)",
            Self::SelfEmployed => "Self-Employed",
            Self::BusinessOwner => "Business Owner",
            Self::Freelancer => "Freelancer",
            Self::Contractor => "Contractor",
            Self::Other => "Other",
        }
    }

    /// Parses a code or display label, ignoring case and surrounding
    /// whitespace. `Employee` is also accepted for [`Occupation::Employee`].
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("employee") {
            return Some(Self::Employee);
        }
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s) || o.label().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessType {
    SoleProprietorship,
    Partnership,
    LimitedLiabilityCompany,
    PublicLimitedCompany,
    CooperativeSociety,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 6] = [
        Self::SoleProprietorship,
        Self::Partnership,
        Self::LimitedLiabilityCompany,
        Self::PublicLimitedCompany,
        Self::CooperativeSociety,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoleProprietorship => "sole_proprietorship",
            Self::Partnership => "partnership",
            Self::LimitedLiabilityCompany => "llc",
            Self::PublicLimitedCompany => "plc",
            Self::CooperativeSociety => "cooperative",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SoleProprietorship => "Sole Proprietorship",
            Self::Partnership => "Partnership",
            Self::LimitedLiabilityCompany => "Limited Liability Company",
            Self::PublicLimitedCompany => "Public Limited Company",
            Self::CooperativeSociety => "Cooperative Society",
            Self::Other => "Other",
        }
    }

    /// Parses a code (`llc`, `plc`, ...) or display label. `Ltd` is accepted
    /// for [`BusinessType::LimitedLiabilityCompany`].
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ltd") {
            return Some(Self::LimitedLiabilityCompany);
        }
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s) || b.label().eq_ignore_ascii_case(s))
    }
}

/// The 36 states of the federation plus the Federal Capital Territory.
pub const NIGERIAN_STATES: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
    "FCT Abuja",
];

pub fn is_known_state(name: &str) -> bool {
    let name = name.trim();
    NIGERIAN_STATES
        .iter()
        .any(|state| state.eq_ignore_ascii_case(name))
}
