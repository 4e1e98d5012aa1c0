use chrono::{Months, NaiveDate};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_EXPIRED: &str = "expired";
pub const STATUS_TRIAL: &str = "trial";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipPlan {
    TrialOneMonth,
    BasicThreeMonth,
    StandardSixMonth,
    PremiumTwelveMonth,
}

impl MembershipPlan {
    pub fn parse(plan: &str) -> Option<Self> {
        match plan {
            "1-month-trial" => Some(Self::TrialOneMonth),
            "3-month-basic" => Some(Self::BasicThreeMonth),
            "6-month-standard" => Some(Self::StandardSixMonth),
            "12-month-premium" => Some(Self::PremiumTwelveMonth),
            _ => None,
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            Self::TrialOneMonth => 1,
            Self::BasicThreeMonth => 3,
            Self::StandardSixMonth => 6,
            Self::PremiumTwelveMonth => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrialOneMonth => "1-month-trial",
            Self::BasicThreeMonth => "3-month-basic",
            Self::StandardSixMonth => "6-month-standard",
            Self::PremiumTwelveMonth => "12-month-premium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    pub status: &'static str,
    pub expiry_date: NaiveDate,
}

/// Membership end date for a plan. Unrecognized (legacy/custom) plan strings
/// get the 1-month fallback period. Month addition clamps to the end of
/// shorter months (Jan 31 + 1 month = Feb 28).
pub fn derive_expiry(plan: &str, start_date: NaiveDate) -> NaiveDate {
    let months = MembershipPlan::parse(plan).map(|p| p.months()).unwrap_or(1);
    start_date
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// The single authoritative status rule. Trial is a plan-type classification,
/// not a date-based one; for everything else the member is expired strictly
/// after the expiry date, so `today == expiry_date` still counts as active.
pub fn derive_status(plan: &str, start_date: NaiveDate, today: NaiveDate) -> &'static str {
    if MembershipPlan::parse(plan) == Some(MembershipPlan::TrialOneMonth) {
        return STATUS_TRIAL;
    }

    if today > derive_expiry(plan, start_date) {
        STATUS_EXPIRED
    } else {
        STATUS_ACTIVE
    }
}

pub fn derive(plan: &str, start_date: NaiveDate, today: NaiveDate) -> Derivation {
    Derivation {
        status: derive_status(plan, start_date, today),
        expiry_date: derive_expiry(plan, start_date),
    }
}
