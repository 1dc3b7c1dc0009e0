//! Synthetic club finances.

use crate::config::AttributeRange;
use crate::world::{Club, World};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial attributes of a club, each derived independently from its number.
///
/// Money serializes as decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubFinances {
    /// Average home attendance.
    pub attendance: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub ticket_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub sponsor_payment: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub facilities_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub manager_pay: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub scouting_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub health_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub development_cost: Decimal,
    /// Wage bill as a percentage of estimated revenue.
    pub wage_ratio_pct: u64,
    /// Previous season's gate receipts plus sponsorship.
    #[serde(with = "rust_decimal::serde::str")]
    pub estimated_revenue: Decimal,
    /// Total wages for the squad.
    #[serde(with = "rust_decimal::serde::str")]
    pub wage_bill: Decimal,
}

impl ClubFinances {
    /// Costs outside the wage bill.
    pub fn running_costs(&self) -> Decimal {
        self.facilities_cost
            + self.manager_pay
            + self.scouting_cost
            + self.health_cost
            + self.development_cost
    }

    /// Revenue left after wages and running costs; may be negative.
    pub fn projected_balance(&self) -> Decimal {
        self.estimated_revenue - self.wage_bill - self.running_costs()
    }
}

impl World {
    /// Derive all financial attributes of `club`.
    pub fn finances(&self, club: &Club) -> ClubFinances {
        let ranges = &self.config().club_ranges;
        let money = |range: &AttributeRange| Decimal::from(self.club_value(range, club));
        let attendance = self.club_value(&ranges.attendance, club);
        let ticket_price = money(&ranges.ticket_price);
        let sponsor_payment = money(&ranges.sponsor_payment);
        let wage_ratio_pct = self.club_value(&ranges.wage_ratio_pct, club);
        let home_games = Decimal::from(self.config().home_games());
        let estimated_revenue =
            Decimal::from(attendance) * ticket_price * home_games + sponsor_payment;
        let wage_bill =
            (estimated_revenue * Decimal::from(wage_ratio_pct) / Decimal::ONE_HUNDRED).round_dp(2);
        ClubFinances {
            attendance,
            ticket_price,
            sponsor_payment,
            facilities_cost: money(&ranges.facilities_cost),
            manager_pay: money(&ranges.manager_pay),
            scouting_cost: money(&ranges.scouting_cost),
            health_cost: money(&ranges.health_cost),
            development_cost: money(&ranges.development_cost),
            wage_ratio_pct,
            estimated_revenue,
            wage_bill,
        }
    }
}
