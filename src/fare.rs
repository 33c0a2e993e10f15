use std::fmt;

use crate::network::{PathError, UsedLine};

const BASE_FARE: u64 = 1250;
const BASE_FARE_DISTANCE: u64 = 10;
const MID_BAND_LIMIT: u64 = 50;
const MID_BAND_STEP: u64 = 5;
const LONG_BAND_STEP: u64 = 8;
const STEP_FARE: u64 = 100;
const MID_BAND_MAX_FARE: u64 = 800;
const DISCOUNT_DEDUCTION: u32 = 350;

/// Discount tier of a rider, derived from their age.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RiderCategory {
    Child,
    Teenager,
    #[default]
    Adult,
}

impl RiderCategory {
    pub fn from_age(age: u32) -> Self {
        match age {
            6..=12 => RiderCategory::Child,
            13..=18 => RiderCategory::Teenager,
            _ => RiderCategory::Adult,
        }
    }

    /// Share of the fare the rider still pays, in percent.
    fn payable_percent(self) -> u32 {
        match self {
            RiderCategory::Child => 50,
            RiderCategory::Teenager => 80,
            RiderCategory::Adult => 100,
        }
    }
}

impl fmt::Display for RiderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiderCategory::Child => f.write_str("child"),
            RiderCategory::Teenager => f.write_str("teenager"),
            RiderCategory::Adult => f.write_str("adult"),
        }
    }
}

/// Fare before surcharges and discounts.
///
/// Up to 10km costs the base fare, then 100 per started 5km up to 50km,
/// then 100 per started 8km beyond that. Clamped to `u32::MAX`.
pub fn distance_fare(distance: u32) -> u32 {
    let distance = u64::from(distance);
    let fare = if distance <= BASE_FARE_DISTANCE {
        BASE_FARE
    } else if distance <= MID_BAND_LIMIT {
        BASE_FARE + (distance - BASE_FARE_DISTANCE).div_ceil(MID_BAND_STEP) * STEP_FARE
    } else {
        BASE_FARE
            + MID_BAND_MAX_FARE
            + (distance - MID_BAND_LIMIT).div_ceil(LONG_BAND_STEP) * STEP_FARE
    };
    u32::try_from(fare).unwrap_or(u32::MAX)
}

/// Highest surcharge among the lines ridden; surcharges never stack.
pub fn line_surcharge(lines: &[UsedLine]) -> u32 {
    lines.iter().map(|l| l.extra_fare).max().unwrap_or(0)
}

/// Applies the rider's discount to an undiscounted fare.
///
/// Discounted riders pay their share of the fare after 350 is deducted.
pub fn apply_discount(fare: u32, category: RiderCategory) -> u32 {
    match category {
        RiderCategory::Adult => fare,
        _ => {
            let deducted = u64::from(fare.saturating_sub(DISCOUNT_DEDUCTION));
            (deducted * u64::from(category.payable_percent()) / 100) as u32
        }
    }
}

pub fn compute_fare(
    total_distance: u32,
    lines: &[UsedLine],
    category: RiderCategory,
) -> Result<u32, PathError> {
    if total_distance == 0 {
        return Err(PathError::InvalidDistance(total_distance));
    }

    let fare = distance_fare(total_distance).saturating_add(line_surcharge(lines));
    Ok(apply_discount(fare, category))
}
