use chrono::{DateTime, Utc};
use chrono_tz::Europe::Luxembourg;

use crate::snapshot::GarageStatus;

pub fn format_garage_message(garage: &GarageStatus, checked_at: DateTime<Utc>) -> String {
    let checked_at = checked_at
        .with_timezone(&Luxembourg)
        .format("%d-%m-%Y %H:%M");

    let mut lines = Vec::with_capacity(2);
    lines.push(format!(
        "{} Parking *{}*: {} ({}/{})",
        garage.tier.icon(),
        garage.title,
        garage.tier,
        garage.occupied,
        garage.total
    ));
    lines.push(format!(
        "Free spaces: {} | Last check: {}",
        garage.remaining(),
        checked_at
    ));

    lines.join("\n")
}
