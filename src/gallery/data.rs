//! Sample dataset for the gallery screens.

use chrono::NaiveDate;

use datadeck::chart::{SeriesKind, SeriesSpec};
use datadeck::column::{Alignment, ColumnDef, FilterKind};
use datadeck::dataset::{CellValue, Dataset, Record};

const REGIONS: [&str; 3] = ["North", "South", "West"];
const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Three regions times twelve months of made-up sales figures.
pub fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::new(["month", "region", "revenue", "units", "active", "reported"]);
    for (r, region) in REGIONS.iter().enumerate() {
        for (m, month) in MONTHS.iter().enumerate() {
            // Deterministic but uneven numbers so sorting is interesting.
            let revenue = 1200.0 + (m as f64 * 311.0 + r as f64 * 997.0) % 2400.0;
            let units = 10 + ((m * 7 + r * 13) % 53) as i64;
            let reported = NaiveDate::from_ymd_opt(2025, (m + 1) as u32, 1)
                .map(CellValue::Date)
                .unwrap_or(CellValue::Empty);
            dataset.push(Record::new(vec![
                (*month).into(),
                (*region).into(),
                revenue.into(),
                units.into(),
                (units % 2 == 0).into(),
                reported,
            ]));
        }
    }
    dataset
}

pub fn sample_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("month", "Month").with_width(12),
        ColumnDef::new("region", "Region")
            .with_filter(FilterKind::Select {
                options: REGIONS.iter().map(|r| r.to_string()).collect(),
            })
            .with_groupable(true)
            .with_width(10),
        ColumnDef::new("revenue", "Revenue")
            .with_filter(FilterKind::Number)
            .with_align(Alignment::Right)
            .with_format(|value| match value.as_number() {
                Some(n) => format!("${:.0}", n),
                None => String::new(),
            })
            .with_width(10),
        ColumnDef::new("units", "Units")
            .with_filter(FilterKind::Number)
            .with_align(Alignment::Right)
            .with_width(7),
        ColumnDef::new("active", "Active")
            .with_filter(FilterKind::Boolean)
            .with_width(8),
        ColumnDef::new("reported", "Reported").with_width(12),
        // Derived column: revenue per unit, no backing field.
        ColumnDef::computed("per_unit", "Per unit", |record| {
            let revenue = record.value_at(2).as_number()?;
            let units = record.value_at(3).as_number()?;
            if units == 0.0 {
                return None;
            }
            Some(CellValue::Number(revenue / units))
        })
        .with_format(|value| match value.as_number() {
            Some(n) => format!("{:.1}", n),
            None => String::new(),
        })
        .with_align(Alignment::Right)
        .with_width(9),
    ]
}

pub fn sample_series() -> Vec<SeriesSpec> {
    vec![
        SeriesSpec::new("revenue", "Revenue").with_kind(SeriesKind::Bar),
        SeriesSpec::new("units", "Units").with_kind(SeriesKind::Line),
    ]
}
