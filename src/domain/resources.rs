use std::cmp::Ordering;

use super::catalog::CropResourceTable;
use super::entities::{CropName, FieldParameters, ResourceLine, ResourceTotals};

pub struct ResourceSummary {
    pub lines: Vec<ResourceLine>,
    pub totals: ResourceTotals,
}

/// Per-crop estimates plus their element-wise total.
pub fn summarize_resources(
    table: &CropResourceTable,
    selected: &[CropName],
    field: &FieldParameters,
) -> ResourceSummary {
    let lines = compute_resources(table, selected, field);
    let totals = totals(&lines);
    ResourceSummary { lines, totals }
}

pub fn compute_resources(
    table: &CropResourceTable,
    selected: &[CropName],
    field: &FieldParameters,
) -> Vec<ResourceLine> {
    selected
        .iter()
        .map(|crop| estimate_crop(table, crop, field))
        .collect()
}

/// Irrigation only scales water and soil never scales cost; each quantity is
/// rounded on its own from unrounded intermediates.
pub fn estimate_crop(table: &CropResourceTable, crop: &str, field: &FieldParameters) -> ResourceLine {
    let base = table.profile_or_zero(crop);
    let size = field.field_size_acres;
    let soil = field.soil_type.factor();
    let irrigation = field.irrigation_type.factor();

    ResourceLine {
        crop: crop.to_string(),
        water_liters: round_units(base.water_liters_per_acre * size * soil * irrigation),
        fertilizer_kg: round_units(base.fertilizer_kg_per_acre * size * soil),
        cost: round_units(base.cost_per_acre * size),
    }
}

pub fn totals(lines: &[ResourceLine]) -> ResourceTotals {
    lines.iter().fold(ResourceTotals::default(), |acc, line| ResourceTotals {
        water_liters: acc.water_liters.saturating_add(line.water_liters),
        fertilizer_kg: acc.fertilizer_kg.saturating_add(line.fertilizer_kg),
        cost: acc.cost.saturating_add(line.cost),
    })
}

/// Saturates at the `i64` bounds; a NaN intermediate counts as zero.
fn round_units(value: f64) -> i64 {
    const MAX: f64 = i64::MAX as f64;
    const MIN: f64 = i64::MIN as f64;

    let rounded = value.round();
    if rounded.is_nan() {
        0
    } else if rounded >= MAX {
        i64::MAX
    } else if rounded <= MIN {
        i64::MIN
    } else {
        rounded as i64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceColumn {
    #[default]
    Name,
    Water,
    Fertilizer,
    Cost,
}

impl ResourceColumn {
    pub const ALL: [ResourceColumn; 4] = [
        ResourceColumn::Name,
        ResourceColumn::Water,
        ResourceColumn::Fertilizer,
        ResourceColumn::Cost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceColumn::Name => "Crop Name",
            ResourceColumn::Water => "Water Usage (L)",
            ResourceColumn::Fertilizer => "Fertilizer Needs (kg)",
            ResourceColumn::Cost => "Estimated Cost ($)",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceSort {
    pub column: ResourceColumn,
    pub direction: SortDirection,
}

impl ResourceSort {
    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle(self, column: ResourceColumn) -> Self {
        if self.column == column {
            let direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
            Self { column, direction }
        } else {
            Self {
                column,
                direction: SortDirection::Ascending,
            }
        }
    }

    fn compare(&self, a: &ResourceLine, b: &ResourceLine) -> Ordering {
        let ordering = match self.column {
            ResourceColumn::Name => a.crop.cmp(&b.crop),
            ResourceColumn::Water => a.water_liters.cmp(&b.water_liters),
            ResourceColumn::Fertilizer => a.fertilizer_kg.cmp(&b.fertilizer_kg),
            ResourceColumn::Cost => a.cost.cmp(&b.cost),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive name filter followed by a stable sort.
pub fn filter_and_sort(lines: &[ResourceLine], query: &str, sort: ResourceSort) -> Vec<ResourceLine> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<ResourceLine> = lines
        .iter()
        .filter(|line| needle.is_empty() || line.crop.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{IrrigationType, SoilType};

    fn field(size: f64, soil: SoilType, irrigation: IrrigationType) -> FieldParameters {
        FieldParameters {
            field_size_acres: size,
            soil_type: soil,
            irrigation_type: irrigation,
        }
    }

    fn crops(names: &[&str]) -> Vec<CropName> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn tomatoes_on_clay_with_drip() {
        let table = CropResourceTable::builtin();
        let line = estimate_crop(
            &table,
            "Tomatoes",
            &field(2.0, SoilType::Clay, IrrigationType::Drip),
        );
        assert_eq!(line.water_liters, 2160);
        assert_eq!(line.fertilizer_kg, 120);
        assert_eq!(line.cost, 2000);
    }

    #[test]
    fn water_is_linear_in_field_size() {
        let table = CropResourceTable::builtin();
        for size in [0.5, 1.0, 2.0, 3.0, 7.0, 12.0] {
            let base = estimate_crop(&table, "Corn", &field(1.0, SoilType::Sandy, IrrigationType::Sprinkler));
            let scaled = estimate_crop(&table, "Corn", &field(size, SoilType::Sandy, IrrigationType::Sprinkler));
            assert_eq!(scaled.water_liters, (size * base.water_liters as f64).round() as i64);
        }
    }

    #[test]
    fn irrigation_never_changes_fertilizer_or_cost() {
        let table = CropResourceTable::builtin();
        for soil in SoilType::ALL {
            let lines: Vec<_> = IrrigationType::ALL
                .iter()
                .map(|irrigation| estimate_crop(&table, "Peppers", &field(3.5, soil, *irrigation)))
                .collect();
            assert!(lines.windows(2).all(|w| w[0].fertilizer_kg == w[1].fertilizer_kg));
            assert!(lines.windows(2).all(|w| w[0].cost == w[1].cost));
        }
    }

    #[test]
    fn soil_never_changes_cost() {
        let table = CropResourceTable::builtin();
        let costs: Vec<_> = SoilType::ALL
            .iter()
            .map(|soil| estimate_crop(&table, "Carrots", &field(4.2, *soil, IrrigationType::Drip)).cost)
            .collect();
        assert!(costs.iter().all(|cost| *cost == costs[0]));
    }

    #[test]
    fn empty_selection_has_zero_totals() {
        let table = CropResourceTable::builtin();
        let summary = summarize_resources(&table, &[], &FieldParameters::default());
        assert!(summary.lines.is_empty());
        assert_eq!(summary.totals, ResourceTotals::default());
    }

    #[test]
    fn unknown_crop_is_a_zero_line() {
        let table = CropResourceTable::builtin();
        let lines = compute_resources(&table, &crops(&["Kale"]), &FieldParameters::default());
        assert_eq!(
            lines,
            vec![ResourceLine {
                crop: "Kale".to_string(),
                water_liters: 0,
                fertilizer_kg: 0,
                cost: 0,
            }]
        );
    }

    #[test]
    fn totals_have_no_cross_terms() {
        let table = CropResourceTable::builtin();
        let params = field(1.5, SoilType::Sandy, IrrigationType::Sprinkler);
        let summary = summarize_resources(&table, &crops(&["Lettuce", "Cucumbers"]), &params);
        let lettuce = estimate_crop(&table, "Lettuce", &params);
        let cucumbers = estimate_crop(&table, "Cucumbers", &params);
        assert_eq!(summary.totals.water_liters, lettuce.water_liters + cucumbers.water_liters);
        assert_eq!(summary.totals.fertilizer_kg, lettuce.fertilizer_kg + cucumbers.fertilizer_kg);
        assert_eq!(summary.totals.cost, lettuce.cost + cucumbers.cost);
    }

    #[test]
    fn non_positive_field_size_propagates() {
        let table = CropResourceTable::builtin();
        let zero = estimate_crop(&table, "Corn", &field(0.0, SoilType::Loamy, IrrigationType::Traditional));
        assert_eq!((zero.water_liters, zero.fertilizer_kg, zero.cost), (0, 0, 0));
        let negative = estimate_crop(&table, "Corn", &field(-1.0, SoilType::Loamy, IrrigationType::Traditional));
        assert_eq!(negative.cost, -1200);
    }

    #[test]
    fn huge_field_saturates_instead_of_wrapping() {
        let table = CropResourceTable::builtin();
        let params = field(1e16, SoilType::Loamy, IrrigationType::Traditional);
        let corn = estimate_crop(&table, "Corn", &params);
        assert_eq!(corn.water_liters, i64::MAX);
        assert_eq!(corn.cost, i64::MAX);

        let summary = summarize_resources(&table, &crops(&["Corn", "Tomatoes"]), &params);
        assert_eq!(summary.totals.water_liters, i64::MAX);
        assert_eq!(summary.totals.cost, i64::MAX);
    }

    #[test]
    fn non_finite_field_size_never_panics() {
        let table = CropResourceTable::builtin();
        let selection = crops(&["Corn", "Tomatoes"]);

        let infinite = field(f64::INFINITY, SoilType::Clay, IrrigationType::Drip);
        let summary = summarize_resources(&table, &selection, &infinite);
        assert_eq!(summary.totals.fertilizer_kg, i64::MAX);

        let negative = field(f64::NEG_INFINITY, SoilType::Clay, IrrigationType::Drip);
        let summary = summarize_resources(&table, &selection, &negative);
        assert_eq!(summary.totals.cost, i64::MIN);

        let nan = field(f64::NAN, SoilType::Clay, IrrigationType::Drip);
        let line = estimate_crop(&table, "Corn", &nan);
        assert_eq!((line.water_liters, line.fertilizer_kg, line.cost), (0, 0, 0));
    }

    #[test]
    fn sort_toggle_flips_then_resets() {
        let sort = ResourceSort::default().toggle(ResourceColumn::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
        let sort = sort.toggle(ResourceColumn::Cost);
        assert_eq!(sort.column, ResourceColumn::Cost);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn filter_is_case_insensitive_and_sorted() {
        let table = CropResourceTable::builtin();
        let lines = compute_resources(
            &table,
            &crops(&["Tomatoes", "Corn", "Carrots", "Lettuce"]),
            &FieldParameters::default(),
        );
        let sort = ResourceSort {
            column: ResourceColumn::Water,
            direction: SortDirection::Descending,
        };
        let rows = filter_and_sort(&lines, "CO", sort);
        let names: Vec<_> = rows.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(names, ["Corn"]);

        let all = filter_and_sort(&lines, "", sort);
        let names: Vec<_> = all.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(names, ["Corn", "Tomatoes", "Lettuce", "Carrots"]);
    }
}
