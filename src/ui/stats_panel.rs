use crate::constants::display::UNDEFINED_TEXT;
use crate::data::Sample;
use crate::state::{DerivedStatistics, ReferenceLines, StatValue};
use std::fmt::Write;

const NAME_HEADER: &str = "Calculation";
const VALUE_HEADER: &str = "Value";

fn value_text(value: &StatValue) -> String {
    match value {
        StatValue::Number(v) => format!("{}", v),
        StatValue::Count(c) => format!("{}", c),
        StatValue::Undefined(_) => UNDEFINED_TEXT.to_string(),
    }
}

/// Render the two-column statistics table
pub fn render_table(table: &DerivedStatistics) -> String {
    let rows: Vec<(&str, String)> = table
        .rows()
        .iter()
        .map(|row| (row.key.label(), value_text(&row.value)))
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.len())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$} | {:>value_width$}", NAME_HEADER, VALUE_HEADER);
    let _ = writeln!(out, "{}-+-{}", "-".repeat(name_width), "-".repeat(value_width));
    for (name, value) in rows {
        let _ = writeln!(out, "{:<name_width$} | {:>value_width$}", name, value);
    }
    out
}

/// Render the chart reference lines, one per line
pub fn render_lines(lines: &ReferenceLines) -> String {
    let show = |v: Option<f64>| v.map_or_else(|| UNDEFINED_TEXT.to_string(), |v| v.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "average:          {}", show(lines.average));
    let _ = writeln!(out, "variation lower:  {}", show(lines.variation_lower));
    let _ = writeln!(out, "variation upper:  {}", show(lines.variation_upper));
    let _ = writeln!(out, "pass min:         {}", lines.pass_min);
    let _ = writeln!(out, "pass max:         {}", lines.pass_max);
    out
}

/// Render the plotted points as `x<TAB>y` rows
pub fn render_points(points: &[Sample]) -> String {
    points.iter().fold(String::new(), |mut out, p| {
        let _ = writeln!(out, "{}\t{}", p.x, p.y);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PassThresholds, TableSections};

    #[test]
    fn test_render_table() {
        let table = DerivedStatistics::compute(
            &[9.0, 9.0],
            PassThresholds { min: 8.0, max: 13.0 },
            3,
            TableSections::default(),
        );
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 8);
        assert!(lines[0].starts_with("Calculation"));
        assert!(lines[2].starts_with("average"));
        assert!(lines[2].ends_with(" 9"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("cpk") && l.ends_with(UNDEFINED_TEXT)));
    }

    #[test]
    fn test_render_points() {
        let points = [Sample::new(0.0, 1.5), Sample::new(1.0, 2.0)];
        assert_eq!(render_points(&points), "0\t1.5\n1\t2\n");
    }
}
