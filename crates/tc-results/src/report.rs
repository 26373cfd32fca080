//! Plain-text analysis report for an exported cycle.

use crate::types::CycleDocument;
use chrono::NaiveDate;
use std::fmt::Write;
use tc_cycles::{CycleType, StatePoint, find_spec};

/// Render the report for `doc`, stamped with `generated`.
pub fn render_report(doc: &CycleDocument, generated: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, doc, generated);
    out
}

/// [`render_report`] stamped with today's local date.
pub fn render_report_today(doc: &CycleDocument) -> String {
    render_report(doc, chrono::Local::now().date_naive())
}

fn write_report(out: &mut String, doc: &CycleDocument, generated: NaiveDate) -> std::fmt::Result {
    let cycle = doc.cycle_type;
    let r = &doc.results;

    writeln!(out, "{} Cycle Analysis", cycle.title())?;
    writeln!(out, "Generated on {}", generated.format("%Y-%m-%d"))?;
    writeln!(out)?;

    writeln!(out, "Input Parameters")?;
    for (name, value) in doc.parameters.entries() {
        let label = find_spec(cycle, name)
            .map(|spec| spec.display_label())
            .unwrap_or_else(|| name.to_string());
        writeln!(out, "  {}: {}", label, format_input(value))?;
    }
    writeln!(out)?;

    writeln!(out, "Results")?;
    if !r.is_computed() {
        writeln!(out, "  (no valid cycle computed)")?;
        return Ok(());
    }
    writeln!(out, "  Thermal Efficiency: {:.2}%", r.efficiency * 100.0)?;
    writeln!(out, "  Work Output: {:.2} kJ/kg", r.work_output)?;
    writeln!(out, "  Heat Input: {:.2} kJ/kg", r.heat_input)?;
    writeln!(out, "  Heat Rejected: {:.2} kJ/kg", r.heat_rejected)?;
    match cycle {
        CycleType::Rankine => {
            writeln!(out, "  Steam Quality: {:.2}%", r.steam_quality * 100.0)?;
        }
        CycleType::Otto | CycleType::Diesel => {
            writeln!(out, "  Max Temperature: {:.1} K", r.max_temperature)?;
            writeln!(out, "  Max Pressure: {:.2} MPa", r.max_pressure)?;
        }
    }
    writeln!(out)?;

    write_table(out, "P-V Diagram", "v [m3/kg]", "P [MPa]", &r.pv_data)?;
    writeln!(out)?;
    write_table(out, "T-S Diagram", "s [kJ/kg-K]", "T [K]", &r.ts_data)?;
    Ok(())
}

fn write_table(
    out: &mut String,
    title: &str,
    x_header: &str,
    y_header: &str,
    points: &[StatePoint],
) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "  {:<6} {:>14} {:>14}", "State", x_header, y_header)?;
    // The closing point repeats state 1.
    let states = if points.len() > 1 { points.len() - 1 } else { points.len() };
    for (i, p) in points.iter().take(states).enumerate() {
        writeln!(out, "  {:<6} {:>14.4} {:>14.4}", i + 1, p.x, p.y)?;
    }
    Ok(())
}

fn format_input(value: f64) -> String {
    if value < 0.01 {
        format!("{value:.4}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_cycles::{CycleParameters, CycleResult};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn input_precision() {
        assert_eq!(format_input(0.008), "0.0080");
        assert_eq!(format_input(8.0), "8.00");
        assert_eq!(format_input(1800.0), "1800.00");
    }

    #[test]
    fn rankine_report() {
        let doc = CycleDocument::evaluate(CycleParameters::default_for(CycleType::Rankine));
        let text = render_report(&doc, date());

        assert!(text.starts_with("Rankine Cycle Analysis\nGenerated on 2026-03-14\n"));
        assert!(text.contains("Condenser Pressure (MPa): 0.0080"));
        assert!(text.contains("Steam Quality: 85.00%"));
        assert!(!text.contains("Max Pressure"));
        assert!(text.contains("P-V Diagram"));
        assert!(text.contains("T-S Diagram"));
    }

    #[test]
    fn otto_report_lists_peak_state() {
        let doc = CycleDocument::evaluate(CycleParameters::default_for(CycleType::Otto));
        let text = render_report(&doc, date());

        assert!(text.contains("Thermal Efficiency: 56.47%"));
        assert!(text.contains("Max Temperature: "));
        assert!(text.contains("Max Pressure: "));
        assert!(!text.contains("Steam Quality"));
    }

    #[test]
    fn tables_list_four_states() {
        let doc = CycleDocument::evaluate(CycleParameters::default_for(CycleType::Diesel));
        let text = render_report(&doc, date());
        let pv = text
            .split("P-V Diagram\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        // header + 4 states
        assert_eq!(pv.lines().count(), 5);
    }

    #[test]
    fn zeroed_result_is_called_out() {
        let params = CycleParameters::default_for(CycleType::Otto);
        let doc = CycleDocument::new(params, CycleResult::zeroed());
        let text = render_report(&doc, date());

        assert!(text.contains("no valid cycle computed"));
        assert!(!text.contains("Thermal Efficiency"));
    }

    #[test]
    fn report_mentions_every_parameter_label() {
        for cycle in CycleType::ALL {
            let doc = CycleDocument::evaluate(CycleParameters::default_for(cycle));
            let text = render_report(&doc, date());
            for spec in tc_cycles::parameter_specs(cycle) {
                assert!(text.contains(&spec.display_label()), "{cycle}: {}", spec.name);
            }
        }
    }
}
