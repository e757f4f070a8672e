//! Example demonstrating the field codec and the click engine.
//!
//! Run with: `cargo run --example field_usage`

use cron_field::codec::{field_string, parse_field, ClockFormat, RenderOptions};
use cron_field::widget::{options, render_tag};
use cron_field::{FieldConfig, PickOutcome, SelectionEngine, SelectionSet, UnitSpec};
use qtty::{Quantity, Second};

type Time = Quantity<Second>;

fn main() -> cron_field::Result<()> {
    println!("=== Field Codec Example ===\n");

    let minutes = UnitSpec::minutes();
    let plain = RenderOptions::default();

    let samples: [Vec<u32>; 6] = [
        vec![],
        vec![3, 4, 5],
        vec![3, 4],
        (0..60).step_by(5).collect(),
        vec![5, 20, 35, 50],
        vec![1, 2, 7, 8, 9, 10, 30],
    ];
    for values in samples {
        let selection = SelectionSet::from_values(values);
        let text = field_string(&selection, &minutes, &plain)?;
        let back = parse_field(&text, &minutes, &plain)?;
        println!("{:<40} -> {text:<14} -> {back}", selection.to_string());
    }

    println!("\n--- Labels ---");
    let hours = FieldConfig::new(UnitSpec::hours())
        .with_render(RenderOptions::default().with_clock_format(ClockFormat::TwelveHour));
    let labels: Vec<String> = options(&hours)?.into_iter().map(|o| o.label).collect();
    println!("hours: {}", labels.join(" "));

    let months = FieldConfig::new(UnitSpec::months())
        .with_render(RenderOptions::default().humanized());
    let q1_and_july = SelectionSet::from([1, 2, 3, 7]);
    println!("months tag: {}", render_tag(&q1_and_july, &months)?);

    println!("\n--- Clicks ---");
    let mut engine = SelectionEngine::new(
        FieldConfig::new(UnitSpec::minutes()).with_placeholder("every minute"),
    )?;
    let mut selection = SelectionSet::new();
    println!("start: {:?}", render_tag(&selection, engine.config())?);

    // A double-click on 15, a single click on 7, then a double-click on 15 again.
    let groups: [&[(f64, u32)]; 3] = [
        &[(0.0, 15), (0.15, 15)],
        &[(1.0, 7)],
        &[(2.0, 15), (2.1, 15)],
    ];
    for group in groups {
        let mut due = None;
        for &(at, value) in group {
            if let PickOutcome::Pending(timer) = engine.select(Some(value), Time::new(at), &selection)? {
                println!("click {value} at {at:.2}s, timer due at {:.2}s", timer.deadline.value());
                due = Some(timer.deadline);
            }
        }
        if let Some(deadline) = due {
            if let Some(next) = engine.poll(deadline, &selection)? {
                selection = next;
                println!("  -> {:?}", render_tag(&selection, engine.config())?);
            }
        }
    }

    Ok(())
}
