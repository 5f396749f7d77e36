use crate::io::{IoDirection, IoPoint};
use itertools::Itertools;
use std::fmt::Write;

/// Renders the I/O list as a plain-text inputs/outputs summary.
pub fn format_io_as_text(io_list: &[IoPoint]) -> String {
    let mut output = String::from("Inputs:\n");
    output.push_str(&format_direction_lines(io_list, IoDirection::Input));
    output.push_str("\n\nOutputs:\n");
    output.push_str(&format_direction_lines(io_list, IoDirection::Output));
    output
}

fn format_direction_lines(io_list: &[IoPoint], direction: IoDirection) -> String {
    let points: Vec<&IoPoint> = io_list.iter().filter(|p| p.direction == direction).collect();
    if points.is_empty() {
        let label = match direction {
            IoDirection::Input => "inputs",
            IoDirection::Output => "outputs",
        };
        return format!("  (No {} defined)", label);
    }
    points
        .iter()
        .map(|p| {
            format!(
                "  - {} ({}): {}",
                p.label,
                p.address,
                p.description.as_deref().unwrap_or("")
            )
        })
        .join("\n")
}

/// Renders the I/O list as an ST `VAR_GLOBAL` declaration body, one
/// direction block per comment header.
pub fn format_var_global(io_list: &[IoPoint]) -> String {
    let mut output = String::new();
    output.push_str(&format_direction_block(io_list, IoDirection::Input));
    output.push_str(&format_direction_block(io_list, IoDirection::Output));
    output
}

fn format_direction_block(io_list: &[IoPoint], direction: IoDirection) -> String {
    let points: Vec<&IoPoint> = io_list.iter().filter(|p| p.direction == direction).collect();
    if points.is_empty() {
        return String::new();
    }

    let header = match direction {
        IoDirection::Input => "(* Inputs *)",
        IoDirection::Output => "(* Outputs *)",
    };
    let mut block = String::new();
    writeln!(&mut block, "{}", header).unwrap();
    for point in points {
        writeln!(
            &mut block,
            "  {} AT {} : {}; (* {} *)",
            point.label,
            point.address,
            point.data_type,
            point.description.as_deref().unwrap_or("")
        )
        .unwrap();
    }
    block
}
