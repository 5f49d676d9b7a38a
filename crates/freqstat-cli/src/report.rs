//! Text report of an analysis
//!
//! Prints the frequency table with aligned columns, its totals and the
//! statistics, rounded for display.

use freqstat_stats::{
    Analysis, ProcessedData, StatisticalResults,
    round::round_to,
    table::{FrequencyTableRow, GroupedRow, GroupedTable, UngroupedRow, UngroupedTable},
};

const LABEL_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 6;
const VALUE_WIDTH: usize = 14;

pub(crate) fn print_analysis(analysis: &Analysis, decimals: u32) {
    match analysis {
        Analysis::Ungrouped { table, .. } => {
            println!("Ungrouped Data ({} observations)", table.count);
            println!("==========================================\n");
            print_ungrouped_header();
        }
        Analysis::Grouped { table, .. } => {
            println!("Grouped Data ({} classes)", table.rows.len());
            println!("==========================================\n");
            print_grouped_header();
        }
        Analysis::Binned(data) => {
            println!("Automatic Class Intervals (Sturges' Rule)");
            println!("==========================================\n");
            print_binning_summary(data, decimals);
            println!();
            print_grouped_header();
        }
    }

    for (i, row) in analysis.table_rows().iter().enumerate() {
        print_row(i + 1, row, decimals);
    }

    match analysis {
        Analysis::Ungrouped { table, .. } => print_ungrouped_totals(table, decimals),
        Analysis::Grouped { table, .. } => print_grouped_totals(table, decimals),
        Analysis::Binned(data) => print_grouped_totals(&data.frequency_table, decimals),
    }
    println!();

    print_statistics(analysis.statistics(), decimals);
}

fn fmt(value: f64, decimals: u32) -> String {
    round_to(value, decimals).to_string()
}

fn print_binning_summary(data: &ProcessedData, decimals: u32) {
    let sorted = data
        .sorted_data
        .iter()
        .map(|&v| fmt(v, decimals))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Sorted data : {sorted}");
    println!("  Range       : {}", fmt(data.range, decimals));
    println!("  Classes     : {}", data.class_count);
    println!("  Class width : {}", fmt(data.class_width, decimals));
}

fn separator(width: usize) {
    println!("  {}", "-".repeat(width));
}

const UNGROUPED_WIDTH: usize = COUNT_WIDTH + VALUE_WIDTH * 2 + 2;

// label(20) + f(6) + cf(6) + x/fx/x²/fx²(14 each) + spaces(6)
const GROUPED_WIDTH: usize = LABEL_WIDTH + COUNT_WIDTH * 2 + VALUE_WIDTH * 4 + 6;

fn print_ungrouped_header() {
    println!(
        "  {:>COUNT_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        "#", "x", "x²"
    );
    separator(UNGROUPED_WIDTH);
}

fn print_grouped_header() {
    println!(
        "  {:<LABEL_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        "Class", "f", "cf", "Midpoint (x)", "fx", "x²", "fx²"
    );
    separator(GROUPED_WIDTH);
}

fn print_row(position: usize, row: &FrequencyTableRow, decimals: u32) {
    match row {
        FrequencyTableRow::Ungrouped(row) => print_ungrouped_row(position, row, decimals),
        FrequencyTableRow::Grouped(row) => print_grouped_row(row, decimals),
    }
}

fn print_ungrouped_row(position: usize, row: &UngroupedRow, decimals: u32) {
    println!(
        "  {:>COUNT_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        position,
        fmt(row.value, decimals),
        fmt(row.x2, decimals)
    );
}

fn print_grouped_row(row: &GroupedRow, decimals: u32) {
    println!(
        "  {:<LABEL_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        row.label,
        row.frequency,
        row.cumulative_frequency,
        fmt(row.midpoint, decimals),
        fmt(row.fx, decimals),
        fmt(row.x2, decimals),
        fmt(row.fx2, decimals),
    );
}

fn print_ungrouped_totals(table: &UngroupedTable, decimals: u32) {
    separator(UNGROUPED_WIDTH);
    println!(
        "  {:>COUNT_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        format!("n={}", table.count),
        fmt(table.sum, decimals),
        fmt(table.sum_x2, decimals)
    );
}

fn print_grouped_totals(table: &GroupedTable, decimals: u32) {
    separator(GROUPED_WIDTH);
    println!(
        "  {:<LABEL_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$}",
        "Total",
        table.total_frequency,
        "",
        "",
        fmt(table.total_fx, decimals),
        "",
        fmt(table.total_fx2, decimals),
    );
}

fn print_statistics(stats: &StatisticalResults, decimals: u32) {
    let shown = stats.rounded(decimals);
    let mode = shown.mode.map_or_else(
        || "no mode".to_owned(),
        |mode| {
            mode.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        },
    );

    println!("Statistics:");
    println!("  Mean               : {}", shown.mean);
    println!("  Median             : {}", shown.median);
    println!("  Mode               : {mode}");
    println!("  Variance           : {}", shown.variance);
    println!("  Standard deviation : {}", shown.standard_deviation);
}
