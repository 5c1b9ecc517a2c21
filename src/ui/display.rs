//! Styled terminal output for results and summaries.

use bytesize::ByteSize;
use console::style;
use figlet_rs::FIGfont;

use crate::batch::{BatchOutcome, ItemStatus};
use crate::config::APP_NAME;
use crate::input_set::InputSet;

/// Prints the application banner.
pub fn print_banner() {
    match FIGfont::standard().ok().and_then(|font| font.convert(APP_NAME).map(|figure| figure.to_string())) {
        Some(figure) => println!("{}", style(figure).green().bold()),
        None => println!("{}", style(APP_NAME).green().bold()),
    }
}

/// Prints a success line for a single-file operation.
pub fn show_success(action: &str, path: &std::path::Path) {
    println!();
    println!("{} {}", style("✓").green(), style(format!("{action}: {}", path.display())).bold());
}

/// Prints the per-candidate rejection messages from an `InputSet::add`.
pub fn show_rejections(rejections: &[String]) {
    for rejection in rejections {
        println!("{} {rejection}", style("✗").red());
    }
}

/// Prints a one-line-per-file summary of the selected input set.
pub fn show_selection(set: &InputSet) {
    println!();
    println!("{}", style(format!("{} file(s), {} total:", set.len(), ByteSize(set.total_size()))).bold());
    for candidate in set.candidates() {
        println!("  {:>9}  {}", ByteSize(candidate.size).to_string(), candidate.path.display());
    }
    println!();
}

/// Prints the outcome of a batch run, including per-file failures.
pub fn show_batch_summary(outcome: &BatchOutcome) {
    println!();
    println!(
        "{} {}",
        style("✓").green(),
        style(format!("{} of {} file(s) encrypted into \"{}\"", outcome.outputs.len(), outcome.items.len(), outcome.group_name)).bold()
    );

    for item in &outcome.items {
        if item.status == ItemStatus::Failed {
            let detail = item.error.as_deref().unwrap_or("unknown error");
            println!("  {} {}: {detail}", style("skipped").yellow(), item.path.display());
        }
    }
}
