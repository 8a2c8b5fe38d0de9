use planner::emit::artifact::WriteSummary;
use view_syntax::Diagnostic;

/// Prints diagnostics to stderr, returning how many are errors.
pub fn print_diagnostics(path: &str, diagnostics: &[Diagnostic]) -> usize {
    for diagnostic in diagnostics {
        eprintln!("{path}: {diagnostic}");
    }
    diagnostics.iter().filter(|d| d.is_error()).count()
}

pub fn print_summary(summary: &WriteSummary) {
    println!(
        "Wrote {} model(s) to {}",
        summary.count,
        summary.directory.display()
    );
    for file in &summary.files {
        println!("  {}", file.display());
    }
}
