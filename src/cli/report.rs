//! Printing command results.
//!
//! Fragments are the product and go to stdout; everything else goes to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{
    fragment::Fragment,
    generate::ComponentOutput,
    issues::Issue,
    report::{print_fragments, report},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_outputs(outputs: &[ComponentOutput], verbose: bool) -> Result<()> {
    let fragments: Vec<Fragment> = outputs
        .iter()
        .flat_map(|output| output.fragments.iter().cloned())
        .collect();
    print_fragments(&fragments).context("Failed to write fragments to stdout")?;

    if verbose {
        print_notes_to(outputs, &mut io::stderr().lock());
    }

    let issues: Vec<Issue> = outputs
        .iter()
        .flat_map(|output| output.issues.iter().cloned())
        .collect();
    report(&issues);

    Ok(())
}

/// One line per component saying what it produced.
pub fn print_notes_to<W: Write>(outputs: &[ComponentOutput], writer: &mut W) {
    for output in outputs {
        let name = output.component.name();
        let _ = if output.skipped {
            writeln!(writer, "Note: {}: skipped", name)
        } else {
            writeln!(
                writer,
                "Note: {}: {} {}, {} {}",
                name,
                output.fragments.len(),
                if output.fragments.len() == 1 {
                    "fragment"
                } else {
                    "fragments"
                },
                output.issues.len(),
                if output.issues.len() == 1 {
                    "diagnostic"
                } else {
                    "diagnostics"
                }
            )
        };
    }
}
