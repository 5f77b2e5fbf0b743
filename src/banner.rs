use crate::params::WorkflowParameters;
use crate::workflow::Step;

use console::{measure_text_width, style};
use std::iter;

/// Prints a framed, colorized summary of the steps about to run.
///
/// The frame is sized to the widest **visible** line, using
/// [`console::measure_text_width`] so that ANSI color codes inside the
/// content do not throw off the padding. Borders are styled independently
/// from the inner text.
///
/// # Parameters
///
/// * `params` – The parameters of this run.
/// * `steps` – The planned steps, in execution order.
/// * `dry_run` – When `true`, a highlighted notice says nothing will be changed.
///
/// # Examples
///
/// ```no_run
/// use grebase::banner::print_banner;
/// use grebase::params::WorkflowParameters;
/// use grebase::workflow::plan;
///
/// let params = WorkflowParameters::new("feat-x", "master", "fix bug", ".", false, false);
/// print_banner(&params, &plan(&params), false);
/// ```
pub fn print_banner(params: &WorkflowParameters, steps: &[Step], dry_run: bool) {
    println!();
    for row in frame(&banner_lines(params, steps, dry_run)) {
        println!("{}", row);
    }
    println!();
}

/// Boxes `lines` in double-line borders, one space of padding on each side.
///
/// Every returned row has the same visible width.
fn frame(lines: &[String]) -> Vec<String> {
    let inner = lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    let edge = |corners: (&str, &str)| {
        style(format!("{}{}{}", corners.0, "═".repeat(inner + 2), corners.1))
            .blue()
            .bold()
            .to_string()
    };
    let side = style("║").blue().bold();

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(edge(("╔", "╗")));
    rows.extend(lines.iter().map(|line| {
        let fill = inner - measure_text_width(line);
        format!("{side} {line}{} {side}", " ".repeat(fill))
    }));
    rows.push(edge(("╚", "╝")));
    rows
}

/// Builds the banner text: title, optional dry-run notice, then one
/// numbered line per step.
///
/// The dry-run notice carries ANSI styling; measure visible width rather
/// than `str::len()`.
fn banner_lines(params: &WorkflowParameters, steps: &[Step], dry_run: bool) -> Vec<String> {
    let title = iter::once(format!(
        "Integrate {} into {}",
        params.feature_branch, params.target_branch
    ))
    .chain(iter::once(String::new()));

    let notice = if dry_run {
        vec![
            style("Dry run: git commands will be printed, not executed.")
                .yellow()
                .bold()
                .to_string(),
            String::new(),
        ]
    } else {
        Vec::new()
    }
    .into_iter();

    let body = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}) {}", i + 1, step.describe()));

    title.chain(notice).chain(body).collect()
}
