//! Terminal front-end for the query page.
//!
//! Each input line is the query; pressing Enter is the submit control.
//! Blank lines are ignored, `exit`/`quit` or EOF end the session.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::QueryBackend;
use crate::controller::QueryController;
use crate::state::view::{BADGE, BYLINE, DISCLAIMER, HEADLINE, LOADING_LABEL, PageView, TITLE};

/// Print the page header and disclaimer.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_banner(view: &PageView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{TITLE} [{BADGE}] {BYLINE}")?;
    writeln!(out)?;
    writeln!(out, "{HEADLINE}")?;
    writeln!(out, "{DISCLAIMER}")?;
    writeln!(out)?;
    writeln!(out, "{}", view.placeholder)?;
    Ok(())
}

/// Print the response panel, if the view has one.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_response(view: &PageView, out: &mut impl Write) -> io::Result<()> {
    if let Some(text) = &view.response {
        writeln!(out, "Response:")?;
        writeln!(out, "{text}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Run the interactive loop until EOF or an exit command.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run<B, R, W>(controller: &QueryController<B>, input: R, out: &mut W) -> io::Result<()>
where
    B: QueryBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render_banner(&controller.view(), out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "{} ", controller.view().submit_label)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        let blank = line.trim().is_empty();
        controller.set_query(line);
        if blank {
            continue;
        }

        writeln!(out, "{LOADING_LABEL}")?;
        out.flush()?;
        controller.submit_current().await;
        render_response(&controller.view(), out)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;
