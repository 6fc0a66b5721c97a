use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::errors::with_parse_context;
use crate::render::{render_all_pages, render_products};

use super::catalog_loader::CatalogSource;
use super::products_page::ProductsPage;

/// One line of user input in the interactive pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Goto(usize),
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Ok(BrowseCommand::Next),
            "p" | "prev" | "previous" => Ok(BrowseCommand::Previous),
            "q" | "quit" | "exit" => Ok(BrowseCommand::Quit),
            other => with_parse_context(other.parse::<usize>(), "page number")
                .map(BrowseCommand::Goto),
        }
    }
}

/// Load once and render either one requested page or every page.
///
/// An out-of-range `requested_page` is rejected and the view stays on page 1.
pub async fn open_products<S: CatalogSource>(
    page: &mut ProductsPage<S>,
    requested_page: usize,
    all: bool,
) -> String {
    let status = page.load().await;

    if all {
        return render_all_pages(page.pages(), status);
    }

    if requested_page != 1 && !page.transition(requested_page) {
        warn!(
            "Page {} is out of range (total pages: {}), staying on page {}",
            requested_page,
            page.total_pages(),
            page.current_page()
        );
    }
    render_products(&page.view(), status)
}

const PROMPT: &str = "[n]ext, [p]revious, page number, [q]uit > ";

/// Load the catalog, then apply commands from `input` in order, re-rendering after each
pub async fn run_browse<S, R, W>(page: &mut ProductsPage<S>, input: R, output: &mut W) -> Result<()>
where
    S: CatalogSource,
    R: BufRead,
    W: Write,
{
    page.load().await;
    write_frame(page, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let moved = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Next => page.next(),
            BrowseCommand::Previous => page.previous(),
            BrowseCommand::Goto(requested) => page.transition(requested),
        };
        debug!("{:?} -> page {} (moved: {})", command, page.current_page(), moved);

        write_frame(page, output)?;
    }

    Ok(())
}

fn write_frame<S: CatalogSource, W: Write>(page: &ProductsPage<S>, output: &mut W) -> Result<()> {
    write!(output, "{}", render_products(&page.view(), page.load_status()))?;
    write!(output, "{}", PROMPT)?;
    output.flush().context("Failed to flush output")
}
