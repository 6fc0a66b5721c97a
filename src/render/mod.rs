use colored::Colorize;
use log::warn;

use crate::domain::{ItemRecord, LoadStatus};
use crate::pagination::{PageIterator, PageView};
use crate::router::Route;

pub const LOADING_MESSAGE: &str = "Loading products...";
const NO_DESCRIPTION: &str = "No description available";
const NO_AVAILABILITY: &str = "No availability information";
const NO_PRICE: &str = "Not available";

/// Plain heading used by the static views
pub fn render_static(route: Route) -> String {
    format!("{}\n", route.title().bold())
}

/// Menu heading, card list and the pagination control line
pub fn render_products(view: &PageView<'_, ItemRecord>, status: LoadStatus) -> String {
    if status == LoadStatus::Failed {
        warn!("Rendering products after a failed load");
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", Route::Products.title().red().bold()));

    if view.visible_slice.is_empty() {
        out.push_str(LOADING_MESSAGE);
        out.push('\n');
    } else {
        for item in view.visible_slice {
            out.push_str(&render_card(item));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&render_controls(view));
    out.push('\n');
    out
}

/// Every page in order, each under its own "Page X of Y" line
pub fn render_all_pages(pages: PageIterator<'_, ItemRecord>, status: LoadStatus) -> String {
    let total = pages.total_pages();
    if total == 0 {
        if status == LoadStatus::Failed {
            warn!("Rendering products after a failed load");
        }
        return format!(
            "{}\n\n{}\n",
            Route::Products.title().red().bold(),
            LOADING_MESSAGE
        );
    }

    let mut out = format!("{}\n", Route::Products.title().red().bold());
    for (page, slice) in pages {
        out.push_str(&format!("\n{}\n", format!("Page {} of {}", page, total).bold()));
        for item in slice {
            out.push_str(&render_card(item));
        }
    }
    out
}

pub fn render_card(item: &ItemRecord) -> String {
    let header = format!(" {} ", item.name).white().on_red().bold();
    format!(
        "{}\n  {}\n  {}\n  {}\n",
        header,
        or_fallback(item.description.as_deref(), NO_DESCRIPTION).italic(),
        or_fallback(item.availability.as_deref(), NO_AVAILABILITY).dimmed(),
        format!("Price: ${}", format_price(item.price)).bold()
    )
}

pub fn render_controls<T>(view: &PageView<'_, T>) -> String {
    format!(
        "{}  Page {} of {}  {}",
        button("Previous", view.has_previous),
        view.current_page,
        view.total_pages,
        button("Next", view.has_next)
    )
}

fn button(label: &str, enabled: bool) -> String {
    let text = format!("[{}]", label);
    if enabled {
        text.bold().to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// Empty strings count as missing, same as absent values
fn or_fallback<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}

/// A zero price is shown as unavailable, like a missing one
fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value != 0.0 && value.is_finite() => format!("{:.2}", value),
        _ => NO_PRICE.to_string(),
    }
}
