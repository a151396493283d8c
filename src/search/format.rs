use crate::suggest::domain::models::ResultItem;
use colored::Colorize;

/// One-line rendering of a suggestion for one-shot output.
pub fn format_item(item: &ResultItem, use_color: bool) -> String {
    let price = format!("{:.2}", item.price);
    let path = item.detail_path();

    if use_color {
        format!(
            "{} {} {} {}",
            format!("[{}]", item.domain).bright_blue(),
            item.name.bold(),
            price.bright_green(),
            path.dimmed()
        )
    } else {
        format!("[{}] {} {} {}", item.domain, item.name, price, path)
    }
}
