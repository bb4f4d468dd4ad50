use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::codes::{self, Category};
use crate::config::ThemeConfig;
use crate::model::Record;

const RULE_WIDTH: usize = 60;

fn category_of(record: &Record) -> Option<Category> {
    record.id.parse().ok().and_then(Category::from_code)
}

/// Full description of one record: header, category, detail and link.
pub fn write_record(out: &mut impl Write, record: &Record, theme: &ThemeConfig) -> io::Result<()> {
    let color = theme.category_color(category_of(record));

    writeln!(out, "{}", format!("HTTP {}: {}", record.id, record.label).with(color).bold())?;
    if let Some(category) = &record.category {
        writeln!(out, "{}", format!("[{category}]").with(color))?;
    }
    if let Some(detail) = &record.detail {
        writeln!(out)?;
        writeln!(out, "{}", "Detail:".bold())?;
        writeln!(out, "{detail}")?;
    }
    if let Some(link) = &record.link {
        writeln!(out)?;
        writeln!(out, "{}", "MDN Documentation:".bold())?;
        writeln!(out, "{}", link.as_str().with(ThemeConfig::parse_color(&theme.link)))?;
    }
    writeln!(out, "{}", "─".repeat(RULE_WIDTH).with(color))
}

pub fn write_not_found(out: &mut impl Write, code: &str, theme: &ThemeConfig) -> io::Result<()> {
    let muted = ThemeConfig::parse_color(&theme.muted);
    writeln!(out, "{}", format!("HTTP status code {code} not found").with(muted))
}

/// Lists every code, grouped under category headers, or only the codes of
/// `category`.
pub fn write_list(out: &mut impl Write, category: Option<Category>, theme: &ThemeConfig) -> io::Result<()> {
    match category {
        Some(category) => {
            let title = format!("{}xx - {category}", category.class());
            writeln!(out, "{}", title.bold())?;
            write_category_items(out, category, theme)
        }
        None => {
            writeln!(out, "{}", "All HTTP Status Codes".bold())?;
            for category in Category::ALL {
                let color = theme.category_color(Some(category));
                writeln!(out)?;
                writeln!(out, "{}", format!("{}xx - {category}", category.class()).with(color).bold())?;
                write_category_items(out, category, theme)?;
            }
            Ok(())
        }
    }
}

fn write_category_items(out: &mut impl Write, category: Category, theme: &ThemeConfig) -> io::Result<()> {
    let color = theme.category_color(Some(category));
    for entry in codes::in_category(category) {
        writeln!(out, "  {} {}", format!("{}:", entry.code).with(color), entry.description)?;
    }
    Ok(())
}
