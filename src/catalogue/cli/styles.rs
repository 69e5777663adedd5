use console::Style;
use once_cell::sync::Lazy;

pub static ITEM_ACTIVE: Lazy<Style> = Lazy::new(Style::new);
pub static ITEM_ARCHIVED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static STATUS_COMPLETE: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static STATUS_TODO: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static MATCH_ITEM: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().bold());
