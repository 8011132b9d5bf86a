use crate::IconDescriptor;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
pub struct IconRow {
    #[tabled(rename = "#")]
    pub idx: usize,
    #[tabled(rename = "Title")]
    pub title: &'static str,
    #[tabled(rename = "Path")]
    pub path: String,
}

impl IconRow {
    fn from_icon(icon: &IconDescriptor, asset_base: Option<&str>) -> Self {
        Self {
            idx: icon.idx,
            title: icon.title,
            path: match asset_base {
                Some(base) => icon.url(base),
                None => icon.path.to_string(),
            },
        }
    }
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

/// Render icons as a rounded table, resolving paths against `asset_base` when set
pub fn icon_table<'a>(
    icons: impl IntoIterator<Item = &'a IconDescriptor>,
    asset_base: Option<&str>,
) -> String {
    let rows: Vec<IconRow> = icons
        .into_iter()
        .map(|icon| IconRow::from_icon(icon, asset_base))
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}
