use crate::{OutputMode, emit_success};
use distro_icons::config::{self, IconsConfig};
use distro_icons::server::routes::IconView;
use distro_icons::ui::{self, Icons};
use distro_icons::{IconCatalog, IconDescriptor};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run_list(output_mode: OutputMode, config: &IconsConfig) -> anyhow::Result<()> {
    let catalog = IconCatalog::checked()?;
    let base = config.asset_base.as_deref();

    if output_mode.is_human() {
        ui::header(&format!("{} icons", catalog.count()));
        println!("{}", ui::icon_table(catalog, base));
    } else {
        let views: Vec<IconView> = catalog.iter().map(|icon| IconView::new(*icon, base)).collect();
        emit_success(output_mode, "list", serde_json::to_value(views)?)?;
    }
    Ok(())
}

pub fn run_get(output_mode: OutputMode, config: &IconsConfig, index: i64) -> anyhow::Result<()> {
    let icon = IconCatalog::checked()?.get_by_index(index)?;
    show_icon(output_mode, "get", config, icon)
}

pub fn run_find(output_mode: OutputMode, config: &IconsConfig, query: &str) -> anyhow::Result<()> {
    let icon = resolve(IconCatalog::checked()?, query)
        .ok_or_else(|| anyhow::anyhow!("no icon titled or named {:?}", query))?;

    tracing::debug!("Resolved {:?} to {}", query, icon);
    show_icon(output_mode, "find", config, icon)
}

/// Title match first, then slug
fn resolve(catalog: &IconCatalog, query: &str) -> Option<IconDescriptor> {
    catalog
        .find_by_title(query)
        .or_else(|| catalog.find_by_slug(query))
        .copied()
}

fn show_icon(
    output_mode: OutputMode,
    command: &str,
    config: &IconsConfig,
    icon: IconDescriptor,
) -> anyhow::Result<()> {
    let view = IconView::new(icon, config.asset_base.as_deref());

    if output_mode.is_human() {
        println!(
            "{} {}",
            format!("#{}", icon.idx).style(ui::theme().index.clone()),
            icon.title.bold()
        );
        ui::summary_row("path", icon.path);
        if let Some(url) = &view.url {
            ui::summary_row("url ", url);
        }
    } else {
        emit_success(output_mode, command, serde_json::to_value(&view)?)?;
    }
    Ok(())
}

pub fn run_count(output_mode: OutputMode) -> anyhow::Result<()> {
    let count = IconCatalog::checked()?.count();
    if output_mode.is_human() {
        println!("{}", count);
    } else {
        emit_success(output_mode, "count", serde_json::json!({ "count": count }))?;
    }
    Ok(())
}

pub fn run_validate(output_mode: OutputMode) -> anyhow::Result<()> {
    let catalog = IconCatalog::checked()?;
    if output_mode.is_human() {
        let mut table = ui::TableBuilder::new();
        table.add_row("Icons", &catalog.count().to_string());
        table.add_row("First", catalog.all().first().map_or("-", |icon| icon.title));
        table.add_row("Last", catalog.all().last().map_or("-", |icon| icon.title));
        println!("{}", table.build());
        ui::success("Catalog is valid");
    } else {
        emit_success(
            output_mode,
            "validate",
            serde_json::json!({ "valid": true, "count": catalog.count() }),
        )?;
    }
    Ok(())
}

pub fn run_serve(output_mode: OutputMode, config: &IconsConfig, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or_else(|| config.port_or_default());

    if output_mode.is_human() {
        println!("{} Serving icon metadata at http://0.0.0.0:{}/icons", Icons::GLOBE, port);
    } else {
        emit_success(output_mode, "serve", serde_json::json!({ "port": port }))?;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(distro_icons::server::start_server(port, config.asset_base.clone()))
}

pub fn run_init(output_mode: OutputMode, path: &Path, force: bool) -> anyhow::Result<()> {
    let config = IconsConfig {
        asset_base: None,
        port: Some(config::DEFAULT_PORT),
    };
    config::write_config(path, &config, force)?;
    tracing::info!("Wrote config to {}", path.display());

    if output_mode.is_human() {
        ui::success(&format!("Created {}", path.display()));
    } else {
        emit_success(
            output_mode,
            "init",
            serde_json::json!({ "path": path.display().to_string() }),
        )?;
    }
    Ok(())
}

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        println!(
            "{} {}",
            "distro-icons".style(ui::theme().header.clone()),
            env!("CARGO_PKG_VERSION")
        );
    } else {
        let data = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        });
        emit_success(output_mode, "version", data)?;
    }
    Ok(())
}
