//! CLI logic for the Dockyard blueprint tool.
//!
//! This module contains the core CLI logic: load configuration, parse the
//! share link, lay the station out and write the plan file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};

use dockyard::{
    BlueprintBuilder, DockyardError, ShareList,
    config::{ConfigError, LayoutEngine},
    mapping::{Culture, StorageKind},
    plan::PlanRequest,
};

use error_adapter::{DiagnosticAdapter, render};

/// Run the Dockyard CLI application
///
/// This function processes the share link through the Dockyard pipeline and
/// writes the resulting plan XML to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DockyardError` for:
/// - Configuration loading errors
/// - Share-link parsing errors
/// - Export errors
/// - File I/O errors, including an existing output file without `--force`
pub fn run(args: &Args) -> Result<PathBuf, DockyardError> {
    let output = output_path(args);
    info!(output_path = output.display().to_string(); "Processing share link");

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(engine) = &args.engine {
        let engine = engine.parse::<LayoutEngine>().map_err(|reason| {
            DockyardError::Config(ConfigError::Invalid {
                field: "--engine",
                reason: format!("{reason}: `{engine}`"),
            })
        })?;
        app_config = app_config.with_engine(engine);
    }

    let culture = args.culture.parse::<Culture>().unwrap_or_else(|err| {
        warn!(culture = args.culture; "{err}, using argon");
        Culture::default()
    });

    // Process link using BlueprintBuilder API
    let builder = BlueprintBuilder::new(app_config)?;
    let list = builder.parse(&args.link)?;
    report_warnings(&list);
    log_module_summary(&list);

    let request = PlanRequest::new(list.into_modules())
        .with_culture(culture)
        .with_docks(args.docks)
        .with_piers(args.piers)
        .with_storage(StorageKind::Container, args.container_storage)
        .with_storage(StorageKind::Solid, args.solid_storage)
        .with_storage(StorageKind::Liquid, args.liquid_storage);

    let layout = builder.layout(&request);
    if layout.stats().fallbacks > 0 {
        warn!(
            fallbacks = layout.stats().fallbacks;
            "Some modules could not be attached and were placed apart from the station"
        );
    }

    let xml = builder.render_xml(&layout, &args.name)?;

    // Write output file
    write_output(&output, &xml, args.force)?;

    info!(output_file = output.display().to_string(); "Plan exported successfully");

    Ok(output)
}

/// The explicit output path, or `<plan name>.xml` with characters that are
/// unsafe in file names replaced by `_`.
fn output_path(args: &Args) -> PathBuf {
    if let Some(output) = &args.output {
        return PathBuf::from(output);
    }

    let stem: String = args
        .name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "plan" } else { stem.as_str() };

    PathBuf::from(format!("{stem}.xml"))
}

/// Writes `content` to `path`, refusing to replace an existing file unless
/// `force` is set.
fn write_output(path: &Path, content: &str, force: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            io::Error::new(
                err.kind(),
                format!("{} already exists", path.display()),
            )
        } else {
            err
        }
    })?;
    file.write_all(content.as_bytes())
}

fn report_warnings(list: &ShareList) {
    for warning in list.warnings() {
        let adapter = DiagnosticAdapter::new(warning, list.layout());
        warn!("{}", render(&adapter));
    }
}

fn log_module_summary(list: &ShareList) {
    let width = list
        .modules()
        .iter()
        .map(|module| module.id().len())
        .max()
        .unwrap_or(0)
        .max("Module".len());

    let mut table = format!("{:<width$}  Count", "Module");
    for module in list.modules() {
        table.push_str(&format!("\n{:<width$}  {:>5}", module.id(), module.count()));
    }

    info!(modules = list.modules().len(); "Parsed modules:\n{table}");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_default_output_path_uses_plan_name() {
        let args = Args::parse_from(["dockyard", "link", "--name", "Ore Hub"]);
        assert_eq!(output_path(&args), PathBuf::from("Ore Hub.xml"));
    }

    #[test]
    fn test_output_path_sanitizes_name() {
        let args = Args::parse_from(["dockyard", "link", "--name", "a/b:c"]);
        assert_eq!(output_path(&args), PathBuf::from("a_b_c.xml"));

        let args = Args::parse_from(["dockyard", "link", "--name", "   "]);
        assert_eq!(output_path(&args), PathBuf::from("plan.xml"));
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let args = Args::parse_from(["dockyard", "link", "-o", "out/plan.xml"]);
        assert_eq!(output_path(&args), PathBuf::from("out/plan.xml"));
    }

    #[test]
    fn test_write_output_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("plan.xml");

        write_output(&path, "first", false).expect("first write");
        let err = write_output(&path, "second", false).expect_err("file exists");
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "first");

        write_output(&path, "third", true).expect("forced write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "third");
    }
}
