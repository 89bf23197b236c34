mod cli;

use aihsr_mapping::{MappingSummary, MappingUpdater, RunReport};
use anyhow::Context;
use cli::Action;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(action: Action, updater: &MappingUpdater, out: &mut impl Write) -> anyhow::Result<()> {
    let Action::Update(stages) = action else {
        write!(out, "{}", MappingSummary::default())?;
        return Ok(());
    };

    let config = updater.config();
    let mut report = RunReport::default();
    writeln!(out, "Updating control mappings based on AIHSR analysis...\n")?;

    // each half reports as soon as its file is written
    if stages.controls {
        let controls = updater
            .update_controls()
            .with_context(|| format!("updating {}", config.controls_path().display()))?;
        writeln!(
            out,
            "Updated {} controls with phase and tech type assignments",
            controls.updated
        )?;
        report.controls = Some(controls);
    }
    if stages.links {
        let links = updater
            .update_traceability()
            .with_context(|| format!("updating {}", config.traceability_path().display()))?;
        writeln!(out, "Removing {} old mitigation links", links.removed)?;
        writeln!(
            out,
            "Added {} new risk → control subcategory links",
            links.generated
        )?;
        report.links = Some(links);
    }

    write!(out, "{}", MappingSummary::default())?;
    write!(out, "{}", report.completion())?;
    if config.dry_run {
        writeln!(out, "Dry run: no files were written")?;
    }
    Ok(())
}

/// Process exit status for `result`, printing the error chain on failure
fn exit_status(result: anyhow::Result<()>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // nothing left to report to if stderr itself is gone
            let _ = writeln!(err, "error: {e:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    let matches = cli::command().get_matches();
    let (action, args) = cli::action(&matches);
    init_tracing(args.get_count("verbose"));

    let result = cli::resolve_config(args)
        .context("loading configuration")
        .and_then(|config| {
            tracing::debug!(?config, ?action, "resolved configuration");
            run(action, &MappingUpdater::new(config), &mut io::stdout().lock())
        });

    ExitCode::from(exit_status(result, &mut io::stderr()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aihsr_mapping::{Stages, UpdaterConfig};
    use aihsr_test_utils::{DataDir, CONTROLS_FILE, TRACEABILITY_FILE};

    fn updater(data: &DataDir) -> MappingUpdater {
        MappingUpdater::new(UpdaterConfig::new().with_data_dir(data.path()))
    }

    fn capture(action: Action, updater: &MappingUpdater) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let result = run(action, updater, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn position(text: &str, needle: &str) -> usize {
        text.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{text}"))
    }

    #[test]
    fn full_run_prints_progress_then_summary_then_completion() {
        let data = DataDir::with_samples();

        let (result, out) = capture(Action::Update(Stages::ALL), &updater(&data));

        assert!(result.is_ok());
        let order = [
            "Updating control mappings based on AIHSR analysis...\n\n",
            "Updated 3 controls with phase and tech type assignments\n",
            "Removing 2 old mitigation links\n",
            "Added 101 new risk → control subcategory links\n",
            "MAPPING SUMMARY\n",
            "Total risk→control links: 101\n",
            "COMPLETE\n",
            "  - 3 controls updated with phase/tech assignments\n",
            "  - 101 risk→control subcategory links created\n",
        ];
        let positions: Vec<_> = order.iter().map(|needle| position(&out, needle)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
        assert!(!out.contains("Dry run"));
    }

    #[test]
    fn links_stage_skips_catalog_lines() {
        let data = DataDir::with_samples();

        let (result, out) = capture(Action::Update(Stages::LINKS), &updater(&data));

        assert!(result.is_ok());
        assert!(!out.contains("controls with phase"));
        assert!(!out.contains("controls updated"));
        assert!(out.contains("  - 101 risk→control subcategory links created\n"));
    }

    #[test]
    fn summary_reads_no_files() {
        let data = DataDir::empty();
        let missing = MappingUpdater::new(
            UpdaterConfig::new().with_data_dir(data.path().join("does-not-exist")),
        );

        let (result, out) = capture(Action::Summary, &missing);

        assert!(result.is_ok());
        assert_eq!(out, MappingSummary::default().to_string());
    }

    #[test]
    fn failed_run_exits_nonzero_with_error_chain() {
        let data = DataDir::empty();

        let (result, out) = capture(Action::Update(Stages::ALL), &updater(&data));

        assert!(!out.contains("MAPPING SUMMARY"));
        let mut err = Vec::new();
        assert_eq!(exit_status(result, &mut err), 1);
        let err = String::from_utf8(err).unwrap();
        let expected = format!(
            "error: updating {}: store error: io error reading",
            data.file(CONTROLS_FILE).display()
        );
        assert!(err.starts_with(&expected), "{err}");
    }

    #[test]
    fn catalog_progress_survives_traceability_failure() {
        let data = DataDir::with_samples();
        std::fs::remove_file(data.file(TRACEABILITY_FILE)).unwrap();

        let (result, out) = capture(Action::Update(Stages::ALL), &updater(&data));

        assert!(result.is_err());
        assert!(out.contains("Updated 3 controls with phase and tech type assignments\n"));
        assert!(!out.contains("Removing"));
        assert!(!out.contains("COMPLETE"));
        assert_ne!(data.read_json(CONTROLS_FILE)["lastUpdated"], "2024-05-01");
    }

    #[test]
    fn dry_run_is_announced() {
        let data = DataDir::with_samples();
        let config = UpdaterConfig::new().with_data_dir(data.path()).with_dry_run(true);

        let (result, out) = capture(Action::Update(Stages::CONTROLS), &MappingUpdater::new(config));

        assert!(result.is_ok());
        assert!(out.ends_with("Dry run: no files were written\n"));
    }

    #[test]
    fn success_exits_zero_silently() {
        let mut err = Vec::new();
        assert_eq!(exit_status(Ok(()), &mut err), 0);
        assert!(err.is_empty());
    }
}
