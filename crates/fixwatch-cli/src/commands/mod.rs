pub mod commit;
pub mod diff;
pub mod ingest;
pub mod status;

use fixwatch_core::errors::{ExError, ExErrorKind};
use fixwatch_core::Snapshot;
use fixwatch_core_types::RunId;
use fixwatch_store::codec::read_fixtures_lenient;
use fixwatch_store::{load_config, FixwatchConfig, FsBaselineStore, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Resolved working directory, configuration and run id of one invocation
pub struct Workspace {
    pub dir: PathBuf,
    pub config: FixwatchConfig,
    pub run_id: RunId,
}

impl Workspace {
    pub fn open(
        dir: PathBuf,
        config_path: Option<PathBuf>,
        run_id: RunId,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = config_path.unwrap_or_else(|| dir.join(CONFIG_FILE_NAME));
        let config = load_config(&config_path)?;
        Ok(Self {
            dir,
            config,
            run_id,
        })
    }

    pub fn fixtures_path(&self) -> PathBuf {
        self.config.files.fixtures_path(&self.dir)
    }

    pub fn baseline_store(&self) -> FsBaselineStore {
        FsBaselineStore::new(
            self.config.files.baseline_path(&self.dir),
            self.config.schema.clone(),
        )
    }

    /// The current fixtures; the file must exist.
    ///
    /// Unreadable rows are skipped and reported on stderr so that stdout
    /// stays machine-readable for `--json`.
    pub fn current_snapshot(&self) -> Result<Snapshot, ExError> {
        let path = self.fixtures_path();
        if !path.exists() {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_current")
                .with_path(path.display().to_string())
                .with_run_id(self.run_id.clone())
                .with_message("fixtures file not found; run `fixwatch ingest` first"));
        }
        let (snapshot, skipped) =
            read_fixtures_lenient(&path, &self.config.schema)?.into_snapshot();
        for row in &skipped {
            eprintln!(
                "  skipped line {} of {}: {}",
                row.line,
                display_name(&path),
                row.reason
            );
        }
        Ok(snapshot)
    }
}

/// File name for display
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
