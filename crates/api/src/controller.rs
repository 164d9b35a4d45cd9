//! Form controller: one transition per user action.
//!
//! ```text
//! Load    -> load records -> render                      (error empty)
//! Submit  -> validate --err--> render unchanged records  (error set)
//!                     --ok---> append -> reload -> render (error empty)
//! ```
//!
//! Every transition is synchronous and runs to completion. Callers on an
//! async runtime should drive it from a blocking task.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use boatlog_core::chart::{self, ChartArtifact};
use boatlog_core::plot;
use boatlog_core::record::BoatRecord;
use boatlog_core::validation::validate;
use boatlog_db::{RecordStore, StoreError};
use serde::Deserialize;

/// Raw values of the four form inputs, exactly as submitted.
///
/// Absent inputs deserialize to `None`; empty inputs to `Some("")`. The
/// validator treats both as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryFields {
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub num_pennies: Option<String>,
    #[serde(default)]
    pub boat_volume: Option<String>,
}

impl EntryFields {
    fn validate(&self) -> Result<BoatRecord, boatlog_core::error::ValidationError> {
        validate(
            self.last_name.as_deref(),
            self.first_name.as_deref(),
            self.num_pennies.as_deref(),
            self.boat_volume.as_deref(),
        )
    }
}

/// A user action on the form.
#[derive(Debug, Clone)]
pub enum FormAction {
    /// Page opened, nothing submitted yet.
    Load,
    /// Submit button pressed with the current field values.
    Submit(EntryFields),
}

/// Output of every transition: the chart plus the inline error text.
#[derive(Debug, Clone)]
pub struct FormOutcome {
    pub chart: ChartArtifact,
    /// Empty unless the submission was rejected.
    pub error: String,
    /// Number of records the chart was rendered from.
    pub record_count: usize,
}

/// Wires the validator, the record store and the chart renderer together.
pub struct FormController {
    store: Arc<dyn RecordStore>,
    plot_file: Option<PathBuf>,
    /// Serializes chart file rewrites from concurrent transitions.
    plot_lock: Mutex<()>,
}

impl FormController {
    /// `plot_file`, when set, receives a standalone HTML copy of every
    /// rendered chart.
    pub fn new(store: Arc<dyn RecordStore>, plot_file: Option<PathBuf>) -> Self {
        Self {
            store,
            plot_file,
            plot_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Run one transition.
    ///
    /// Validation failures are reported through [`FormOutcome::error`];
    /// only store failures return `Err`.
    pub fn handle(&self, action: FormAction) -> Result<FormOutcome, StoreError> {
        match action {
            FormAction::Load => {
                let records = self.store.load_all()?;
                Ok(self.outcome(&records, String::new()))
            }
            FormAction::Submit(fields) => match fields.validate() {
                Err(err) => {
                    tracing::debug!(error = %err, "Submission rejected");
                    let records = self.store.load_all()?;
                    Ok(self.outcome(&records, err.to_string()))
                }
                Ok(record) => {
                    self.store.append(&record)?;
                    tracing::info!(
                        last_name = %record.last_name,
                        first_name = %record.first_name,
                        penny_count = record.penny_count,
                        boat_volume = record.boat_volume,
                        "Boat entry recorded",
                    );
                    let records = self.store.load_all()?;
                    Ok(self.outcome(&records, String::new()))
                }
            },
        }
    }

    fn outcome(&self, records: &[BoatRecord], error: String) -> FormOutcome {
        let chart = chart::render(records);
        self.write_plot_file(&chart);
        FormOutcome {
            chart,
            error,
            record_count: records.len(),
        }
    }

    /// Best effort: a failed write is logged and the request carries on.
    ///
    /// The document is written to a `.tmp` sibling and renamed into place,
    /// so readers never see a truncated file.
    fn write_plot_file(&self, chart: &ChartArtifact) {
        let Some(path) = &self.plot_file else {
            return;
        };
        let html = plot::standalone_html(chart);
        let _guard = self.plot_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = replace_file(path, &html) {
            tracing::warn!(path = %path.display(), error = %err, "Failed to write chart file");
        }
    }
}

fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents)
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|err| {
            let _ = fs::remove_file(&tmp);
            err
        })
}
