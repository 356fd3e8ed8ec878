//! Application state for the dashboard TUI.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::config::DqscopeConfig;
use crate::report::DqsReport;

/// File extensions offered by the picker. Matches the original upload
/// filter; nothing else is selectable.
const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// Lifecycle of one analysis round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user: file picker and analyze hint
    Idle,
    /// Simulated analysis in flight
    Loading,
    /// Dashboard visible
    Analyzed,
}

/// A file the user selected. Only the name and size are recorded; the
/// contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            size_bytes: metadata.len(),
        })
    }

    pub fn size_display(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Main application state
pub struct App {
    pub config: DqscopeConfig,
    phase: Phase,
    /// Candidate files in the input directory
    pub candidates: Vec<PathBuf>,
    /// Cursor position in the picker list
    pub picker_index: usize,
    pub selected_file: Option<SelectedFile>,
    /// Report swapped in when the simulation completes
    pub report: Option<DqsReport>,
    loading_since: Option<Instant>,
    analyzed_at: Option<Instant>,
    pub animation_frame: usize,
    status_message: Option<String>,
}

impl App {
    pub fn new(config: DqscopeConfig, input_dir: Option<&Path>) -> Self {
        let candidates = input_dir.map(list_candidates).unwrap_or_default();
        Self {
            config,
            phase: Phase::Idle,
            candidates,
            picker_index: 0,
            selected_file: None,
            report: None,
            loading_since: None,
            analyzed_at: None,
            animation_frame: 0,
            status_message: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Advance animations and complete the simulated analysis when its
    /// fixed delay has elapsed.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.phase == Phase::Loading {
            let delay = Duration::from_millis(self.config.analysis.delay_ms);
            if self
                .loading_since
                .is_some_and(|since| since.elapsed() >= delay)
            {
                self.finish_analysis();
            }
        }
    }

    /// Start the simulated analysis. Allowed with or without a selected
    /// file; a no-op outside the idle phase.
    pub fn begin_analysis(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        debug!("starting simulated analysis");
        self.phase = Phase::Loading;
        self.loading_since = Some(Instant::now());
        self.status_message = None;
    }

    fn finish_analysis(&mut self) {
        let source = self.selected_file.as_ref().map(|f| f.name.clone());
        self.report = Some(DqsReport::mock(source));
        self.phase = Phase::Analyzed;
        self.loading_since = None;
        self.analyzed_at = Some(Instant::now());
    }

    /// Drop the results and return to the upload view.
    pub fn reset(&mut self) {
        if self.phase != Phase::Analyzed {
            return;
        }
        self.phase = Phase::Idle;
        self.report = None;
        self.analyzed_at = None;
        self.status_message = None;
    }

    /// Fraction of the loading delay that has elapsed, for the progress
    /// indicator. 0 outside the loading phase.
    pub fn loading_progress(&self) -> f64 {
        let Some(since) = self.loading_since else {
            return 0.0;
        };
        let delay = self.config.analysis.delay_ms.max(1) as f64;
        (since.elapsed().as_millis() as f64 / delay).min(1.0)
    }

    /// Seconds since the dashboard appeared, for entrance animation.
    pub fn seconds_since_analyzed(&self) -> f64 {
        self.analyzed_at
            .map(|at| at.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    pub fn select_candidate(&mut self) {
        let Some(path) = self.candidates.get(self.picker_index).cloned() else {
            return;
        };
        match SelectedFile::from_path(&path) {
            Ok(file) => {
                debug!("selected {} ({} bytes)", file.name, file.size_bytes);
                self.selected_file = Some(file);
            }
            Err(e) => self.set_status_message(format!("cannot select file: {e}")),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_file = None;
    }

    pub fn move_picker(&mut self, delta: i64) {
        if self.candidates.is_empty() {
            return;
        }
        let last = self.candidates.len() as i64 - 1;
        let next = (self.picker_index as i64 + delta).clamp(0, last);
        self.picker_index = next as usize;
    }

    /// Handle keyboard input. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        // Any keypress clears a transient status line.
        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('a') => self.begin_analysis(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('x') => {
                if self.phase == Phase::Idle {
                    self.clear_selection();
                }
            }
            KeyCode::Char('e') => self.export_report()?,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.phase == Phase::Idle {
                    self.move_picker(-1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.phase == Phase::Idle {
                    self.move_picker(1);
                }
            }
            KeyCode::Enter => {
                if self.phase == Phase::Idle {
                    self.select_candidate();
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn export_report(&mut self) -> Result<()> {
        let Some(report) = &self.report else {
            self.set_status_message("nothing to export yet");
            return Ok(());
        };
        let path = PathBuf::from("dqs-report.json");
        let file = std::fs::File::create(&path)?;
        let mut writer =
            crate::report::JsonWriter::new(std::io::BufWriter::new(file));
        crate::report::OutputWriter::write_report(&mut writer, report)?;
        self.set_status_message(format!("report written to {}", path.display()));
        Ok(())
    }
}

/// List selectable files in a directory, sorted by name.
fn list_candidates(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                    })
        })
        .collect();
    files.sort();
    files
}
