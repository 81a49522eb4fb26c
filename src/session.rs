//! One visitor's portal state and the dispatch of their actions.
//!
//! Counter failures never escape [`Session::dispatch`]: they are turned into
//! a [`Status`] and the visible list is recomputed for every reply.

use crate::catalog::{Catalog, NameList};
use crate::codec::{self, ReportDocument};
use crate::errors::CounterError;
use crate::filter::{self, Category, FilterCriteria};
use crate::models::{ImportSummary, NameCard, StatsResponse};
use crate::stats::build_stats;
use crate::store::{CounterEntry, CounterStore};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    Quran,
    Tasbeeh,
    Duas,
    Ramadan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Increment { phrase: String },
    Reset { phrase: String },
    ResetAll,
    AddCustom { text: String },
    SetSearch { term: String },
    SetCategory { category: Category },
    SetView { view: ViewMode },
    Navigate { section: Section },
    Import { text: String },
    Export,
    GetVisible,
    GetStatistics,
    AddBookmark { name: String },
    RemoveBookmark { name: String },
    ClearBookmarks,
    NextName { list: NameList },
    PrevName { list: NameList },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Ok,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            message: message.into(),
        }
    }
}

impl From<CounterError> for Status {
    fn from(err: CounterError) -> Self {
        let kind = match err {
            CounterError::DuplicatePhrase(_) | CounterError::EmptyPhrase => StatusKind::Warning,
            CounterError::FormatError(_) | CounterError::UnknownPhrase(_) => StatusKind::Error,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Document(Vec<u8>),
    Statistics(StatsResponse),
    Imported(ImportSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: Option<Status>,
    pub outcome: Outcome,
    pub visible: Vec<CounterEntry>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub section: Section,
    pub view: ViewMode,
    pub criteria: FilterCriteria,
    store: CounterStore,
    bookmarks: Vec<String>,
    report_rows: usize,
    husna_position: usize,
    nabi_position: usize,
}

impl Session {
    pub fn new(catalog: &Catalog, report_rows: usize) -> Self {
        Self {
            section: Section::default(),
            view: ViewMode::default(),
            criteria: FilterCriteria::default(),
            store: CounterStore::from_catalog(catalog),
            bookmarks: Vec::new(),
            report_rows,
            husna_position: 0,
            nabi_position: 0,
        }
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    /// The name currently shown on the home page carousel for `list`.
    pub fn name_card(&self, list: NameList) -> NameCard {
        let names = list.names();
        let position = self.name_position(list);
        let name = names[position];
        NameCard {
            list,
            title: list.title().to_string(),
            position: position + 1,
            of: names.len(),
            arabic: name.arabic.to_string(),
            english: name.english.to_string(),
        }
    }

    fn name_position(&self, list: NameList) -> usize {
        match list {
            NameList::AsmaUlHusna => self.husna_position,
            NameList::AsmaUnNabi => self.nabi_position,
        }
    }

    /// Moves the carousel by `step`, wrapping at both ends.
    fn step_name(&mut self, list: NameList, step: i64) {
        let len = list.names().len() as i64;
        let position = match list {
            NameList::AsmaUlHusna => &mut self.husna_position,
            NameList::AsmaUnNabi => &mut self.nabi_position,
        };
        *position = (*position as i64 + step).rem_euclid(len) as usize;
    }

    pub fn visible(&self) -> Vec<CounterEntry> {
        filter::filter(self.store.entries(), &self.criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn export(&self) -> Vec<u8> {
        self.export_at(Local::now().naive_local())
    }

    fn export_at(&self, now: NaiveDateTime) -> Vec<u8> {
        let document = ReportDocument::from_entries(self.store.entries(), now);
        info!(rows = document.rows.len(), total = document.total, "report generated");
        document.render(self.report_rows)
    }

    pub fn dispatch(&mut self, action: Action) -> Reply {
        self.dispatch_at(action, Local::now().naive_local())
    }

    /// Like [`Session::dispatch`], with the report timestamp supplied.
    pub fn dispatch_at(&mut self, action: Action, now: NaiveDateTime) -> Reply {
        debug!(?action, "dispatching");
        let (status, outcome) = match self.apply(action, now) {
            Ok(settled) => settled,
            Err(err) => {
                if matches!(err, CounterError::UnknownPhrase(_)) {
                    warn!("{err}");
                }
                (Some(Status::from(err)), Outcome::Done)
            }
        };

        Reply {
            status,
            outcome,
            visible: self.visible(),
        }
    }

    fn apply(
        &mut self,
        action: Action,
        now: NaiveDateTime,
    ) -> Result<(Option<Status>, Outcome), CounterError> {
        let settled = match action {
            Action::Increment { phrase } => {
                self.store.increment(&phrase)?;
                (None, Outcome::Done)
            }
            Action::Reset { phrase } => {
                self.store.reset(&phrase)?;
                (None, Outcome::Done)
            }
            Action::ResetAll => {
                self.store.reset_all();
                (Some(Status::ok("All counters reset")), Outcome::Done)
            }
            Action::AddCustom { text } => {
                let added = self.store.add(&text)?;
                let message = format!("Added \"{}\"", added.phrase);
                (Some(Status::ok(message)), Outcome::Done)
            }
            Action::SetSearch { term } => {
                self.criteria.search = term;
                (None, Outcome::Done)
            }
            Action::SetCategory { category } => {
                self.criteria.category = category;
                (None, Outcome::Done)
            }
            Action::SetView { view } => {
                self.view = view;
                (None, Outcome::Done)
            }
            Action::Navigate { section } => {
                self.section = section;
                (None, Outcome::Done)
            }
            Action::Import { text } => {
                let batch = codec::parse_import(&text)?;
                let summary = ImportSummary {
                    merged: batch.distinct_phrases(),
                    lines: batch.lines(),
                };
                self.store.merge(batch.records);
                info!(merged = summary.merged, lines = summary.lines, "import applied");
                let message = format!("Imported {} dhikr", summary.merged);
                (Some(Status::ok(message)), Outcome::Imported(summary))
            }
            Action::Export => (None, Outcome::Document(self.export_at(now))),
            Action::GetVisible => (None, Outcome::Done),
            Action::GetStatistics => (None, Outcome::Statistics(build_stats(&self.store))),
            Action::AddBookmark { name } => (Some(self.add_bookmark(&name)), Outcome::Done),
            Action::RemoveBookmark { name } => {
                let status = match self.bookmarks.iter().position(|saved| *saved == name) {
                    Some(position) => {
                        self.bookmarks.remove(position);
                        Status::ok(format!("Removed {name}"))
                    }
                    None => Status::warning(format!("{name} is not bookmarked")),
                };
                (Some(status), Outcome::Done)
            }
            Action::ClearBookmarks => {
                self.bookmarks.clear();
                (Some(Status::ok("Bookmarks cleared!")), Outcome::Done)
            }
            Action::NextName { list } => {
                self.step_name(list, 1);
                (None, Outcome::Done)
            }
            Action::PrevName { list } => {
                self.step_name(list, -1);
                (None, Outcome::Done)
            }
        };
        Ok(settled)
    }

    fn add_bookmark(&mut self, name: &str) -> Status {
        let name = name.trim();
        if name.is_empty() {
            return Status::warning("Nothing to bookmark");
        }
        if self.bookmarks.iter().any(|saved| saved == name) {
            return Status::warning("Already bookmarked!");
        }
        self.bookmarks.push(name.to_string());
        Status::ok("Bookmarked!")
    }
}
