use crate::catalog::{DuaCategory, NameList};
use crate::filter::FilterCriteria;
use crate::session::{Outcome, Reply, Section, Session, Status, ViewMode};
use crate::store::CounterEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCreated {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: u64,
    pub most_recited: Option<CounterEntry>,
    pub phrases: usize,
    pub active_phrases: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Distinct phrases written to the store.
    pub merged: usize,
    /// Record lines read, repeats included.
    pub lines: usize,
}

/// One entry of a home page name carousel; `position` counts from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCard {
    pub list: NameList,
    pub title: String,
    pub position: usize,
    pub of: usize,
    pub arabic: String,
    pub english: String,
}

/// Everything the page needs to re-render after an action.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: Option<Status>,
    pub section: Section,
    pub view: ViewMode,
    pub criteria: FilterCriteria,
    pub visible: Vec<CounterEntry>,
    pub bookmarks: Vec<String>,
    pub names: Vec<NameCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatsResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<ImportSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl ActionResponse {
    pub fn new(reply: Reply, session: &Session) -> Self {
        let mut response = Self {
            status: reply.status,
            section: session.section,
            view: session.view,
            criteria: session.criteria.clone(),
            visible: reply.visible,
            bookmarks: session.bookmarks().to_vec(),
            names: NameList::ALL.iter().map(|&list| session.name_card(list)).collect(),
            statistics: None,
            imported: None,
            report: None,
        };
        match reply.outcome {
            Outcome::Done => {}
            Outcome::Statistics(stats) => response.statistics = Some(stats),
            Outcome::Imported(summary) => response.imported = Some(summary),
            Outcome::Document(bytes) => {
                response.report = Some(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
        response
    }
}

#[derive(Debug, Deserialize)]
pub struct DuaQuery {
    pub category: Option<DuaCategory>,
}

#[derive(Debug, Deserialize)]
pub struct PrayerQuery {
    pub city: String,
    pub country: String,
}
