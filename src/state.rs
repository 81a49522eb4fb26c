use crate::catalog::Catalog;
use crate::config::Config;
use crate::remote::RemoteContent;
use crate::session::Session;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub remote: RemoteContent,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Result<Self, reqwest::Error> {
        let remote = RemoteContent::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            remote,
        })
    }
}
