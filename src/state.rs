use crate::{config, db, storage};

#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub docs: db::DocStore,
    pub uploads: storage::ObjectStore,
}
