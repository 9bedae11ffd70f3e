use crate::app::data_source::DataSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub data_source: Arc<DataSource>,
}
