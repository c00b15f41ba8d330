use std::sync::Arc;

use pozarreal_core::{
    backend::BackendMeta,
    model::{Street, StreetInfo},
    service::StreetService,
};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    StreetList,
    StreetInfo,
}

pub(crate) struct App {
    pub service: Arc<StreetService>,
    pub backend: BackendMeta,

    pub screen: Screen,
    pub streets: Vec<Street>,
    pub street_list_index: usize,

    pub street_info: Option<StreetInfo>,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<StreetService>, backend: BackendMeta) -> Self {
        Self {
            service,
            backend,
            screen: Screen::StreetList,
            streets: Vec::new(),
            street_list_index: 0,
            street_info: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn current_street(&self) -> Option<&Street> {
        self.streets.get(self.street_list_index)
    }

    pub(crate) async fn reload_streets(&mut self) {
        match self.service.streets().await {
            Ok(streets) => {
                self.streets = streets;
                self.street_list_index = self
                    .street_list_index
                    .min(self.streets.len().saturating_sub(1));
                self.error_message = None;
            }
            Err(err) => {
                error!(%err, "failed to list streets");
                self.error_message = Some(format!("Failed to list streets: {err}"));
            }
        }
    }

    pub(crate) async fn open_current_street(&mut self) {
        let Some(street_id) = self.current_street().map(|street| street.id.clone()) else {
            self.error_message = Some("No street selected".into());
            return;
        };

        match self.service.street_info(&street_id).await {
            Ok(info) => {
                self.street_info = Some(info);
                self.screen = Screen::StreetInfo;
                self.error_message = None;
            }
            Err(err) if err.is_not_found() => {
                self.street_info = None;
                self.error_message = Some(format!("Street {street_id} no longer exists"));
            }
            Err(err) => {
                error!(street = %street_id, %err, "failed to load street info");
                self.street_info = None;
                self.error_message = Some(format!("Failed to load street: {err}"));
            }
        }
    }

    pub(crate) fn close_street(&mut self) {
        self.street_info = None;
        self.screen = Screen::StreetList;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pozarreal_store_memory::{MemoryStore, backend};

    use super::*;

    pub(crate) fn app_with(streets: &[(&str, &str)]) -> App {
        let mut store = MemoryStore::new();
        for (id, name) in streets {
            store
                .insert_street(Street::new(*id, *name))
                .expect("unique street");
        }
        let backend = backend(store, "test");
        let service = Arc::new(StreetService::from_backend(&backend));
        App::new(service, backend.meta)
    }

    #[tokio::test]
    async fn reload_fills_street_list() {
        let mut app = app_with(&[("400", "Garantia Individual"), ("401", "Libertad")]);

        app.reload_streets().await;

        assert_eq!(app.streets.len(), 2, "both streets listed");
        assert!(app.error_message.is_none(), "no error");
    }

    #[tokio::test]
    async fn opening_street_switches_screen() {
        let mut app = app_with(&[("400", "Garantia Individual")]);
        app.reload_streets().await;

        app.open_current_street().await;

        assert_eq!(app.screen, Screen::StreetInfo, "info screen shown");
        let info = app.street_info.as_ref().expect("info loaded");
        assert_eq!(info.name, "Garantia Individual", "selected street loaded");
        assert!(info.representative.is_none(), "nobody assigned");
    }

    #[tokio::test]
    async fn opening_without_streets_reports_error() {
        let mut app = app_with(&[]);
        app.reload_streets().await;

        app.open_current_street().await;

        assert_eq!(app.screen, Screen::StreetList, "stays on list");
        assert_eq!(
            app.error_message.as_deref(),
            Some("No street selected"),
            "status explains why"
        );
    }

    #[tokio::test]
    async fn closing_street_returns_to_list() {
        let mut app = app_with(&[("400", "Garantia Individual")]);
        app.reload_streets().await;
        app.open_current_street().await;

        app.close_street();

        assert_eq!(app.screen, Screen::StreetList, "back on list");
        assert!(app.street_info.is_none(), "info discarded");
    }
}
