use axum::extract::State;
use axum::routing::get;
use axum::Router;

use application::service::GetAlertService;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::AlertPresenter;

pub trait AlertRouter {
    fn route_alert(self) -> Self;
}

impl AlertRouter for Router<AppModule> {
    fn route_alert(self) -> Self {
        self.route(
            "/alerts",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), AlertPresenter)
                    .bypass(|| async move { module.database().list_alerts().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
