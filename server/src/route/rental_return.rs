use axum::extract::State;
use axum::routing::get;
use axum::Router;

use application::service::{GetReturnService, RegisterReturnService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::JsonBody;
use crate::handler::AppModule;
use crate::request::{RegisterReturnRequest, ReturnTransformer};
use crate::response::ReturnPresenter;

pub trait ReturnRouter {
    fn route_return(self) -> Self;
}

impl ReturnRouter for Router<AppModule> {
    fn route_return(self) -> Self {
        self.route(
            "/returns",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), ReturnPresenter)
                    .bypass(|| async move { module.database().list_returns().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, JsonBody(req): JsonBody<RegisterReturnRequest>| async move {
                    Controller::new(ReturnTransformer, ReturnPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().register_return(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
