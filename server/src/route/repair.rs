use axum::extract::State;
use axum::routing::get;
use axum::Router;

use application::service::{GetRepairService, RegisterRepairService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, QueryParams};
use crate::handler::AppModule;
use crate::request::{GetRepairsRequest, RegisterRepairRequest, RepairTransformer};
use crate::response::RepairPresenter;

pub trait RepairRouter {
    fn route_repair(self) -> Self;
}

impl RepairRouter for Router<AppModule> {
    fn route_repair(self) -> Self {
        self.route(
            "/repairs",
            get(
                |State(module): State<AppModule>, QueryParams(req): QueryParams<GetRepairsRequest>| async move {
                    Controller::new(RepairTransformer, RepairPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().query_repairs(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, JsonBody(req): JsonBody<RegisterRepairRequest>| async move {
                    Controller::new(RepairTransformer, RepairPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().register_repair(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
