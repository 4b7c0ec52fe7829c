use axum::extract::State;
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use application::service::{
    CreateVehicleService, DeleteVehicleService, GetVehicleService, UpdateVehicleService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handler::AppModule;
use crate::request::{
    CreateVehicleRequest, DeleteVehicleTransformer, GetAllVehicleRequest, UpdateVehicleRequest,
    VehicleIdRequest, VehicleTransformer,
};
use crate::response::{CreatedVehiclePresenter, VehiclePresenter};
use crate::route::found;

pub trait VehicleRouter {
    fn route_vehicle(self) -> Self;
}

impl VehicleRouter for Router<AppModule> {
    fn route_vehicle(self) -> Self {
        self.route(
            "/vehicles",
            get(
                |State(module): State<AppModule>, QueryParams(req): QueryParams<GetAllVehicleRequest>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().list_vehicles(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, JsonBody(req): JsonBody<CreateVehicleRequest>| async move {
                    Controller::new(VehicleTransformer, CreatedVehiclePresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().register_vehicle(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/vehicles/available",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), VehiclePresenter)
                    .bypass(|| async move { module.database().list_available_vehicles().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/vehicles/:id",
            get(
                |State(module): State<AppModule>, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake(VehicleIdRequest::new(id))
                        .handle(|dto| async move { module.database().get_vehicle(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| found(res, "Vehicle", id))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 PathParam(id): PathParam<Uuid>,
                 JsonBody(req): JsonBody<UpdateVehicleRequest>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.database().update_vehicle(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(DeleteVehicleTransformer, VehiclePresenter)
                        .intake(VehicleIdRequest::new(id))
                        .handle(|dto| async move { module.database().delete_vehicle(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
