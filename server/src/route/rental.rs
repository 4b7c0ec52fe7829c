use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use uuid::Uuid;

use application::service::{CreateRentalService, GetRentalService, UpdateRentalService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handler::AppModule;
use crate::request::{
    CreateRentalRequest, GetRecentRentalsRequest, GetRentalRequest, RentalTransformer,
    UpdateRentalRequest,
};
use crate::response::{CreatedRentalPresenter, RentalPresenter};
use crate::route::found;

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/rentals",
            post(
                |State(module): State<AppModule>, JsonBody(req): JsonBody<CreateRentalRequest>| async move {
                    Controller::new(RentalTransformer, CreatedRentalPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().create_rental(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/recent",
            get(
                |State(module): State<AppModule>, QueryParams(req): QueryParams<GetRecentRentalsRequest>| async move {
                    let window = *module.config().recent_window();
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake((req, window))
                        .handle(|dto| async move { module.database().list_recent_rentals(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/:id",
            get(
                |State(module): State<AppModule>, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(GetRentalRequest::new(id))
                        .handle(|dto| async move { module.database().get_rental(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| found(res, "Rental", id))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 PathParam(id): PathParam<Uuid>,
                 JsonBody(req): JsonBody<UpdateRentalRequest>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.database().update_rental(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
