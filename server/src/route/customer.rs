use axum::extract::State;
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use application::service::{
    CreateCustomerService, DeleteCustomerService, GetCustomerService, UpdateCustomerService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::handler::AppModule;
use crate::request::{
    CreateCustomerRequest, DeleteCustomerTransformer, GetAllCustomerRequest, UpdateCustomerRequest,
    CustomerIdRequest, CustomerTransformer,
};
use crate::response::{CreatedCustomerPresenter, CustomerPresenter};
use crate::route::found;

pub trait CustomerRouter {
    fn route_customer(self) -> Self;
}

impl CustomerRouter for Router<AppModule> {
    fn route_customer(self) -> Self {
        self.route(
            "/customers",
            get(
                |State(module): State<AppModule>, QueryParams(req): QueryParams<GetAllCustomerRequest>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().list_customers(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, JsonBody(req): JsonBody<CreateCustomerRequest>| async move {
                    Controller::new(CustomerTransformer, CreatedCustomerPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().register_customer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/customers/:id",
            get(
                |State(module): State<AppModule>, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(CustomerIdRequest::new(id))
                        .handle(|dto| async move { module.database().get_customer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| found(res, "Customer", id))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 PathParam(id): PathParam<Uuid>,
                 JsonBody(req): JsonBody<UpdateCustomerRequest>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.database().update_customer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, PathParam(id): PathParam<Uuid>| async move {
                    Controller::new(DeleteCustomerTransformer, CustomerPresenter)
                        .intake(CustomerIdRequest::new(id))
                        .handle(|dto| async move { module.database().delete_customer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
