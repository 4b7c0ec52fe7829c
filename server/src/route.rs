use axum::response::{IntoResponse, Response};
use error_stack::Report;
use uuid::Uuid;

use kernel::KernelError;

use crate::error::ErrorStatus;

mod alert;
mod customer;
mod rental;
mod rental_return;
mod repair;
mod vehicle;

pub use self::{alert::*, customer::*, rental::*, rental_return::*, repair::*, vehicle::*};

/// Missing rows become a 404 carrying the usual error body.
fn found<R: IntoResponse>(res: Option<R>, kind: &str, id: Uuid) -> Result<Response, ErrorStatus> {
    res.map(IntoResponse::into_response).ok_or_else(|| {
        ErrorStatus::from(
            Report::new(KernelError::NotFound).attach_printable(format!("{kind} {id} not found")),
        )
    })
}
