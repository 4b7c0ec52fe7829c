mod cost;
mod date;
mod id;
mod status;
mod window;

pub use self::{cost::*, date::*, id::*, status::*, window::*};
use crate::entity::{CustomerId, VehicleId};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
pub struct Rental {
    id: RentalId,
    vehicle_id: VehicleId,
    customer_id: CustomerId,
    start_date: RentalStartDate,
    end_date: Option<RentalEndDate>,
    cost: RentalCost,
    status: RentalStatus,
}

impl Rental {
    pub fn new(
        id: RentalId,
        vehicle_id: VehicleId,
        customer_id: CustomerId,
        start_date: RentalStartDate,
        end_date: Option<RentalEndDate>,
        cost: RentalCost,
        status: RentalStatus,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            customer_id,
            start_date,
            end_date,
            cost,
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }

    pub fn ensure_active(&self) -> error_stack::Result<(), KernelError> {
        match self.status {
            RentalStatus::Active => Ok(()),
            RentalStatus::Closed => Err(Report::new(KernelError::InvalidState)
                .attach_printable(format!("Rental {} is already closed", self.id))),
        }
    }

    /// Rejects a period whose end precedes its start.
    pub fn check_period(
        start_date: &RentalStartDate,
        end_date: Option<&RentalEndDate>,
    ) -> error_stack::Result<(), KernelError> {
        match end_date {
            Some(end) if end.as_ref() < start_date.as_ref() => {
                Err(Report::new(KernelError::InvalidInput).attach_printable(format!(
                    "End date {} precedes start date {}",
                    end.as_ref(),
                    start_date.as_ref()
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{
        CustomerId, Rental, RentalCost, RentalEndDate, RentalId, RentalStartDate, RentalStatus,
        VehicleId,
    };
    use crate::KernelError;

    fn rental(status: RentalStatus) -> Rental {
        Rental::new(
            RentalId::new(Uuid::new_v4()),
            VehicleId::new(Uuid::new_v4()),
            CustomerId::new(Uuid::new_v4()),
            RentalStartDate::new(date!(2025 - 08 - 01)),
            None,
            RentalCost::new(1000),
            status,
        )
    }

    #[test]
    fn closed_rental_is_not_active() {
        assert!(rental(RentalStatus::Active).ensure_active().is_ok());
        let error = rental(RentalStatus::Closed).ensure_active().unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidState);
    }

    #[test]
    fn reversed_period_is_rejected() {
        let start = RentalStartDate::new(date!(2025 - 08 - 10));
        assert!(Rental::check_period(&start, None).is_ok());
        assert!(
            Rental::check_period(&start, Some(&RentalEndDate::new(date!(2025 - 08 - 10)))).is_ok()
        );
        let error = Rental::check_period(&start, Some(&RentalEndDate::new(date!(2025 - 08 - 09))))
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidInput);
    }
}
