use serde::{Deserialize, Serialize};

use crate::entity::{
    Rental, RentalCost, RentalEndDate, RentalStartDate, RentalStatus, ReturnedOn,
};
use crate::event::Applier;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RentalEvent {
    Amended {
        start_date: Option<RentalStartDate>,
        end_date: Option<RentalEndDate>,
        cost: Option<RentalCost>,
    },
    Closed {
        returned_on: ReturnedOn,
    },
}

impl RentalEvent {
    /// An amendment that touches no field.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            RentalEvent::Amended {
                start_date: None,
                end_date: None,
                cost: None,
            }
        )
    }
}

impl Applier<RentalEvent> for Rental {
    fn apply(&mut self, event: RentalEvent) {
        if !self.is_active() {
            return;
        }
        match event {
            RentalEvent::Amended {
                start_date,
                end_date,
                cost,
            } => self.substitute(|rental| {
                if let Some(start_date) = start_date {
                    *rental.start_date = start_date;
                }
                if let Some(end_date) = end_date {
                    *rental.end_date = Some(end_date);
                }
                if let Some(cost) = cost {
                    *rental.cost = cost;
                }
            }),
            RentalEvent::Closed { returned_on } => self.substitute(|rental| {
                *rental.status = RentalStatus::Closed;
                *rental.end_date = Some(RentalEndDate::new(*returned_on.as_ref()));
            }),
        }
    }
}
