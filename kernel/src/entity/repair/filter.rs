use destructure::Destructure;
use error_stack::Report;
use vodca::References;

use crate::entity::{Repair, RepairCost, RepairDate};
use crate::KernelError;

/// Inclusive bounds applied when querying the repair log.
#[derive(Debug, Clone, Default, PartialEq, Eq, References, Destructure)]
pub struct RepairFilter {
    from: Option<RepairDate>,
    to: Option<RepairDate>,
    max_cost: Option<RepairCost>,
}

impl RepairFilter {
    pub fn new(
        from: Option<RepairDate>,
        to: Option<RepairDate>,
        max_cost: Option<RepairCost>,
    ) -> error_stack::Result<Self, KernelError> {
        if let (Some(from), Some(to)) = (&from, &to) {
            if from > to {
                return Err(Report::new(KernelError::InvalidInput).attach_printable(format!(
                    "Range start {} is after range end {}",
                    from.as_ref(),
                    to.as_ref()
                )));
            }
        }
        Ok(Self { from, to, max_cost })
    }

    pub fn matches(&self, repair: &Repair) -> bool {
        let performed_on = repair.performed_on();
        self.from.map_or(true, |from| *performed_on >= from)
            && self.to.map_or(true, |to| *performed_on <= to)
            && self.max_cost.map_or(true, |max| *repair.cost() <= max)
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{
        Repair, RepairCost, RepairDate, RepairDescription, RepairFilter, RepairId, VehicleId,
    };
    use crate::KernelError;

    fn repair(on: time::Date, cost: i64) -> Repair {
        Repair::new(
            RepairId::new(Uuid::new_v4()),
            VehicleId::new(Uuid::new_v4()),
            RepairDate::new(on),
            RepairDescription::new("brake pads"),
            RepairCost::new(cost),
        )
    }

    #[test]
    fn bounds_are_inclusive() {
        let filter = RepairFilter::new(
            Some(RepairDate::new(date!(2025 - 01 - 01))),
            Some(RepairDate::new(date!(2025 - 01 - 31))),
            Some(RepairCost::new(500)),
        )
        .unwrap();
        assert!(filter.matches(&repair(date!(2025 - 01 - 01), 500)));
        assert!(filter.matches(&repair(date!(2025 - 01 - 31), 10)));
        assert!(!filter.matches(&repair(date!(2025 - 02 - 01), 10)));
        assert!(!filter.matches(&repair(date!(2025 - 01 - 15), 501)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(RepairFilter::default().matches(&repair(date!(1999 - 12 - 31), i64::MAX)));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let error = RepairFilter::new(
            Some(RepairDate::new(date!(2025 - 02 - 01))),
            Some(RepairDate::new(date!(2025 - 01 - 01))),
            None,
        )
        .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidInput);
    }
}
