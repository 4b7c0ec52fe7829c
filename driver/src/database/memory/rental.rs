use std::cmp::Reverse;

use error_stack::Report;
use time::Date;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{Rental, RentalId, VehicleId};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryRentalRepository;

#[async_trait::async_trait]
impl RentalQuery for MemoryRentalRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        Ok(con
            .store()
            .rentals
            .iter()
            .find(|rental| rental.id() == id)
            .cloned())
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut MemoryTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        con.lock().await;
        self.find_by_id(con, id).await
    }

    async fn find_active_by_vehicle_id(
        &self,
        con: &mut MemoryTransaction,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        Ok(con
            .store()
            .rentals
            .iter()
            .find(|rental| rental.is_active() && rental.vehicle_id() == vehicle_id)
            .cloned())
    }

    async fn find_started_since(
        &self,
        con: &mut MemoryTransaction,
        since: &Date,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let mut rentals = con
            .store()
            .rentals
            .iter()
            .filter(|rental| rental.start_date().as_ref() >= since)
            .cloned()
            .collect::<Vec<_>>();
        rentals.sort_by_key(|rental| Reverse(*rental.start_date()));
        Ok(rentals)
    }
}

#[async_trait::async_trait]
impl RentalModifier for MemoryRentalRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let rentals = &mut con.lock().await.rentals;
        if rental.is_active()
            && rentals
                .iter()
                .any(|stored| stored.is_active() && stored.vehicle_id() == rental.vehicle_id())
        {
            return Err(Report::new(KernelError::Conflict).attach_printable(format!(
                "Vehicle {} already has an active rental",
                rental.vehicle_id()
            )));
        }
        rentals.push(rental.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .lock()
            .await
            .rentals
            .iter_mut()
            .find(|stored| stored.id() == rental.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Rental {} not found", rental.id()))
            })?;
        *stored = rental.clone();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{
        CustomerId, Rental, RentalCost, RentalId, RentalStartDate, RentalStatus, VehicleId,
    };
    use kernel::KernelError;

    use crate::database::{MemoryDatabase, MemoryRentalRepository};

    fn rental(vehicle_id: VehicleId, start: time::Date) -> Rental {
        Rental::new(
            RentalId::new(Uuid::new_v4()),
            vehicle_id,
            CustomerId::new(Uuid::new_v4()),
            RentalStartDate::new(start),
            None,
            RentalCost::new(100),
            RentalStatus::Active,
        )
    }

    #[tokio::test]
    async fn one_active_rental_per_vehicle() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let vehicle_id = VehicleId::new(Uuid::new_v4());
        MemoryRentalRepository
            .create(&mut con, &rental(vehicle_id, date!(2025 - 08 - 01)))
            .await?;
        let error = MemoryRentalRepository
            .create(&mut con, &rental(vehicle_id, date!(2025 - 08 - 02)))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Conflict);
        Ok(())
    }

    #[tokio::test]
    async fn started_since_is_newest_first() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        for start in [
            date!(2025 - 06 - 01),
            date!(2025 - 08 - 01),
            date!(2025 - 07 - 01),
            date!(2025 - 05 - 31),
        ] {
            MemoryRentalRepository
                .create(&mut con, &rental(VehicleId::new(Uuid::new_v4()), start))
                .await?;
        }

        let found = MemoryRentalRepository
            .find_started_since(&mut con, &date!(2025 - 06 - 01))
            .await?;
        let starts = found
            .iter()
            .map(|rental| *rental.start_date().as_ref())
            .collect::<Vec<_>>();
        assert_eq!(
            starts,
            vec![
                date!(2025 - 08 - 01),
                date!(2025 - 07 - 01),
                date!(2025 - 06 - 01)
            ]
        );
        Ok(())
    }
}
