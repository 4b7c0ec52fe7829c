use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::event::{Applier, RentalEvent};
use kernel::interface::query::{
    DependOnRentalQuery, DependOnReturnQuery, RentalQuery, ReturnQuery,
};
use kernel::interface::update::{
    DependOnRentalModifier, DependOnReturnModifier, DependOnVehicleModifier, RentalModifier,
    ReturnModifier, VehicleModifier,
};
use kernel::prelude::entity::{
    RentalId, RentalReturn, ReturnId, ReturnNotes, ReturnedOn, VehicleAvailability,
};
use kernel::KernelError;

use crate::service::EmitAlertService;
use crate::transfer::{RegisterReturnDto, ReturnDto};

#[async_trait::async_trait]
pub trait RegisterReturnService:
    'static
    + Sync
    + Send
    + DependOnRentalQuery
    + DependOnRentalModifier
    + DependOnReturnQuery
    + DependOnReturnModifier
    + DependOnVehicleModifier
    + EmitAlertService
{
    /// Closes an active rental, puts its vehicle back on the market and
    /// files an alert for a bad return, all in one transaction.
    async fn register_return(
        &self,
        dto: RegisterReturnDto,
    ) -> error_stack::Result<ReturnDto, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let rental_id = RentalId::new(dto.rental_id);
        let mut rental = self
            .rental_query()
            .find_by_id_for_update(&mut con, &rental_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Rental {rental_id} not found"))
            })?;
        rental.ensure_active()?;
        if self
            .return_query()
            .find_by_rental_id(&mut con, &rental_id)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable(format!("Rental {rental_id} has already been returned")));
        }

        let returned_on = ReturnedOn::new(dto.returned_on);
        if returned_on.as_ref() < rental.start_date().as_ref() {
            tracing::warn!(
                rental = %rental_id,
                returned_on = %returned_on.as_ref(),
                start_date = %rental.start_date().as_ref(),
                "Return date precedes rental start"
            );
        }

        let record = RentalReturn::new(
            ReturnId::new(Uuid::new_v4()),
            rental_id,
            returned_on,
            dto.condition,
            ReturnNotes::non_blank(dto.notes),
        );
        self.return_modifier().create(&mut con, &record).await?;

        rental.apply(RentalEvent::Closed { returned_on });
        self.rental_modifier().update(&mut con, &rental).await?;
        self.vehicle_modifier()
            .set_available(&mut con, rental.vehicle_id(), &VehicleAvailability::new(true))
            .await?;

        if record.condition().requires_alert() {
            self.on_bad_return(&mut con, rental.vehicle_id(), &rental_id)
                .await?;
        }
        con.commit().await?;

        tracing::info!(rental = %rental_id, condition = %record.condition(), "Rental closed");
        Ok(ReturnDto::from(record))
    }
}

impl<T> RegisterReturnService for T where
    T: DependOnRentalQuery
        + DependOnRentalModifier
        + DependOnReturnQuery
        + DependOnReturnModifier
        + DependOnVehicleModifier
        + EmitAlertService
{
}

#[async_trait::async_trait]
pub trait GetReturnService: 'static + Sync + Send + DependOnReturnQuery {
    async fn list_returns(&self) -> error_stack::Result<Vec<ReturnDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let returns = self.return_query().find_all(&mut con).await?;
        Ok(returns.into_iter().map(ReturnDto::from).collect())
    }
}

impl<T> GetReturnService for T where T: DependOnReturnQuery {}

#[cfg(test)]
mod test {
    use driver::database::MemoryDatabase;
    use kernel::prelude::entity::{RentalStatus, VehicleCondition};
    use kernel::KernelError;
    use time::macros::date;
    use time::Date;
    use uuid::Uuid;

    use crate::service::{
        CreateCustomerService, CreateRentalService, CreateVehicleService, GetAlertService,
        GetRentalService, GetReturnService, GetVehicleService, RegisterReturnService,
    };
    use crate::transfer::{
        CreateCustomerDto, CreateRentalDto, CreateVehicleDto, GetAllVehicleDto, GetRentalDto,
        GetVehicleDto, RegisterReturnDto,
    };

    struct Fleet {
        db: MemoryDatabase,
        vehicle: Uuid,
        customers: [Uuid; 2],
    }

    async fn fleet() -> Fleet {
        let db = MemoryDatabase::new();
        let vehicle = db
            .register_vehicle(CreateVehicleDto {
                brand: "Peugeot".to_string(),
                model: "208".to_string(),
                year: 2022,
            })
            .await
            .unwrap()
            .id;
        let mut customers = [Uuid::nil(); 2];
        for (slot, name) in customers.iter_mut().zip(["C1", "C2"]) {
            *slot = db
                .register_customer(CreateCustomerDto {
                    first_name: name.to_string(),
                    last_name: "Customer".to_string(),
                    phone: None,
                    address: None,
                })
                .await
                .unwrap()
                .id;
        }
        Fleet {
            db,
            vehicle,
            customers,
        }
    }

    fn rent(vehicle_id: Uuid, customer_id: Uuid, start_date: Date) -> CreateRentalDto {
        CreateRentalDto {
            vehicle_id,
            customer_id,
            start_date,
            end_date: None,
            cost: 1000,
        }
    }

    async fn available(db: &MemoryDatabase, id: Uuid) -> bool {
        db.get_vehicle(GetVehicleDto { id })
            .await
            .unwrap()
            .unwrap()
            .available
    }

    #[tokio::test]
    async fn bad_return_closes_rental_and_files_alert() -> error_stack::Result<(), KernelError> {
        let Fleet {
            db,
            vehicle,
            customers: [c1, c2],
        } = fleet().await;
        assert!(available(&db, vehicle).await);

        let rental = db
            .create_rental(rent(vehicle, c1, date!(2025 - 08 - 01)))
            .await?;
        assert!(!available(&db, vehicle).await);

        let error = db
            .create_rental(rent(vehicle, c2, date!(2025 - 08 - 02)))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Conflict);

        let record = db
            .register_return(RegisterReturnDto {
                rental_id: rental.id,
                returned_on: date!(2025 - 08 - 05),
                condition: VehicleCondition::Bad,
                notes: Some("Dented rear door".to_string()),
            })
            .await?;
        assert_eq!(record.rental_id, rental.id);
        assert_eq!(record.notes.as_deref(), Some("Dented rear door"));
        assert!(available(&db, vehicle).await);

        let closed = db.get_rental(GetRentalDto { id: rental.id }).await?.unwrap();
        assert_eq!(closed.status, RentalStatus::Closed);
        assert_eq!(closed.end_date, Some(date!(2025 - 08 - 05)));

        let alerts = db.list_alerts().await?;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vehicle_id, vehicle);
        assert_eq!(alerts[0].rental_id, rental.id);
        assert_eq!(alerts[0].condition, VehicleCondition::Bad);
        assert_eq!(alerts[0].description, "Vehicle returned in bad condition");
        Ok(())
    }

    #[tokio::test]
    async fn good_return_files_no_alert() -> error_stack::Result<(), KernelError> {
        let Fleet {
            db,
            vehicle,
            customers: [c1, _],
        } = fleet().await;
        let rental = db
            .create_rental(rent(vehicle, c1, date!(2025 - 08 - 01)))
            .await?;
        db.register_return(RegisterReturnDto {
            rental_id: rental.id,
            returned_on: date!(2025 - 08 - 03),
            condition: VehicleCondition::Good,
            notes: Some("  ".to_string()),
        })
        .await?;

        assert!(db.list_alerts().await?.is_empty());
        let returns = db.list_returns().await?;
        assert_eq!(returns.len(), 1);
        assert_eq!(returns[0].notes, None);
        Ok(())
    }

    #[tokio::test]
    async fn second_return_is_refused() -> error_stack::Result<(), KernelError> {
        let Fleet {
            db,
            vehicle,
            customers: [c1, _],
        } = fleet().await;
        let rental = db
            .create_rental(rent(vehicle, c1, date!(2025 - 08 - 01)))
            .await?;
        let dto = |condition| RegisterReturnDto {
            rental_id: rental.id,
            returned_on: date!(2025 - 08 - 05),
            condition,
            notes: None,
        };
        db.register_return(dto(VehicleCondition::Bad)).await?;

        let error = db
            .register_return(dto(VehicleCondition::Bad))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidState);
        assert_eq!(db.list_alerts().await?.len(), 1);
        assert_eq!(db.list_returns().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_rental_is_not_found() {
        let Fleet { db, .. } = fleet().await;
        let error = db
            .register_return(RegisterReturnDto {
                rental_id: Uuid::new_v4(),
                returned_on: date!(2025 - 08 - 05),
                condition: VehicleCondition::Good,
                notes: None,
            })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);
    }

    #[tokio::test]
    async fn early_return_is_accepted() -> error_stack::Result<(), KernelError> {
        let Fleet {
            db,
            vehicle,
            customers: [c1, _],
        } = fleet().await;
        let rental = db
            .create_rental(rent(vehicle, c1, date!(2025 - 08 - 10)))
            .await?;
        let record = db
            .register_return(RegisterReturnDto {
                rental_id: rental.id,
                returned_on: date!(2025 - 08 - 01),
                condition: VehicleCondition::Good,
                notes: None,
            })
            .await?;
        assert_eq!(record.returned_on, date!(2025 - 08 - 01));
        Ok(())
    }

    #[tokio::test]
    async fn availability_tracks_active_rentals() -> error_stack::Result<(), KernelError> {
        let Fleet {
            db,
            vehicle,
            customers,
        } = fleet().await;
        for (round, customer) in customers.into_iter().cycle().take(6).enumerate() {
            let start = date!(2025 - 01 - 01) + time::Duration::days(round as i64 * 10);
            let rental = db.create_rental(rent(vehicle, customer, start)).await?;
            assert!(!available(&db, vehicle).await);

            let condition = if round % 2 == 0 {
                VehicleCondition::Good
            } else {
                VehicleCondition::Bad
            };
            db.register_return(RegisterReturnDto {
                rental_id: rental.id,
                returned_on: start + time::Duration::days(3),
                condition,
                notes: None,
            })
            .await?;
            assert!(available(&db, vehicle).await);
        }

        let vehicles = db
            .list_vehicles(GetAllVehicleDto {
                limit: Default::default(),
                offset: Default::default(),
            })
            .await?;
        assert!(vehicles.iter().all(|vehicle| vehicle.available));
        assert_eq!(db.list_alerts().await?.len(), 3);
        Ok(())
    }
}
