use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::event::{Applier, RentalEvent};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnRentalQuery, DependOnVehicleQuery,
    RentalQuery, VehicleQuery,
};
use kernel::interface::update::{
    DependOnRentalModifier, DependOnVehicleModifier, RentalModifier, VehicleModifier,
};
use kernel::prelude::entity::{
    CustomerId, RecentWindow, Rental, RentalCost, RentalEndDate, RentalId, RentalStartDate,
    RentalStatus, VehicleAvailability, VehicleId,
};
use kernel::KernelError;

use crate::transfer::{
    CreateRentalDto, GetRecentRentalsDto, GetRentalDto, RentalDto, UpdateRentalDto,
};

#[async_trait::async_trait]
pub trait GetRentalService: 'static + Sync + Send + DependOnRentalQuery {
    async fn get_rental(
        &self,
        dto: GetRentalDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let id = RentalId::new(dto.id);
        let rental = self.rental_query().find_by_id(&mut con, &id).await?;
        Ok(rental.map(RentalDto::from))
    }

    /// Rentals started within the trailing window ending at `dto.as_of`,
    /// most recent start first.
    async fn list_recent_rentals(
        &self,
        dto: GetRecentRentalsDto,
    ) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let since = RecentWindow::new(dto.months)?.earliest_start(dto.as_of)?;

        let mut con = self.database_connection().transact().await?;
        let rentals = self.rental_query().find_started_since(&mut con, &since).await?;
        tracing::debug!(%since, found = rentals.len(), "Listed recent rentals");
        Ok(rentals.into_iter().map(RentalDto::from).collect())
    }
}

impl<T> GetRentalService for T where T: DependOnRentalQuery {}

#[async_trait::async_trait]
pub trait CreateRentalService:
    'static
    + Sync
    + Send
    + DependOnVehicleQuery
    + DependOnVehicleModifier
    + DependOnCustomerQuery
    + DependOnRentalModifier
{
    /// Opens a rental and marks the vehicle unavailable in one transaction.
    async fn create_rental(
        &self,
        dto: CreateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let start_date = RentalStartDate::new(dto.start_date);
        let end_date = dto.end_date.map(RentalEndDate::new);
        let cost = RentalCost::new(dto.cost);
        cost.ensure_non_negative()?;
        Rental::check_period(&start_date, end_date.as_ref())?;

        let mut con = self.database_connection().transact().await?;
        let vehicle_id = VehicleId::new(dto.vehicle_id);
        let customer_id = CustomerId::new(dto.customer_id);

        let vehicle = self
            .vehicle_query()
            .find_by_id_for_update(&mut con, &vehicle_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Vehicle {vehicle_id} not found"))
            })?;
        if !self.customer_query().exists(&mut con, &customer_id).await? {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Customer {customer_id} not found")));
        }
        if !vehicle.is_available() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("Vehicle {vehicle_id} is not available")));
        }

        self.vehicle_modifier()
            .set_available(&mut con, &vehicle_id, &VehicleAvailability::new(false))
            .await?;
        let rental = Rental::new(
            RentalId::new(Uuid::new_v4()),
            vehicle_id,
            customer_id,
            start_date,
            end_date,
            cost,
            RentalStatus::Active,
        );
        self.rental_modifier().create(&mut con, &rental).await?;
        con.commit().await?;

        tracing::info!(rental = %rental.id(), vehicle = %vehicle_id, customer = %customer_id, "Rental opened");
        Ok(RentalDto::from(rental))
    }
}

impl<T> CreateRentalService for T where
    T: DependOnVehicleQuery + DependOnVehicleModifier + DependOnCustomerQuery + DependOnRentalModifier
{
}

#[async_trait::async_trait]
pub trait UpdateRentalService:
    'static + Sync + Send + DependOnRentalQuery + DependOnRentalModifier
{
    /// Amends the period or cost of an active rental. An empty amendment
    /// returns the rental as stored, whatever its status.
    async fn update_rental(
        &self,
        dto: UpdateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let cost = dto.cost.map(RentalCost::new);
        if let Some(cost) = &cost {
            cost.ensure_non_negative()?;
        }
        let event = RentalEvent::Amended {
            start_date: dto.start_date.map(RentalStartDate::new),
            end_date: dto.end_date.map(RentalEndDate::new),
            cost,
        };

        let mut con = self.database_connection().transact().await?;
        let id = RentalId::new(dto.id);
        let mut rental = self
            .rental_query()
            .find_by_id_for_update(&mut con, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("Rental {id} not found"))
            })?;
        if event.is_noop() {
            return Ok(RentalDto::from(rental));
        }
        rental.ensure_active()?;

        rental.apply(event);
        Rental::check_period(rental.start_date(), rental.end_date().as_ref())?;
        self.rental_modifier().update(&mut con, &rental).await?;
        con.commit().await?;

        tracing::info!(rental = %id, "Rental amended");
        Ok(RentalDto::from(rental))
    }
}

impl<T> UpdateRentalService for T where T: DependOnRentalQuery + DependOnRentalModifier {}
