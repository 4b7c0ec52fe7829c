use std::ops::{Deref, DerefMut};
use std::time::Duration;

use error_stack::ResultExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAlertQuery, DependOnCustomerQuery, DependOnRentalQuery, DependOnRepairQuery,
    DependOnReturnQuery, DependOnVehicleQuery,
};
use kernel::interface::update::{
    DependOnAlertModifier, DependOnCustomerModifier, DependOnRentalModifier,
    DependOnRepairModifier, DependOnReturnModifier, DependOnVehicleModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{
    alert::*, customer::*, rental::*, rental_return::*, repair::*, vehicle::*,
};

mod alert;
mod customer;
mod rental;
mod rental_return;
mod repair;
mod vehicle;

static POSTGRES_URL: &str = "POSTGRES_URL";

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    /// Connects to `POSTGRES_URL` and applies pending migrations.
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        Self::connect(&url).await
    }

    pub async fn connect(url: &str) -> error_stack::Result<Self, KernelError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(url)
            .await
            .convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to apply migrations")?;
        tracing::info!("Connected to postgres");
        Ok(Self { pool })
    }
}

/// An open `BEGIN ... COMMIT` block. Dropping it rolls back.
pub struct PostgresConnection(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresConnection;
    async fn transact(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(PostgresConnection(con))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl DependOnVehicleQuery for PostgresDatabase {
    type VehicleQuery = PostgresVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &PostgresVehicleRepository
    }
}

impl DependOnVehicleModifier for PostgresDatabase {
    type VehicleModifier = PostgresVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &PostgresVehicleRepository
    }
}

impl DependOnCustomerQuery for PostgresDatabase {
    type CustomerQuery = PostgresCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &PostgresCustomerRepository
    }
}

impl DependOnCustomerModifier for PostgresDatabase {
    type CustomerModifier = PostgresCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &PostgresCustomerRepository
    }
}

impl DependOnRentalQuery for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

impl DependOnRentalModifier for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}

impl DependOnReturnQuery for PostgresDatabase {
    type ReturnQuery = PostgresReturnRepository;
    fn return_query(&self) -> &Self::ReturnQuery {
        &PostgresReturnRepository
    }
}

impl DependOnReturnModifier for PostgresDatabase {
    type ReturnModifier = PostgresReturnRepository;
    fn return_modifier(&self) -> &Self::ReturnModifier {
        &PostgresReturnRepository
    }
}

impl DependOnAlertQuery for PostgresDatabase {
    type AlertQuery = PostgresAlertRepository;
    fn alert_query(&self) -> &Self::AlertQuery {
        &PostgresAlertRepository
    }
}

impl DependOnAlertModifier for PostgresDatabase {
    type AlertModifier = PostgresAlertRepository;
    fn alert_modifier(&self) -> &Self::AlertModifier {
        &PostgresAlertRepository
    }
}

impl DependOnRepairQuery for PostgresDatabase {
    type RepairQuery = PostgresRepairRepository;
    fn repair_query(&self) -> &Self::RepairQuery {
        &PostgresRepairRepository
    }
}

impl DependOnRepairModifier for PostgresDatabase {
    type RepairModifier = PostgresRepairRepository;
    fn repair_modifier(&self) -> &Self::RepairModifier {
        &PostgresRepairRepository
    }
}
