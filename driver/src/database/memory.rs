use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAlertQuery, DependOnCustomerQuery, DependOnRentalQuery, DependOnRepairQuery,
    DependOnReturnQuery, DependOnVehicleQuery,
};
use kernel::interface::update::{
    DependOnAlertModifier, DependOnCustomerModifier, DependOnRentalModifier,
    DependOnRepairModifier, DependOnReturnModifier, DependOnVehicleModifier,
};
use kernel::prelude::entity::{
    Alert, Customer, Rental, RentalReturn, Repair, SelectLimit, SelectOffset, Vehicle,
};
use kernel::KernelError;

pub use self::{
    alert::*, customer::*, rental::*, rental_return::*, repair::*, vehicle::*,
};

mod alert;
mod customer;
mod rental;
mod rental_return;
mod repair;
mod vehicle;

/// Every collection kept in insertion order.
#[derive(Debug, Clone, Default)]
pub(in crate::database) struct MemoryStore {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
    returns: Vec<RentalReturn>,
    alerts: Vec<Alert>,
    repairs: Vec<Repair>,
}

/// Process-local store for tests and single-node runs.
///
/// Committed state is published as an immutable snapshot. Readers take the
/// current snapshot without waiting on writers. A transaction that writes or
/// locks a row takes the writer lock, which it holds until it is committed
/// or dropped, so writing transactions are serialized.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    committed: Arc<RwLock<Arc<MemoryStore>>>,
    writer: Arc<Mutex<()>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

struct Writing {
    _guard: OwnedMutexGuard<()>,
    staged: MemoryStore,
}

/// Reads see the snapshot taken at `transact`. After the first write or
/// row lock they see a staged copy of the latest committed state, which
/// replaces it on commit.
pub struct MemoryTransaction {
    committed: Arc<RwLock<Arc<MemoryStore>>>,
    writer: Arc<Mutex<()>>,
    snapshot: Arc<MemoryStore>,
    writing: Option<Writing>,
}

fn paginate<T: Clone>(items: &[T], limit: &SelectLimit, offset: &SelectOffset) -> Vec<T> {
    let offset = usize::try_from(*offset.as_ref()).unwrap_or(0);
    let limit = usize::try_from(*limit.as_ref()).unwrap_or(0);
    items.iter().skip(offset).take(limit).cloned().collect()
}

impl MemoryTransaction {
    pub(in crate::database) fn store(&self) -> &MemoryStore {
        match &self.writing {
            Some(writing) => &writing.staged,
            None => &self.snapshot,
        }
    }

    /// Takes the writer lock if this transaction does not hold it yet.
    pub(in crate::database) async fn lock(&mut self) -> &mut MemoryStore {
        let writing = match self.writing.take() {
            Some(writing) => writing,
            None => {
                let guard = Arc::clone(&self.writer).lock_owned().await;
                let latest = Arc::clone(&*self.committed.read().await);
                Writing {
                    _guard: guard,
                    staged: MemoryStore::clone(&latest),
                }
            }
        };
        &mut self.writing.insert(writing).staged
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let snapshot = Arc::clone(&*self.committed.read().await);
        Ok(MemoryTransaction {
            committed: Arc::clone(&self.committed),
            writer: Arc::clone(&self.writer),
            snapshot,
            writing: None,
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        if let Some(Writing { _guard, staged }) = self.writing {
            *self.committed.write().await = Arc::new(staged);
        }
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl DependOnVehicleQuery for MemoryDatabase {
    type VehicleQuery = MemoryVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &MemoryVehicleRepository
    }
}

impl DependOnVehicleModifier for MemoryDatabase {
    type VehicleModifier = MemoryVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &MemoryVehicleRepository
    }
}

impl DependOnCustomerQuery for MemoryDatabase {
    type CustomerQuery = MemoryCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &MemoryCustomerRepository
    }
}

impl DependOnCustomerModifier for MemoryDatabase {
    type CustomerModifier = MemoryCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &MemoryCustomerRepository
    }
}

impl DependOnRentalQuery for MemoryDatabase {
    type RentalQuery = MemoryRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &MemoryRentalRepository
    }
}

impl DependOnRentalModifier for MemoryDatabase {
    type RentalModifier = MemoryRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &MemoryRentalRepository
    }
}

impl DependOnReturnQuery for MemoryDatabase {
    type ReturnQuery = MemoryReturnRepository;
    fn return_query(&self) -> &Self::ReturnQuery {
        &MemoryReturnRepository
    }
}

impl DependOnReturnModifier for MemoryDatabase {
    type ReturnModifier = MemoryReturnRepository;
    fn return_modifier(&self) -> &Self::ReturnModifier {
        &MemoryReturnRepository
    }
}

impl DependOnAlertQuery for MemoryDatabase {
    type AlertQuery = MemoryAlertRepository;
    fn alert_query(&self) -> &Self::AlertQuery {
        &MemoryAlertRepository
    }
}

impl DependOnAlertModifier for MemoryDatabase {
    type AlertModifier = MemoryAlertRepository;
    fn alert_modifier(&self) -> &Self::AlertModifier {
        &MemoryAlertRepository
    }
}

impl DependOnRepairQuery for MemoryDatabase {
    type RepairQuery = MemoryRepairRepository;
    fn repair_query(&self) -> &Self::RepairQuery {
        &MemoryRepairRepository
    }
}

impl DependOnRepairModifier for MemoryDatabase {
    type RepairModifier = MemoryRepairRepository;
    fn repair_modifier(&self) -> &Self::RepairModifier {
        &MemoryRepairRepository
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::VehicleQuery;
    use kernel::interface::update::VehicleModifier;
    use kernel::prelude::entity::{
        Vehicle, VehicleAvailability, VehicleBrand, VehicleId, VehicleModel, VehicleYear,
    };
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::database::{MemoryDatabase, MemoryVehicleRepository};

    fn vehicle() -> Vehicle {
        Vehicle::new(
            VehicleId::new(Uuid::new_v4()),
            VehicleBrand::new("Skoda"),
            VehicleModel::new("Octavia"),
            VehicleYear::new(2018),
            VehicleAvailability::default(),
        )
    }

    #[tokio::test]
    async fn commit_publishes_writes() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = vehicle();

        let mut con = db.transact().await?;
        MemoryVehicleRepository.create(&mut con, &vehicle).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = MemoryVehicleRepository
            .find_by_id(&mut con, vehicle.id())
            .await?;
        assert_eq!(found, Some(vehicle));
        Ok(())
    }

    #[tokio::test]
    async fn rollback_discards_writes() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = vehicle();

        let mut con = db.transact().await?;
        MemoryVehicleRepository.create(&mut con, &vehicle).await?;
        con.roll_back().await?;

        let mut con = db.transact().await?;
        MemoryVehicleRepository.create(&mut con, &self::vehicle()).await?;
        drop(con);

        let mut con = db.transact().await?;
        let found = MemoryVehicleRepository.find_available(&mut con).await?;
        assert!(found.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn readers_do_not_wait_for_writers() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = vehicle();

        let mut writer = db.transact().await?;
        MemoryVehicleRepository.create(&mut writer, &vehicle).await?;

        let mut reader = db.transact().await?;
        let before = MemoryVehicleRepository.find_available(&mut reader).await?;
        assert!(before.is_empty());

        writer.commit().await?;

        let mut reader = db.transact().await?;
        let after = MemoryVehicleRepository.find_available(&mut reader).await?;
        assert_eq!(after, vec![vehicle]);
        Ok(())
    }

    #[tokio::test]
    async fn row_lock_sees_latest_commit() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let vehicle = vehicle();

        let mut early = db.transact().await?;

        let mut con = db.transact().await?;
        MemoryVehicleRepository.create(&mut con, &vehicle).await?;
        con.commit().await?;

        assert_eq!(
            MemoryVehicleRepository.find_by_id(&mut early, vehicle.id()).await?,
            None
        );
        let locked = MemoryVehicleRepository
            .find_by_id_for_update(&mut early, vehicle.id())
            .await?;
        assert_eq!(locked, Some(vehicle));
        Ok(())
    }
}
