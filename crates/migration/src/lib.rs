pub use sea_orm_migration::prelude::*;

mod m20250501_000000_init;
mod m20250515_000000_costs_user_date_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250501_000000_init::Migration),
            Box::new(m20250515_000000_costs_user_date_index::Migration),
        ]
    }
}
