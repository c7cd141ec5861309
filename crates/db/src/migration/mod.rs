//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration. The bootstrap
//! migration seeds global configuration (transaction-type mappings and
//! chart-of-accounts templates) idempotently.

pub use sea_orm_migration::prelude::*;

mod m20260601_000001_initial;
mod m20260601_000002_bootstrap;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_initial::Migration),
            Box::new(m20260601_000002_bootstrap::Migration),
        ]
    }
}
