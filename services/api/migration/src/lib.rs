use sea_orm_migration::prelude::*;

mod m20250901_000001_create_currencies;
mod m20250901_000002_create_users;
mod m20250901_000003_create_categories;
mod m20250901_000004_create_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_currencies::Migration),
            Box::new(m20250901_000002_create_users::Migration),
            Box::new(m20250901_000003_create_categories::Migration),
            Box::new(m20250901_000004_create_records::Migration),
        ]
    }
}
