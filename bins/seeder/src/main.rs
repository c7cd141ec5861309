//! Database seeder for Grootboek development and testing.
//!
//! Seeds a demo entity with its chart of accounts plus a demo fixed asset
//! for exercising the disposal workflow locally.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use grootboek_core::coa::OwnershipForm;
use grootboek_db::EntityRepository;
use grootboek_db::entities::{business_entities, fixed_assets, sea_orm_active_enums};
use grootboek_db::repositories::entity::SetupEntityInput;

/// Demo asset ID (consistent for all seeds)
const DEMO_ASSET_ID: &str = "00000000-0000-0000-0000-00000000a55e";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = grootboek_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo entity...");
    let entity_id = seed_demo_entity(&db).await;

    if let Some(entity_id) = entity_id {
        println!("Seeding demo fixed asset...");
        seed_demo_asset(&db, entity_id).await;
    }

    println!("Seeding complete!");
}

/// Seeds a demo sole-proprietor entity with its chart of accounts.
///
/// Returns the entity ID, or `None` when the demo entity already exists.
async fn seed_demo_entity(db: &DatabaseConnection) -> Option<Uuid> {
    use sea_orm::{ColumnTrait, QueryFilter};

    let existing = business_entities::Entity::find()
        .filter(business_entities::Column::Name.eq("Demo Trading CC"))
        .one(db)
        .await
        .ok()
        .flatten();

    if let Some(entity) = existing {
        println!("  Demo entity already exists, skipping...");
        return Some(entity.id);
    }

    let repo = EntityRepository::new(db.clone());
    let input = SetupEntityInput {
        name: "Demo Trading CC".to_string(),
        ownership_form: OwnershipForm::Sole,
        address: Some("12 Long Street, Cape Town".to_string()),
        fiscal_year_start_month: Some(3),
    };

    match repo.setup(input).await {
        Ok(setup) => {
            println!(
                "  Created demo entity with {} accounts",
                setup.accounts.len()
            );
            Some(setup.entity.id)
        }
        Err(e) => {
            eprintln!("Failed to seed demo entity: {e}");
            eprintln!("  (run the migrator first: cargo run --bin migrator up)");
            None
        }
    }
}

/// Seeds a demo fixed asset matching the classic disposal example:
/// 12000 at 20% a year, bought 2023-01-01.
async fn seed_demo_asset(db: &DatabaseConnection, entity_id: Uuid) {
    let asset_id = Uuid::parse_str(DEMO_ASSET_ID).expect("demo asset id is valid");

    if fixed_assets::Entity::find_by_id(asset_id)
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Demo asset already exists, skipping...");
        return;
    }

    let now = Utc::now();
    let asset = fixed_assets::ActiveModel {
        id: Set(asset_id),
        entity_id: Set(entity_id),
        name: Set("Delivery Bakkie".to_string()),
        cost_price: Set(Decimal::from(12000)),
        depreciation_rate: Set(Decimal::new(20, 2)),
        purchase_date: Set(NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")),
        accum_depreciation: Set(Decimal::ZERO),
        disposal_status: Set(sea_orm_active_enums::DisposalStatus::Active),
        disposal_date: Set(None),
        selling_price: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    if let Err(e) = asset.insert(db).await {
        eprintln!("Failed to insert demo asset: {e}");
    } else {
        println!("  Created demo asset: Delivery Bakkie");
    }
}
