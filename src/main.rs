//! GADtrack reporting backend
//!
//! Main application entry point: loads configuration, connects to the
//! database, and produces the event rollup and demographic exports.

use std::path::Path;

use tracing::{info, warn};

use gadtrack::{
    config::Settings,
    database::{connection::create_pool, run_migrations, DatabaseService},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting GADtrack...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = gadtrack::database::connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        ..Default::default()
    };
    let db_pool = create_pool(&db_config).await?;

    // Run database migrations
    run_migrations(&db_pool).await?;

    // Initialize services
    let database_service = DatabaseService::new(db_pool);
    let services = ServiceFactory::new(database_service, settings.clone());

    // Surface published notifications in the log
    let mut notifications = services.notification_service.subscribe();
    tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            info!(level = ?notification.level, "{}", notification.message);
        }
    });

    // Produce the rollup and demographic reports
    let output_dir = Path::new(&settings.export.output_dir);

    let report = services.report_service.event_report().await?;
    info!(
        total_events = report.totals.total_events,
        academic = report.totals.academic_events,
        non_academic = report.totals.non_academic_events,
        total_participants = report.totals.total_participants,
        male = report.totals.total_male,
        female = report.totals.total_female,
        "Event rollup computed"
    );

    let path = services
        .report_service
        .export_event_report(output_dir, Some(&settings.export.default_filename))
        .await?;
    services
        .notification_service
        .success(format!("Event report written to {}", path.display()));

    for row in &report.rows {
        match services
            .report_service
            .export_roster(
                row.event.id,
                output_dir,
                Some(&format!("participants_{}.csv", row.event.id)),
            )
            .await
        {
            Ok(path) => info!(event_id = row.event.id, path = %path.display(), "Roster exported"),
            Err(e) => warn!(event_id = row.event.id, error = %e, "Roster export failed"),
        }
    }

    info!("GADtrack reporting run complete");

    Ok(())
}
