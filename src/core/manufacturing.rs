//! Manufacturing linkage business logic.
//!
//! Production lines and QC workflows are flat lookup entities with no
//! behavior beyond storage and display; a production order may reference one
//! of each. Nothing validates that a referenced line has capacity for the
//! order or that QC steps are executed; the linkage is declarative metadata.

use crate::{
    config::seed::SeedConfig,
    entities::{
        ProductionLine, ProductionOrder, QcWorkflow, production_line, production_order,
        qc_workflow,
    },
    errors::{Error, Result},
};
use sea_orm::{ModelTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Creates a new production line, validating that the name is non-empty.
pub async fn create_production_line(
    db: &DatabaseConnection,
    name: String,
    location: Option<String>,
    capacity: Option<f64>,
) -> Result<production_line::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Production line name cannot be empty".to_string(),
        });
    }

    let line = production_line::ActiveModel {
        name: Set(name.trim().to_string()),
        location: Set(location),
        capacity: Set(capacity),
        ..Default::default()
    };

    let result = line.insert(db).await?;
    Ok(result)
}

/// Creates a new QC workflow, validating that the name is non-empty.
/// Steps are free text, one step per line; see [`workflow_steps`].
pub async fn create_qc_workflow(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
    qc_steps: Option<String>,
) -> Result<qc_workflow::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "QC workflow name cannot be empty".to_string(),
        });
    }

    let workflow = qc_workflow::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        qc_steps: Set(qc_steps),
        ..Default::default()
    };

    let result = workflow.insert(db).await?;
    Ok(result)
}

/// Retrieves all production lines, ordered alphabetically by name.
pub async fn list_production_lines(
    db: &DatabaseConnection,
) -> Result<Vec<production_line::Model>> {
    ProductionLine::find()
        .order_by_asc(production_line::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all QC workflows, ordered alphabetically by name.
pub async fn list_qc_workflows(db: &DatabaseConnection) -> Result<Vec<qc_workflow::Model>> {
    QcWorkflow::find()
        .order_by_asc(qc_workflow::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a production line by name.
pub async fn get_production_line_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<production_line::Model>> {
    ProductionLine::find()
        .filter(production_line::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a QC workflow by name.
pub async fn get_qc_workflow_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<qc_workflow::Model>> {
    QcWorkflow::find()
        .filter(qc_workflow::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new production order with no line or workflow assigned.
pub async fn create_production_order(
    db: &DatabaseConnection,
    name: String,
) -> Result<production_order::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Production order name cannot be empty".to_string(),
        });
    }

    let order = production_order::ActiveModel {
        name: Set(name.trim().to_string()),
        production_line_id: Set(None),
        qc_workflow_id: Set(None),
        ..Default::default()
    };

    let result = order.insert(db).await?;
    Ok(result)
}

/// Finds a production order by its unique ID.
pub async fn get_production_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<production_order::Model>> {
    ProductionOrder::find_by_id(order_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Assigns a production line to an order; `None` clears the assignment.
pub async fn assign_production_line(
    db: &DatabaseConnection,
    order_id: i64,
    line_id: Option<i64>,
) -> Result<production_order::Model> {
    let order = get_production_order_by_id(db, order_id)
        .await?
        .ok_or(Error::ProductionOrderNotFound { id: order_id })?;

    let mut active: production_order::ActiveModel = order.into();
    active.production_line_id = Set(line_id);

    active.update(db).await.map_err(Into::into)
}

/// Assigns a QC workflow to an order; `None` clears the assignment.
pub async fn assign_qc_workflow(
    db: &DatabaseConnection,
    order_id: i64,
    workflow_id: Option<i64>,
) -> Result<production_order::Model> {
    let order = get_production_order_by_id(db, order_id)
        .await?
        .ok_or(Error::ProductionOrderNotFound { id: order_id })?;

    let mut active: production_order::ActiveModel = order.into();
    active.qc_workflow_id = Set(workflow_id);

    active.update(db).await.map_err(Into::into)
}

/// Follows a production order's optional line reference.
pub async fn production_line_for_order(
    db: &DatabaseConnection,
    order: &production_order::Model,
) -> Result<Option<production_line::Model>> {
    order
        .find_related(ProductionLine)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Follows a production order's optional workflow reference.
pub async fn qc_workflow_for_order(
    db: &DatabaseConnection,
    order: &production_order::Model,
) -> Result<Option<qc_workflow::Model>> {
    order
        .find_related(QcWorkflow)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Splits a workflow's free-text steps into one entry per non-blank line,
/// trimming surrounding whitespace.
#[must_use]
pub fn workflow_steps(workflow: &qc_workflow::Model) -> Vec<&str> {
    workflow
        .qc_steps
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Seeds production lines and QC workflows from the configuration file.
///
/// Entries whose name already exists are skipped, so re-running the seed on
/// every startup is harmless.
pub async fn seed_lookup_data(db: &DatabaseConnection, config: &SeedConfig) -> Result<()> {
    for line in &config.production_lines {
        if get_production_line_by_name(db, &line.name).await?.is_none() {
            info!(name = %line.name, "Seeding production line");
            create_production_line(db, line.name.clone(), line.location.clone(), line.capacity)
                .await?;
        }
    }

    for workflow in &config.qc_workflows {
        if get_qc_workflow_by_name(db, &workflow.name).await?.is_none() {
            info!(name = %workflow.name, "Seeding QC workflow");
            create_qc_workflow(
                db,
                workflow.name.clone(),
                workflow.description.clone(),
                workflow.qc_steps.clone(),
            )
            .await?;
        }
    }

    Ok(())
}
