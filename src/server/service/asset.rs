//! Asset registry rules: creation, partial edits, visibility-scoped reads,
//! and the dispatch that keeps the transfer and audit workflows from ever
//! sharing a single edit.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::asset::{AssetDto, CreateAssetDto, UpdateAssetDto},
    server::{
        data::{
            asset::{AssetChanges, AssetRecord, AssetRepository, NewAsset},
            audit::AuditRepository,
            department::DepartmentRepository,
            status::StatusRepository,
            transfer::TransferRepository,
        },
        error::{
            validation::ValidationError,
            workflow::{ConflictError, NotFoundError},
            Error,
        },
        model::principal::Principal,
        service::{
            catalog,
            policy::{self, Action, PolicyService, ReadScope},
            resolver,
        },
    },
};

/// Status assigned when an asset is created without one. Part of the seeded
/// catalog, so a fresh install accepts it.
pub static DEFAULT_STATUS: &str = "available";

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new asset. The owner is always the creating principal,
    /// regardless of what the payload claims; non-superadmins register
    /// assets into their own department.
    pub async fn create(
        &self,
        principal: &Principal,
        input: CreateAssetDto,
    ) -> Result<AssetDto, Error> {
        if input.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if input.code.trim().is_empty() {
            return Err(ValidationError::MissingField("code").into());
        }

        policy::authorize(
            principal,
            &Action::CreateAsset {
                department_id: input.department_id,
            },
        )?;

        let status = match input.status {
            Some(status) => {
                catalog::require_status(self.db, &status).await?;
                status
            }
            None => DEFAULT_STATUS.to_string(),
        };

        let department_id = if principal.is_super_admin() {
            input.department_id
        } else {
            principal.department_id
        };

        let asset = AssetRepository::new(self.db)
            .create(NewAsset {
                code: input.code,
                name: input.name,
                inventory_number: input.inventory_number,
                serial_number: input.serial_number,
                description: input.description,
                department_id,
                location_id: input.location_id,
                room: input.room,
                owner_id: principal.id,
                status,
                image_ref: input.image_ref,
                acquired_at: input.acquired_at,
            })
            .await?;

        self.read_one(asset.id).await
    }

    /// Partial edit of an asset.
    ///
    /// A changed department spawns a pending transfer instead of moving the
    /// asset; a changed status is written directly (and asserted as an audit
    /// record while a window is active). Changing both in one request is
    /// rejected before anything is written: the two workflows compete for
    /// the same record and a combined edit would leave it ambiguous which
    /// audit trail owns the change.
    pub async fn update(
        &self,
        principal: &Principal,
        asset_id: i32,
        input: UpdateAssetDto,
    ) -> Result<AssetDto, Error> {
        let asset = AssetRepository::new(self.db)
            .find_by_id(asset_id)
            .await?
            .ok_or(NotFoundError::record("Asset", asset_id))?;

        policy::authorize(principal, &Action::EditAsset(&asset))?;
        let window = PolicyService::new(self.db)
            .check_edit_window(principal, asset.id)
            .await?;

        let department_change = input
            .department_id
            .filter(|department| asset.department_id != Some(*department));
        let status_change = input
            .status
            .clone()
            .filter(|status| *status != asset.status);

        if department_change.is_some() && status_change.is_some() {
            return Err(ValidationError::CombinedDepartmentAndStatusEdit.into());
        }

        if let Some(status) = &status_change {
            catalog::require_status(self.db, status).await?;
        }

        let txn = self.db.begin().await?;

        if let Some(to_department) = department_change {
            DepartmentRepository::new(&txn)
                .find_by_id(to_department)
                .await?
                .ok_or(NotFoundError::record("Department", to_department))?;

            let transfer_repository = TransferRepository::new(&txn);

            if transfer_repository
                .find_pending_for_asset(asset.id)
                .await?
                .is_some()
            {
                return Err(ConflictError::PendingTransferExists(asset.id).into());
            }

            transfer_repository
                .create(&asset, to_department, principal.id, input.note.clone())
                .await?;
        }

        let updated = AssetRepository::new(&txn)
            .update(
                asset,
                AssetChanges {
                    code: input.code,
                    name: input.name,
                    inventory_number: input.inventory_number,
                    serial_number: input.serial_number,
                    description: input.description,
                    location_id: input.location_id,
                    room: input.room,
                    owner_id: input.owner_id,
                    status: status_change,
                    image_ref: input.image_ref,
                    acquired_at: input.acquired_at,
                },
            )
            .await?;

        // During an active window every counted edit leaves an audit
        // assertion, which is both the physical-count record and the
        // once-per-window marker. Department changes are excluded: the
        // transfer row is their marker, and the audit trail of that change
        // belongs to the transfer workflow.
        if window.is_some() && !principal.is_super_admin() && department_change.is_none() {
            AuditRepository::new(&txn)
                .create(&updated, principal.id, updated.status.clone(), input.note)
                .await?;
        }

        txn.commit().await?;

        self.read_one(asset_id).await
    }

    pub async fn get(&self, principal: &Principal, asset_id: i32) -> Result<AssetDto, Error> {
        let record = AssetRepository::new(self.db)
            .record_by_id(asset_id)
            .await?
            .ok_or(NotFoundError::record("Asset", asset_id))?;

        let visible = match policy::asset_read_scope(principal) {
            ReadScope::All => true,
            ReadScope::Department(department) => record.department_id == Some(department),
            ReadScope::Nothing => false,
        };

        if !visible {
            return Err(NotFoundError::record("Asset", asset_id).into());
        }

        let mut dtos = self.decorate(vec![record]).await?;
        Ok(dtos.remove(0))
    }

    pub async fn list(&self, principal: &Principal) -> Result<Vec<AssetDto>, Error> {
        let records = match policy::asset_read_scope(principal) {
            ReadScope::All => AssetRepository::new(self.db).records(None).await?,
            ReadScope::Department(department) => {
                AssetRepository::new(self.db).records(Some(department)).await?
            }
            ReadScope::Nothing => Vec::new(),
        };

        self.decorate(records).await
    }

    /// Assets of one department, scoped to the caller. A principal without
    /// a department affiliation always receives an empty list, never an
    /// error.
    pub async fn list_by_department(
        &self,
        principal: &Principal,
        department_id: i32,
    ) -> Result<Vec<AssetDto>, Error> {
        let Some(department) = policy::department_read_scope(principal, department_id) else {
            return Ok(Vec::new());
        };

        let records = AssetRepository::new(self.db).records(Some(department)).await?;

        self.decorate(records).await
    }

    pub async fn search(
        &self,
        principal: &Principal,
        query: &str,
        department_id: Option<i32>,
    ) -> Result<Vec<AssetDto>, Error> {
        let department = match department_id {
            Some(department_id) => {
                match policy::department_read_scope(principal, department_id) {
                    Some(department) => Some(department),
                    None => return Ok(Vec::new()),
                }
            }
            None => match policy::asset_read_scope(principal) {
                ReadScope::All => None,
                ReadScope::Department(department) => Some(department),
                ReadScope::Nothing => return Ok(Vec::new()),
            },
        };

        let records = AssetRepository::new(self.db).search(query, department).await?;

        self.decorate(records).await
    }

    /// Unconditional hard delete. Transfer and audit history rows keep
    /// referencing the removed id; the registry does not cascade.
    pub async fn delete(&self, principal: &Principal, asset_id: i32) -> Result<(), Error> {
        policy::authorize(principal, &Action::DeleteAsset)?;

        let result = AssetRepository::new(self.db).delete(asset_id).await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::record("Asset", asset_id).into());
        }

        tracing::info!(asset_id, "asset deleted");

        Ok(())
    }

    async fn read_one(&self, asset_id: i32) -> Result<AssetDto, Error> {
        let record = AssetRepository::new(self.db)
            .record_by_id(asset_id)
            .await?
            .ok_or(NotFoundError::record("Asset", asset_id))?;

        let mut dtos = self.decorate(vec![record]).await?;
        Ok(dtos.remove(0))
    }

    /// Overlays outstanding workflow state and catalog labels onto raw
    /// records. Display status is recomputed here on every read.
    async fn decorate(&self, records: Vec<AssetRecord>) -> Result<Vec<AssetDto>, Error> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let asset_ids: Vec<i32> = records.iter().map(|record| record.id).collect();

        let transferring: HashSet<i32> = TransferRepository::new(self.db)
            .pending_asset_ids(&asset_ids)
            .await?
            .into_iter()
            .collect();
        let awaiting_confirmation: HashSet<i32> = AuditRepository::new(self.db)
            .unconfirmed_asset_ids(&asset_ids)
            .await?
            .into_iter()
            .collect();
        let catalog: HashMap<String, entity::status_value::Model> = StatusRepository::new(self.db)
            .all()
            .await?
            .into_iter()
            .map(|status| (status.value.clone(), status))
            .collect();

        let dtos = records
            .into_iter()
            .map(|record| {
                let entry = catalog.get(&record.status);
                let display_status = resolver::display_status(
                    &record.status,
                    entry.map(|entry| entry.label.as_str()),
                    transferring.contains(&record.id),
                    awaiting_confirmation.contains(&record.id),
                );

                AssetDto {
                    id: record.id,
                    code: record.code,
                    inventory_number: record.inventory_number,
                    serial_number: record.serial_number,
                    name: record.name,
                    description: record.description,
                    department_id: record.department_id,
                    department_name: record.department_name,
                    location_id: record.location_id,
                    location_name: record.location_name,
                    room: record.room,
                    owner_id: record.owner_id,
                    owner_name: record.owner_name,
                    status: record.status,
                    display_status,
                    status_color: entry.map(|entry| entry.color.clone()),
                    image_ref: record.image_ref,
                    acquired_at: record.acquired_at,
                    created_at: record.created_at,
                    updated_at: record.updated_at,
                }
            })
            .collect();

        Ok(dtos)
    }
}
