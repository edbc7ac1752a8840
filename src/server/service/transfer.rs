//! Transfer workflow: the state machine moving departmental ownership.
//!
//! `pending` is the only live state; approval and rejection are terminal.
//! Both resolutions run as a conditional update inside a transaction so two
//! concurrent resolutions cannot both succeed: the loser sees zero affected
//! rows and reports a conflict instead of double-applying.

use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::{
    model::transfer::{CreateTransferDto, TransferDto, TransferListQuery},
    server::{
        data::{
            asset::AssetRepository, department::DepartmentRepository,
            transfer::TransferRepository,
        },
        error::{
            validation::ValidationError,
            workflow::{ConflictError, NotFoundError},
            Error,
        },
        model::principal::Principal,
        service::policy::{self, Action, PolicyService},
    },
};

use entity::asset_transfer::TransferStatus;

pub struct TransferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransferService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests moving an asset to another department.
    ///
    /// A transfer to the asset's current department is a validation error,
    /// not a silent no-op, and an asset can carry at most one pending
    /// transfer: a second request fails with a conflict inside the same
    /// transaction that would have created it.
    pub async fn request(
        &self,
        principal: &Principal,
        input: CreateTransferDto,
    ) -> Result<TransferDto, Error> {
        let asset = AssetRepository::new(self.db)
            .find_by_id(input.asset_id)
            .await?
            .ok_or(NotFoundError::record("Asset", input.asset_id))?;

        policy::authorize(principal, &Action::EditAsset(&asset))?;
        PolicyService::new(self.db)
            .check_edit_window(principal, asset.id)
            .await?;

        if asset.department_id == Some(input.to_department_id) {
            return Err(ValidationError::SelfTransfer(input.to_department_id).into());
        }

        DepartmentRepository::new(self.db)
            .find_by_id(input.to_department_id)
            .await?
            .ok_or(NotFoundError::record("Department", input.to_department_id))?;

        // The uniqueness check and the insert share a transaction so two
        // racing requests cannot both slip past the check.
        let txn = self.db.begin().await?;

        let repository = TransferRepository::new(&txn);

        if repository.find_pending_for_asset(asset.id).await?.is_some() {
            return Err(ConflictError::PendingTransferExists(asset.id).into());
        }

        let transfer = repository
            .create(&asset, input.to_department_id, principal.id, input.note)
            .await?;

        txn.commit().await?;

        tracing::info!(
            transfer_id = transfer.id,
            asset_id = transfer.asset_id,
            to_department_id = transfer.to_department_id,
            "transfer requested"
        );

        Ok(to_dto(transfer))
    }

    /// Approves a pending transfer: the transfer row moves to `approved` and
    /// the asset's owning department changes, atomically.
    pub async fn approve(&self, principal: &Principal, transfer_id: i32) -> Result<TransferDto, Error> {
        let transfer = self
            .resolve(principal, transfer_id, TransferStatus::Approved)
            .await?;

        tracing::info!(
            transfer_id,
            asset_id = transfer.asset_id,
            to_department_id = transfer.to_department_id,
            "transfer approved"
        );

        Ok(transfer)
    }

    /// Rejects a pending transfer. The asset is never touched.
    pub async fn reject(&self, principal: &Principal, transfer_id: i32) -> Result<TransferDto, Error> {
        let transfer = self
            .resolve(principal, transfer_id, TransferStatus::Rejected)
            .await?;

        tracing::info!(transfer_id, asset_id = transfer.asset_id, "transfer rejected");

        Ok(transfer)
    }

    async fn resolve(
        &self,
        principal: &Principal,
        transfer_id: i32,
        next: TransferStatus,
    ) -> Result<TransferDto, Error> {
        let txn = self.db.begin().await?;

        let repository = TransferRepository::new(&txn);

        let transfer = repository
            .find_by_id(transfer_id)
            .await?
            .ok_or(NotFoundError::record("Transfer", transfer_id))?;

        policy::authorize(principal, &Action::ResolveTransfer(&transfer))?;

        // A transfer that already left `pending` is reported as not found:
        // from the caller's point of view there is no pending transfer with
        // this id anymore.
        if !transfer.status.can_transition_to(&next) {
            return Err(NotFoundError::TransferNotPending(transfer_id).into());
        }

        let moved = repository
            .mark_resolved(transfer_id, next.clone(), principal.id)
            .await?;

        // The row was pending when read but is not anymore: a concurrent
        // resolution won the race. Benign, reportable, retry-safe.
        if moved == 0 {
            return Err(ConflictError::TransferResolvedConcurrently(transfer_id).into());
        }

        if next == TransferStatus::Approved {
            AssetRepository::new(&txn)
                .set_department(transfer.asset_id, transfer.to_department_id)
                .await?;
        }

        txn.commit().await?;

        let resolved = TransferRepository::new(self.db)
            .find_by_id(transfer_id)
            .await?
            .ok_or(NotFoundError::record("Transfer", transfer_id))?;

        Ok(to_dto(resolved))
    }

    /// Transfers visible to the caller, filtered by direction relative to a
    /// department and by status. Non-superadmins are pinned to their own
    /// department; without one they see nothing.
    pub async fn list(
        &self,
        principal: &Principal,
        query: TransferListQuery,
    ) -> Result<Vec<TransferDto>, Error> {
        let department = if principal.is_super_admin() {
            query.department_id
        } else {
            match principal.department_id {
                Some(department) => Some(department),
                None => return Ok(Vec::new()),
            }
        };

        let status = query
            .status
            .map(|status| parse_status(&status))
            .transpose()?;

        let transfers = TransferRepository::new(self.db)
            .list(department, query.direction, status)
            .await?;

        Ok(transfers.into_iter().map(to_dto).collect())
    }

    /// Full chronological transfer history of one asset, available to every
    /// principal regardless of department scoping: auditability outranks
    /// confidentiality for this log.
    pub async fn history(&self, asset_id: i32) -> Result<Vec<TransferDto>, Error> {
        AssetRepository::new(self.db)
            .find_by_id(asset_id)
            .await?
            .ok_or(NotFoundError::record("Asset", asset_id))?;

        let transfers = TransferRepository::new(self.db).history(asset_id).await?;

        Ok(transfers.into_iter().map(to_dto).collect())
    }
}

fn parse_status(status: &str) -> Result<TransferStatus, Error> {
    match status {
        "pending" => Ok(TransferStatus::Pending),
        "approved" => Ok(TransferStatus::Approved),
        "rejected" => Ok(TransferStatus::Rejected),
        other => Err(ValidationError::UnknownTransferStatus(other.to_string()).into()),
    }
}

fn to_dto(transfer: entity::asset_transfer::Model) -> TransferDto {
    TransferDto {
        id: transfer.id,
        asset_id: transfer.asset_id,
        from_department_id: transfer.from_department_id,
        to_department_id: transfer.to_department_id,
        requested_by: transfer.requested_by,
        status: transfer.status.to_value(),
        note: transfer.note,
        requested_at: transfer.requested_at,
        approved_by: transfer.approved_by,
        approved_at: transfer.approved_at,
    }
}
