//! Audit workflow: physical-count assertions and their confirmation.
//!
//! Submission records what an auditor observed; confirmation only accepts
//! the record. The asserted status is never copied into the asset's
//! authoritative status — that field changes through the edit that
//! accompanied the assertion, or not at all. This asymmetry is preserved
//! deliberately (the log is a verification trail, not a write path).

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::audit::{AuditDto, AuditListQuery, AuditPageDto, CreateAuditDto},
    server::{
        data::{asset::AssetRepository, audit::AuditRepository},
        error::{policy::AuthorizationError, workflow::NotFoundError, Error},
        model::principal::Principal,
        service::{
            catalog,
            policy::{self, Action, PolicyService},
        },
    },
};

pub static DEFAULT_PAGE_SIZE: u64 = 25;
pub static MAX_PAGE_SIZE: u64 = 100;

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an audit assertion for an asset. The asserted status must
    /// resolve against the live catalog; the asset itself is not mutated.
    pub async fn submit(
        &self,
        principal: &Principal,
        input: CreateAuditDto,
    ) -> Result<AuditDto, Error> {
        let asset = AssetRepository::new(self.db)
            .find_by_id(input.asset_id)
            .await?
            .ok_or(NotFoundError::record("Asset", input.asset_id))?;

        policy::authorize(principal, &Action::SubmitAudit(&asset))?;
        PolicyService::new(self.db)
            .check_edit_window(principal, asset.id)
            .await?;

        catalog::require_status(self.db, &input.status).await?;

        let audit = AuditRepository::new(self.db)
            .create(&asset, principal.id, input.status, input.note)
            .await?;

        tracing::info!(
            audit_id = audit.id,
            asset_id = audit.asset_id,
            status = %audit.status,
            "audit assertion recorded"
        );

        Ok(to_dto(audit))
    }

    /// Batch-confirms audit records by id. Rows already confirmed (or, for
    /// an admin, outside their department) are skipped, which makes the
    /// operation idempotent: re-confirming changes nothing and reports no
    /// error. All confirmations land in one transaction.
    pub async fn confirm(&self, principal: &Principal, ids: Vec<i32>) -> Result<u64, Error> {
        policy::authorize(principal, &Action::ConfirmAudits)?;

        let department = if principal.is_super_admin() {
            None
        } else {
            Some(
                principal
                    .department_id
                    .ok_or(AuthorizationError::RoleForbidden)?,
            )
        };

        let txn = self.db.begin().await?;
        let confirmed = AuditRepository::new(&txn).confirm_many(&ids, department).await?;
        txn.commit().await?;

        tracing::info!(requested = ids.len(), confirmed, "audit batch confirmed");

        Ok(confirmed)
    }

    /// Pages through the audit log, newest first. Non-superadmins only see
    /// their own department's rows; without a department the page is empty.
    pub async fn list(
        &self,
        principal: &Principal,
        query: AuditListQuery,
    ) -> Result<AuditPageDto, Error> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let department = if principal.is_super_admin() {
            query.department_id
        } else {
            match principal.department_id {
                Some(own) => {
                    if query.department_id.is_some_and(|requested| requested != own) {
                        return Ok(empty_page(page, per_page));
                    }
                    Some(own)
                }
                None => return Ok(empty_page(page, per_page)),
            }
        };

        let (audits, total) = AuditRepository::new(self.db)
            .list(department, query.asset_id, query.confirmed, page, per_page)
            .await?;

        Ok(AuditPageDto {
            audits: audits.into_iter().map(to_dto).collect(),
            page,
            per_page,
            total,
        })
    }
}

fn empty_page(page: u64, per_page: u64) -> AuditPageDto {
    AuditPageDto {
        audits: Vec::new(),
        page,
        per_page,
        total: 0,
    }
}

fn to_dto(audit: entity::asset_audit::Model) -> AuditDto {
    AuditDto {
        id: audit.id,
        asset_id: audit.asset_id,
        user_id: audit.user_id,
        department_id: audit.department_id,
        status: audit.status,
        note: audit.note,
        checked_at: audit.checked_at,
        confirmed: audit.confirmed,
    }
}
