//! Display-status resolution.
//!
//! The status shown to viewers overlays outstanding workflow state on the
//! asset's authoritative status. Resolution is a pure function recomputed on
//! every read and never persisted, so it cannot go stale.

/// Display status while at least one pending transfer references the asset.
pub static DISPLAY_TRANSFERRING: &str = "Transferring";
/// Display status while at least one unconfirmed audit references the asset
/// (and no transfer is pending).
pub static DISPLAY_PENDING: &str = "Pending";

/// Resolves the status displayed for an asset.
///
/// Precedence: a pending transfer overrides everything, an unconfirmed audit
/// overrides the catalog label, otherwise the catalog label for the
/// authoritative status is shown. When the catalog row for the stored value
/// has been deleted the raw value is displayed instead of failing the read.
pub fn display_status(
    authoritative: &str,
    catalog_label: Option<&str>,
    pending_transfer: bool,
    unconfirmed_audit: bool,
) -> String {
    if pending_transfer {
        return DISPLAY_TRANSFERRING.to_string();
    }

    if unconfirmed_audit {
        return DISPLAY_PENDING.to_string();
    }

    catalog_label.unwrap_or(authoritative).to_string()
}
