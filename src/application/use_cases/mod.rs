pub mod reconcile_inventory;
pub mod sync_workstation;

pub use reconcile_inventory::{
    reconcile, LocationConflict, ReconcileError, ReconcileInventoryUseCase, ReconcileOutcome,
    SyncFailure, SyncOperation,
};
pub use sync_workstation::{SyncReport, SyncWorkstationConfig, SyncWorkstationUseCase};
