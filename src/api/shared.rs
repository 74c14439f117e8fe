//! Shared state between API handlers
//!
//! Stores are owned here and guarded by short-lived locks; no lock is held
//! across an `.await`.

use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use crate::booking::BookingService;
use crate::brand::BrandSettingsStore;
use crate::catalog::CatalogStore;
use crate::mannequin::MannequinRenderer;

/// State shared by all handlers
pub struct AppState {
    catalog: RwLock<CatalogStore>,
    brand: RwLock<BrandSettingsStore>,
    booking: BookingService,
    renderer: MannequinRenderer,
    asset_dir: PathBuf,
    started: Instant,
}

/// Handle passed to axum as router state
pub type AppStateHandle = Arc<AppState>;

impl AppState {
    pub fn new(
        catalog: CatalogStore,
        brand: BrandSettingsStore,
        booking: BookingService,
        renderer: MannequinRenderer,
        asset_dir: PathBuf,
    ) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            brand: RwLock::new(brand),
            booking,
            renderer,
            asset_dir,
            started: Instant::now(),
        }
    }

    pub fn into_handle(self) -> AppStateHandle {
        Arc::new(self)
    }

    // Lock poisoning is ignored; the stores hold plain data.

    pub fn catalog(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.catalog.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.catalog.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn brand(&self) -> RwLockReadGuard<'_, BrandSettingsStore> {
        self.brand.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn brand_mut(&self) -> RwLockWriteGuard<'_, BrandSettingsStore> {
        self.brand.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn booking(&self) -> &BookingService {
        &self.booking
    }

    pub fn renderer(&self) -> &MannequinRenderer {
        &self.renderer
    }

    pub fn asset_dir(&self) -> &PathBuf {
        &self.asset_dir
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
