use std::ffi::c_void;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::managers::check_tables;
use crate::types::{Entitlement, Sku};

#[derive(Default)]
pub(crate) struct StoreEvents {
    pub(crate) entitlement_create: Event<dyn FnMut(&Entitlement)>,
    pub(crate) entitlement_delete: Event<dyn FnMut(&Entitlement)>,
}

/// SKUs and entitlements of the application's store page.
///
/// The `count_*`, `*_at` and lookup calls read a cache that only the matching
/// `fetch_*` call fills.
pub struct StoreManager {
    methods: *mut sys::IDiscordStoreManager,
    shared: Rc<ClientShared>,
}

impl StoreManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordStoreManager,
        events: *mut sys::IDiscordStoreEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("StoreManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordStoreEvents {
        sys::IDiscordStoreEvents {
            on_entitlement_create: Some(on_entitlement_create),
            on_entitlement_delete: Some(on_entitlement_delete),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordStoreManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    // SKUs

    pub fn fetch_skus(&self, callback: impl FnOnce(Result<()>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let fetch_skus = method!(m, fetch_skus);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { fetch_skus(m, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn count_skus(&self) -> Result<i32> {
        let m = self.methods()?;
        let count_skus = method!(m, count_skus);
        let mut count = 0;
        unsafe { count_skus(m, &mut count) };
        Ok(count)
    }

    pub fn sku(&self, sku_id: i64) -> Result<Sku> {
        let m = self.methods()?;
        let get_sku = method!(m, get_sku);
        let mut raw = sys::DiscordSku::default();
        Error::from_code(unsafe { get_sku(m, sku_id, &mut raw) })?;
        Ok(Sku::from(&raw))
    }

    pub fn sku_at(&self, index: i32) -> Result<Sku> {
        let m = self.methods()?;
        let get_sku_at = method!(m, get_sku_at);
        let mut raw = sys::DiscordSku::default();
        Error::from_code(unsafe { get_sku_at(m, index, &mut raw) })?;
        Ok(Sku::from(&raw))
    }

    pub fn skus(&self) -> Result<Vec<Sku>> {
        (0..self.count_skus()?).map(|index| self.sku_at(index)).collect()
    }

    // Entitlements

    pub fn fetch_entitlements(&self, callback: impl FnOnce(Result<()>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let fetch_entitlements = method!(m, fetch_entitlements);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { fetch_entitlements(m, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn count_entitlements(&self) -> Result<i32> {
        let m = self.methods()?;
        let count_entitlements = method!(m, count_entitlements);
        let mut count = 0;
        unsafe { count_entitlements(m, &mut count) };
        Ok(count)
    }

    pub fn entitlement(&self, entitlement_id: i64) -> Result<Entitlement> {
        let m = self.methods()?;
        let get_entitlement = method!(m, get_entitlement);
        let mut raw = sys::DiscordEntitlement::default();
        Error::from_code(unsafe { get_entitlement(m, entitlement_id, &mut raw) })?;
        Ok(Entitlement::from(&raw))
    }

    pub fn entitlement_at(&self, index: i32) -> Result<Entitlement> {
        let m = self.methods()?;
        let get_entitlement_at = method!(m, get_entitlement_at);
        let mut raw = sys::DiscordEntitlement::default();
        Error::from_code(unsafe { get_entitlement_at(m, index, &mut raw) })?;
        Ok(Entitlement::from(&raw))
    }

    pub fn entitlements(&self) -> Result<Vec<Entitlement>> {
        (0..self.count_entitlements()?)
            .map(|index| self.entitlement_at(index))
            .collect()
    }

    pub fn has_sku_entitlement(&self, sku_id: i64) -> Result<bool> {
        let m = self.methods()?;
        let has_sku_entitlement = method!(m, has_sku_entitlement);
        let mut has_entitlement = false;
        Error::from_code(unsafe { has_sku_entitlement(m, sku_id, &mut has_entitlement) })?;
        Ok(has_entitlement)
    }

    /// Opens the purchase flow in the overlay.
    pub fn start_purchase(
        &self,
        sku_id: i64,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let start_purchase = method!(m, start_purchase);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            start_purchase(
                m,
                sku_id,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn on_entitlement_create(&self, handler: impl FnMut(&Entitlement) + 'static) {
        self.shared.store.entitlement_create.subscribe(Box::new(handler));
    }

    pub fn on_entitlement_delete(&self, handler: impl FnMut(&Entitlement) + 'static) {
        self.shared.store.entitlement_delete.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_entitlement_create(
    event_data: *mut c_void,
    entitlement: *mut sys::DiscordEntitlement,
) {
    let Some(shared) = CallbackManager::client(event_data) else {
        return;
    };
    if let Some(entitlement) = unsafe { entitlement.as_ref() }.map(Entitlement::from) {
        shared.store.entitlement_create.emit(|handler| handler(&entitlement));
    }
}

unsafe extern "C" fn on_entitlement_delete(
    event_data: *mut c_void,
    entitlement: *mut sys::DiscordEntitlement,
) {
    let Some(shared) = CallbackManager::client(event_data) else {
        return;
    };
    if let Some(entitlement) = unsafe { entitlement.as_ref() }.map(Entitlement::from) {
        shared.store.entitlement_delete.emit(|handler| handler(&entitlement));
    }
}
