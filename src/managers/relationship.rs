use std::ffi::c_void;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::managers::check_tables;
use crate::types::Relationship;

#[derive(Default)]
pub(crate) struct RelationshipEvents {
    pub(crate) refresh: Event<dyn FnMut()>,
    pub(crate) update: Event<dyn FnMut(&Relationship)>,
}

pub struct RelationshipManager {
    methods: *mut sys::IDiscordRelationshipManager,
    shared: Rc<ClientShared>,
}

type FilterFn<'a> = &'a mut dyn FnMut(&Relationship) -> bool;

impl RelationshipManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordRelationshipManager,
        events: *mut sys::IDiscordRelationshipEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("RelationshipManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordRelationshipEvents {
        sys::IDiscordRelationshipEvents {
            on_refresh: Some(on_refresh),
            on_relationship_update: Some(on_relationship_update),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordRelationshipManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// Narrows the relationship list seen by [`count`] and [`get_at`]. The
    /// predicate runs synchronously for every relationship before this returns.
    ///
    /// [`count`]: RelationshipManager::count
    /// [`get_at`]: RelationshipManager::get_at
    pub fn filter(&self, mut predicate: impl FnMut(&Relationship) -> bool) -> Result<()> {
        let m = self.methods()?;
        let filter = method!(m, filter);
        let mut predicate: FilterFn<'_> = &mut predicate;
        let data = (&raw mut predicate).cast::<c_void>();
        unsafe { filter(m, data, Some(filter_trampoline)) };
        Ok(())
    }

    pub fn count(&self) -> Result<u32> {
        let m = self.methods()?;
        let count = method!(m, count);
        let mut value = 0;
        Error::from_code(unsafe { count(m, &mut value) })?;
        Ok(value.max(0) as u32)
    }

    pub fn get(&self, user_id: i64) -> Result<Relationship> {
        let m = self.methods()?;
        let get = method!(m, get);
        let mut raw = sys::DiscordRelationship::default();
        Error::from_code(unsafe { get(m, user_id, &mut raw) })?;
        Ok(Relationship::from(&raw))
    }

    pub fn get_at(&self, index: u32) -> Result<Relationship> {
        let m = self.methods()?;
        let get_at = method!(m, get_at);
        let mut raw = sys::DiscordRelationship::default();
        Error::from_code(unsafe { get_at(m, index, &mut raw) })?;
        Ok(Relationship::from(&raw))
    }

    /// Every relationship passing the current filter.
    pub fn relationships(&self) -> Result<Vec<Relationship>> {
        (0..self.count()?).map(|index| self.get_at(index)).collect()
    }

    /// Fires once the relationship list is loaded, and after it changes wholesale.
    pub fn on_refresh(&self, handler: impl FnMut() + 'static) {
        self.shared.relationship.refresh.subscribe(Box::new(handler));
    }

    pub fn on_relationship_update(&self, handler: impl FnMut(&Relationship) + 'static) {
        self.shared.relationship.update.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn filter_trampoline(
    data: *mut c_void,
    relationship: *mut sys::DiscordRelationship,
) -> bool {
    let (Some(predicate), Some(relationship)) = (
        unsafe { data.cast::<FilterFn<'_>>().as_mut() },
        unsafe { relationship.as_ref() },
    ) else {
        return false;
    };
    predicate(&Relationship::from(relationship))
}

unsafe extern "C" fn on_refresh(event_data: *mut c_void) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.relationship.refresh.emit(|handler| handler());
    }
}

unsafe extern "C" fn on_relationship_update(
    event_data: *mut c_void,
    relationship: *mut sys::DiscordRelationship,
) {
    let Some(relationship) = (unsafe { relationship.as_ref() }) else {
        return;
    };
    if let Some(shared) = CallbackManager::client(event_data) {
        let relationship = Relationship::from(relationship);
        shared.relationship.update.emit(|handler| handler(&relationship));
    }
}
