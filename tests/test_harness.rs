// tests/test_harness.rs
//! In-process fake of the Discord Game SDK for integration tests.
//!
//! The method tables are implemented with `extern "C"` functions backed by
//! thread-local state, so every test thread gets its own fake. Asynchronous
//! calls queue their completion until the client pumps `run_callbacks`, the
//! way the real SDK does. Managers the fake does not implement hand out empty
//! tables, which surface as `Error::MissingMethod`.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::ffi::{CStr, CString, c_char, c_void};
use std::ptr;

use discord_game_sdk::sys;
use discord_game_sdk::{ClientConfig, Discord, Result};

pub const CLIENT_ID: i64 = 758184866411315221;
pub const CURRENT_USER_ID: i64 = 42;
pub const CREATED_LOBBY_ID: i64 = 1001;

const OK: sys::EDiscordResult = sys::EDiscordResult_DiscordResult_Ok;

type Task = Box<dyn FnOnce()>;

/// Observable state of the fake SDK.
#[derive(Default)]
pub struct FakeSdk {
    /// Status returned by `DiscordCreate`.
    pub create_result: sys::EDiscordResult,
    /// Status returned by `run_callbacks`; anything but `Ok` skips the queue.
    pub run_result: sys::EDiscordResult,
    /// Status delivered to queued completions.
    pub async_result: sys::EDiscordResult,
    pub version: Option<sys::DiscordVersion>,
    pub params: Option<sys::DiscordCreateParams>,
    pub create_calls: u32,
    pub destroy_calls: u32,
    pub run_calls: u32,
    /// Every native call, in order, as `"name"` or `"name(args)"`.
    pub calls: Vec<String>,
    pub log_hook: Option<(sys::EDiscordLogLevel, *mut c_void, sys::DiscordLogHook)>,
    pub activity: Option<sys::DiscordActivity>,
    pub relationships: Vec<sys::DiscordRelationship>,
    filtered: Vec<sys::DiscordRelationship>,
    pub lobby_capacity: u32,
    pub lobby_messages: Vec<(i64, Vec<u8>)>,
    pub files: BTreeMap<String, Vec<u8>>,
    pub self_mute: bool,
    pub local_volumes: BTreeMap<i64, u8>,
    queue: VecDeque<Task>,
}

thread_local! {
    static FAKE: RefCell<FakeSdk> = RefCell::new(FakeSdk::default());
}

pub fn with<R>(f: impl FnOnce(&mut FakeSdk) -> R) -> R {
    FAKE.with_borrow_mut(f)
}

pub fn calls() -> Vec<String> {
    with(|fake| fake.calls.clone())
}

pub fn called(name: &str) -> bool {
    with(|fake| fake.calls.iter().any(|call| call == name))
}

pub fn queued() -> usize {
    with(|fake| fake.queue.len())
}

/// Creates a client against the fake.
pub fn try_client() -> Result<Discord> {
    unsafe { Discord::from_entry_point(fake_create, &ClientConfig::new(CLIENT_ID)) }
}

pub fn client() -> Discord {
    try_client().expect("fake client")
}

/// Parameters the last client handed to `DiscordCreate`.
pub fn params() -> sys::DiscordCreateParams {
    with(|fake| fake.params).expect("no client was created")
}

fn record(call: impl Into<String>) {
    let call = call.into();
    with(|fake| fake.calls.push(call));
}

fn enqueue(task: impl FnOnce() + 'static) {
    with(|fake| fake.queue.push_back(Box::new(task)));
}

fn async_result() -> sys::EDiscordResult {
    with(|fake| fake.async_result)
}

fn queue_result(data: *mut c_void, callback: sys::DiscordResultCallback) {
    let result = async_result();
    enqueue(move || {
        if let Some(callback) = callback {
            unsafe { callback(data, result) };
        }
    });
}

fn leak<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

pub fn fill(buf: &mut [c_char], value: &str) {
    buf.fill(0);
    for (dst, src) in buf.iter_mut().zip(value.bytes()) {
        *dst = src as c_char;
    }
}

pub fn fixed(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

unsafe fn text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

pub fn user(id: i64, username: &str) -> sys::DiscordUser {
    let mut user = sys::DiscordUser::default();
    user.id = id;
    fill(&mut user.username, username);
    fill(&mut user.discriminator, "0001");
    user
}

pub fn relationship(
    kind: sys::EDiscordRelationshipType,
    id: i64,
    username: &str,
) -> sys::DiscordRelationship {
    let mut relationship = sys::DiscordRelationship::default();
    relationship.type_ = kind;
    relationship.user = user(id, username);
    relationship.presence.status = sys::EDiscordStatus_DiscordStatus_Online;
    relationship
}

// Event injection

/// Sends the SDK's log message through whatever hook the client installed.
pub fn emit_log(level: sys::EDiscordLogLevel, message: &str) {
    let Some((min_level, data, Some(hook))) = with(|fake| fake.log_hook) else {
        return;
    };
    if level <= min_level {
        let message = CString::new(message).expect("log message");
        unsafe { hook(data, level, message.as_ptr()) };
    }
}

pub fn fire_current_user_update() {
    let params = params();
    let events = unsafe { *params.user_events };
    if let Some(on_update) = events.on_current_user_update {
        unsafe { on_update(params.event_data) };
    }
}

pub fn fire_activity_join(secret: &str) {
    let params = params();
    let events = unsafe { *params.activity_events };
    let secret = CString::new(secret).expect("secret");
    if let Some(on_join) = events.on_activity_join {
        unsafe { on_join(params.event_data, secret.as_ptr()) };
    }
}

pub fn fire_lobby_message(lobby_id: i64, user_id: i64, data: &[u8]) {
    let params = params();
    let events = unsafe { *params.lobby_events };
    let mut data = data.to_vec();
    if let Some(on_message) = events.on_lobby_message {
        unsafe {
            on_message(
                params.event_data,
                lobby_id,
                user_id,
                data.as_mut_ptr(),
                data.len() as u32,
            )
        };
    }
}

pub fn fire_overlay_toggle(locked: bool) {
    let params = params();
    let events = unsafe { *params.overlay_events };
    if let Some(on_toggle) = events.on_toggle {
        unsafe { on_toggle(params.event_data, locked) };
    }
}

pub fn fire_network_message(peer_id: u64, channel_id: u8, data: &[u8]) {
    let params = params();
    let events = unsafe { *params.network_events };
    let mut data = data.to_vec();
    if let Some(on_message) = events.on_message {
        unsafe {
            on_message(
                params.event_data,
                peer_id,
                channel_id,
                data.as_mut_ptr(),
                data.len() as u32,
            )
        };
    }
}

pub fn fire_entitlement_create(id: i64, sku_id: i64) {
    let params = params();
    let events = unsafe { *params.store_events };
    let mut entitlement = sys::DiscordEntitlement::default();
    entitlement.id = id;
    entitlement.type_ = sys::EDiscordEntitlementType_DiscordEntitlementType_Purchase;
    entitlement.sku_id = sku_id;
    if let Some(on_create) = events.on_entitlement_create {
        unsafe { on_create(params.event_data, &mut entitlement) };
    }
}

// Core

pub unsafe extern "C" fn fake_create(
    version: sys::DiscordVersion,
    params: *mut sys::DiscordCreateParams,
    result: *mut *mut sys::IDiscordCore,
) -> sys::EDiscordResult {
    let status = with(|fake| {
        fake.create_calls += 1;
        fake.version = Some(version);
        fake.params = Some(unsafe { *params });
        fake.create_result
    });
    if status != OK {
        return status;
    }
    unsafe { *result = leak(core_table()) };
    OK
}

fn core_table() -> sys::IDiscordCore {
    sys::IDiscordCore {
        destroy: Some(core_destroy),
        run_callbacks: Some(core_run_callbacks),
        set_log_hook: Some(core_set_log_hook),
        get_application_manager: Some(get_application_manager),
        get_user_manager: Some(get_user_manager),
        get_image_manager: Some(get_image_manager),
        get_activity_manager: Some(get_activity_manager),
        get_relationship_manager: Some(get_relationship_manager),
        get_lobby_manager: Some(get_lobby_manager),
        get_network_manager: Some(get_network_manager),
        get_overlay_manager: Some(get_overlay_manager),
        get_storage_manager: Some(get_storage_manager),
        get_store_manager: Some(get_store_manager),
        get_voice_manager: Some(get_voice_manager),
        get_achievement_manager: Some(get_achievement_manager),
    }
}

unsafe extern "C" fn core_destroy(core: *mut sys::IDiscordCore) {
    with(|fake| fake.destroy_calls += 1);
    drop(unsafe { Box::from_raw(core) });
}

unsafe extern "C" fn core_run_callbacks(_core: *mut sys::IDiscordCore) -> sys::EDiscordResult {
    let status = with(|fake| {
        fake.run_calls += 1;
        fake.run_result
    });
    if status != OK {
        return status;
    }
    // Tasks may call back into the fake, so the state is not borrowed while
    // one runs.
    while let Some(task) = with(|fake| fake.queue.pop_front()) {
        task();
    }
    OK
}

unsafe extern "C" fn core_set_log_hook(
    _core: *mut sys::IDiscordCore,
    min_level: sys::EDiscordLogLevel,
    hook_data: *mut c_void,
    hook: sys::DiscordLogHook,
) {
    record(format!("set_log_hook({min_level})"));
    with(|fake| fake.log_hook = Some((min_level, hook_data, hook)));
}

unsafe extern "C" fn get_application_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordApplicationManager {
    leak(sys::IDiscordApplicationManager {
        validate_or_exit: Some(application_validate_or_exit),
        get_current_locale: Some(application_current_locale),
        get_current_branch: Some(application_current_branch),
        get_oauth2_token: None,
        get_ticket: Some(application_ticket),
    })
}

unsafe extern "C" fn get_user_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordUserManager {
    leak(sys::IDiscordUserManager {
        get_current_user: Some(user_current_user),
        get_user: Some(user_get_user),
        get_current_user_premium_type: Some(user_premium_type),
        current_user_has_flag: Some(user_has_flag),
    })
}

unsafe extern "C" fn get_image_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordImageManager {
    leak(sys::IDiscordImageManager {
        get_dimensions: Some(image_dimensions),
        get_data: Some(image_data),
        ..Default::default()
    })
}

unsafe extern "C" fn get_activity_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordActivityManager {
    leak(sys::IDiscordActivityManager {
        register_command: Some(activity_register_command),
        update_activity: Some(activity_update),
        clear_activity: Some(activity_clear),
        send_invite: Some(activity_send_invite),
        ..Default::default()
    })
}

unsafe extern "C" fn get_relationship_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordRelationshipManager {
    leak(sys::IDiscordRelationshipManager {
        filter: Some(relationship_filter),
        count: Some(relationship_count),
        get: None,
        get_at: Some(relationship_get_at),
    })
}

unsafe extern "C" fn get_lobby_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordLobbyManager {
    leak(sys::IDiscordLobbyManager {
        get_lobby_create_transaction: Some(lobby_create_transaction),
        get_member_update_transaction: Some(lobby_member_transaction),
        create_lobby: Some(lobby_create),
        update_member: Some(lobby_update_member),
        member_count: Some(lobby_member_count),
        get_member_user_id: Some(lobby_member_user_id),
        get_member_user: Some(lobby_member_user),
        send_lobby_message: Some(lobby_send_message),
        get_search_query: Some(lobby_search_query),
        search: Some(lobby_search),
        lobby_count: Some(lobby_count),
        get_lobby_id: Some(lobby_id),
        ..Default::default()
    })
}

unsafe extern "C" fn get_network_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordNetworkManager {
    leak(sys::IDiscordNetworkManager::default())
}

unsafe extern "C" fn get_overlay_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordOverlayManager {
    leak(sys::IDiscordOverlayManager {
        is_enabled: Some(overlay_is_enabled),
        set_locked: Some(overlay_set_locked),
        ..Default::default()
    })
}

unsafe extern "C" fn get_storage_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordStorageManager {
    leak(sys::IDiscordStorageManager {
        read: Some(storage_read),
        read_async: Some(storage_read_async),
        write: Some(storage_write),
        delete_: Some(storage_delete),
        exists: Some(storage_exists),
        count: Some(storage_count),
        stat_at: Some(storage_stat_at),
        get_path: Some(storage_path),
        ..Default::default()
    })
}

unsafe extern "C" fn get_store_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordStoreManager {
    leak(sys::IDiscordStoreManager::default())
}

unsafe extern "C" fn get_voice_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordVoiceManager {
    leak(sys::IDiscordVoiceManager {
        is_self_mute: Some(voice_is_self_mute),
        set_self_mute: Some(voice_set_self_mute),
        get_local_volume: Some(voice_local_volume),
        set_local_volume: Some(voice_set_local_volume),
        ..Default::default()
    })
}

unsafe extern "C" fn get_achievement_manager(
    _core: *mut sys::IDiscordCore,
) -> *mut sys::IDiscordAchievementManager {
    leak(sys::IDiscordAchievementManager {
        set_user_achievement: Some(achievement_set),
        ..Default::default()
    })
}

// Application

unsafe extern "C" fn application_validate_or_exit(
    _manager: *mut sys::IDiscordApplicationManager,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record("validate_or_exit");
    queue_result(data, callback);
}

unsafe extern "C" fn application_current_locale(
    _manager: *mut sys::IDiscordApplicationManager,
    locale: *mut sys::DiscordLocale,
) {
    fill(unsafe { &mut *locale }, "en-US");
}

unsafe extern "C" fn application_current_branch(
    _manager: *mut sys::IDiscordApplicationManager,
    branch: *mut sys::DiscordBranch,
) {
    fill(unsafe { &mut *branch }, "master");
}

unsafe extern "C" fn application_ticket(
    _manager: *mut sys::IDiscordApplicationManager,
    data: *mut c_void,
    callback: Option<unsafe extern "C" fn(*mut c_void, sys::EDiscordResult, *const c_char)>,
) {
    let result = async_result();
    enqueue(move || {
        let ticket = CString::new("signed-ticket").expect("ticket");
        if let Some(callback) = callback {
            unsafe { callback(data, result, ticket.as_ptr()) };
        }
    });
}

// Users

unsafe extern "C" fn user_current_user(
    _manager: *mut sys::IDiscordUserManager,
    current_user: *mut sys::DiscordUser,
) -> sys::EDiscordResult {
    unsafe { *current_user = user(CURRENT_USER_ID, "player") };
    OK
}

unsafe extern "C" fn user_get_user(
    _manager: *mut sys::IDiscordUserManager,
    user_id: sys::DiscordUserId,
    data: *mut c_void,
    callback: Option<unsafe extern "C" fn(*mut c_void, sys::EDiscordResult, *mut sys::DiscordUser)>,
) {
    record(format!("get_user({user_id})"));
    enqueue(move || {
        let Some(callback) = callback else { return };
        if user_id == 0 {
            let status = sys::EDiscordResult_DiscordResult_NotFound;
            unsafe { callback(data, status, ptr::null_mut()) };
        } else {
            let mut found = user(user_id, "friend");
            unsafe { callback(data, OK, &mut found) };
        }
    });
}

unsafe extern "C" fn user_premium_type(
    _manager: *mut sys::IDiscordUserManager,
    premium_type: *mut sys::EDiscordPremiumType,
) -> sys::EDiscordResult {
    unsafe { *premium_type = 7 };
    OK
}

unsafe extern "C" fn user_has_flag(
    _manager: *mut sys::IDiscordUserManager,
    flag: sys::EDiscordUserFlag,
    has_flag: *mut bool,
) -> sys::EDiscordResult {
    unsafe { *has_flag = flag == sys::EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse2 };
    OK
}

// Activities

unsafe extern "C" fn activity_register_command(
    _manager: *mut sys::IDiscordActivityManager,
    command: *const c_char,
) -> sys::EDiscordResult {
    record(format!("register_command({})", unsafe { text(command) }));
    OK
}

unsafe extern "C" fn activity_update(
    _manager: *mut sys::IDiscordActivityManager,
    activity: *mut sys::DiscordActivity,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record("update_activity");
    let activity = unsafe { *activity };
    with(|fake| fake.activity = Some(activity));
    queue_result(data, callback);
}

unsafe extern "C" fn activity_clear(
    _manager: *mut sys::IDiscordActivityManager,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record("clear_activity");
    with(|fake| fake.activity = None);
    queue_result(data, callback);
}

unsafe extern "C" fn activity_send_invite(
    _manager: *mut sys::IDiscordActivityManager,
    user_id: sys::DiscordUserId,
    action: sys::EDiscordActivityActionType,
    content: *const c_char,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    let content = unsafe { text(content) };
    record(format!("send_invite({user_id}, {action}, {content})"));
    queue_result(data, callback);
}

// Relationships

unsafe extern "C" fn relationship_filter(
    _manager: *mut sys::IDiscordRelationshipManager,
    filter_data: *mut c_void,
    filter: Option<unsafe extern "C" fn(*mut c_void, *mut sys::DiscordRelationship) -> bool>,
) {
    let Some(filter) = filter else { return };
    let all = with(|fake| fake.relationships.clone());
    let filtered = all
        .into_iter()
        .filter_map(|mut relationship| {
            unsafe { filter(filter_data, &mut relationship) }.then_some(relationship)
        })
        .collect();
    with(|fake| fake.filtered = filtered);
}

unsafe extern "C" fn relationship_count(
    _manager: *mut sys::IDiscordRelationshipManager,
    count: *mut i32,
) -> sys::EDiscordResult {
    unsafe { *count = with(|fake| fake.filtered.len() as i32) };
    OK
}

unsafe extern "C" fn relationship_get_at(
    _manager: *mut sys::IDiscordRelationshipManager,
    index: u32,
    relationship: *mut sys::DiscordRelationship,
) -> sys::EDiscordResult {
    match with(|fake| fake.filtered.get(index as usize).copied()) {
        Some(found) => {
            unsafe { *relationship = found };
            OK
        }
        None => sys::EDiscordResult_DiscordResult_NotFound,
    }
}

// Lobbies

fn lobby_transaction_table() -> sys::IDiscordLobbyTransaction {
    sys::IDiscordLobbyTransaction {
        set_capacity: Some(lobby_tx_set_capacity),
        set_metadata: Some(lobby_tx_set_metadata),
        ..Default::default()
    }
}

unsafe extern "C" fn lobby_tx_set_capacity(
    _transaction: *mut sys::IDiscordLobbyTransaction,
    capacity: u32,
) -> sys::EDiscordResult {
    record(format!("lobby_tx.set_capacity({capacity})"));
    with(|fake| fake.lobby_capacity = capacity);
    OK
}

unsafe extern "C" fn lobby_tx_set_metadata(
    _transaction: *mut sys::IDiscordLobbyTransaction,
    key: *const c_char,
    value: *const c_char,
) -> sys::EDiscordResult {
    let (key, value) = unsafe { (text(key), text(value)) };
    record(format!("lobby_tx.set_metadata({key}={value})"));
    OK
}

unsafe extern "C" fn member_tx_set_metadata(
    _transaction: *mut sys::IDiscordLobbyMemberTransaction,
    key: *const c_char,
    value: *const c_char,
) -> sys::EDiscordResult {
    let (key, value) = unsafe { (text(key), text(value)) };
    record(format!("member_tx.set_metadata({key}={value})"));
    OK
}

unsafe extern "C" fn query_limit(
    _query: *mut sys::IDiscordLobbySearchQuery,
    limit: u32,
) -> sys::EDiscordResult {
    record(format!("query.limit({limit})"));
    OK
}

unsafe extern "C" fn lobby_create_transaction(
    _manager: *mut sys::IDiscordLobbyManager,
    transaction: *mut *mut sys::IDiscordLobbyTransaction,
) -> sys::EDiscordResult {
    unsafe { *transaction = leak(lobby_transaction_table()) };
    OK
}

unsafe extern "C" fn lobby_member_transaction(
    _manager: *mut sys::IDiscordLobbyManager,
    _lobby_id: sys::DiscordLobbyId,
    _user_id: sys::DiscordUserId,
    transaction: *mut *mut sys::IDiscordLobbyMemberTransaction,
) -> sys::EDiscordResult {
    let table = sys::IDiscordLobbyMemberTransaction {
        set_metadata: Some(member_tx_set_metadata),
        delete_metadata: None,
    };
    unsafe { *transaction = leak(table) };
    OK
}

unsafe extern "C" fn lobby_create(
    _manager: *mut sys::IDiscordLobbyManager,
    transaction: *mut sys::IDiscordLobbyTransaction,
    data: *mut c_void,
    callback: sys::DiscordLobbyCallback,
) {
    record("create_lobby");
    assert!(!transaction.is_null(), "create_lobby without a transaction");
    drop(unsafe { Box::from_raw(transaction) });
    let result = async_result();
    let capacity = with(|fake| fake.lobby_capacity);
    enqueue(move || {
        let mut lobby = sys::DiscordLobby::default();
        lobby.id = CREATED_LOBBY_ID;
        lobby.type_ = sys::EDiscordLobbyType_DiscordLobbyType_Private;
        lobby.owner_id = CURRENT_USER_ID;
        lobby.capacity = capacity;
        fill(&mut lobby.secret, "lobby-secret");
        if let Some(callback) = callback {
            unsafe { callback(data, result, &mut lobby) };
        }
    });
}

unsafe extern "C" fn lobby_update_member(
    _manager: *mut sys::IDiscordLobbyManager,
    lobby_id: sys::DiscordLobbyId,
    user_id: sys::DiscordUserId,
    transaction: *mut sys::IDiscordLobbyMemberTransaction,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record(format!("update_member({lobby_id}, {user_id})"));
    drop(unsafe { Box::from_raw(transaction) });
    queue_result(data, callback);
}

unsafe extern "C" fn lobby_member_count(
    _manager: *mut sys::IDiscordLobbyManager,
    _lobby_id: sys::DiscordLobbyId,
    count: *mut i32,
) -> sys::EDiscordResult {
    unsafe { *count = 2 };
    OK
}

unsafe extern "C" fn lobby_member_user_id(
    _manager: *mut sys::IDiscordLobbyManager,
    _lobby_id: sys::DiscordLobbyId,
    index: i32,
    user_id: *mut sys::DiscordUserId,
) -> sys::EDiscordResult {
    unsafe { *user_id = 500 + i64::from(index) };
    OK
}

unsafe extern "C" fn lobby_member_user(
    _manager: *mut sys::IDiscordLobbyManager,
    _lobby_id: sys::DiscordLobbyId,
    user_id: sys::DiscordUserId,
    member: *mut sys::DiscordUser,
) -> sys::EDiscordResult {
    unsafe { *member = user(user_id, &format!("member{user_id}")) };
    OK
}

unsafe extern "C" fn lobby_send_message(
    _manager: *mut sys::IDiscordLobbyManager,
    lobby_id: sys::DiscordLobbyId,
    bytes: *mut u8,
    len: u32,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    let message = unsafe { std::slice::from_raw_parts(bytes, len as usize) }.to_vec();
    with(|fake| fake.lobby_messages.push((lobby_id, message)));
    queue_result(data, callback);
}

unsafe extern "C" fn lobby_search_query(
    _manager: *mut sys::IDiscordLobbyManager,
    query: *mut *mut sys::IDiscordLobbySearchQuery,
) -> sys::EDiscordResult {
    let table = sys::IDiscordLobbySearchQuery {
        limit: Some(query_limit),
        ..Default::default()
    };
    unsafe { *query = leak(table) };
    OK
}

unsafe extern "C" fn lobby_search(
    _manager: *mut sys::IDiscordLobbyManager,
    query: *mut sys::IDiscordLobbySearchQuery,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record("search");
    drop(unsafe { Box::from_raw(query) });
    queue_result(data, callback);
}

unsafe extern "C" fn lobby_count(_manager: *mut sys::IDiscordLobbyManager, count: *mut i32) {
    unsafe { *count = 2 };
}

unsafe extern "C" fn lobby_id(
    _manager: *mut sys::IDiscordLobbyManager,
    index: i32,
    lobby_id: *mut sys::DiscordLobbyId,
) -> sys::EDiscordResult {
    if !(0..2).contains(&index) {
        return sys::EDiscordResult_DiscordResult_NotFound;
    }
    unsafe { *lobby_id = 2000 + i64::from(index) };
    OK
}

// Overlay

unsafe extern "C" fn overlay_is_enabled(
    _manager: *mut sys::IDiscordOverlayManager,
    enabled: *mut bool,
) {
    unsafe { *enabled = true };
}

unsafe extern "C" fn overlay_set_locked(
    _manager: *mut sys::IDiscordOverlayManager,
    locked: bool,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record(format!("overlay.set_locked({locked})"));
    queue_result(data, callback);
}

// Storage

unsafe extern "C" fn storage_read(
    _manager: *mut sys::IDiscordStorageManager,
    name: *const c_char,
    data: *mut u8,
    len: u32,
    read: *mut u32,
) -> sys::EDiscordResult {
    let name = unsafe { text(name) };
    let Some(contents) = with(|fake| fake.files.get(&name).cloned()) else {
        return sys::EDiscordResult_DiscordResult_NotFound;
    };
    let count = contents.len().min(len as usize);
    unsafe {
        ptr::copy_nonoverlapping(contents.as_ptr(), data, count);
        *read = count as u32;
    }
    OK
}

unsafe extern "C" fn storage_read_async(
    _manager: *mut sys::IDiscordStorageManager,
    name: *const c_char,
    data: *mut c_void,
    callback: sys::DiscordDataCallback,
) {
    let name = unsafe { text(name) };
    enqueue(move || {
        let Some(callback) = callback else { return };
        match with(|fake| fake.files.get(&name).cloned()) {
            Some(mut contents) => unsafe {
                callback(data, OK, contents.as_mut_ptr(), contents.len() as u32)
            },
            None => unsafe {
                let status = sys::EDiscordResult_DiscordResult_NotFound;
                callback(data, status, ptr::null_mut(), 0)
            },
        }
    });
}

unsafe extern "C" fn storage_write(
    _manager: *mut sys::IDiscordStorageManager,
    name: *const c_char,
    data: *mut u8,
    len: u32,
) -> sys::EDiscordResult {
    let name = unsafe { text(name) };
    let contents = unsafe { std::slice::from_raw_parts(data, len as usize) }.to_vec();
    with(|fake| fake.files.insert(name, contents));
    OK
}

unsafe extern "C" fn storage_delete(
    _manager: *mut sys::IDiscordStorageManager,
    name: *const c_char,
) -> sys::EDiscordResult {
    let name = unsafe { text(name) };
    match with(|fake| fake.files.remove(&name)) {
        Some(_) => OK,
        None => sys::EDiscordResult_DiscordResult_NotFound,
    }
}

unsafe extern "C" fn storage_exists(
    _manager: *mut sys::IDiscordStorageManager,
    name: *const c_char,
    exists: *mut bool,
) -> sys::EDiscordResult {
    let name = unsafe { text(name) };
    unsafe { *exists = with(|fake| fake.files.contains_key(&name)) };
    OK
}

unsafe extern "C" fn storage_count(_manager: *mut sys::IDiscordStorageManager, count: *mut i32) {
    unsafe { *count = with(|fake| fake.files.len() as i32) };
}

unsafe extern "C" fn storage_stat_at(
    _manager: *mut sys::IDiscordStorageManager,
    index: i32,
    stat: *mut sys::DiscordFileStat,
) -> sys::EDiscordResult {
    let entry = with(|fake| {
        fake.files
            .iter()
            .nth(index as usize)
            .map(|(name, contents)| (name.clone(), contents.len()))
    });
    let Some((name, size)) = entry else {
        return sys::EDiscordResult_DiscordResult_NotFound;
    };
    let stat = unsafe { &mut *stat };
    fill(&mut stat.filename, &name);
    stat.size = size as u64;
    stat.last_modified = 1_700_000_000;
    OK
}

unsafe extern "C" fn storage_path(
    _manager: *mut sys::IDiscordStorageManager,
    path: *mut sys::DiscordPath,
) -> sys::EDiscordResult {
    fill(unsafe { &mut *path }, "/tmp/discord-storage");
    OK
}

// Images

/// Every fetched avatar is 2x3 pixels; id 0 was never fetched.
pub const IMAGE_WIDTH: u32 = 2;
pub const IMAGE_HEIGHT: u32 = 3;

unsafe extern "C" fn image_dimensions(
    _manager: *mut sys::IDiscordImageManager,
    handle: sys::DiscordImageHandle,
    dimensions: *mut sys::DiscordImageDimensions,
) -> sys::EDiscordResult {
    if handle.id == 0 {
        return sys::EDiscordResult_DiscordResult_NotFound;
    }
    unsafe {
        *dimensions = sys::DiscordImageDimensions {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
        }
    };
    OK
}

unsafe extern "C" fn image_data(
    _manager: *mut sys::IDiscordImageManager,
    handle: sys::DiscordImageHandle,
    data: *mut u8,
    data_length: u32,
) -> sys::EDiscordResult {
    if handle.id == 0 {
        return sys::EDiscordResult_DiscordResult_NotFound;
    }
    if data_length < IMAGE_WIDTH * IMAGE_HEIGHT * 4 {
        return sys::EDiscordResult_DiscordResult_InvalidPayload;
    }
    let pixels = unsafe { std::slice::from_raw_parts_mut(data, data_length as usize) };
    for (i, byte) in pixels.iter_mut().enumerate() {
        *byte = i as u8;
    }
    OK
}

// Voice

unsafe extern "C" fn voice_is_self_mute(
    _manager: *mut sys::IDiscordVoiceManager,
    mute: *mut bool,
) -> sys::EDiscordResult {
    unsafe { *mute = with(|fake| fake.self_mute) };
    OK
}

unsafe extern "C" fn voice_set_self_mute(
    _manager: *mut sys::IDiscordVoiceManager,
    mute: bool,
) -> sys::EDiscordResult {
    with(|fake| fake.self_mute = mute);
    OK
}

unsafe extern "C" fn voice_local_volume(
    _manager: *mut sys::IDiscordVoiceManager,
    user_id: sys::DiscordSnowflake,
    volume: *mut u8,
) -> sys::EDiscordResult {
    unsafe { *volume = with(|fake| fake.local_volumes.get(&user_id).copied().unwrap_or(100)) };
    OK
}

unsafe extern "C" fn voice_set_local_volume(
    _manager: *mut sys::IDiscordVoiceManager,
    user_id: sys::DiscordSnowflake,
    volume: u8,
) -> sys::EDiscordResult {
    if volume > 200 {
        return sys::EDiscordResult_DiscordResult_InvalidPayload;
    }
    with(|fake| fake.local_volumes.insert(user_id, volume));
    OK
}

// Achievements

unsafe extern "C" fn achievement_set(
    _manager: *mut sys::IDiscordAchievementManager,
    achievement_id: sys::DiscordSnowflake,
    percent_complete: u8,
    data: *mut c_void,
    callback: sys::DiscordResultCallback,
) {
    record(format!(
        "set_user_achievement({achievement_id}, {percent_complete})"
    ));
    if percent_complete > 100 {
        enqueue(move || {
            if let Some(callback) = callback {
                unsafe { callback(data, sys::EDiscordResult_DiscordResult_InvalidPayload) };
            }
        });
        return;
    }
    queue_result(data, callback);
}
