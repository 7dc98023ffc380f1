use std::ffi::CString;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::internal::utils::{buffer_len, read_fixed};
use crate::managers::check_tables;
use crate::types::FileStat;

/// Per-user file storage, synced to the cloud by the Discord client.
pub struct StorageManager {
    methods: *mut sys::IDiscordStorageManager,
    shared: Rc<ClientShared>,
}

impl StorageManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordStorageManager,
        events: *mut sys::IDiscordStorageEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("StorageManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    fn methods(&self) -> Result<*mut sys::IDiscordStorageManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// Reads `name` into `buffer` and returns the number of bytes read.
    pub fn read(&self, name: &str, buffer: &mut [u8]) -> Result<u32> {
        let m = self.methods()?;
        let read = method!(m, read);
        let name = CString::new(name)?;
        let len = buffer_len(buffer.len())?;
        let mut read_len = 0;
        Error::from_code(unsafe {
            read(m, name.as_ptr(), buffer.as_mut_ptr(), len, &mut read_len)
        })?;
        Ok(read_len)
    }

    pub fn read_async(
        &self,
        name: &str,
        callback: impl FnOnce(Result<Vec<u8>>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let read_async = method!(m, read_async);
        let name = CString::new(name)?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            read_async(
                m,
                name.as_ptr(),
                data,
                Some(CallbackManager::cvoid_data_callback),
            )
        };
        Ok(())
    }

    /// Reads `length` bytes of `name` starting at `offset`.
    pub fn read_async_partial(
        &self,
        name: &str,
        offset: u64,
        length: u64,
        callback: impl FnOnce(Result<Vec<u8>>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let read_async_partial = method!(m, read_async_partial);
        let name = CString::new(name)?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            read_async_partial(
                m,
                name.as_ptr(),
                offset,
                length,
                data,
                Some(CallbackManager::cvoid_data_callback),
            )
        };
        Ok(())
    }

    pub fn write(&self, name: &str, buffer: &[u8]) -> Result<()> {
        let m = self.methods()?;
        let write = method!(m, write);
        let name = CString::new(name)?;
        let len = buffer_len(buffer.len())?;
        Error::from_code(
            unsafe { write(m, name.as_ptr(), buffer.as_ptr().cast_mut(), len) },
        )
    }

    pub fn write_async(
        &self,
        name: &str,
        buffer: &[u8],
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let write_async = method!(m, write_async);
        let name = CString::new(name)?;
        let len = buffer_len(buffer.len())?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            write_async(
                m,
                name.as_ptr(),
                buffer.as_ptr().cast_mut(),
                len,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let m = self.methods()?;
        let delete = method!(m, delete_);
        let name = CString::new(name)?;
        Error::from_code(unsafe { delete(m, name.as_ptr()) })
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        let m = self.methods()?;
        let exists = method!(m, exists);
        let name = CString::new(name)?;
        let mut found = false;
        Error::from_code(unsafe { exists(m, name.as_ptr(), &mut found) })?;
        Ok(found)
    }

    pub fn count(&self) -> Result<i32> {
        let m = self.methods()?;
        let count = method!(m, count);
        let mut value = 0;
        unsafe { count(m, &mut value) };
        Ok(value)
    }

    pub fn stat(&self, name: &str) -> Result<FileStat> {
        let m = self.methods()?;
        let stat = method!(m, stat);
        let name = CString::new(name)?;
        let mut raw = sys::DiscordFileStat::default();
        Error::from_code(unsafe { stat(m, name.as_ptr(), &mut raw) })?;
        Ok(FileStat::from(&raw))
    }

    pub fn stat_at(&self, index: i32) -> Result<FileStat> {
        let m = self.methods()?;
        let stat_at = method!(m, stat_at);
        let mut raw = sys::DiscordFileStat::default();
        Error::from_code(unsafe { stat_at(m, index, &mut raw) })?;
        Ok(FileStat::from(&raw))
    }

    /// Stats every stored file.
    pub fn files(&self) -> Result<Vec<FileStat>> {
        (0..self.count()?).map(|index| self.stat_at(index)).collect()
    }

    /// Local directory backing the storage.
    pub fn path(&self) -> Result<String> {
        let m = self.methods()?;
        let get_path = method!(m, get_path);
        let mut path: sys::DiscordPath = [0; 4096];
        Error::from_code(unsafe { get_path(m, &mut path) })?;
        Ok(read_fixed(&path))
    }
}
