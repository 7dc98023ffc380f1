use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::internal::utils::buffer_len;
use crate::managers::check_tables;
use crate::types::{ImageDimensions, ImageHandle};

pub struct ImageManager {
    methods: *mut sys::IDiscordImageManager,
    shared: Rc<ClientShared>,
}

impl ImageManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordImageManager,
        events: *mut sys::IDiscordImageEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("ImageManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    fn methods(&self) -> Result<*mut sys::IDiscordImageManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// Downloads the image into the SDK's cache; `refresh` bypasses the cache.
    pub fn fetch(
        &self,
        handle: ImageHandle,
        refresh: bool,
        callback: impl FnOnce(Result<ImageHandle>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let fetch = method!(m, fetch);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            fetch(
                m,
                handle.to_raw(),
                refresh,
                data,
                Some(CallbackManager::cvoid_image_callback),
            )
        };
        Ok(())
    }

    pub fn dimensions(&self, handle: ImageHandle) -> Result<ImageDimensions> {
        let m = self.methods()?;
        let get_dimensions = method!(m, get_dimensions);
        let mut dimensions = sys::DiscordImageDimensions::default();
        Error::from_code(unsafe { get_dimensions(m, handle.to_raw(), &mut dimensions) })?;
        Ok(ImageDimensions::from(dimensions))
    }

    /// Copies the fetched RGBA pixels into `data`.
    pub fn data(&self, handle: ImageHandle, data: &mut [u8]) -> Result<()> {
        let m = self.methods()?;
        let get_data = method!(m, get_data);
        let len = buffer_len(data.len())?;
        Error::from_code(
            unsafe { get_data(m, handle.to_raw(), data.as_mut_ptr(), len) },
        )
    }

    /// Allocates a buffer of `width * height * 4` bytes and fills it.
    pub fn data_vec(&self, handle: ImageHandle) -> Result<Vec<u8>> {
        let dimensions = self.dimensions(handle)?;
        let mut data = vec![0; dimensions.rgba_len()];
        self.data(handle, &mut data)?;
        Ok(data)
    }
}
