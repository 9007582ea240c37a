//! GPU compute library adapter.
//!
//! Implements `ComputeLibraryPort` on top of wgpu: acquisition requests a
//! high-performance adapter and a device, release drops them. The async
//! device request is driven to completion with `pollster` so the port
//! stays synchronous.

use nativeprobe_core::{ComputeLibraryPort, ComputeStatus};

/// Bound GPU context: the device/queue pair plus the adapter that served it.
pub struct WgpuHandle {
    device: wgpu::Device,
    queue: wgpu::Queue,
    info: wgpu::AdapterInfo,
}

impl WgpuHandle {
    pub const fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub const fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub const fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.info
    }
}

/// wgpu-backed compute library.
#[derive(Debug, Clone)]
pub struct WgpuComputeLibrary {
    backends: wgpu::Backends,
    power_preference: wgpu::PowerPreference,
}

impl Default for WgpuComputeLibrary {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::PRIMARY,
            power_preference: wgpu::PowerPreference::HighPerformance,
        }
    }
}

impl WgpuComputeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the backends the instance may use.
    #[must_use]
    pub fn with_backends(mut self, backends: wgpu::Backends) -> Self {
        self.backends = backends;
        self
    }

    async fn request(&self) -> Result<WgpuHandle, ComputeStatus> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: self.backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.power_preference,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ComputeStatus::NOT_INITIALIZED)?;

        let info = adapter.get_info();
        tracing::debug!(adapter = %info.name, backend = ?info.backend, "GPU adapter found");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("nativeprobe"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                },
                None,
            )
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, adapter = %info.name, "GPU device request failed");
                ComputeStatus::ALLOC_FAILED
            })?;

        Ok(WgpuHandle {
            device,
            queue,
            info,
        })
    }
}

impl ComputeLibraryPort for WgpuComputeLibrary {
    type Handle = WgpuHandle;

    fn acquire(&self) -> (Option<WgpuHandle>, ComputeStatus) {
        match pollster::block_on(self.request()) {
            Ok(handle) => (Some(handle), ComputeStatus::SUCCESS),
            Err(status) => (None, status),
        }
    }

    fn release(&self, handle: Option<WgpuHandle>) {
        match handle {
            Some(handle) => {
                tracing::debug!(adapter = %handle.info.name, "Destroying GPU device");
                drop(handle);
            }
            None => tracing::debug!("Release of unbound GPU handle is a no-op"),
        }
    }
}
