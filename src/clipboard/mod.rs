pub mod backend;
pub mod command;
pub mod darwin;
pub mod wayland;
pub mod x11;

pub use backend::{BackendKind, ClipboardBackend};
pub use command::{CommandRunner, SystemRunner};
pub use darwin::DarwinBackend;
pub use wayland::WaylandBackend;
pub use x11::X11Backend;

/// Create a clipboard backend from a backend identifier ("wayland", "x11", "darwin")
/// Unrecognized identifiers get the Wayland backend
pub fn create_backend(id: &str) -> Box<dyn ClipboardBackend> {
    let backend: Box<dyn ClipboardBackend> = match BackendKind::from_identifier(id) {
        BackendKind::Wayland => Box::new(WaylandBackend::new()),
        BackendKind::X11 => Box::new(X11Backend::new()),
        BackendKind::Darwin => Box::new(DarwinBackend::new()),
    };

    log::debug!("Using {} clipboard backend", backend.name());
    backend
}
